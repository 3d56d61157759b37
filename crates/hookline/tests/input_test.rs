//! Tests for reading selected files.

use hookline::{
    AnalysisErrorKind, MediaKind, check_total_size, load_input_file, load_input_files,
};

#[tokio::test]
async fn test_image_is_classified_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latte.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

    let file = load_input_file(&path).await.unwrap();
    assert_eq!(file.name(), "latte.png");
    assert_eq!(file.mime_type(), "image/png");
    assert_eq!(file.kind(), MediaKind::Image);
    assert_eq!(file.size(), 4);
}

#[tokio::test]
async fn test_video_is_classified_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, vec![0u8; 16]).unwrap();

    let file = load_input_file(&path).await.unwrap();
    assert_eq!(file.kind(), MediaKind::Video);
    assert_eq!(file.mime_type(), "video/mp4");
}

#[tokio::test]
async fn test_text_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "not media").unwrap();

    let err = load_input_file(&path).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_missing_file_is_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gone.jpg");

    let err = load_input_file(&path).await.unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::Encoding(_)));
}

#[tokio::test]
async fn test_batch_keeps_selection_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let names = ["b.jpg", "a.webp", "c.mov"];
    for name in names {
        std::fs::write(dir.path().join(name), [1u8, 2, 3])?;
    }
    let paths: Vec<_> = names.iter().map(|n| dir.path().join(n)).collect();

    let files = load_input_files(&paths).await?;
    let loaded: Vec<_> = files.iter().map(|f| f.name().as_str()).collect();
    assert_eq!(loaded, names);
    Ok(())
}

#[tokio::test]
async fn test_batch_stops_at_first_bad_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::write(dir.path().join("ok.jpg"), [1u8])?;
    std::fs::write(dir.path().join("bad.pdf"), [1u8])?;

    let paths = [dir.path().join("ok.jpg"), dir.path().join("bad.pdf")];
    let err = load_input_files(&paths).await.unwrap_err();
    assert!(err.is_validation());
    Ok(())
}

#[tokio::test]
async fn test_size_ceiling_checked_from_metadata() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let paths = [dir.path().join("one.mp4"), dir.path().join("two.mp4")];
    for path in &paths {
        std::fs::write(path, vec![0u8; 6])?;
    }

    assert_eq!(check_total_size(&paths, 12).await?, 12);

    let err = check_total_size(&paths, 11).await.unwrap_err();
    assert!(err.is_validation());
    assert!(err.user_message().contains("12 bytes"));
    Ok(())
}

#[tokio::test]
async fn test_size_check_on_missing_file_is_encoding_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = check_total_size(&[dir.path().join("gone.mp4")], 100)
        .await
        .unwrap_err();
    assert!(matches!(err.kind, AnalysisErrorKind::Encoding(_)));
}
