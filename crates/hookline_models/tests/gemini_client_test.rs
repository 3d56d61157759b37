#![cfg(feature = "gemini")]

// Gemini client tests.
//
// Wire-format tests run offline. Tests that hit the real API are marked with
// `#[cfg_attr(not(feature = "api"), ignore)]` and need GEMINI_API_KEY.

use hookline_core::EncodedPart;
use hookline_interface::{ContentPart, GenerativeService, ResponseContract, ServiceRequest};
use hookline_models::{GeminiClient, GeminiSettings, GenerateContentRequest, Part};
use serde_json::json;

fn request(contract: ResponseContract) -> ServiceRequest {
    ServiceRequest {
        parts: vec![
            ContentPart::text("Describe the hook"),
            ContentPart::Media(EncodedPart::Remote {
                uri: "https://generativelanguage.googleapis.com/v1beta/files/xyz".to_string(),
                mime_type: "video/mp4".to_string(),
            }),
        ],
        system_instruction: "Reply with JSON only.".to_string(),
        contract,
    }
}

//
// ─── OFFLINE ────────────────────────────────────────────────────────────────────
//

#[test]
fn test_request_never_combines_schema_and_search() {
    let contracts = [
        ResponseContract::StrictSchema {
            schema: json!({"type": "OBJECT"}),
        },
        ResponseContract::SearchAugmented,
    ];

    for contract in contracts {
        let wire = GenerateContentRequest::from_service_request(&request(contract));
        let has_schema = wire
            .generation_config
            .as_ref()
            .and_then(|c| c.response_schema.as_ref())
            .is_some();
        assert!(has_schema != wire.tools.is_some());
    }
}

#[test]
fn test_remote_part_becomes_file_data() {
    let wire = GenerateContentRequest::from_service_request(&request(
        ResponseContract::SearchAugmented,
    ));
    let parts = &wire.contents[0].parts;
    assert_eq!(parts.len(), 2);
    assert!(matches!(&parts[0], Part::Text { text } if text == "Describe the hook"));
    assert!(matches!(&parts[1], Part::FileData { file_data } if file_data.mime_type == "video/mp4"));
}

#[test]
fn test_blank_system_instruction_is_omitted() -> anyhow::Result<()> {
    let mut req = request(ResponseContract::SearchAugmented);
    req.system_instruction = "  ".to_string();
    let value = serde_json::to_value(GenerateContentRequest::from_service_request(&req))?;
    assert!(value.get("systemInstruction").is_none());
    Ok(())
}

#[test]
fn test_settings_deserialize_with_defaults() -> anyhow::Result<()> {
    let settings: GeminiSettings = serde_json::from_value(json!({"model": "gemini-2.5-pro"}))?;
    assert_eq!(settings.model, "gemini-2.5-pro");
    assert_eq!(settings.base_url, GeminiSettings::default().base_url);
    Ok(())
}

#[test]
fn test_client_reports_model_and_provider() -> anyhow::Result<()> {
    let settings = GeminiSettings {
        model: "gemini-2.5-pro".to_string(),
        ..Default::default()
    };
    let client = GeminiClient::with_settings("key", settings)?;
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-2.5-pro");
    Ok(())
}

#[test]
fn test_empty_key_is_rejected() {
    let err = GeminiClient::new("").unwrap_err();
    assert_eq!(err.user_message(), "connection failed");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() -> anyhow::Result<()> {
    let settings = GeminiSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    };
    let client = GeminiClient::with_settings("key", settings)?;
    let err = client
        .generate(&request(ResponseContract::SearchAugmented))
        .await
        .unwrap_err();
    assert!(err.status_code().is_none());
    assert_eq!(err.user_message(), "connection failed");
    Ok(())
}

//
// ─── LIVE API ───────────────────────────────────────────────────────────────────
//

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_search_augmented_text() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?;
    let req = ServiceRequest {
        parts: vec![ContentPart::text(
            "List one trending topic in home cooking as a JSON array of strings.",
        )],
        system_instruction: "Reply with JSON only.".to_string(),
        contract: ResponseContract::SearchAugmented,
    };
    let text = client.generate(&req).await?;
    assert!(!text.trim().is_empty());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_live_inline_image_upload_round_trip() -> anyhow::Result<()> {
    use hookline_core::{InputFile, MediaKind};
    use hookline_interface::{FileService, FileState};

    let _ = dotenvy::dotenv();
    let client = GeminiClient::new(std::env::var("GEMINI_API_KEY")?)?;
    // 1x1 transparent PNG
    let png: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];
    let file = InputFile::new(
        "pixel.png",
        "image/png",
        MediaKind::Image,
        bytes::Bytes::from_static(png),
    );

    let uploaded = client.upload(&file).await?;
    assert!(!uploaded.name.is_empty());
    let status = client.status(&uploaded.name).await?;
    assert_ne!(status.state, FileState::Failed);
    Ok(())
}
