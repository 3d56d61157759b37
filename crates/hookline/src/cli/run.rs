//! Command handlers.

use std::path::PathBuf;
use std::sync::Arc;

use hookline::{
    ConfigError, HooklineConfig, HooklineResult, OperationMode, PlatformTarget, RequestConfig,
    RequestConfigBuilder, check_total_size, load_input_files, render_human, render_json,
};
use tracing::{info, warn};

use super::commands::{Cli, Commands, OutputFormat, SharedContext, Targeting};
use super::progress::StderrProgress;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The result was printed
    Completed,
    /// Ctrl-C arrived first
    Cancelled,
}

/// One request worth of resolved CLI input.
struct Plan {
    mode: OperationMode,
    platform: PlatformTarget,
    request: RequestConfig,
    files: Vec<PathBuf>,
}

/// Run the parsed command line.
pub async fn execute(cli: Cli) -> HooklineResult<RunStatus> {
    let Cli {
        command,
        api_key,
        config,
        model,
        format,
        ..
    } = cli;

    let mut settings = match &config {
        Some(path) => HooklineConfig::from_file(path)?,
        None => HooklineConfig::load()?,
    };
    if let Some(model) = model {
        settings.service.model = model;
    }

    let api_key = resolve_api_key(api_key)?;
    let orchestrator = settings
        .gemini_orchestrator(api_key)?
        .with_observer(Arc::new(StderrProgress));

    let plan = plan(command)?;
    check_total_size(&plan.files, settings.limits.max_total_bytes).await?;
    let files = load_input_files(&plan.files).await?;
    info!(mode = %plan.mode, platform = %plan.platform, files = files.len(), "Running request");

    let outcome = tokio::select! {
        outcome = orchestrator.run(&files, plan.mode, plan.platform, &plan.request) => outcome?,
        _ = tokio::signal::ctrl_c() => {
            warn!("Cancelled by user");
            return Ok(RunStatus::Cancelled);
        }
    };

    let text = match format {
        OutputFormat::Human => render_human(&outcome),
        OutputFormat::Json => render_json(&outcome)?,
    };
    println!("{}", text);
    Ok(RunStatus::Completed)
}

fn resolve_api_key(flag: Option<String>) -> HooklineResult<String> {
    flag.filter(|key| !key.trim().is_empty())
        .or_else(|| std::env::var("GEMINI_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| ConfigError::new("No API key: pass --api-key or set GEMINI_API_KEY").into())
}

fn plan(command: Commands) -> HooklineResult<Plan> {
    let mut builder = RequestConfig::builder();
    let (mode, platform, files) = match command {
        Commands::Generate {
            platform,
            goal,
            style,
            targeting,
            context,
            files,
        } => {
            builder
                .goal(goal.unwrap_or_default())
                .style(style.unwrap_or_default());
            apply_targeting(&mut builder, targeting);
            apply_context(&mut builder, context);
            (OperationMode::Generate, platform.into(), files)
        }
        Commands::Refine {
            text,
            platform,
            keywords,
            context,
        } => {
            builder
                .original_text(text)
                .keywords(keywords.unwrap_or_default());
            apply_context(&mut builder, context);
            (OperationMode::Refine, platform.into(), Vec::new())
        }
        Commands::Spy {
            platform,
            targeting,
            context,
            files,
        } => {
            apply_targeting(&mut builder, targeting);
            apply_context(&mut builder, context);
            (OperationMode::CompetitorSpy, platform.into(), files)
        }
        Commands::Trends {
            niche,
            platform,
            brand_guidelines,
        } => {
            builder
                .niche(niche)
                .brand_guidelines(brand_guidelines.unwrap_or_default());
            (OperationMode::TrendHunter, platform.into(), Vec::new())
        }
    };

    let request = builder
        .build()
        .map_err(|e| ConfigError::new(format!("Invalid request options: {}", e)))?;
    Ok(Plan {
        mode,
        platform,
        request,
        files,
    })
}

fn apply_targeting(builder: &mut RequestConfigBuilder, targeting: Targeting) {
    builder
        .geography(targeting.geography.unwrap_or_default())
        .audience(targeting.audience.unwrap_or_default())
        .language(targeting.language.unwrap_or_default())
        .demographics(targeting.demographics.unwrap_or_default());
}

fn apply_context(builder: &mut RequestConfigBuilder, context: SharedContext) {
    builder
        .live_trends(context.live_trends)
        .brand_guidelines(context.brand_guidelines.unwrap_or_default());
}
