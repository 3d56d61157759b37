//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use hookline::PlatformTarget;
use std::path::PathBuf;

/// Hookline - AI captions, hashtags and virality scores for social media content
#[derive(Parser, Debug)]
#[command(name = "hookline")]
#[command(about = "AI captions, hashtags and virality scores for social media content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini API key (defaults to GEMINI_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Configuration file (defaults to the layered hookline.toml lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model override
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate captions, hashtags and a virality score for new content
    Generate {
        /// Target platform
        #[arg(long, value_enum, default_value = "instagram")]
        platform: Platform,

        /// What the post should achieve
        #[arg(long)]
        goal: Option<String>,

        /// Tone of voice
        #[arg(long)]
        style: Option<String>,

        #[command(flatten)]
        targeting: Targeting,

        #[command(flatten)]
        context: SharedContext,

        /// Images or videos to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Polish a draft without changing its meaning
    Refine {
        /// Draft text
        #[arg(long)]
        text: String,

        /// Platform the draft is written for
        #[arg(long, value_enum, default_value = "instagram")]
        platform: Platform,

        /// Keywords to weave in
        #[arg(long)]
        keywords: Option<String>,

        #[command(flatten)]
        context: SharedContext,
    },

    /// Extract the formula shared by several competitor posts
    Spy {
        /// Platform the posts were published on
        #[arg(long, value_enum, default_value = "instagram")]
        platform: Platform,

        #[command(flatten)]
        targeting: Targeting,

        #[command(flatten)]
        context: SharedContext,

        /// Competitor images or videos
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Find five live trends in a niche
    Trends {
        /// Niche to research
        #[arg(long)]
        niche: String,

        /// Platform to focus the search on
        #[arg(long, value_enum, default_value = "instagram")]
        platform: Platform,

        /// Brand rules the ideas must respect
        #[arg(long)]
        brand_guidelines: Option<String>,
    },
}

/// Audience targeting flags
#[derive(Args, Debug, Default)]
pub struct Targeting {
    /// Target region
    #[arg(long)]
    pub geography: Option<String>,

    /// Target audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Output language
    #[arg(long)]
    pub language: Option<String>,

    /// Demographic detail
    #[arg(long)]
    pub demographics: Option<String>,
}

/// Flags shared by the analysis commands
#[derive(Args, Debug, Default)]
pub struct SharedContext {
    /// Research live trends before answering
    #[arg(long)]
    pub live_trends: bool,

    /// Brand rules the output must never violate
    #[arg(long)]
    pub brand_guidelines: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// Pretty JSON
    Json,
}

/// Platform choices
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Instagram
    Instagram,
    /// TikTok
    Tiktok,
    /// YouTube
    Youtube,
    /// LinkedIn
    Linkedin,
    /// Twitter/X
    #[value(alias = "x")]
    Twitter,
    /// Facebook
    Facebook,
}

impl From<Platform> for PlatformTarget {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Instagram => PlatformTarget::Instagram,
            Platform::Tiktok => PlatformTarget::TikTok,
            Platform::Youtube => PlatformTarget::YouTube,
            Platform::Linkedin => PlatformTarget::LinkedIn,
            Platform::Twitter => PlatformTarget::Twitter,
            Platform::Facebook => PlatformTarget::Facebook,
        }
    }
}
