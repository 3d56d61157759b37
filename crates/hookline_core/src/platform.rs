//! Social platform targets.

use serde::{Deserialize, Serialize};

/// Social platform the content is being prepared for.
///
/// Only affects prompt wording.
///
/// # Examples
///
/// ```
/// use hookline_core::PlatformTarget;
///
/// assert_eq!(format!("{}", PlatformTarget::Twitter), "Twitter/X");
/// assert_eq!(PlatformTarget::default(), PlatformTarget::Instagram);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PlatformTarget {
    /// Instagram (feed, reels, stories)
    #[default]
    #[display("Instagram")]
    Instagram,
    /// TikTok
    #[display("TikTok")]
    TikTok,
    /// YouTube (long form and shorts)
    #[display("YouTube")]
    YouTube,
    /// LinkedIn
    #[display("LinkedIn")]
    LinkedIn,
    /// Twitter / X
    #[display("Twitter/X")]
    Twitter,
    /// Facebook
    #[display("Facebook")]
    Facebook,
}
