//! Configuration for the viewer.
//!
//! Front ends build a [`ViewerConfig`] (usually through
//! [`ViewerConfigBuilder`]) and pass it to the viewer session. All fields have
//! defaults, so an empty builder yields a working configuration.

use crate::discovery::default_extensions;
use crate::error::{CoreError, CoreResult};

/// Whether the probe document is logged (at debug level) after each probe.
pub const DEFAULT_LOG_DIAGNOSTICS: bool = true;

/// Settings for selecting, probing and displaying one media file.
///
/// # Examples
///
/// ```rust
/// use mfinfo_core::config::ViewerConfigBuilder;
///
/// let config = ViewerConfigBuilder::new()
///     .extensions(["mp4", "mkv"])
///     .log_diagnostics(false)
///     .build();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.extensions, vec!["mp4", "mkv"]);
/// ```
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Accepted file extensions, compared case-insensitively, without dots
    pub extensions: Vec<String>,

    /// Log the full probe document after a successful probe
    pub log_diagnostics: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            log_diagnostics: DEFAULT_LOG_DIAGNOSTICS,
        }
    }
}

impl ViewerConfig {
    /// Checks that the configuration can select anything at all.
    pub fn validate(&self) -> CoreResult<()> {
        if self.extensions.is_empty() {
            return Err(CoreError::Config(
                "at least one file extension must be allowed".to_string(),
            ));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.contains(['.', '/', '\\']))
        {
            return Err(CoreError::Config(format!(
                "invalid file extension '{bad}' (use e.g. 'mp4', without a dot)"
            )));
        }
        Ok(())
    }
}

/// Builder for [`ViewerConfig`].
#[derive(Debug, Clone, Default)]
pub struct ViewerConfigBuilder {
    config: ViewerConfig,
}

impl ViewerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the extension allowlist. Surrounding whitespace and a leading
    /// dot are stripped; values are lowercased.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.as_ref().trim();
                ext.strip_prefix('.').unwrap_or(ext).to_ascii_lowercase()
            })
            .collect();
        self
    }

    pub fn log_diagnostics(mut self, enabled: bool) -> Self {
        self.config.log_diagnostics = enabled;
        self
    }

    pub fn build(self) -> ViewerConfig {
        self.config
    }
}
