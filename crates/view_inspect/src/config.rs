//! Process-wide diagnostic settings.

use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use std::env;

static GLOBAL: OnceCell<InspectConfig> = OnceCell::new();

/// Layout and output settings for diagnostic dumps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectConfig {
    /// Put both table rows of a view on one line.
    pub wide: bool,
    /// Wrap logged lines in ANSI color codes.
    pub color: bool,
    /// Width of the kind-name column; longer names keep their tail.
    pub kind_width: usize,
    /// Width of the style-name column; longer names are cut.
    pub style_width: usize,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            wide: false,
            color: false,
            kind_width: 22,
            style_width: 24,
        }
    }
}

impl InspectConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `VIEW_INSPECT_WIDE`: Set to "1" for single-line table rows
    /// - `VIEW_INSPECT_COLOR`: Set to "1" to color logged output
    #[must_use]
    pub fn from_env() -> Self {
        let wide = env::var("VIEW_INSPECT_WIDE").ok().as_deref() == Some("1");
        let color = env::var("VIEW_INSPECT_COLOR").ok().as_deref() == Some("1");
        Self {
            wide,
            color,
            ..Self::default()
        }
    }

    /// Install the process-wide configuration. Call once at startup.
    ///
    /// # Errors
    /// Returns an error if a configuration was already installed or read.
    pub fn install(config: Self) -> Result<()> {
        GLOBAL
            .set(config)
            .map_err(|_rejected| anyhow!("inspect configuration already installed"))
    }

    /// The process-wide configuration, loaded from the environment when
    /// nothing was installed.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::from_env)
    }
}
