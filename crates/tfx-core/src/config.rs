#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! # Env Var Contract
//!
//! - `TFX_PREVIEW_MONTH=1..12` pins the month preview tickets use for their
//!   monthly colour. Unset or empty means "the current month".

use std::env;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::date::Month;

/// Env var pinning the preview month.
pub const ENV_PREVIEW_MONTH: &str = "TFX_PREVIEW_MONTH";

/// Configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `TFX_PREVIEW_MONTH` is not a number from 1 to 12.
    InvalidPreviewMonth { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPreviewMonth { value } => write!(
                f,
                "{ENV_PREVIEW_MONTH}={value:?} is not a month number (expected 1-12)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Month used for preview tickets instead of the wall clock.
    pub preview_month: Option<Month>,
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Read configuration through a custom environment lookup (for tests).
    pub fn from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let preview_month = match get_env(ENV_PREVIEW_MONTH) {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(parse_month(&raw)?),
        };
        Ok(Self { preview_month })
    }

    /// Pin the preview month.
    #[must_use]
    pub const fn with_preview_month(mut self, month: Month) -> Self {
        self.preview_month = Some(month);
        self
    }

    /// Clock honouring the pinned preview month, if any.
    #[must_use]
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.preview_month {
            Some(month) => Arc::new(FixedClock(month)),
            None => Arc::new(SystemClock),
        }
    }
}

fn parse_month(raw: &str) -> Result<Month, ConfigError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(Month::new)
        .ok_or_else(|| ConfigError::InvalidPreviewMonth {
            value: raw.to_string(),
        })
}
