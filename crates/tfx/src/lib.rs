#![forbid(unsafe_code)]

//! Ticket visual engine: public facade.
//!
//! Given an event and, optionally, a ticket, the engine answers three
//! questions for a rendering layer:
//!
//! - which special effect to play ([`Engine::resolve`])
//! - which monthly gradient to paint ([`Engine::monthly_color`])
//! - which badges and feature slices to draw ([`Engine::compose_badge_bar`],
//!   [`Engine::compose_aggregate_bar`])
//!
//! Everything is a pure function of its inputs plus the engine's clock.
//!
//! ```
//! use tfx::prelude::*;
//!
//! let engine = Engine::new(EngineConfig::default().with_preview_month(Month::JUNE));
//! let event = EventAttributes {
//!     special_effects_enabled: true,
//!     ..EventAttributes::new("Summer Gala", "2024-06-15")
//! };
//! let ticket = TicketState::preview();
//! assert_eq!(engine.resolve(&event, Some(&ticket)), EffectTag::Monthly);
//! ```

use std::fmt;
use std::sync::OnceLock;

// --- Core re-exports -------------------------------------------------------

pub use tfx_core::{
    CalendarDate, Clock, ConfigError, DateParseError, ENV_PREVIEW_MONTH, EngineConfig,
    EventAttributes, EventEntry, EventSource, FixedClock, Month, ReentryPolicy, SystemClock,
    TicketState,
};

// --- Style re-exports ------------------------------------------------------

pub use tfx_style::{ColorParseError, MONTHLY_PALETTE, MonthGradient, MonthlyPalette, Rgb};

// --- Effect re-exports -----------------------------------------------------

pub use tfx_effects::{
    Effect, EffectResolver, EffectRule, EffectRuleTable, EffectTag, Resolution, ResolutionStep,
    UnknownEffectTag,
};

// --- Badge re-exports ------------------------------------------------------

pub use tfx_badges::{
    BadgeBarComposer, BadgeRole, Corners, FeatureFlag, FeatureKey, Segment, SegmentKind,
    SegmentWidth, SliceSource, aggregate_counts, compose_aggregate_bar, compose_badge_bar,
    extract_feature_flags,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for engine setup and host-data parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid engine configuration.
    Config(ConfigError),
    /// Malformed colour string.
    Color(ColorParseError),
    /// Malformed or impossible calendar date.
    Date(DateParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config: {err}"),
            Self::Color(err) => write!(f, "color: {err}"),
            Self::Date(err) => write!(f, "date: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Date(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ColorParseError> for Error {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

impl From<DateParseError> for Error {
    fn from(err: DateParseError) -> Self {
        Self::Date(err)
    }
}

/// Standard result type for tfx APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Engine ---------------------------------------------------------------

/// Configured entry point: one resolver plus the settings it was built from.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    resolver: EffectResolver,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Engine with the standard rule table and a clock derived from `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            resolver: EffectResolver::from_config(&config),
            config,
        }
    }

    /// Engine configured from `TFX_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(EngineConfig::from_env()?))
    }

    /// Engine with a caller-supplied resolver (custom rules or clock).
    #[must_use]
    pub fn with_resolver(config: EngineConfig, resolver: EffectResolver) -> Self {
        Self { config, resolver }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn resolver(&self) -> &EffectResolver {
        &self.resolver
    }

    /// The one effect to play for this event and ticket.
    #[must_use]
    pub fn resolve(&self, event: &EventAttributes, ticket: Option<&TicketState>) -> Effect {
        self.resolver.resolve(event, ticket)
    }

    /// Like [`resolve`](Self::resolve), also reporting the deciding step.
    #[must_use]
    pub fn explain(&self, event: &EventAttributes, ticket: Option<&TicketState>) -> Resolution {
        self.resolver.explain(event, ticket)
    }

    /// Gradient for the `monthly` treatment; `None` when no month is known.
    #[must_use]
    pub fn monthly_color(
        &self,
        event: &EventAttributes,
        ticket: Option<&TicketState>,
    ) -> Option<MonthGradient> {
        self.resolver.monthly_color(event, ticket)
    }

    /// All eleven feature flags in fixed order.
    #[must_use]
    pub fn extract_feature_flags(&self, event: &EventAttributes) -> Vec<FeatureFlag> {
        tfx_badges::extract_feature_flags(event)
    }

    /// Per-ticket badge bar; empty when there is nothing to show.
    #[must_use]
    pub fn compose_badge_bar(
        &self,
        ticket: Option<&TicketState>,
        event: &EventAttributes,
        show_badges: bool,
    ) -> Vec<Segment> {
        tfx_badges::compose_badge_bar(ticket, event, show_badges)
    }

    /// Proportional, centre-weighted bar for a collection of events.
    #[must_use]
    pub fn compose_aggregate_bar<S: EventSource>(&self, entries: &[S]) -> Vec<Segment> {
        tfx_badges::compose_aggregate_bar(entries)
    }
}

fn default_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::default)
}

/// [`Engine::resolve`] on a default engine (system clock, standard rules).
#[must_use]
pub fn resolve(event: &EventAttributes, ticket: Option<&TicketState>) -> Effect {
    default_engine().resolve(event, ticket)
}

/// [`Engine::monthly_color`] on a default engine.
#[must_use]
pub fn get_monthly_color(
    event: &EventAttributes,
    ticket: Option<&TicketState>,
) -> Option<MonthGradient> {
    default_engine().monthly_color(event, ticket)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Effect, EffectTag, Engine, EngineConfig, Error, EventAttributes, EventEntry, FeatureKey,
        Month, MonthGradient, Result, Rgb, Segment, SegmentWidth, TicketState,
    };

    pub use crate::{badges, core, effects, style};
}

pub use tfx_badges as badges;
pub use tfx_core as core;
pub use tfx_effects as effects;
pub use tfx_style as style;
