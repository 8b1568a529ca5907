#![forbid(unsafe_code)]

//! Event records as the engine sees them.
//!
//! The store layer owns these; the engine only reads. Field names serialize in
//! camelCase to match the host records.

use serde::{Deserialize, Serialize};

use crate::date::{self, CalendarDate, DateParseError, Month};

/// How many times one ticket may pass the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ReentryPolicy {
    /// One entry per ticket.
    #[default]
    SingleUse,
    /// A bounded number of entries.
    MultiUse {
        /// Total uses allowed per ticket.
        uses: u32,
    },
    /// Unlimited re-entry.
    NoLimit,
}

impl ReentryPolicy {
    /// Label the host uses for unlimited re-entry.
    pub const NO_LIMIT_LABEL: &'static str = "No Limit";
    /// Label the host uses for single entry.
    pub const SINGLE_USE_LABEL: &'static str = "Single Use";

    /// Map the host's policy label and use count onto a policy.
    ///
    /// `"Single Use"` and `"No Limit"` are matched case-insensitively; any
    /// other label is a multi-use policy, which collapses to single use when
    /// `uses <= 1`.
    #[must_use]
    pub fn from_label(label: &str, uses: u32) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case(Self::NO_LIMIT_LABEL) {
            Self::NoLimit
        } else if label.eq_ignore_ascii_case(Self::SINGLE_USE_LABEL) || uses <= 1 {
            Self::SingleUse
        } else {
            Self::MultiUse { uses }
        }
    }

    /// True for anything other than single use.
    #[inline]
    #[must_use]
    pub const fn allows_reentry(self) -> bool {
        !matches!(self, Self::SingleUse)
    }

    /// Pass-count text shown on badges: `∞` for no limit, the number for
    /// multi-use, nothing for single use.
    #[must_use]
    pub fn pass_label(self) -> Option<String> {
        match self {
            Self::SingleUse => None,
            Self::MultiUse { uses } => Some(uses.to_string()),
            Self::NoLimit => Some("∞".to_string()),
        }
    }
}

/// Read-only view of one event's attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventAttributes {
    pub name: String,
    /// Literal `YYYY-MM-DD`.
    pub date: String,
    pub special_effects_enabled: bool,
    pub sticker_url: Option<String>,
    pub is_admin_created: bool,
    pub golden_ticket_enabled: bool,
    pub surge_pricing: bool,
    pub p2p_validation: bool,
    pub allow_minting: bool,
    pub geofence: bool,
    pub enable_voting: bool,
    pub recurring_type: Option<String>,
    pub end_date: Option<String>,
    pub reentry_policy: ReentryPolicy,
}

impl EventAttributes {
    /// Create an event with every flag off.
    #[must_use]
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Strictly parsed event date.
    pub fn calendar_date(&self) -> Result<CalendarDate, DateParseError> {
        CalendarDate::parse(&self.date)
    }

    /// Month of the event date, tolerating loosely formed strings.
    #[must_use]
    pub fn month(&self) -> Option<Month> {
        date::best_effort_month(&self.date)
    }

    #[must_use]
    pub fn has_sticker(&self) -> bool {
        is_filled(self.sticker_url.as_deref())
    }

    #[must_use]
    pub fn is_recurring(&self) -> bool {
        is_filled(self.recurring_type.as_deref())
    }

    /// Has an end date at all (non-empty), whatever its value.
    #[must_use]
    pub fn has_end_date(&self) -> bool {
        is_filled(self.end_date.as_deref())
    }

    /// Spans more than one day: the end date is set and differs from the start.
    #[must_use]
    pub fn is_multi_day(&self) -> bool {
        match self.end_date.as_deref().map(str::trim) {
            Some(end) if !end.is_empty() => end != self.date.trim(),
            _ => false,
        }
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Anything that carries an event: the records handed to aggregate views.
pub trait EventSource {
    fn event(&self) -> &EventAttributes;
}

impl EventSource for EventAttributes {
    fn event(&self) -> &EventAttributes {
        self
    }
}

impl<T: EventSource + ?Sized> EventSource for &T {
    fn event(&self) -> &EventAttributes {
        (**self).event()
    }
}

/// The `{ event }` wrapper collection views are built from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventEntry {
    pub event: EventAttributes,
}

impl EventEntry {
    #[must_use]
    pub fn new(event: EventAttributes) -> Self {
        Self { event }
    }
}

impl EventSource for EventEntry {
    fn event(&self) -> &EventAttributes {
        &self.event
    }
}

impl From<EventAttributes> for EventEntry {
    fn from(event: EventAttributes) -> Self {
        Self::new(event)
    }
}
