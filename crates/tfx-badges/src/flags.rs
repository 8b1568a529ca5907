#![forbid(unsafe_code)]

//! Feature flags.
//!
//! Every event exposes the same eleven flags in the same order. The order is
//! fixed here and never derived from the data, so bars built from it do not
//! reshuffle between renders.

use serde::{Deserialize, Serialize};
use tfx_core::EventAttributes;
use tfx_style::Rgb;

/// One feature an event can carry, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureKey {
    IsAdminCreated,
    GoldenTicketEnabled,
    SpecialEffectsEnabled,
    SurgePricing,
    StickerUrl,
    P2pValidation,
    AllowMinting,
    Geofence,
    EnableVoting,
    RecurringType,
    EndDate,
}

/// Constants attached to a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub key: FeatureKey,
    /// Host field name.
    pub field: &'static str,
    pub color: Rgb,
    pub label: &'static str,
    /// Navigation slug used when a segment is clicked.
    pub nav_slug: &'static str,
}

const fn spec(
    key: FeatureKey,
    field: &'static str,
    color: u32,
    label: &'static str,
    nav_slug: &'static str,
) -> FeatureSpec {
    FeatureSpec {
        key,
        field,
        color: Rgb::from_u32(color),
        label,
        nav_slug,
    }
}

/// Colour, label, and slug per feature, indexed by [`FeatureKey::index`].
pub const FEATURE_TABLE: [FeatureSpec; 11] = [
    spec(FeatureKey::IsAdminCreated, "isAdminCreated", 0x9C27B0, "Mission", "mission"),
    spec(FeatureKey::GoldenTicketEnabled, "goldenTicketEnabled", 0xFFD700, "Golden Ticket", "golden"),
    spec(FeatureKey::SpecialEffectsEnabled, "specialEffectsEnabled", 0xFF69B4, "Special Effects", "effects"),
    spec(FeatureKey::SurgePricing, "surgePricing", 0xF44336, "Surge Pricing", "surge"),
    spec(FeatureKey::StickerUrl, "stickerUrl", 0x8BC34A, "Sticker", "sticker"),
    spec(FeatureKey::P2pValidation, "p2pValidation", 0x03A9F4, "P2P Validation", "p2p"),
    spec(FeatureKey::AllowMinting, "allowMinting", 0x3F51B5, "Minting", "minting"),
    spec(FeatureKey::Geofence, "geofence", 0x009688, "Geofence", "geofence"),
    spec(FeatureKey::EnableVoting, "enableVoting", 0xFF9800, "Voting", "voting"),
    spec(FeatureKey::RecurringType, "recurringType", 0x795548, "Recurring", "recurring"),
    spec(FeatureKey::EndDate, "endDate", 0x607D8B, "Multi-Day", "multiday"),
];

impl FeatureKey {
    /// Every key in display order.
    pub const ALL: [Self; 11] = [
        Self::IsAdminCreated,
        Self::GoldenTicketEnabled,
        Self::SpecialEffectsEnabled,
        Self::SurgePricing,
        Self::StickerUrl,
        Self::P2pValidation,
        Self::AllowMinting,
        Self::Geofence,
        Self::EnableVoting,
        Self::RecurringType,
        Self::EndDate,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    #[must_use]
    pub const fn spec(self) -> FeatureSpec {
        FEATURE_TABLE[self.index()]
    }

    /// Host field name, e.g. `p2pValidation`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.spec().field
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.spec().label
    }

    #[must_use]
    pub const fn color(self) -> Rgb {
        self.spec().color
    }

    #[must_use]
    pub const fn nav_slug(self) -> &'static str {
        self.spec().nav_slug
    }

    /// Whether one event shows this feature.
    ///
    /// Strings count when non-blank; `EndDate` only counts when the event
    /// actually spans more than one day.
    #[must_use]
    pub fn is_present(self, event: &EventAttributes) -> bool {
        match self {
            Self::EndDate => event.is_multi_day(),
            _ => self.is_present_in_aggregate(event),
        }
    }

    /// Presence at collection granularity: `EndDate` counts whenever it is
    /// set, even if it equals the start date.
    #[must_use]
    pub fn is_present_in_aggregate(self, event: &EventAttributes) -> bool {
        match self {
            Self::IsAdminCreated => event.is_admin_created,
            Self::GoldenTicketEnabled => event.golden_ticket_enabled,
            Self::SpecialEffectsEnabled => event.special_effects_enabled,
            Self::SurgePricing => event.surge_pricing,
            Self::StickerUrl => event.has_sticker(),
            Self::P2pValidation => event.p2p_validation,
            Self::AllowMinting => event.allow_minting,
            Self::Geofence => event.geofence,
            Self::EnableVoting => event.enable_voting,
            Self::RecurringType => event.is_recurring(),
            Self::EndDate => event.has_end_date(),
        }
    }
}

/// One extracted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureFlag {
    pub key: FeatureKey,
    pub color: Rgb,
    pub label: &'static str,
    pub present: bool,
}

/// All eleven flags for an event, in fixed order.
#[must_use]
pub fn extract_feature_flags(event: &EventAttributes) -> Vec<FeatureFlag> {
    FeatureKey::ALL
        .into_iter()
        .map(|key| FeatureFlag {
            key,
            color: key.color(),
            label: key.label(),
            present: key.is_present(event),
        })
        .collect()
}

/// Just the flags that are on, still in fixed order.
pub fn present_flags(event: &EventAttributes) -> impl Iterator<Item = FeatureFlag> + '_ {
    FeatureKey::ALL
        .into_iter()
        .filter(move |key| key.is_present(event))
        .map(|key| FeatureFlag {
            key,
            color: key.color(),
            label: key.label(),
            present: true,
        })
}
