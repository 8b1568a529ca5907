#![forbid(unsafe_code)]

//! Segments: the cells a bar is made of.
//!
//! A bar is an ordered list of segments. Text badges size to their label;
//! fill slices share the flexible middle by ratio; aggregate segments carry a
//! percentage of the whole strip. Only the outermost segments get rounded
//! corners.

use serde::Serialize;
use tfx_style::Rgb;

use crate::flags::FeatureKey;

bitflags::bitflags! {
    /// Which outer corners of a segment are rounded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct Corners: u8 {
        /// Rounded on the left (leading) edge.
        const LEFT  = 0b01;
        /// Rounded on the right (trailing) edge.
        const RIGHT = 0b10;
    }
}

/// Fixed text badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeRole {
    /// Admin-created event.
    Mission,
    /// Ticket has been validated.
    Validated,
    /// Pass / re-entry use count.
    Passes,
}

/// Where a colour slice comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "source", content = "key")]
pub enum SliceSource {
    Feature(FeatureKey),
    /// Ticket listed for resale.
    Resale,
    /// Ticket carries NFT media.
    NftMedia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum SegmentKind {
    Badge(BadgeRole),
    Slice(SliceSource),
}

/// How much of the bar a segment takes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "mode")]
pub enum SegmentWidth {
    /// Sized to its label.
    Intrinsic,
    /// Share of the flexible middle region (numerator, denominator).
    Ratio { num: u32, den: u32 },
    /// Percentage of the whole strip (0.0 to 100.0).
    Percentage { value: f64 },
}

impl SegmentWidth {
    /// Fraction of its region, when the width is proportional.
    #[must_use]
    pub fn fraction(&self) -> Option<f64> {
        match *self {
            Self::Intrinsic => None,
            Self::Ratio { num, den } if den > 0 => Some(f64::from(num) / f64::from(den)),
            Self::Ratio { .. } => Some(0.0),
            Self::Percentage { value } => Some(value / 100.0),
        }
    }
}

/// One visual cell of a bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub kind: SegmentKind,
    pub color: Rgb,
    /// Legible text colour over `color`.
    pub text_color: Rgb,
    pub label: Option<String>,
    pub width: SegmentWidth,
    pub corners: Corners,
    /// Stable navigation key for click-through.
    pub nav_key: Option<&'static str>,
    /// Events contributing to an aggregate segment; 0 elsewhere.
    pub count: u32,
}

impl Segment {
    /// A text badge sized to its label.
    #[must_use]
    pub fn badge(role: BadgeRole, label: impl Into<String>, color: Rgb) -> Self {
        Self {
            kind: SegmentKind::Badge(role),
            color,
            text_color: color.contrast_text(),
            label: Some(label.into()),
            width: SegmentWidth::Intrinsic,
            corners: Corners::empty(),
            nav_key: None,
            count: 0,
        }
    }

    /// A colour slice with no label.
    #[must_use]
    pub fn slice(source: SliceSource, color: Rgb, width: SegmentWidth) -> Self {
        let nav_key = match source {
            SliceSource::Feature(key) => Some(key.nav_slug()),
            SliceSource::Resale => Some("resale"),
            SliceSource::NftMedia => Some("nft"),
        };
        Self {
            kind: SegmentKind::Slice(source),
            color,
            text_color: color.contrast_text(),
            label: None,
            width,
            corners: Corners::empty(),
            nav_key,
            count: 0,
        }
    }

    #[must_use]
    pub fn is_badge(&self) -> bool {
        matches!(self.kind, SegmentKind::Badge(_))
    }

    /// Feature behind a slice, if any.
    #[must_use]
    pub fn feature(&self) -> Option<FeatureKey> {
        match self.kind {
            SegmentKind::Slice(SliceSource::Feature(key)) => Some(key),
            _ => None,
        }
    }
}

/// Round the leading edge of the first segment and the trailing edge of the
/// last; clear everything in between.
pub fn round_outer_corners(segments: &mut [Segment]) {
    for segment in segments.iter_mut() {
        segment.corners = Corners::empty();
    }
    if let Some(first) = segments.first_mut() {
        first.corners |= Corners::LEFT;
    }
    if let Some(last) = segments.last_mut() {
        last.corners |= Corners::RIGHT;
    }
}
