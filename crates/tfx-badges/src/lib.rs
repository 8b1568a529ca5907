#![forbid(unsafe_code)]

//! Badge composition.
//!
//! - [`flags`] - fixed-order feature flags per event
//! - [`segment`] - the segment model every bar is made of
//! - [`badge_bar`] - one ticket: text badges around an equal-slice fill strip
//! - [`aggregate`] - many events: proportional, centre-weighted segments

pub mod aggregate;
pub mod badge_bar;
pub mod flags;
pub mod segment;

pub use aggregate::{aggregate_counts, center_weighted, compose_aggregate_bar};
pub use badge_bar::{BadgeBarComposer, compose_badge_bar};
pub use flags::{
    FEATURE_TABLE, FeatureFlag, FeatureKey, FeatureSpec, extract_feature_flags, present_flags,
};
pub use segment::{BadgeRole, Corners, Segment, SegmentKind, SegmentWidth, SliceSource};
