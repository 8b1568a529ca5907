#![forbid(unsafe_code)]

//! Per-ticket badge bar.
//!
//! Layout, left to right:
//!
//! ```text
//! [MISSION] [VALIDATED] [ slice | slice | ... | resale | nft ] [passes]
//! ```
//!
//! Every part is optional. A bar with nothing to show is omitted outright
//! (the composer returns an empty list) rather than drawn as an empty strip.

use tfx_core::{EventAttributes, TicketState};
use tfx_style::{MonthlyPalette, Rgb};

use crate::flags::present_flags;
use crate::segment::{BadgeRole, Segment, SegmentWidth, SliceSource, round_outer_corners};

/// Leading badge for admin-created events.
pub const MISSION_COLOR: Rgb = Rgb::from_u32(0x6A1B9A);
/// Validated badge when the event date yields no month tint.
pub const VALIDATED_FALLBACK_COLOR: Rgb = Rgb::from_u32(0x2E7D32);
/// Trailing pass-count badge.
pub const PASS_COLOR: Rgb = Rgb::from_u32(0x37474F);
/// Extra slice for a ticket listed on the resale market.
pub const RESALE_COLOR: Rgb = Rgb::from_u32(0xFF7043);
/// Extra slice for a ticket carrying NFT media.
pub const NFT_MEDIA_COLOR: Rgb = Rgb::from_u32(0x00ACC1);

pub const MISSION_LABEL: &str = "MISSION";
pub const VALIDATED_LABEL: &str = "VALIDATED";

/// Builds the badge bar for one ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BadgeBarComposer {
    show_badges: bool,
}

impl BadgeBarComposer {
    /// Composer with validation and status badges hidden.
    #[must_use]
    pub const fn new() -> Self {
        Self { show_badges: false }
    }

    /// Show the validated badge and the resale / NFT slices.
    #[must_use]
    pub const fn show_badges(mut self, show: bool) -> Self {
        self.show_badges = show;
        self
    }

    /// Compose the bar. Empty means "do not render a bar".
    #[must_use]
    pub fn compose(&self, ticket: Option<&TicketState>, event: &EventAttributes) -> Vec<Segment> {
        let mut segments = Vec::new();

        if event.is_admin_created {
            segments.push(Segment::badge(BadgeRole::Mission, MISSION_LABEL, MISSION_COLOR));
        }
        if self.show_badges && ticket.is_some_and(TicketState::validated_flag) {
            segments.push(Segment::badge(
                BadgeRole::Validated,
                VALIDATED_LABEL,
                validated_tint(event),
            ));
        }

        let mut fills: Vec<(SliceSource, Rgb)> = present_flags(event)
            .map(|flag| (SliceSource::Feature(flag.key), flag.color))
            .collect();
        if let Some(ticket) = ticket.filter(|_| self.show_badges) {
            if ticket.resale_listed {
                fills.push((SliceSource::Resale, RESALE_COLOR));
            }
            if ticket.nft_media {
                fills.push((SliceSource::NftMedia, NFT_MEDIA_COLOR));
            }
        }
        let den = fills.len() as u32;
        segments.extend(fills.into_iter().map(|(source, color)| {
            Segment::slice(source, color, SegmentWidth::Ratio { num: 1, den })
        }));

        if let Some(passes) = event.reentry_policy.pass_label() {
            segments.push(Segment::badge(BadgeRole::Passes, passes, PASS_COLOR));
        }

        round_outer_corners(&mut segments);
        tfx_core::trace!(event = %event.name, segments = segments.len(), "composed badge bar");
        segments
    }
}

/// Validated badges take the first colour of the event month's gradient.
fn validated_tint(event: &EventAttributes) -> Rgb {
    event
        .month()
        .map_or(VALIDATED_FALLBACK_COLOR, |month| MonthlyPalette::get(month).color1)
}

/// Badge bar for a ticket/event pair; empty when there is nothing to show.
#[must_use]
pub fn compose_badge_bar(
    ticket: Option<&TicketState>,
    event: &EventAttributes,
    show_badges: bool,
) -> Vec<Segment> {
    BadgeBarComposer::new()
        .show_badges(show_badges)
        .compose(ticket, event)
}
