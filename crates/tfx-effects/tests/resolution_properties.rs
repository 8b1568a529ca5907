//! Property-based invariants for effect resolution.
//!
//! 1. No ticket always resolves to `none`.
//! 2. Resolution is deterministic.
//! 3. Double-golden tickets always get `rainbow`.
//! 4. A saved effect comes back verbatim unless the ticket is double golden.
//! 5. Real tickets never get a freshly computed effect.
//! 6. Preview resolution agrees with the rule table and never yields `none`.
//! 7. No panics on arbitrary date strings.

use std::sync::Arc;

use proptest::prelude::*;
use tfx_core::{EventAttributes, FixedClock, Month, TicketState};
use tfx_effects::{
    Effect, EffectResolver, EffectRuleTable, EffectTag, ResolutionStep, RuleContext,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn resolver() -> EffectResolver {
    EffectResolver::new(
        EffectRuleTable::standard(),
        Arc::new(FixedClock(Month::JUNE)),
    )
}

fn date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (1990i32..2040, 1u8..=12, 1u8..=28)
            .prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}")),
        Just("2024-03-09".to_string()),
        Just("2024-02-14".to_string()),
        Just("2024-10-31".to_string()),
        Just("2024-12-25".to_string()),
        Just("2024-12-31".to_string()),
        ".{0,16}",
    ]
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Gala".to_string()),
        Just("Pride Parade".to_string()),
        Just("Block PARTY".to_string()),
        Just("Halloween Bash".to_string()),
        "[a-zA-Z ]{0,20}",
    ]
}

fn event_strategy() -> impl Strategy<Value = EventAttributes> {
    (name_strategy(), date_strategy(), any::<bool>()).prop_map(|(name, date, enabled)| {
        EventAttributes {
            special_effects_enabled: enabled,
            ..EventAttributes::new(name, date)
        }
    })
}

fn saved_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("spooky".to_string())),
        Just(Some("sticker".to_string())),
        "[a-z]{1,10}".prop_map(Some),
    ]
}

fn ticket_strategy() -> impl Strategy<Value = TicketState> {
    (
        prop_oneof![Just(None), Just(Some(false)), Just(Some(true))],
        any::<bool>(),
        any::<bool>(),
        saved_strategy(),
        any::<bool>(),
    )
        .prop_map(
            |(is_validated, is_golden_ticket, is_double_golden, saved, is_preview)| TicketState {
                is_validated,
                is_golden_ticket,
                is_double_golden,
                saved_special_effect: saved,
                is_preview,
                ..TicketState::default()
            },
        )
}

// ═════════════════════════════════════════════════════════════════════════
// 1. No ticket always resolves to `none`
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn absent_ticket_is_none(event in event_strategy()) {
        prop_assert_eq!(resolver().resolve(&event, None), EffectTag::None);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolution_is_deterministic(event in event_strategy(), ticket in ticket_strategy()) {
        let r = resolver();
        let first = r.resolve(&event, Some(&ticket));
        for _ in 0..3 {
            prop_assert_eq!(&r.resolve(&event, Some(&ticket)), &first);
        }
        prop_assert_eq!(&resolver().resolve(&event, Some(&ticket)), &first);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Double golden always wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn double_golden_is_rainbow(event in event_strategy(), ticket in ticket_strategy()) {
        let ticket = TicketState { is_double_golden: true, ..ticket };
        let res = resolver().explain(&event, Some(&ticket));
        prop_assert_eq!(res.effect, EffectTag::Rainbow);
        prop_assert_eq!(res.step, ResolutionStep::DoubleGolden);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Saved effect precedence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn saved_effect_verbatim(event in event_strategy(), ticket in ticket_strategy(), saved in "[a-z]{1,12}") {
        let ticket = TicketState {
            is_double_golden: false,
            saved_special_effect: Some(saved.clone()),
            ..ticket
        };
        let effect = resolver().resolve(&event, Some(&ticket));
        prop_assert_eq!(effect.as_str(), saved.as_str());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Real tickets never compute
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn real_unsaved_tickets_are_none(event in event_strategy(), ticket in ticket_strategy()) {
        let ticket = TicketState {
            is_double_golden: false,
            saved_special_effect: None,
            is_preview: false,
            ..ticket
        };
        prop_assert!(resolver().resolve(&event, Some(&ticket)).is_none());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Preview agrees with the table
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn preview_matches_table(event in event_strategy()) {
        let event = EventAttributes { special_effects_enabled: true, ..event };
        let expected = EffectRuleTable::standard()
            .evaluate(&RuleContext::for_preview(&event, Month::JUNE));
        // The monthly floor always holds for previews, so a rule always fires.
        prop_assert!(expected.is_some());
        let effect = resolver().resolve(&event, Some(&TicketState::preview()));
        prop_assert_eq!(effect, Effect::Tag(expected.unwrap_or(EffectTag::None)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Arbitrary dates never panic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_dates_do_not_panic(date in any::<String>(), ticket in ticket_strategy()) {
        let event = EventAttributes {
            special_effects_enabled: true,
            ..EventAttributes::new("Gala", date)
        };
        let r = resolver();
        let _ = r.resolve(&event, Some(&ticket));
        let _ = r.monthly_color(&event, Some(&ticket));
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn saved_spooky_on_christmas() {
    let event = EventAttributes {
        special_effects_enabled: true,
        ..EventAttributes::new("Christmas Gala", "2024-12-25")
    };
    let ticket = TicketState::validated().with_saved_effect("spooky");
    assert_eq!(resolver().resolve(&event, Some(&ticket)), EffectTag::Spooky);
}

#[test]
fn day_69_beats_halloween_name() {
    let event = EventAttributes {
        special_effects_enabled: true,
        ..EventAttributes::new("Halloween Party", "2024-03-09")
    };
    assert_eq!(
        resolver().resolve(&event, Some(&TicketState::preview())),
        EffectTag::Nice
    );
}

#[test]
fn june_monthly_fallback() {
    let event = EventAttributes {
        special_effects_enabled: true,
        ..EventAttributes::new("Summer Gala", "2024-06-15")
    };
    let preview = TicketState::preview();
    let r = resolver();
    assert_eq!(r.resolve(&event, Some(&preview)), EffectTag::Monthly);
    let gradient = r.monthly_color(&event, Some(&preview)).unwrap();
    assert_eq!(gradient.color1.to_string(), "#1E90FF");
    assert_eq!(gradient.color2.to_string(), "#87CEEB");
}
