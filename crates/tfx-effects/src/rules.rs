#![forbid(unsafe_code)]

//! Calendar and keyword rules.
//!
//! Each rule pairs a tag with a priority and a predicate over the event. The
//! table is re-ordered by priority (highest first) on every pass, so the
//! order rules were declared or appended in never decides a winner except
//! between equal priorities, where declaration order holds.

use std::cmp::Reverse;
use std::fmt;

use tfx_core::{CalendarDate, EventAttributes, Month};

use crate::tag::EffectTag;

/// Day of the year that earns `nice`.
pub const NICE_DAY_OF_YEAR: u16 = 69;

/// What a predicate gets to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleContext {
    /// Event name, lower-cased once.
    pub name_lower: String,
    /// Strictly parsed date; `None` when the string is malformed.
    pub date: Option<CalendarDate>,
    /// Month the `monthly` floor paints with: the viewer's current month for
    /// previews, else the event's own (strict, or a best-effort read).
    pub month: Option<Month>,
}

impl RuleContext {
    /// Build the predicate inputs for an event.
    #[must_use]
    pub fn from_event(event: &EventAttributes) -> Self {
        let date = event.calendar_date().ok();
        if date.is_none() {
            tfx_core::debug!(raw = %event.date, "event date is not YYYY-MM-DD; calendar rules skipped");
        }
        Self {
            name_lower: event.name.to_lowercase(),
            date,
            month: date.map(|d| d.month()).or_else(|| event.month()),
        }
    }

    /// Context for a preview ticket: calendar rules still read the event date,
    /// but the month is the viewer's current one, so the floor always holds.
    #[must_use]
    pub fn for_preview(event: &EventAttributes, current_month: Month) -> Self {
        Self {
            month: Some(current_month),
            ..Self::from_event(event)
        }
    }

    /// Name contains `needle` (already lower-case).
    #[inline]
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name_lower.contains(needle)
    }

    /// Strict date falls on this month/day.
    #[inline]
    #[must_use]
    pub fn is_month_day(&self, month: u8, day: u8) -> bool {
        self.date.is_some_and(|d| d.is_month_day(month, day))
    }
}

/// One entry of the rule table.
#[derive(Clone, Copy)]
pub struct EffectRule {
    pub tag: EffectTag,
    pub priority: i32,
    pub predicate: fn(&RuleContext) -> bool,
}

impl EffectRule {
    #[must_use]
    pub const fn new(tag: EffectTag, priority: i32, predicate: fn(&RuleContext) -> bool) -> Self {
        Self {
            tag,
            priority,
            predicate,
        }
    }

    #[inline]
    #[must_use]
    pub fn matches(&self, ctx: &RuleContext) -> bool {
        (self.predicate)(ctx)
    }
}

impl fmt::Debug for EffectRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectRule")
            .field("tag", &self.tag)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

fn is_nice_day(ctx: &RuleContext) -> bool {
    ctx.date
        .is_some_and(|d| d.day_of_year() == NICE_DAY_OF_YEAR)
}

fn is_pride_event(ctx: &RuleContext) -> bool {
    ctx.name_contains("pride") || ctx.name_contains("gay")
}

fn is_valentines(ctx: &RuleContext) -> bool {
    ctx.is_month_day(2, 14)
}

fn is_halloween(ctx: &RuleContext) -> bool {
    ctx.is_month_day(10, 31)
}

fn is_christmas(ctx: &RuleContext) -> bool {
    ctx.is_month_day(12, 25)
}

fn is_new_years_eve(ctx: &RuleContext) -> bool {
    ctx.is_month_day(12, 31)
}

fn is_party(ctx: &RuleContext) -> bool {
    ctx.name_contains("party")
}

fn has_month(ctx: &RuleContext) -> bool {
    ctx.month.is_some()
}

/// The built-in rules, in declaration order.
pub const STANDARD_RULES: [EffectRule; 8] = [
    EffectRule::new(EffectTag::Nice, 100, is_nice_day),
    EffectRule::new(EffectTag::Pride, 90, is_pride_event),
    EffectRule::new(EffectTag::Hearts, 80, is_valentines),
    EffectRule::new(EffectTag::Spooky, 80, is_halloween),
    EffectRule::new(EffectTag::Snowflakes, 80, is_christmas),
    EffectRule::new(EffectTag::Fireworks, 80, is_new_years_eve),
    EffectRule::new(EffectTag::Confetti, 70, is_party),
    // Floor: only surfaces when nothing above matched.
    EffectRule::new(EffectTag::Monthly, 10, has_month),
];

/// Ordered set of effect rules.
#[derive(Debug, Clone)]
pub struct EffectRuleTable {
    rules: Vec<EffectRule>,
}

impl Default for EffectRuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl EffectRuleTable {
    /// The built-in calendar/keyword rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.to_vec(),
        }
    }

    /// A table with no rules; evaluation always yields `None`.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule. Its position is irrelevant; priority decides.
    #[must_use]
    pub fn with_rule(mut self, rule: EffectRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rules in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[EffectRule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules highest priority first; equal priorities keep declaration order.
    #[must_use]
    pub fn by_priority(&self) -> Vec<&EffectRule> {
        let mut ordered: Vec<&EffectRule> = self.rules.iter().collect();
        ordered.sort_by_key(|rule| Reverse(rule.priority));
        ordered
    }

    /// First matching tag by priority, or `None` when no rule matches.
    #[must_use]
    pub fn evaluate(&self, ctx: &RuleContext) -> Option<EffectTag> {
        self.by_priority()
            .into_iter()
            .find(|rule| rule.matches(ctx))
            .map(|rule| rule.tag)
    }

    /// Convenience: build the context and evaluate.
    #[must_use]
    pub fn evaluate_event(&self, event: &EventAttributes) -> Option<EffectTag> {
        self.evaluate(&RuleContext::from_event(event))
    }
}
