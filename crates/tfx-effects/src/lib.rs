#![forbid(unsafe_code)]

//! Special effects: which single visual treatment a ticket gets.
//!
//! - [`EffectTag`] / [`Effect`] - the closed tag set and the resolver output
//! - [`EffectRuleTable`] - calendar and keyword rules, highest priority first
//! - [`EffectResolver`] - override precedence on top of the rule table

pub mod resolver;
pub mod rules;
pub mod tag;

pub use resolver::{EffectResolver, Resolution, ResolutionStep};
pub use rules::{EffectRule, EffectRuleTable, RuleContext};
pub use tag::{Effect, EffectTag, UnknownEffectTag};
