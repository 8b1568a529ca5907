#![forbid(unsafe_code)]

//! Effect resolution.
//!
//! Precedence, first hit wins:
//!
//! 1. double-golden ticket → `rainbow`
//! 2. saved effect on the ticket → that effect, verbatim
//! 3. effects disabled on the event → `none`
//! 4. no ticket, or a real ticket that is not validated → `none`
//! 5. real validated ticket with nothing saved → `none`
//! 6. preview ticket → rule table, with the current month feeding the
//!    `monthly` floor, so a preview always gets some effect
//!
//! Real effects are chosen once, at validation time, by the server and saved
//! on the ticket. The rule table here only previews what that choice would be.

use std::fmt;
use std::sync::Arc;

use tfx_core::{Clock, EngineConfig, EventAttributes, SystemClock, TicketState};
use tfx_style::{MonthGradient, MonthlyPalette};

use crate::rules::{EffectRuleTable, RuleContext};
use crate::tag::{Effect, EffectTag};

/// Which precedence step decided a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStep {
    DoubleGolden,
    Saved,
    EffectsDisabled,
    Ineligible,
    RealTicketUnsaved,
    Rule,
}

impl ResolutionStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DoubleGolden => "double_golden",
            Self::Saved => "saved",
            Self::EffectsDisabled => "effects_disabled",
            Self::Ineligible => "ineligible",
            Self::RealTicketUnsaved => "real_ticket_unsaved",
            Self::Rule => "rule",
        }
    }
}

impl fmt::Display for ResolutionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An effect together with the step that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub effect: Effect,
    pub step: ResolutionStep,
}

impl Resolution {
    fn new(effect: impl Into<Effect>, step: ResolutionStep) -> Self {
        Self {
            effect: effect.into(),
            step,
        }
    }
}

/// Turns an (event, ticket) pair into exactly one effect.
#[derive(Clone)]
pub struct EffectResolver {
    table: EffectRuleTable,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for EffectResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectResolver")
            .field("table", &self.table)
            .field("current_month", &self.clock.current_month())
            .finish()
    }
}

impl Default for EffectResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl EffectResolver {
    /// Resolver over a custom table and clock.
    #[must_use]
    pub fn new(table: EffectRuleTable, clock: Arc<dyn Clock>) -> Self {
        Self { table, clock }
    }

    /// Standard rules, wall clock.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(EffectRuleTable::standard(), Arc::new(SystemClock))
    }

    /// Standard rules, clock taken from configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(EffectRuleTable::standard(), config.clock())
    }

    #[must_use]
    pub fn table(&self) -> &EffectRuleTable {
        &self.table
    }

    /// The single effect to show for this event/ticket pair.
    #[must_use]
    pub fn resolve(&self, event: &EventAttributes, ticket: Option<&TicketState>) -> Effect {
        self.explain(event, ticket).effect
    }

    /// [`resolve`](Self::resolve), also reporting which step decided.
    #[must_use]
    pub fn explain(&self, event: &EventAttributes, ticket: Option<&TicketState>) -> Resolution {
        let span = tfx_core::debug_span!("tfx.resolve", event = %event.name);
        let _guard = span.enter();

        let resolution = self.decide(event, ticket);
        tfx_core::debug!(
            step = resolution.step.as_str(),
            effect = resolution.effect.as_str(),
            "resolved effect"
        );
        resolution
    }

    fn decide(&self, event: &EventAttributes, ticket: Option<&TicketState>) -> Resolution {
        if ticket.is_some_and(|t| t.is_double_golden) {
            return Resolution::new(EffectTag::Rainbow, ResolutionStep::DoubleGolden);
        }
        if let Some(saved) = ticket.and_then(TicketState::saved_effect) {
            return Resolution::new(Effect::from_saved(saved), ResolutionStep::Saved);
        }
        if !event.special_effects_enabled {
            return Resolution::new(EffectTag::None, ResolutionStep::EffectsDisabled);
        }
        let Some(ticket) = ticket else {
            return Resolution::new(EffectTag::None, ResolutionStep::Ineligible);
        };
        if !ticket.validated_flag() && !ticket.is_preview {
            return Resolution::new(EffectTag::None, ResolutionStep::Ineligible);
        }
        if !ticket.is_preview {
            // Validation should have saved an effect. Keep returning `none`,
            // but make the gap visible.
            tfx_core::warn!(
                event = %event.name,
                "validated ticket has no saved special effect"
            );
            return Resolution::new(EffectTag::None, ResolutionStep::RealTicketUnsaved);
        }

        let tag = self
            .table
            .evaluate(&RuleContext::for_preview(event, self.clock.current_month()))
            .unwrap_or(EffectTag::None);
        Resolution::new(tag, ResolutionStep::Rule)
    }

    /// Gradient for the `monthly` treatment.
    ///
    /// Preview tickets take the current month (the viewer's "now"); everything
    /// else takes the month written in the event date. `None` when the event
    /// date yields no month.
    #[must_use]
    pub fn monthly_color(
        &self,
        event: &EventAttributes,
        ticket: Option<&TicketState>,
    ) -> Option<MonthGradient> {
        let month = if ticket.is_some_and(|t| t.is_preview) {
            Some(self.clock.current_month())
        } else {
            event.month()
        };
        month.map(MonthlyPalette::get)
    }
}
