#![forbid(unsafe_code)]

//! Clock seam for "current month" lookups.
//!
//! Preview tickets colour themselves with the month the viewer is in, not the
//! month of the event. Everything else in the engine is a pure function of its
//! inputs, so the one wall-clock read goes through this trait and tests pin it.

use crate::date::{Month, today_local};

/// Source of the current calendar month.
pub trait Clock: Send + Sync {
    /// The month "now" falls in.
    fn current_month(&self) -> Month;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> Month {
        today_local().month()
    }
}

/// Always answers the same month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Month);

impl Clock for FixedClock {
    fn current_month(&self) -> Month {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_month(&self) -> Month {
        (**self).current_month()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn current_month(&self) -> Month {
        (**self).current_month()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn current_month(&self) -> Month {
        (**self).current_month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn fixed_clock_is_fixed() {
        let clock = FixedClock(Month::JUNE);
        assert_eq!(clock.current_month(), Month::JUNE);
        assert_eq!(clock.current_month(), Month::JUNE);
    }

    #[test]
    fn clock_through_pointers() {
        let boxed: Box<dyn Clock> = Box::new(FixedClock(Month::MARCH));
        assert_eq!(boxed.current_month(), Month::MARCH);
        let shared: Arc<dyn Clock> = Arc::new(FixedClock(Month::MAY));
        assert_eq!(shared.current_month(), Month::MAY);
        let borrowed = &FixedClock(Month::JULY);
        assert_eq!(Clock::current_month(&borrowed), Month::JULY);
    }

    #[test]
    fn system_clock_answers_a_valid_month() {
        let month = SystemClock.current_month();
        assert!((1..=12).contains(&month.number()));
    }
}
