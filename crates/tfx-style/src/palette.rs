#![forbid(unsafe_code)]

//! Month → two-colour gradient lookup.
//!
//! Feeds the `monthly` effect and the tint on validated badges.

use serde::{Deserialize, Serialize};
use tfx_core::Month;

use crate::color::Rgb;

/// A two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGradient {
    pub color1: Rgb,
    pub color2: Rgb,
}

impl MonthGradient {
    #[must_use]
    pub const fn new(color1: Rgb, color2: Rgb) -> Self {
        Self { color1, color2 }
    }

    /// Averaged colour, for surfaces that cannot draw a gradient.
    #[must_use]
    pub const fn midpoint(&self) -> Rgb {
        self.color1.midpoint(self.color2)
    }

    /// CSS `linear-gradient` for web hosts.
    #[must_use]
    pub fn css(&self) -> String {
        format!("linear-gradient(135deg, {}, {})", self.color1, self.color2)
    }
}

const fn gradient(color1: u32, color2: u32) -> MonthGradient {
    MonthGradient::new(Rgb::from_u32(color1), Rgb::from_u32(color2))
}

/// One gradient per month, January first.
pub const MONTHLY_PALETTE: [MonthGradient; 12] = [
    gradient(0x00BFFF, 0xE0FFFF), // January: ice
    gradient(0xFF1493, 0xFFB6C1), // February: valentine
    gradient(0x32CD32, 0x98FB98), // March: spring green
    gradient(0xFFB7C5, 0xE6E6FA), // April: blossom
    gradient(0xFFD700, 0xFFA500), // May: sun
    gradient(0x1E90FF, 0x87CEEB), // June: sky
    gradient(0xFF4500, 0xFFD700), // July: heat
    gradient(0xFF8C00, 0xFFDAB9), // August: peach
    gradient(0x8B4513, 0xDAA520), // September: harvest
    gradient(0xFF7518, 0x2E0854), // October: pumpkin
    gradient(0x8B0000, 0xD2691E), // November: ember
    gradient(0x006400, 0xB22222), // December: holly
];

/// Static month palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthlyPalette;

impl MonthlyPalette {
    /// Gradient for a month.
    #[inline]
    #[must_use]
    pub const fn get(month: Month) -> MonthGradient {
        MONTHLY_PALETTE[month.index()]
    }

    /// Gradient for a 1-based month number; `None` outside 1-12.
    #[must_use]
    pub fn by_number(number: u8) -> Option<MonthGradient> {
        Month::new(number).map(Self::get)
    }

    /// All entries in month order.
    pub fn iter() -> impl Iterator<Item = (Month, MonthGradient)> {
        (1..=12u8).filter_map(|n| Month::new(n).map(|m| (m, Self::get(m))))
    }
}
