//! Property-based invariants for colours and the monthly palette.
//!
//! 1. `Display` output parses back to the same colour.
//! 2. Short `#RGB` form expands each digit to a doubled pair.
//! 3. Contrast text is always pure black or pure white.
//! 4. Every month number maps to exactly one gradient.

use proptest::prelude::*;
use tfx_core::Month;
use tfx_style::{MonthlyPalette, Rgb};

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Hex round trips
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn display_parses_back(packed in 0u32..=0xFF_FFFF) {
        let color = Rgb::from_u32(packed);
        let text = color.to_string();
        prop_assert_eq!(text.len(), 7);
        prop_assert_eq!(Rgb::parse_hex(&text), Ok(color));
        prop_assert_eq!(text.to_lowercase().parse::<Rgb>(), Ok(color));
        prop_assert_eq!(color.as_u32(), packed);
    }

    #[test]
    fn short_form_doubles_digits(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:x}{g:x}{b:x}");
        prop_assert_eq!(Rgb::parse_hex(&short), Ok(Rgb::new(r * 17, g * 17, b * 17)));
    }

    #[test]
    fn parse_never_panics(raw in ".{0,10}") {
        let _ = Rgb::parse_hex(&raw);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Contrast
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn contrast_text_is_black_or_white(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Rgb::new(r, g, b);
        let text = color.contrast_text();
        prop_assert!(text == Rgb::new(0, 0, 0) || text == Rgb::new(255, 255, 255));
        // Light backgrounds get dark text.
        prop_assert_eq!(text == Rgb::new(0, 0, 0), color.luminance_u8() >= 128);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Palette lookup
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn month_numbers_resolve(number in any::<u8>()) {
        let by_number = MonthlyPalette::by_number(number);
        prop_assert_eq!(by_number.is_some(), (1..=12).contains(&number));
        if let Some(month) = Month::new(number) {
            prop_assert_eq!(by_number, Some(MonthlyPalette::get(month)));
        }
    }
}
