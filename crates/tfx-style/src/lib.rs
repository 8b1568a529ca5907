#![forbid(unsafe_code)]

//! Colours and palettes.

pub mod color;
pub mod palette;

pub use color::{ColorParseError, Rgb};
pub use palette::{MONTHLY_PALETTE, MonthGradient, MonthlyPalette};
