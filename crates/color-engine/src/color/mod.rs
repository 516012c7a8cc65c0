//! Color types and conversions
//!
//! - [`Rgb`]: 8-bit gamma-encoded sRGB, parsed from and formatted to hex
//! - [`Lab`]: CIE L*a*b* (D65), the working space for distance and matching
//! - [`Hsl`], [`Cmyk`]: display-only representations
//! - [`ColorBreakdown`]: all of the above for one color

mod breakdown;
mod cmyk;
pub(crate) mod gamma;
mod hsl;
mod lab;
mod rgb;

pub use breakdown::ColorBreakdown;
pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use lab::{Lab, D65_WHITE, MAX_LAB_COMPONENT};
pub use rgb::Rgb;
