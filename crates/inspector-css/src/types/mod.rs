//! Typed CSS values produced by the parsers.

mod color;
mod keyword;
mod layer;
mod number;
mod repetition;

pub use color::{CssColor, CssColorHex, CssColorHsl, CssColorKeyword, CssColorRgb};
pub use keyword::CssKeyword;
pub use layer::CssLayer;
pub use number::{AngleUnit, CssNumber, CssNumberUnit, LengthUnit};
pub use repetition::{ParsedCurlyBrace, ParsedDoubleBar};
