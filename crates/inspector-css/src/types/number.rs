//! Numeric CSS values and their units.
//!
//! # Example
//!
//! ```
//! use inspector_css::types::{CssNumber, CssNumberUnit, LengthUnit};
//!
//! let width = CssNumber::length(12.0, LengthUnit::Px);
//! assert_eq!(width.unit, Some(CssNumberUnit::Length(LengthUnit::Px)));
//!
//! // Unitless zero is a valid length in CSS.
//! let zero = CssNumber::unitless(0.0);
//! assert!(zero.unit.is_none());
//! ```

/// Units accepted by `<length>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Cm,
    Mm,
    Q,
    In,
    Pc,
    Pt,
    Ch,
    Em,
    Ex,
    Rem,
    Vh,
    Vw,
    Vmin,
    Vmax,
}

impl LengthUnit {
    /// Every supported length unit.
    pub const ALL: [LengthUnit; 15] = [
        LengthUnit::Px,
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Q,
        LengthUnit::In,
        LengthUnit::Pc,
        LengthUnit::Pt,
        LengthUnit::Ch,
        LengthUnit::Em,
        LengthUnit::Ex,
        LengthUnit::Rem,
        LengthUnit::Vh,
        LengthUnit::Vw,
        LengthUnit::Vmin,
        LengthUnit::Vmax,
    ];

    /// Parse a unit suffix. Units are ASCII case-insensitive.
    pub fn from_css(unit: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(unit))
    }

    /// The canonical spelling of this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Q => "Q",
            LengthUnit::In => "in",
            LengthUnit::Pc => "pc",
            LengthUnit::Pt => "pt",
            LengthUnit::Ch => "ch",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
            LengthUnit::Rem => "rem",
            LengthUnit::Vh => "vh",
            LengthUnit::Vw => "vw",
            LengthUnit::Vmin => "vmin",
            LengthUnit::Vmax => "vmax",
        }
    }
}

/// Units accepted by `<angle>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

impl AngleUnit {
    /// Parse an angle unit suffix (ASCII case-insensitive).
    pub fn from_css(unit: &str) -> Option<Self> {
        [AngleUnit::Deg, AngleUnit::Grad, AngleUnit::Rad, AngleUnit::Turn]
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(unit))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AngleUnit::Deg => "deg",
            AngleUnit::Grad => "grad",
            AngleUnit::Rad => "rad",
            AngleUnit::Turn => "turn",
        }
    }
}

/// The unit tag attached to a [`CssNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssNumberUnit {
    Length(LengthUnit),
    Angle(AngleUnit),
    Percent,
}

impl CssNumberUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssNumberUnit::Length(unit) => unit.as_str(),
            CssNumberUnit::Angle(unit) => unit.as_str(),
            CssNumberUnit::Percent => "%",
        }
    }
}

/// A numeric magnitude with an optional unit.
///
/// `unit` is `None` for plain numbers, fractional alpha values and the
/// unitless zero length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssNumber {
    pub value: f64,
    pub unit: Option<CssNumberUnit>,
}

impl CssNumber {
    pub fn new(value: f64, unit: Option<CssNumberUnit>) -> Self {
        Self { value, unit }
    }

    /// Create a number without a unit.
    pub fn unitless(value: f64) -> Self {
        Self::new(value, None)
    }

    /// Create a percentage.
    pub fn percent(value: f64) -> Self {
        Self::new(value, Some(CssNumberUnit::Percent))
    }

    /// Create a length.
    pub fn length(value: f64, unit: LengthUnit) -> Self {
        Self::new(value, Some(CssNumberUnit::Length(unit)))
    }

    /// Create an angle.
    pub fn angle(value: f64, unit: AngleUnit) -> Self {
        Self::new(value, Some(CssNumberUnit::Angle(unit)))
    }

    /// Check if this number was written as a percentage.
    pub fn is_percent(&self) -> bool {
        self.unit == Some(CssNumberUnit::Percent)
    }

    /// Check if this is unitless or measured in degrees, the two hue forms
    /// the color editor understands.
    pub fn is_degrees_or_unitless(&self) -> bool {
        matches!(self.unit, None | Some(CssNumberUnit::Angle(AngleUnit::Deg)))
    }
}
