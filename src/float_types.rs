// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Standard gravity [m/s²]
pub const GRAVITY_STANDARD: Real = 9.80665;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

// Lengths, to canonical metres
pub const MM: Real = 0.001;
pub const CM: Real = 0.01;
pub const METER: Real = 1.0;
pub const INCH: Real = 0.0254;
pub const FOOT: Real = 0.0254 * 12.0;
pub const YARD: Real = 0.0254 * 36.0;

// Masses, to canonical kilograms
pub const GRAM: Real = 0.001;
pub const KG: Real = 1.0;
pub const TONNE: Real = 1000.0;
pub const OUNCE: Real = 0.028349523125;
pub const POUND: Real = 0.45359237;
