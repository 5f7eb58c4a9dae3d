// ============================================================================
// Complex Number
// Immutable value type with closed-form arithmetic
// ============================================================================

use std::fmt;
use std::ops::{Add, Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complex number `real + imaginary·i` backed by two `f64` components.
///
/// Values are `Copy`; every arithmetic operation returns a new instance.
///
/// # Example
/// ```
/// use complex_calculator::domain::ComplexNumber;
///
/// let a = ComplexNumber::new(3.0, 4.0);
/// let b = ComplexNumber::new(5.0, 6.0);
/// assert_eq!((a + b).to_display_string(), "8 + 10i");
/// assert_eq!((a * b).to_display_string(), "-9 + 38i");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexNumber {
    /// Real component
    pub real: f64,

    /// Imaginary component
    pub imaginary: f64,
}

impl ComplexNumber {
    /// Additive identity `0 + 0i`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Multiplicative identity `1 + 0i`
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit `0 + 1i`
    pub const I: Self = Self::new(0.0, 1.0);

    /// Create a complex number from its components
    #[inline]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Squared magnitude `real² + imaginary²`
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }

    /// `(a.real + b.real, a.imaginary + b.imaginary)`
    #[inline]
    pub fn add(a: Self, b: Self) -> Self {
        Self::new(a.real + b.real, a.imaginary + b.imaginary)
    }

    /// `(ac - bd, ad + bc)` for `a = (a, b)`, `b = (c, d)`
    #[inline]
    pub fn multiply(a: Self, b: Self) -> Self {
        let real = a.real * b.real - a.imaginary * b.imaginary;
        let imaginary = a.real * b.imaginary + a.imaginary * b.real;
        Self::new(real, imaginary)
    }

    /// Divide `a` by `b` using the conjugate of the divisor.
    ///
    /// A divisor with zero magnitude is not rejected: the result follows
    /// IEEE-754 and contains infinities or NaN.
    #[inline]
    pub fn divide(a: Self, b: Self) -> Self {
        let denominator = b.norm_sqr();
        let real = (a.real * b.real + a.imaginary * b.imaginary) / denominator;
        let imaginary = (a.imaginary * b.real - a.real * b.imaginary) / denominator;
        Self::new(real, imaginary)
    }

    /// Render as `"<real> + <imaginary>i"` with shortest round-trip decimals
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// True when both components are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imaginary.is_finite()
    }

    /// True when either component is NaN
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.real.is_nan() || self.imaginary.is_nan()
    }
}

// ============================================================================
// Operator Traits
// ============================================================================

impl Add for ComplexNumber {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        ComplexNumber::add(self, rhs)
    }
}

impl Mul for ComplexNumber {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        ComplexNumber::multiply(self, rhs)
    }
}

impl Div for ComplexNumber {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        ComplexNumber::divide(self, rhs)
    }
}

// ============================================================================
// Conversions and Formatting
// ============================================================================

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

impl From<f64> for ComplexNumber {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl fmt::Display for ComplexNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i", self.real, self.imaginary)
    }
}
