// ============================================================================
// Division Operation
// Complex quotient via the divisor's conjugate
// ============================================================================

use crate::domain::ComplexNumber;
use crate::interfaces::ComplexOperation;

/// Division: multiplies by the conjugate of `b` and scales by `|b|²`.
///
/// A zero-magnitude divisor is passed through to floating point, so the
/// result holds NaN or infinities rather than failing.
pub struct Division;

impl ComplexOperation for Division {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        a / b
    }

    fn name(&self) -> &str {
        "Division"
    }
}
