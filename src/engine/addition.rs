// ============================================================================
// Addition Operation
// Component-wise sum of two complex numbers
// ============================================================================

use crate::domain::ComplexNumber;
use crate::interfaces::ComplexOperation;

/// Addition: `(a + c) + (b + d)i`
pub struct Addition;

impl ComplexOperation for Addition {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        a + b
    }

    fn name(&self) -> &str {
        "Addition"
    }
}
