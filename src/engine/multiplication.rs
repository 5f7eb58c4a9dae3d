// ============================================================================
// Multiplication Operation
// Complex product
// ============================================================================

use crate::domain::ComplexNumber;
use crate::interfaces::ComplexOperation;

/// Multiplication: `(ac - bd) + (ad + bc)i`
pub struct Multiplication;

impl ComplexOperation for Multiplication {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        a * b
    }

    fn name(&self) -> &str {
        "Multiplication"
    }
}
