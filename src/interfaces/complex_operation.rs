// ============================================================================
// Complex Operation Interface
// Defines the contract for symbol-dispatched arithmetic operations
// ============================================================================

use crate::domain::ComplexNumber;

/// Strategy pattern interface for calculator operations
/// Implementations: Addition, Multiplication, Division
pub trait ComplexOperation: Send + Sync {
    /// Apply the operation to two operands
    ///
    /// # Arguments
    /// * `a` - Left operand
    /// * `b` - Right operand
    ///
    /// # Returns
    /// A new complex number; the operands are not modified
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber;

    /// Get the operation name for logging
    fn name(&self) -> &str;
}
