// ============================================================================
// Basic Usage Example
// ============================================================================

use complex_calculator::prelude::*;
use complex_calculator::utils::init_logging;
use std::sync::Arc;

fn main() -> Result<(), CalculatorError> {
    init_logging();

    let calculator = Calculator::new(Arc::new(TracingLogger));

    let a = ComplexNumber::new(3.0, 4.0);
    let b = ComplexNumber::new(5.0, 6.0);

    println!("Addition: {}", calculator.calculate("+", a, b)?);
    println!("Multiplication: {}", calculator.calculate("*", a, b)?);
    println!("Division: {}", calculator.calculate("/", a, b)?);

    Ok(())
}
