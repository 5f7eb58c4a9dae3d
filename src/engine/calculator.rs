// ============================================================================
// Calculator
// Dispatches operation symbols to pluggable complex operations
// ============================================================================

use crate::domain::{CalculatorError, CalculatorResult, ComplexNumber, OperationKind};
use crate::engine::{Addition, Division, Multiplication};
use crate::interfaces::{CalculatorLogger, ComplexOperation};
use std::collections::HashMap;
use std::sync::Arc;

/// Complex number calculator with a fixed symbol dispatch table
pub struct Calculator {
    /// Symbol to operation mapping, read-only after construction
    operations: HashMap<String, Box<dyn ComplexOperation>>,

    /// Collaborator receiving info/error entries
    logger: Arc<dyn CalculatorLogger>,
}

impl Calculator {
    /// Create a calculator with `+`, `*` and `/` registered
    pub fn new(logger: Arc<dyn CalculatorLogger>) -> Self {
        let operations = OperationKind::ALL
            .iter()
            .map(|kind| (kind.default_symbol().to_string(), create_operation(*kind)))
            .collect();

        Self::with_operations(operations, logger)
    }

    /// Create a calculator from a prebuilt dispatch table
    pub(crate) fn with_operations(
        operations: HashMap<String, Box<dyn ComplexOperation>>,
        logger: Arc<dyn CalculatorLogger>,
    ) -> Self {
        Self { operations, logger }
    }

    /// Apply the operation registered under `symbol` to `a` and `b`
    ///
    /// # Errors
    /// `CalculatorError::UnknownOperation` when no operation is bound to `symbol`
    pub fn calculate(
        &self,
        symbol: &str,
        a: ComplexNumber,
        b: ComplexNumber,
    ) -> CalculatorResult<ComplexNumber> {
        let Some(operation) = self.operations.get(symbol) else {
            self.logger.error(&format!("Unknown operation: {}", symbol));
            return Err(CalculatorError::UnknownOperation {
                symbol: symbol.to_string(),
            });
        };

        self.logger
            .info(&format!("Performing operation: {} on {} and {}", symbol, a, b));

        Ok(operation.execute(a, b))
    }

    /// Whether an operation is bound to `symbol`
    pub fn supports(&self, symbol: &str) -> bool {
        self.operations.contains_key(symbol)
    }

    /// Registered symbols in sorted order
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    /// Name of the operation bound to `symbol`
    pub fn operation_name(&self, symbol: &str) -> Option<&str> {
        self.operations.get(symbol).map(|op| op.name())
    }
}

/// Instantiate the built-in operation for `kind`
pub(crate) fn create_operation(kind: OperationKind) -> Box<dyn ComplexOperation> {
    match kind {
        OperationKind::Addition => Box::new(Addition),
        OperationKind::Multiplication => Box::new(Multiplication),
        OperationKind::Division => Box::new(Division),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpLogger;
    use quickcheck::{quickcheck, TestResult};
    use std::sync::Mutex;

    /// Captures entries as `(level, message)` pairs
    #[derive(Default)]
    struct RecordingLogger {
        entries: Mutex<Vec<(&'static str, String)>>,
    }

    impl RecordingLogger {
        fn entries(&self) -> Vec<(&'static str, String)> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl CalculatorLogger for RecordingLogger {
        fn info(&self, message: &str) {
            self.entries.lock().unwrap().push(("info", message.to_string()));
        }

        fn error(&self, message: &str) {
            self.entries.lock().unwrap().push(("error", message.to_string()));
        }
    }

    fn operands() -> (ComplexNumber, ComplexNumber) {
        (ComplexNumber::new(3.0, 4.0), ComplexNumber::new(5.0, 6.0))
    }

    #[test]
    fn test_calculate_builtin_symbols() {
        let calculator = Calculator::new(Arc::new(NoOpLogger));
        let (a, b) = operands();

        assert_eq!(
            calculator.calculate("+", a, b).unwrap().to_display_string(),
            "8 + 10i"
        );
        assert_eq!(
            calculator.calculate("*", a, b).unwrap().to_display_string(),
            "-9 + 38i"
        );
        assert_eq!(
            calculator.calculate("/", a, b).unwrap().to_display_string(),
            "0.639344262295082 + 0.03278688524590164i"
        );
    }

    #[test]
    fn test_unknown_symbol() {
        let calculator = Calculator::new(Arc::new(NoOpLogger));
        let (a, b) = operands();

        let err = calculator.calculate("^", a, b).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::UnknownOperation {
                symbol: "^".to_string()
            }
        );
        assert_eq!(err.symbol(), Some("^"));
    }

    #[test]
    fn test_info_logged_before_execution() {
        let logger = Arc::new(RecordingLogger::default());
        let calculator = Calculator::new(logger.clone());
        let (a, b) = operands();

        calculator.calculate("+", a, b).unwrap();

        assert_eq!(
            logger.entries(),
            vec![(
                "info",
                "Performing operation: + on 3 + 4i and 5 + 6i".to_string()
            )]
        );
    }

    #[test]
    fn test_error_logged_for_unknown_symbol() {
        let logger = Arc::new(RecordingLogger::default());
        let calculator = Calculator::new(logger.clone());
        let (a, b) = operands();

        assert!(calculator.calculate("%", a, b).is_err());

        assert_eq!(
            logger.entries(),
            vec![("error", "Unknown operation: %".to_string())]
        );
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let calculator = Calculator::new(Arc::new(NoOpLogger));
        let result = calculator
            .calculate("/", ComplexNumber::new(1.0, 1.0), ComplexNumber::ZERO)
            .unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_table_introspection() {
        let calculator = Calculator::new(Arc::new(NoOpLogger));
        assert_eq!(calculator.symbols(), vec!["*", "+", "/"]);
        assert!(calculator.supports("/"));
        assert!(!calculator.supports("-"));
        assert_eq!(calculator.operation_name("*"), Some("Multiplication"));
        assert_eq!(calculator.operation_name("-"), None);
    }

    #[test]
    fn test_calculator_shared_across_threads() {
        let calculator = Arc::new(Calculator::new(Arc::new(NoOpLogger)));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let calculator = Arc::clone(&calculator);
                std::thread::spawn(move || {
                    let a = ComplexNumber::new(i as f64, 1.0);
                    calculator.calculate("+", a, ComplexNumber::ONE).unwrap()
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), ComplexNumber::new(i as f64 + 1.0, 1.0));
        }
    }

    fn dispatch_matches_direct(ar: f64, ai: f64, br: f64, bi: f64) -> TestResult {
        if ![ar, ai, br, bi].iter().all(|v| v.is_finite()) {
            return TestResult::discard();
        }

        let calculator = Calculator::new(Arc::new(NoOpLogger));
        let a = ComplexNumber::new(ar, ai);
        let b = ComplexNumber::new(br, bi);

        let same = |lhs: ComplexNumber, rhs: ComplexNumber| {
            lhs.real.to_bits() == rhs.real.to_bits()
                && lhs.imaginary.to_bits() == rhs.imaginary.to_bits()
        };

        TestResult::from_bool(
            same(calculator.calculate("+", a, b).unwrap(), ComplexNumber::add(a, b))
                && same(calculator.calculate("*", a, b).unwrap(), ComplexNumber::multiply(a, b))
                && same(calculator.calculate("/", a, b).unwrap(), ComplexNumber::divide(a, b)),
        )
    }

    #[test]
    fn test_dispatch_matches_direct_operations() {
        quickcheck(dispatch_matches_direct as fn(f64, f64, f64, f64) -> TestResult);
    }
}
