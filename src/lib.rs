// ============================================================================
// Complex Calculator Library
// Complex number arithmetic dispatched by operation symbol
// ============================================================================

//! # Complex Calculator
//!
//! Arithmetic on complex numbers selected by an operation symbol.
//!
//! ## Features
//!
//! - **`ComplexNumber` value type** with `+`, `*` and `/` operators
//! - **Pluggable operations** behind the `ComplexOperation` trait
//! - **Symbol dispatch table** fixed at construction (`"+"`, `"*"`, `"/"` by default)
//! - **Injected logging** through the `CalculatorLogger` trait
//!
//! ## Example
//!
//! ```rust
//! use complex_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let calculator = Calculator::new(Arc::new(NoOpLogger));
//!
//! let a = ComplexNumber::new(3.0, 4.0);
//! let b = ComplexNumber::new(5.0, 6.0);
//!
//! assert_eq!(calculator.calculate("+", a, b).unwrap().to_string(), "8 + 10i");
//! assert_eq!(calculator.calculate("*", a, b).unwrap().to_string(), "-9 + 38i");
//! assert!(calculator.calculate("^", a, b).is_err());
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, CalculatorError, CalculatorResult, ComplexNumber, OperationBinding,
        OperationKind,
    };
    pub use crate::engine::{
        create_from_config, Addition, Calculator, CalculatorBuilder, Division, Multiplication,
    };
    pub use crate::interfaces::{CalculatorLogger, ComplexOperation, NoOpLogger, TracingLogger};
}
