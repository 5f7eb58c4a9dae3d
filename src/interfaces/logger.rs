// ============================================================================
// Calculator Logger Interface
// Injected collaborator receiving calculation log entries
// ============================================================================

/// Logging collaborator used by the calculator
/// Implementations decide destination and formatting
pub trait CalculatorLogger: Send + Sync {
    /// Record an informational entry
    fn info(&self, message: &str);

    /// Record an error entry
    fn error(&self, message: &str);
}

/// No-op logger for testing
pub struct NoOpLogger;

impl CalculatorLogger for NoOpLogger {
    fn info(&self, _message: &str) {
        // Do nothing
    }

    fn error(&self, _message: &str) {
        // Do nothing
    }
}

/// Logger forwarding entries to `tracing`
pub struct TracingLogger;

impl CalculatorLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "complex_calculator", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "complex_calculator", "{}", message);
    }
}
