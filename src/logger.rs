//! Pluggable logging collaborator.
//!
//! The gateway reports statement outcomes through a [`GatewayLogger`] rather
//! than a global logging facility; callers supply their own implementation or
//! accept the console default.

/// Capability set for gateway outcome logging.
pub trait GatewayLogger: Send + Sync {
    /// Record an error-severity message.
    fn error(&self, message: &str);

    /// Record a debug-severity message.
    fn debug(&self, message: &str);

    /// Record an info-severity message.
    fn info(&self, message: &str);
}

/// Default logger writing to the standard streams.
///
/// Selected when no logger is supplied at gateway construction. Errors go to
/// stderr, everything else to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl GatewayLogger for ConsoleLogger {
    fn error(&self, message: &str) {
        eprintln!("[error] {message}");
    }

    fn debug(&self, message: &str) {
        println!("[debug] {message}");
    }

    fn info(&self, message: &str) {
        println!("[info] {message}");
    }
}

/// Adapter forwarding gateway events to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl GatewayLogger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!(target: "pg_gateway", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "pg_gateway", "{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "pg_gateway", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_console_logger_does_not_panic() {
        let logger = ConsoleLogger;
        logger.info("info message");
        logger.debug("debug message");
        logger.error("error message");
    }

    #[test]
    fn test_loggers_as_trait_objects() {
        let loggers: Vec<Arc<dyn GatewayLogger>> =
            vec![Arc::new(ConsoleLogger), Arc::new(TracingLogger)];
        for logger in loggers {
            logger.info("shared by reference");
        }
    }
}
