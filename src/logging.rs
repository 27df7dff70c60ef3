// Macros file - tracing macros are imported within the macro definitions

/// Standardized logging macros for consistent field names and message patterns
/// across the application.

// ============================================================================
// API Operation Logging Macros
// ============================================================================

/// Log the start of an API operation with consistent fields
#[macro_export]
macro_rules! log_api_start {
    ($operation:expr, flashcard_id = $flashcard_id:expr) => {
        tracing::debug!(
            operation = $operation,
            flashcard_id = $flashcard_id,
            "API operation started"
        );
    };
    ($operation:expr) => {
        tracing::debug!(operation = $operation, "API operation started");
    };
}

/// Log successful completion of an API operation
#[macro_export]
macro_rules! log_api_success {
    ($operation:expr, filename = $filename:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            filename = %$filename,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, flashcard_id = $flashcard_id:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            flashcard_id = $flashcard_id,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, count = $count:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            count = $count,
            "API operation completed: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {
        tracing::info!(
            operation = $operation,
            "API operation completed: {}", $msg
        );
    };
}

/// Log API operation errors with consistent structure
#[macro_export]
macro_rules! log_api_error {
    ($operation:expr, error = $error:expr, $msg:expr) => {
        tracing::error!(
            operation = $operation,
            error = %$error,
            "API operation failed: {}", $msg
        );
    };
}

/// Log API warnings with context
#[macro_export]
macro_rules! log_api_warn {
    ($operation:expr, flashcard_id = $flashcard_id:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            flashcard_id = $flashcard_id,
            "API operation warning: {}", $msg
        );
    };
    ($operation:expr, $msg:expr) => {
        tracing::warn!(
            operation = $operation,
            "API operation warning: {}", $msg
        );
    };
}

// ============================================================================
// System Event Logging Macros
// ============================================================================

/// Log system startup and configuration events
#[macro_export]
macro_rules! log_system_event {
    (startup, component = $component:expr, $msg:expr) => {
        tracing::info!(
            event_type = "startup",
            component = $component,
            "System event: {}",
            $msg
        );
    };
    (config, $msg:expr) => {
        tracing::info!(event_type = "configuration", "System event: {}", $msg);
    };
}

// ============================================================================
// Validation Logging Macros
// ============================================================================

/// Log validation results consistently
#[macro_export]
macro_rules! log_validation {
    (success, $component:expr, $msg:expr) => {
        tracing::debug!(
            event_type = "validation",
            component = $component,
            result = "success",
            "Validation completed: {}", $msg
        );
    };
    (failure, $component:expr, error = $error:expr) => {
        tracing::warn!(
            event_type = "validation",
            component = $component,
            result = "failure",
            error = %$error,
            "Validation failed"
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_logging_macros_compile() {
        let _error = anyhow::anyhow!("test error");

        log_api_start!("test_operation", flashcard_id = 7u64);
        log_api_start!("test_operation");

        log_api_success!("test_operation", filename = "notes.pdf", "file stored");
        log_api_success!("test_operation", flashcard_id = 7u64, "rating applied");
        log_api_success!("test_operation", count = 5, "cards generated");
        log_api_success!("test_operation", "operation completed");

        log_api_error!("test_operation", error = _error, "operation failed");

        log_api_warn!("test_operation", flashcard_id = 7u64, "card missing");
        log_api_warn!("test_operation", "no file provided");

        log_system_event!(startup, component = "server", "server starting");
        log_system_event!(config, "configuration loaded successfully");

        log_validation!(success, "configuration", "configuration validated");
    }
}
