//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.
//! Field keys come from `approvex_core_types::schema`, which invoking
//! crates must therefore also depend on.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use approvex_core::log_op_start;
/// log_op_start!("compare_batch");
/// log_op_start!("compare_batch", name = "TestTransactions");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvex_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvex_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use approvex_core::log_op_end;
/// log_op_end!("compare_batch", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvex_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = approvex_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// # Example
///
/// ```
/// # use approvex_core::log_op_error;
/// # use approvex_core::errors::{AxError, AxErrorKind};
/// let err = AxError::new(AxErrorKind::Io).with_message("reference unreadable");
/// log_op_error!("approve_batch", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::AxError;
        let ax_err: AxError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = approvex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ax_err.kind(),
            err.code = ax_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::AxError;
        let ax_err: AxError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = approvex_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ax_err.kind(),
            err.code = ax_err.code(),
            $($field)*
        );
    }};
}
