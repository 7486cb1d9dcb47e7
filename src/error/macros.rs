//! # Error construction macros

/// Build a `NotFound` error for a resource.
#[macro_export]
macro_rules! not_found {
    ($msg:expr) => {
        $crate::error::AppError::not_found($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::not_found(format!($fmt, $($arg)*))
    };
}

/// Build an `Unauthorized` error.
#[macro_export]
macro_rules! unauthorized {
    ($msg:expr) => {
        $crate::error::AppError::unauthorized($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::unauthorized(format!($fmt, $($arg)*))
    };
}

/// Build a `Forbidden` error.
#[macro_export]
macro_rules! forbidden {
    ($msg:expr) => {
        $crate::error::AppError::forbidden($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::forbidden(format!($fmt, $($arg)*))
    };
}

/// Build an `Internal` error.
#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::AppError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::AppError::internal(format!($fmt, $($arg)*))
    };
}
