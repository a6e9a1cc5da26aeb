//! Error macros for noted

/// Return early with an invalid value error
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::NotedError::invalid_value($context, $value))
    };
}

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::NotedError::UsageError($msg.to_string()))
    };
}
