//! Error macros for pathrace

/// Macro for returning an invalid graph error
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::PathraceError::invalid_graph(format!($($arg)*)))
    };
}
