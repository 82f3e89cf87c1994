//! Small crate-wide convenience macros.

/// Log a formatted debug line through the `log` facade.
///
/// The host decides whether a logger is installed; in tests nothing is
/// printed unless one is. Keeps call sites as terse as `println!`.
///
/// ```rust,ignore
/// debug_log!("placed panel {} at ({}, {})", id, x, y);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}
