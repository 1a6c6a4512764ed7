//! Hierarchical, path scoped loggers. Every logger remembers a dotted path (like
//! `buffer.bindable`) which is attached to each record it emits.

#![warn(unsafe_code)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

use numbuf_prelude::*;



// ==============
// === LogMsg ===
// ==============

/// A log message which is formatted only if it is actually going to be emitted.
pub trait LogMsg {
    /// Runs `f` with the formatted message.
    fn with_log_msg<F: FnOnce(&str) -> T, T>(&self, f:F) -> T;
}

impl LogMsg for &str {
    fn with_log_msg<F: FnOnce(&str) -> T, T>(&self, f:F) -> T {
        f(self)
    }
}

impl<F: Fn() -> S, S:Str> LogMsg for F {
    fn with_log_msg<G: FnOnce(&str) -> T, T>(&self, f:G) -> T {
        f(self().as_ref())
    }
}



// ==============
// === Logger ===
// ==============

/// Common interface of the enabled and disabled loggers.
pub trait LoggerApi {
    /// Guard returned by `group_begin`. The group lasts until the guard is dropped.
    type Group;
    /// Creates a new logger. Path should be a unique identifier of this logger.
    fn new<T:Str>(path:T) -> Self;
    /// Creates a new logger with this logger as a parent.
    fn sub<T:Str>(&self, path:T) -> Self;
    /// Opens a group. All logs emitted while the returned guard is alive belong to it.
    fn group_begin<M:LogMsg>(&self, msg:M) -> Self::Group;
    /// Evaluates function `f` and groups all logs which occur during its execution.
    fn group<M:LogMsg,T,F:FnOnce() -> T>(&self, msg:M, f:F) -> T {
        let _group = self.group_begin(msg);
        f()
    }
    /// Log with level:trace.
    fn trace<M:LogMsg>(&self, msg:M);
    /// Log with level:debug.
    fn debug<M:LogMsg>(&self, msg:M);
    /// Log with level:info.
    fn info<M:LogMsg>(&self, msg:M);
    /// Log with level:warning.
    fn warning<M:LogMsg>(&self, msg:M);
    /// Log with level:error.
    fn error<M:LogMsg>(&self, msg:M);
}



// ==============
// === Macros ===
// ==============

/// Lazy message. Expands to a closure formatting the arguments, usable wherever `LogMsg` is
/// expected.
#[macro_export]
macro_rules! fmt {
    ($($arg:tt)*) => (||(format!($($arg)*)))
}

/// Groups all logs emitted while evaluating the body. The message may capture variables in scope,
/// for example `group!(logger, "Resizing to {len}.", { ... })`.
#[macro_export]
macro_rules! group {
    ($logger:expr, $message:tt, {$($body:tt)*}) => {{
        let __group = $crate::LoggerApi::group_begin(&$logger, $crate::fmt!($message));
        let out = {$($body)*};
        std::mem::drop(__group);
        out
    }};
}



// ===============
// === Modules ===
// ===============

pub mod disabled;
pub mod enabled;
