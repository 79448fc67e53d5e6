//! Logging macros for ergonomic key-value construction.
//!
//! `kv!` builds the alternating key/value list the logger consumes; `info!`
//! and `error!` forward to the corresponding [`crate::Logger`] methods.
//!
//! # Examples
//!
//! ```
//! use kvlog::{kv, Logger};
//!
//! let logger = Logger::new(None).with_name("server");
//!
//! logger.info("listening", &kv!["port", 8080, "tls", true]);
//!
//! let err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
//! logger.error(Some(&err), "bind failed", &kv!["port", 8080]);
//! ```

/// Build a `Vec<FieldValue>` from an alternating key/value expression list.
///
/// Each element is converted with `FieldValue::from`, so string literals,
/// integers, floats, and booleans are accepted directly.
///
/// # Examples
///
/// ```
/// use kvlog::{kv, FieldValue};
///
/// let pairs = kv!["user", "alice", "attempts", 3];
/// assert_eq!(pairs.len(), 4);
/// assert_eq!(pairs[0], FieldValue::from("user"));
/// ```
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::FieldValue>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::FieldValue::from($item)),+]
    };
}

/// Emit an informational line through a [`crate::Logger`].
///
/// # Examples
///
/// ```
/// # use kvlog::{info, Logger};
/// # let logger = Logger::new(None);
/// info!(logger, "cache warmed");
/// info!(logger, "cache warmed", "entries", 1024);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $logger.info($msg, &$crate::kv![$($kv),*])
    };
}

/// Emit an error line through a [`crate::Logger`].
///
/// The first argument after the logger is the error, as
/// `Option<&dyn std::error::Error>`.
///
/// # Examples
///
/// ```
/// # use kvlog::{error, Logger};
/// # let logger = Logger::new(None);
/// error!(logger, None, "unreachable state", "state", "draining");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $err:expr, $msg:expr $(, $kv:expr)* $(,)?) => {
        $logger.error($err, $msg, &$crate::kv![$($kv),*])
    };
}
