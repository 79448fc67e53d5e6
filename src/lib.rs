//! # kvlog
//!
//! A leveled, structured key-value logging adapter over pluggable line
//! sinks.
//!
//! ## Features
//!
//! - **Deterministic output**: keys are deduplicated and sorted, so the same
//!   logical content always renders the same line
//! - **Verbosity filtering**: a process-wide threshold against per-instance
//!   levels raised with [`Logger::v`]
//! - **Hierarchical naming and bound context**: [`Logger::with_name`] and
//!   [`Logger::with_values`] return new instances, safe to share across
//!   threads
//! - **Call-site attribution**: each line reaches the sink with the call
//!   depth of the frame that issued it

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        flatten, frames_to_caller, render, set_verbosity, verbosity, CallFrames, CallerFrame,
        FieldValue, LogSink, Logger, LoggerError, Options, Result, StderrSink, WriterSink,
    };
}

pub use core::{
    flatten, frames_to_caller, render, set_verbosity, verbosity, CallFrames, CallerFrame,
    FieldValue, LogSink, Logger, LoggerError, Options, Result, StderrSink, WriterSink,
    AUTOGENERATED_FILE, ENCODING_PLACEHOLDER, MISSING_VALUE,
};
