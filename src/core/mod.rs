//! Core components of the logging adapter

pub mod callsite;
pub mod error;
pub mod flatten;
pub mod logger;
pub mod sink;
pub mod value;
pub mod verbosity;

pub use callsite::{frames_to_caller, CallFrames, CallerFrame, AUTOGENERATED_FILE};
pub use error::{LoggerError, Result};
pub use flatten::{flatten, MISSING_VALUE};
pub use logger::{Logger, Options};
pub use sink::{LogSink, StderrSink, WriterSink};
pub use value::{render, FieldValue, ENCODING_PLACEHOLDER};
pub use verbosity::{set_verbosity, verbosity};
