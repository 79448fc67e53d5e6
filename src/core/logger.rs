//! Logger instance
//!
//! A `Logger` is a small immutable value: every modifier returns a new
//! instance, so a parent logger can be shared across threads and specialized
//! per subsystem without synchronization. The only shared mutable state is
//! the process-wide verbosity threshold in [`super::verbosity`].

use super::{
    callsite::{frames_to_caller, CallerFrame},
    flatten::flatten,
    sink::{LogSink, StderrSink},
    value::FieldValue,
    verbosity,
};
use std::sync::Arc;

/// Frames contributed by the adapter's own info/error -> dispatch chain.
const ADAPTER_FRAME_OFFSET: usize = 2;

/// Construction options for [`Logger`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Biases the assumed number of call frames to the true caller. Useful
    /// when the calling code wraps this logger in a shim of its own.
    /// Negative values are treated as zero.
    pub depth: i32,
}

/// A leveled, named, structured key-value logger.
///
/// Instances are cheap to clone and never mutated in place; `v`,
/// `with_name`, and `with_values` all return a new instance with an
/// independent copy of the bound context, so no two instances ever share a
/// backing buffer.
#[derive(Clone)]
pub struct Logger {
    sink: Option<Arc<dyn LogSink>>,
    level: i32,
    prefix: String,
    values: Vec<FieldValue>,
    depth: usize,
}

impl Logger {
    /// Create a logger dispatching to `sink`, or to the process-default
    /// stderr facility when `sink` is `None`.
    pub fn new(sink: Option<Arc<dyn LogSink>>) -> Self {
        Self::new_with_options(sink, Options::default())
    }

    pub fn new_with_options(sink: Option<Arc<dyn LogSink>>, opts: Options) -> Self {
        Self {
            sink,
            level: 0,
            prefix: String::new(),
            values: Vec::new(),
            depth: opts.depth.max(0) as usize,
        }
    }

    /// Return a logger whose verbosity level is raised by `level`.
    ///
    /// Cumulative: `logger.v(1).v(1)` requires threshold 2. Does not check
    /// [`Logger::enabled`].
    #[must_use]
    pub fn v(&self, level: i32) -> Logger {
        let mut new = self.clone();
        new.level += level;
        new
    }

    /// Return a logger with `name` appended to the name prefix.
    ///
    /// Name segments are joined with `/`. Callers should not pass `/` in
    /// `name`, but this is not enforced.
    #[must_use]
    pub fn with_name(&self, name: &str) -> Logger {
        let mut new = self.clone();
        if !new.prefix.is_empty() {
            new.prefix.push('/');
        }
        new.prefix.push_str(name);
        new
    }

    /// Return a logger with `kv_list` appended to the bound context.
    ///
    /// Pairs are not deduplicated here; duplicates collapse at flatten time,
    /// last occurrence winning.
    #[must_use]
    pub fn with_values(&self, kv_list: &[FieldValue]) -> Logger {
        let mut new = self.clone();
        new.values.extend_from_slice(kv_list);
        new
    }

    /// Whether an informational call on this instance would be emitted.
    pub fn enabled(&self) -> bool {
        verbosity::enabled_at(self.level)
    }

    /// Emit an informational line if this instance passes the verbosity
    /// gate. When gated off, the sink is not touched at all.
    ///
    /// Field order: level, message, bound context, call-supplied pairs.
    #[track_caller]
    pub fn info(&self, msg: &str, kv_list: &[FieldValue]) {
        if !self.enabled() {
            return;
        }
        let frame = CallerFrame::here();
        let lvl_str = flatten(&["level".into(), self.level.into()]);
        let msg_str = flatten(&["msg".into(), msg.into()]);
        let fixed_str = flatten(&self.values);
        let user_str = flatten(kv_list);
        self.dispatch(
            frames_to_caller(&frame) + self.depth,
            format!(
                "{} {} {} {} {}\n",
                self.prefix, lvl_str, msg_str, fixed_str, user_str
            ),
        );
    }

    /// Emit an error line. Errors are never filtered by verbosity.
    ///
    /// The `error` field carries the error's description, or null when
    /// `err` is `None`. Field order: error, message, bound context,
    /// call-supplied pairs.
    #[track_caller]
    pub fn error(&self, err: Option<&(dyn std::error::Error + 'static)>, msg: &str, kv_list: &[FieldValue]) {
        let frame = CallerFrame::here();
        let loggable = match err {
            Some(e) => FieldValue::from_error(e),
            None => FieldValue::Null,
        };
        let err_str = flatten(&["error".into(), loggable]);
        let msg_str = flatten(&["msg".into(), msg.into()]);
        let fixed_str = flatten(&self.values);
        let user_str = flatten(kv_list);
        self.dispatch(
            frames_to_caller(&frame) + self.depth,
            format!(
                "{} {} {} {} {}\n",
                self.prefix, err_str, msg_str, fixed_str, user_str
            ),
        );
    }

    /// Hand a rendered line to the sink, or to the process-default facility
    /// when none is bound. Sink errors are swallowed: logging must never
    /// raise a failure into caller code.
    fn dispatch(&self, calldepth: usize, line: String) {
        let depth = calldepth + ADAPTER_FRAME_OFFSET;
        match &self.sink {
            Some(sink) => {
                let _ = sink.output(depth, &line);
            }
            None => {
                let _ = StderrSink.output(depth, &line);
            }
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("prefix", &self.prefix)
            .field("values", &self.values)
            .field("depth", &self.depth)
            .field("sink", &self.sink.as_ref().map(|_| "..."))
            .finish()
    }
}
