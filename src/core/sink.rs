//! Sink trait for log line destinations
//!
//! A sink accepts a fully rendered line together with the call depth of the
//! frame that issued it, so implementations with access to the stack can
//! attribute the line to the right file and line number.

use super::error::Result;
use parking_lot::Mutex;
use std::io::Write;

/// Destination capability for rendered log lines.
///
/// One operation: write `line` (newline included) attributed to the frame
/// `calldepth` levels above this call. The adapter discards any error a sink
/// returns; logging is best-effort by contract.
pub trait LogSink: Send + Sync {
    fn output(&self, calldepth: usize, line: &str) -> Result<()>;
}

/// Process-default sink, used when a logger holds no sink of its own.
///
/// Writes to stderr and ignores the call depth.
#[derive(Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn output(&self, _calldepth: usize, line: &str) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// Sink over any writer, for files, pipes, or in-memory buffers in tests.
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn output(&self, _calldepth: usize, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        Ok(())
    }
}
