//! Call-site attribution
//!
//! Computes how many stack frames separate the public logging call from the
//! point where the line reaches the sink, so sinks can report accurate
//! file/line attribution. Frames planted by code-generation wrappers are
//! skipped. Attribution is best-effort and never fatal.

/// File identifier of synthetic frames produced by code-generation wrappers.
pub const AUTOGENERATED_FILE: &str = "<autogenerated>";

/// How many candidate frames to inspect before giving up.
const MAX_FRAME_SEARCH: usize = 3;

/// Depth reported when no suitable frame is found within the search bound.
const FALLBACK_DEPTH: usize = 1;

/// Abstract view of the call stack above a logging call.
///
/// Decouples the skip logic from any particular runtime's frame
/// representation; tests substitute synthetic stacks.
pub trait CallFrames {
    /// File identifier of the frame `depth` levels above the logging call,
    /// or `None` if the stack cannot be inspected that far.
    fn file_at(&self, depth: usize) -> Option<&str>;
}

/// Number of frames to climb from the adapter's output point to the caller.
///
/// Walks candidate depths starting at 1, skipping autogenerated frames, and
/// caps the search at [`MAX_FRAME_SEARCH`] candidates. An uninspectable
/// frame counts as the caller: a missing file identifier is not the
/// autogenerated marker.
pub fn frames_to_caller(frames: &dyn CallFrames) -> usize {
    for depth in 1..MAX_FRAME_SEARCH {
        if frames.file_at(depth + 1) != Some(AUTOGENERATED_FILE) {
            return depth;
        }
    }
    FALLBACK_DEPTH
}

/// [`CallFrames`] over the single source location Rust makes available at a
/// `#[track_caller]` boundary.
#[derive(Debug, Clone, Copy)]
pub struct CallerFrame {
    file: &'static str,
}

impl CallerFrame {
    /// Capture the caller's source location.
    ///
    /// Must be invoked from a `#[track_caller]` chain so the captured
    /// location is the public logging call, not the adapter's own frame.
    #[track_caller]
    pub fn here() -> Self {
        Self {
            file: std::panic::Location::caller().file(),
        }
    }

    #[cfg(test)]
    fn synthetic(file: &'static str) -> Self {
        Self { file }
    }
}

impl CallFrames for CallerFrame {
    fn file_at(&self, depth: usize) -> Option<&str> {
        // The captured location sits immediately above the output point.
        (depth == 2).then_some(self.file)
    }
}
