//! Output transport for a composed `Frame`.
//!
//! The pipeline never writes escape codes or touches a console handle
//! directly — it hands a `&Frame` to whatever implements `FrameBackend`,
//! abstracting over storage rather than hard-coding one destination.

pub mod ansi;

pub use self::ansi::AnsiBackend;

use crate::display::Frame;
use crate::error::RenderResult;

/// Consumes a composed frame, producing whatever side effect the
/// implementation is responsible for (writing to a terminal, an encoder, an
/// in-memory buffer for tests). Acquiring the actual console, handling
/// resize events, and raw-mode/cursor management are transport concerns
/// left to callers of this trait, not to the core crate.
pub trait FrameBackend {
    fn present(&mut self, frame: &Frame) -> RenderResult<()>;
}

/// A backend that discards every frame, useful for benchmarking the
/// pipeline stages in isolation from any transport.
#[derive(Debug, Default)]
pub struct NullBackend;

impl FrameBackend for NullBackend {
    fn present(&mut self, _frame: &Frame) -> RenderResult<()> {
        Ok(())
    }
}
