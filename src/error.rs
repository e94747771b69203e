//! Error taxonomy for the renderer core.
//!
//! The pipeline itself is infallible at the per-primitive level: degenerate
//! triangles are dropped silently rather than surfaced as an `Err`. Only the
//! loader (asset I/O, parsing, texture decoding) and buffer allocation can
//! actually fail a caller-visible operation.

use std::path::PathBuf;

/// Errors raised while loading assets or running the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// An OBJ, MTL, or texture path could not be opened.
    #[error("asset missing: {0}")]
    AssetMissing(PathBuf),

    /// A line of an OBJ or MTL file could not be parsed.
    #[error("parse error in {path}:{line}: {reason}")]
    ParseError {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The image decoder returned no usable pixel data.
    #[error("texture decode failed: {0}")]
    TextureDecodeFailed(PathBuf),

    /// A geometric operation (projection, inverse-transpose, edge function)
    /// had no well-defined result for its inputs.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    /// A per-frame scratch buffer could not be allocated. Treated as fatal.
    #[error("buffer allocation failed: {0}")]
    BufferAllocFailed(&'static str),
}

/// Convenience alias used throughout the crate.
pub type RenderResult<T> = Result<T, RenderError>;
