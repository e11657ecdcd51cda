//! Rendered previews of the LaTeX snippet.
//!
//! Compilation is slow (seconds), so it runs on a worker thread owned by
//! [`PreviewJobs`]. The UI loop polls [`PreviewJobs::fetch_result`] once per
//! frame and hands finished images to a [`PreviewState`], which drives an
//! [`ImageDisplay`].

/// Coalescing background job controller.
pub mod controller;
/// Inline image display and preview visibility state.
pub mod display;
/// Error types for compilation and display.
pub mod error;
/// LaTeX to PNG compilation.
pub mod toolchain;

pub use controller::{JobResult, PreviewJobs};
pub use display::{ImageDisplay, KittyDisplay, PreviewState};
pub use error::{CompileError, CompileStage, DisplayError};
pub use toolchain::{Compile, LatexToolchain};
