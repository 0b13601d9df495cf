//! Collage build orchestration
//!
//! The single entry point callers need: a [`CollageRequest`] describing
//! what to build, and [`build()`] to run the whole load, layout,
//! composite, and save sequence as one blocking call.

/// The one-call build sequence and its summary
pub mod build;
/// Immutable build request and validation
pub mod request;

pub use build::{CollageSummary, assemble, build};
pub use request::CollageRequest;
