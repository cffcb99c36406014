//! Test support: a recording mock engine.
//!
//! [`RecordingEngine`] implements [`LayoutEngine`](crate::engine::LayoutEngine)
//! in memory and keeps a log of every mutating primitive call, so tests can
//! check exactly which engine setter a style write reached. It can also be
//! told to reject child insertions to exercise rollback paths.

pub mod recording;

pub use recording::{Call, MockNode, RecordingEngine};
