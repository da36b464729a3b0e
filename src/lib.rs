//! A Rust library for batch editing the UI sources and screenshots of a mobile app.
//!
//! Every job is a sequence of text passes (see [passes]) run over a list of files by
//! [runner], except screenshot resizing which lives in [utils::img].
pub mod ext;
pub mod passes;
pub mod runner;
pub mod tables;
pub mod targets;
pub mod types;
pub mod utils;

lazy_static::lazy_static! {
    /// Global counter of per-file results, printed at the end of a run.
    pub static ref COUNTER: utils::counter::Counter = utils::counter::Counter::new();
}
