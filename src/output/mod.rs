//! Run reporting: result types, observers, progress and JSON output.

mod json;
mod observer;
pub mod progress;
mod types;

pub use json::{JsonEnvelope, ResultType, emit_json_result, to_json_result};
pub use observer::{ExtractionObserver, NullObserver, ProgressObserver, create_observer};
pub use types::{ClipEntry, ClipStatus, ExtractionReport};
