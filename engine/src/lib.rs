mod batch;
mod classifier;
mod error;
mod mode;
mod predicate;
mod trade;
mod window;

pub use batch::{Batch, Child};
pub use classifier::{prefilter, Classifier};
pub use error::EngineError;
pub use mode::ModePolicy;
pub use predicate::{kind_predicate, partial_copy_volume_match};
pub use trade::{PatternKind, Side, Trade, ALL_KINDS, WINDOW_MS};
pub use window::WindowIndex;
