//! Readability and sentiment scoring for article text.

pub mod engine;
pub mod lexicon;
pub mod tokenize;

pub use engine::{MetricsEngine, EPSILON};
pub use lexicon::Lexicon;

pub mod prelude {
    pub use super::{Lexicon, MetricsEngine};
    pub use ts_core::{Error, Result, TextMetrics};
}
