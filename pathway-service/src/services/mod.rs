pub mod generator;
pub mod latency;
pub mod metrics;

pub use generator::{CurriculumGenerator, GenerationError, MockCurriculumGenerator};
pub use latency::{LatencyProfile, Operation};
