pub mod validation;

pub use validation::{GenerationRequest, RequiredJson};
