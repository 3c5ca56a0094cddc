//! HTTP handlers for the pathway service.

pub mod courses;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod modules;
pub mod segments;

pub use courses::*;
pub use fallback::route_not_found;
pub use health::{api_health, health_check};
pub use self::metrics::metrics;
pub use modules::*;
pub use segments::*;

use service_core::error::AppError;

use crate::services::metrics::record_generation;
use crate::services::{GenerationError, Operation};
use crate::utils::GenerationRequest;

/// Map a generator error to the endpoint's 500 response.
fn generation_failed<T: GenerationRequest>(operation: Operation, err: GenerationError) -> AppError {
    record_generation(operation, "error");
    AppError::handler_failed(T::FAILURE_MESSAGE, err)
}
