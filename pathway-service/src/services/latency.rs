//! Simulated generation latency.
//!
//! The mock generator answers instantly; these delays reproduce the response
//! profile of a model-backed generator so clients exercise their loading
//! states. Delays are timers on the runtime, so concurrent requests wait in
//! parallel.

use std::time::Duration;

use crate::config::LatencyConfig;

/// The generation and refinement operations the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GenerateCourseTitles,
    RefineCourseTitles,
    GenerateModuleTitles,
    RefineModuleTitles,
    GenerateSegmentOverview,
    RefineSegmentOverview,
    GenerateSegmentContent,
    RefineSegmentContent,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::GenerateCourseTitles,
        Operation::RefineCourseTitles,
        Operation::GenerateModuleTitles,
        Operation::RefineModuleTitles,
        Operation::GenerateSegmentOverview,
        Operation::RefineSegmentOverview,
        Operation::GenerateSegmentContent,
        Operation::RefineSegmentContent,
    ];

    /// Route name, also used as the metrics label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::GenerateCourseTitles => "generateCourseTitles",
            Operation::RefineCourseTitles => "refineCourseTitles",
            Operation::GenerateModuleTitles => "generateModuleTitles",
            Operation::RefineModuleTitles => "refineModuleTitles",
            Operation::GenerateSegmentOverview => "generateSegmentOverview",
            Operation::RefineSegmentOverview => "refineSegmentOverview",
            Operation::GenerateSegmentContent => "generateSegmentContent",
            Operation::RefineSegmentContent => "refineSegmentContent",
        }
    }

    /// Unscaled delay for this operation.
    pub fn base_delay(&self) -> Duration {
        let millis = match self {
            Operation::GenerateCourseTitles => 1500,
            Operation::RefineCourseTitles => 1200,
            Operation::GenerateModuleTitles => 1300,
            Operation::RefineModuleTitles => 1100,
            Operation::GenerateSegmentOverview => 1400,
            Operation::RefineSegmentOverview => 1000,
            Operation::GenerateSegmentContent => 2000,
            Operation::RefineSegmentContent => 1800,
        };
        Duration::from_millis(millis)
    }
}

/// Largest accepted delay multiplier.
pub const MAX_SCALE: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencyProfile {
    enabled: bool,
    scale: f64,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 1.0,
        }
    }
}

impl LatencyProfile {
    /// A negative or NaN `scale` is treated as zero; anything above
    /// [`MAX_SCALE`] is capped.
    pub fn new(enabled: bool, scale: f64) -> Self {
        let scale = if scale > 0.0 { scale.min(MAX_SCALE) } else { 0.0 };
        Self { enabled, scale }
    }

    pub fn disabled() -> Self {
        Self::new(false, 0.0)
    }

    pub fn delay_for(&self, operation: Operation) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        let secs = operation.base_delay().as_secs_f64() * self.scale;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }

    pub async fn simulate(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl From<&LatencyConfig> for LatencyProfile {
    fn from(config: &LatencyConfig) -> Self {
        LatencyProfile::new(config.enabled, config.scale)
    }
}
