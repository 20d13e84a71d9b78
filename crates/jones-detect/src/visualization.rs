//! Visualization interface for event detection
//!
//! Hooks that let a charting front-end record the detector's inputs and
//! outputs without this crate depending on any plotting library. The null
//! implementation compiles to no-ops.

use crate::types::DetectionResult;
use jones_core::Result;

/// Trait for observing a detection pass
pub trait DetectionVisualizer {
    /// Record the (unclamped) activity series before detection begins
    fn record_activity(&mut self, activity: &[f64]) -> Result<()>;

    /// Record the computed STA/LTA ratio series
    fn record_ratios(&mut self, ratios: &[f64]) -> Result<()>;

    /// Record the final detection result
    fn record_events(&mut self, result: &DetectionResult) -> Result<()>;

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that performs no operations
#[derive(Default, Clone, Copy, Debug)]
pub struct NullDetectionVisualizer;

impl DetectionVisualizer for NullDetectionVisualizer {
    #[inline(always)]
    fn record_activity(&mut self, _: &[f64]) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_ratios(&mut self, _: &[f64]) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_events(&mut self, _: &DetectionResult) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}
