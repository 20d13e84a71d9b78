//! Core traits for event detection

/// Properties of an event detector that don't depend on its input
pub trait EventDetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Smallest input length on which the detector can trigger at all
    fn minimum_sample_size(&self) -> usize;
}

/// Detectors whose behavior is driven by a parameter struct
pub trait ConfigurableDetector {
    type Parameters;

    fn with_parameters(params: Self::Parameters) -> Self;
    fn parameters(&self) -> &Self::Parameters;
    fn set_parameters(&mut self, params: Self::Parameters);
}
