//! Types produced by event detection

use std::fmt;

/// A detected activity event.
///
/// An event is *open* while its end fields are `None`; a stream that ends
/// with an event still open emits it that way, meaning "ongoing at end of
/// data". At most one event is open at any time during a pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionEvent {
    /// Index at which the trigger fired.
    pub start_index: usize,
    /// Index at which the event closed, if it did.
    pub end_index: Option<usize>,
    /// Timestamp of the trigger sample.
    pub start_time: f64,
    /// Timestamp of the closing sample, if the event closed.
    pub end_time: Option<f64>,
    /// Largest STA/LTA ratio observed while the event was active.
    pub max_ratio: f64,
}

impl DetectionEvent {
    /// Whether the event was still open at the end of the stream.
    pub fn is_ongoing(&self) -> bool {
        self.end_index.is_none()
    }

    /// Event duration in time units, when the event closed.
    pub fn duration(&self) -> Option<f64> {
        self.end_time.map(|end| end - self.start_time)
    }
}

impl fmt::Display for DetectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end_time {
            Some(end) => write!(
                f,
                "Event {{ start: {:.3}, end: {:.3}, max ratio: {:.2} }}",
                self.start_time, end, self.max_ratio
            ),
            None => write!(
                f,
                "Event {{ start: {:.3}, ongoing, max ratio: {:.2} }}",
                self.start_time, self.max_ratio
            ),
        }
    }
}

/// Result of one detection pass
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    /// Detected events, in detection order (start indices non-decreasing).
    events: Vec<DetectionEvent>,
    /// STA/LTA ratio series, aligned with the input activity series.
    ratios: Vec<f64>,
    /// Algorithm used for detection.
    algorithm: String,
    /// Number of samples processed.
    sample_size: usize,
}

impl DetectionResult {
    /// Create a new detection result
    pub fn new(
        events: Vec<DetectionEvent>,
        ratios: Vec<f64>,
        algorithm: String,
        sample_size: usize,
    ) -> Self {
        Self {
            events,
            ratios,
            algorithm,
            sample_size,
        }
    }

    /// Get the detected events
    pub fn events(&self) -> &[DetectionEvent] {
        &self.events
    }

    /// Get the STA/LTA ratio series
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Get the number of detected events
    pub fn count(&self) -> usize {
        self.events.len()
    }

    /// Check if any events were detected
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// The event still open at end of stream, if any
    pub fn ongoing(&self) -> Option<&DetectionEvent> {
        self.events.last().filter(|e| e.is_ongoing())
    }

    /// Largest ratio observed over the whole pass (0 for empty input)
    pub fn max_ratio(&self) -> f64 {
        self.ratios.iter().fold(0.0, |acc, &r| acc.max(r))
    }

    /// Get the algorithm name used for detection
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get the number of samples that were analyzed
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detection Result:")?;
        writeln!(f, "  Algorithm: {}", self.algorithm)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Events detected: {}", self.count())?;

        for event in &self.events {
            writeln!(f, "    {event}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_event() -> DetectionEvent {
        DetectionEvent {
            start_index: 3,
            end_index: Some(9),
            start_time: 0.3,
            end_time: Some(0.9),
            max_ratio: 4.5,
        }
    }

    #[test]
    fn test_event_lifecycle_accessors() {
        let mut event = closed_event();
        assert!(!event.is_ongoing());
        approx::assert_relative_eq!(event.duration().unwrap(), 0.6, epsilon = 1e-12);

        event.end_index = None;
        event.end_time = None;
        assert!(event.is_ongoing());
        assert_eq!(event.duration(), None);
    }

    #[test]
    fn test_event_display() {
        let event = closed_event();
        assert_eq!(
            event.to_string(),
            "Event { start: 0.300, end: 0.900, max ratio: 4.50 }"
        );
    }

    #[test]
    fn test_result_accessors() {
        let result = DetectionResult::new(
            vec![closed_event()],
            vec![0.0, 1.0, 2.5],
            "STA/LTA".to_string(),
            3,
        );
        assert_eq!(result.count(), 1);
        assert!(result.has_events());
        assert!(result.ongoing().is_none());
        assert_eq!(result.max_ratio(), 2.5);
        assert_eq!(result.sample_size(), 3);
        assert_eq!(result.algorithm(), "STA/LTA");
    }

    #[test]
    fn test_empty_result_max_ratio() {
        let result = DetectionResult::new(vec![], vec![], "STA/LTA".to_string(), 0);
        assert_eq!(result.max_ratio(), 0.0);
        assert!(!result.has_events());
    }
}
