//! STA/LTA event detection
//!
//! Short-term-average over long-term-average: a causal, single-pass detector
//! that flags sudden increases in activity against a slowly varying
//! background level. An event opens when the ratio crosses the trigger
//! threshold (after the long window has warmed up) and closes when the ratio
//! falls back below 1, subject to a minimum duration of one short window.
//! The de-trigger level is fixed at 1.0 regardless of the configured trigger
//! ratio; the resulting asymmetric hysteresis is part of the contract.
//!
//! The detector never validates its parameters or raises errors: degenerate
//! window combinations produce mechanically well-defined (if meaningless)
//! results, and empty input produces an empty result. Parameter sanity
//! checks belong to the configuring caller via
//! [`StaLtaParameters::validate`].

use crate::traits::{ConfigurableDetector, EventDetectorProperties};
use crate::types::{DetectionEvent, DetectionResult};
use crate::visualization::DetectionVisualizer;
use crate::window::MeanWindow;
use jones_core::{Error, Result};
use tracing::debug;

/// Backgrounds at or below this level are treated as dead; the ratio is 0.
const MIN_LTA: f64 = 1e-9;

const ALGORITHM: &str = "STA/LTA";

/// STA/LTA parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaLtaParameters {
    /// Short-term window length in samples (>= 1)
    pub sta_window: usize,
    /// Long-term window length in samples (>= 2)
    pub lta_window: usize,
    /// Trigger threshold for the STA/LTA ratio (unitless, typically > 1)
    pub trigger_ratio: f64,
}

impl Default for StaLtaParameters {
    fn default() -> Self {
        Self {
            sta_window: 20,
            lta_window: 200,
            trigger_ratio: 3.0,
        }
    }
}

impl StaLtaParameters {
    pub fn new(sta_window: usize, lta_window: usize, trigger_ratio: f64) -> Self {
        Self {
            sta_window,
            lta_window,
            trigger_ratio,
        }
    }

    /// Caller-side sanity check for values coming from a configuration
    /// surface. The detector itself accepts anything.
    pub fn validate(&self) -> Result<()> {
        if self.sta_window < 1 {
            return Err(Error::parameter_out_of_range("sta_window", "must be >= 1"));
        }
        if self.lta_window < 2 {
            return Err(Error::parameter_out_of_range("lta_window", "must be >= 2"));
        }
        if !self.trigger_ratio.is_finite() {
            return Err(Error::parameter_out_of_range(
                "trigger_ratio",
                "must be finite",
            ));
        }
        Ok(())
    }
}

/// Batch STA/LTA detector over a complete activity series
#[derive(Debug, Clone)]
pub struct StaLtaDetector {
    params: StaLtaParameters,
}

impl StaLtaDetector {
    /// Create a new detector
    pub fn new(sta_window: usize, lta_window: usize, trigger_ratio: f64) -> Self {
        Self {
            params: StaLtaParameters::new(sta_window, lta_window, trigger_ratio),
        }
    }

    /// Run one detection pass over parallel activity and timestamp series.
    ///
    /// The series are expected to be equally long; if they are not, the
    /// overhang is ignored. Returns the full ratio series and the ordered,
    /// non-overlapping event list.
    pub fn detect(&self, activity: &[f64], times: &[f64]) -> DetectionResult {
        let mut stream = OnlineStaLta::new(self.params);
        for (&x, &t) in activity.iter().zip(times) {
            stream.push(x, t);
        }
        stream.finish()
    }

    /// Like [`detect`](Self::detect), with visualizer hooks around the pass.
    pub fn detect_with_visualizer<V: DetectionVisualizer>(
        &self,
        activity: &[f64],
        times: &[f64],
        visualizer: &mut V,
    ) -> Result<DetectionResult> {
        visualizer.record_activity(activity)?;
        let result = self.detect(activity, times);
        visualizer.record_ratios(result.ratios())?;
        visualizer.record_events(&result)?;
        Ok(result)
    }
}

impl Default for StaLtaDetector {
    fn default() -> Self {
        Self::with_parameters(StaLtaParameters::default())
    }
}

impl EventDetectorProperties for StaLtaDetector {
    fn algorithm_name(&self) -> &'static str {
        ALGORITHM
    }

    fn minimum_sample_size(&self) -> usize {
        // The warm-up guard admits no trigger before the long window index.
        self.params.lta_window + 1
    }
}

impl ConfigurableDetector for StaLtaDetector {
    type Parameters = StaLtaParameters;

    fn with_parameters(params: Self::Parameters) -> Self {
        Self { params }
    }

    fn parameters(&self) -> &Self::Parameters {
        &self.params
    }

    fn set_parameters(&mut self, params: Self::Parameters) {
        self.params = params;
    }
}

/// Streaming STA/LTA state for one detection pass.
///
/// Owns the two bounded mean windows and the single open-event slot. Feed
/// samples with [`push`](Self::push), then take the result with
/// [`finish`](Self::finish). Changing parameters means discarding this state
/// and re-running from the start of the series; there is no incremental
/// re-evaluation.
#[derive(Debug, Clone)]
pub struct OnlineStaLta {
    params: StaLtaParameters,
    sta: MeanWindow,
    lta: MeanWindow,
    open: Option<DetectionEvent>,
    events: Vec<DetectionEvent>,
    ratios: Vec<f64>,
    index: usize,
}

impl OnlineStaLta {
    pub fn new(params: StaLtaParameters) -> Self {
        Self {
            params,
            sta: MeanWindow::new(params.sta_window),
            lta: MeanWindow::new(params.lta_window),
            open: None,
            events: Vec::new(),
            ratios: Vec::new(),
            index: 0,
        }
    }

    /// Process one sample and return the ratio recorded at its index.
    ///
    /// Negative activity is clamped to 0 before entering either window.
    pub fn push(&mut self, activity: f64, t: f64) -> f64 {
        let x = activity.max(0.0);
        self.sta.push(x);
        self.lta.push(x);

        let sta = self.sta.mean();
        let lta = self.lta.mean();
        let ratio = if lta > MIN_LTA { sta / lta } else { 0.0 };
        self.ratios.push(ratio);

        let i = self.index;

        // Trigger is only evaluated while no event is open, so events can
        // never overlap. The warm-up guard keeps the first lta_window
        // indices trigger-free.
        if self.open.is_none() && ratio >= self.params.trigger_ratio && i >= self.params.lta_window
        {
            debug!(index = i, time = t, ratio, "event opened");
            self.open = Some(DetectionEvent {
                start_index: i,
                end_index: None,
                start_time: t,
                end_time: None,
                max_ratio: ratio,
            });
        }

        let close = match self.open.as_mut() {
            Some(event) => {
                event.max_ratio = event.max_ratio.max(ratio);
                // Fixed de-trigger level of 1.0, plus a minimum duration of
                // one short window.
                ratio < 1.0 && i > event.start_index + self.params.sta_window
            }
            None => false,
        };
        if close {
            if let Some(mut event) = self.open.take() {
                event.end_index = Some(i);
                event.end_time = Some(t);
                debug!(index = i, time = t, max_ratio = event.max_ratio, "event closed");
                self.events.push(event);
            }
        }

        self.index += 1;
        ratio
    }

    /// Number of samples processed so far.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Ratios recorded so far.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// End the stream. An event still open is emitted as ongoing (its end
    /// fields stay `None`).
    pub fn finish(mut self) -> DetectionResult {
        if let Some(event) = self.open.take() {
            debug!(
                start_index = event.start_index,
                max_ratio = event.max_ratio,
                "stream ended with event still open"
            );
            self.events.push(event);
        }
        DetectionResult::new(self.events, self.ratios, ALGORITHM.to_string(), self.index)
    }

    /// Reset to the initial state, keeping the parameters.
    pub fn reset(&mut self) {
        self.sta.clear();
        self.lta.clear();
        self.open = None;
        self.events.clear();
        self.ratios.clear();
        self.index = 0;
    }
}
