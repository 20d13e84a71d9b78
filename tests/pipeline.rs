//! End-to-end pipeline tests: raw text -> samples -> metrics -> events

use approx::assert_relative_eq;
use jones_monitor::{compute_metrics, parse_jones_csv, StaLtaDetector};

const HEADER: &str = "t,a_re,a_im,b_re,b_im,c_re,c_im,d_re,d_im";

/// A scaled-identity row: a = d = (s, 0), b = c = 0.
fn row(t: f64, s: f64) -> String {
    format!("{t},{s},0,0,0,0,0,{s},0")
}

/// A quiet channel (constant identity) with a perturbation from
/// `onset` onward that flips the matrix scale every sample.
fn perturbed_csv(n: usize, onset: usize) -> String {
    let mut text = String::from(HEADER);
    for i in 0..n {
        let s = if i < onset {
            1.0
        } else if i % 2 == 0 {
            1.3
        } else {
            1.0
        };
        text.push('\n');
        text.push_str(&row(i as f64 * 0.01, s));
    }
    text
}

#[test]
fn test_quiet_channel_produces_no_events() {
    let text = perturbed_csv(400, 400); // never perturbed
    let samples = parse_jones_csv(&text);
    assert_eq!(samples.len(), 400);

    let metrics = compute_metrics(&samples);
    assert!(metrics.activity().iter().all(|&a| a == 0.0));
    assert!(metrics.log_det_mag().iter().all(|&v| v == 0.0));
    assert!(metrics.unwrapped_det_phase().iter().all(|&p| p == 0.0));

    let result = StaLtaDetector::new(5, 50, 3.0).detect(&metrics.activity(), &metrics.times());
    assert!(!result.has_events());
    assert!(result.ratios().iter().all(|&r| r == 0.0));
}

#[test]
fn test_perturbation_triggers_event_at_onset() {
    let onset = 300;
    let text = perturbed_csv(400, onset);
    let samples = parse_jones_csv(&text);
    let metrics = compute_metrics(&samples);

    // The quiet prefix carries no activity; the perturbed tail does.
    assert!(metrics.activity()[..onset].iter().all(|&a| a == 0.0));
    assert!(metrics.activity()[onset..].iter().all(|&a| a > 0.1));

    let result = StaLtaDetector::new(5, 50, 3.0).detect(&metrics.activity(), &metrics.times());

    assert!(result.has_events());
    let event = result.events()[0];
    // First ratio spike is right at the onset: the short window reacts ten
    // times faster than the long one on a silent background.
    assert_eq!(event.start_index, onset);
    assert_relative_eq!(event.start_time, onset as f64 * 0.01);
    assert!(event.max_ratio >= 3.0);
}

#[test]
fn test_metric_columns_stay_aligned_through_the_pipeline() {
    let text = perturbed_csv(120, 60);
    let samples = parse_jones_csv(&text);
    let metrics = compute_metrics(&samples);

    assert_eq!(metrics.len(), samples.len());
    assert_eq!(metrics.times().len(), metrics.activity().len());
    assert_eq!(metrics.det_phase().len(), metrics.unwrapped_det_phase().len());

    let result = StaLtaDetector::new(5, 50, 3.0).detect(&metrics.activity(), &metrics.times());
    assert_eq!(result.ratios().len(), samples.len());
    assert_eq!(result.sample_size(), samples.len());
}

#[test]
fn test_malformed_rows_are_dropped_but_pipeline_continues() {
    let text = format!(
        "{HEADER}\n{}\nnot,a,row\n{}\n{}",
        row(0.00, 1.0),
        row(0.01, 1.0),
        row(0.02, 1.0)
    );
    let samples = parse_jones_csv(&text);
    assert_eq!(samples.len(), 3);

    let metrics = compute_metrics(&samples);
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics.samples()[0].activity, 0.0);
}

#[test]
fn test_empty_input_degrades_to_empty_outputs() {
    let samples = parse_jones_csv("");
    let metrics = compute_metrics(&samples);
    let result = StaLtaDetector::default().detect(&metrics.activity(), &metrics.times());

    assert!(samples.is_empty());
    assert!(metrics.is_empty());
    assert!(!result.has_events());
    assert_eq!(result.sample_size(), 0);
    assert_eq!(result.max_ratio(), 0.0);
}
