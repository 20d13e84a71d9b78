//! Basic STA/LTA detection example

use jones_detect::{EventDetectorProperties, StaLtaDetector, StaLtaParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== STA/LTA Event Detection Example ===\n");

    // Synthetic activity: quiet noise floor with two bursts.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1200;
    let mut activity: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..0.05)).collect();
    for x in activity.iter_mut().take(340).skip(300) {
        *x += 3.0;
    }
    for x in activity.iter_mut().take(820).skip(800) {
        *x += 1.5;
    }
    let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();

    let params = StaLtaParameters::new(10, 100, 3.0);
    params.validate()?;

    let detector = StaLtaDetector::new(params.sta_window, params.lta_window, params.trigger_ratio);
    let result = detector.detect(&activity, &times);

    println!("Algorithm: {}", detector.algorithm_name());
    println!("Samples analyzed: {}", result.sample_size());
    println!("Max STA/LTA ratio: {:.2}", result.max_ratio());
    println!("Events found: {}\n", result.count());

    for (i, event) in result.events().iter().enumerate() {
        println!("  Event {}: {}", i + 1, event);
    }

    Ok(())
}
