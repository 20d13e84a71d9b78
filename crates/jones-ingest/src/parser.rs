//! Parsing of delimited Jones-matrix sample text
//!
//! Expected row format, comma- or tab-separated:
//!
//! ```text
//! t,a_re,a_im,b_re,b_im,c_re,c_im,d_re,d_im
//! 0.01,0.999,0.01,0.005,-0.002,-0.003,0.004,0.998,0.02
//! ```
//!
//! The header line is optional and recognized by the `a_re` token
//! (case-insensitive). Malformed rows (too few fields, unparseable or
//! non-finite numbers) are dropped silently; an input with zero valid rows
//! yields an empty vector, never an error. Rows are returned in input order
//! with no sorting or monotonicity checks.

use jones_core::{Complex, JonesMatrix, JonesSample, Result};
use std::path::Path;
use tracing::debug;

/// Number of fields in a data row: timestamp plus four (re, im) pairs.
const FIELDS_PER_ROW: usize = 9;

/// Parse raw delimited text into timestamped Jones samples.
pub fn parse_jones_csv(text: &str) -> Vec<JonesSample> {
    let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let start = match lines.first() {
        Some(first) if first.to_lowercase().contains("a_re") => 1,
        Some(_) => 0,
        None => return Vec::new(),
    };

    let mut samples = Vec::with_capacity(lines.len().saturating_sub(start));
    let mut skipped = 0usize;
    for line in &lines[start..] {
        match parse_row(line) {
            Some(sample) => samples.push(sample),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, kept = samples.len(), "dropped malformed sample rows");
    }
    samples
}

/// Read a sample file from disk and parse it.
///
/// Thin glue over [`parse_jones_csv`] for acquisition front-ends that hand
/// over a path instead of text.
pub fn read_jones_csv<P: AsRef<Path>>(path: P) -> Result<Vec<JonesSample>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_jones_csv(&text))
}

fn parse_row(line: &str) -> Option<JonesSample> {
    let mut values = [0.0f64; FIELDS_PER_ROW];
    let mut n = 0;
    for field in line.split(|ch| ch == ',' || ch == '\t') {
        if n == FIELDS_PER_ROW {
            break; // extra trailing fields are ignored
        }
        let v: f64 = field.trim().parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        values[n] = v;
        n += 1;
    }
    if n < FIELDS_PER_ROW {
        return None;
    }

    let [t, a_re, a_im, b_re, b_im, c_re, c_im, d_re, d_im] = values;
    Some(JonesSample::new(
        t,
        JonesMatrix::new(
            Complex::new(a_re, a_im),
            Complex::new(b_re, b_im),
            Complex::new(c_re, c_im),
            Complex::new(d_re, d_im),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "t,a_re,a_im,b_re,b_im,c_re,c_im,d_re,d_im";

    fn identity_row(t: f64) -> String {
        format!("{t},1,0,0,0,0,0,1,0")
    }

    #[test]
    fn test_header_is_skipped() {
        let text = format!("{HEADER}\n{}\n{}", identity_row(0.0), identity_row(0.01));
        let samples = parse_jones_csv(&text);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].t, 0.0);
        assert_eq!(samples[1].t, 0.01);
    }

    #[test]
    fn test_headerless_input_keeps_first_line() {
        let text = format!("{}\n{}", identity_row(1.0), identity_row(2.0));
        assert_eq!(parse_jones_csv(&text).len(), 2);
    }

    #[test]
    fn test_values_round_trip_exactly() {
        let text = "0.01,0.999,0.01,0.005,-0.002,-0.003,0.004,0.998,0.02";
        let samples = parse_jones_csv(text);
        assert_eq!(samples.len(), 1);
        let m = samples[0].matrix;
        assert_eq!(samples[0].t, 0.01);
        assert_eq!(m.a, Complex::new(0.999, 0.01));
        assert_eq!(m.b, Complex::new(0.005, -0.002));
        assert_eq!(m.c, Complex::new(-0.003, 0.004));
        assert_eq!(m.d, Complex::new(0.998, 0.02));
    }

    #[test]
    fn test_tab_delimited_rows() {
        let text = "0.5\t1\t0\t0\t0\t0\t0\t1\t0";
        let samples = parse_jones_csv(text);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].t, 0.5);
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let text = format!("{}\n1,2,3\n{}", identity_row(0.0), identity_row(1.0));
        let samples = parse_jones_csv(&text);
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].t, 1.0);
    }

    #[test]
    fn test_unparseable_rows_are_dropped() {
        let text = format!("{}\n0.02,x,0,0,0,0,0,1,0", identity_row(0.0));
        assert_eq!(parse_jones_csv(&text).len(), 1);
    }

    #[test]
    fn test_non_finite_rows_are_dropped() {
        let text = format!("0.02,inf,0,0,0,0,0,1,0\nNaN,1,0,0,0,0,0,1,0\n{}", identity_row(0.0));
        let samples = parse_jones_csv(&text);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].t, 0.0);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = "0.0,1,0,0,0,0,0,1,0,999,999";
        let samples = parse_jones_csv(text);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].matrix.d, Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(parse_jones_csv("").is_empty());
        assert!(parse_jones_csv("\n\n  \n").is_empty());
        // A lone header is not data.
        assert!(parse_jones_csv(HEADER).is_empty());
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let text = format!("{HEADER}\n{}\ngarbage\n{}", identity_row(0.0), identity_row(1.0));
        let line_count = text.lines().count();
        assert!(parse_jones_csv(&text).len() <= line_count - 1);
    }

    #[test]
    fn test_input_order_is_preserved() {
        // Deliberately non-monotonic timestamps: the parser does not sort.
        let text = format!("{}\n{}\n{}", identity_row(2.0), identity_row(0.0), identity_row(1.0));
        let times: Vec<f64> = parse_jones_csv(&text).iter().map(|s| s.t).collect();
        assert_eq!(times, vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_read_from_path() {
        let path = std::env::temp_dir().join("jones_ingest_parser_test.csv");
        std::fs::write(&path, format!("{HEADER}\n{}", identity_row(0.25))).unwrap();
        let samples = read_jones_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].t, 0.25);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_jones_csv("/nonexistent/jones.csv").unwrap_err();
        assert!(matches!(err, jones_core::Error::Io(_)));
    }
}
