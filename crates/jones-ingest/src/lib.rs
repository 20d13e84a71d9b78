//! Sample ingestion for Jones-matrix time series
//!
//! Turns raw delimited text (the acquisition collaborator's output) into an
//! ordered `Vec<JonesSample>`. The parser is deliberately forgiving: bad rows
//! are dropped rather than reported, and empty input produces an empty
//! sequence so the downstream pipeline degrades to a no-op.
//!
//! # Example
//!
//! ```rust
//! use jones_ingest::parse_jones_csv;
//!
//! let text = "t,a_re,a_im,b_re,b_im,c_re,c_im,d_re,d_im\n\
//!             0.0,1,0,0,0,0,0,1,0";
//! let samples = parse_jones_csv(text);
//! assert_eq!(samples.len(), 1);
//! ```

pub mod parser;

pub use parser::{parse_jones_csv, read_jones_csv};
