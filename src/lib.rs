//! Extract integer sequences from noisy, human-entered range strings like
//! `"1-3, 5, 7-9"` or `"1，3-5，7"`.

pub mod diagnostics;
pub mod expand;
pub mod extractor;

pub use {
    diagnostics::{DiagnosticSink, LogSink},
    expand::{ExpansionPolicy, InclusivePolicy, ParityPolicy},
    extractor::{extract_range, extract_range_with, Error, RangeExtractor},
};
