use {
    crate::{
        diagnostics::{DiagnosticSink, LogSink},
        expand::{ExpansionPolicy, InclusivePolicy},
    },
    lazy_static::lazy_static,
    regex::Regex,
    std::num::ParseIntError,
};

lazy_static! {
    static ref RANGE: Regex = Regex::new(r#"(\d+)\D*-\D*(\d+)"#).unwrap();
    static ref NUMBER: Regex = Regex::new(r#"\d+"#).unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to find a number in the segment")]
    NoNumber,

    #[error("Failed to parse number")]
    IntParse(#[source] ParseIntError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Extracts numbers and number ranges from loosely formatted input.
///
/// Each comma-delimited segment is resolved into either a range or a single
/// number; the expansion policy decides which values a range emits, and every
/// segment that resolves to neither is handed to the diagnostic sink and
/// skipped.
pub struct RangeExtractor<P = InclusivePolicy, D = LogSink> {
    policy: P,
    diagnostics: D,
}

impl RangeExtractor {
    pub fn new() -> Self {
        Self {
            policy: InclusivePolicy,
            diagnostics: LogSink,
        }
    }
}

impl Default for RangeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ExpansionPolicy> RangeExtractor<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            diagnostics: LogSink,
        }
    }
}

impl<P: ExpansionPolicy, D: DiagnosticSink> RangeExtractor<P, D> {
    pub fn with_diagnostics(policy: P, diagnostics: D) -> Self {
        Self {
            policy,
            diagnostics,
        }
    }

    /// Extracts every number the input carries, left to right. Duplicates are
    /// preserved and reversed ranges are corrected, so "3-1" yields 1, 2, 3.
    ///
    /// Currently always returns `Ok`: segments that cannot be parsed are
    /// reported to the diagnostic sink and skipped, and an input with nothing
    /// usable in it yields an empty vector.
    pub fn extract(&self, input: &str) -> Result<Vec<u32>> {
        // Chinese '，' to ','
        let input = input.replace('，', ",");
        let mut result = Vec::new();

        for segment in input.split(',') {
            // Trim spaces at both ends, then peel outer dashes in a loop;
            // trimming can expose more dashes and vice versa.
            let mut cleaned = segment.trim();
            while cleaned.starts_with('-') || cleaned.ends_with('-') {
                cleaned = cleaned.trim_matches('-').trim();
            }
            if cleaned.is_empty() {
                continue;
            }

            if let Err(err) = self.parse_segment(segment, cleaned, &mut result) {
                self.diagnostics.report(&err.to_string(), segment);
            }
        }

        Ok(result)
    }

    fn parse_segment(&self, segment: &str, cleaned: &str, out: &mut Vec<u32>) -> Result<()> {
        // range
        if let Some(caps) = RANGE.captures(cleaned) {
            let fst = caps[1].parse::<u32>().map_err(Error::IntParse)?;
            let snd = caps[2].parse::<u32>().map_err(Error::IntParse)?;
            let (start, end) = (fst.min(snd), fst.max(snd));
            out.extend(self.policy.expand(segment, start, end));
            return Ok(());
        }

        // single
        match NUMBER.find(cleaned) {
            Some(num) => {
                let num = num.as_str().parse::<u32>().map_err(Error::IntParse)?;
                out.push(num);
                Ok(())
            }
            None => Err(Error::NoNumber),
        }
    }
}

/// Parses number ranges from a string, supporting both single numbers and
/// range notation.
///
/// - Non-digit noise is ignored: `"xxx1-3xxx"` => `[1, 2, 3]`
/// - Extra separators: `"1,,2,,,3"` => `[1, 2, 3]`
/// - Extra dashes: `"1----3"` => `[1, 2, 3]`
/// - Extra spaces: `"  1  -  3  "` => `[1, 2, 3]`
/// - Reversed ranges: `"3-1"` => `[1, 2, 3]`
/// - Chinese comma: `"1，3-5，7"` => `[1, 3, 4, 5, 7]`
/// - Empty input: `""` => `[]`
///
/// Currently always returns `Ok`; unusable segments are logged and skipped.
pub fn extract_range(input: &str) -> Result<Vec<u32>> {
    RangeExtractor::new().extract(input)
}

/// Same as [`extract_range`] with a custom range expansion policy, e.g.
/// [`crate::expand::ParityPolicy`] for odd/even week filtering.
pub fn extract_range_with<P: ExpansionPolicy>(input: &str, policy: P) -> Result<Vec<u32>> {
    RangeExtractor::with_policy(policy).extract(input)
}
