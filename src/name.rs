//! Metric naming grammar.
//!
//! A metric name is `<path>:<unit>`, equivalent to
//!
//! ```text
//! ^(/[^:]+):([^:*/]+(?:[*/][^:*/]+)*)$
//! ```
//!
//! The path starts with `/` and may hold any non-colon codepoints between
//! slashes, conventionally lowercase letters and hyphens. The unit is a series
//! of unit terms delimited by `*` or `/`, e.g. `bytes`, `bytes/second` or
//! `byte*cpu-seconds`. For histograms the unit names the bucket dimension; the
//! count dimension is always "samples".

use std::fmt;

use crate::error::CatalogError;

/// Unit of the count dimension of every histogram-typed metric
pub const HISTOGRAM_COUNT_UNIT: &str = "samples";

const UNIT_DELIMITERS: [char; 2] = ['*', '/'];

/// A metric name split into its path and unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetricName<'a> {
    raw: &'a str,
    split: usize,
}

impl<'a> MetricName<'a> {
    /// Parse and validate a full metric name
    pub fn parse(raw: &'a str) -> Result<Self, CatalogError> {
        let split = raw
            .find(':')
            .ok_or_else(|| CatalogError::malformed(raw, "missing ':' between path and unit"))?;
        let (path, unit) = (&raw[..split], &raw[split + 1..]);

        if !path.starts_with('/') {
            return Err(CatalogError::malformed(raw, "path must start with '/'"));
        }
        if path.len() == 1 {
            return Err(CatalogError::malformed(raw, "path is empty after leading '/'"));
        }
        if unit.contains(':') {
            return Err(CatalogError::malformed(raw, "more than one ':' in name"));
        }
        if let Some(pos) = unit.split(UNIT_DELIMITERS).position(str::is_empty) {
            let reason = if unit.is_empty() {
                "unit is empty".to_string()
            } else {
                format!("unit term {} is empty", pos + 1)
            };
            return Err(CatalogError::malformed(raw, reason));
        }

        Ok(Self { raw, split })
    }

    /// The full name, as given
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Everything before the colon, including the leading `/`
    pub fn path(&self) -> &'a str {
        &self.raw[..self.split]
    }

    /// Everything after the colon
    pub fn unit(&self) -> &'a str {
        &self.raw[self.split + 1..]
    }

    /// Path segments in order, without the leading `/`
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.path()[1..].split('/')
    }

    /// Unit terms in order, without their `*`/`/` delimiters
    pub fn unit_terms(&self) -> impl Iterator<Item = &'a str> {
        self.unit().split(UNIT_DELIMITERS)
    }

    /// First path segment or unit term that strays from lowercase-and-hyphen
    pub fn convention_violation(&self) -> Option<String> {
        if let Some(segment) = self.segments().find(|s| !is_conventional(s)) {
            return Some(format!("path segment {segment:?} is not lowercase-and-hyphen"));
        }
        self.unit_terms()
            .find(|t| !is_conventional(t))
            .map(|term| format!("unit term {term:?} is not lowercase-and-hyphen"))
    }
}

impl fmt::Display for MetricName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Check a name against the grammar without keeping the parse
pub fn validate_name(raw: &str) -> Result<(), CatalogError> {
    MetricName::parse(raw).map(|_| ())
}

fn is_conventional(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
