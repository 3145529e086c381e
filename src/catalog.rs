//! Validated, immutable metric catalog.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, error, warn};

use crate::config::CatalogConfig;
use crate::description::{Description, ValueKind, ALL_DESCRIPTIONS};
use crate::error::CatalogError;
use crate::name::MetricName;

static GLOBAL: OnceLock<Catalog> = OnceLock::new();

/// Ordered set of metric descriptions, checked once at construction
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [Description],
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Validate `entries` and build a catalog over them
    pub fn new(entries: &'static [Description], config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if let Err(err) = check_entry(entry, config) {
                warn!(metric = entry.name, error = %err, "rejecting metric description");
                return Err(err);
            }
            if index.insert(entry.name, pos).is_some() {
                warn!(metric = entry.name, "duplicate metric name");
                return Err(CatalogError::DuplicateName(entry.name.to_string()));
            }
        }

        let catalog = Self { entries, index };
        debug!(
            metrics = catalog.len(),
            histograms = catalog.by_kind(ValueKind::Float64Histogram).count(),
            "metric catalog initialized"
        );
        Ok(catalog)
    }

    /// The built-in catalog, validated on first use.
    ///
    /// Panics if the built-in table is invalid; nothing can run against a
    /// corrupt catalog.
    pub fn global() -> &'static Catalog {
        GLOBAL.get_or_init(|| match Catalog::new(ALL_DESCRIPTIONS, &CatalogConfig::default()) {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(error = %err, "built-in metric catalog is invalid");
                panic!("built-in metric catalog is invalid: {err}");
            }
        })
    }

    pub fn descriptions(&self) -> &[Description] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Description> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a description by its exact full name
    pub fn get(&self, name: &str) -> Option<&Description> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn by_kind(&self, kind: ValueKind) -> impl Iterator<Item = &Description> {
        self.iter().filter(move |d| d.kind == kind)
    }

    pub fn cumulative(&self) -> impl Iterator<Item = &Description> {
        self.iter().filter(|d| d.cumulative)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Description;
    type IntoIter = std::slice::Iter<'a, Description>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_entry(entry: &Description, config: &CatalogConfig) -> Result<(), CatalogError> {
    let name = MetricName::parse(entry.name)?;

    let text = entry.description.trim();
    if text.is_empty() {
        return Err(CatalogError::EmptyDescription(entry.name.to_string()));
    }
    if entry.kind == ValueKind::Bad {
        return Err(CatalogError::InvalidKind(entry.name.to_string()));
    }
    if config.require_terminal_punctuation && !text.ends_with(['.', '!', '?']) {
        return Err(CatalogError::ConventionViolation {
            name: entry.name.to_string(),
            reason: "description does not end with terminal punctuation".to_string(),
        });
    }
    if config.enforce_naming_conventions {
        if let Some(reason) = name.convention_violation() {
            return Err(CatalogError::ConventionViolation {
                name: entry.name.to_string(),
                reason,
            });
        }
    }
    Ok(())
}
