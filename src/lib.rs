//! # sigma-runtime-metrics
//!
//! Read-only catalog of runtime telemetry metrics. Each entry names a metric,
//! describes it in English, and records its value kind and whether it is
//! cumulative. Samplers and exporters key their values by the exact metric
//! name; this crate only describes and enumerates metrics.

pub mod catalog;
pub mod config;
pub mod description;
pub mod error;
pub mod name;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use description::{Description, ValueKind};
pub use error::CatalogError;
pub use name::{validate_name, MetricName, HISTOGRAM_COUNT_UNIT};

/// Descriptions for all supported metrics, in declaration order.
///
/// The result is an owned copy; changing it does not affect the catalog.
pub fn all() -> Vec<Description> {
    Catalog::global().descriptions().to_vec()
}

/// Look up a single description in the built-in catalog
pub fn lookup(name: &str) -> Option<&'static Description> {
    Catalog::global().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_names_match_grammar() {
        for desc in all() {
            let parsed = MetricName::parse(desc.name)
                .unwrap_or_else(|e| panic!("{}: {e}", desc.name));
            assert_eq!(parsed.as_str(), desc.name);
        }
    }

    #[test]
    fn test_all_names_unique() {
        let descs = all();
        let unique: HashSet<_> = descs.iter().map(|d| d.name).collect();
        assert_eq!(descs.len(), unique.len());
    }

    #[test]
    fn test_all_descriptions_non_empty() {
        for desc in all() {
            assert!(!desc.description.trim().is_empty(), "{} has no description", desc.name);
            assert!(desc.description.ends_with('.'), "{} lacks a period", desc.name);
        }
    }

    #[test]
    fn test_all_is_stable() {
        assert_eq!(all(), all());
    }

    #[test]
    fn test_mutating_result_does_not_leak() {
        let mut first = all();
        let original_len = first.len();
        first[0].cumulative = !first[0].cumulative;
        first[0].name = "/tampered:bytes";
        first.truncate(1);

        let second = all();
        assert_eq!(second.len(), original_len);
        assert_eq!(second[0].name, "/gc/cycles/automatic:gc-cycles");
        assert!(second[0].cumulative);
    }

    #[test]
    fn test_histogram_filter() {
        let histograms: Vec<&str> = all()
            .into_iter()
            .filter(|d| d.kind == ValueKind::Float64Histogram)
            .map(|d| d.name)
            .collect();
        assert_eq!(
            histograms,
            [
                "/gc/heap/allocs-by-size:bytes",
                "/gc/heap/frees-by-size:bytes",
                "/gc/pauses:seconds",
                "/sched/latencies:seconds",
            ]
        );
        assert!(!histograms.contains(&"/gc/heap/goal:bytes"));

        let via_catalog: Vec<&str> = Catalog::global()
            .by_kind(ValueKind::Float64Histogram)
            .map(|d| d.name)
            .collect();
        assert_eq!(histograms, via_catalog);
    }

    #[test]
    fn test_memory_classes_total() {
        let total = lookup("/memory/classes/total:bytes").unwrap();
        assert!(!total.cumulative);
        assert!(total.description.contains("Sum of all metrics in /memory/classes"));

        let others = all()
            .into_iter()
            .filter(|d| d.name.starts_with("/memory/classes/") && d.name != total.name)
            .count();
        assert!(others > 0);
    }

    #[test]
    fn test_by_size_distributions_are_cumulative() {
        let by_size: Vec<Description> = all()
            .into_iter()
            .filter(|d| d.name.ends_with("-by-size:bytes"))
            .collect();
        assert_eq!(by_size.len(), 2);
        assert!(by_size.iter().all(|d| d.cumulative && d.is_histogram()));
    }

    #[test]
    fn test_histogram_count_units_are_samples() {
        for desc in all().iter().filter(|d| d.is_histogram()) {
            assert_eq!(desc.count_unit(), Some(HISTOGRAM_COUNT_UNIT), "{}", desc.name);
        }
    }

    #[test]
    fn test_parse_catalog_names() {
        let goal = MetricName::parse("/gc/heap/goal:bytes").unwrap();
        assert_eq!((goal.path(), goal.unit()), ("/gc/heap/goal", "bytes"));

        let allocs = MetricName::parse("/gc/heap/allocs-by-size:bytes").unwrap();
        assert_eq!((allocs.path(), allocs.unit()), ("/gc/heap/allocs-by-size", "bytes"));
    }

    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| all().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Catalog::global().len());
        }
    }

    #[test]
    fn test_catalog_serializes_to_json() {
        let json = serde_json::to_string(&all()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), Catalog::global().len());
        assert_eq!(parsed[0]["kind"], "uint64");
    }
}
