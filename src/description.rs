//! Metric descriptions and the built-in catalog table.

use serde::Serialize;

use crate::error::CatalogError;
use crate::name::{MetricName, HISTOGRAM_COUNT_UNIT};

/// Kind of value a metric produces.
///
/// Mirrors the value kinds understood by the sampler one-for-one; a new
/// variant here needs a matching change on the sampling side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// No valid kind. Never used by a catalog entry.
    Bad,
    Uint64,
    Float64,
    Float64Histogram,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueKind::Bad => write!(f, "bad"),
            ValueKind::Uint64 => write!(f, "uint64"),
            ValueKind::Float64 => write!(f, "float64"),
            ValueKind::Float64Histogram => write!(f, "float64_histogram"),
        }
    }
}

/// Describes a runtime metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Description {
    /// Full name of the metric, including the unit, e.g. `/memory/heap/free:bytes`
    pub name: &'static str,
    /// English sentence describing the metric
    pub description: &'static str,
    /// Kind of value this metric produces.
    ///
    /// Lets consumers skip metrics whose values they do not understand.
    pub kind: ValueKind,
    /// Whether the value increases monotonically. For a distribution, each
    /// bucket count increases monotonically. Indicates whether computing a
    /// rate from successive samples is meaningful.
    pub cumulative: bool,
}

impl Description {
    /// Parsed form of `name`
    pub fn metric_name(&self) -> Result<MetricName<'static>, CatalogError> {
        MetricName::parse(self.name)
    }

    pub fn is_histogram(&self) -> bool {
        self.kind == ValueKind::Float64Histogram
    }

    /// Unit of a histogram's count dimension; `None` for scalar metrics
    pub fn count_unit(&self) -> Option<&'static str> {
        self.is_histogram().then_some(HISTOGRAM_COUNT_UNIT)
    }
}

const fn uint64(name: &'static str, description: &'static str, cumulative: bool) -> Description {
    Description {
        name,
        description,
        kind: ValueKind::Uint64,
        cumulative,
    }
}

const fn histogram(name: &'static str, description: &'static str, cumulative: bool) -> Description {
    Description {
        name,
        description,
        kind: ValueKind::Float64Histogram,
        cumulative,
    }
}

/// Every supported metric, in declaration order.
///
/// Order is stable within a process but carries no meaning.
pub(crate) static ALL_DESCRIPTIONS: &[Description] = &[
    uint64(
        "/gc/cycles/automatic:gc-cycles",
        "Count of completed GC cycles generated by the runtime.",
        true,
    ),
    uint64(
        "/gc/cycles/forced:gc-cycles",
        "Count of completed GC cycles forced by the application.",
        true,
    ),
    uint64(
        "/gc/cycles/total:gc-cycles",
        "Count of all completed GC cycles.",
        true,
    ),
    histogram(
        "/gc/heap/allocs-by-size:bytes",
        "Distribution of heap allocations by approximate size. \
         Note that this does not include tiny objects as defined by \
         /gc/heap/tiny/allocs:objects, only tiny blocks.",
        true,
    ),
    uint64(
        "/gc/heap/allocs:bytes",
        "Cumulative sum of memory allocated to the heap by the application.",
        true,
    ),
    uint64(
        "/gc/heap/allocs:objects",
        "Cumulative count of heap allocations triggered by the application. \
         Note that this does not include tiny objects as defined by \
         /gc/heap/tiny/allocs:objects, only tiny blocks.",
        true,
    ),
    histogram(
        "/gc/heap/frees-by-size:bytes",
        "Distribution of freed heap allocations by approximate size. \
         Note that this does not include tiny objects as defined by \
         /gc/heap/tiny/allocs:objects, only tiny blocks.",
        true,
    ),
    uint64(
        "/gc/heap/frees:bytes",
        "Cumulative sum of heap memory freed by the garbage collector.",
        true,
    ),
    uint64(
        "/gc/heap/frees:objects",
        "Cumulative count of heap allocations whose storage was freed by the garbage collector. \
         Note that this does not include tiny objects as defined by \
         /gc/heap/tiny/allocs:objects, only tiny blocks.",
        true,
    ),
    uint64(
        "/gc/heap/goal:bytes",
        "Heap size target for the end of the GC cycle.",
        false,
    ),
    uint64(
        "/gc/heap/objects:objects",
        "Number of objects, live or unswept, occupying heap memory.",
        false,
    ),
    uint64(
        "/gc/heap/tiny/allocs:objects",
        "Count of small allocations that are packed together into blocks. \
         These allocations are counted separately from other allocations \
         because each individual allocation is not tracked by the runtime, \
         only their block. Each block is already accounted for in \
         allocs-by-size and frees-by-size.",
        true,
    ),
    histogram(
        "/gc/pauses:seconds",
        "Distribution of individual GC-related stop-the-world pause latencies.",
        true,
    ),
    uint64(
        "/gc/stack/starting-size:bytes",
        "The stack size of new goroutines.",
        false,
    ),
    uint64(
        "/memory/classes/heap/free:bytes",
        "Memory that is completely free and eligible to be returned to the underlying system, \
         but has not been. This metric is the runtime's estimate of free address space that is \
         backed by physical memory.",
        false,
    ),
    uint64(
        "/memory/classes/heap/objects:bytes",
        "Memory occupied by live objects and dead objects that have not yet been marked free \
         by the garbage collector.",
        false,
    ),
    uint64(
        "/memory/classes/heap/released:bytes",
        "Memory that is completely free and has been returned to the underlying system. This \
         metric is the runtime's estimate of free address space that is still mapped into the \
         process, but is not backed by physical memory.",
        false,
    ),
    uint64(
        "/memory/classes/heap/stacks:bytes",
        "Memory allocated from the heap that is reserved for stack space, whether or not it is \
         currently in-use.",
        false,
    ),
    uint64(
        "/memory/classes/heap/unused:bytes",
        "Memory that is reserved for heap objects but is not currently used to hold heap objects.",
        false,
    ),
    uint64(
        "/memory/classes/metadata/mcache/free:bytes",
        "Memory that is reserved for runtime mcache structures, but not in-use.",
        false,
    ),
    uint64(
        "/memory/classes/metadata/mcache/inuse:bytes",
        "Memory that is occupied by runtime mcache structures that are currently being used.",
        false,
    ),
    uint64(
        "/memory/classes/metadata/mspan/free:bytes",
        "Memory that is reserved for runtime mspan structures, but not in-use.",
        false,
    ),
    uint64(
        "/memory/classes/metadata/mspan/inuse:bytes",
        "Memory that is occupied by runtime mspan structures that are currently being used.",
        false,
    ),
    uint64(
        "/memory/classes/metadata/other:bytes",
        "Memory that is reserved for or used to hold runtime metadata.",
        false,
    ),
    uint64(
        "/memory/classes/os-stacks:bytes",
        "Stack memory allocated by the underlying operating system.",
        false,
    ),
    uint64(
        "/memory/classes/other:bytes",
        "Memory used by execution trace buffers, structures for debugging the runtime, \
         finalizer and profiler specials, and more.",
        false,
    ),
    uint64(
        "/memory/classes/profiling/buckets:bytes",
        "Memory that is used by the stack trace hash map used for profiling.",
        false,
    ),
    uint64(
        "/memory/classes/total:bytes",
        "All memory mapped by the runtime into the current process as read-write. \
         Note that this does not include memory mapped by foreign code or via raw system calls. \
         Sum of all metrics in /memory/classes.",
        false,
    ),
    uint64(
        "/sched/goroutines:goroutines",
        "Count of live goroutines.",
        false,
    ),
    histogram(
        "/sched/latencies:seconds",
        "Distribution of the time goroutines have spent in the scheduler in a runnable state \
         before actually running.",
        false,
    ),
];
