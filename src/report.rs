use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Identifying fields of a snapshot. Values are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Meta {
    #[serde(rename = "ID")]
    pub id: String,
    pub size: u64,
    pub index: u64,
    pub term: u64,
    pub version: u64,
}

/// Count and cumulative size of every record of one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeStats {
    pub name: String,
    pub sum: u64,
    pub count: u64,
}

impl TypeStats {
    pub fn new(name: impl Into<String>, count: u64, sum: u64) -> Self {
        Self {
            name: name.into(),
            sum,
            count,
        }
    }
}

/// A populated snapshot report, ready to be rendered.
///
/// The metadata fields are hoisted to the top level when serialized, so the
/// JSON form has the keys `ID`, `Size`, `Index`, `Term`, `Version`, `Stats`
/// and `Offset`.
///
/// # Examples
///
/// ```
/// use snapshot_inspect::report::{Meta, Report, TypeStats};
///
/// let mut report = Report::new(Meta { id: "snap-1".into(), ..Meta::default() }, 4096);
/// report.insert_stats(TypeStats::new("KVS", 3, 1024));
/// assert_eq!(report.stats["KVS"].count, 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    #[serde(flatten)]
    pub meta: Meta,
    #[serde(serialize_with = "sorted_map")]
    pub stats: HashMap<String, TypeStats>,
    /// Total bytes consumed while reading the snapshot. Shown as the "Total" row.
    pub offset: u64,
}

impl Report {
    pub fn new(meta: Meta, offset: u64) -> Self {
        Self {
            meta,
            stats: HashMap::new(),
            offset,
        }
    }

    /// Adds or replaces the statistics for `stats.name`.
    pub fn insert_stats(&mut self, stats: TypeStats) {
        self.stats.insert(stats.name.clone(), stats);
    }
}

// HashMap iteration order is unspecified; emit keys in order.
fn sorted_map<S>(stats: &HashMap<String, TypeStats>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    stats
        .iter()
        .collect::<BTreeMap<_, _>>()
        .serialize(serializer)
}
