//! Village data model - the shape of `village.json`.
//!
//! Every field is optional: the document is community-maintained and partial
//! records are normal. Absence is "no data", never a parse error. Fallback
//! literals are substituted at render time, not here.

use serde::{Deserialize, Serialize};

/// Root document describing village state for one page view.
///
/// Parsed once by the loader, wrapped in [`PageData`], and read-only
/// thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageRecord {
    /// Accumulated community points, shown by the progress bar. Any JSON
    /// number is accepted; the document is hand-maintained and fractional
    /// values occur.
    pub community_points: Option<f64>,
    /// Green actions residents can take.
    pub green_actions: Option<Vec<Action>>,
    /// Open trade offers between residents.
    pub trade_offers: Option<Vec<Offer>>,
    /// Communal tasks looking for volunteers.
    pub tasks: Option<Vec<Task>>,
}

/// One green action entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Action {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points: Option<f64>,
}

/// One trade offer entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Offer {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points: Option<f64>,
    pub seller: Option<String>,
}

/// One communal task entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points: Option<f64>,
}

/// Per-page-view context holding the loaded record.
///
/// Passed explicitly into every apply function so there is no ambient
/// mutable slot; the record is written once by the loader and only read
/// afterwards.
#[derive(Debug, Clone)]
pub struct PageData {
    pub record: VillageRecord,
}

impl PageData {
    pub fn new(record: VillageRecord) -> Self {
        Self { record }
    }
}
