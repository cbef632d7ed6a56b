//! Week-to-development-record resolution.
//!
//! Reference tables are usually sparse or stop at week 40, so a lookup falls back
//! to the closest week on record. Very early weeks get a placeholder instead,
//! since comparing an embryo to a produce item only makes sense from a few weeks in.

use std::collections::BTreeMap;

use shared::DevelopmentRecord;

/// Reference data keyed by gestational week
pub type DevelopmentTable = BTreeMap<u32, DevelopmentRecord>;

/// Weeks at or below this get the placeholder unless the table has an exact entry
pub const DEFAULT_COMPARISON_FLOOR: u32 = 4;

/// Record returned while it is still too early for a size comparison
pub fn too_early_record() -> DevelopmentRecord {
    DevelopmentRecord {
        week: 0,
        size_comparison: "Too early to compare".to_string(),
        length_cm: 0.0,
        weight_g: 0.0,
        image: "too_early".to_string(),
        milestones: vec!["Implantation and the earliest cell divisions are under way".to_string()],
    }
}

/// Pick the record for `week`.
///
/// An exact entry always wins. Otherwise weeks at or below `floor` get
/// [`too_early_record`], and anything else gets the nearest week in the table,
/// preferring the lower week on a tie. Never fails; an empty table yields the placeholder.
pub fn resolve(week: u32, table: &DevelopmentTable, floor: u32) -> DevelopmentRecord {
    if let Some(record) = table.get(&week) {
        return record.clone();
    }

    if week <= floor {
        return too_early_record();
    }

    // BTreeMap iterates in ascending key order and min_by_key keeps the first minimum
    table
        .iter()
        .min_by_key(|(key, _)| key.abs_diff(week))
        .map(|(_, record)| record.clone())
        .unwrap_or_else(too_early_record)
}
