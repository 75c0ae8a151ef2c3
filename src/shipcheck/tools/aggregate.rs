//! Per-file grouping of raw records by canonical machinery key.

use std::collections::BTreeMap;

use tracing::debug;

use crate::shipcheck::tools::model::{FileAggregate, KeyStats, RawRecord, SourceLabel};
use crate::shipcheck::tools::normalize::Normalizer;

/// Textual missing-value marker some upstream exporters emit for blank cells.
const MISSING_TITLE_MARKER: &str = "nan";

/// Groups records under canonical keys, tracking the deduplicated title set
/// and the raw row count per key.
///
/// Rows without a machinery label are skipped entirely. Rows without a job
/// title still count toward `count` but contribute nothing to `titles`.
pub fn aggregate(
    records: &[RawRecord],
    normalizer: &Normalizer,
    source: SourceLabel,
) -> FileAggregate {
    let mut entries: BTreeMap<String, KeyStats> = BTreeMap::new();
    let mut skipped = 0usize;

    for record in records {
        let Some(raw_label) = record.machinery.as_deref() else {
            skipped += 1;
            continue;
        };
        let key = normalizer.canonicalize(raw_label);
        if key.is_empty() {
            skipped += 1;
            continue;
        }

        let stats = entries.entry(key).or_default();
        stats.count += 1;

        if let Some(title) = record.job_title.as_deref() {
            let title = title.trim();
            if !title.is_empty() && !title.eq_ignore_ascii_case(MISSING_TITLE_MARKER) {
                stats.titles.insert(title.to_string());
            }
        }
    }

    debug!(
        vessel = %source.vessel,
        keys = entries.len(),
        skipped,
        "aggregated records"
    );

    FileAggregate { source, entries }
}
