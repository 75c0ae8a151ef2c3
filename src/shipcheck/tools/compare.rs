//! Comparison orchestration: two input files in, one [`Comparison`] out.

use std::path::Path;

use tracing::{error, info, instrument};

use crate::shipcheck::tools::aggregate;
use crate::shipcheck::tools::diff;
use crate::shipcheck::tools::error::Result;
use crate::shipcheck::tools::io::table_read;
use crate::shipcheck::tools::model::{Comparison, FileAggregate, SourceLabel};
use crate::shipcheck::tools::normalize::Normalizer;

/// Compares two machinery job exports.
#[instrument(
    level = "info",
    skip_all,
    fields(first = %first.display(), second = %second.display())
)]
pub fn compare_files(first: &Path, second: &Path) -> Result<Comparison> {
    let normalizer = Normalizer::new()?;

    let agg_a = load_aggregate(first, 1, &normalizer)?;
    let agg_b = load_aggregate(second, 2, &normalizer)?;
    info!(
        keys_a = agg_a.entries.len(),
        keys_b = agg_b.entries.len(),
        "aggregates built"
    );

    let comparison = diff::diff(&agg_a, &agg_b);
    info!(
        rows = comparison.rows.len(),
        differing = comparison.machinery_with_differences().len(),
        "comparison computed"
    );
    Ok(comparison)
}

/// Crash-isolation variant for embedding presentation layers: any failure is
/// logged and degraded to the empty-result sentinel so the caller can render
/// a "no data" state instead of propagating the error to its user surface.
pub fn compare_files_or_empty(first: &Path, second: &Path) -> Comparison {
    match compare_files(first, second) {
        Ok(comparison) => comparison,
        Err(error) => {
            error!(%error, "comparison failed, returning empty result");
            Comparison::empty(
                SourceLabel::new("Unknown Vessel", table_read::date_label(first), 1),
                SourceLabel::new("Unknown Vessel", table_read::date_label(second), 2),
            )
        }
    }
}

fn load_aggregate(path: &Path, ordinal: u8, normalizer: &Normalizer) -> Result<FileAggregate> {
    let table = table_read::read_table(path)?;
    let machinery_idx = table_read::find_machinery_column(&table.headers)?;
    let title_idx = table_read::find_title_column(&table.headers)?;

    let source = SourceLabel::new(
        table_read::vessel_name(&table),
        table_read::date_label(path),
        ordinal,
    );
    let records = table_read::records_from(&table, machinery_idx, title_idx);
    info!(rows = records.len(), vessel = %source.vessel, "file ingested");

    Ok(aggregate::aggregate(&records, normalizer, source))
}
