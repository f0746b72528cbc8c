//! Element sources for `find`: inline lists or one column of a CSV file.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Read `column` of a headered CSV as `i64` elements, in row order.
///
/// Values that do not parse as integers become nulls under the cast and are
/// rejected together with genuinely empty cells.
pub fn read_elements_csv(path: &Path, column: &str) -> Result<Vec<i64>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col(column).cast(DataType::Int64)])
        .collect()
        .with_context(|| format!("reading column `{column}` from {}", path.display()))?;
    let values = df.column(column)?.i64()?;
    let nulls = values.null_count();
    if nulls > 0 {
        bail!(
            "column `{column}` in {} has {nulls} empty or non-integer cell(s)",
            path.display()
        );
    }
    tracing::info!(rows = df.height(), column, "input_csv_elements");
    Ok(values.into_no_null_iter().collect())
}
