//! Conversion from a Polars DataFrame into a typed [`Dataset`].

use polars::prelude::{DataFrame, DataType};

use corr_model::{Column, Dataset};

use crate::error::Result;

/// Whether a Polars dtype maps to a numeric column.
///
/// Booleans are not numeric.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Converts every frame column, preserving column order and row positions.
pub fn dataset_from_frame(df: &DataFrame) -> Result<Dataset> {
    let mut columns = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        let name = col.name().as_str();
        let series = col.as_materialized_series();
        let column = if is_numeric_dtype(series.dtype()) {
            let values = series.cast(&DataType::Float64)?;
            Column::numeric(name, values.f64()?.into_iter().collect::<Vec<_>>())
        } else {
            let values = series.cast(&DataType::String)?;
            Column::text(name, values.str()?.into_iter().collect::<Vec<_>>())
        };
        columns.push(column);
    }
    Ok(Dataset::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corr_model::{CellValue, ColumnKind};
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn integer_and_float_columns_become_numeric() {
        let df = DataFrame::new(vec![
            Series::new("Count".into(), &[1i64, 2, 3]).into(),
            Series::new("Score".into(), &[Some(1.5f64), None, Some(2.5)]).into(),
            Series::new("Flag".into(), &[true, false, true]).into(),
            Series::new("Region".into(), &["north", "", "south"]).into(),
        ])
        .unwrap();

        let dataset = dataset_from_frame(&df).unwrap();
        let kinds: Vec<ColumnKind> = dataset.columns().iter().map(Column::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ColumnKind::Numeric,
                ColumnKind::Numeric,
                ColumnKind::NonNumeric,
                ColumnKind::NonNumeric
            ]
        );
        assert_eq!(
            dataset.column("Score").and_then(Column::as_numeric),
            Some(&[Some(1.5), None, Some(2.5)][..])
        );
        assert_eq!(dataset.row(1).unwrap()[3], CellValue::Missing);
        assert_eq!(dataset.row_count(), 3);
    }
}
