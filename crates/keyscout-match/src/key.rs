//! Canonical cell keys.
//!
//! Input columns carry mixed scalar types, so both the membership test and
//! the join operate on a canonical textual key per cell. Floats are trimmed
//! so `5.0` and the integer `5` produce the same key; null and NaN cells
//! produce no key at all and never match anything.

use polars::prelude::{AnyValue, Column, PolarsResult};

/// Converts one cell to its canonical key, or `None` for null/NaN cells.
///
/// # Examples
///
/// ```
/// use keyscout_match::cell_key;
/// use polars::prelude::AnyValue;
///
/// assert_eq!(cell_key(AnyValue::Null), None);
/// assert_eq!(cell_key(AnyValue::Int32(42)), Some("42".to_string()));
/// assert_eq!(cell_key(AnyValue::Float64(42.0)), Some("42".to_string()));
/// assert_eq!(cell_key(AnyValue::String("ab")), Some("ab".to_string()));
/// ```
pub fn cell_key(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(v.to_string()),
        AnyValue::Int16(v) => Some(v.to_string()),
        AnyValue::Int32(v) => Some(v.to_string()),
        AnyValue::Int64(v) => Some(v.to_string()),
        AnyValue::UInt8(v) => Some(v.to_string()),
        AnyValue::UInt16(v) => Some(v.to_string()),
        AnyValue::UInt32(v) => Some(v.to_string()),
        AnyValue::UInt64(v) => Some(v.to_string()),
        AnyValue::Float32(v) => float_key(f64::from(v)),
        AnyValue::Float64(v) => float_key(v),
        AnyValue::String(s) => Some(s.to_string()),
        AnyValue::StringOwned(s) => Some(s.to_string()),
        AnyValue::Boolean(b) => Some(b.to_string()),
        // For any other type, use Display but strip outer quotes if present
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                Some(s[1..s.len() - 1].to_string())
            } else {
                Some(s)
            }
        }
    }
}

fn float_key(v: f64) -> Option<String> {
    if v.is_nan() {
        return None;
    }
    Some(format_numeric(v))
}

/// Formats a floating-point number as a string without trailing zeros after
/// the decimal point.
///
/// Only trims trailing zeros if the number contains a decimal point, so
/// integer-valued floats like 40.0 become "40", not "4".
///
/// # Examples
///
/// ```
/// use keyscout_match::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    // Only trim trailing zeros if there's a decimal point
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Extracts the canonical key of every cell in a column, in row order.
pub fn column_keys(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let mut keys = Vec::with_capacity(column.len());
    for i in 0..column.len() {
        keys.push(cell_key(column.get(i)?));
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use polars::prelude::{NamedFrom, Series};

    use super::*;

    #[test]
    fn test_cell_key_null_and_nan() {
        assert_eq!(cell_key(AnyValue::Null), None);
        assert_eq!(cell_key(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(cell_key(AnyValue::Float32(f32::NAN)), None);
    }

    #[test]
    fn test_cell_key_integers() {
        assert_eq!(cell_key(AnyValue::Int32(42)), Some("42".to_string()));
        assert_eq!(cell_key(AnyValue::Int64(-100)), Some("-100".to_string()));
        assert_eq!(cell_key(AnyValue::UInt32(0)), Some("0".to_string()));
    }

    #[test]
    fn test_cell_key_floats_match_integers() {
        assert_eq!(cell_key(AnyValue::Float64(5.0)), cell_key(AnyValue::Int64(5)));
        assert_eq!(cell_key(AnyValue::Float64(1.5)), Some("1.5".to_string()));
        assert_eq!(cell_key(AnyValue::Float32(2.0)), Some("2".to_string()));
    }

    #[test]
    fn test_cell_key_strings_and_booleans() {
        assert_eq!(cell_key(AnyValue::String("hello")), Some("hello".to_string()));
        assert_eq!(cell_key(AnyValue::String("")), Some(String::new()));
        assert_eq!(cell_key(AnyValue::Boolean(true)), Some("true".to_string()));
        assert_eq!(cell_key(AnyValue::Boolean(false)), Some("false".to_string()));
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        // Ensure trailing zeros in integer part are NOT trimmed
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(10.5), "10.5");
    }

    #[test]
    fn test_column_keys_preserves_row_order() {
        let column: Column = Series::new("v".into(), &[Some(3i64), None, Some(1)]).into();
        let keys = column_keys(&column).unwrap();
        assert_eq!(
            keys,
            vec![Some("3".to_string()), None, Some("1".to_string())]
        );
    }
}
