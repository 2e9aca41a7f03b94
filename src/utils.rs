use serde::{Deserialize, Deserializer};

/// Deserializes an explicit JSON `null` as `T::default()`.
///
/// The upstream API reports missing readings as `null`; for numeric fields the
/// default of `0.0` doubles as the "no reading" sentinel.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalizes an angle in degrees into `[0, 360)`.
///
/// Non-finite input normalizes to `0.0` so that every caller stays total.
pub(crate) fn normalize_heading(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(0.0), 0.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(725.0), 5.0);
        assert_eq!(normalize_heading(f64::NAN), 0.0);
        assert_eq!(normalize_heading(f64::INFINITY), 0.0);
        assert!(normalize_heading(-1e-20) < 360.0);
    }

    #[test]
    fn test_null_as_default() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "null_as_default")]
            pressure: f64,
        }
        let row: Row = serde_json::from_str(r#"{"pressure": null}"#).unwrap();
        assert_eq!(row.pressure, 0.0);
        let row: Row = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(row.pressure, 0.0);
        let row: Row = serde_json::from_str(r#"{"pressure": 1013.2}"#).unwrap();
        assert_eq!(row.pressure, 1013.2);
    }
}
