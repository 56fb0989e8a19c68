use serde::Serialize;

/// JSON formatter for planner outputs
pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }

    /// Compact JSON (no whitespace)
    pub fn format_compact<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Texture;
    use crate::schedule::generate_reminders;
    use crate::suitability::evaluate_soil;
    use chrono::NaiveDate;
    use serde_json::Value;

    #[test]
    fn test_schedule_dates_are_iso() {
        let anchor = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let json = JsonFormatter::format_compact(&generate_reminders("Tomato", anchor)).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["start_date"], "2025-01-01");
        assert!(value[0]["end_date"].is_null());
    }

    #[test]
    fn test_soil_evaluation_is_tagged() {
        let eval = evaluate_soil("Rice", 6.0, 3.0, 85, Texture::Clay).unwrap();
        let value: Value = serde_json::from_str(&JsonFormatter::format(&eval).unwrap()).unwrap();
        assert_eq!(value["status"], "assessed");
        assert_eq!(value["irrigation_interval"]["kind"], "flooded");

        let missing = evaluate_soil("Durian", 6.0, 3.0, 85, Texture::Clay).unwrap();
        let value: Value = serde_json::from_str(&JsonFormatter::format(&missing).unwrap()).unwrap();
        assert_eq!(value["status"], "no_data");
        assert_eq!(value["crop"], "Durian");
    }
}
