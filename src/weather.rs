//! Weather Risk Analysis
//!
//! Flags field-work risks in a 3-hourly forecast. Entries deserialize from
//! the OpenWeather 5-day forecast `list` shape; fetching the forecast is the
//! caller's job.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Forecast entries examined (8 x 3 h, roughly the next 24 hours)
pub const FORECAST_WINDOW: usize = 8;

const HIGH_HUMIDITY_PCT: f64 = 90.0;
const HEAVY_RAIN_MM_3H: f64 = 20.0;
const DAMAGING_WIND_M_S: f64 = 15.0;

/// Forecast response body (only the fields the analysis reads)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour forecast step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt_txt: Option<String>,
    pub main: MainReadings,
    /// Absent when no rain is forecast
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MainReadings {
    /// Relative humidity (%)
    pub humidity: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Precipitation {
    /// Rain volume over the 3-hour step (mm)
    #[serde(rename = "3h", default)]
    pub three_hour_mm: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wind {
    /// m/s
    pub speed: f64,
}

impl ForecastEntry {
    pub fn rain_mm(&self) -> f64 {
        self.rain.map(|r| r.three_hour_mm).unwrap_or(0.0)
    }
}

/// Field-work risk raised by the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherAlert {
    HighHumidityStress,
    HeavyRainRisk,
    WindDamageRisk,
}

impl WeatherAlert {
    pub fn display_text(&self) -> &'static str {
        match self {
            WeatherAlert::HighHumidityStress => "High Humidity Stress",
            WeatherAlert::HeavyRainRisk => "Heavy Rain Risk",
            WeatherAlert::WindDamageRisk => "Wind Damage Risk",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WeatherAlert::HighHumidityStress => "💧",
            WeatherAlert::HeavyRainRisk => "🌧️",
            WeatherAlert::WindDamageRisk => "💨",
        }
    }
}

impl fmt::Display for WeatherAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.display_text())
    }
}

/// Distinct alerts raised by the first [`FORECAST_WINDOW`] entries
///
/// Thresholds are strict: humidity above 90 %, 3 h rain above 20 mm, wind
/// above 15 m/s. Each alert appears at most once, in declaration order.
pub fn analyze_forecast(entries: &[ForecastEntry]) -> Vec<WeatherAlert> {
    let mut alerts = BTreeSet::new();

    for entry in entries.iter().take(FORECAST_WINDOW) {
        if entry.main.humidity > HIGH_HUMIDITY_PCT {
            alerts.insert(WeatherAlert::HighHumidityStress);
        }
        if entry.rain_mm() > HEAVY_RAIN_MM_3H {
            alerts.insert(WeatherAlert::HeavyRainRisk);
        }
        if entry.wind.speed > DAMAGING_WIND_M_S {
            alerts.insert(WeatherAlert::WindDamageRisk);
        }
    }

    alerts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(humidity: f64, rain: Option<f64>, wind: f64) -> ForecastEntry {
        ForecastEntry {
            dt_txt: None,
            main: MainReadings { humidity },
            rain: rain.map(|three_hour_mm| Precipitation { three_hour_mm }),
            wind: Wind { speed: wind },
        }
    }

    #[test]
    fn test_calm_forecast_has_no_alerts() {
        let entries = vec![entry(60.0, None, 3.0); 8];
        assert!(analyze_forecast(&entries).is_empty());
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(analyze_forecast(&[entry(90.0, Some(20.0), 15.0)]).is_empty());
        assert_eq!(
            analyze_forecast(&[entry(90.5, Some(20.5), 15.5)]),
            vec![
                WeatherAlert::HighHumidityStress,
                WeatherAlert::HeavyRainRisk,
                WeatherAlert::WindDamageRisk,
            ]
        );
    }

    #[test]
    fn test_alerts_deduplicated() {
        let entries = vec![entry(95.0, None, 2.0), entry(97.0, None, 2.0)];
        assert_eq!(analyze_forecast(&entries), vec![WeatherAlert::HighHumidityStress]);
    }

    #[test]
    fn test_only_first_day_examined() {
        let mut entries = vec![entry(50.0, None, 2.0); 8];
        entries.push(entry(99.0, Some(50.0), 30.0));
        assert!(analyze_forecast(&entries).is_empty());
    }

    #[test]
    fn test_deserialize_openweather_shape() {
        let body = r#"{
            "cod": "200",
            "list": [
                {"dt_txt": "2025-07-01 12:00:00",
                 "main": {"temp": 301.2, "humidity": 93},
                 "wind": {"speed": 4.1, "deg": 120}},
                {"main": {"humidity": 70},
                 "rain": {"3h": 22.4},
                 "wind": {"speed": 16.0}}
            ]
        }"#;
        let forecast: Forecast = serde_json::from_str(body).unwrap();
        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.list[0].rain_mm(), 0.0);
        assert_eq!(
            analyze_forecast(&forecast.list),
            vec![
                WeatherAlert::HighHumidityStress,
                WeatherAlert::HeavyRainRisk,
                WeatherAlert::WindDamageRisk,
            ]
        );
        assert_eq!(WeatherAlert::HeavyRainRisk.to_string(), "🌧️ Heavy Rain Risk");
    }
}
