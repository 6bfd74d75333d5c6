use std::io::Write;

use crate::error::AppError;
use crate::weather::codes;
use crate::weather::response::CurrentWeather;

/// Writes the weather report: pictogram, description, then the measured values.
///
/// Codes without a pictogram skip straight to the description.
pub fn present<W: Write>(weather: &CurrentWeather, out: &mut W) -> Result<(), AppError> {
    if let Some(pictogram) = codes::pictogram(weather.weather_code) {
        writeln!(out, "{}", pictogram)?;
    }
    writeln!(out, "{}", weather.description)?;
    writeln!(out, "Temperature: {:.2} ºC", weather.temperature)?;
    writeln!(out, "Humidity: {:.2} %", weather.humidity)?;
    writeln!(out, "Wind speed: {:.2} m/s", weather.wind_speed)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weather(weather_code: i32, description: &str) -> CurrentWeather {
        CurrentWeather {
            timestamp: "2024-05-01T11:00:00Z".to_string(),
            temperature: 21.456,
            humidity: 0.0,
            wind_speed: 3.5,
            weather_code,
            description: description.to_string(),
        }
    }

    fn render(weather: &CurrentWeather) -> String {
        let mut out = Vec::new();
        present(weather, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn clear_report() {
        let output = render(&weather(1000, "Clear, Sunny"));

        assert_eq!(
            output,
            format!(
                "{}\nClear, Sunny\nTemperature: 21.46 ºC\nHumidity: 0.00 %\nWind speed: 3.50 m/s\n",
                codes::CLEAR
            )
        );
    }

    #[test]
    fn snow_uses_snow_pictogram() {
        let output = render(&weather(5100, "Light Snow"));

        assert!(output.starts_with(codes::SNOW));
        assert!(!output.contains(codes::RAIN));
    }

    #[test]
    fn unlisted_code_prints_values_only() {
        let output = render(&weather(9999, ""));

        assert_eq!(
            output,
            "\nTemperature: 21.46 ºC\nHumidity: 0.00 %\nWind speed: 3.50 m/s\n"
        );
    }

    #[test]
    fn thunderstorm_has_no_pictogram() {
        let output = render(&weather(8000, "Thunderstorm"));

        assert!(output.starts_with("Thunderstorm\n"));
    }
}
