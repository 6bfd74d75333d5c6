//! Tomorrow.io weather codes and their text and ASCII-art renderings.

/// Description of every weather code the API documents.
pub const WEATHER_CODES: [(i32, &str); 24] = [
    (0, "Unknown"),
    (1000, "Clear, Sunny"),
    (1100, "Mostly Clear"),
    (1101, "Partly Cloudy"),
    (1102, "Mostly Cloudy"),
    (1001, "Cloudy"),
    (2000, "Fog"),
    (2100, "Light Fog"),
    (4000, "Drizzle"),
    (4001, "Rain"),
    (4200, "Light Rain"),
    (4201, "Heavy Rain"),
    (5000, "Snow"),
    (5001, "Flurries"),
    (5100, "Light Snow"),
    (5101, "Heavy Snow"),
    (6000, "Freezing Drizzle"),
    (6001, "Freezing Rain"),
    (6200, "Light Freezing Rain"),
    (6201, "Heavy Freezing Rain"),
    (7000, "Ice Pellets"),
    (7101, "Heavy Ice Pellets"),
    (7102, "Light Ice Pellets"),
    (8000, "Thunderstorm"),
];

pub const UNKNOWN: &str = r"
    .-.
     __)
    (
     '-'
      •";

pub const CLEAR: &str = r"
    \   /
     .-.
  ― (   ) ―
     '-’
    /   \";

pub const CLOUDY: &str = r"
      .--.
   .-(    ).
  (___.__)__)";

pub const FOG: &str = r"
     _ - _ - _ -
      _ - _ - _
     _ - _ - _ -";

pub const RAIN: &str = r"
     .-.
    (   ).
   (___(__)
    ' ' ' '
   ' ' ' '";

pub const SNOW: &str = r"
      .-.
     (   ).
    (___(__)
     *  *  *
    *  *  *";

pub const ICE_PELLETS: &str = r"
      .-.
     (   ).
    (___(__)
     |  |  |
    |  |  |";

/// Returns the description of `code`, or an empty string for codes outside the table.
pub fn describe(code: i32) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, description)| *description)
        .unwrap_or("")
}

/// Returns the pictogram drawn for `code`, if its group has one.
///
/// Thunderstorms (8000) have no pictogram.
pub fn pictogram(code: i32) -> Option<&'static str> {
    match code {
        0 => Some(UNKNOWN),
        1000 | 1100 => Some(CLEAR),
        1101 | 1102 | 1001 => Some(CLOUDY),
        2000 | 2100 => Some(FOG),
        4000 | 4001 | 4200 | 4201 | 6000 | 6001 | 6200 | 6201 => Some(RAIN),
        5000 | 5001 | 5100 | 5101 => Some(SNOW),
        7000 | 7101 | 7102 => Some(ICE_PELLETS),
        _ => None,
    }
}
