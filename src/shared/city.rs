//! City Record
//!
//! The read-only city record returned by `GET /cities/{id}`. Field names
//! follow the backend's camelCase JSON. Fields the client never shows
//! (`creationDate`, `user`, `updatedBy`, ...) are ignored on decode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a city, as used in the `/cities/{id}` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(pub i64);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(CityId)
    }
}

impl From<i64> for CityId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A scalar the backend may send either as a JSON string or a JSON number.
///
/// `carCode` and `agglomeration` are integers in the server model but are
/// documented as short strings, so both encodings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Number(n) => write!(f, "{}", n),
            TextOrNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for TextOrNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for TextOrNumber {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Position of a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// The governor of a city. Only the height is exposed to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Governor {
    pub height: f64,
}

/// City record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub population: i64,
    pub area: f64,
    pub capital: bool,
    #[serde(default)]
    pub meters_above_sea_level: f64,
    #[serde(default)]
    pub car_code: Option<TextOrNumber>,
    #[serde(default)]
    pub agglomeration: Option<TextOrNumber>,
    pub climate: String,
    pub coordinates: Coordinates,
    pub governor: Governor,
}

impl City {
    pub fn capital_label(&self) -> &'static str {
        if self.capital {
            "Yes"
        } else {
            "No"
        }
    }

    /// Label/value rows in display order.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        let optional = |value: &Option<TextOrNumber>| {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        };

        vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Population", self.population.to_string()),
            ("Area", self.area.to_string()),
            ("Capital", self.capital_label().to_string()),
            ("Meters Above Sea Level", self.meters_above_sea_level.to_string()),
            ("Car Code", optional(&self.car_code)),
            ("Agglomeration", optional(&self.agglomeration)),
            ("Climate", self.climate.clone()),
            (
                "Coordinates",
                format!("X: {}, Y: {}", self.coordinates.x, self.coordinates.y),
            ),
            ("Governor", self.governor.height.to_string()),
        ]
    }
}
