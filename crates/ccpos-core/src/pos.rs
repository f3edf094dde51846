//! POS domain model.
//!
//! A [`Pos`] is a point of sale on or around the university campuses —
//! a cafe, cafeteria, vending machine, or bakery. Values are constructed
//! transiently by the import pipeline and only become durable once the
//! store accepts them, at which point the store assigns `id` and both
//! timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a point of sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosType {
    Cafe,
    Cafeteria,
    VendingMachine,
    Bakery,
}

impl PosType {
    /// Database/text representation, matching the serde form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PosType::Cafe => "CAFE",
            PosType::Cafeteria => "CAFETERIA",
            PosType::VendingMachine => "VENDING_MACHINE",
            PosType::Bakery => "BAKERY",
        }
    }
}

impl std::str::FromStr for PosType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAFE" => Ok(PosType::Cafe),
            "CAFETERIA" => Ok(PosType::Cafeteria),
            "VENDING_MACHINE" => Ok(PosType::VendingMachine),
            "BAKERY" => Ok(PosType::Bakery),
            other => Err(UnknownVariant {
                kind: "PosType",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for PosType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campus zone a POS belongs to. Heidelberg has three relevant areas;
/// anything that cannot be placed ends up in `Altstadt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampusType {
    Altstadt,
    Bergheim,
    Inf,
}

impl CampusType {
    /// Database/text representation, matching the serde form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CampusType::Altstadt => "ALTSTADT",
            CampusType::Bergheim => "BERGHEIM",
            CampusType::Inf => "INF",
        }
    }
}

impl std::str::FromStr for CampusType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALTSTADT" => Ok(CampusType::Altstadt),
            "BERGHEIM" => Ok(CampusType::Bergheim),
            "INF" => Ok(CampusType::Inf),
            other => Err(UnknownVariant {
                kind: "CampusType",
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CampusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string did not match any variant of an enum column.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// A point of sale.
///
/// `id`, `created_at`, and `updated_at` are `None` until the store has
/// persisted the record; the pipeline never sets them itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub pos_type: PosType,
    pub campus: CampusType,
    pub street: String,
    pub house_number: String,
    pub postal_code: i32,
    pub city: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
