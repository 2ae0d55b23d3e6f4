//! Record types for tabular creature data
//!
//! A [`Record`] is one row of the source table: an identifier, a required
//! primary category, an optional secondary category and a fixed set of
//! numeric measurements addressed through [`Stat`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Named numeric measurements carried by every record
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Hit points
    #[strum(to_string = "hp")]
    Hp,

    /// Physical attack
    #[strum(to_string = "attack", serialize = "atk")]
    Attack,

    /// Physical defense
    #[strum(to_string = "defense", serialize = "def")]
    Defense,

    /// Special attack
    #[strum(to_string = "sp_atk")]
    SpAtk,

    /// Special defense
    #[strum(to_string = "sp_def")]
    SpDef,

    /// Speed
    #[strum(to_string = "speed")]
    Speed,

    /// Catch rate
    #[strum(to_string = "catch_rate")]
    CatchRate,
}

impl Stat {
    /// Axis label used by charts
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpAtk => "Sp.Atk",
            Stat::SpDef => "Sp.Def",
            Stat::Speed => "Speed",
            Stat::CatchRate => "Catch Rate",
        }
    }

    /// The six base stats shown on a radar profile, in display order
    pub fn base_stats() -> [Stat; 6] {
        [
            Stat::Hp,
            Stat::Attack,
            Stat::Defense,
            Stat::SpAtk,
            Stat::SpDef,
            Stat::Speed,
        ]
    }
}

/// Numeric measurements of a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub sp_atk: f64,
    pub sp_def: f64,
    pub speed: f64,
    pub catch_rate: f64,
}

impl Stats {
    /// Read a single measurement
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAtk => self.sp_atk,
            Stat::SpDef => self.sp_def,
            Stat::Speed => self.speed,
            Stat::CatchRate => self.catch_rate,
        }
    }

    /// Sum of the given measurements
    pub fn total(&self, stats: &[Stat]) -> f64 {
        stats.iter().map(|s| self.get(*s)).sum()
    }
}

/// One input entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier (the creature name)
    pub id: String,
    /// Required primary category
    pub primary_category: String,
    /// Optional secondary category
    pub secondary_category: Option<String>,
    /// Numeric measurements
    pub stats: Stats,
}

impl Record {
    /// Create a record with a single category
    pub fn new(id: impl Into<String>, primary_category: impl Into<String>, stats: Stats) -> Self {
        Self {
            id: id.into(),
            primary_category: primary_category.into(),
            secondary_category: None,
            stats,
        }
    }

    /// Set the secondary category and return self for chaining
    pub fn with_secondary(mut self, category: impl Into<String>) -> Self {
        self.secondary_category = Some(category.into());
        self
    }

    /// Read a measurement
    pub fn measurement(&self, stat: Stat) -> f64 {
        self.stats.get(stat)
    }

    /// Secondary category, `None` when absent or blank
    pub fn secondary(&self) -> Option<&str> {
        self.secondary_category.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Whether the record carries a secondary category
    pub fn is_dual(&self) -> bool {
        self.secondary().is_some()
    }

    /// Categories in observation order: primary first, then secondary
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_category.as_str()).chain(self.secondary())
    }
}
