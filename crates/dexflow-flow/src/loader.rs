//! CSV loading for creature records
//!
//! Expected headers: `Name, Type_1, Type_2, HP, Attack, Defense, Sp_Atk,
//! Sp_Def, Speed` and optionally `Catch_Rate`. Other columns are ignored.
//! Numeric cells follow loose coercion: blank reads as 0, anything
//! unparsable reads as NaN and is logged.

use crate::error::{FlowError, FlowResult};
use dexflow_types::{Record, Stats};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Type_1")]
    type_1: String,
    #[serde(rename = "Type_2", default)]
    type_2: Option<String>,
    #[serde(rename = "HP")]
    hp: String,
    #[serde(rename = "Attack")]
    attack: String,
    #[serde(rename = "Defense")]
    defense: String,
    #[serde(rename = "Sp_Atk")]
    sp_atk: String,
    #[serde(rename = "Sp_Def")]
    sp_def: String,
    #[serde(rename = "Speed")]
    speed: String,
    #[serde(rename = "Catch_Rate", default)]
    catch_rate: Option<String>,
}

/// Load records from a CSV file
pub fn load_records<P: AsRef<Path>>(path: P) -> FlowResult<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FlowError::file(path, e))?;
    let records = read_records(file, path)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read records from any CSV source; `source` only labels errors
pub fn read_records<R: Read, P: AsRef<Path>>(reader: R, source: P) -> FlowResult<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CsvRow>()
        .map(|row| {
            row.map(into_record)
                .map_err(|e| FlowError::csv(source.as_ref(), e))
        })
        .collect()
}

fn into_record(row: CsvRow) -> Record {
    let id = row.name;
    let stats = Stats {
        hp: parse_number(&id, "HP", &row.hp),
        attack: parse_number(&id, "Attack", &row.attack),
        defense: parse_number(&id, "Defense", &row.defense),
        sp_atk: parse_number(&id, "Sp_Atk", &row.sp_atk),
        sp_def: parse_number(&id, "Sp_Def", &row.sp_def),
        speed: parse_number(&id, "Speed", &row.speed),
        catch_rate: row
            .catch_rate
            .as_deref()
            .map(|v| parse_number(&id, "Catch_Rate", v))
            .unwrap_or(0.0),
    };
    Record {
        primary_category: row.type_1,
        secondary_category: row.type_2.filter(|t| !t.is_empty()),
        id,
        stats,
    }
}

fn parse_number(id: &str, column: &str, raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse().unwrap_or_else(|_| {
        warn!("Unparsable {} value '{}' for '{}', using NaN", column, raw, id);
        f64::NAN
    })
}
