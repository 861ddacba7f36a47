//! Read-only reference tables backing every calculator.
//!
//! The tables ship as CSV files embedded in the binary and are parsed once
//! into a [`ReferenceTables`] value. Callers hold on to that value and pass
//! it by reference into the compute functions; nothing here is global.

use crate::cooldown::{Formula, GameSystem};
use crate::fishing_line::LineKind;
use crate::TableError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const GAMES_CSV: &str = include_str!("data/games.csv");
const LINE_DIAMETERS_CSV: &str = include_str!("data/line_diameters.csv");
const REELS_CSV: &str = include_str!("data/reels.csv");
const INGREDIENTS_CSV: &str = include_str!("data/ingredients.csv");

/// Reel size with the line rating printed on the spool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelSpec {
    pub size: u32,
    pub reference_pound_test: f64,
    pub reference_yards: f64,
}

/// Mass of one US cup of an ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub key: String,
    pub name: String,
    pub category: String,
    pub grams_per_cup: f64,
}

/// Result of a line diameter lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiameterLookup {
    /// Pound test matched a table row.
    Exact(f64),
    /// Pound test fell between two rows.
    Interpolated(f64),
    /// Pound test was outside the table; the nearest extreme row was used.
    Clamped(f64),
}

impl DiameterLookup {
    pub fn diameter(self) -> f64 {
        match self {
            DiameterLookup::Exact(d) | DiameterLookup::Interpolated(d) | DiameterLookup::Clamped(d) => d,
        }
    }
}

/// Pound test to diameter (inches) per line kind, sorted by pound test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDiameterTable {
    rows: BTreeMap<LineKind, Vec<(f64, f64)>>,
}

impl LineDiameterTable {
    pub fn rows(&self, kind: LineKind) -> &[(f64, f64)] {
        self.rows.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Diameter for `pound_test`, interpolating between the bracketing rows.
    ///
    /// Returns `None` only when the table has no rows for `kind`. A NaN
    /// rating clamps to the lightest row.
    pub fn lookup(&self, kind: LineKind, pound_test: f64) -> Option<DiameterLookup> {
        let rows = self.rows(kind);
        let (first, last) = (rows.first()?, rows.last()?);

        if pound_test.is_nan() || pound_test <= first.0 {
            return Some(if pound_test == first.0 {
                DiameterLookup::Exact(first.1)
            } else {
                DiameterLookup::Clamped(first.1)
            });
        }
        if pound_test >= last.0 {
            return Some(if pound_test == last.0 {
                DiameterLookup::Exact(last.1)
            } else {
                DiameterLookup::Clamped(last.1)
            });
        }

        // rows are sorted, so the first key >= pound_test brackets it from above
        let upper = rows.partition_point(|&(lb, _)| lb < pound_test);
        let (hi_lb, hi_d) = rows[upper];
        if hi_lb == pound_test {
            return Some(DiameterLookup::Exact(hi_d));
        }
        let (lo_lb, lo_d) = rows[upper - 1];
        let t = (pound_test - lo_lb) / (hi_lb - lo_lb);
        Some(DiameterLookup::Interpolated(lo_d + t * (hi_d - lo_d)))
    }
}

#[derive(Debug, Deserialize)]
struct GameRow {
    key: String,
    name: String,
    category: String,
    stat_label: String,
    formula: String,
    param: Option<f64>,
    cap: Option<f64>,
    example: String,
}

#[derive(Debug, Deserialize)]
struct LineRow {
    line_kind: String,
    pound_test: f64,
    diameter_in: f64,
}

/// Every lookup table the calculators read from.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    pub games: Vec<GameSystem>,
    pub line_diameters: LineDiameterTable,
    pub reels: Vec<ReelSpec>,
    pub ingredients: Vec<Ingredient>,
}

impl ReferenceTables {
    /// Parse the tables embedded at build time.
    pub fn load() -> Result<Self, TableError> {
        Self::from_csv(GAMES_CSV, LINE_DIAMETERS_CSV, REELS_CSV, INGREDIENTS_CSV)
    }

    pub fn from_csv(
        games_csv: &str,
        line_csv: &str,
        reels_csv: &str,
        ingredients_csv: &str,
    ) -> Result<Self, TableError> {
        let tables = ReferenceTables {
            games: read_games(games_csv)?,
            line_diameters: read_line_diameters(line_csv)?,
            reels: read_reels(reels_csv)?,
            ingredients: read_ingredients(ingredients_csv)?,
        };
        info!(
            "Loaded reference tables: {} games, {} reels, {} ingredients",
            tables.games.len(),
            tables.reels.len(),
            tables.ingredients.len()
        );
        Ok(tables)
    }

    pub fn game(&self, key: &str) -> Option<&GameSystem> {
        self.games.iter().find(|g| g.key == key)
    }

    pub fn ingredient(&self, key: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.key == key)
    }

    pub fn reel(&self, size: u32) -> Option<&ReelSpec> {
        self.reels.iter().find(|r| r.size == size)
    }
}

fn reader(data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes())
}

fn invalid(table: &'static str, line: usize, reason: impl Into<String>) -> TableError {
    TableError::InvalidRow {
        table,
        line,
        reason: reason.into(),
    }
}

// header is line 1, so the first record is line 2
fn read_games(data: &str) -> Result<Vec<GameSystem>, TableError> {
    let mut games = Vec::new();
    for (i, record) in reader(data).deserialize::<GameRow>().enumerate() {
        let row = record?;
        let line = i + 2;
        let formula = Formula::parse(&row.formula, row.param).map_err(|e| invalid("games", line, e))?;
        if let Some(cap) = row.cap {
            if !(0.0..=100.0).contains(&cap) {
                return Err(invalid("games", line, format!("cap {} is outside 0-100", cap)));
            }
        }
        if matches!(formula, Formula::CappedPercentage) && row.cap.is_none() {
            return Err(invalid("games", line, "capped-percentage needs a cap"));
        }
        if games.iter().any(|g: &GameSystem| g.key == row.key) {
            return Err(invalid("games", line, format!("duplicate key '{}'", row.key)));
        }
        debug!("game {} uses {:?}", row.key, formula);
        games.push(GameSystem {
            key: row.key,
            name: row.name,
            category: row.category,
            stat_label: row.stat_label,
            formula,
            cap: row.cap,
            example: row.example,
        });
    }
    Ok(games)
}

fn read_line_diameters(data: &str) -> Result<LineDiameterTable, TableError> {
    let mut rows: BTreeMap<LineKind, Vec<(f64, f64)>> = BTreeMap::new();
    for (i, record) in reader(data).deserialize::<LineRow>().enumerate() {
        let row = record?;
        let line = i + 2;
        let kind: LineKind = row
            .line_kind
            .parse()
            .map_err(|e: String| invalid("line_diameters", line, e))?;
        if row.pound_test <= 0.0 || row.diameter_in <= 0.0 {
            return Err(invalid("line_diameters", line, "pound test and diameter must be positive"));
        }
        rows.entry(kind).or_default().push((row.pound_test, row.diameter_in));
    }
    for entries in rows.values_mut() {
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        entries.dedup_by(|a, b| a.0 == b.0);
    }
    Ok(LineDiameterTable { rows })
}

fn read_reels(data: &str) -> Result<Vec<ReelSpec>, TableError> {
    let mut reels = Vec::new();
    for (i, record) in reader(data).deserialize::<ReelSpec>().enumerate() {
        let reel = record?;
        if reel.reference_pound_test <= 0.0 || reel.reference_yards <= 0.0 {
            return Err(invalid("reels", i + 2, "reference line must be positive"));
        }
        reels.push(reel);
    }
    reels.sort_by_key(|r| r.size);
    Ok(reels)
}

fn read_ingredients(data: &str) -> Result<Vec<Ingredient>, TableError> {
    let mut ingredients = Vec::new();
    for (i, record) in reader(data).deserialize::<Ingredient>().enumerate() {
        let ingredient = record?;
        if ingredient.grams_per_cup <= 0.0 {
            return Err(invalid(
                "ingredients",
                i + 2,
                format!("{} has a non-positive density", ingredient.key),
            ));
        }
        ingredients.push(ingredient);
    }
    Ok(ingredients)
}
