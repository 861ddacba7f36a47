//! Spool capacity for spinning reels.
//!
//! A reel's printed rating ("130 yd of 10 lb mono") gives a capacity
//! constant `yards * diameter²`. Any other line fits `constant / d²` yards.

use crate::tables::{DiameterLookup, ReelSpec, ReferenceTables};
use crate::{CalcError, Warnings};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const METERS_PER_YARD: f64 = 0.9144;
pub const FEET_PER_YARD: f64 = 3.0;

/// Spool ratings are always given for monofilament.
pub const REFERENCE_LINE: LineKind = LineKind::Monofilament;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Monofilament,
    Fluorocarbon,
    Braid,
}

impl LineKind {
    pub const ALL: [LineKind; 3] = [LineKind::Monofilament, LineKind::Fluorocarbon, LineKind::Braid];

    pub fn key(self) -> &'static str {
        match self {
            LineKind::Monofilament => "monofilament",
            LineKind::Fluorocarbon => "fluorocarbon",
            LineKind::Braid => "braid",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LineKind::Monofilament => "Monofilament",
            LineKind::Fluorocarbon => "Fluorocarbon",
            LineKind::Braid => "Braided",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for LineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineKind::ALL
            .into_iter()
            .find(|k| k.key() == s)
            .ok_or_else(|| format!("unknown line kind '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub kind: LineKind,
    pub pound_test: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub diameter_in: f64,
    pub yards: f64,
    pub meters: f64,
    pub feet: f64,
    pub warnings: Warnings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackingResult {
    pub main_line_yards: f64,
    pub backing_yards: f64,
    pub backing_meters: f64,
    /// Share of the spool taken by the main line, 0-100.
    pub main_line_fill_percent: f64,
    pub warnings: Warnings,
}

/// `reference_yards * reference_diameter²` for a reel.
pub fn spool_constant(tables: &ReferenceTables, reel: &ReelSpec) -> Result<f64, CalcError> {
    let d = tables
        .line_diameters
        .lookup(REFERENCE_LINE, reel.reference_pound_test)
        .ok_or_else(|| CalcError::unknown("line kind", REFERENCE_LINE.key()))?
        .diameter();
    Ok(reel.reference_yards * d * d)
}

fn diameter_for(tables: &ReferenceTables, line: LineSpec, warnings: &mut Warnings) -> Result<f64, CalcError> {
    if !(line.pound_test > 0.0) {
        return Err(CalcError::invalid("pound test", "must be greater than zero"));
    }
    let lookup = tables
        .line_diameters
        .lookup(line.kind, line.pound_test)
        .ok_or_else(|| CalcError::unknown("line kind", line.kind.key()))?;
    if let DiameterLookup::Clamped(d) = lookup {
        warn!("{} lb {} is outside the diameter table", line.pound_test, line.kind.key());
        warnings.push(format!(
            "{} lb is outside the {} chart; using the nearest listed diameter ({:.3}\")",
            line.pound_test, line.kind, d
        ));
    }
    Ok(lookup.diameter())
}

fn find_reel(tables: &ReferenceTables, reel_size: u32) -> Result<&ReelSpec, CalcError> {
    tables
        .reel(reel_size)
        .ok_or_else(|| CalcError::unknown("reel size", reel_size.to_string()))
}

/// How much of `line` fits on a reel of `reel_size`.
pub fn line_capacity(tables: &ReferenceTables, reel_size: u32, line: LineSpec) -> Result<CapacityResult, CalcError> {
    let reel = find_reel(tables, reel_size)?;
    let constant = spool_constant(tables, reel)?;
    let mut warnings = Vec::new();
    let d = diameter_for(tables, line, &mut warnings)?;

    let yards = constant / (d * d);
    debug!("reel {} constant {:.6}, diameter {:.4}", reel_size, constant, d);
    info!("{} lb {} on {}: {:.0} yd", line.pound_test, line.kind.key(), reel_size, yards);

    Ok(CapacityResult {
        diameter_in: d,
        yards,
        meters: yards * METERS_PER_YARD,
        feet: yards * FEET_PER_YARD,
        warnings,
    })
}

/// Backing that still fits under `main_line_yards` of `main`.
pub fn backing_capacity(
    tables: &ReferenceTables,
    reel_size: u32,
    main: LineSpec,
    main_line_yards: f64,
    backing: LineSpec,
) -> Result<BackingResult, CalcError> {
    let reel = find_reel(tables, reel_size)?;
    let constant = spool_constant(tables, reel)?;
    let mut warnings = Vec::new();
    let d_main = diameter_for(tables, main, &mut warnings)?;
    let d_backing = diameter_for(tables, backing, &mut warnings)?;

    let main_line_yards = main_line_yards.max(0.0);
    let main_volume = main_line_yards * d_main * d_main;
    if main_volume > constant {
        let capacity = constant / (d_main * d_main);
        warn!(
            "{:.0} yd of main line exceeds {:.0} yd capacity on reel {}",
            main_line_yards, capacity, reel_size
        );
        return Err(CalcError::ExceedsCapacity {
            requested: main_line_yards,
            capacity,
        });
    }

    let backing_yards = (constant - main_volume) / (d_backing * d_backing);
    if backing_yards < 1.0 {
        warnings.push("The main line fills the spool; no room for backing".to_string());
    }
    info!(
        "reel {}: {:.0} yd main leaves {:.0} yd backing",
        reel_size, main_line_yards, backing_yards
    );

    Ok(BackingResult {
        main_line_yards,
        backing_yards,
        backing_meters: backing_yards * METERS_PER_YARD,
        main_line_fill_percent: main_volume / constant * 100.0,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> ReferenceTables {
        ReferenceTables::load().unwrap()
    }

    fn mono(lb: f64) -> LineSpec {
        LineSpec {
            kind: LineKind::Monofilament,
            pound_test: lb,
        }
    }

    #[test]
    fn reference_line_matches_printed_rating() {
        let r = line_capacity(&tables(), 3000, mono(10.0)).unwrap();
        assert!((r.yards - 130.0).abs() < 1e-9);
        assert!((r.feet - 390.0).abs() < 1e-9);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn thinner_line_fits_more() {
        let t = tables();
        let braid = line_capacity(
            &t,
            3000,
            LineSpec {
                kind: LineKind::Braid,
                pound_test: 20.0,
            },
        )
        .unwrap();
        // 130 * 0.012² / 0.008²
        assert!((braid.yards - 292.5).abs() < 1e-6);
    }

    #[test]
    fn out_of_chart_pound_test_warns() {
        let r = line_capacity(&tables(), 3000, mono(80.0)).unwrap();
        assert_eq!(r.diameter_in, 0.028);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn unknown_reel_is_an_error() {
        let err = line_capacity(&tables(), 1234, mono(10.0)).unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey { .. }));
    }

    #[test]
    fn zero_pound_test_is_rejected() {
        assert!(line_capacity(&tables(), 3000, mono(0.0)).is_err());
    }

    #[test]
    fn backing_fills_remaining_space() {
        let r = backing_capacity(&tables(), 3000, mono(10.0), 65.0, mono(10.0)).unwrap();
        assert!((r.backing_yards - 65.0).abs() < 1e-9);
        assert!((r.main_line_fill_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn backing_request_over_capacity_is_an_error() {
        let err = backing_capacity(&tables(), 3000, mono(10.0), 500.0, mono(10.0)).unwrap_err();
        match err {
            CalcError::ExceedsCapacity { requested, capacity } => {
                assert_eq!(requested, 500.0);
                assert!((capacity - 130.0).abs() < 1e-9);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn line_kind_round_trips_through_key() {
        for kind in LineKind::ALL {
            assert_eq!(kind.key().parse::<LineKind>(), Ok(kind));
        }
        assert!("nylon".parse::<LineKind>().is_err());
    }
}
