//! Pond volume, pump sizing and liner size.

use crate::Warnings;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const US_GALLONS_PER_CUBIC_FOOT: f64 = 7.48;
pub const LITERS_PER_CUBIC_FOOT: f64 = 28.3168;
pub const IMPERIAL_GALLONS_PER_CUBIC_FOOT: f64 = 6.229;
pub const CUBIC_FEET_PER_CUBIC_METER: f64 = 35.3147;
pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;
pub const FEET_PER_METER: f64 = 3.28084;

/// Share of the bounding rectangle covered by an irregular pond.
pub const IRREGULAR_AREA_FACTOR: f64 = 2.0 / 3.0;
/// Hours for the pump to move the full pond volume once.
pub const PUMP_TURNOVER_HOURS: f64 = 2.0;
/// Liner overlap past the edge, per side, in feet.
pub const LINER_OVERLAP_FT: f64 = 1.0;
pub const GALLONS_PER_KOI: f64 = 250.0;
pub const GALLONS_PER_GOLDFISH: f64 = 20.0;
/// Below this depth (feet) fish struggle through winter and summer.
pub const MIN_FISH_DEPTH_FT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthUnit {
    Feet,
    Meters,
}

impl LengthUnit {
    pub fn to_feet(self, value: f64) -> f64 {
        match self {
            LengthUnit::Feet => value,
            LengthUnit::Meters => value * FEET_PER_METER,
        }
    }

    pub fn from_feet(self, feet: f64) -> f64 {
        match self {
            LengthUnit::Feet => feet,
            LengthUnit::Meters => feet / FEET_PER_METER,
        }
    }
}

/// Surface outline; all lengths in the input's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum PondShape {
    Rectangle { length: f64, width: f64 },
    Circle { diameter: f64 },
    Oval { length: f64, width: f64 },
    /// Free-form pond measured at its longest and widest points.
    Irregular { length: f64, width: f64 },
}

impl PondShape {
    pub fn surface_area(&self) -> f64 {
        match *self {
            PondShape::Rectangle { length, width } => length * width,
            PondShape::Circle { diameter } => PI * (diameter / 2.0).powi(2),
            PondShape::Oval { length, width } => PI * (length / 2.0) * (width / 2.0),
            PondShape::Irregular { length, width } => IRREGULAR_AREA_FACTOR * length * width,
        }
    }

    /// Longest and widest extent, used for liner sizing.
    pub fn extent(&self) -> (f64, f64) {
        match *self {
            PondShape::Rectangle { length, width }
            | PondShape::Oval { length, width }
            | PondShape::Irregular { length, width } => (length, width),
            PondShape::Circle { diameter } => (diameter, diameter),
        }
    }

    fn has_non_positive_dimension(&self) -> bool {
        let (l, w) = self.extent();
        !(l > 0.0 && w > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PondInput {
    pub shape: PondShape,
    pub depth: f64,
    pub unit: LengthUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PondResult {
    pub surface_area: f64,
    pub cubic_feet: f64,
    pub cubic_meters: f64,
    pub us_gallons: f64,
    pub imperial_gallons: f64,
    pub liters: f64,
    pub pump_gallons_per_hour: f64,
    /// Liner length and width, in the input's unit.
    pub liner_length: f64,
    pub liner_width: f64,
    pub max_koi: u32,
    pub max_goldfish: u32,
    pub warnings: Warnings,
}

impl PondResult {
    fn empty(warnings: Warnings) -> Self {
        PondResult {
            surface_area: 0.0,
            cubic_feet: 0.0,
            cubic_meters: 0.0,
            us_gallons: 0.0,
            imperial_gallons: 0.0,
            liters: 0.0,
            pump_gallons_per_hour: 0.0,
            liner_length: 0.0,
            liner_width: 0.0,
            max_koi: 0,
            max_goldfish: 0,
            warnings,
        }
    }
}

pub fn calculate(input: PondInput) -> PondResult {
    if input.shape.has_non_positive_dimension() || !(input.depth > 0.0) {
        warn!("pond with non-positive dimension {:?}", input);
        return PondResult::empty(vec!["All pond dimensions must be greater than zero".to_string()]);
    }

    let mut warnings = Vec::new();
    let surface_area = input.shape.surface_area();
    let volume = surface_area * input.depth;
    let (cubic_feet, cubic_meters, liters) = match input.unit {
        LengthUnit::Feet => (volume, volume / CUBIC_FEET_PER_CUBIC_METER, volume * LITERS_PER_CUBIC_FOOT),
        LengthUnit::Meters => (
            volume * CUBIC_FEET_PER_CUBIC_METER,
            volume,
            volume * LITERS_PER_CUBIC_METER,
        ),
    };
    let us_gallons = cubic_feet * US_GALLONS_PER_CUBIC_FOOT;
    debug!("area {:.3}, volume {:.3} ({:?})", surface_area, volume, input.unit);

    let depth_ft = input.unit.to_feet(input.depth);
    if depth_ft < MIN_FISH_DEPTH_FT {
        warnings.push(format!(
            "Ponds shallower than {} ft can freeze solid or overheat; deepen the pond if you plan to keep fish",
            MIN_FISH_DEPTH_FT
        ));
    }

    let (length, width) = input.shape.extent();
    let overlap = input.unit.from_feet(LINER_OVERLAP_FT);
    let liner_length = length + 2.0 * input.depth + 2.0 * overlap;
    let liner_width = width + 2.0 * input.depth + 2.0 * overlap;

    let fish_ok = depth_ft >= MIN_FISH_DEPTH_FT;
    let max_koi = if fish_ok { (us_gallons / GALLONS_PER_KOI).floor() as u32 } else { 0 };
    let max_goldfish = (us_gallons / GALLONS_PER_GOLDFISH).floor() as u32;

    info!("pond volume {:.1} US gal ({:.1} L)", us_gallons, liters);

    PondResult {
        surface_area,
        cubic_feet,
        cubic_meters,
        us_gallons,
        imperial_gallons: cubic_feet * IMPERIAL_GALLONS_PER_CUBIC_FOOT,
        liters,
        pump_gallons_per_hour: us_gallons / PUMP_TURNOVER_HOURS,
        liner_length,
        liner_width,
        max_koi,
        max_goldfish,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn rectangle_ten_by_five_by_two() {
        let r = calculate(PondInput {
            shape: PondShape::Rectangle {
                length: 10.0,
                width: 5.0,
            },
            depth: 2.0,
            unit: LengthUnit::Feet,
        });
        assert!(approx(r.cubic_feet, 100.0));
        assert!(approx(r.us_gallons, 748.0));
        assert!(approx(r.pump_gallons_per_hour, 374.0));
        assert!(approx(r.liner_length, 16.0));
        assert!(approx(r.liner_width, 11.0));
        assert_eq!(r.max_koi, 2);
        assert_eq!(r.max_goldfish, 37);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn circle_uses_radius_squared() {
        let r = calculate(PondInput {
            shape: PondShape::Circle { diameter: 2.0 },
            depth: 1.0,
            unit: LengthUnit::Meters,
        });
        assert!(approx(r.cubic_meters, PI));
        assert!(approx(r.liters, PI * 1000.0));
    }

    #[test]
    fn irregular_is_two_thirds_of_rectangle() {
        let rect = calculate(PondInput {
            shape: PondShape::Rectangle { length: 9.0, width: 6.0 },
            depth: 3.0,
            unit: LengthUnit::Feet,
        });
        let irregular = calculate(PondInput {
            shape: PondShape::Irregular { length: 9.0, width: 6.0 },
            depth: 3.0,
            unit: LengthUnit::Feet,
        });
        assert!(approx(irregular.cubic_feet, rect.cubic_feet * 2.0 / 3.0));
    }

    #[test]
    fn oval_area() {
        let shape = PondShape::Oval { length: 4.0, width: 2.0 };
        assert!(approx(shape.surface_area(), PI * 2.0));
    }

    #[test]
    fn zero_dimension_gives_empty_result() {
        let r = calculate(PondInput {
            shape: PondShape::Rectangle { length: 0.0, width: 5.0 },
            depth: 2.0,
            unit: LengthUnit::Feet,
        });
        assert_eq!(r.us_gallons, 0.0);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn shallow_pond_warns_and_holds_no_koi() {
        let r = calculate(PondInput {
            shape: PondShape::Rectangle { length: 20.0, width: 20.0 },
            depth: 1.0,
            unit: LengthUnit::Feet,
        });
        assert_eq!(r.max_koi, 0);
        assert_eq!(r.warnings.len(), 1);
    }
}
