//! Single entry point dispatching a calculator request to its formula.

use crate::cooldown::{self, CooldownInput, CooldownResult};
use crate::fishing_line::{self, BackingResult, CapacityResult, LineSpec};
use crate::pond::{self, PondInput, PondResult};
use crate::recipe::{self, ConversionInput, ConversionResult, RecipeItem, ScaledRecipe};
use crate::tables::ReferenceTables;
use crate::wedding::{self, WeddingInput, WeddingResult};
use crate::CalcError;
use serde::{Deserialize, Serialize};

/// One request per calculator widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum Calculation {
    Cooldown {
        game: String,
        #[serde(flatten)]
        input: CooldownInput,
    },
    LineCapacity {
        reel_size: u32,
        line: LineSpec,
    },
    Backing {
        reel_size: u32,
        main_line: LineSpec,
        main_line_yards: f64,
        backing: LineSpec,
    },
    Pond(PondInput),
    Convert(ConversionInput),
    ScaleRecipe {
        original_servings: f64,
        desired_servings: f64,
        items: Vec<RecipeItem>,
    },
    Wedding(WeddingInput),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "kebab-case")]
pub enum Outcome {
    Cooldown(CooldownResult),
    LineCapacity(CapacityResult),
    Backing(BackingResult),
    Pond(PondResult),
    Convert(ConversionResult),
    ScaleRecipe(ScaledRecipe),
    Wedding(WeddingResult),
}

impl Outcome {
    pub fn warnings(&self) -> &[String] {
        match self {
            Outcome::Cooldown(r) => &r.warnings,
            Outcome::LineCapacity(r) => &r.warnings,
            Outcome::Backing(r) => &r.warnings,
            Outcome::Pond(r) => &r.warnings,
            Outcome::Convert(r) => &r.warnings,
            Outcome::ScaleRecipe(r) => &r.warnings,
            Outcome::Wedding(r) => &r.warnings,
        }
    }
}

pub fn compute(tables: &ReferenceTables, calculation: &Calculation) -> Result<Outcome, CalcError> {
    log::debug!("compute {:?}", calculation);
    let outcome = match calculation {
        Calculation::Cooldown { game, input } => {
            Outcome::Cooldown(cooldown::calculate_for(&tables.games, game, *input)?)
        }
        Calculation::LineCapacity { reel_size, line } => {
            Outcome::LineCapacity(fishing_line::line_capacity(tables, *reel_size, *line)?)
        }
        Calculation::Backing {
            reel_size,
            main_line,
            main_line_yards,
            backing,
        } => Outcome::Backing(fishing_line::backing_capacity(
            tables,
            *reel_size,
            *main_line,
            *main_line_yards,
            *backing,
        )?),
        Calculation::Pond(input) => Outcome::Pond(pond::calculate(*input)),
        Calculation::Convert(input) => Outcome::Convert(recipe::convert(tables, input)?),
        Calculation::ScaleRecipe {
            original_servings,
            desired_servings,
            items,
        } => Outcome::ScaleRecipe(recipe::scale_recipe(*original_servings, *desired_servings, items)),
        Calculation::Wedding(input) => Outcome::Wedding(wedding::calculate(input)?),
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing_line::LineKind;
    use crate::pond::{LengthUnit, PondShape};
    use crate::recipe::Unit;
    use crate::wedding::{DrinkMix, DrinkingLevel, Prices};

    #[test]
    fn dispatches_each_calculator() {
        let tables = ReferenceTables::load().unwrap();
        let haste = Calculation::Cooldown {
            game: "league-of-legends".into(),
            input: CooldownInput {
                base_cooldown: 10.0,
                stat_value: 100.0,
            },
        };
        match compute(&tables, &haste).unwrap() {
            Outcome::Cooldown(r) => assert!((r.final_cooldown - 5.0).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }

        let pond = Calculation::Pond(PondInput {
            shape: PondShape::Rectangle { length: 10.0, width: 5.0 },
            depth: 2.0,
            unit: LengthUnit::Feet,
        });
        match compute(&tables, &pond).unwrap() {
            Outcome::Pond(r) => assert!((r.us_gallons - 748.0).abs() < 1e-9),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn capacity_error_propagates() {
        let tables = ReferenceTables::load().unwrap();
        let line = LineSpec {
            kind: LineKind::Braid,
            pound_test: 30.0,
        };
        let request = Calculation::Backing {
            reel_size: 1000,
            main_line: line,
            main_line_yards: 10_000.0,
            backing: line,
        };
        assert!(matches!(
            compute(&tables, &request),
            Err(CalcError::ExceedsCapacity { .. })
        ));
    }

    #[test]
    fn same_request_same_outcome() {
        let tables = ReferenceTables::load().unwrap();
        let request = Calculation::Cooldown {
            game: "risk-of-rain-2".into(),
            input: CooldownInput {
                base_cooldown: 6.0,
                stat_value: 7.0,
            },
        };
        assert_eq!(compute(&tables, &request), compute(&tables, &request));
    }

    #[test]
    fn every_calculator_is_idempotent() {
        let tables = ReferenceTables::load().unwrap();
        let mono = LineSpec {
            kind: LineKind::Monofilament,
            pound_test: 10.0,
        };
        let braid = LineSpec {
            kind: LineKind::Braid,
            pound_test: 20.0,
        };
        let requests = vec![
            Calculation::Cooldown {
                game: "world-of-warcraft".into(),
                input: CooldownInput {
                    base_cooldown: 30.0,
                    stat_value: 990.0,
                },
            },
            Calculation::LineCapacity {
                reel_size: 3000,
                line: braid,
            },
            Calculation::Backing {
                reel_size: 3000,
                main_line: braid,
                main_line_yards: 100.0,
                backing: mono,
            },
            Calculation::Pond(PondInput {
                shape: PondShape::Circle { diameter: 8.0 },
                depth: 1.5,
                unit: LengthUnit::Feet,
            }),
            Calculation::Convert(ConversionInput {
                ingredient: "all-purpose-flour".into(),
                amount: 2.0,
                from: Unit::Cup,
                to: Unit::Gram,
            }),
            Calculation::ScaleRecipe {
                original_servings: 4.0,
                desired_servings: 6.0,
                items: vec![RecipeItem {
                    name: "sugar".into(),
                    amount: 0.75,
                    unit: Unit::Cup,
                }],
            },
            Calculation::Wedding(WeddingInput {
                guests: 120.0,
                hours: 6.0,
                level: DrinkingLevel::Heavy,
                mix: DrinkMix::default(),
                champagne_toast: false,
                prices: Prices::default(),
            }),
        ];

        for request in &requests {
            let first = compute(&tables, request).unwrap();
            let second = compute(&tables, request).unwrap();
            assert_eq!(first, second, "{:?}", request);
        }
    }

    #[test]
    fn requests_deserialize_from_tagged_json() {
        let json = r#"{"calculator":"cooldown","game":"smite","base_cooldown":12.0,"stat_value":55.0}"#;
        let request: Calculation = serde_json::from_str(json).unwrap();
        let tables = ReferenceTables::load().unwrap();
        let outcome = compute(&tables, &request).unwrap();
        assert_eq!(outcome.warnings().len(), 1);
    }
}
