//! Cooldown reduction curves for the supported games.
//!
//! Every game maps its stat (Ability Haste, haste rating, item stacks, …) to
//! a reduction percentage through one of the [`Formula`] variants, then the
//! reduction is applied to the ability's base cooldown.

use crate::{CalcError, Warnings};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// Reduction ceiling used when a game has no configured cap.
pub const MAX_REDUCTION_PERCENT: f64 = 100.0;

/// Highest rank accepted by [`Formula::SteppedLevel`].
pub const MAX_STEP_LEVEL: f64 = 5.0;

/// How a game turns its stat value into a reduction percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Formula {
    /// `x / (x + 100)`, League of Legends Ability Haste.
    LinearHaste,
    /// Rating points divided into percent.
    RatingToPercent { divisor: f64 },
    /// The stat already is a percentage.
    CappedPercentage,
    /// Each stack adds `per_stack` to a hyperbolic curve.
    HyperbolicStacking { per_stack: f64 },
    /// Fixed percentage per rank, ranks 1 to 5.
    SteppedLevel { per_level: f64 },
}

impl Formula {
    /// Build a formula from its table discriminator and optional parameter.
    pub fn parse(kind: &str, param: Option<f64>) -> Result<Self, String> {
        let require = |name: &str| -> Result<f64, String> {
            match param {
                Some(p) if p > 0.0 => Ok(p),
                Some(p) => Err(format!("{} parameter must be positive, got {}", name, p)),
                None => Err(format!("{} needs a parameter", name)),
            }
        };
        match kind {
            "linear-haste" => Ok(Formula::LinearHaste),
            "rating-to-percent" => Ok(Formula::RatingToPercent {
                divisor: require(kind)?,
            }),
            "capped-percentage" => Ok(Formula::CappedPercentage),
            "hyperbolic-stacking" => Ok(Formula::HyperbolicStacking {
                per_stack: require(kind)?,
            }),
            "stepped-level" => Ok(Formula::SteppedLevel {
                per_level: require(kind)?,
            }),
            other => Err(format!("unknown formula type '{}'", other)),
        }
    }

    /// Reduction percentage before any cap is applied.
    ///
    /// Non-positive (and NaN) input means no reduction.
    pub fn raw_reduction(&self, x: f64) -> f64 {
        if !(x > 0.0) {
            return 0.0;
        }
        match *self {
            Formula::LinearHaste => x / (x + 100.0) * 100.0,
            Formula::RatingToPercent { divisor } => {
                if divisor > 0.0 {
                    x / divisor
                } else {
                    0.0
                }
            }
            Formula::CappedPercentage => x,
            Formula::HyperbolicStacking { per_stack } => (1.0 - 1.0 / (1.0 + x * per_stack)) * 100.0,
            Formula::SteppedLevel { per_level } => x.floor().clamp(1.0, MAX_STEP_LEVEL) * per_level,
        }
    }
}

/// A game's cooldown configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSystem {
    pub key: String,
    pub name: String,
    pub category: String,
    pub stat_label: String,
    pub formula: Formula,
    pub cap: Option<f64>,
    pub example: String,
}

impl GameSystem {
    pub fn effective_cap(&self) -> f64 {
        self.cap.unwrap_or(MAX_REDUCTION_PERCENT).min(MAX_REDUCTION_PERCENT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CooldownInput {
    /// Ability cooldown in seconds before any reduction.
    pub base_cooldown: f64,
    /// Haste, rating, stacks or rank depending on the game.
    pub stat_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CooldownResult {
    pub reduction_percent: f64,
    pub final_cooldown: f64,
    pub time_saved: f64,
    pub uses_per_minute: f64,
    pub capped: bool,
    pub warnings: Warnings,
}

/// Apply `game`'s curve to `input`.
pub fn calculate(game: &GameSystem, input: CooldownInput) -> CooldownResult {
    let mut warnings = Vec::new();
    let base = if input.base_cooldown > 0.0 {
        input.base_cooldown
    } else {
        if input.base_cooldown < 0.0 {
            warn!("negative base cooldown {} clamped to 0", input.base_cooldown);
            warnings.push("Base cooldown cannot be negative; using 0".to_string());
        }
        0.0
    };

    let raw = game.formula.raw_reduction(input.stat_value);
    let cap = game.effective_cap();
    let capped = raw > cap;
    let reduction_percent = raw.min(cap);
    debug!(
        "{}: stat {} -> raw reduction {:.4}% (cap {}%)",
        game.key, input.stat_value, raw, cap
    );

    if capped {
        warn!("{} reduction {:.2}% exceeds cap {}%", game.key, raw, cap);
        warnings.push(format!(
            "Cooldown reduction is capped at {}% in {}",
            cap, game.name
        ));
    }
    if matches!(game.formula, Formula::SteppedLevel { .. }) && input.stat_value >= MAX_STEP_LEVEL + 1.0 {
        warnings.push(format!(
            "{} above {} is treated as {}",
            game.stat_label, MAX_STEP_LEVEL, MAX_STEP_LEVEL
        ));
    }

    let final_cooldown = base * (1.0 - reduction_percent / 100.0);
    let uses_per_minute = if final_cooldown > 0.0 {
        60.0 / final_cooldown
    } else {
        0.0
    };

    info!(
        "{}: {:.2}s -> {:.2}s ({:.2}% reduction)",
        game.key, base, final_cooldown, reduction_percent
    );

    CooldownResult {
        reduction_percent,
        final_cooldown,
        time_saved: base - final_cooldown,
        uses_per_minute,
        capped,
        warnings,
    }
}

/// Look up `game_key` and apply it.
pub fn calculate_for(
    games: &[GameSystem],
    game_key: &str,
    input: CooldownInput,
) -> Result<CooldownResult, CalcError> {
    let game = games
        .iter()
        .find(|g| g.key == game_key)
        .ok_or_else(|| CalcError::unknown("game", game_key))?;
    Ok(calculate(game, input))
}

/// One row per stat value, for the breakpoint table under the form.
pub fn compare_values(game: &GameSystem, base_cooldown: f64, stat_values: &[f64]) -> Vec<(f64, CooldownResult)> {
    stat_values
        .iter()
        .map(|&stat_value| {
            (
                stat_value,
                calculate(
                    game,
                    CooldownInput {
                        base_cooldown,
                        stat_value,
                    },
                ),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(formula: Formula, cap: Option<f64>) -> GameSystem {
        GameSystem {
            key: "test".into(),
            name: "Test".into(),
            category: "Test".into(),
            stat_label: "Stat".into(),
            formula,
            cap,
            example: String::new(),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn run(g: &GameSystem, base: f64, x: f64) -> CooldownResult {
        calculate(
            g,
            CooldownInput {
                base_cooldown: base,
                stat_value: x,
            },
        )
    }

    #[test]
    fn linear_haste_reference_points() {
        let g = game(Formula::LinearHaste, None);
        assert!(approx(run(&g, 10.0, 100.0).reduction_percent, 50.0));
        assert!(approx(run(&g, 10.0, 100.0).final_cooldown, 5.0));
        assert!(approx(run(&g, 10.0, 200.0).reduction_percent, 200.0 / 3.0));

        let none = run(&g, 10.0, 0.0);
        assert_eq!(none.reduction_percent, 0.0);
        assert_eq!(none.final_cooldown, 10.0);
        assert_eq!(none.time_saved, 0.0);
    }

    #[test]
    fn capped_percentage_clamps_and_warns() {
        let g = game(Formula::CappedPercentage, Some(40.0));
        let r = run(&g, 10.0, 55.0);
        assert_eq!(r.reduction_percent, 40.0);
        assert!(r.capped);
        assert!(r.warnings.iter().any(|w| w.contains("capped at 40%")));

        let below = run(&g, 10.0, 30.0);
        assert_eq!(below.reduction_percent, 30.0);
        assert!(below.warnings.is_empty());
    }

    #[test]
    fn hyperbolic_stacking_reference_points() {
        let g = game(Formula::HyperbolicStacking { per_stack: 0.1 }, Some(90.0));
        assert!(approx(run(&g, 8.0, 10.0).reduction_percent, 50.0));
        assert!(approx(run(&g, 8.0, 20.0).reduction_percent, 200.0 / 3.0));
    }

    #[test]
    fn rating_divides_and_caps() {
        let g = game(Formula::RatingToPercent { divisor: 33.0 }, Some(50.0));
        assert!(approx(run(&g, 10.0, 660.0).reduction_percent, 20.0));
        assert_eq!(run(&g, 10.0, 5000.0).reduction_percent, 50.0);
    }

    #[test]
    fn stepped_level_uses_whole_ranks() {
        let g = game(Formula::SteppedLevel { per_level: 5.0 }, Some(25.0));
        assert_eq!(run(&g, 10.0, 0.5).reduction_percent, 5.0);
        assert_eq!(run(&g, 10.0, 3.9).reduction_percent, 15.0);
        let high = run(&g, 10.0, 9.0);
        assert_eq!(high.reduction_percent, 25.0);
        assert!(!high.warnings.is_empty());
        assert_eq!(run(&g, 10.0, -1.0).reduction_percent, 0.0);
    }

    #[test]
    fn reduction_is_monotonic_and_bounded() {
        let formulas = [
            (Formula::LinearHaste, None),
            (Formula::RatingToPercent { divisor: 2.5 }, Some(60.0)),
            (Formula::CappedPercentage, Some(40.0)),
            (Formula::HyperbolicStacking { per_stack: 0.1 }, Some(90.0)),
            (Formula::SteppedLevel { per_level: 5.0 }, Some(25.0)),
        ];
        for (formula, cap) in formulas {
            let g = game(formula, cap);
            let mut previous = 0.0;
            for step in 0..2000 {
                let x = step as f64 * 0.5;
                let r = run(&g, 12.0, x).reduction_percent;
                assert!(r >= previous, "{:?} decreased at {}", formula, x);
                assert!(r <= g.effective_cap());
                previous = r;
            }
        }
    }

    #[test]
    fn uncapped_rating_never_passes_hundred() {
        let g = game(Formula::RatingToPercent { divisor: 1.0 }, None);
        let r = run(&g, 10.0, 250.0);
        assert_eq!(r.reduction_percent, 100.0);
        assert_eq!(r.final_cooldown, 0.0);
        assert_eq!(r.uses_per_minute, 0.0);
    }

    #[test]
    fn negative_base_is_zeroed() {
        let g = game(Formula::LinearHaste, None);
        let r = run(&g, -4.0, 50.0);
        assert_eq!(r.final_cooldown, 0.0);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn nan_stat_means_no_reduction() {
        let g = game(Formula::LinearHaste, None);
        assert_eq!(run(&g, 10.0, f64::NAN).final_cooldown, 10.0);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let g = game(Formula::HyperbolicStacking { per_stack: 0.1 }, Some(90.0));
        let a = run(&g, 7.3, 13.0);
        let b = run(&g, 7.3, 13.0);
        assert_eq!(a.final_cooldown.to_bits(), b.final_cooldown.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_game_is_an_error() {
        let err = calculate_for(&[], "nope", CooldownInput { base_cooldown: 1.0, stat_value: 1.0 }).unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey { .. }));
    }

    #[test]
    fn compare_values_keeps_order() {
        let g = game(Formula::LinearHaste, None);
        let rows = compare_values(&g, 10.0, &[0.0, 100.0, 300.0]);
        assert_eq!(rows.len(), 3);
        assert!(approx(rows[2].1.final_cooldown, 2.5));
    }

    #[test]
    fn parse_rejects_missing_parameter() {
        assert!(Formula::parse("rating-to-percent", None).is_err());
        assert!(Formula::parse("hyperbolic-stacking", Some(0.0)).is_err());
        assert_eq!(Formula::parse("linear-haste", None), Ok(Formula::LinearHaste));
    }
}
