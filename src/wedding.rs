//! Wedding bar estimate: how many bottles and cases to buy.

use crate::{CalcError, Warnings};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const GLASSES_PER_WINE_BOTTLE: f64 = 5.0;
pub const BEERS_PER_CASE: f64 = 24.0;
/// 1.5 oz pours from a 750 ml bottle.
pub const POURS_PER_LIQUOR_BOTTLE: f64 = 16.0;
pub const TOASTS_PER_CHAMPAGNE_BOTTLE: f64 = 8.0;
/// Receptions longer than this are unusual enough to flag.
pub const LONG_EVENT_HOURS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrinkingLevel {
    Light,
    Moderate,
    Heavy,
}

impl DrinkingLevel {
    pub const ALL: [DrinkingLevel; 3] = [DrinkingLevel::Light, DrinkingLevel::Moderate, DrinkingLevel::Heavy];

    /// Drinks per guest per hour.
    pub fn rate(self) -> f64 {
        match self {
            DrinkingLevel::Light => 0.75,
            DrinkingLevel::Moderate => 1.0,
            DrinkingLevel::Heavy => 1.5,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DrinkingLevel::Light => "light",
            DrinkingLevel::Moderate => "moderate",
            DrinkingLevel::Heavy => "heavy",
        }
    }
}

/// Percentages of drinks served as beer, wine and liquor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrinkMix {
    pub beer: f64,
    pub wine: f64,
    pub liquor: f64,
}

impl Default for DrinkMix {
    fn default() -> Self {
        DrinkMix {
            beer: 30.0,
            wine: 50.0,
            liquor: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    pub wine_bottle: f64,
    pub beer_case: f64,
    pub liquor_bottle: f64,
    pub champagne_bottle: f64,
}

impl Default for Prices {
    fn default() -> Self {
        Prices {
            wine_bottle: 15.0,
            beer_case: 30.0,
            liquor_bottle: 25.0,
            champagne_bottle: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeddingInput {
    pub guests: f64,
    pub hours: f64,
    pub level: DrinkingLevel,
    pub mix: DrinkMix,
    pub champagne_toast: bool,
    pub prices: Prices,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub wine: f64,
    pub beer: f64,
    pub liquor: f64,
    pub champagne: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingResult {
    pub total_drinks: f64,
    pub wine_drinks: f64,
    pub beer_drinks: f64,
    pub liquor_drinks: f64,
    pub wine_bottles: u32,
    pub beer_cases: u32,
    pub liquor_bottles: u32,
    pub champagne_bottles: u32,
    pub cost: CostBreakdown,
    pub warnings: Warnings,
}

fn units_needed(drinks: f64, per_unit: f64) -> u32 {
    (drinks / per_unit).ceil() as u32
}

pub fn calculate(input: &WeddingInput) -> Result<WeddingResult, CalcError> {
    let mix = input.mix;
    if mix.beer < 0.0 || mix.wine < 0.0 || mix.liquor < 0.0 {
        return Err(CalcError::invalid("drink mix", "percentages cannot be negative"));
    }
    let mix_total = mix.beer + mix.wine + mix.liquor;
    if !(mix_total > 0.0) {
        return Err(CalcError::invalid("drink mix", "at least one drink type needs a share"));
    }

    let mut warnings = Vec::new();
    if (mix_total - 100.0).abs() > 0.01 {
        warn!("drink mix sums to {}%, normalizing", mix_total);
        warnings.push(format!(
            "Drink mix adds up to {}%; shares were scaled to 100%",
            mix_total
        ));
    }

    let guests = input.guests.floor();
    if !(guests > 0.0) || !(input.hours > 0.0) {
        warn!("no drinks for {} guests over {} h", input.guests, input.hours);
        warnings.push("Guests must be at least 1 and hours greater than zero".to_string());
        return Ok(WeddingResult {
            total_drinks: 0.0,
            wine_drinks: 0.0,
            beer_drinks: 0.0,
            liquor_drinks: 0.0,
            wine_bottles: 0,
            beer_cases: 0,
            liquor_bottles: 0,
            champagne_bottles: 0,
            cost: CostBreakdown::default(),
            warnings,
        });
    }
    if input.hours > LONG_EVENT_HOURS {
        warnings.push(format!(
            "Receptions longer than {} hours usually slow down; consider a lighter estimate",
            LONG_EVENT_HOURS
        ));
    }

    let total_drinks = guests * input.hours * input.level.rate();
    let beer_drinks = total_drinks * mix.beer / mix_total;
    let wine_drinks = total_drinks * mix.wine / mix_total;
    let liquor_drinks = total_drinks * mix.liquor / mix_total;
    debug!(
        "{} guests x {} h x {} -> {} drinks",
        guests,
        input.hours,
        input.level.key(),
        total_drinks
    );

    let wine_bottles = units_needed(wine_drinks, GLASSES_PER_WINE_BOTTLE);
    let beer_cases = units_needed(beer_drinks, BEERS_PER_CASE);
    let liquor_bottles = units_needed(liquor_drinks, POURS_PER_LIQUOR_BOTTLE);
    let champagne_bottles = if input.champagne_toast {
        units_needed(guests, TOASTS_PER_CHAMPAGNE_BOTTLE)
    } else {
        0
    };

    let p = input.prices;
    let wine = wine_bottles as f64 * p.wine_bottle.max(0.0);
    let beer = beer_cases as f64 * p.beer_case.max(0.0);
    let liquor = liquor_bottles as f64 * p.liquor_bottle.max(0.0);
    let champagne = champagne_bottles as f64 * p.champagne_bottle.max(0.0);
    let cost = CostBreakdown {
        wine,
        beer,
        liquor,
        champagne,
        total: wine + beer + liquor + champagne,
    };
    info!(
        "bar estimate: {} wine, {} beer cases, {} liquor, {} champagne, ${:.2}",
        wine_bottles, beer_cases, liquor_bottles, champagne_bottles, cost.total
    );

    Ok(WeddingResult {
        total_drinks,
        wine_drinks,
        beer_drinks,
        liquor_drinks,
        wine_bottles,
        beer_cases,
        liquor_bottles,
        champagne_bottles,
        cost,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> WeddingInput {
        WeddingInput {
            guests: 100.0,
            hours: 5.0,
            level: DrinkingLevel::Moderate,
            mix: DrinkMix::default(),
            champagne_toast: true,
            prices: Prices::default(),
        }
    }

    #[test]
    fn hundred_guests_five_hours() {
        let r = calculate(&input()).unwrap();
        assert_eq!(r.total_drinks, 500.0);
        assert_eq!(r.wine_drinks, 250.0);
        assert_eq!(r.wine_bottles, 50);
        // 150 beers -> 6.25 cases
        assert_eq!(r.beer_cases, 7);
        // 100 pours -> 6.25 bottles
        assert_eq!(r.liquor_bottles, 7);
        assert_eq!(r.champagne_bottles, 13);
        assert_eq!(r.cost.total, 50.0 * 15.0 + 7.0 * 30.0 + 7.0 * 25.0 + 13.0 * 20.0);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn mix_is_normalized() {
        let mut i = input();
        i.mix = DrinkMix {
            beer: 1.0,
            wine: 1.0,
            liquor: 0.0,
        };
        let r = calculate(&i).unwrap();
        assert_eq!(r.beer_drinks, 250.0);
        assert_eq!(r.liquor_bottles, 0);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn empty_mix_is_an_error() {
        let mut i = input();
        i.mix = DrinkMix {
            beer: 0.0,
            wine: 0.0,
            liquor: 0.0,
        };
        assert!(matches!(calculate(&i), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn no_guests_means_nothing_to_buy() {
        let mut i = input();
        i.guests = 0.0;
        let r = calculate(&i).unwrap();
        assert_eq!(r.cost.total, 0.0);
        assert_eq!(r.wine_bottles, 0);
    }

    #[test]
    fn fractional_guest_below_one_warns() {
        let mut i = input();
        i.guests = 0.5;
        let r = calculate(&i).unwrap();
        assert_eq!(r.total_drinks, 0.0);
        assert_eq!(r.champagne_bottles, 0);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn heavier_drinking_needs_more() {
        let light = calculate(&WeddingInput {
            level: DrinkingLevel::Light,
            ..input()
        })
        .unwrap();
        let heavy = calculate(&WeddingInput {
            level: DrinkingLevel::Heavy,
            ..input()
        })
        .unwrap();
        assert!(heavy.total_drinks > light.total_drinks);
        assert!(heavy.cost.total > light.cost.total);
    }
}
