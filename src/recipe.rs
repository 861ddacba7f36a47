//! Recipe unit conversion and serving scaling.
//!
//! Volume and weight units convert among themselves directly. Crossing
//! between the two goes through the ingredient's density in grams per cup.

use crate::tables::{Ingredient, ReferenceTables};
use crate::{CalcError, Warnings};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ML_PER_CUP: f64 = 236.588;
pub const GRAMS_PER_OUNCE: f64 = 28.3495;
pub const GRAMS_PER_POUND: f64 = 453.592;
/// Display precision for kitchen fractions.
pub const FRACTION_DENOMINATOR: u32 = 8;

static MIXED_FRACTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s+(\d+)\s*/\s*(\d+)$").unwrap());
static FRACTION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s*/\s*(\d+)$").unwrap());
static RECIPE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+\s+\d+\s*/\s*\d+|\d+\s*/\s*\d+|\d*\.?\d+)\s+(.+)$").unwrap());

/// Spellings accepted for each unit in free-text recipe lines.
const UNIT_ALIASES: &[(&str, Unit)] = &[
    ("fluid ounces", Unit::FluidOunce),
    ("fluid ounce", Unit::FluidOunce),
    ("fl oz", Unit::FluidOunce),
    ("tablespoons", Unit::Tablespoon),
    ("tablespoon", Unit::Tablespoon),
    ("tbsp", Unit::Tablespoon),
    ("teaspoons", Unit::Teaspoon),
    ("teaspoon", Unit::Teaspoon),
    ("tsp", Unit::Teaspoon),
    ("cups", Unit::Cup),
    ("cup", Unit::Cup),
    ("milliliters", Unit::Milliliter),
    ("milliliter", Unit::Milliliter),
    ("ml", Unit::Milliliter),
    ("liters", Unit::Liter),
    ("liter", Unit::Liter),
    ("l", Unit::Liter),
    ("kilograms", Unit::Kilogram),
    ("kilogram", Unit::Kilogram),
    ("kg", Unit::Kilogram),
    ("grams", Unit::Gram),
    ("gram", Unit::Gram),
    ("g", Unit::Gram),
    ("ounces", Unit::Ounce),
    ("ounce", Unit::Ounce),
    ("oz", Unit::Ounce),
    ("pounds", Unit::Pound),
    ("pound", Unit::Pound),
    ("lbs", Unit::Pound),
    ("lb", Unit::Pound),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unit {
    Cup,
    Tablespoon,
    Teaspoon,
    FluidOunce,
    Milliliter,
    Liter,
    Gram,
    Kilogram,
    Ounce,
    Pound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Volume,
    Weight,
}

impl Unit {
    pub const ALL: [Unit; 10] = [
        Unit::Cup,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::FluidOunce,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Ounce,
        Unit::Pound,
    ];

    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Cup | Unit::Tablespoon | Unit::Teaspoon | Unit::FluidOunce | Unit::Milliliter | Unit::Liter => {
                Dimension::Volume
            }
            Unit::Gram | Unit::Kilogram | Unit::Ounce | Unit::Pound => Dimension::Weight,
        }
    }

    /// Size of one unit in cups (volume) or grams (weight).
    pub fn base_factor(self) -> f64 {
        match self {
            Unit::Cup => 1.0,
            Unit::Tablespoon => 1.0 / 16.0,
            Unit::Teaspoon => 1.0 / 48.0,
            Unit::FluidOunce => 1.0 / 8.0,
            Unit::Milliliter => 1.0 / ML_PER_CUP,
            Unit::Liter => 1000.0 / ML_PER_CUP,
            Unit::Gram => 1.0,
            Unit::Kilogram => 1000.0,
            Unit::Ounce => GRAMS_PER_OUNCE,
            Unit::Pound => GRAMS_PER_POUND,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Unit::Cup => "cup",
            Unit::Tablespoon => "tablespoon",
            Unit::Teaspoon => "teaspoon",
            Unit::FluidOunce => "fluid-ounce",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Ounce => "ounce",
            Unit::Pound => "pound",
        }
    }

    pub fn from_key(key: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|u| u.key() == key)
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Unit::Cup => "cup",
            Unit::Tablespoon => "tbsp",
            Unit::Teaspoon => "tsp",
            Unit::FluidOunce => "fl oz",
            Unit::Milliliter => "ml",
            Unit::Liter => "L",
            Unit::Gram => "g",
            Unit::Kilogram => "kg",
            Unit::Ounce => "oz",
            Unit::Pound => "lb",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::Cup => "Cups",
            Unit::Tablespoon => "Tablespoons",
            Unit::Teaspoon => "Teaspoons",
            Unit::FluidOunce => "Fluid ounces",
            Unit::Milliliter => "Milliliters",
            Unit::Liter => "Liters",
            Unit::Gram => "Grams",
            Unit::Kilogram => "Kilograms",
            Unit::Ounce => "Ounces",
            Unit::Pound => "Pounds",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    pub ingredient: String,
    pub amount: f64,
    pub from: Unit,
    pub to: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub amount: f64,
    pub unit: Unit,
    /// Density used for a volume/weight crossing, if any.
    pub grams_per_cup: Option<f64>,
    pub warnings: Warnings,
}

/// Convert `amount` of `ingredient` between any two units.
pub fn convert_with(ingredient: &Ingredient, amount: f64, from: Unit, to: Unit) -> ConversionResult {
    let mut warnings = Vec::new();
    let amount = if amount > 0.0 {
        amount
    } else {
        if amount < 0.0 {
            warn!("negative amount {} clamped to 0", amount);
            warnings.push("Amount cannot be negative; using 0".to_string());
        }
        0.0
    };

    let base = amount * from.base_factor();
    let (converted, density) = match (from.dimension(), to.dimension()) {
        (Dimension::Volume, Dimension::Volume) | (Dimension::Weight, Dimension::Weight) => (base, None),
        _ if !(ingredient.grams_per_cup > 0.0) => {
            warn!("{} has no usable density", ingredient.key);
            warnings.push(format!("No density known for {}; amount left unchanged", ingredient.name));
            return ConversionResult {
                amount,
                unit: from,
                grams_per_cup: None,
                warnings,
            };
        }
        // cups -> grams
        (Dimension::Volume, Dimension::Weight) => (base * ingredient.grams_per_cup, Some(ingredient.grams_per_cup)),
        // grams -> cups
        (Dimension::Weight, Dimension::Volume) => (base / ingredient.grams_per_cup, Some(ingredient.grams_per_cup)),
    };
    let result = converted / to.base_factor();
    debug!(
        "{} {} {} -> {} {}",
        amount,
        from.key(),
        ingredient.key,
        result,
        to.key()
    );

    ConversionResult {
        amount: result,
        unit: to,
        grams_per_cup: density,
        warnings,
    }
}

pub fn convert(tables: &ReferenceTables, input: &ConversionInput) -> Result<ConversionResult, CalcError> {
    let ingredient = tables
        .ingredient(&input.ingredient)
        .ok_or_else(|| CalcError::unknown("ingredient", &input.ingredient))?;
    let result = convert_with(ingredient, input.amount, input.from, input.to);
    info!(
        "converted {} {} of {} to {:.3} {}",
        input.amount,
        input.from.abbreviation(),
        ingredient.name,
        result.amount,
        result.unit.abbreviation()
    );
    Ok(result)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeItem {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledRecipe {
    pub factor: f64,
    pub items: Vec<RecipeItem>,
    pub warnings: Warnings,
}

/// Multiply every item by `desired_servings / original_servings`.
pub fn scale_recipe(original_servings: f64, desired_servings: f64, items: &[RecipeItem]) -> ScaledRecipe {
    let mut warnings = Vec::new();
    let factor = if original_servings > 0.0 && desired_servings >= 0.0 {
        desired_servings / original_servings
    } else {
        warn!(
            "cannot scale from {} to {} servings",
            original_servings, desired_servings
        );
        warnings.push("Servings must be greater than zero; recipe left unchanged".to_string());
        1.0
    };

    let items = items
        .iter()
        .map(|item| RecipeItem {
            name: item.name.clone(),
            amount: item.amount * factor,
            unit: item.unit,
        })
        .collect();
    info!("scaled recipe by {:.3}", factor);

    ScaledRecipe { factor, items, warnings }
}

/// Parse kitchen amounts: `2`, `2.5`, `3/4`, `1 1/2`.
pub fn parse_amount(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Amount cannot be empty".to_string());
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("'{}' is not a usable amount", trimmed))
        };
    }

    let fraction = |num: &str, den: &str| -> Result<f64, String> {
        let num: f64 = num.parse().map_err(|_| "Invalid numerator".to_string())?;
        let den: f64 = den.parse().map_err(|_| "Invalid denominator".to_string())?;
        if den == 0.0 {
            return Err("Denominator cannot be zero".to_string());
        }
        Ok(num / den)
    };

    if let Some(captures) = MIXED_FRACTION_REGEX.captures(trimmed) {
        let whole: f64 = captures[1].parse().map_err(|_| "Invalid whole number".to_string())?;
        return Ok(whole + fraction(&captures[2], &captures[3])?);
    }
    if let Some(captures) = FRACTION_REGEX.captures(trimmed) {
        return fraction(&captures[1], &captures[2]);
    }

    Err("Use a number like 2, 2.5, 3/4 or 1 1/2".to_string())
}

/// Parse a recipe line such as `2 1/4 cups flour` or `3 tbsp butter`.
pub fn parse_recipe_line(line: &str) -> Result<RecipeItem, String> {
    let trimmed = line.trim();
    let captures = RECIPE_LINE_REGEX
        .captures(trimmed)
        .ok_or_else(|| format!("'{}' should look like '1 1/2 cups flour'", trimmed))?;
    let amount = parse_amount(&captures[1])?;
    let rest = captures[2].trim();

    // aliases are ordered longest first within each unit, so "fl oz" wins over "oz"
    let (unit, name) = UNIT_ALIASES
        .iter()
        .find_map(|&(alias, unit)| {
            rest.get(..alias.len()).filter(|prefix| prefix.eq_ignore_ascii_case(alias))?;
            let tail = rest.get(alias.len()..)?;
            if tail.is_empty() || tail.starts_with(char::is_whitespace) {
                Some((unit, tail.trim()))
            } else {
                None
            }
        })
        .ok_or_else(|| format!("No known unit in '{}'", trimmed))?;
    if name.is_empty() {
        return Err(format!("'{}' is missing an ingredient name", trimmed));
    }

    Ok(RecipeItem {
        name: name.to_string(),
        amount,
        unit,
    })
}

/// Parse every non-blank line, stopping at the first bad one.
pub fn parse_recipe(text: &str) -> Result<Vec<RecipeItem>, String> {
    text.lines()
        .filter(|l| !l.trim().is_empty())
        .map(parse_recipe_line)
        .collect()
}

/// Render an amount to the nearest eighth, e.g. `1 1/2`, or with two decimals
/// when it is not close to an eighth.
pub fn format_amount(value: f64) -> String {
    let den = FRACTION_DENOMINATOR as f64;
    let eighths = (value * den).round();
    if (value * den - eighths).abs() > 0.05 {
        return format!("{:.2}", value);
    }
    let eighths = eighths as u64;
    let whole = eighths / FRACTION_DENOMINATOR as u64;
    let rem = eighths % FRACTION_DENOMINATOR as u64;
    if rem == 0 {
        return whole.to_string();
    }
    let g = gcd(rem, FRACTION_DENOMINATOR as u64);
    let frac = format!("{}/{}", rem / g, FRACTION_DENOMINATOR as u64 / g);
    if whole == 0 {
        frac
    } else {
        format!("{} {}", whole, frac)
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flour() -> Ingredient {
        Ingredient {
            key: "all-purpose-flour".into(),
            name: "All-purpose flour".into(),
            category: "Flours".into(),
            grams_per_cup: 125.0,
        }
    }

    #[test]
    fn flour_round_trip() {
        let grams = convert_with(&flour(), 1.0, Unit::Cup, Unit::Gram);
        assert_eq!(grams.amount, 125.0);
        assert_eq!(grams.grams_per_cup, Some(125.0));
        let cups = convert_with(&flour(), grams.amount, Unit::Gram, Unit::Cup);
        assert!((cups.amount - 1.0).abs() < 1e-9);
    }

    #[test]
    fn volume_to_volume_ignores_density() {
        let r = convert_with(&flour(), 1.0, Unit::Cup, Unit::Tablespoon);
        assert!((r.amount - 16.0).abs() < 1e-9);
        assert_eq!(r.grams_per_cup, None);
        let r = convert_with(&flour(), 1.0, Unit::Pound, Unit::Ounce);
        assert!((r.amount - GRAMS_PER_POUND / GRAMS_PER_OUNCE).abs() < 1e-9);
    }

    #[test]
    fn zero_density_leaves_amount_unchanged() {
        let mut odd = flour();
        odd.grams_per_cup = 0.0;
        let r = convert_with(&odd, 2.0, Unit::Cup, Unit::Gram);
        assert_eq!(r.amount, 2.0);
        assert_eq!(r.unit, Unit::Cup);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn negative_amount_is_clamped_with_warning() {
        let r = convert_with(&flour(), -2.0, Unit::Cup, Unit::Gram);
        assert_eq!(r.amount, 0.0);
        assert_eq!(r.warnings.len(), 1);
    }

    #[test]
    fn unknown_ingredient_is_an_error() {
        let tables = ReferenceTables::load().unwrap();
        let input = ConversionInput {
            ingredient: "unobtainium".into(),
            amount: 1.0,
            from: Unit::Cup,
            to: Unit::Gram,
        };
        assert!(matches!(convert(&tables, &input), Err(CalcError::UnknownKey { .. })));
    }

    #[test]
    fn doubling_servings_doubles_amounts() {
        let items = vec![
            RecipeItem {
                name: "Flour".into(),
                amount: 2.25,
                unit: Unit::Cup,
            },
            RecipeItem {
                name: "Salt".into(),
                amount: 0.5,
                unit: Unit::Teaspoon,
            },
        ];
        let scaled = scale_recipe(4.0, 8.0, &items);
        assert_eq!(scaled.factor, 2.0);
        assert_eq!(scaled.items[0].amount, 4.5);
        assert_eq!(scaled.items[1].amount, 1.0);
        assert!(scaled.warnings.is_empty());
    }

    #[test]
    fn zero_original_servings_keeps_recipe() {
        let items = vec![RecipeItem {
            name: "Milk".into(),
            amount: 1.0,
            unit: Unit::Cup,
        }];
        let scaled = scale_recipe(0.0, 6.0, &items);
        assert_eq!(scaled.factor, 1.0);
        assert_eq!(scaled.items[0].amount, 1.0);
        assert_eq!(scaled.warnings.len(), 1);
    }

    #[test]
    fn parses_kitchen_amounts() {
        assert_eq!(parse_amount("2"), Ok(2.0));
        assert_eq!(parse_amount(" 2.5 "), Ok(2.5));
        assert_eq!(parse_amount("3/4"), Ok(0.75));
        assert_eq!(parse_amount("1 1/2"), Ok(1.5));
        assert!(parse_amount("1/0").is_err());
        assert!(parse_amount("a pinch").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn parses_recipe_lines() {
        let item = parse_recipe_line("2 1/4 cups all-purpose flour").unwrap();
        assert_eq!(item.amount, 2.25);
        assert_eq!(item.unit, Unit::Cup);
        assert_eq!(item.name, "all-purpose flour");

        let item = parse_recipe_line("4 fl oz Milk").unwrap();
        assert_eq!(item.unit, Unit::FluidOunce);
        assert_eq!(item.name, "Milk");

        let item = parse_recipe_line("1 lb ground beef").unwrap();
        assert_eq!(item.unit, Unit::Pound);

        assert!(parse_recipe_line("a handful of nuts").is_err());
        assert!(parse_recipe_line("2 cups").is_err());
        assert!(parse_recipe_line("2 handfuls nuts").is_err());
    }

    #[test]
    fn non_ascii_unit_prefix_is_rejected_cleanly() {
        // KELVIN SIGN lowercases to ascii 'k' but is three bytes wide
        assert!(parse_recipe_line("2 \u{212A}g flour").is_err());
        assert!(parse_recipe_line("1 \u{00E9}clair cream").is_err());

        let item = parse_recipe_line("2 KG flour").unwrap();
        assert_eq!(item.unit, Unit::Kilogram);
        assert_eq!(item.name, "flour");
    }

    #[test]
    fn singular_metric_units_are_recognized() {
        let item = parse_recipe_line("1 kilogram flour").unwrap();
        assert_eq!(item.unit, Unit::Kilogram);
        assert_eq!(item.name, "flour");

        let item = parse_recipe_line("1 milliliter vanilla").unwrap();
        assert_eq!(item.unit, Unit::Milliliter);
        assert_eq!(item.name, "vanilla");
    }

    #[test]
    fn parse_recipe_skips_blank_lines() {
        let items = parse_recipe("1 cup sugar\n\n  \n3/4 tsp salt\n").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].amount, 0.75);
    }

    #[test]
    fn formats_to_nearest_eighth() {
        assert_eq!(format_amount(1.5), "1 1/2");
        assert_eq!(format_amount(0.25), "1/4");
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(0.375), "3/8");
        assert_eq!(format_amount(1.3), "1.30");
    }
}
