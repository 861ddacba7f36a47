//! Form defaults and input limits for the calculator widgets.

// Cooldown
pub const DEFAULT_GAME: &str = "league-of-legends";
pub const DEFAULT_BASE_COOLDOWN: f64 = 10.0;
pub const DEFAULT_STAT_VALUE: f64 = 100.0;
/// Stat values shown in the breakpoint table, as multiples of the entered value.
pub const BREAKPOINT_MULTIPLIERS: [f64; 5] = [0.25, 0.5, 1.0, 1.5, 2.0];

// Fishing line
pub const DEFAULT_REEL_SIZE: u32 = 3000;
pub const DEFAULT_POUND_TEST: f64 = 10.0;
pub const DEFAULT_BACKING_POUND_TEST: f64 = 20.0;
pub const DEFAULT_MAIN_LINE_YARDS: f64 = 100.0;

// Pond
pub const DEFAULT_POND_LENGTH: f64 = 10.0;
pub const DEFAULT_POND_WIDTH: f64 = 5.0;
pub const DEFAULT_POND_DEPTH: f64 = 2.0;

// Recipe
pub const DEFAULT_INGREDIENT: &str = "all-purpose-flour";
pub const DEFAULT_AMOUNT: f64 = 1.0;
pub const DEFAULT_ORIGINAL_SERVINGS: f64 = 4.0;
pub const DEFAULT_DESIRED_SERVINGS: f64 = 8.0;
pub const MAX_RECIPE_ITEMS: usize = 12;

// Wedding
pub const DEFAULT_GUESTS: f64 = 100.0;
pub const DEFAULT_HOURS: f64 = 5.0;
pub const MAX_GUESTS: f64 = 2000.0;
pub const MAX_HOURS: f64 = 24.0;
