//! Calculator widgets web app using Yew.
//! Loads the reference tables once and wires each calculator form to the
//! formula engine.

use calculator_widgets::cooldown::{compare_values, CooldownInput, CooldownResult};
use calculator_widgets::fishing_line::{LineKind, LineSpec};
use calculator_widgets::pond::{LengthUnit, PondInput, PondShape};
use calculator_widgets::recipe::{parse_amount, parse_recipe, ConversionInput, Unit};
use calculator_widgets::wedding::{DrinkMix, DrinkingLevel, Prices, WeddingInput};
use calculator_widgets::{compute, CalcError, Calculation, Outcome, ReferenceTables};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::*;
use config::*;
use hooks::{use_form_field, use_select};
use utils::validate_numeric_input;

type CalcState = UseStateHandle<Option<Result<Outcome, CalcError>>>;

#[derive(Properties, PartialEq)]
struct TablesProps {
    tables: Rc<ReferenceTables>,
}

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Cooldown,
    FishingLine,
    Pond,
    Recipe,
    Wedding,
}

impl Tab {
    const ALL: [Tab; 5] = [Tab::Cooldown, Tab::FishingLine, Tab::Pond, Tab::Recipe, Tab::Wedding];

    fn title(self) -> &'static str {
        match self {
            Tab::Cooldown => "Cooldown Reduction",
            Tab::FishingLine => "Fishing Line Capacity",
            Tab::Pond => "Pond Volume",
            Tab::Recipe => "Recipe Converter",
            Tab::Wedding => "Wedding Alcohol",
        }
    }
}

/// Run `calculation` and replace whatever result was shown before.
fn calculate_into(state: &CalcState, tables: &ReferenceTables, calculation: Calculation) {
    state.set(Some(compute(tables, &calculation)));
}

// ──────────────────────────────────────────────────────────────────────────────

#[function_component(CooldownCalculator)]
fn cooldown_calculator(props: &TablesProps) -> Html {
    let tables = props.tables.clone();
    let (game_key, on_game_change) = use_select(DEFAULT_GAME.to_string());
    let base = use_form_field(DEFAULT_BASE_COOLDOWN.to_string());
    let stat = use_form_field(DEFAULT_STAT_VALUE.to_string());
    let result: CalcState = use_state(|| None);
    let breakpoints = use_state(Vec::<(f64, CooldownResult)>::new);

    let game = tables.game(&game_key).or_else(|| tables.games.first()).cloned();
    let Some(game) = game else {
        return html! { <p class="no-results-message">{ "No games configured" }</p> };
    };

    let on_calculate = {
        let tables = tables.clone();
        let game = game.clone();
        let (base, stat) = (base.clone(), stat.clone());
        let result = result.clone();
        let breakpoints = breakpoints.clone();
        Callback::from(move |_: MouseEvent| {
            let input = CooldownInput {
                base_cooldown: base.number(),
                stat_value: stat.number(),
            };
            calculate_into(
                &result,
                &tables,
                Calculation::Cooldown {
                    game: game.key.clone(),
                    input,
                },
            );
            let values: Vec<f64> = if input.stat_value > 0.0 {
                BREAKPOINT_MULTIPLIERS.iter().map(|m| (input.stat_value * m).round()).collect()
            } else {
                Vec::new()
            };
            breakpoints.set(compare_values(&game, input.base_cooldown, &values));
        })
    };

    let on_reset = {
        let (base, stat) = (base.clone(), stat.clone());
        let game_key = game_key.clone();
        let result = result.clone();
        let breakpoints = breakpoints.clone();
        Callback::from(move |_: MouseEvent| {
            game_key.set(DEFAULT_GAME.to_string());
            base.reset_to(DEFAULT_BASE_COOLDOWN);
            stat.reset_to(DEFAULT_STAT_VALUE);
            result.set(None);
            breakpoints.set(Vec::new());
        })
    };

    let game_options = tables
        .games
        .iter()
        .map(|g| (g.key.clone(), format!("{} ({})", g.name, g.category)))
        .collect::<Vec<_>>();

    html! {
        <section class="calculator">
            <div class="form-row">
                <SelectInput id="game" label="Game" options={game_options}
                    selected={game.key.clone()} onchange={on_game_change} />
                <NumberInput id="base_cooldown" label="Base cooldown" field={base} suffix={Some(AttrValue::from("s"))} />
                <NumberInput id="stat_value" label={game.stat_label.clone()} field={stat} />
            </div>
            <FormActions {on_calculate} {on_reset} />
            <div class="results-area">
                { match &*result {
                    Some(Ok(Outcome::Cooldown(r))) => render_cooldown(&game, r),
                    Some(Err(e)) => render_error(e),
                    _ => html! {},
                } }
                if !breakpoints.is_empty() {
                    { render_breakpoints(&game, &breakpoints) }
                }
            </div>
        </section>
    }
}

#[function_component(FishingLineCalculator)]
fn fishing_line_calculator(props: &TablesProps) -> Html {
    let tables = props.tables.clone();
    let (mode, on_mode_change) = use_select("capacity".to_string());
    let (reel, on_reel_change) = use_select(DEFAULT_REEL_SIZE.to_string());
    let (kind, on_kind_change) = use_select(LineKind::Monofilament.key().to_string());
    let (backing_kind, on_backing_kind_change) = use_select(LineKind::Braid.key().to_string());
    let pound_test = use_form_field(DEFAULT_POUND_TEST.to_string());
    let main_yards = use_form_field(DEFAULT_MAIN_LINE_YARDS.to_string());
    let backing_test = use_form_field(DEFAULT_BACKING_POUND_TEST.to_string());
    let result: CalcState = use_state(|| None);

    let line_kind = kind.parse::<LineKind>().unwrap_or(LineKind::Monofilament);
    let backing_line_kind = backing_kind.parse::<LineKind>().unwrap_or(LineKind::Braid);
    let is_backing = *mode == "backing";

    let on_calculate = {
        let tables = tables.clone();
        let reel = reel.clone();
        let (pound_test, main_yards, backing_test) = (pound_test.clone(), main_yards.clone(), backing_test.clone());
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let reel_size = reel.parse::<u32>().unwrap_or(DEFAULT_REEL_SIZE);
            let line = LineSpec {
                kind: line_kind,
                pound_test: pound_test.number(),
            };
            let calculation = if is_backing {
                Calculation::Backing {
                    reel_size,
                    main_line: line,
                    main_line_yards: main_yards.number(),
                    backing: LineSpec {
                        kind: backing_line_kind,
                        pound_test: backing_test.number(),
                    },
                }
            } else {
                Calculation::LineCapacity { reel_size, line }
            };
            calculate_into(&result, &tables, calculation);
        })
    };

    let on_reset = {
        let (mode, reel, kind, backing_kind) = (mode.clone(), reel.clone(), kind.clone(), backing_kind.clone());
        let (pound_test, main_yards, backing_test) = (pound_test.clone(), main_yards.clone(), backing_test.clone());
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set("capacity".to_string());
            reel.set(DEFAULT_REEL_SIZE.to_string());
            kind.set(LineKind::Monofilament.key().to_string());
            backing_kind.set(LineKind::Braid.key().to_string());
            pound_test.reset_to(DEFAULT_POUND_TEST);
            main_yards.reset_to(DEFAULT_MAIN_LINE_YARDS);
            backing_test.reset_to(DEFAULT_BACKING_POUND_TEST);
            result.set(None);
        })
    };

    let reel_options = tables
        .reels
        .iter()
        .map(|r| {
            (
                r.size.to_string(),
                format!("{} ({} yd of {} lb mono)", r.size, r.reference_yards, r.reference_pound_test),
            )
        })
        .collect::<Vec<_>>();
    let mode_options = vec![
        ("capacity".to_string(), "Line capacity".to_string()),
        ("backing".to_string(), "Backing under main line".to_string()),
    ];

    html! {
        <section class="calculator">
            <div class="form-row">
                <SelectInput id="line_mode" label="Calculate" options={mode_options}
                    selected={(*mode).clone()} onchange={on_mode_change} />
                <SelectInput id="reel_size" label="Reel size" options={reel_options}
                    selected={(*reel).clone()} onchange={on_reel_change} />
            </div>
            <div class="form-row">
                <SelectInput id="line_kind" label="Line type" options={line_kind_options()}
                    selected={(*kind).clone()} onchange={on_kind_change} />
                <NumberInput id="pound_test" label="Pound test" field={pound_test} suffix={Some(AttrValue::from("lb"))} />
                if is_backing {
                    <NumberInput id="main_yards" label="Main line length" field={main_yards} suffix={Some(AttrValue::from("yd"))} />
                }
            </div>
            if is_backing {
                <div class="form-row">
                    <SelectInput id="backing_kind" label="Backing type" options={line_kind_options()}
                        selected={(*backing_kind).clone()} onchange={on_backing_kind_change} />
                    <NumberInput id="backing_test" label="Backing pound test" field={backing_test} suffix={Some(AttrValue::from("lb"))} />
                </div>
            }
            <FormActions {on_calculate} {on_reset} />
            <div class="results-area">
                { match &*result {
                    Some(Ok(Outcome::LineCapacity(r))) => render_capacity(&line_kind.to_string(), r),
                    Some(Ok(Outcome::Backing(r))) => render_backing(r),
                    Some(Err(e)) => render_error(e),
                    _ => html! {},
                } }
                { render_line_chart(&tables.line_diameters, line_kind) }
            </div>
        </section>
    }
}

#[function_component(PondCalculator)]
fn pond_calculator(props: &TablesProps) -> Html {
    let (shape, on_shape_change) = use_select("rectangle".to_string());
    let (unit, on_unit_change) = use_select("feet".to_string());
    let length = use_form_field(DEFAULT_POND_LENGTH.to_string());
    let width = use_form_field(DEFAULT_POND_WIDTH.to_string());
    let depth = use_form_field(DEFAULT_POND_DEPTH.to_string());
    let result: CalcState = use_state(|| None);

    let length_unit = if *unit == "meters" { LengthUnit::Meters } else { LengthUnit::Feet };
    let is_circle = *shape == "circle";

    let on_calculate = {
        let tables = props.tables.clone();
        let shape = shape.clone();
        let (length, width, depth) = (length.clone(), width.clone(), depth.clone());
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let (l, w) = (length.number(), width.number());
            let pond_shape = match shape.as_str() {
                "circle" => PondShape::Circle { diameter: l },
                "oval" => PondShape::Oval { length: l, width: w },
                "irregular" => PondShape::Irregular { length: l, width: w },
                _ => PondShape::Rectangle { length: l, width: w },
            };
            let input = PondInput {
                shape: pond_shape,
                depth: depth.number(),
                unit: length_unit,
            };
            calculate_into(&result, &tables, Calculation::Pond(input));
        })
    };

    let on_reset = {
        let (shape, unit) = (shape.clone(), unit.clone());
        let (length, width, depth) = (length.clone(), width.clone(), depth.clone());
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            shape.set("rectangle".to_string());
            unit.set("feet".to_string());
            length.reset_to(DEFAULT_POND_LENGTH);
            width.reset_to(DEFAULT_POND_WIDTH);
            depth.reset_to(DEFAULT_POND_DEPTH);
            result.set(None);
        })
    };

    let shape_options = ["rectangle", "circle", "oval", "irregular"]
        .iter()
        .map(|s| {
            let mut label = s.to_string();
            label[..1].make_ascii_uppercase();
            (s.to_string(), label)
        })
        .collect::<Vec<_>>();
    let unit_options = vec![
        ("feet".to_string(), "Feet".to_string()),
        ("meters".to_string(), "Meters".to_string()),
    ];
    let suffix = Some(AttrValue::from(if length_unit == LengthUnit::Meters { "m" } else { "ft" }));

    html! {
        <section class="calculator">
            <div class="form-row">
                <SelectInput id="pond_shape" label="Shape" options={shape_options}
                    selected={(*shape).clone()} onchange={on_shape_change} />
                <SelectInput id="pond_unit" label="Units" options={unit_options}
                    selected={(*unit).clone()} onchange={on_unit_change} />
            </div>
            <div class="form-row">
                <NumberInput id="pond_length" label={if is_circle { "Diameter" } else { "Length" }}
                    field={length} suffix={suffix.clone()} />
                if !is_circle {
                    <NumberInput id="pond_width" label="Width" field={width} suffix={suffix.clone()} />
                }
                <NumberInput id="pond_depth" label="Average depth" field={depth} suffix={suffix} />
            </div>
            <FormActions {on_calculate} {on_reset} />
            <div class="results-area">
                { match &*result {
                    Some(Ok(Outcome::Pond(r))) => render_pond(r, length_unit),
                    Some(Err(e)) => render_error(e),
                    _ => html! {},
                } }
            </div>
        </section>
    }
}

#[function_component(RecipeCalculator)]
fn recipe_calculator(props: &TablesProps) -> Html {
    let tables = props.tables.clone();
    let (mode, on_mode_change) = use_select("convert".to_string());
    let (ingredient, on_ingredient_change) = use_select(DEFAULT_INGREDIENT.to_string());
    let (from, on_from_change) = use_select(Unit::Cup.key().to_string());
    let (to, on_to_change) = use_select(Unit::Gram.key().to_string());
    let amount = use_form_field(DEFAULT_AMOUNT.to_string());
    let original = use_form_field(DEFAULT_ORIGINAL_SERVINGS.to_string());
    let desired = use_form_field(DEFAULT_DESIRED_SERVINGS.to_string());
    let recipe_text = use_state(String::new);
    let input_error = use_state(|| None::<String>);
    let result: CalcState = use_state(|| None);

    let is_scale = *mode == "scale";
    let from_unit = Unit::from_key(&from).unwrap_or(Unit::Cup);
    let to_unit = Unit::from_key(&to).unwrap_or(Unit::Gram);

    let on_recipe_input = {
        let recipe_text = recipe_text.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            recipe_text.set(area.value());
        })
    };

    let on_calculate = {
        let tables = tables.clone();
        let ingredient = ingredient.clone();
        let (amount, original, desired) = (amount.clone(), original.clone(), desired.clone());
        let recipe_text = recipe_text.clone();
        let input_error = input_error.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let calculation = if is_scale {
                match parse_recipe(&recipe_text) {
                    Ok(items) if items.len() > MAX_RECIPE_ITEMS => {
                        input_error.set(Some(format!("Enter at most {} ingredients", MAX_RECIPE_ITEMS)));
                        return;
                    }
                    Ok(items) => Calculation::ScaleRecipe {
                        original_servings: original.number(),
                        desired_servings: desired.number(),
                        items,
                    },
                    Err(err) => {
                        input_error.set(Some(err));
                        return;
                    }
                }
            } else {
                let value = parse_amount(&amount.text).unwrap_or(0.0);
                Calculation::Convert(ConversionInput {
                    ingredient: (*ingredient).clone(),
                    amount: value,
                    from: from_unit,
                    to: to_unit,
                })
            };
            input_error.set(None);
            calculate_into(&result, &tables, calculation);
        })
    };

    let on_reset = {
        let (mode, ingredient, from, to) = (mode.clone(), ingredient.clone(), from.clone(), to.clone());
        let (amount, original, desired) = (amount.clone(), original.clone(), desired.clone());
        let recipe_text = recipe_text.clone();
        let input_error = input_error.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set("convert".to_string());
            ingredient.set(DEFAULT_INGREDIENT.to_string());
            from.set(Unit::Cup.key().to_string());
            to.set(Unit::Gram.key().to_string());
            amount.reset_to(DEFAULT_AMOUNT);
            original.reset_to(DEFAULT_ORIGINAL_SERVINGS);
            desired.reset_to(DEFAULT_DESIRED_SERVINGS);
            recipe_text.set(String::new());
            input_error.set(None);
            result.set(None);
        })
    };

    let mode_options = vec![
        ("convert".to_string(), "Convert an ingredient".to_string()),
        ("scale".to_string(), "Scale a recipe".to_string()),
    ];
    let ingredient_options = tables
        .ingredients
        .iter()
        .map(|i| (i.key.clone(), i.name.clone()))
        .collect::<Vec<_>>();
    let amount_value = parse_amount(&amount.text).unwrap_or(0.0);
    let selected_ingredient = tables.ingredient(&ingredient).cloned();

    html! {
        <section class="calculator">
            <SelectInput id="recipe_mode" label="Mode" options={mode_options}
                selected={(*mode).clone()} onchange={on_mode_change} />
            if is_scale {
                <div class="form-row">
                    <NumberInput id="original_servings" label="Original servings" field={original} />
                    <NumberInput id="desired_servings" label="Desired servings" field={desired} />
                </div>
                <div class="form-group">
                    <label for="recipe_text">{ "Ingredients (one per line, e.g. 1 1/2 cups flour)" }</label>
                    <textarea id="recipe_text" rows="8" value={(*recipe_text).clone()} oninput={on_recipe_input} />
                </div>
            } else {
                <div class="form-row">
                    <SelectInput id="ingredient" label="Ingredient" options={ingredient_options}
                        selected={(*ingredient).clone()} onchange={on_ingredient_change} />
                    <NumberInput id="amount" label="Amount" input_type="text" field={amount} />
                </div>
                <div class="form-row">
                    <SelectInput id="from_unit" label="From" options={unit_options()}
                        selected={(*from).clone()} onchange={on_from_change} />
                    <SelectInput id="to_unit" label="To" options={unit_options()}
                        selected={(*to).clone()} onchange={on_to_change} />
                </div>
            }
            if let Some(err) = &*input_error {
                <div class="input-error">{ err }</div>
            }
            <FormActions {on_calculate} {on_reset} />
            <div class="results-area">
                { match (&*result, &selected_ingredient) {
                    (Some(Ok(Outcome::Convert(r))), Some(i)) => render_conversion(i, amount_value, from_unit, r),
                    (Some(Ok(Outcome::ScaleRecipe(r))), _) => render_scaled(r),
                    (Some(Err(e)), _) => render_error(e),
                    _ => html! {},
                } }
                { render_density_table(&tables.ingredients) }
            </div>
        </section>
    }
}

#[function_component(WeddingCalculator)]
fn wedding_calculator(props: &TablesProps) -> Html {
    let defaults_mix = DrinkMix::default();
    let defaults_prices = Prices::default();
    let guests = use_form_field(DEFAULT_GUESTS.to_string());
    let hours = use_form_field(DEFAULT_HOURS.to_string());
    let (level, on_level_change) = use_select(DrinkingLevel::Moderate.key().to_string());
    let beer = use_form_field(defaults_mix.beer.to_string());
    let wine = use_form_field(defaults_mix.wine.to_string());
    let liquor = use_form_field(defaults_mix.liquor.to_string());
    let wine_price = use_form_field(defaults_prices.wine_bottle.to_string());
    let beer_price = use_form_field(defaults_prices.beer_case.to_string());
    let liquor_price = use_form_field(defaults_prices.liquor_bottle.to_string());
    let champagne_price = use_form_field(defaults_prices.champagne_bottle.to_string());
    let champagne = use_state(|| true);
    let guests_error = use_state(|| None::<String>);
    let hours_error = use_state(|| None::<String>);
    let result: CalcState = use_state(|| None);

    let on_calculate = {
        let tables = props.tables.clone();
        let (guests, hours, level) = (guests.clone(), hours.clone(), level.clone());
        let (beer, wine, liquor) = (beer.clone(), wine.clone(), liquor.clone());
        let prices = (
            wine_price.clone(),
            beer_price.clone(),
            liquor_price.clone(),
            champagne_price.clone(),
        );
        let champagne = champagne.clone();
        let (guests_error, hours_error) = (guests_error.clone(), hours_error.clone());
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let guest_count = validate_numeric_input(&guests.text, Some(1.0), Some(MAX_GUESTS), "Guest count");
            let hour_count = validate_numeric_input(&hours.text, Some(0.5), Some(MAX_HOURS), "Hours");
            guests_error.set(guest_count.as_ref().err().cloned());
            hours_error.set(hour_count.as_ref().err().cloned());
            let (Ok(guest_count), Ok(hour_count)) = (guest_count, hour_count) else {
                return;
            };

            let level = DrinkingLevel::ALL
                .into_iter()
                .find(|l| l.key() == level.as_str())
                .unwrap_or(DrinkingLevel::Moderate);
            let input = WeddingInput {
                guests: guest_count,
                hours: hour_count,
                level,
                mix: DrinkMix {
                    beer: beer.number(),
                    wine: wine.number(),
                    liquor: liquor.number(),
                },
                champagne_toast: *champagne,
                prices: Prices {
                    wine_bottle: prices.0.number(),
                    beer_case: prices.1.number(),
                    liquor_bottle: prices.2.number(),
                    champagne_bottle: prices.3.number(),
                },
            };
            calculate_into(&result, &tables, Calculation::Wedding(input));
        })
    };

    let on_reset = {
        let fields = [
            (guests.clone(), DEFAULT_GUESTS),
            (hours.clone(), DEFAULT_HOURS),
            (beer.clone(), defaults_mix.beer),
            (wine.clone(), defaults_mix.wine),
            (liquor.clone(), defaults_mix.liquor),
            (wine_price.clone(), defaults_prices.wine_bottle),
            (beer_price.clone(), defaults_prices.beer_case),
            (liquor_price.clone(), defaults_prices.liquor_bottle),
            (champagne_price.clone(), defaults_prices.champagne_bottle),
        ];
        let level = level.clone();
        let champagne = champagne.clone();
        let (guests_error, hours_error) = (guests_error.clone(), hours_error.clone());
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            for (field, value) in &fields {
                field.reset_to(value);
            }
            level.set(DrinkingLevel::Moderate.key().to_string());
            champagne.set(true);
            guests_error.set(None);
            hours_error.set(None);
            result.set(None);
        })
    };

    let level_options = DrinkingLevel::ALL
        .iter()
        .map(|l| {
            let label = match l {
                DrinkingLevel::Light => "Light (0.75 drinks per hour)",
                DrinkingLevel::Moderate => "Moderate (1 drink per hour)",
                DrinkingLevel::Heavy => "Heavy (1.5 drinks per hour)",
            };
            (l.key().to_string(), label.to_string())
        })
        .collect::<Vec<_>>();
    let percent = Some(AttrValue::from("%"));
    let dollars = Some(AttrValue::from("$"));

    html! {
        <section class="calculator">
            <div class="form-row">
                <NumberInput id="guests" label="Guests" field={guests} step="1" error={(*guests_error).clone()} />
                <NumberInput id="hours" label="Reception length" field={hours} suffix={Some(AttrValue::from("h"))}
                    error={(*hours_error).clone()} />
                <SelectInput id="drinking_level" label="Crowd" options={level_options}
                    selected={(*level).clone()} onchange={on_level_change} />
            </div>
            <div class="form-row">
                <NumberInput id="mix_beer" label="Beer" field={beer} suffix={percent.clone()} />
                <NumberInput id="mix_wine" label="Wine" field={wine} suffix={percent.clone()} />
                <NumberInput id="mix_liquor" label="Liquor" field={liquor} suffix={percent} />
            </div>
            <div class="form-row">
                <NumberInput id="price_wine" label="Wine per bottle" field={wine_price} suffix={dollars.clone()} />
                <NumberInput id="price_beer" label="Beer per case" field={beer_price} suffix={dollars.clone()} />
                <NumberInput id="price_liquor" label="Liquor per bottle" field={liquor_price} suffix={dollars.clone()} />
                <NumberInput id="price_champagne" label="Champagne per bottle" field={champagne_price} suffix={dollars} />
            </div>
            <div class="form-group checkbox-group">
                <label>
                    <input type="checkbox"
                        checked={*champagne}
                        onchange={
                            let champagne = champagne.clone();
                            Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                champagne.set(input.checked());
                            })
                        }
                    />
                    { "Champagne toast" }
                </label>
            </div>
            <FormActions {on_calculate} {on_reset} />
            <div class="results-area">
                { match &*result {
                    Some(Ok(Outcome::Wedding(r))) => render_wedding(r),
                    Some(Err(e)) => render_error(e),
                    _ => html! {},
                } }
            </div>
        </section>
    }
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component: tab bar plus the active calculator.
#[function_component]
pub fn App() -> Html {
    let tables = use_memo((), |_| {
        ReferenceTables::load()
            .map(Rc::new)
            .map_err(|e| e.to_string())
    });
    let tab = use_state(|| Tab::Cooldown);

    let tables = match &*tables {
        Ok(t) => t.clone(),
        Err(e) => {
            return html! {
                <div class="container">
                    <div class="current-error">{ format!("Could not load reference data: {}", e) }</div>
                </div>
            };
        }
    };

    html! {
        <div class="container">
            <nav class="calculator-tabs">
                { Tab::ALL.iter().map(|&t| {
                    let tab = tab.clone();
                    html! {
                        <button
                            class={classes!("tab", (*tab == t).then_some("active"))}
                            onclick={Callback::from(move |_| tab.set(t))}
                        >
                            { t.title() }
                        </button>
                    }
                }).collect::<Html>() }
            </nav>
            <h2>{ tab.title() }</h2>
            { match *tab {
                Tab::Cooldown => html! { <CooldownCalculator tables={tables} /> },
                Tab::FishingLine => html! { <FishingLineCalculator tables={tables} /> },
                Tab::Pond => html! { <PondCalculator tables={tables} /> },
                Tab::Recipe => html! { <RecipeCalculator tables={tables} /> },
                Tab::Wedding => html! { <WeddingCalculator tables={tables} /> },
            } }
        </div>
    }
}

/// Entry point: installs the panic hook and renders the App.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
