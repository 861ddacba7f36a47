//! Pure Yew view components for the calculator widgets.
//!
//! This module contains stateless components and render helpers that draw
//! form fields and result panels from props, so the calculator components in
//! `main.rs` only hold state and wire events.

use crate::hooks::FormField;
use crate::utils::{format_currency, format_number};
use calculator_widgets::cooldown::{CooldownResult, GameSystem};
use calculator_widgets::fishing_line::{BackingResult, CapacityResult, LineKind};
use calculator_widgets::pond::{LengthUnit, PondResult};
use calculator_widgets::recipe::{format_amount, ConversionResult, ScaledRecipe, Unit};
use calculator_widgets::tables::{Ingredient, LineDiameterTable};
use calculator_widgets::wedding::WeddingResult;
use calculator_widgets::CalcError;
use yew::prelude::*;

/// Labelled text/number input bound to a [`FormField`].
#[derive(Properties, PartialEq)]
pub struct NumberInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub field: FormField,
    #[prop_or(AttrValue::from("number"))]
    pub input_type: AttrValue,
    #[prop_or(AttrValue::from("any"))]
    pub step: AttrValue,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(NumberInput)]
pub fn number_input(props: &NumberInputProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="input-with-suffix">
                <input
                    type={props.input_type.clone()}
                    id={props.id.clone()}
                    step={props.step.clone()}
                    value={props.field.text.clone()}
                    class={if props.error.is_some() { "invalid" } else { "" }}
                    oninput={props.field.on_text_input.clone()}
                />
                if let Some(suffix) = &props.suffix {
                    <span class="input-suffix">{ suffix.clone() }</span>
                }
            </div>
            if let Some(err) = &props.error {
                <div class="input-error">{ err }</div>
            }
        </div>
    }
}

/// Labelled `<select>` over `(value, label)` pairs.
#[derive(Properties, PartialEq)]
pub struct SelectInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub options: Vec<(String, String)>,
    pub selected: String,
    pub onchange: Callback<Event>,
}

#[function_component(SelectInput)]
pub fn select_input(props: &SelectInputProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <select id={props.id.clone()} onchange={props.onchange.clone()}>
                { props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.selected}>{ label }</option>
                }).collect::<Html>() }
            </select>
        </div>
    }
}

/// Calculate / Reset button row shared by every widget.
#[derive(Properties, PartialEq)]
pub struct FormActionsProps {
    pub on_calculate: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(FormActions)]
pub fn form_actions(props: &FormActionsProps) -> Html {
    html! {
        <div class="form-actions">
            <button class="btn-primary" onclick={props.on_calculate.clone()}>{ "Calculate" }</button>
            <button class="btn-secondary" onclick={props.on_reset.clone()}>{ "Reset" }</button>
        </div>
    }
}

pub fn unit_options() -> Vec<(String, String)> {
    Unit::ALL
        .iter()
        .map(|u| (u.key().to_string(), format!("{} ({})", u, u.abbreviation())))
        .collect()
}

pub fn line_kind_options() -> Vec<(String, String)> {
    LineKind::ALL
        .iter()
        .map(|k| (k.key().to_string(), k.to_string()))
        .collect()
}

fn render_warnings(warnings: &[String]) -> Html {
    if warnings.is_empty() {
        return html! {};
    }
    html! {
        <ul class="result-warnings">
            { warnings.iter().map(|w| html! { <li>{ w }</li> }).collect::<Html>() }
        </ul>
    }
}

pub fn render_error(error: &CalcError) -> Html {
    html! {
        <div class="results error">
            <p class="current-error">{ error.to_string() }</p>
        </div>
    }
}

fn stat_row(label: &str, value: String) -> Html {
    html! {
        <tr>
            <th>{ label }</th>
            <td>{ value }</td>
        </tr>
    }
}

pub fn render_cooldown(game: &GameSystem, result: &CooldownResult) -> Html {
    html! {
        <div class="results">
            <h3>{ format!("{} cooldown", game.name) }</h3>
            <table class="result-table">
                { stat_row("Cooldown reduction", format!("{}%", format_number(result.reduction_percent, 2))) }
                { stat_row("Final cooldown", format!("{}s", format_number(result.final_cooldown, 2))) }
                { stat_row("Time saved", format!("{}s", format_number(result.time_saved, 2))) }
                { stat_row("Uses per minute", format_number(result.uses_per_minute, 2)) }
            </table>
            { render_warnings(&result.warnings) }
        </div>
    }
}

/// Breakpoint table: reduction at several stat values.
pub fn render_breakpoints(game: &GameSystem, rows: &[(f64, CooldownResult)]) -> Html {
    html! {
        <div class="reference-table">
            <h4>{ format!("{} breakpoints", game.stat_label) }</h4>
            <table>
                <thead>
                    <tr>
                        <th>{ game.stat_label.clone() }</th>
                        <th>{ "Reduction" }</th>
                        <th>{ "Cooldown" }</th>
                    </tr>
                </thead>
                <tbody>
                    { rows.iter().map(|(stat, r)| html! {
                        <tr>
                            <td>{ format_number(*stat, 0) }</td>
                            <td>{ format!("{}%", format_number(r.reduction_percent, 1)) }</td>
                            <td>{ format!("{}s", format_number(r.final_cooldown, 2)) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
            <p class="game-example">{ game.example.clone() }</p>
        </div>
    }
}

pub fn render_capacity(line_label: &str, result: &CapacityResult) -> Html {
    html! {
        <div class="results">
            <h3>{ format!("{} capacity", line_label) }</h3>
            <table class="result-table">
                { stat_row("Line diameter", format!("{:.4}\"", result.diameter_in)) }
                { stat_row("Yards", format_number(result.yards, 0)) }
                { stat_row("Meters", format_number(result.meters, 0)) }
                { stat_row("Feet", format_number(result.feet, 0)) }
            </table>
            { render_warnings(&result.warnings) }
        </div>
    }
}

pub fn render_backing(result: &BackingResult) -> Html {
    html! {
        <div class="results">
            <h3>{ "Backing" }</h3>
            <table class="result-table">
                { stat_row("Main line", format!("{} yd", format_number(result.main_line_yards, 0))) }
                { stat_row("Spool used by main line", format!("{}%", format_number(result.main_line_fill_percent, 1))) }
                { stat_row("Backing needed", format!("{} yd", format_number(result.backing_yards, 0))) }
                { stat_row("Backing (meters)", format!("{} m", format_number(result.backing_meters, 0))) }
            </table>
            { render_warnings(&result.warnings) }
        </div>
    }
}

/// Diameter chart for one line kind.
pub fn render_line_chart(table: &LineDiameterTable, kind: LineKind) -> Html {
    html! {
        <div class="reference-table">
            <h4>{ format!("{} diameters", kind) }</h4>
            <table>
                <thead>
                    <tr><th>{ "Pound test" }</th><th>{ "Diameter (in)" }</th></tr>
                </thead>
                <tbody>
                    { table.rows(kind).iter().map(|(lb, d)| html! {
                        <tr>
                            <td>{ format!("{} lb", lb) }</td>
                            <td>{ format!("{:.3}", d) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

pub fn render_pond(result: &PondResult, unit: LengthUnit) -> Html {
    let len_unit = match unit {
        LengthUnit::Feet => "ft",
        LengthUnit::Meters => "m",
    };
    html! {
        <div class="results">
            <h3>{ "Pond volume" }</h3>
            <table class="result-table">
                { stat_row("US gallons", format_number(result.us_gallons, 0)) }
                { stat_row("Liters", format_number(result.liters, 0)) }
                { stat_row("Imperial gallons", format_number(result.imperial_gallons, 0)) }
                { stat_row("Cubic feet", format_number(result.cubic_feet, 1)) }
                { stat_row("Cubic meters", format_number(result.cubic_meters, 2)) }
                { stat_row("Surface area", format!("{} sq {}", format_number(result.surface_area, 1), len_unit)) }
                { stat_row("Pump flow", format!("{} GPH", format_number(result.pump_gallons_per_hour, 0))) }
                { stat_row("Liner size", format!("{} x {} {}",
                    format_number(result.liner_length, 1),
                    format_number(result.liner_width, 1),
                    len_unit)) }
                { stat_row("Koi (max)", result.max_koi.to_string()) }
                { stat_row("Goldfish (max)", result.max_goldfish.to_string()) }
            </table>
            { render_warnings(&result.warnings) }
        </div>
    }
}

pub fn render_conversion(ingredient: &Ingredient, amount: f64, from: Unit, result: &ConversionResult) -> Html {
    html! {
        <div class="results">
            <h3>{ ingredient.name.clone() }</h3>
            <p class="conversion-line">
                { format!("{} {} = {} {}",
                    format_amount(amount),
                    from.abbreviation(),
                    format_number(result.amount, 2),
                    result.unit.abbreviation()) }
            </p>
            if let Some(density) = result.grams_per_cup {
                <p class="conversion-density">{ format!("Using {} g per cup", density) }</p>
            }
            { render_warnings(&result.warnings) }
        </div>
    }
}

pub fn render_scaled(result: &ScaledRecipe) -> Html {
    html! {
        <div class="results">
            <h3>{ format!("Scaled by {}", format_number(result.factor, 2)) }</h3>
            <table class="result-table">
                { result.items.iter().map(|item| html! {
                    <tr>
                        <th>{ item.name.clone() }</th>
                        <td>{ format!("{} {}", format_amount(item.amount), item.unit.abbreviation()) }</td>
                    </tr>
                }).collect::<Html>() }
            </table>
            { render_warnings(&result.warnings) }
        </div>
    }
}

pub fn render_density_table(ingredients: &[Ingredient]) -> Html {
    html! {
        <div class="reference-table">
            <h4>{ "Grams per cup" }</h4>
            <table>
                <thead>
                    <tr><th>{ "Ingredient" }</th><th>{ "Category" }</th><th>{ "g / cup" }</th></tr>
                </thead>
                <tbody>
                    { ingredients.iter().map(|i| html! {
                        <tr>
                            <td>{ i.name.clone() }</td>
                            <td>{ i.category.clone() }</td>
                            <td>{ format_number(i.grams_per_cup, 1) }</td>
                        </tr>
                    }).collect::<Html>() }
                </tbody>
            </table>
        </div>
    }
}

pub fn render_wedding(result: &WeddingResult) -> Html {
    let cost = &result.cost;
    html! {
        <div class="results">
            <h3>{ format!("{} drinks", format_number(result.total_drinks, 0)) }</h3>
            <table class="result-table">
                <thead>
                    <tr><th>{ "Drink" }</th><th>{ "Servings" }</th><th>{ "Buy" }</th><th>{ "Cost" }</th></tr>
                </thead>
                <tbody>
                    <tr>
                        <td>{ "Wine" }</td>
                        <td>{ format_number(result.wine_drinks, 0) }</td>
                        <td>{ format!("{} bottles", result.wine_bottles) }</td>
                        <td>{ format_currency(cost.wine) }</td>
                    </tr>
                    <tr>
                        <td>{ "Beer" }</td>
                        <td>{ format_number(result.beer_drinks, 0) }</td>
                        <td>{ format!("{} cases", result.beer_cases) }</td>
                        <td>{ format_currency(cost.beer) }</td>
                    </tr>
                    <tr>
                        <td>{ "Liquor" }</td>
                        <td>{ format_number(result.liquor_drinks, 0) }</td>
                        <td>{ format!("{} bottles", result.liquor_bottles) }</td>
                        <td>{ format_currency(cost.liquor) }</td>
                    </tr>
                    if result.champagne_bottles > 0 {
                        <tr>
                            <td>{ "Champagne toast" }</td>
                            <td>{ "-" }</td>
                            <td>{ format!("{} bottles", result.champagne_bottles) }</td>
                            <td>{ format_currency(cost.champagne) }</td>
                        </tr>
                    }
                </tbody>
                <tfoot>
                    <tr>
                        <th colspan="3">{ "Total" }</th>
                        <th>{ format_currency(cost.total) }</th>
                    </tr>
                </tfoot>
            </table>
            { render_warnings(&result.warnings) }
        </div>
    }
}
