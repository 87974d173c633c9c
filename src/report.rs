use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::data::model::{Dish, Nutrient, NutrientTotals};
use crate::data::query::Resolution;

// ---------------------------------------------------------------------------
// Value formatting
// ---------------------------------------------------------------------------

/// `-` when absent, no decimals for whole numbers, shortest form otherwise.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        // `+ 0.0` turns -0.0 into 0.0
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{:.0}", v + 0.0),
        Some(v) => v.to_string(),
    }
}

pub fn format_price(yen: Option<u32>) -> String {
    match yen {
        Some(yen) => format!("¥{yen}"),
        None => "-".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Output mode
// ---------------------------------------------------------------------------

/// How a command result is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

fn json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn summary_line(dish: &Dish) -> String {
    format!(
        "- {} | {} | kcal={}",
        dish.name(),
        format_price(dish.price),
        format_number(dish.get(Nutrient::Energy))
    )
}

fn push_totals(out: &mut String, totals: &NutrientTotals) {
    out.push_str("Totals:\n");
    for (nutrient, value) in totals.iter() {
        let _ = writeln!(out, "  - {nutrient}: {}", format_number(Some(value)));
    }
}

// ---------------------------------------------------------------------------
// Per-command renderers
// ---------------------------------------------------------------------------

const SAMPLE_SIZE: usize = 5;
const NO_RESULTS: &str = "No results.";

pub fn stats(dishes: &[Dish], format: Format) -> Result<String> {
    let sample = &dishes[..dishes.len().min(SAMPLE_SIZE)];
    if format == Format::Json {
        #[derive(Serialize)]
        struct Stats<'a> {
            count: usize,
            sample: &'a [Dish],
        }
        return json(&Stats {
            count: dishes.len(),
            sample,
        });
    }

    let mut out = format!("Dishes: {}\n", dishes.len());
    for dish in sample {
        out.push_str(&summary_line(dish));
        out.push('\n');
    }
    Ok(out)
}

pub fn search(hits: &[&Dish], limit: usize, format: Format) -> Result<String> {
    let shown = &hits[..hits.len().min(limit)];
    if format == Format::Json {
        #[derive(Serialize)]
        struct Search<'a> {
            hits: usize,
            shown: &'a [&'a Dish],
        }
        return json(&Search {
            hits: hits.len(),
            shown,
        });
    }

    if hits.is_empty() {
        return Ok(format!("{NO_RESULTS}\n"));
    }
    let mut out = format!("Hits: {} (showing first {limit})\n", hits.len());
    for dish in shown {
        let _ = writeln!(
            out,
            "- {} | {} | kcal={} P={}g F={}g C={}g",
            dish.name(),
            format_price(dish.price),
            format_number(dish.get(Nutrient::Energy)),
            format_number(dish.get(Nutrient::Protein)),
            format_number(dish.get(Nutrient::Fat)),
            format_number(dish.get(Nutrient::Carbs)),
        );
    }
    Ok(out)
}

pub fn show(dish: Option<&Dish>, format: Format) -> Result<String> {
    if format == Format::Json {
        return json(&dish);
    }

    let Some(dish) = dish else {
        return Ok("Not found. Use `search` to check the exact name.\n".to_string());
    };
    let url = if dish.url.is_empty() { "-" } else { dish.url.as_str() };
    let mut out = format!(
        "[{}]\nPrice: {}\nURL  : {url}\nNutrients:\n",
        dish.name(),
        format_price(dish.price)
    );
    for (nutrient, value) in dish.nutrients.iter() {
        let _ = writeln!(out, "  - {nutrient}: {}", format_number(value));
    }
    Ok(out)
}

pub fn sum(matched: &[&Dish], totals: Option<&NutrientTotals>, format: Format) -> Result<String> {
    if format == Format::Json {
        #[derive(Serialize)]
        struct Sum<'a> {
            count: usize,
            totals: Option<&'a NutrientTotals>,
        }
        return json(&Sum {
            count: matched.len(),
            totals,
        });
    }

    let Some(totals) = totals else {
        return Ok(format!("{NO_RESULTS}\n"));
    };
    let mut out = format!("Matched: {}\n", matched.len());
    push_totals(&mut out, totals);
    Ok(out)
}

pub fn top_energy(ranked: &[&Dish], n: usize, format: Format) -> Result<String> {
    if format == Format::Json {
        return json(&ranked);
    }

    let mut out = format!("Top {n} by kcal\n");
    for dish in ranked {
        out.push_str(&summary_line(dish));
        out.push('\n');
    }
    Ok(out)
}

pub fn resolution(res: &Resolution<'_>, format: Format) -> Result<String> {
    let totals = res.totals();
    if format == Format::Json {
        #[derive(Serialize)]
        struct Combined<'r, 'a> {
            #[serde(flatten)]
            resolution: &'r Resolution<'a>,
            totals: Option<NutrientTotals>,
        }
        return json(&Combined {
            resolution: res,
            totals,
        });
    }

    let mut out = String::new();
    let Some(totals) = totals else {
        out.push_str("No targets.\n");
        if !res.not_found.is_empty() {
            out.push_str("Not found (check the spelling with `search`):\n");
            for token in &res.not_found {
                let _ = writeln!(out, "  - {token}");
            }
        }
        return Ok(out);
    };

    out.push_str("Targets:\n");
    for dish in &res.targets {
        let _ = writeln!(out, "  - {} | {}", dish.name(), format_price(dish.price));
    }
    if !res.not_found.is_empty() {
        out.push_str("Not found:\n");
        for token in &res.not_found {
            let _ = writeln!(out, "  - {token}");
        }
    }
    push_totals(&mut out, &totals);
    Ok(out)
}
