use std::collections::HashSet;

use serde::Serialize;

use super::model::{Dish, Nutrient, NutrientTotals};

// ---------------------------------------------------------------------------
// Lookup and search
// ---------------------------------------------------------------------------

/// Ranked keyword search.
///
/// A blank keyword returns the whole menu untouched. Otherwise only dishes
/// whose name contains the keyword are kept; names starting with it come
/// first, and each group is sorted by name.
pub fn search<'a>(dishes: &'a [Dish], keyword: &str) -> Vec<&'a Dish> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return dishes.iter().collect();
    }
    let mut hits: Vec<&Dish> = dishes
        .iter()
        .filter(|d| d.name().contains(keyword))
        .collect();
    hits.sort_by(|a, b| {
        let rank = |d: &Dish| !d.name().starts_with(keyword);
        rank(*a).cmp(&rank(*b)).then_with(|| a.name().cmp(b.name()))
    });
    hits
}

/// First dish, in file order, named exactly `name`.
pub fn find_exact<'a>(dishes: &'a [Dish], name: &str) -> Option<&'a Dish> {
    dishes.iter().find(|d| d.name() == name)
}

/// Dishes whose name contains `keyword`, in file order.
pub fn filter_by_keyword<'a>(dishes: &'a [Dish], keyword: &str) -> Vec<&'a Dish> {
    dishes
        .iter()
        .filter(|d| d.name().contains(keyword))
        .collect()
}

/// Dishes with a known energy value, highest first, at most `n` of them.
/// Equal energies keep their file order.
pub fn top_by_energy(dishes: &[Dish], n: usize) -> Vec<&Dish> {
    let mut ranked: Vec<(&Dish, f64)> = dishes
        .iter()
        .filter_map(|d| d.get(Nutrient::Energy).map(|kcal| (d, kcal)))
        .collect();
    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    ranked.into_iter().take(n).map(|(d, _)| d).collect()
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Sum every nutrient over `dishes`. Absent values are skipped; nutrients no
/// dish provides total `0.0`.
pub fn sum_nutrients<'a, I>(dishes: I) -> NutrientTotals
where
    I: IntoIterator<Item = &'a Dish>,
{
    let mut totals = NutrientTotals::default();
    for dish in dishes {
        totals.accumulate(&dish.nutrients);
    }
    totals
}

// ---------------------------------------------------------------------------
// Multi-target resolution
// ---------------------------------------------------------------------------

/// How user-supplied item tokens are matched against dish names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Token must equal the dish name; the first such dish is taken.
    #[default]
    Exact,
    /// Every dish whose name contains the token is taken.
    Contains,
}

/// Dishes picked for a combined total, plus the tokens that matched nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution<'a> {
    pub targets: Vec<&'a Dish>,
    pub not_found: Vec<String>,
}

impl Resolution<'_> {
    /// Combined nutrients of the targets, or `None` if nothing resolved.
    pub fn totals(&self) -> Option<NutrientTotals> {
        if self.targets.is_empty() {
            return None;
        }
        Some(sum_nutrients(self.targets.iter().copied()))
    }
}

/// Resolve `tokens` to dishes.
///
/// In [`MatchMode::Exact`] the targets follow token order and may repeat. In
/// [`MatchMode::Contains`] a dish hit by several tokens is included once, at
/// its first hit; identity is the row, so same-named rows are distinct.
pub fn resolve_targets<'a, S>(dishes: &'a [Dish], tokens: &[S], mode: MatchMode) -> Resolution<'a>
where
    S: AsRef<str>,
{
    let mut targets = Vec::new();
    let mut not_found = Vec::new();

    match mode {
        MatchMode::Exact => {
            for token in tokens.iter().map(AsRef::as_ref) {
                match find_exact(dishes, token) {
                    Some(dish) => targets.push(dish),
                    None => not_found.push(token.to_string()),
                }
            }
        }
        MatchMode::Contains => {
            let mut seen: HashSet<usize> = HashSet::new();
            for token in tokens.iter().map(AsRef::as_ref) {
                let mut matched = false;
                for (row, dish) in dishes.iter().enumerate() {
                    if !dish.name().contains(token) {
                        continue;
                    }
                    matched = true;
                    if seen.insert(row) {
                        targets.push(dish);
                    }
                }
                if !matched {
                    not_found.push(token.to_string());
                }
            }
        }
    }

    Resolution { targets, not_found }
}
