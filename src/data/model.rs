use std::fmt;
use std::ops::{Add, Index};

use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Nutrient – the closed set of tracked nutrient columns
// ---------------------------------------------------------------------------

/// One of the twelve nutrient columns every dish carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nutrient {
    Energy,
    Protein,
    Fat,
    Carbs,
    Salt,
    Calcium,
    Vegetables,
    Iron,
    VitaminA,
    VitaminB1,
    VitaminB2,
    VitaminC,
}

impl Nutrient {
    pub const COUNT: usize = 12;

    /// All nutrients in display order.
    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Energy,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbs,
        Nutrient::Salt,
        Nutrient::Calcium,
        Nutrient::Vegetables,
        Nutrient::Iron,
        Nutrient::VitaminA,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminC,
    ];

    /// Canonical column key, as produced by the header normalizer.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Energy => "energy_kcal",
            Nutrient::Protein => "protein_g",
            Nutrient::Fat => "fat_g",
            Nutrient::Carbs => "carbs_g",
            Nutrient::Salt => "salt_g",
            Nutrient::Calcium => "calcium_mg",
            Nutrient::Vegetables => "vegetables_g",
            Nutrient::Iron => "iron_mg",
            Nutrient::VitaminA => "vitaminA_ugRAE",
            Nutrient::VitaminB1 => "vitaminB1_mg",
            Nutrient::VitaminB2 => "vitaminB2_mg",
            Nutrient::VitaminC => "vitaminC_mg",
        }
    }

    pub fn from_key(key: &str) -> Option<Nutrient> {
        Nutrient::ALL.into_iter().find(|n| n.key() == key)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Nutrients – per-dish values, one optional slot per nutrient
// ---------------------------------------------------------------------------

/// Per-dish nutrient values. Every nutrient always has a slot; `None` means
/// the cell was missing or could not be read as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    values: [Option<f64>; Nutrient::COUNT],
}

impl Nutrients {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.values[nutrient.slot()]
    }

    pub fn set(&mut self, nutrient: Nutrient, value: Option<f64>) {
        self.values[nutrient.slot()] = value;
    }

    /// `(nutrient, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, Option<f64>)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}

impl Serialize for Nutrients {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Nutrient::COUNT))?;
        for (nutrient, value) in self.iter() {
            map.serialize_entry(nutrient.key(), &value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// NutrientTotals – aggregate over a set of dishes
// ---------------------------------------------------------------------------

/// Summed nutrient values. Unlike [`Nutrients`] every slot holds a number;
/// nutrients nobody contributed to stay at `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientTotals {
    values: [f64; Nutrient::COUNT],
}

impl NutrientTotals {
    /// Add every present, non-NaN value of `nutrients` to the running totals.
    pub fn accumulate(&mut self, nutrients: &Nutrients) {
        for (nutrient, value) in nutrients.iter() {
            if let Some(v) = value.filter(|v| !v.is_nan()) {
                self.values[nutrient.slot()] += v;
            }
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.values[nutrient.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}

impl Index<Nutrient> for NutrientTotals {
    type Output = f64;

    fn index(&self, nutrient: Nutrient) -> &f64 {
        &self.values[nutrient.slot()]
    }
}

impl Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(mut self, rhs: NutrientTotals) -> NutrientTotals {
        for (lhs, rhs) in self.values.iter_mut().zip(rhs.values) {
            *lhs += rhs;
        }
        self
    }
}

impl Serialize for NutrientTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Nutrient::COUNT))?;
        for (nutrient, value) in self.iter() {
            map.serialize_entry(nutrient.key(), &value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Dish – one row of the menu CSV
// ---------------------------------------------------------------------------

/// A single menu item (one non-empty-name row of the source CSV).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Dish {
    name: String,
    /// Price in yen, when the cell held digits.
    pub price: Option<u32>,
    /// Product page, empty when the file has none.
    pub url: String,
    pub nutrients: Nutrients,
}

impl Dish {
    pub fn new(name: impl Into<String>) -> Self {
        Dish {
            name: name.into(),
            price: None,
            url: String::new(),
            nutrients: Nutrients::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shorthand for `self.nutrients.get(nutrient)`.
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.nutrients.get(nutrient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nutrient_keys_round_trip_and_are_distinct() {
        for n in Nutrient::ALL {
            assert_eq!(Nutrient::from_key(n.key()), Some(n));
        }
        let mut keys: Vec<_> = Nutrient::ALL.iter().map(|n| n.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Nutrient::COUNT);
        assert_eq!(Nutrient::from_key("price_raw"), None);
    }

    #[test]
    fn new_dish_has_every_nutrient_absent() {
        let dish = Dish::new("豚汁");
        assert_eq!(dish.nutrients.iter().count(), Nutrient::COUNT);
        assert!(dish.nutrients.iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn accumulate_skips_absent_and_nan() {
        let mut nutrients = Nutrients::default();
        nutrients.set(Nutrient::Energy, Some(120.0));
        nutrients.set(Nutrient::Fat, Some(f64::NAN));

        let mut totals = NutrientTotals::default();
        totals.accumulate(&nutrients);
        totals.accumulate(&nutrients);

        assert_eq!(totals[Nutrient::Energy], 240.0);
        assert_eq!(totals[Nutrient::Fat], 0.0);
        assert_eq!(totals[Nutrient::Salt], 0.0);
    }

    #[test]
    fn nutrients_serialize_with_canonical_keys() {
        let mut nutrients = Nutrients::default();
        nutrients.set(Nutrient::VitaminA, Some(12.5));
        let json = serde_json::to_value(nutrients).unwrap();
        assert_eq!(json["vitaminA_ugRAE"], 12.5);
        assert!(json["energy_kcal"].is_null());
        assert_eq!(json.as_object().unwrap().len(), Nutrient::COUNT);
    }
}
