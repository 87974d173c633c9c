use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use super::model::Nutrient;

pub const NAME: &str = "name";
pub const PRICE: &str = "price_raw";
pub const URL: &str = "url";

// ---------------------------------------------------------------------------
// Header normalization table
// ---------------------------------------------------------------------------

/// `(pattern, canonical key)` in priority order; the first match wins.
/// Patterns are matched case-insensitively against the trimmed header.
const RULES: &[(&str, &str)] = &[
    (r"^name$|^メニュー名$|^商品名$", NAME),
    (r"^price$|^価格$|^値段$", PRICE),
    (r"^url$|^リンク$", URL),
    (r"^energy.*kcal$|^k?cal$|^エネルギ.*|^カロリー$", "energy_kcal"),
    (r"^protein.*g$|^たんぱく.*|^蛋白.*", "protein_g"),
    (r"^fat.*g$|^脂質$|^脂肪$", "fat_g"),
    (r"^carb.*g$|^炭水化物$|^糖質$", "carbs_g"),
    (r"^salt.*g$|^食塩.*|^塩分$", "salt_g"),
    (r"^calcium.*mg$|^カルシウム$", "calcium_mg"),
    (r"^vegetables.*g$|^野菜量?$", "vegetables_g"),
    (r"^iron.*mg$|^鉄$", "iron_mg"),
    (r"^vitaminA.*(ug|μg).*|^ビタミン\s*A$", "vitaminA_ugRAE"),
    (r"^vitaminB1.*mg$|^ビタミン\s*B1$", "vitaminB1_mg"),
    (r"^vitaminB2.*mg$|^ビタミン\s*B2$", "vitaminB2_mg"),
    (r"^vitaminC.*mg$|^ビタミン\s*C$", "vitaminC_mg"),
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, key)| {
            let re = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .unwrap();
            (re, *key)
        })
        .collect()
});

/// Map a raw CSV header to its canonical key. Unrecognised headers come back
/// trimmed but otherwise unchanged.
pub fn normalize_header(raw: &str) -> String {
    let header = raw.trim_start_matches('\u{feff}').trim();
    COMPILED
        .iter()
        .find(|(re, _)| re.is_match(header))
        .map(|(_, key)| (*key).to_string())
        .unwrap_or_else(|| header.to_string())
}

// ---------------------------------------------------------------------------
// HeaderMap – canonical key per column of one file
// ---------------------------------------------------------------------------

/// Canonical keys for each column of a CSV file, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    keys: Vec<String>,
}

impl HeaderMap {
    pub fn new<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        HeaderMap {
            keys: headers.into_iter().map(normalize_header).collect(),
        }
    }

    /// Canonical key of column `idx`.
    pub fn key(&self, idx: usize) -> Option<&str> {
        self.keys.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether any column normalized to `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Nutrient columns the file provides.
    pub fn nutrients(&self) -> impl Iterator<Item = Nutrient> + '_ {
        self.keys.iter().filter_map(|k| Nutrient::from_key(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_headers() {
        assert_eq!(normalize_header("name"), NAME);
        assert_eq!(normalize_header("Price"), PRICE);
        assert_eq!(normalize_header("URL"), URL);
        assert_eq!(normalize_header("energy_kcal"), "energy_kcal");
        assert_eq!(normalize_header("Energy kcal"), "energy_kcal");
        assert_eq!(normalize_header("kcal"), "energy_kcal");
        assert_eq!(normalize_header("cal"), "energy_kcal");
        assert_eq!(normalize_header("protein_g"), "protein_g");
        assert_eq!(normalize_header("Carbohydrate_g"), "carbs_g");
        assert_eq!(normalize_header("calcium_mg"), "calcium_mg");
        assert_eq!(normalize_header("vitaminA_ugRAE"), "vitaminA_ugRAE");
        assert_eq!(normalize_header("VitaminA (μg RAE)"), "vitaminA_ugRAE");
        assert_eq!(normalize_header("vitaminB1_mg"), "vitaminB1_mg");
        assert_eq!(normalize_header("vitaminC_mg"), "vitaminC_mg");
    }

    #[test]
    fn japanese_headers() {
        assert_eq!(normalize_header("メニュー名"), NAME);
        assert_eq!(normalize_header("商品名"), NAME);
        assert_eq!(normalize_header("値段"), PRICE);
        assert_eq!(normalize_header("リンク"), URL);
        assert_eq!(normalize_header("エネルギー(kcal)"), "energy_kcal");
        assert_eq!(normalize_header("カロリー"), "energy_kcal");
        assert_eq!(normalize_header("たんぱく質"), "protein_g");
        assert_eq!(normalize_header("脂質"), "fat_g");
        assert_eq!(normalize_header("糖質"), "carbs_g");
        assert_eq!(normalize_header("食塩相当量"), "salt_g");
        assert_eq!(normalize_header("塩分"), "salt_g");
        assert_eq!(normalize_header("野菜"), "vegetables_g");
        assert_eq!(normalize_header("野菜量"), "vegetables_g");
        assert_eq!(normalize_header("鉄"), "iron_mg");
        assert_eq!(normalize_header("ビタミン A"), "vitaminA_ugRAE");
        assert_eq!(normalize_header("ビタミンB2"), "vitaminB2_mg");
    }

    #[test]
    fn surrounding_whitespace_and_bom_are_ignored() {
        assert_eq!(normalize_header("  name "), NAME);
        assert_eq!(normalize_header("\u{feff}name"), NAME);
    }

    #[test]
    fn unknown_headers_pass_through() {
        assert_eq!(normalize_header("category"), "category");
        assert_eq!(normalize_header(" 備考 "), "備考");
        // anchored: a longer header is not an exact-token match
        assert_eq!(normalize_header("price_yen"), "price_yen");
        assert_eq!(normalize_header("鉄分"), "鉄分");
    }

    #[test]
    fn header_map_lists_nutrient_columns() {
        let map = HeaderMap::new(["商品名", "価格", "kcal", "脂質", "memo"]);
        assert_eq!(map.len(), 5);
        assert_eq!(map.key(0), Some(NAME));
        assert_eq!(map.key(4), Some("memo"));
        assert!(map.contains(PRICE));
        assert!(!map.contains(URL));
        let nutrients: Vec<_> = map.nutrients().collect();
        assert_eq!(nutrients, vec![Nutrient::Energy, Nutrient::Fat]);
    }
}
