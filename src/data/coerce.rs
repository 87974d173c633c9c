use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Cell coercion: raw CSV text → typed value
// ---------------------------------------------------------------------------
//
// Both coercers are lenient. The menu CSV is maintained by hand, so cells like
// "¥450円", "250kcal" or "－3.5" are normal; anything unreadable is `None`.

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").unwrap());

static YEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{1,7}").unwrap());

/// Fold full-width digits and the full-width minus sign to ASCII.
fn fold_full_width(s: &str) -> Cow<'_, str> {
    let needs_fold = s
        .chars()
        .any(|c| c == '－' || ('０'..='９').contains(&c));
    if !needs_fold {
        return Cow::Borrowed(s);
    }
    s.chars()
        .map(|c| match c {
            '－' => '-',
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            other => other,
        })
        .collect::<String>()
        .into()
}

/// First decimal number anywhere in the cell, e.g. `"250kcal"` → `250.0`.
pub fn parse_number(cell: Option<&str>) -> Option<f64> {
    let text = fold_full_width(cell?);
    NUMBER_RE.find(&text)?.as_str().parse().ok()
}

/// First run of up to seven digits, e.g. `"¥450円"` → `450`.
pub fn parse_yen(cell: Option<&str>) -> Option<u32> {
    let cell = cell.filter(|c| !c.is_empty())?;
    let text = fold_full_width(cell);
    YEN_RE.find(&text)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_from_unit_suffixed_cell() {
        assert_eq!(parse_number(Some("250kcal")), Some(250.0));
        assert_eq!(parse_number(Some("約 1.25 g")), Some(1.25));
        assert_eq!(parse_number(Some("3.")), Some(3.0));
    }

    #[test]
    fn number_with_full_width_minus_and_digits() {
        assert_eq!(parse_number(Some("－3.5")), Some(-3.5));
        assert_eq!(parse_number(Some("１２０")), Some(120.0));
    }

    #[test]
    fn number_absent_cases() {
        assert_eq!(parse_number(None), None);
        assert_eq!(parse_number(Some("")), None);
        assert_eq!(parse_number(Some(" ")), None);
        assert_eq!(parse_number(Some("n/a")), None);
    }

    #[test]
    fn yen_extracts_first_digit_run() {
        assert_eq!(parse_yen(Some("¥450円")), Some(450));
        assert_eq!(parse_yen(Some("450")), Some(450));
        assert_eq!(parse_yen(Some("税込 330 円 (大盛 +50)")), Some(330));
        assert_eq!(parse_yen(Some("４５０円")), Some(450));
    }

    #[test]
    fn yen_caps_run_at_seven_digits() {
        assert_eq!(parse_yen(Some("123456789")), Some(1234567));
    }

    #[test]
    fn yen_absent_cases() {
        assert_eq!(parse_yen(Some("no digits")), None);
        assert_eq!(parse_yen(Some("")), None);
        assert_eq!(parse_yen(None), None);
    }
}
