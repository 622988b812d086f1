// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Display ordering and formatting of element collections.
//!
//! Ordering is decided for the collection as a whole: if every element
//! parses as a floating-point number the elements are sorted numerically,
//! otherwise all of them are sorted lexicographically. There is no
//! per-element mixed ordering.
//!
//! Number parsing follows the usual float literal rules plus `_` digit
//! separators (`1_000`). `nan` and `inf` count as numbers; NaN sorts after
//! positive infinity.

/// Marker shown after a truncated region label.
pub const ELLIPSIS: &str = "...";

/// Default number of elements shown inside a diagram region.
pub const LABEL_ELEMENTS: usize = 3;

/// Sort elements for display.
///
/// ```
/// use venn_sets::algebra::ordering::display_order;
///
/// assert_eq!(display_order(["10", "2", "3"]), vec!["2", "3", "10"]);
/// assert_eq!(display_order(["10", "2", "abc"]), vec!["10", "2", "abc"]);
/// ```
pub fn display_order<I, S>(elements: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items: Vec<String> = elements.into_iter().map(|s| s.as_ref().to_string()).collect();
    let numbers: Option<Vec<f64>> = items.iter().map(|s| parse_number(s)).collect();

    match numbers {
        Some(numbers) => {
            let mut keyed: Vec<(f64, String)> = numbers.into_iter().zip(items).collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            keyed.into_iter().map(|(_, s)| s).collect()
        }
        None => {
            items.sort();
            items
        }
    }
}

/// Parse a trimmed token as a number, accepting `_` only between digits.
fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim();
    if !token.contains('_') {
        return token.parse().ok();
    }
    let bytes = token.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }
    token.replace('_', "").parse().ok()
}

/// Format a collection as `{ a, b, c }` in display order.
///
/// An empty collection renders as `{  }`.
pub fn format_set<I, S>(elements: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("{{ {} }}", display_order(elements).join(", "))
}

/// Format the label drawn inside a diagram region.
///
/// At most `max_shown` elements are listed one per line, followed by a line
/// holding [`ELLIPSIS`] when more exist. An empty region yields an empty
/// string.
pub fn region_label<I, S>(elements: I, max_shown: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let sorted = display_order(elements);
    let truncated = sorted.len() > max_shown;
    let mut lines: Vec<&str> = sorted.iter().take(max_shown).map(String::as_str).collect();
    if truncated {
        lines.push(ELLIPSIS);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_order() {
        assert_eq!(display_order(["10", "2", "3"]), vec!["2", "3", "10"]);
        assert_eq!(display_order(["-1.5", "0", "1e1", "2"]), vec!["-1.5", "0", "2", "1e1"]);
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(parse_number("1_000"), Some(1000.0));
        assert_eq!(parse_number(" 2_5.0_1 "), Some(25.01));
        assert_eq!(parse_number("_1"), None);
        assert_eq!(parse_number("1_"), None);
        assert_eq!(parse_number("1__0"), None);
        assert_eq!(display_order(["1_000", "2", "30"]), vec!["2", "30", "1_000"]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut fifteen: Vec<String> = (0..14).map(|i| i.to_string()).collect();
        fifteen.insert(7, "NaN".to_string());
        let sorted = display_order(&fifteen);
        let mut expected: Vec<String> = (0..14).map(|i| i.to_string()).collect();
        expected.push("NaN".to_string());
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_nan_in_large_collection() {
        let mut tokens: Vec<String> = (0..40).rev().map(|i| i.to_string()).collect();
        tokens.insert(3, "nan".to_string());
        tokens.insert(20, "NaN".to_string());
        tokens.push("inf".to_string());
        tokens.push("-inf".to_string());

        let sorted = display_order(&tokens);
        assert_eq!(sorted.len(), tokens.len());
        assert_eq!(sorted[0], "-inf");
        assert_eq!(sorted[41], "inf");
        let numbers: Vec<f64> = sorted[1..41].iter().map(|s| s.parse().unwrap()).collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        assert!(sorted[42..].iter().all(|s| s.eq_ignore_ascii_case("nan")));
    }

    #[test]
    fn test_fallback_is_global() {
        // One non-numeric element forces lexicographic order for everything.
        assert_eq!(display_order(["10", "2", "abc"]), vec!["10", "2", "abc"]);
    }

    #[test]
    fn test_lexicographic() {
        assert_eq!(display_order(["pear", "apple", "fig"]), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn test_empty() {
        assert!(display_order(Vec::<String>::new()).is_empty());
        assert_eq!(format_set(Vec::<String>::new()), "{  }");
    }

    #[test]
    fn test_format_set() {
        assert_eq!(format_set(["3", "1", "2"]), "{ 1, 2, 3 }");
    }

    #[test]
    fn test_region_label_truncates() {
        assert_eq!(region_label(["5", "4", "3", "2", "1"], LABEL_ELEMENTS), "1\n2\n3\n...");
    }

    #[test]
    fn test_region_label_exact_fit() {
        assert_eq!(region_label(["c", "a", "b"], LABEL_ELEMENTS), "a\nb\nc");
    }

    #[test]
    fn test_region_label_empty() {
        assert_eq!(region_label(Vec::<String>::new(), LABEL_ELEMENTS), "");
    }
}
