//! Ordering used when restored items are merged back into a list.

use crate::TextItem;
use core::cmp::Ordering;

/// Compares two ids.
///
/// Each id is read as an integer from its leading digits, after optional
/// whitespace and sign, with a `0x` prefix switching to hexadecimal. If
/// both ids start with a number the numbers are compared, otherwise the
/// ids are compared as strings. Numbers are held as `f64`, so very long
/// digit runs lose precision instead of overflowing.
///
/// # Examples
/// ```
/// # use core::cmp::Ordering;
/// # use textlist::compare_ids;
/// assert_eq!(compare_ids("9", "10"), Ordering::Less);
/// assert_eq!(compare_ids("10x", "9"), Ordering::Greater);
/// assert_eq!(compare_ids("item-9", "item-10"), Ordering::Greater);
/// assert_eq!(compare_ids("01", "1"), Ordering::Equal);
/// ```
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (leading_int(a), leading_int(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Reads the integer prefix of `id`, or `None` if it has no digits.
fn leading_int(id: &str) -> Option<f64> {
    let s = id.trim_start_matches(is_space);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"));
    let value = match hex {
        Some(digits) => {
            let end = digits
                .find(|c: char| !c.is_ascii_hexdigit())
                .unwrap_or(digits.len());
            if end == 0 {
                return None;
            }
            digits[..end]
                .chars()
                .filter_map(|c| c.to_digit(16))
                .fold(0.0, |acc, d| acc * 16.0 + f64::from(d))
        }
        None => {
            let end = s
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(s.len());
            if end == 0 {
                return None;
            }
            s[..end].parse::<f64>().ok()?
        }
    };
    Some(if negative { -value } else { value })
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Stable sort of `items` by [`compare_ids`].
///
/// Mixed numeric and non-numeric ids can make the comparison non-transitive,
/// so this is an insertion sort, which terminates on any comparator.
pub(crate) fn sort_by_id(items: &mut [TextItem]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare_ids(&items[j - 1].id, &items[j].id) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn ids(items: &[TextItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn item(id: &str) -> TextItem {
        TextItem::with_id(id, id, false)
    }

    #[test]
    fn numeric() {
        let mut items = vec![item("10"), item("2"), item("1")];
        sort_by_id(&mut items);
        assert_eq!(ids(&items), ["1", "2", "10"]);
    }

    #[test]
    fn lexical() {
        let mut items = vec![item("item-1"), item("item-3"), item("item-2")];
        sort_by_id(&mut items);
        assert_eq!(ids(&items), ["item-1", "item-2", "item-3"]);
    }

    #[test]
    fn leading_digits_are_numbers() {
        assert_eq!(compare_ids("12abc", "9"), Ordering::Greater);
        assert_eq!(compare_ids("10x", "2"), Ordering::Greater);
        assert_eq!(compare_ids("4f3a9c2e-1b7d-4e8a-9c0f-2d3e4f5a6b7c", "4"), Ordering::Equal);
        assert_eq!(compare_ids(" 7", "10"), Ordering::Less);
        assert_eq!(compare_ids("-3", "2"), Ordering::Less);
        assert_eq!(compare_ids("+5", "5"), Ordering::Equal);
    }

    #[test]
    fn hex_prefix() {
        assert_eq!(compare_ids("0x1A", "25"), Ordering::Greater);
        assert_eq!(compare_ids("0x1A", "26"), Ordering::Equal);
        assert_eq!(compare_ids("0xg", "1"), Ordering::Greater);
    }

    #[test]
    fn no_leading_digits_are_strings() {
        assert_eq!(compare_ids("abc", "1"), Ordering::Greater);
        assert_eq!(compare_ids("-", "1"), Ordering::Greater);
        assert_eq!(compare_ids("x10", "x9"), Ordering::Less);
    }

    #[test]
    fn long_numbers_do_not_overflow() {
        assert_eq!(compare_ids("10000000000000000000", "3"), Ordering::Greater);
        assert_eq!(
            compare_ids("-100000000000000000000000000000", "0"),
            Ordering::Less
        );
        let long = "9".repeat(400);
        assert_eq!(compare_ids(&long, "1"), Ordering::Greater);
    }

    #[test]
    fn restores_after_prefix_numbers() {
        let mut items = vec![item("1"), item("10x"), item("2")];
        sort_by_id(&mut items);
        assert_eq!(ids(&items), ["1", "2", "10x"]);
    }

    #[test]
    fn equal_numbers_keep_order() {
        let mut items = vec![item("02"), item("1"), item("2")];
        sort_by_id(&mut items);
        assert_eq!(ids(&items), ["1", "02", "2"]);
    }

    #[test]
    fn mixed_ids_terminate() {
        let mut items = vec![item("1a"), item("10"), item("9"), item("b")];
        sort_by_id(&mut items);
        assert_eq!(items.len(), 4);
    }
}
