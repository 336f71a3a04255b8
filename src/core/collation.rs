//! Locale-aware string comparison for Spanish ("es") display ordering.
//!
//! Comparisons are case-insensitive and diacritic-insensitive: accented
//! vowels fold to their base letter, while `ñ` keeps its place as a
//! distinct letter between `n` and `o`. The numeric variant compares
//! embedded digit runs by value, so "Fondo 2" orders before "Fondo 10".

use std::cmp::Ordering;
use std::iter::Peekable;

/// Primary collation weight of a single (already lowercased) character.
///
/// Weights are spaced out so `ñ` can slot in between `n` and `o`.
fn weight(c: char) -> u32 {
    let folded = match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ç' => 'c',
        other => other,
    };
    if folded == 'ñ' {
        return 'n' as u32 * 2 + 1;
    }
    folded as u32 * 2
}

/// Compares two strings with Spanish collation rules.
pub fn compare_es(a: &str, b: &str) -> Ordering {
    let wa = a.chars().flat_map(char::to_lowercase).map(weight);
    let wb = b.chars().flat_map(char::to_lowercase).map(weight);
    wa.cmp(wb)
}

/// Compares two strings with Spanish collation rules and numeric awareness.
///
/// Runs of ASCII digits are compared by numeric value rather than
/// character by character. Runs that differ only in leading zeros are
/// treated as ties and comparison continues after them.
pub fn compare_es_numeric(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().flat_map(char::to_lowercase).peekable();
    let mut cb = b.chars().flat_map(char::to_lowercase).peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run_a = take_digits(&mut ca);
                let run_b = take_digits(&mut cb);
                let ord = compare_digit_runs(&run_a, &run_b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                let ord = weight(x).cmp(&weight(y));
                if ord != Ordering::Equal {
                    return ord;
                }
                ca.next();
                cb.next();
            }
        }
    }
}

fn take_digits<I: Iterator<Item = char>>(chars: &mut Peekable<I>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(*c);
        chars.next();
    }
    digits
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
