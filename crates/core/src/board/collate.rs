//! Title comparison for the `title` ordering.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two titles the way a human-facing list expects.
///
/// Levels, each consulted only on a tie of the previous one:
/// 1. base letters, case-folded, accents removed (`é` sorts with `e`);
/// 2. accents, unaccented first;
/// 3. case, lowercase first;
/// 4. exact code points, so the order is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base(a)
        .flat_map(char::to_lowercase)
        .cmp(base(b).flat_map(char::to_lowercase))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| compare_case(base(a), base(b)))
        .then_with(|| a.cmp(b))
}

/// Decomposed characters without combining marks.
fn base(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn compare_case(a: impl Iterator<Item = char>, b: impl Iterator<Item = char>) -> Ordering {
    for (x, y) in a.zip(b) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
