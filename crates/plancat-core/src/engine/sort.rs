//! Sort stage: orders the filtered view.
//!
//! All strategies are stable: plans with equal keys keep their relative input
//! order.

use std::cmp::Ordering;

use crate::models::{Plan, SortStrategy};

/// Returns a new ordering of `plans` according to `strategy`.
///
/// The input slice is left untouched.
pub fn sort_plans<'a>(plans: &[&'a Plan], strategy: SortStrategy) -> Vec<&'a Plan> {
    let mut sorted = plans.to_vec();
    match strategy {
        SortStrategy::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortStrategy::Price => sorted.sort_by(|a, b| a.base_price.total_cmp(&b.base_price)),
        SortStrategy::Popularity => sorted.sort_by(|a, b| {
            b.popularity_score()
                .cmp(&a.popularity_score())
                .then_with(|| b.created_at.cmp(&a.created_at))
        }),
        SortStrategy::Date => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    sorted
}

/// Locale-aware name comparison.
///
/// Names are compared on a case- and accent-insensitive key first so that
/// "Óptimo" sorts next to "optimo" rather than after "zumba". Names whose keys
/// collide fall back to plain code point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        other => other,
    }
}
