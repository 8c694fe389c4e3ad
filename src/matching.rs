// ABOUTME: Fuzzy ingredient matching for recipe search
// ABOUTME: Bidirectional substring containment with a 3-of-4 hit threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sazon Project

//! Ingredient matcher.
//!
//! A recipe is a candidate for a four-ingredient query when at least three
//! of the four query terms "hit" one of the recipe's base ingredients.
//! A term hits when, after normalization, it contains or is contained in a
//! base ingredient. The one-miss allowance deliberately tolerates a typo'd
//! or unavailable ingredient; no weighting distinguishes which three hit.

/// Minimum number of the four query terms that must hit
pub const MIN_MATCHING_INGREDIENTS: usize = 3;

/// Normalize an ingredient term for comparison: lowercase and trim.
#[must_use]
pub fn normalize(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Whether a single normalized query term hits any normalized base
/// ingredient via bidirectional substring containment.
///
/// An empty normalized term never hits; otherwise `""` would trivially be
/// a substring of every base ingredient.
fn term_hits(term: &str, base_ingredients: &[String]) -> bool {
    if term.is_empty() {
        return false;
    }
    base_ingredients
        .iter()
        .any(|base| base.contains(term) || term.contains(base.as_str()))
}

/// Decide whether a recipe's base ingredients sufficiently match the four
/// query terms: at least [`MIN_MATCHING_INGREDIENTS`] of the four must hit.
///
/// Matching is case-insensitive and independent of query term order.
#[must_use]
pub fn matches_ingredients(query: [&str; 4], base_ingredients: &[String]) -> bool {
    let normalized_base: Vec<String> = base_ingredients.iter().map(|i| normalize(i)).collect();

    let hits = query
        .iter()
        .filter(|term| term_hits(&normalize(term), &normalized_base))
        .count();

    hits >= MIN_MATCHING_INGREDIENTS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn all_four_hits_match() {
        let b = base(&["pollo", "arroz", "cebolla", "ajo"]);
        assert!(matches_ingredients(["pollo", "arroz", "cebolla", "ajo"], &b));
    }

    #[test]
    fn three_of_four_is_enough() {
        let b = base(&["pollo", "arroz", "cebolla", "ajo"]);
        assert!(matches_ingredients(
            ["pollo", "arroz", "cebolla", "zanahoria"],
            &b
        ));
    }

    #[test]
    fn two_of_four_is_not_enough() {
        let b = base(&["pollo", "arroz", "cebolla", "ajo"]);
        assert!(!matches_ingredients(
            ["pollo", "arroz", "papa", "zanahoria"],
            &b
        ));
    }

    #[test]
    fn containment_works_in_both_directions() {
        // Query term contained in base ingredient
        let b = base(&["pechuga de pollo", "arroz integral", "cebolla", "ajo"]);
        assert!(matches_ingredients(["pollo", "arroz", "cebolla", "ajo"], &b));

        // Base ingredient contained in query term
        let b = base(&["pollo", "arroz", "cebolla", "ajo"]);
        assert!(matches_ingredients(
            ["pollo deshuesado", "arroz blanco", "cebolla morada", "ajo"],
            &b
        ));
    }

    #[test]
    fn matching_is_case_insensitive_and_trims() {
        let b = base(&["Pollo", "ARROZ", " cebolla ", "ajo"]);
        assert!(matches_ingredients(
            ["  POLLO", "arroz ", "Cebolla", "AJO"],
            &b
        ));
    }

    #[test]
    fn empty_query_terms_never_hit() {
        let b = base(&["pollo", "arroz", "cebolla", "ajo"]);
        // Two real hits plus two blank terms must not reach the threshold.
        assert!(!matches_ingredients(["pollo", "arroz", "", "   "], &b));
        // Three real hits still match regardless of the blank fourth term.
        assert!(matches_ingredients(["pollo", "arroz", "cebolla", ""], &b));
    }

    #[test]
    fn query_order_does_not_change_the_result() {
        let b = base(&["pollo", "arroz", "cebolla", "ajo"]);
        let terms = ["pollo", "arroz", "cebolla", "zanahoria"];
        let permutations = [
            [terms[0], terms[1], terms[2], terms[3]],
            [terms[3], terms[2], terms[1], terms[0]],
            [terms[1], terms[3], terms[0], terms[2]],
            [terms[2], terms[0], terms[3], terms[1]],
        ];
        for p in permutations {
            assert!(matches_ingredients(p, &b));
        }
    }
}
