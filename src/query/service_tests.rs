//! Tests for QueryService

use super::*;
use proptest::prelude::*;

fn service() -> QueryService {
    QueryService::default()
}

fn ids(results: &[Suggestion]) -> Vec<&str> {
    results.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn test_missing_query_returns_empty() {
    assert!(service().search(None).is_empty());
}

#[test]
fn test_empty_query_returns_empty() {
    assert!(service().search(Some("")).is_empty());
}

#[test]
fn test_whitespace_query_returns_empty() {
    assert!(service().search(Some("   \t")).is_empty());
}

#[test]
fn test_ap_matches_apple_before_papaya() {
    let results = service().search(Some("ap"));
    let found = ids(&results);

    let apple = found.iter().position(|id| *id == "apple").unwrap();
    let papaya = found.iter().position(|id| *id == "papaya").unwrap();
    assert!(apple < papaya);
    assert_eq!(results[apple], Suggestion::new("apple", "Apple"));
    assert_eq!(results[papaya], Suggestion::new("papaya", "Papaya"));
}

#[test]
fn test_ap_matches_exact_set_in_source_order() {
    let results = service().search(Some("ap"));
    assert_eq!(
        ids(&results),
        vec!["apple", "apricot", "grape", "grapefruit", "papaya", "pineapple"]
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let lower = service().search(Some("berry"));
    let upper = service().search(Some("BERRY"));
    assert_eq!(lower, upper);
    assert!(!lower.is_empty());
}

#[test]
fn test_query_is_trimmed() {
    assert_eq!(service().search(Some("  kiwi ")), service().search(Some("kiwi")));
}

#[test]
fn test_matches_on_value_not_id() {
    // "Dragon Fruit" has a space that its id does not
    let results = service().search(Some("n f"));
    assert_eq!(ids(&results), vec!["dragonfruit", "passionfruit"]);
}

#[test]
fn test_results_are_capped() {
    let results = service().search(Some("e"));
    assert_eq!(results.len(), MAX_RESULTS);
}

#[test]
fn test_cap_keeps_first_matches() {
    let all: Vec<Suggestion> = service()
        .source()
        .entries()
        .iter()
        .filter(|s| s.value.to_lowercase().contains('e'))
        .cloned()
        .collect();
    assert!(all.len() > MAX_RESULTS);
    assert_eq!(service().search(Some("e")), all[..MAX_RESULTS].to_vec());
}

#[test]
fn test_no_match_returns_empty() {
    assert!(service().search(Some("zzz")).is_empty());
}

#[test]
fn test_custom_source_list() {
    let source = SourceList::new(vec![
        Suggestion::new("one", "One"),
        Suggestion::new("two", "Two"),
    ])
    .unwrap();
    let service = QueryService::new(source);
    assert_eq!(ids(&service.search(Some("o"))), vec!["one", "two"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_results_contain_query(query in "[a-zA-Z ]{1,4}") {
        let results = service().search(Some(&query));
        let needle = query.trim().to_lowercase();
        for s in &results {
            prop_assert!(s.value.to_lowercase().contains(&needle));
        }
    }

    #[test]
    fn prop_results_never_exceed_cap(query in ".{0,6}") {
        prop_assert!(service().search(Some(&query)).len() <= MAX_RESULTS);
    }

    #[test]
    fn prop_results_follow_source_order(query in "[a-z]{1,2}") {
        let service = service();
        let results = service.search(Some(&query));
        let positions: Vec<usize> = results
            .iter()
            .map(|r| service.source().entries().iter().position(|s| s == r).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_blank_queries_return_empty(query in "[ \t\n]{0,5}") {
        prop_assert!(service().search(Some(&query)).is_empty());
    }
}
