//! Duplicate removal, keeping first-occurrence order.

use std::collections::HashSet;

/// Drops exact-string duplicates.
pub fn dedup_exact(domains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(domains.len());
    domains
        .into_iter()
        .filter(|domain| seen.insert(domain.clone()))
        .collect()
}

/// Drops duplicates by ASCII-lowercase identity, keeping the first spelling.
pub fn dedup_case_insensitive(domains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(domains.len());
    domains
        .into_iter()
        .filter(|domain| seen.insert(domain.to_ascii_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_exact_keeps_case_variants() {
        let out = dedup_exact(list(&["b.example", "A.example", "b.example", "a.example"]));
        assert_eq!(out, list(&["b.example", "A.example", "a.example"]));
    }

    #[test]
    fn test_dedup_case_insensitive_keeps_first_spelling() {
        let out = dedup_case_insensitive(list(&["Shop.Example", "b.example", "shop.example"]));
        assert_eq!(out, list(&["Shop.Example", "b.example"]));
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_exact(Vec::new()).is_empty());
        assert!(dedup_case_insensitive(Vec::new()).is_empty());
    }
}
