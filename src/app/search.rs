use crate::api::Pokemon;

/// Case-insensitive name substring filter. Pure and synchronous; recomputed
/// on every keystroke. An empty query keeps the full set.
pub fn filter_by_name<'a>(catalog: &'a [Pokemon], query: &str) -> Vec<&'a Pokemon> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Pokemon> {
        vec![
            Pokemon::sample(4, "Charmander"),
            Pokemon::sample(1, "Bulbasaur"),
        ]
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let cat = catalog();
        let hits = filter_by_name(&cat, "char");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Charmander");

        let hits = filter_by_name(&cat, "SAUR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bulbasaur");
    }

    #[test]
    fn empty_query_returns_full_set_unchanged() {
        let cat = catalog();
        let hits = filter_by_name(&cat, "");
        assert_eq!(hits.len(), cat.len());
        assert_eq!(hits[0].name, "Charmander");
        assert_eq!(hits[1].name, "Bulbasaur");
    }

    #[test]
    fn no_match_yields_empty_view() {
        let cat = catalog();
        assert!(filter_by_name(&cat, "mewtwo").is_empty());
    }
}
