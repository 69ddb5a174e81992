//! Query composition
//!
//! Turns the selected options of a [`FilterSet`] into the single `q`
//! parameter sent to the search endpoint.

use crate::filters::FilterSet;

/// Compose the search query from the currently selected filter options.
///
/// Fragments are joined with a single space in category order. Options
/// without a fragment (the "All" choices) are skipped entirely and never
/// emit an empty token, so an all-default set composes to the empty string.
pub fn compose(filters: &FilterSet) -> String {
    filters
        .categories()
        .iter()
        .filter_map(|category| category.selected().query_fragment())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterCategory, FilterSet, LicenseOption, StarsOption};

    #[test]
    fn test_all_defaults_compose_to_empty_string() {
        let filters = FilterSet::default_set();
        assert_eq!(compose(&filters), "");
    }

    #[test]
    fn test_empty_set_composes_to_empty_string() {
        let filters = FilterSet::new(vec![]);
        assert_eq!(compose(&filters), "");
    }

    #[test]
    fn test_fragments_join_in_category_order() {
        let mut filters = FilterSet::new(vec![
            FilterCategory::new("Stars", StarsOption::ALL, StarsOption::All),
            FilterCategory::new("License", LicenseOption::ALL, LicenseOption::All),
        ]);
        assert!(filters.select("Stars", StarsOption::New.name()));
        assert!(filters.select("License", LicenseOption::Mit.name()));

        assert_eq!(compose(&filters), "stars:0..50 license:mit");
    }

    #[test]
    fn test_default_categories_are_skipped_not_emitted_empty() {
        let mut filters = FilterSet::default_set();
        assert!(filters.select("License", "MIT"));

        // Stars and Language are still at default; no stray separators.
        assert_eq!(compose(&filters), "license:mit");
    }
}
