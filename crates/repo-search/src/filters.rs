//! Search filter model
//!
//! Each filter axis (stars, language, license) is a closed set of options.
//! The option families are plain enums; categories erase them into uniform
//! [`FilterOption`] values at construction time so a [`FilterSet`] can hold
//! heterogeneous families in one ordered collection.
//!
//! Selecting an option never triggers a fetch; callers commit a filter
//! change by reloading the search session.

/// A single selectable option within a filter category.
///
/// The display name is also the option's identity within its category.
/// An option without a query fragment (typically the "All" choice)
/// contributes nothing to the composed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    name: String,
    query_fragment: Option<String>,
}

impl FilterOption {
    pub fn new(name: impl Into<String>, query_fragment: Option<String>) -> Self {
        Self {
            name: name.into(),
            query_fragment,
        }
    }

    /// Display name, also the identity key within a category
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Query fragment this option contributes, if any
    pub fn query_fragment(&self) -> Option<&str> {
        self.query_fragment.as_deref()
    }
}

/// Filter options for the number of stars a repository has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarsOption {
    All,
    New,
    Small,
    Popular,
    Trending,
}

impl StarsOption {
    /// All options, in display order
    pub const ALL: [StarsOption; 5] = [
        StarsOption::All,
        StarsOption::New,
        StarsOption::Small,
        StarsOption::Popular,
        StarsOption::Trending,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StarsOption::All => "All",
            StarsOption::New => "New (0-50)",
            StarsOption::Small => "Small (51-500)",
            StarsOption::Popular => "Popular (501-5000)",
            StarsOption::Trending => "Trending (5000+)",
        }
    }

    pub fn query_fragment(&self) -> Option<String> {
        match self {
            StarsOption::All => None,
            StarsOption::New => Some("stars:0..50".to_string()),
            StarsOption::Small => Some("stars:51..500".to_string()),
            StarsOption::Popular => Some("stars:501..5000".to_string()),
            StarsOption::Trending => Some("stars:>5000".to_string()),
        }
    }
}

impl From<StarsOption> for FilterOption {
    fn from(option: StarsOption) -> Self {
        FilterOption::new(option.name(), option.query_fragment())
    }
}

/// Filter options for the primary programming language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageOption {
    All,
    JavaScript,
    TypeScript,
    Python,
    Go,
    Java,
    Swift,
    Rust,
}

impl LanguageOption {
    /// All options, in display order
    pub const ALL: [LanguageOption; 8] = [
        LanguageOption::All,
        LanguageOption::JavaScript,
        LanguageOption::TypeScript,
        LanguageOption::Python,
        LanguageOption::Go,
        LanguageOption::Java,
        LanguageOption::Swift,
        LanguageOption::Rust,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LanguageOption::All => "All",
            LanguageOption::JavaScript => "JavaScript",
            LanguageOption::TypeScript => "TypeScript",
            LanguageOption::Python => "Python",
            LanguageOption::Go => "Go",
            LanguageOption::Java => "Java",
            LanguageOption::Swift => "Swift",
            LanguageOption::Rust => "Rust",
        }
    }

    pub fn query_fragment(&self) -> Option<String> {
        match self {
            LanguageOption::All => None,
            other => Some(format!("language:{}", other.name())),
        }
    }
}

impl From<LanguageOption> for FilterOption {
    fn from(option: LanguageOption) -> Self {
        FilterOption::new(option.name(), option.query_fragment())
    }
}

/// Filter options for the repository license
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseOption {
    All,
    Mit,
    Apache2,
    Gpl3,
    Bsd3Clause,
    Mpl2,
}

impl LicenseOption {
    /// All options, in display order
    pub const ALL: [LicenseOption; 6] = [
        LicenseOption::All,
        LicenseOption::Mit,
        LicenseOption::Apache2,
        LicenseOption::Gpl3,
        LicenseOption::Bsd3Clause,
        LicenseOption::Mpl2,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LicenseOption::All => "All",
            LicenseOption::Mit => "MIT",
            LicenseOption::Apache2 => "Apache-2.0",
            LicenseOption::Gpl3 => "GPL-3.0",
            LicenseOption::Bsd3Clause => "BSD-3-Clause",
            LicenseOption::Mpl2 => "MPL-2.0",
        }
    }

    pub fn query_fragment(&self) -> Option<String> {
        match self {
            LicenseOption::All => None,
            other => Some(format!("license:{}", other.name().to_lowercase())),
        }
    }
}

impl From<LicenseOption> for FilterOption {
    fn from(option: LicenseOption) -> Self {
        FilterOption::new(option.name(), option.query_fragment())
    }
}

/// A named filter axis with a closed set of options and one active selection.
///
/// The selection is tracked by index, so the invariant "selected option is a
/// member of the option list" holds by construction. Constructing a category
/// whose default is not in the option list is a programmer error and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCategory {
    name: String,
    options: Vec<FilterOption>,
    default_index: usize,
    selected_index: usize,
}

impl FilterCategory {
    /// Create a category from any option family.
    ///
    /// # Panics
    ///
    /// Panics if `default_option` is not a member of `options` (by name).
    pub fn new<T>(name: impl Into<String>, options: impl IntoIterator<Item = T>, default_option: T) -> Self
    where
        T: Into<FilterOption>,
    {
        let options: Vec<FilterOption> = options.into_iter().map(Into::into).collect();
        let default: FilterOption = default_option.into();
        let default_index = options
            .iter()
            .position(|option| option.name() == default.name())
            .expect("default option must be a member of the category's options");

        Self {
            name: name.into(),
            options,
            default_index,
            selected_index: default_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Available options, in display order
    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    /// The currently selected option
    pub fn selected(&self) -> &FilterOption {
        &self.options[self.selected_index]
    }

    /// The category's default option
    pub fn default_option(&self) -> &FilterOption {
        &self.options[self.default_index]
    }

    /// Select the option with the given name.
    ///
    /// Returns `false` and leaves the selection unchanged when no option
    /// carries that name.
    pub fn select(&mut self, option_name: &str) -> bool {
        match self.options.iter().position(|o| o.name() == option_name) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => {
                log::warn!(
                    "filter category '{}' has no option named '{}'",
                    self.name,
                    option_name
                );
                false
            }
        }
    }

    /// Reset the selection to the default option
    pub fn reset_to_default(&mut self) {
        self.selected_index = self.default_index;
    }

    /// Whether the selection is at the category's default
    pub fn is_default(&self) -> bool {
        self.selected_index == self.default_index
    }
}

/// An ordered, fixed set of filter categories for one search session.
///
/// Categories are never added or removed after construction; only their
/// selections change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    categories: Vec<FilterCategory>,
}

impl FilterSet {
    pub fn new(categories: Vec<FilterCategory>) -> Self {
        Self { categories }
    }

    /// The standard Stars / Language / License filter set, all at default
    pub fn default_set() -> Self {
        Self::new(vec![
            FilterCategory::new("Stars", StarsOption::ALL, StarsOption::All),
            FilterCategory::new("Language", LanguageOption::ALL, LanguageOption::All),
            FilterCategory::new("License", LicenseOption::ALL, LicenseOption::All),
        ])
    }

    pub fn categories(&self) -> &[FilterCategory] {
        &self.categories
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut FilterCategory> {
        self.categories.iter_mut().find(|c| c.name() == name)
    }

    /// Select an option within a named category.
    ///
    /// Returns `false` when the category or option does not exist.
    pub fn select(&mut self, category_name: &str, option_name: &str) -> bool {
        match self.category_mut(category_name) {
            Some(category) => category.select(option_name),
            None => {
                log::warn!("no filter category named '{category_name}'");
                false
            }
        }
    }

    /// Reset every category to its default option
    pub fn reset_all(&mut self) {
        for category in &mut self.categories {
            category.reset_to_default();
        }
    }

    /// Whether any category is not at its default option
    pub fn any_applied(&self) -> bool {
        self.categories.iter().any(|c| !c.is_default())
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::default_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_shape() {
        let filters = FilterSet::default_set();
        let names: Vec<&str> = filters.categories().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Stars", "Language", "License"]);
        assert!(filters.categories().iter().all(|c| c.is_default()));
    }

    #[test]
    fn test_all_options_have_no_fragment() {
        assert_eq!(StarsOption::All.query_fragment(), None);
        assert_eq!(LanguageOption::All.query_fragment(), None);
        assert_eq!(LicenseOption::All.query_fragment(), None);
    }

    #[test]
    fn test_option_fragments() {
        assert_eq!(
            StarsOption::New.query_fragment().as_deref(),
            Some("stars:0..50")
        );
        assert_eq!(
            StarsOption::Trending.query_fragment().as_deref(),
            Some("stars:>5000")
        );
        assert_eq!(
            LanguageOption::Rust.query_fragment().as_deref(),
            Some("language:Rust")
        );
        assert_eq!(
            LicenseOption::Apache2.query_fragment().as_deref(),
            Some("license:apache-2.0")
        );
    }

    #[test]
    fn test_select_and_reset() {
        let mut category = FilterCategory::new("Stars", StarsOption::ALL, StarsOption::All);
        assert!(category.is_default());

        assert!(category.select("New (0-50)"));
        assert!(!category.is_default());
        assert_eq!(category.selected().name(), "New (0-50)");

        category.reset_to_default();
        assert!(category.is_default());
        assert_eq!(category.selected().name(), "All");
    }

    #[test]
    fn test_select_unknown_option_is_rejected() {
        let mut category = FilterCategory::new("License", LicenseOption::ALL, LicenseOption::All);
        assert!(!category.select("WTFPL"));
        assert!(category.is_default());
    }

    #[test]
    #[should_panic(expected = "default option must be a member")]
    fn test_default_outside_options_panics() {
        FilterCategory::new(
            "Stars",
            [StarsOption::New, StarsOption::Small],
            StarsOption::All,
        );
    }

    #[test]
    fn test_any_applied() {
        let mut filters = FilterSet::default_set();
        assert!(!filters.any_applied());

        assert!(filters.select("Language", "Rust"));
        assert!(filters.any_applied());

        filters.reset_all();
        assert!(!filters.any_applied());
    }

    #[test]
    fn test_select_unknown_category_is_rejected() {
        let mut filters = FilterSet::default_set();
        assert!(!filters.select("Forks", "All"));
        assert!(!filters.any_applied());
    }
}
