//! Localized strings for home screen sections.

use std::collections::BTreeMap;

use homescreen_core::{try_local, with_local};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringRes {
    RecentTabsShowAll,
    RecentTabsHeader,
    RecentlySavedTitle,
    RecentlySavedShowAllContentDescription,
    RecentBookmarksTitle,
    RecentBookmarksShowAllContentDescription,
}

impl StringRes {
    pub const ALL: [StringRes; 6] = [
        StringRes::RecentTabsShowAll,
        StringRes::RecentTabsHeader,
        StringRes::RecentlySavedTitle,
        StringRes::RecentlySavedShowAllContentDescription,
        StringRes::RecentBookmarksTitle,
        StringRes::RecentBookmarksShowAllContentDescription,
    ];

    /// Built-in English text.
    pub fn english(self) -> &'static str {
        match self {
            StringRes::RecentTabsShowAll => "Show all",
            StringRes::RecentTabsHeader => "Jump back in",
            StringRes::RecentlySavedTitle => "Recently saved",
            StringRes::RecentlySavedShowAllContentDescription => "Show all saved bookmarks",
            StringRes::RecentBookmarksTitle => "Recent bookmarks",
            StringRes::RecentBookmarksShowAllContentDescription => {
                "Show all recent bookmarks button"
            }
        }
    }
}

/// String table: English defaults with per-id overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Strings {
    overrides: BTreeMap<StringRes, String>,
}

impl Strings {
    pub fn english() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: BTreeMap<StringRes, String>) -> Self {
        Self { overrides }
    }

    pub fn set(mut self, id: StringRes, text: impl Into<String>) -> Self {
        self.overrides.insert(id, text.into());
        self
    }

    pub fn get(&self, id: StringRes) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.english())
    }
}

pub fn with_strings<R>(strings: Strings, f: impl FnOnce() -> R) -> R {
    with_local(strings, f)
}

/// Looks `id` up in the innermost provided [`Strings`], else English.
pub fn string_resource(id: StringRes) -> String {
    match try_local::<Strings>() {
        Some(s) => s.get(id).to_string(),
        None => id.english().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_by_default() {
        assert_eq!(string_resource(StringRes::RecentTabsShowAll), "Show all");
        assert_eq!(
            string_resource(StringRes::RecentlySavedTitle),
            "Recently saved"
        );
    }

    #[test]
    fn test_override_scoped_to_closure() {
        let de = Strings::english().set(StringRes::RecentTabsShowAll, "Alle anzeigen");
        with_strings(de, || {
            assert_eq!(string_resource(StringRes::RecentTabsShowAll), "Alle anzeigen");
            assert_eq!(string_resource(StringRes::RecentTabsHeader), "Jump back in");
        });
        assert_eq!(string_resource(StringRes::RecentTabsShowAll), "Show all");
    }

    #[test]
    fn test_ids_serialize_snake_case() {
        let json = serde_json::to_string(&StringRes::RecentlySavedTitle).expect("serialize");
        assert_eq!(json, "\"recently_saved_title\"");
    }
}
