//! Filter and ordering composed by the service and executed by a repository.
//!
//! Matching is case-insensitive except for `NameContains`. Ordering is ordinal
//! (byte-wise) on the stored values, with `id` as the final tie-breaker so every
//! backend returns the same sequence.

use std::cmp::Ordering;

use crate::domain::MenuItem;

/// Lower-cases for comparison. Stored values keep their original casing.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemFilter {
    All,
    /// Folded category equals the folded needle.
    CategoryEquals(String),
    /// Folded dietary tag equals the folded needle.
    DietaryTagEquals(String),
    /// Case-sensitive substring of the name.
    NameContains(String),
    /// Folded name or folded description equals the folded needle.
    TextEquals(String),
    /// Folded name, description or category contains the folded needle.
    TextContains(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemOrder {
    CategoryThenName,
    Name,
    NameThenCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemQuery {
    pub filter: MenuItemFilter,
    pub order: MenuItemOrder,
}

impl MenuItemQuery {
    pub fn all() -> Self {
        Self {
            filter: MenuItemFilter::All,
            order: MenuItemOrder::CategoryThenName,
        }
    }

    pub fn by_category(category: &str) -> Self {
        Self {
            filter: MenuItemFilter::CategoryEquals(fold_case(category)),
            order: MenuItemOrder::Name,
        }
    }

    pub fn by_dietary_tag(tag: &str) -> Self {
        Self {
            filter: MenuItemFilter::DietaryTagEquals(fold_case(tag)),
            order: MenuItemOrder::CategoryThenName,
        }
    }

    pub fn by_name_fragment(fragment: &str) -> Self {
        Self {
            filter: MenuItemFilter::NameContains(fragment.to_string()),
            order: MenuItemOrder::Name,
        }
    }

    pub fn search(term: &str, exact_match: bool) -> Self {
        let term = fold_case(term);
        let filter = if exact_match {
            MenuItemFilter::TextEquals(term)
        } else {
            MenuItemFilter::TextContains(term)
        };
        Self {
            filter,
            order: MenuItemOrder::NameThenCategory,
        }
    }

    /// In-process evaluation of the filter.
    pub fn matches(&self, item: &MenuItem) -> bool {
        match &self.filter {
            MenuItemFilter::All => true,
            MenuItemFilter::CategoryEquals(needle) => fold_case(&item.category) == *needle,
            MenuItemFilter::DietaryTagEquals(needle) => fold_case(&item.dietary_tag) == *needle,
            MenuItemFilter::NameContains(needle) => item.name.contains(needle.as_str()),
            MenuItemFilter::TextEquals(needle) => {
                fold_case(&item.name) == *needle || fold_case(&item.description) == *needle
            }
            MenuItemFilter::TextContains(needle) => {
                fold_case(&item.name).contains(needle.as_str())
                    || fold_case(&item.description).contains(needle.as_str())
                    || fold_case(&item.category).contains(needle.as_str())
            }
        }
    }

    /// In-process evaluation of the ordering.
    pub fn compare(&self, a: &MenuItem, b: &MenuItem) -> Ordering {
        let primary = match self.order {
            MenuItemOrder::CategoryThenName => {
                a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name))
            }
            MenuItemOrder::Name => a.name.cmp(&b.name),
            MenuItemOrder::NameThenCategory => {
                a.name.cmp(&b.name).then_with(|| a.category.cmp(&b.category))
            }
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}
