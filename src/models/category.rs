//! Built-in category lists
//!
//! Each entry type has its own fixed list, kept in alphabetical order the
//! way the entry form presents them.

use super::entry::EntryType;

pub const EXPENSE_CATEGORIES: [&str; 11] = [
    "AK Expenses",
    "Credit Card",
    "Food",
    "Internet Bill",
    "Loans EMI",
    "Mobile Bill",
    "Movies",
    "Online Shopping",
    "Others",
    "Snacks",
    "Transport",
];

pub const SAVING_CATEGORIES: [&str; 5] = ["FD", "PPF", "RD", "SIP", "Saving Box"];

/// The category list offered for an entry type
pub fn categories_for(entry_type: EntryType) -> &'static [&'static str] {
    match entry_type {
        EntryType::Expense => &EXPENSE_CATEGORIES,
        EntryType::Saving => &SAVING_CATEGORIES,
    }
}

/// Find the canonical spelling of a category, ignoring ASCII case
pub fn find_category(entry_type: EntryType, name: &str) -> Option<&'static str> {
    let name = name.trim();
    categories_for(entry_type)
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_sorted() {
        for list in [&EXPENSE_CATEGORIES[..], &SAVING_CATEGORIES[..]] {
            let mut sorted = list.to_vec();
            sorted.sort();
            assert_eq!(sorted, list);
        }
    }

    #[test]
    fn test_find_category() {
        assert_eq!(find_category(EntryType::Expense, "food"), Some("Food"));
        assert_eq!(find_category(EntryType::Saving, " sip "), Some("SIP"));
        assert_eq!(find_category(EntryType::Saving, "Food"), None);
    }
}
