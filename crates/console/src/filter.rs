//! Free-text filtering of list rows.

use std::borrow::Cow;

use eduspot_directory::Department;

use crate::enrichment::PersonView;

/// A row that can be matched by the list search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;

    /// `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Keep rows where some searchable field contains `query`, ignoring case.
///
/// A blank query borrows `rows` back unchanged.
pub fn filter<'a, T>(rows: &'a [T], query: &str) -> Cow<'a, [T]>
where
    T: Searchable + Clone,
{
    let query = query.trim();
    if query.is_empty() {
        return Cow::Borrowed(rows);
    }

    let needle = query.to_lowercase();
    Cow::Owned(rows.iter().filter(|r| r.matches(&needle)).cloned().collect())
}

impl Searchable for Department {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.code.as_str()]
    }
}

impl Searchable for PersonView {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.first_name.as_str(), self.last_name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn departments() -> Vec<Department> {
        vec![
            Department::new("dept-1", "Information Technology", "IT", "Networks"),
            Department::new("dept-2", "Business Administration", "BBA", "Management"),
            Department::new("dept-3", "Biotechnology", "BIO", "Life sciences"),
        ]
    }

    fn codes(rows: &[Department]) -> Vec<&str> {
        rows.iter().map(|d| d.code.as_str()).collect()
    }

    #[test]
    fn blank_query_borrows_input() {
        let rows = departments();
        for query in ["", "   ", "\t"] {
            let out = filter(&rows, query);
            assert!(matches!(out, Cow::Borrowed(_)));
            assert_eq!(out.as_ref(), rows.as_slice());
        }
    }

    #[test]
    fn matches_any_searchable_field_ignoring_case() {
        let rows = departments();
        assert_eq!(codes(&filter(&rows, "bio")), vec!["BIO"]);
        assert_eq!(codes(&filter(&rows, "DEPT-2")), vec!["BBA"]);
        assert_eq!(codes(&filter(&rows, "tech")), vec!["IT", "BIO"]);
    }

    #[test]
    fn description_is_not_searchable() {
        assert!(filter(&departments(), "networks").is_empty());
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        assert_eq!(codes(&filter(&departments(), "  bba ")), vec!["BBA"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        /// Property: the output is exactly the in-order subsequence of rows
        /// with a field containing the query, case-insensitively.
        #[test]
        fn filter_is_an_ordered_case_insensitive_subsequence(
            names in prop::collection::vec("[A-Za-z]{1,8}", 0..10),
            query in "[A-Za-z]{1,3}",
        ) {
            let rows: Vec<Department> = names
                .iter()
                .enumerate()
                .map(|(i, n)| Department::new(format!("d{i}"), n.clone(), "C", ""))
                .collect();

            let out = filter(&rows, &query);
            let needle = query.to_lowercase();
            let expected: Vec<Department> = rows
                .iter()
                .filter(|d| {
                    d.id.as_str().to_lowercase().contains(&needle)
                        || d.name.to_lowercase().contains(&needle)
                        || d.code.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            prop_assert_eq!(out.into_owned(), expected);
        }
    }
}
