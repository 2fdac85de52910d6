//! Keyword-based transaction categorization
//!
//! Maps a free-text description to a category label by scanning a fixed,
//! ordered keyword table. The first keyword found as a substring of the
//! lowercased description wins, so earlier table entries take priority over
//! later ones. Matching is substring containment, not whole-word matching:
//! "burgers" matches "burger".

/// Fallback category when no keyword matches
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Ordered keyword table. Iteration order is load-bearing: the first match
/// in declaration order decides the category, so this must stay a literal
/// sequence, never an unordered map.
const KEYWORD_TABLE: &[(&str, &str)] = &[
    ("food", "Food"),
    ("burger", "Food"),
    ("pizza", "Food"),
    ("kebab", "Food"),
    ("uber", "Transport"),
    ("taxi", "Transport"),
    ("bus", "Transport"),
    ("clothes", "Shopping"),
    ("shirt", "Shopping"),
    ("shoes", "Shopping"),
    ("rent", "Housing"),
    ("water", "Housing"),
    ("electricity", "Housing"),
    ("internet", "Housing"),
    ("movie", "Entertainment"),
    ("game", "Entertainment"),
    ("salary", "Income"),
    ("bonus", "Income"),
    ("paycheck", "Income"),
];

/// Assign a category to a transaction description
///
/// Pure function of its input and the static keyword table. Returns
/// [`UNCATEGORIZED`] when no keyword matches, including for empty or
/// whitespace-only descriptions.
pub fn categorize(description: &str) -> &'static str {
    let text = description.to_lowercase();

    for &(keyword, category) in KEYWORD_TABLE {
        if text.contains(keyword) {
            return category;
        }
    }

    UNCATEGORIZED
}
