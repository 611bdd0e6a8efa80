//! Ingredient string parsing.
//!
//! A recipe's ingredients are stored as one string of `name:quantity`
//! pairs separated by `|`. Parsing is lossy: a segment that does not split
//! into exactly two parts on `:` is dropped rather than reported as an
//! error. A quantity that itself contains `:` therefore drops the whole
//! pair.

use serde::Serialize;

/// Separator between ingredient pairs.
pub const PAIR_SEPARATOR: char = '|';

/// Separator between an ingredient's name and its quantity.
pub const FIELD_SEPARATOR: char = ':';

/// One parsed ingredient. Both fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

/// A non-blank segment that was dropped because it did not split into
/// exactly two parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedSegment {
    /// Zero-based position of the segment among all `|`-separated segments.
    pub index: usize,
    /// The segment as it appeared in the input, untrimmed.
    pub segment: String,
    /// How many parts the `:` split produced.
    pub parts: usize,
}

/// Result of parsing with a report of what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngredientList {
    pub ingredients: Vec<Ingredient>,
    pub dropped: Vec<DroppedSegment>,
}

impl IngredientList {
    /// True if every non-blank segment produced an ingredient.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// Parse an ingredient string into ordered `(name, quantity)` pairs.
///
/// Blank segments are skipped and malformed segments are silently dropped.
///
/// ```
/// use receiptkins_core::parse_ingredients;
///
/// let parsed = parse_ingredients("flour:200g|sugar:100g");
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed[0].name, "flour");
/// assert_eq!(parsed[1].quantity, "100g");
/// ```
pub fn parse_ingredients(raw: &str) -> Vec<Ingredient> {
    parse_ingredients_with_report(raw).ingredients
}

/// Parse an ingredient string, also returning the segments that were dropped.
///
/// The `ingredients` field is identical to what [`parse_ingredients`]
/// returns. Blank segments are skipped and do not appear in `dropped`.
pub fn parse_ingredients_with_report(raw: &str) -> IngredientList {
    let mut list = IngredientList::default();

    for (index, segment) in raw.split(PAIR_SEPARATOR).enumerate() {
        if segment.trim().is_empty() {
            continue;
        }

        let parts: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
        if let [name, quantity] = parts.as_slice() {
            list.ingredients.push(Ingredient {
                name: name.trim().to_string(),
                quantity: quantity.trim().to_string(),
            });
        } else {
            list.dropped.push(DroppedSegment {
                index,
                segment: segment.to_string(),
                parts: parts.len(),
            });
        }
    }

    list
}
