use std::borrow::Cow;

use super::quantity::Purchase;
use crate::domain::Ingredient;

/// True when the stored name already reads as a plural ("Greens").
///
/// Any name ending in a lowercase `s` counts; no other English rules apply.
pub fn is_already_plural(name: &str) -> bool {
    name.ends_with('s')
}

/// Name used wherever more than one piece is meant.
pub fn plural_name(name: &str) -> Cow<'_, str> {
    if is_already_plural(name) {
        // "Greens" stays "Greens"
        Cow::Borrowed(name)
    } else {
        // "Carrot" becomes "Carrots"
        Cow::Owned(format!("{}s", name))
    }
}

/// Sentence reporting what to buy.
pub fn format_purchase(ingredient: &Ingredient, purchase: Purchase) -> String {
    match purchase {
        Purchase::Weight { pounds, ounces } => {
            format!("You need {} lbs {} oz of {}!", pounds, ounces, ingredient.name)
        }
        Purchase::Count(amount) => {
            format!("Y'all need {} {}!", amount, plural_name(&ingredient.name))
        }
    }
}
