//! Purchase quantity calculation.
//!
//! Pure functions only: the menu gathers the numbers, this module turns them
//! into an amount to buy and the sentence that reports it.

pub mod quantity;
pub mod wording;

pub use quantity::{purchase_amount, CalcError, PurchaseRequest, Purchase, YieldModel, MAX_QUANTITY};
pub use wording::{format_purchase, is_already_plural, plural_name};

use crate::domain::Ingredient;

/// Compute and phrase the purchase for one ingredient.
pub fn describe_purchase(
    ingredient: &Ingredient,
    request: PurchaseRequest,
    model: YieldModel,
) -> Result<String, CalcError> {
    let purchase = purchase_amount(ingredient, request, model)?;
    Ok(format_purchase(ingredient, purchase))
}
