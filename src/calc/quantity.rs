use serde::Deserialize;
use thiserror::Error;

use crate::domain::Ingredient;

/// Ounces in one pound
pub const OUNCES_PER_POUND: u64 = 16;

/// Largest quantity (2^53) that an `f64` still holds exactly
pub const MAX_QUANTITY: u64 = 1 << 53;

/// How edible yield turns a requested quantity into a purchase quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldModel {
    /// `requested * (1 + edible_yield)`, the figures the kitchen sheets were built on
    #[default]
    Legacy,
    /// `requested / edible_yield`
    EdibleFraction,
}

impl YieldModel {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "legacy" => Some(Self::Legacy),
            "edible_fraction" => Some(Self::EdibleFraction),
            _ => None,
        }
    }

    fn apply(&self, requested: f64, edible_yield: f64) -> Option<f64> {
        match self {
            Self::Legacy => Some(requested * (edible_yield + 1.0)),
            Self::EdibleFraction if edible_yield > 0.0 => Some(requested / edible_yield),
            Self::EdibleFraction => None,
        }
    }
}

/// What the cook asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurchaseRequest {
    /// Servings times ounces per serving; for ingredients bought by the pound
    ByWeight { servings: f64, ounces_per_serving: f64 },
    /// A plain number of pieces; no per-serving multiplier
    ByCount { count: u64 },
}

impl PurchaseRequest {
    /// Total requested quantity: ounces for weight, pieces for count
    pub fn requested(&self) -> f64 {
        match *self {
            Self::ByWeight {
                servings,
                ounces_per_serving,
            } => servings * ounces_per_serving,
            Self::ByCount { count } => count as f64,
        }
    }

    pub fn is_by_weight(&self) -> bool {
        matches!(self, Self::ByWeight { .. })
    }
}

/// Amount to buy before trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Weight { pounds: u64, ounces: u64 },
    Count(u64),
}

impl Purchase {
    /// Split a whole number of ounces into pounds and leftover ounces.
    pub fn from_ounces(total_ounces: u64) -> Self {
        Self::Weight {
            pounds: total_ounces / OUNCES_PER_POUND,
            ounces: total_ounces % OUNCES_PER_POUND,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Quantity must be zero or more, got {0}")]
    Negative(f64),

    #[error("Quantity is not a finite number")]
    NotFinite,

    #[error("Quantity is too large to buy, the limit is {}", MAX_QUANTITY)]
    TooLarge,

    #[error("{0} has no edible yield to divide by")]
    ZeroYield(String),

    #[error("{name} is bought {expected}, not {requested}")]
    ModeMismatch {
        name: String,
        expected: &'static str,
        requested: &'static str,
    },
}

fn mode_label(by_weight: bool) -> &'static str {
    if by_weight { "by weight" } else { "by count" }
}

/// Amount that must be bought to end up with the requested quantity.
///
/// The result is rounded half to even, so `2.5` buys 2 and `3.5` buys 4.
pub fn purchase_amount(
    ingredient: &Ingredient,
    request: PurchaseRequest,
    model: YieldModel,
) -> Result<Purchase, CalcError> {
    if request.is_by_weight() != ingredient.by_weight {
        return Err(CalcError::ModeMismatch {
            name: ingredient.name.clone(),
            expected: mode_label(ingredient.by_weight),
            requested: mode_label(request.is_by_weight()),
        });
    }

    if let PurchaseRequest::ByCount { count } = request {
        if count > MAX_QUANTITY {
            return Err(CalcError::TooLarge);
        }
    }

    let requested = request.requested();
    if !requested.is_finite() {
        return Err(CalcError::NotFinite);
    }
    if requested < 0.0 {
        return Err(CalcError::Negative(requested));
    }

    let raw = model
        .apply(requested, ingredient.edible_yield)
        .ok_or_else(|| CalcError::ZeroYield(ingredient.name.clone()))?;
    if !raw.is_finite() {
        return Err(CalcError::NotFinite);
    }
    if raw > MAX_QUANTITY as f64 {
        return Err(CalcError::TooLarge);
    }

    let amount = raw.round_ties_even() as u64;
    Ok(match request {
        PurchaseRequest::ByWeight { .. } => Purchase::from_ounces(amount),
        PurchaseRequest::ByCount { .. } => Purchase::Count(amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_weight(name: &str, edible_yield: f64) -> Ingredient {
        Ingredient::new(name, edible_yield, true)
    }

    fn by_count(name: &str, edible_yield: f64) -> Ingredient {
        Ingredient::new(name, edible_yield, false)
    }

    fn weight(servings: f64, ounces_per_serving: f64) -> PurchaseRequest {
        PurchaseRequest::ByWeight {
            servings,
            ounces_per_serving,
        }
    }

    #[test]
    fn test_chicken_breast_example() {
        // 4 * 6 = 24 oz, 24 * 1.85 = 44.4 -> 44 oz
        let result =
            purchase_amount(&by_weight("Chicken Breast", 0.85), weight(4.0, 6.0), YieldModel::Legacy)
                .unwrap();
        assert_eq!(result, Purchase::Weight { pounds: 2, ounces: 12 });
    }

    #[test]
    fn test_basil_by_count_example() {
        let result = purchase_amount(
            &by_count("Basil", 0.0),
            PurchaseRequest::ByCount { count: 10 },
            YieldModel::Legacy,
        )
        .unwrap();
        assert_eq!(result, Purchase::Count(10));
    }

    #[test]
    fn test_count_has_no_serving_multiplier() {
        let result = purchase_amount(
            &by_count("Lemon", 0.5),
            PurchaseRequest::ByCount { count: 4 },
            YieldModel::Legacy,
        )
        .unwrap();
        assert_eq!(result, Purchase::Count(6));
    }

    #[test]
    fn test_rounds_half_to_even() {
        // 5 * 1.5 = 7.5 -> 8, 3 * 1.5 = 4.5 -> 4
        let lemon = by_count("Lemon", 0.5);
        let odd = purchase_amount(&lemon, PurchaseRequest::ByCount { count: 5 }, YieldModel::Legacy);
        let even = purchase_amount(&lemon, PurchaseRequest::ByCount { count: 3 }, YieldModel::Legacy);
        assert_eq!(odd.unwrap(), Purchase::Count(8));
        assert_eq!(even.unwrap(), Purchase::Count(4));
    }

    #[test]
    fn test_exact_pound() {
        // 2 * 8 = 16 oz at zero waste factor -> 1 lb 0 oz
        let result =
            purchase_amount(&by_weight("Flank Steak", 0.0), weight(2.0, 8.0), YieldModel::Legacy)
                .unwrap();
        assert_eq!(result, Purchase::Weight { pounds: 1, ounces: 0 });
    }

    #[test]
    fn test_ounces_always_below_sixteen() {
        let carrot = by_weight("Carrot", 0.82);
        for servings in 0..40 {
            for oz in [1.0, 2.5, 4.0, 6.0, 9.0] {
                let requested = servings as f64 * oz;
                let expected = (requested * (0.82 + 1.0)).round_ties_even() as u64;
                let result =
                    purchase_amount(&carrot, weight(servings as f64, oz), YieldModel::Legacy).unwrap();
                let Purchase::Weight { pounds, ounces } = result else {
                    panic!("expected a weight");
                };
                assert!(ounces < 16);
                assert_eq!(pounds * 16 + ounces, expected);
            }
        }
    }

    #[test]
    fn test_zero_request() {
        let result = purchase_amount(&by_weight("Leek", 0.52), weight(0.0, 6.0), YieldModel::Legacy);
        assert_eq!(result.unwrap(), Purchase::Weight { pounds: 0, ounces: 0 });
    }

    #[test]
    fn test_negative_request_rejected() {
        let result = purchase_amount(&by_weight("Leek", 0.52), weight(-2.0, 6.0), YieldModel::Legacy);
        assert_eq!(result, Err(CalcError::Negative(-12.0)));
    }

    #[test]
    fn test_nan_request_rejected() {
        let result =
            purchase_amount(&by_weight("Leek", 0.52), weight(f64::NAN, 6.0), YieldModel::Legacy);
        assert_eq!(result, Err(CalcError::NotFinite));
    }

    #[test]
    fn test_count_above_exact_limit() {
        let lemon = by_count("Lemon", 0.5);
        for count in [MAX_QUANTITY + 1, u64::MAX] {
            let result = purchase_amount(&lemon, PurchaseRequest::ByCount { count }, YieldModel::Legacy);
            assert_eq!(result, Err(CalcError::TooLarge));
        }
    }

    #[test]
    fn test_count_at_limit_that_grows_past_it() {
        // The count itself is fine, but 1.5x of it is not
        let result = purchase_amount(
            &by_count("Lemon", 0.5),
            PurchaseRequest::ByCount { count: MAX_QUANTITY },
            YieldModel::Legacy,
        );
        assert_eq!(result, Err(CalcError::TooLarge));
    }

    #[test]
    fn test_huge_weight_request() {
        let result =
            purchase_amount(&by_weight("Carrot", 0.82), weight(1e300, 6.0), YieldModel::Legacy);
        assert_eq!(result, Err(CalcError::TooLarge));
    }

    #[test]
    fn test_large_count_stays_exact() {
        // 2^52 pieces at zero waste factor come back unchanged
        let count = 1u64 << 52;
        let result = purchase_amount(
            &by_count("Basil", 0.0),
            PurchaseRequest::ByCount { count },
            YieldModel::Legacy,
        );
        assert_eq!(result, Ok(Purchase::Count(count)));
    }

    #[test]
    fn test_mode_mismatch() {
        let result = purchase_amount(
            &by_weight("Carrot", 0.82),
            PurchaseRequest::ByCount { count: 3 },
            YieldModel::Legacy,
        );
        assert!(matches!(result, Err(CalcError::ModeMismatch { .. })));
    }

    #[test]
    fn test_edible_fraction_model() {
        // 24 oz / 0.75 = 32 oz
        let result = purchase_amount(
            &by_weight("Pork Loin", 0.75),
            weight(4.0, 6.0),
            YieldModel::EdibleFraction,
        )
        .unwrap();
        assert_eq!(result, Purchase::Weight { pounds: 2, ounces: 0 });
    }

    #[test]
    fn test_edible_fraction_zero_yield() {
        let result = purchase_amount(
            &by_count("Basil", 0.0),
            PurchaseRequest::ByCount { count: 10 },
            YieldModel::EdibleFraction,
        );
        assert_eq!(result, Err(CalcError::ZeroYield("Basil".to_string())));
    }

    #[test]
    fn test_yield_model_from_str() {
        assert_eq!(YieldModel::from_str("legacy"), Some(YieldModel::Legacy));
        assert_eq!(YieldModel::from_str(" edible_fraction "), Some(YieldModel::EdibleFraction));
        assert_eq!(YieldModel::from_str("Legacy"), None);
        assert_eq!(YieldModel::default(), YieldModel::Legacy);
    }
}
