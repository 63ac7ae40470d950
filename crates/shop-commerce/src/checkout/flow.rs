//! Checkout submission state machine.
//!
//! `Idle -> Submitting -> (Confirmed | Failed) -> Idle`. The terminal
//! outcome is kept on the submitter so the view can show it, but the phase
//! returns to `Idle` immediately so the user can retry.

use crate::cart::Cart;
use crate::checkout::{CheckoutRequest, CheckoutResponse};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notice shown when an order fails.
pub const FAILURE_NOTICE: &str = "Checkout failed. Please try again.";

/// Whether a checkout request is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Submitting,
}

impl CheckoutPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutPhase::Idle => "idle",
            CheckoutPhase::Submitting => "submitting",
        }
    }
}

/// How a submitted checkout ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    /// The backend accepted the order; the cart has been cleared.
    Confirmed { amount: Money },
    /// The request failed; the cart is untouched.
    Failed { reason: String },
}

impl CheckoutOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, CheckoutOutcome::Confirmed { .. })
    }

    /// User-facing notice text.
    pub fn notice(&self) -> String {
        match self {
            CheckoutOutcome::Confirmed { amount } => {
                format!("Order confirmed. Amount: {}", amount.display())
            }
            CheckoutOutcome::Failed { .. } => FAILURE_NOTICE.to_string(),
        }
    }
}

impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notice())
    }
}

/// Drives a single checkout round trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutSubmitter {
    phase: CheckoutPhase,
    last_outcome: Option<CheckoutOutcome>,
}

impl CheckoutSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == CheckoutPhase::Submitting
    }

    /// Outcome of the most recent finished submission.
    pub fn last_outcome(&self) -> Option<&CheckoutOutcome> {
        self.last_outcome.as_ref()
    }

    /// Whether a checkout would currently be accepted for `cart`.
    pub fn can_submit(&self, cart: &Cart) -> bool {
        self.phase == CheckoutPhase::Idle && !cart.is_empty()
    }

    /// Start a checkout, producing the request to send.
    ///
    /// Rejected (and nothing should be sent) when the cart is empty or a
    /// request is already outstanding.
    pub fn begin(
        &mut self,
        cart: &Cart,
        email: Option<String>,
    ) -> Result<CheckoutRequest, CommerceError> {
        if self.phase == CheckoutPhase::Submitting {
            return Err(CommerceError::CheckoutInProgress);
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        self.phase = CheckoutPhase::Submitting;
        self.last_outcome = None;
        Ok(CheckoutRequest::from_cart(cart, email))
    }

    /// Apply the backend's answer.
    ///
    /// On success the cart is cleared; on failure it is left as it was.
    /// Either way the phase returns to `Idle`.
    pub fn finish<E: fmt::Display>(
        &mut self,
        result: Result<CheckoutResponse, E>,
        cart: &mut Cart,
    ) -> Result<CheckoutOutcome, CommerceError> {
        if self.phase != CheckoutPhase::Submitting {
            return Err(CommerceError::NoCheckoutInProgress);
        }

        let outcome = match result {
            Ok(response) => {
                cart.clear();
                CheckoutOutcome::Confirmed {
                    amount: response.amount(),
                }
            }
            Err(e) => CheckoutOutcome::Failed {
                reason: e.to_string(),
            },
        };

        self.phase = CheckoutPhase::Idle;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product::new("a", "A", Money::from_cents(999)));
        cart.add_item(&Product::new("b", "B", Money::from_cents(450)));
        cart
    }

    #[test]
    fn test_empty_cart_rejected() {
        let mut submitter = CheckoutSubmitter::new();
        let err = submitter.begin(&Cart::new(), None).unwrap_err();
        assert_eq!(err, CommerceError::EmptyCart);
        assert_eq!(submitter.phase(), CheckoutPhase::Idle);
    }

    #[test]
    fn test_double_submit_rejected() {
        let cart = filled_cart();
        let mut submitter = CheckoutSubmitter::new();
        submitter.begin(&cart, None).unwrap();
        assert!(submitter.is_submitting());
        assert!(!submitter.can_submit(&cart));

        assert_eq!(
            submitter.begin(&cart, None).unwrap_err(),
            CommerceError::CheckoutInProgress
        );
    }

    #[test]
    fn test_success_clears_cart() {
        let mut cart = filled_cart();
        let mut submitter = CheckoutSubmitter::new();
        let request = submitter.begin(&cart, None).unwrap();
        assert_eq!(request.items.len(), 2);

        let outcome = submitter
            .finish::<String>(Ok(CheckoutResponse::new(Money::from_cents(1449))), &mut cart)
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(submitter.phase(), CheckoutPhase::Idle);
        assert_eq!(outcome.notice(), "Order confirmed. Amount: $14.49");
        assert_eq!(submitter.last_outcome(), Some(&outcome));
    }

    #[test]
    fn test_failure_preserves_cart() {
        let mut cart = filled_cart();
        let before = cart.clone();
        let mut submitter = CheckoutSubmitter::new();
        submitter.begin(&cart, None).unwrap();

        let outcome = submitter
            .finish(Err("HTTP 500"), &mut cart)
            .unwrap();

        assert_eq!(cart, before);
        assert_eq!(submitter.phase(), CheckoutPhase::Idle);
        assert_eq!(outcome.notice(), FAILURE_NOTICE);
        assert!(submitter.can_submit(&cart));
    }

    #[test]
    fn test_finish_without_begin() {
        let mut cart = filled_cart();
        let mut submitter = CheckoutSubmitter::new();
        assert_eq!(
            submitter.finish::<String>(Ok(CheckoutResponse::default()), &mut cart),
            Err(CommerceError::NoCheckoutInProgress)
        );
        assert!(!cart.is_empty());
    }
}
