//! Checkout module.
//!
//! Contains the order request wire types and the submission state machine.

mod flow;
mod request;

pub use flow::{CheckoutOutcome, CheckoutPhase, CheckoutSubmitter, FAILURE_NOTICE};
pub use request::{CheckoutItem, CheckoutRequest, CheckoutResponse};
