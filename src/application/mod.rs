//! Application layer orchestrating the checkout workflow.
//!
//! This module defines the `CheckoutCoordinator`, which sequences the injected
//! payment and notification capabilities without knowing which concrete
//! variants it was given.

pub mod checkout;
