//! Domain types and the capability contracts the checkout workflow depends on.

pub mod order;
pub mod outcome;
pub mod ports;
