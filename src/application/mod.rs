//! Application layer orchestrating BR Code generation.
//!
//! This module defines the `PayloadBuilder`, the single entry point that
//! turns a validated `PaymentRequest` into the final "Copia e Cola" string.

pub mod builder;
