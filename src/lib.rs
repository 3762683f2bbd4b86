pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;

pub use application::builder::{PayloadBuilder, compute_checksum, generate};
pub use domain::amount::Amount;
pub use domain::request::PaymentRequest;
pub use error::{PixError, Result, ValidationError};
