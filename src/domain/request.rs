use super::amount::Amount;
use super::fields::{MAX_CITY_LEN, MAX_NAME_LEN, NO_REFERENCE};
use crate::error::ValidationError;

/// The input of a static Pix code.
///
/// Name and city are validated and upper-cased in [`PaymentRequest::new`];
/// the remaining fields are accepted as given. A request never changes once
/// built, the `with_*` methods consume and return it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    payee_key: String,
    payee_name: String,
    payee_city: String,
    amount: Option<Amount>,
    description: Option<String>,
    reference_id: Option<String>,
}

impl PaymentRequest {
    /// Creates a request, failing when the upper-cased name or city is longer
    /// than the BR Code allows. Lengths are counted in UTF-8 bytes, the same
    /// unit the encoded field length uses.
    pub fn new(
        payee_key: impl Into<String>,
        payee_name: &str,
        payee_city: &str,
    ) -> Result<Self, ValidationError> {
        let payee_name = payee_name.to_uppercase();
        if payee_name.len() > MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                len: payee_name.len(),
                max: MAX_NAME_LEN,
            });
        }

        let payee_city = payee_city.to_uppercase();
        if payee_city.len() > MAX_CITY_LEN {
            return Err(ValidationError::CityTooLong {
                len: payee_city.len(),
                max: MAX_CITY_LEN,
            });
        }

        Ok(Self {
            payee_key: payee_key.into(),
            payee_name,
            payee_city,
            amount: None,
            description: None,
            reference_id: None,
        })
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// An empty description is treated as absent.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = (!description.is_empty()).then_some(description);
        self
    }

    /// An empty reference id is treated as absent.
    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        let reference_id = reference_id.into();
        self.reference_id = (!reference_id.is_empty()).then_some(reference_id);
        self
    }

    pub fn payee_key(&self) -> &str {
        &self.payee_key
    }

    pub fn payee_name(&self) -> &str {
        &self.payee_name
    }

    pub fn payee_city(&self) -> &str {
        &self.payee_city
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The reference label, `***` when none was given.
    pub fn reference_id(&self) -> &str {
        self.reference_id.as_deref().unwrap_or(NO_REFERENCE)
    }
}
