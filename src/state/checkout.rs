/// Checkout form validation and the resulting order

use chrono::{DateTime, Local};
use thiserror::Error;

use super::data::LineItem;

/// Why a checkout was refused. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Please fill in name, address and phone.")]
    MissingContactDetails,
    #[error("Cart is empty.")]
    EmptyCart,
}

/// Raw contents of the checkout form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl CheckoutForm {
    /// Trimmed contact details, or an error if any field is blank
    pub fn validate(&self) -> Result<ContactDetails, CheckoutError> {
        let name = self.name.trim();
        let address = self.address.trim();
        let phone = self.phone.trim();

        if name.is_empty() || address.is_empty() || phone.is_empty() {
            return Err(CheckoutError::MissingContactDetails);
        }

        Ok(ContactDetails {
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// A simulated order. Nothing is sent anywhere.
#[derive(Debug, Clone)]
pub struct Order {
    pub customer: ContactDetails,
    pub items: Vec<LineItem>,
    pub total: f64,
    pub placed_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, address: &str, phone: &str) -> CheckoutForm {
        CheckoutForm {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    #[test]
    fn test_validate_trims() {
        let details = form("  Asha ", "12 MG Road\n", " 98450 00000").validate().unwrap();
        assert_eq!(details.name, "Asha");
        assert_eq!(details.address, "12 MG Road");
        assert_eq!(details.phone, "98450 00000");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        for bad in [
            form("", "addr", "123"),
            form("Asha", "   ", "123"),
            form("Asha", "addr", "\t"),
            CheckoutForm::default(),
        ] {
            assert_eq!(bad.validate(), Err(CheckoutError::MissingContactDetails));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CheckoutError::MissingContactDetails.to_string(),
            "Please fill in name, address and phone."
        );
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Cart is empty.");
    }
}
