//! Shared types for the gateway adapter

use serde::{Deserialize, Serialize};

/// Transaction data the wire mapper reads for one outbound call
pub trait Transaction: Send + Sync {
    /// BIC of the originating bank
    fn source_swift_code(&self) -> &str;

    /// Beneficiary account number
    fn destination_account_number(&self) -> &str;

    /// BIC of the beneficiary bank
    fn destination_swift_code(&self) -> &str;

    /// Gateway routing tag, passed through verbatim
    fn routing_tag(&self) -> &str;
}

/// Plain transaction value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTransaction {
    /// Source BIC
    pub source_swift_code: String,
    /// Destination account number
    pub destination_account_number: String,
    /// Destination BIC
    pub destination_swift_code: String,
    /// Routing tag
    pub routing_tag: String,
}

impl AccountTransaction {
    /// Create new transaction
    pub fn new(
        source_swift_code: impl Into<String>,
        destination_account_number: impl Into<String>,
        destination_swift_code: impl Into<String>,
        routing_tag: impl Into<String>,
    ) -> Self {
        Self {
            source_swift_code: source_swift_code.into(),
            destination_account_number: destination_account_number.into(),
            destination_swift_code: destination_swift_code.into(),
            routing_tag: routing_tag.into(),
        }
    }
}

impl Transaction for AccountTransaction {
    fn source_swift_code(&self) -> &str {
        &self.source_swift_code
    }

    fn destination_account_number(&self) -> &str {
        &self.destination_account_number
    }

    fn destination_swift_code(&self) -> &str {
        &self.destination_swift_code
    }

    fn routing_tag(&self) -> &str {
        &self.routing_tag
    }
}

/// Result of an account-information lookup
///
/// Either the success fields or the error fields are populated, never both.
/// A populated `error_code`/`error_description` is a business error the
/// gateway reported with HTTP 200.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInformationResponse {
    /// Gateway (hub) transaction id
    pub hs_transaction_id: Option<String>,
    /// United Bank transaction id
    pub uba_transaction_id: Option<String>,
    /// Human-readable outcome, e.g. "Name Enquiry successful"
    pub response_message: Option<String>,
    /// Currency of the account balance
    pub balance_currency: Option<String>,
    /// Gateway response code, e.g. "000"
    pub response_code: Option<String>,
    /// Account holder name
    pub account_name: Option<String>,
    /// Business error code
    pub error_code: Option<String>,
    /// Business error description
    pub error_description: Option<String>,
}

impl AccountInformationResponse {
    /// Whether the gateway reported a business error
    pub fn is_error(&self) -> bool {
        self.error_code.is_some() || self.error_description.is_some()
    }

    /// Whether the success branch was parsed
    pub fn is_success(&self) -> bool {
        !self.is_error()
    }

    /// Error code and description, empty strings standing in for absent ones
    pub fn business_error(&self) -> Option<(&str, &str)> {
        if !self.is_error() {
            return None;
        }
        Some((
            self.error_code.as_deref().unwrap_or_default(),
            self.error_description.as_deref().unwrap_or_default(),
        ))
    }
}
