//! Wire mapping between transactions and the gateway's JSON format
//!
//! The gateway never signals business failures through HTTP status: both
//! outcomes arrive as 200 and are told apart by which keys the body carries.
//!
//! ```text
//! success:  {"hsTransactionId", "UBATransactionId", "accountInformation": {...}}
//! rejected: {"ErrorCode", "ErrorDescription"}
//! ```

use crate::{config::GatewayConfig, types::*, Error, Result, ACCOUNT_INFORMATION_PATH};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fully assembled outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    /// Endpoint URL
    pub url: String,
    /// Headers in send order
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: AccountInformationRequest,
}

impl RequestEnvelope {
    /// Encode the body as JSON
    pub fn body_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.body)?)
    }
}

/// Account-information request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInformationRequest {
    /// Credentials block
    #[serde(rename = "Security")]
    pub security: Security,
    /// `bic=<source swift code>`
    pub source_uri: String,
    /// `ban:<account number>;bic=<destination swift code>`
    pub destination_uri: String,
    /// Routing tag
    pub routing_tag: String,
    /// Vendor identification
    pub vendor_specific_fields: VendorSpecificFields,
}

/// Credentials block of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Security {
    /// Gateway login
    pub login: String,
    /// Gateway password
    #[serde(rename = "Password")]
    pub password: String,
}

/// Vendor-specific fields of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VendorSpecificFields {
    /// Client id
    pub client_id: String,
    /// Client name
    pub client_name: String,
}

/// Build the account-information request for a transaction
pub fn build_request_payload<T, C>(transaction: &T, config: &C) -> RequestEnvelope
where
    T: Transaction + ?Sized,
    C: GatewayConfig + ?Sized,
{
    let body = AccountInformationRequest {
        security: Security {
            login: config.username().to_string(),
            password: config.password().to_string(),
        },
        source_uri: format!("bic={}", transaction.source_swift_code()),
        destination_uri: format!(
            "ban:{};bic={}",
            transaction.destination_account_number(),
            transaction.destination_swift_code()
        ),
        routing_tag: transaction.routing_tag().to_string(),
        vendor_specific_fields: VendorSpecificFields {
            client_id: config.client_id().to_string(),
            client_name: config.client_name().to_string(),
        },
    };

    RequestEnvelope {
        url: endpoint_url(config.url(), ACCOUNT_INFORMATION_PATH),
        headers: vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), format!("Bearer {}", config.token())),
        ],
        body,
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') {
        format!("{}{}", base_url, path)
    } else {
        format!("{}/{}", base_url, path)
    }
}

#[derive(Debug, Deserialize)]
struct SuccessBody {
    #[serde(rename = "hsTransactionId", default, deserialize_with = "lenient_string")]
    hs_transaction_id: Option<String>,
    #[serde(rename = "UBATransactionId", default, deserialize_with = "lenient_string")]
    uba_transaction_id: Option<String>,
    #[serde(rename = "accountInformation")]
    account_information: AccountInformationBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountInformationBody {
    #[serde(default, deserialize_with = "lenient_string")]
    response_message: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    balance_currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    response_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    account_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_string")]
    error_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    error_description: Option<String>,
}

/// Scalars keep their JSON text; null, arrays and objects become `None`.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Interpret a 200 response body from the account-information endpoint
pub fn parse_account_information_response(raw_body: &str) -> Result<AccountInformationResponse> {
    let parse_error = |reason: String| Error::ResponseParse {
        reason,
        body: raw_body.to_string(),
    };

    let value: Value =
        serde_json::from_str(raw_body).map_err(|e| parse_error(format!("invalid JSON: {}", e)))?;

    let Value::Object(fields) = &value else {
        return Err(parse_error("expected a JSON object".to_string()));
    };

    if fields.get("accountInformation").is_some_and(Value::is_object) {
        let success: SuccessBody = serde_json::from_value(value)
            .map_err(|e| parse_error(format!("malformed success body: {}", e)))?;
        let info = success.account_information;

        return Ok(AccountInformationResponse {
            hs_transaction_id: success.hs_transaction_id,
            uba_transaction_id: success.uba_transaction_id,
            response_message: info.response_message,
            balance_currency: info.balance_currency,
            response_code: info.response_code,
            account_name: info.account_name,
            ..Default::default()
        });
    }

    if fields.contains_key("ErrorCode") || fields.contains_key("ErrorDescription") {
        let failure: ErrorBody = serde_json::from_value(value)
            .map_err(|e| parse_error(format!("malformed error body: {}", e)))?;

        if failure.error_code.is_none() && failure.error_description.is_none() {
            return Err(parse_error(
                "ErrorCode/ErrorDescription present but neither is a scalar".to_string(),
            ));
        }

        return Ok(AccountInformationResponse {
            error_code: failure.error_code,
            error_description: failure.error_description,
            ..Default::default()
        });
    }

    Err(parse_error(
        "neither accountInformation nor ErrorCode/ErrorDescription present".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use proptest::prelude::*;

    fn config(base_url: &str) -> Config {
        Config::new(
            base_url,
            "super-secure-token",
            "123445",
            "acme corp.",
            "john",
            "password",
        )
    }

    fn transaction() -> AccountTransaction {
        AccountTransaction::new("56789", "000123", "1234", "route-66")
    }

    #[test]
    fn test_build_request_payload() {
        let envelope = build_request_payload(&transaction(), &config("https://api.example/"));

        assert_eq!(envelope.url, "https://api.example/accountinformation/v1.0");
        assert_eq!(
            envelope.headers,
            vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), "Bearer super-secure-token".to_string()),
            ]
        );

        let body: Value = serde_json::from_slice(&envelope.body_json().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "Security": {"login": "john", "Password": "password"},
                "sourceUri": "bic=56789",
                "destinationUri": "ban:000123;bic=1234",
                "routingTag": "route-66",
                "vendorSpecificFields": {"ClientId": "123445", "ClientName": "acme corp."}
            })
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let envelope = build_request_payload(&transaction(), &config("https://api.example"));
        assert_eq!(envelope.url, "https://api.example/accountinformation/v1.0");
    }

    #[test]
    fn test_empty_fields_pass_through() {
        let envelope = build_request_payload(
            &AccountTransaction::new("", "", "", ""),
            &config("https://api.example/"),
        );
        assert_eq!(envelope.body.source_uri, "bic=");
        assert_eq!(envelope.body.destination_uri, "ban:;bic=");
        assert_eq!(envelope.body.routing_tag, "");
    }

    #[test]
    fn test_parse_success() {
        let response = parse_account_information_response(
            r#"{
                "hsTransactionId": "TPTEST190313021",
                "UBATransactionId": "NGKPYI210203124016234",
                "accountInformation": {
                    "responseMessage": "Name Enquiry successful",
                    "balanceCurrency": "GHS",
                    "responseCode": "000",
                    "accountName": "BENJAMIN K ARTHUR"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(response.hs_transaction_id.as_deref(), Some("TPTEST190313021"));
        assert_eq!(response.uba_transaction_id.as_deref(), Some("NGKPYI210203124016234"));
        assert_eq!(response.response_message.as_deref(), Some("Name Enquiry successful"));
        assert_eq!(response.balance_currency.as_deref(), Some("GHS"));
        assert_eq!(response.response_code.as_deref(), Some("000"));
        assert_eq!(response.account_name.as_deref(), Some("BENJAMIN K ARTHUR"));
        assert_eq!(response.error_code, None);
        assert_eq!(response.error_description, None);
        assert!(response.is_success());
    }

    #[test]
    fn test_parse_business_error() {
        let response = parse_account_information_response(
            r#"{"ErrorCode": "999", "ErrorDescription": "Invalid Credentials"}"#,
        )
        .unwrap();

        assert_eq!(response.error_code.as_deref(), Some("999"));
        assert_eq!(response.error_description.as_deref(), Some("Invalid Credentials"));
        assert_eq!(
            response,
            AccountInformationResponse {
                error_code: Some("999".to_string()),
                error_description: Some("Invalid Credentials".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_parse_tolerates_missing_and_odd_fields() {
        let response = parse_account_information_response(
            r#"{"accountInformation": {"responseCode": 0, "accountName": null, "extra": [1]}}"#,
        )
        .unwrap();

        assert_eq!(response.response_code.as_deref(), Some("0"));
        assert_eq!(response.account_name, None);
        assert_eq!(response.hs_transaction_id, None);
        assert!(response.is_success());

        let response = parse_account_information_response(r#"{"ErrorCode": 999}"#).unwrap();
        assert_eq!(response.error_code.as_deref(), Some("999"));
        assert_eq!(response.error_description, None);
    }

    #[test]
    fn test_parse_rejects_error_keys_without_values() {
        for body in [
            r#"{"ErrorCode": null, "ErrorDescription": null}"#,
            r#"{"ErrorCode": {"code": 1}}"#,
            r#"{"ErrorDescription": []}"#,
        ] {
            match parse_account_information_response(body) {
                Err(Error::ResponseParse { body: raw, .. }) => assert_eq!(raw, body),
                other => panic!("expected ResponseParse for {:?}, got {:?}", body, other),
            }
        }

        let response =
            parse_account_information_response(r#"{"ErrorCode": null, "ErrorDescription": "Locked"}"#)
                .unwrap();
        assert!(response.is_error());
        assert_eq!(response.business_error(), Some(("", "Locked")));
    }

    #[test]
    fn test_parse_rejects_unknown_shapes() {
        for body in ["not json", "[]", "\"ok\"", "{}", r#"{"accountInformation": "n/a"}"#] {
            match parse_account_information_response(body) {
                Err(Error::ResponseParse { body: raw, .. }) => assert_eq!(raw, body),
                other => panic!("expected ResponseParse for {:?}, got {:?}", body, other),
            }
        }
    }

    proptest! {
        #[test]
        fn prop_payload_is_deterministic(
            source in ".*",
            account in ".*",
            destination in ".*",
            tag in ".*",
        ) {
            let tx = AccountTransaction::new(source.clone(), account.clone(), destination.clone(), tag);
            let cfg = config("https://api.example/");

            let first = build_request_payload(&tx, &cfg);
            let second = build_request_payload(&tx, &cfg);
            prop_assert_eq!(first.body_json().unwrap(), second.body_json().unwrap());
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.body.source_uri, format!("bic={}", source));
            prop_assert_eq!(first.body.destination_uri, format!("ban:{};bic={}", account, destination));
        }

        #[test]
        fn prop_branches_never_mix(
            name in "[A-Z ]{0,20}",
            code in "[0-9]{1,3}",
            description in "[a-zA-Z ]{0,20}",
        ) {
            let success = serde_json::json!({
                "hsTransactionId": "HS1",
                "UBATransactionId": "UBA1",
                "accountInformation": {"responseCode": code, "accountName": name},
            });
            let parsed = parse_account_information_response(&success.to_string()).unwrap();
            prop_assert!(parsed.is_success());
            prop_assert!(parsed.error_code.is_none() && parsed.error_description.is_none());

            let failure = serde_json::json!({"ErrorCode": code, "ErrorDescription": description});
            let parsed = parse_account_information_response(&failure.to_string()).unwrap();
            prop_assert!(parsed.is_error());
            prop_assert!(parsed.account_name.is_none() && parsed.response_code.is_none());
            prop_assert!(parsed.hs_transaction_id.is_none() && parsed.uba_transaction_id.is_none());
        }
    }
}
