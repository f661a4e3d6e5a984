//! Gateway client

use crate::{
    config::GatewayConfig,
    transport::{HttpClient, HttpMethod, HttpRequest},
    types::*,
    wire::{build_request_payload, parse_account_information_response},
    Error, Result,
};
use bytes::Bytes;
use tracing::{debug, instrument, warn};

/// United Bank gateway client
///
/// Holds the configuration and transport; every call is independent, so a
/// single client can be shared across tasks when the transport allows it.
pub struct Client<C, H> {
    config: C,
    http: H,
}

impl<C, H> Client<C, H>
where
    C: GatewayConfig,
    H: HttpClient,
{
    /// Create new client
    pub fn new(config: C, http: H) -> Self {
        Self { config, http }
    }

    /// Configuration in use
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Look up the destination account of a transaction
    ///
    /// A business rejection is returned as `Ok` with the error fields set;
    /// check [`AccountInformationResponse::is_error`].
    #[instrument(skip_all, fields(routing_tag = %transaction.routing_tag()))]
    pub async fn fetch_account_information_for_transaction<T>(
        &self,
        transaction: &T,
    ) -> Result<AccountInformationResponse>
    where
        T: Transaction + ?Sized,
    {
        let envelope = build_request_payload(transaction, &self.config);

        let mut headers = envelope.headers.clone();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));

        let request = HttpRequest {
            method: HttpMethod::Post,
            url: envelope.url.clone(),
            headers,
            body: Some(Bytes::from(envelope.body_json()?)),
        };

        debug!(url = %request.url, "Sending account information request");
        let response = self.http.request(request).await?;

        if response.status != 200 {
            warn!(status = response.status, "Gateway returned non-200 status");
            return Err(Error::Transport {
                status_code: response.status,
                body: response.body,
            });
        }

        let parsed = parse_account_information_response(&response.body)?;
        if let Some((code, description)) = parsed.business_error() {
            debug!(error_code = code, error_description = description, "Gateway rejected lookup");
        }

        Ok(parsed)
    }
}
