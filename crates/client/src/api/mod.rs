//! Requests to the first party server

use std::{any::type_name, fmt::Debug};

use http::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use mime::APPLICATION_JSON;
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    api::error::{ErrorResponse, ResultContext},
    model::ValidateModel,
};
use tracing::debug;

use crate::ClientError;

mod ping;
pub use ping::*;

mod workout;
pub use workout::*;

mod guidance;
pub use guidance::*;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Perform a json request
    ///
    /// If the body is provided it is validated using ValidateModel before
    /// sending. If this isn't desired, wrap it in NoValidation
    ///
    /// Error responses are expected to carry an `ErrorResponse` body
    pub async fn json_request<B, R>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ClientError>
    where
        B: Serialize + Debug + ValidateModel,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("json_request({method}, {url}, body type: {})", type_name::<B>());

        // Check the body is valid
        if let Some(body) = body {
            body.validate()?;
        }

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, APPLICATION_JSON.essence_str());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        // Send the request and handle the network errors
        let response = builder
            .send()
            .await
            .map_err(ClientError::from)
            .with_context(|| format!("Sending {body:?} to {method} {url}"))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let is_json = content_type
            .as_deref()
            .map_or(false, |v| v.starts_with(APPLICATION_JSON.essence_str()));
        debug!("json_request::response::is_json: {is_json}");

        let text = response
            .text()
            .await
            .map_err(ClientError::from)
            .with_context(|| format!("Extracting response body from {method} {url}"))?;

        // Handle non-json errors (this isn't to allow the api to return other things,
        // it's only to handle errors)
        if !is_json {
            return Err(ClientError::WrongContentType {
                expected: APPLICATION_JSON.to_string(),
                got: content_type,
                body: text,
            })
            .with_context(|| format!("Response from {method} {url}"));
        }

        // Deserialize the error type
        if !status.is_success() {
            let err = serde_json::from_str::<ErrorResponse>(&text)
                .map_err(ClientError::from)
                .with_context(|| format!("Deserializing error response from {method} {url}"))?;
            return Err(ClientError::Server { status: status.as_u16(), message: err.error });
        }

        let payload = serde_json::from_str::<R>(&text)
            .map_err(ClientError::from)
            .with_context(|| {
                format!("Deserializing OK response ({}) from {method} {url}", type_name::<R>())
            })?;

        debug!("json_request::return Ok::<{}>", type_name::<R>());
        Ok(payload)
    }
}
