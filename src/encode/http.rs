use std::time::Duration;

use crate::{
    encode::request::{EncodeResponse, EncodeTransport, FormPart, PartBody},
    foundation::error::{FramecastError, FramecastResult},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Blocking HTTP implementation of [`EncodeTransport`].
///
/// Posts the multipart submission to `<base_url>/videos` with bearer
/// authentication. Non-success responses surface the API error body's
/// `message` field when present, otherwise the HTTP status. No retries.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl HttpTransport {
    /// Create a transport for the service at `base_url` authenticating with
    /// `token`, using the default request timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> FramecastResult<Self> {
        Self::with_timeout(base_url, token, DEFAULT_TIMEOUT)
    }

    /// Create a transport with a custom request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> FramecastResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                FramecastError::transport(format!("could not build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// The normalized base URL this transport posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn form_from_parts(
        parts: Vec<FormPart>,
    ) -> FramecastResult<reqwest::blocking::multipart::Form> {
        let mut form = reqwest::blocking::multipart::Form::new();
        for part in parts {
            form = match part.body {
                PartBody::Text(value) => form.text(part.name, value),
                PartBody::File(path) => form.file(part.name, &path).map_err(|e| {
                    FramecastError::transport(format!(
                        "could not read media file '{}': {e}",
                        path.display()
                    ))
                })?,
                PartBody::Bytes { file_name, data } => form.part(
                    part.name,
                    reqwest::blocking::multipart::Part::bytes(data).file_name(file_name),
                ),
            };
        }
        Ok(form)
    }
}

impl EncodeTransport for HttpTransport {
    fn submit(&self, parts: Vec<FormPart>) -> FramecastResult<EncodeResponse> {
        let form = Self::form_from_parts(parts)?;
        let url = format!("{}/videos", self.base_url);
        tracing::debug!(%url, "submitting encode request");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .map_err(|e| FramecastError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(FramecastError::transport(message));
        }
        response.json::<EncodeResponse>().map_err(|e| {
            FramecastError::serde(format!("encode response did not deserialize: {e}"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/http.rs"]
mod tests;
