// LibreNMS v0 HTTP client
//
// Wraps `reqwest::Client` with API-root URL construction and response
// decoding. Endpoint modules (devices, ports) are implemented as
// inherent methods in separate files to keep this module focused on
// transport mechanics.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the LibreNMS v0 API.
///
/// The API token rides as a default `X-Auth-Token` header on every
/// request; responses are decoded from their raw body so
/// deserialization failures can carry the payload for debugging.
pub struct LnmsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl LnmsClient {
    /// Create a client for the monitoring host at `base_url`.
    ///
    /// `base_url` is the host root including scheme (e.g.
    /// `https://librenms.example.net`); the `/api/v0` prefix is appended
    /// per request.
    pub fn new(
        base_url: Url,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut value = HeaderValue::from_str(token.expose_secret())
            .map_err(|e| Error::InvalidToken(e.to_string()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("X-Auth-Token", value);

        let http = transport.build_client(headers)?;
        Ok(Self { http, base_url })
    }

    /// The monitoring host base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL under the v0 API root: `{base}/api/v0/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/api/v0/{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the response body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        self.decode(resp).await
    }

    /// Send a PATCH request with a JSON body and decode the response.
    pub(crate) async fn patch<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        debug!("PATCH {}", url);

        let resp = self
            .http
            .patch(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.decode(resp).await
    }

    /// Decode a response body, mapping HTTP 401/404 before parsing.
    async fn decode<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                url: resp.url().to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// Check a response envelope, returning `Error::Api` when the API
    /// reported `status != "ok"`.
    pub(crate) fn check_envelope(status: &str, message: Option<String>) -> Result<(), Error> {
        if status == "ok" {
            Ok(())
        } else {
            Err(Error::Api {
                message: message.unwrap_or_else(|| format!("status={status}")),
            })
        }
    }
}
