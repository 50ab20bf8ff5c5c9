//! HTTP menu service client
//!
//! Both endpoints take a JSON POST body and a bearer token and answer with
//! a JSON array. Requests run on a private current-thread runtime so the
//! port stays synchronous for callers.

use std::time::Duration;

use bytes::Bytes;
use http::{Request, StatusCode};
use http_body_util::{BodyExt, Full};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ApiConfig;
use crate::domain::entities::{MenuDescriptor, PackageEntry};
use crate::domain::ports::{ApiError, ApiResult, MenuApi};
use crate::error::NavResult;

const USER_AGENT: &str = concat!("portal-nav/", env!("CARGO_PKG_VERSION"));

pub struct HttpMenuApi {
    packages_url: String,
    menu_url: String,
    timeout: Duration,
    client: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    runtime: tokio::runtime::Runtime,
}

impl HttpMenuApi {
    pub fn new(config: &ApiConfig) -> NavResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(https);

        Ok(Self {
            packages_url: config.packages_url(),
            menu_url: config.menu_url(),
            timeout: Duration::from_secs(config.timeout_secs),
            client,
            runtime,
        })
    }

    fn post_json<T>(&self, url: &str, token: &str, body: serde_json::Value) -> ApiResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let body_bytes = serde_json::to_vec(&body).map_err(|e| ApiError::InvalidRequest {
            message: e.to_string(),
        })?;

        let request = Request::builder()
            .method("POST")
            .uri(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("Authorization", format!("Bearer {token}"))
            .body(Full::new(Bytes::from(body_bytes)))
            .map_err(|e| ApiError::InvalidRequest {
                message: e.to_string(),
            })?;

        debug!(url = %url, "posting to menu service");

        let exchange = async {
            let response = self.client.request(request).await.map_err(
                |e: hyper_util::client::legacy::Error| ApiError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                },
            )?;

            let status = response.status();
            if let Some(err) = status_error(url, status) {
                return Err(err);
            }

            let collected = response
                .into_body()
                .collect()
                .await
                .map_err(|e| ApiError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok::<Bytes, ApiError>(collected.to_bytes())
        };

        let bytes = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, exchange).await })
            .map_err(|_| ApiError::Timeout {
                url: url.to_string(),
                secs: self.timeout.as_secs(),
            })??;

        debug!(url = %url, bytes = bytes.len(), "menu service responded");
        decode_array(url, &bytes)
    }
}

impl MenuApi for HttpMenuApi {
    fn fetch_packages(&self, token: &str, product: &str) -> ApiResult<Vec<PackageEntry>> {
        self.post_json(
            &self.packages_url,
            token,
            serde_json::json!({ "product_name": product }),
        )
    }

    fn fetch_menu(
        &self,
        token: &str,
        product: &str,
        package: &str,
    ) -> ApiResult<Vec<MenuDescriptor>> {
        self.post_json(
            &self.menu_url,
            token,
            serde_json::json!({ "product_name": product, "package_name": package }),
        )
    }
}

/// Map a non-success status to its error
fn status_error(url: &str, status: StatusCode) -> Option<ApiError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Some(ApiError::Unauthorized {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    if !status.is_success() {
        return Some(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    None
}

/// Decode a JSON body; `null` decodes as the empty value
fn decode_array<T>(source_name: &str, bytes: &[u8]) -> ApiResult<T>
where
    T: DeserializeOwned + Default,
{
    serde_json::from_slice::<Option<T>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
}
