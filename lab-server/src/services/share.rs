//! Share links and QR images
//!
//! A saved record gets a customer-facing URL. Its QR image is rendered by an
//! external generator; the server only builds the request URL and can proxy
//! the PNG. QR failures never reach the recipe logic.

use std::time::Duration;

use reqwest::Url;
use shared::error::ErrorCode;
use shared::models::ShareLink;

use crate::core::Config;
use crate::utils::{AppError, AppResult};

const QR_SIZE: &str = "150x150";

#[derive(Debug, Clone)]
pub struct ShareLinks {
    public_base_url: String,
    qr_service_url: String,
}

impl ShareLinks {
    pub fn new(public_base_url: impl Into<String>, qr_service_url: impl Into<String>) -> Self {
        Self {
            public_base_url: public_base_url.into(),
            qr_service_url: qr_service_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.public_base_url, &config.qr_service_url)
    }

    /// `{public_base_url}/recipe/{record_id}`
    pub fn share_url(&self, record_id: &str) -> String {
        format!(
            "{}/recipe/{}",
            self.public_base_url.trim_end_matches('/'),
            record_id
        )
    }

    /// Generator URL rendering `text` as a 150x150 QR code
    pub fn qr_image_url(&self, text: &str) -> AppResult<String> {
        let url = Url::parse_with_params(&self.qr_service_url, &[("size", QR_SIZE), ("data", text)])
            .map_err(|e| AppError::config(format!("Invalid QR service URL: {e}")))?;
        Ok(url.to_string())
    }

    pub fn link(&self, record_id: &str) -> AppResult<ShareLink> {
        let url = self.share_url(record_id);
        let qr_image_url = self.qr_image_url(&url)?;
        Ok(ShareLink { url, qr_image_url })
    }
}

/// Fetches rendered QR images
#[derive(Debug, Clone)]
pub struct QrClient {
    client: reqwest::Client,
}

impl QrClient {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Download the PNG behind `image_url`
    pub async fn fetch_png(&self, image_url: &str) -> AppResult<Vec<u8>> {
        let response = self
            .client
            .get(image_url)
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "QR service returned non-success status");
            return Err(AppError::with_message(
                ErrorCode::NetworkError,
                format!("QR service returned {}", response.status()),
            ));
        }

        let bytes = response.bytes().await.map_err(map_request_error)?;
        Ok(bytes.to_vec())
    }
}

fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::warn!(error = %err, "QR request timed out");
        AppError::with_message(ErrorCode::TimeoutError, "QR service timed out")
    } else {
        tracing::warn!(error = %err, "QR request failed");
        AppError::with_message(ErrorCode::NetworkError, format!("QR service unreachable: {err}"))
    }
}
