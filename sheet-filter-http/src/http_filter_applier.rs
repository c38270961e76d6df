use std::time::Instant;

use anyhow::{Context, Result};
use async_trait::async_trait;
use sheet_duration::beautify_duration;
use sheet_filter_applier::filter_applier::FilterApplier;
use sheet_filter_config::config_structs::{
    apply_filter_request_struct::{ApplyFilterRequest, ApplyFilterResponse},
    step_id_struct::StepId,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::http_applier_config::HttpApplierConfig;

#[derive(Error, Debug)]
pub enum HttpApplierError {
    #[error("Backend rejected filter update for column {column}: {status} {body}")]
    Rejected {
        column: String,
        status: u16,
        body: String,
    },
}

/// Sends filter updates to a remote backend as JSON over HTTP.
#[derive(Debug)]
pub struct HttpFilterApplier {
    client: reqwest::Client,
    url: String,
}

impl HttpFilterApplier {
    pub fn new(config: &HttpApplierConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        let url = config.apply_filter_url();
        debug!(url = %url, "HTTP filter applier initialized");

        Ok(Self { client, url })
    }
}

#[async_trait]
impl FilterApplier for HttpFilterApplier {
    async fn apply_filter(&self, request: &ApplyFilterRequest) -> Result<StepId> {
        let start = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("POST {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            let body = body_or_reason(response.text().await);
            return Err(HttpApplierError::Rejected {
                column: request.column_id.clone(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let response: ApplyFilterResponse = response
            .json()
            .await
            .context("backend returned an unreadable apply-filter response")?;

        info!(
            "Applied {} filters on column {} as step {}. Time taken: {}",
            request.filters.len(),
            request.column_id,
            response.step_id,
            beautify_duration(start.elapsed())
        );

        Ok(response.step_id)
    }
}

/// Response body of a rejected call, or why it could not be read.
fn body_or_reason<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<unreadable body: {e}>"))
}
