//! Typed client for the utility endpoints.

use std::sync::Arc;

use reqwest::Method;

use taxrate_core::ModelInstance;
use taxrate_models::names;

use crate::error::TaxrateError;
use crate::pipeline::{RequestDescriptor, RequestPipeline};

/// Client for the utility endpoints.
#[derive(Debug, Clone)]
pub struct UtilityClient {
    pipeline: Arc<RequestPipeline>,
}

impl UtilityClient {
    pub(crate) fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Probe the service. Works without credentials; when credentials are
    /// configured the response reports who they authenticate as.
    ///
    /// Calls `GET /api/v1/utilities/ping`.
    pub async fn ping(&self) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(RequestDescriptor::new(
                Method::GET,
                "/api/v1/utilities/ping",
                names::PING_RESULT,
            ))
            .await
    }

    /// List the subscriptions active on the authenticated account.
    ///
    /// Calls `GET /api/v1/utilities/subscriptions`.
    pub async fn subscriptions(&self) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(RequestDescriptor::new(
                Method::GET,
                "/api/v1/utilities/subscriptions",
                names::SUBSCRIPTION_LIST,
            ))
            .await
    }
}
