//! Typed client for the address resolution endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/v1/addresses/resolve` | Resolve and validate an address |

use std::sync::Arc;

use reqwest::Method;

use taxrate_core::ModelInstance;
use taxrate_models::names;

use crate::error::TaxrateError;
use crate::pipeline::{RequestDescriptor, RequestPipeline};

/// Client for the address endpoints.
#[derive(Debug, Clone)]
pub struct AddressClient {
    pipeline: Arc<RequestPipeline>,
}

impl AddressClient {
    pub(crate) fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Resolve an address against the service's geocoding and boundary data.
    ///
    /// `address` is an `AddressInfo` instance — street fields, or a
    /// latitude/longitude pair. The response reports the validated forms,
    /// coordinates, resolution quality, and covering tax authorities.
    ///
    /// Calls `POST /api/v1/addresses/resolve`.
    pub async fn resolve(&self, address: ModelInstance) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/addresses/resolve",
                    names::ADDRESS_RESOLUTION,
                )
                .body(address),
            )
            .await
    }
}
