//! Typed client for the nexus declaration endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/companies/{companyId}/nexus` | List declared nexus |
//! | POST   | `/api/v1/companies/{companyId}/nexus` | Declare nexus |
//! | DELETE | `/api/v1/companies/{companyId}/nexus/{id}` | Revoke a declaration |
//! | POST   | `/api/v1/companies/{companyId}/nexus/byaddress` | Declare by address |

use std::sync::Arc;

use reqwest::Method;

use taxrate_core::ModelInstance;
use taxrate_models::names;

use crate::error::TaxrateError;
use crate::pipeline::{RequestDescriptor, RequestPipeline};

/// Client for the nexus endpoints.
#[derive(Debug, Clone)]
pub struct NexusClient {
    pipeline: Arc<RequestPipeline>,
}

impl NexusClient {
    pub(crate) fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// List the jurisdictions a company has declared nexus in.
    ///
    /// `filter` is the service's OData-style `$filter` expression; `None`
    /// lists everything.
    ///
    /// Calls `GET /api/v1/companies/{companyId}/nexus`.
    pub async fn list_by_company(
        &self,
        company_id: i64,
        filter: Option<&str>,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::GET,
                    "/api/v1/companies/{companyId}/nexus",
                    names::NEXUS_LIST,
                )
                .path_param("companyId", company_id)
                .query_opt("$filter", filter),
            )
            .await
    }

    /// Declare nexus in one jurisdiction.
    ///
    /// `nexus` is a `NexusModel` instance; `country` and `region` are
    /// required and must match one of the service's known jurisdictions.
    ///
    /// Calls `POST /api/v1/companies/{companyId}/nexus`.
    pub async fn create(
        &self,
        company_id: i64,
        nexus: ModelInstance,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/companies/{companyId}/nexus",
                    names::NEXUS,
                )
                .path_param("companyId", company_id)
                .body(nexus),
            )
            .await
    }

    /// Revoke a nexus declaration.
    ///
    /// Calls `DELETE /api/v1/companies/{companyId}/nexus/{id}`.
    pub async fn delete(
        &self,
        company_id: i64,
        nexus_id: i64,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::DELETE,
                    "/api/v1/companies/{companyId}/nexus/{id}",
                    names::NEXUS,
                )
                .path_param("companyId", company_id)
                .path_param("id", nexus_id),
            )
            .await
    }

    /// Declare nexus in every jurisdiction covering an address.
    ///
    /// Calls `POST /api/v1/companies/{companyId}/nexus/byaddress`.
    pub async fn declare_by_address(
        &self,
        company_id: i64,
        address: ModelInstance,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/companies/{companyId}/nexus/byaddress",
                    names::NEXUS_LIST,
                )
                .path_param("companyId", company_id)
                .body(address),
            )
            .await
    }
}
