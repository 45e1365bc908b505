//! Typed client for the company endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/companies` | List companies |
//! | GET    | `/api/v1/companies/{id}` | Fetch one company |
//! | POST   | `/api/v1/companies/initialize` | Create with first location and contact |

use std::sync::Arc;

use reqwest::Method;

use taxrate_core::ModelInstance;
use taxrate_models::names;

use crate::error::TaxrateError;
use crate::pipeline::{RequestDescriptor, RequestPipeline};

/// Client for the company endpoints.
#[derive(Debug, Clone)]
pub struct CompanyClient {
    pipeline: Arc<RequestPipeline>,
}

impl CompanyClient {
    pub(crate) fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// List companies on the account, with optional `$filter`, `$top`, and
    /// `$skip` paging.
    ///
    /// Calls `GET /api/v1/companies`.
    pub async fn list(
        &self,
        filter: Option<&str>,
        top: Option<u32>,
        skip: Option<u32>,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(Method::GET, "/api/v1/companies", names::COMPANY_LIST)
                    .query_opt("$filter", filter)
                    .query_opt("$top", top)
                    .query_opt("$skip", skip),
            )
            .await
    }

    /// Fetch one company by id.
    ///
    /// `include` requests child collections such as `"Locations,Contacts"`.
    ///
    /// Calls `GET /api/v1/companies/{id}`.
    pub async fn get(
        &self,
        company_id: i64,
        include: Option<&str>,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(Method::GET, "/api/v1/companies/{id}", names::COMPANY)
                    .path_param("id", company_id)
                    .query_opt("$include", include),
            )
            .await
    }

    /// Create a company together with its first location and contact.
    ///
    /// `model` is a `CompanyInitializationModel` instance.
    ///
    /// Calls `POST /api/v1/companies/initialize`.
    pub async fn initialize(&self, model: ModelInstance) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/companies/initialize",
                    names::COMPANY,
                )
                .body(model),
            )
            .await
    }
}
