//! Typed client for the filing calendar and filing request endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/api/v1/companies/{companyId}/filingcalendars` | List calendars |
//! | GET    | `/api/v1/companies/{companyId}/filingcalendars/{id}` | Fetch one calendar |
//! | POST   | `/api/v1/companies/{companyId}/filingrequests` | Open a change request |
//! | GET    | `/api/v1/companies/{companyId}/filingrequests/{id}` | Fetch a change request |

use std::sync::Arc;

use reqwest::Method;

use taxrate_core::ModelInstance;
use taxrate_models::names;

use crate::error::TaxrateError;
use crate::pipeline::{RequestDescriptor, RequestPipeline};

/// Client for the filing endpoints.
#[derive(Debug, Clone)]
pub struct FilingClient {
    pipeline: Arc<RequestPipeline>,
}

impl FilingClient {
    pub(crate) fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// List a company's filing calendars.
    ///
    /// Calls `GET /api/v1/companies/{companyId}/filingcalendars`.
    pub async fn list_calendars(&self, company_id: i64) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::GET,
                    "/api/v1/companies/{companyId}/filingcalendars",
                    names::FILING_CALENDAR_LIST,
                )
                .path_param("companyId", company_id),
            )
            .await
    }

    /// Fetch one filing calendar.
    ///
    /// Calls `GET /api/v1/companies/{companyId}/filingcalendars/{id}`.
    pub async fn get_calendar(
        &self,
        company_id: i64,
        calendar_id: i64,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::GET,
                    "/api/v1/companies/{companyId}/filingcalendars/{id}",
                    names::FILING_CALENDAR,
                )
                .path_param("companyId", company_id)
                .path_param("id", calendar_id),
            )
            .await
    }

    /// Open a change request against a company's filing calendars.
    ///
    /// `model` is a `FilingRequestModel` instance; edits carry old/new value
    /// bags per changed field. The request is reviewed before taking effect.
    ///
    /// Calls `POST /api/v1/companies/{companyId}/filingrequests`.
    pub async fn create_request(
        &self,
        company_id: i64,
        model: ModelInstance,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/companies/{companyId}/filingrequests",
                    names::FILING_REQUEST,
                )
                .path_param("companyId", company_id)
                .body(model),
            )
            .await
    }

    /// Fetch one filing change request.
    ///
    /// Calls `GET /api/v1/companies/{companyId}/filingrequests/{id}`.
    pub async fn get_request(
        &self,
        company_id: i64,
        request_id: i64,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::GET,
                    "/api/v1/companies/{companyId}/filingrequests/{id}",
                    names::FILING_REQUEST,
                )
                .path_param("companyId", company_id)
                .path_param("id", request_id),
            )
            .await
    }
}
