//! Typed client for the transaction endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/api/v1/transactions/create` | Calculate and record a transaction |
//! | GET    | `/api/v1/companies/{companyCode}/transactions/{transactionCode}` | Fetch by code |
//! | POST   | `/api/v1/companies/{companyCode}/transactions/{transactionCode}/commit` | Commit |
//! | POST   | `/api/v1/companies/{companyCode}/transactions/{transactionCode}/void` | Void |

use std::sync::Arc;

use reqwest::Method;

use taxrate_core::ModelInstance;
use taxrate_models::{names, VoidReasonCode};

use crate::error::TaxrateError;
use crate::pipeline::{RequestDescriptor, RequestPipeline};

/// Client for the transaction endpoints.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    pipeline: Arc<RequestPipeline>,
}

impl TransactionClient {
    pub(crate) fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Calculate tax for a new transaction and record it.
    ///
    /// `model` is a `CreateTransactionModel` instance. Documents created
    /// with `commit: true` and a `type` of `SalesInvoice` are immediately
    /// committed.
    ///
    /// Calls `POST /api/v1/transactions/create`.
    pub async fn create(&self, model: ModelInstance) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/transactions/create",
                    names::TRANSACTION,
                )
                .body(model),
            )
            .await
    }

    /// Fetch a single transaction by company code and transaction code.
    ///
    /// `include` requests optional child collections (for example
    /// `"Lines,SummaryOnly"`); `None` omits the parameter.
    ///
    /// Calls `GET /api/v1/companies/{companyCode}/transactions/{transactionCode}`.
    pub async fn get_by_code(
        &self,
        company_code: &str,
        transaction_code: &str,
        include: Option<&str>,
    ) -> Result<ModelInstance, TaxrateError> {
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::GET,
                    "/api/v1/companies/{companyCode}/transactions/{transactionCode}",
                    names::TRANSACTION,
                )
                .path_param("companyCode", company_code)
                .path_param("transactionCode", transaction_code)
                .query_opt("$include", include),
            )
            .await
    }

    /// Commit a saved transaction, making it eligible for reporting.
    ///
    /// Calls `POST /api/v1/companies/{companyCode}/transactions/{transactionCode}/commit`.
    pub async fn commit(
        &self,
        company_code: &str,
        transaction_code: &str,
    ) -> Result<ModelInstance, TaxrateError> {
        let body = ModelInstance::new(names::COMMIT_TRANSACTION).with("commit", true);
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/companies/{companyCode}/transactions/{transactionCode}/commit",
                    names::TRANSACTION,
                )
                .path_param("companyCode", company_code)
                .path_param("transactionCode", transaction_code)
                .body(body),
            )
            .await
    }

    /// Void a transaction that should no longer count.
    ///
    /// Calls `POST /api/v1/companies/{companyCode}/transactions/{transactionCode}/void`.
    pub async fn void(
        &self,
        company_code: &str,
        transaction_code: &str,
        reason: VoidReasonCode,
    ) -> Result<ModelInstance, TaxrateError> {
        let body = ModelInstance::new(names::VOID_TRANSACTION).with("code", reason.wire_value());
        self.pipeline
            .execute(
                RequestDescriptor::new(
                    Method::POST,
                    "/api/v1/companies/{companyCode}/transactions/{transactionCode}/void",
                    names::TRANSACTION,
                )
                .path_param("companyCode", company_code)
                .path_param("transactionCode", transaction_code)
                .body(body),
            )
            .await
    }
}
