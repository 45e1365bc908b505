//! # taxrate-client — Typed Rust client for the Taxrate API
//!
//! Ergonomic, typed access to the Taxrate tax-calculation REST API:
//! addresses, transactions, nexus declarations, companies, filings, and
//! utilities. Callers construct [`taxrate_core::ModelInstance`]s against the
//! generated registry in `taxrate-models`, and every call returns either a
//! typed instance or a classified [`TaxrateError`] — raw JSON and HTTP
//! status codes never surface.
//!
//! ## Example
//!
//! ```no_run
//! use taxrate_client::{Credentials, TaxrateClient, TaxrateConfig};
//! use taxrate_core::ModelInstance;
//!
//! # async fn run() -> Result<(), taxrate_client::TaxrateError> {
//! let config = TaxrateConfig::sandbox(Credentials::basic("2001234567", "license-key"))?;
//! let client = TaxrateClient::new(config)?;
//!
//! let address = ModelInstance::new("AddressInfo")
//!     .with("line1", "100 Ravine Lane NE")
//!     .with("city", "Bainbridge Island")
//!     .with("region", "WA")
//!     .with("postalCode", "98110")
//!     .with("country", "US");
//! let resolved = client.addresses().resolve(address).await?;
//! println!("quality: {:?}", resolved.enumeration("resolutionQuality"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Semantics
//!
//! - One HTTP attempt per call; retry policy belongs to the caller.
//! - Each call is independent — no shared mutable state, safe to run
//!   concurrently from many tasks.
//! - Dropping a call's future cancels it at the network exchange; once a
//!   response body is in hand, deserialization runs to completion.

pub mod addresses;
pub mod companies;
pub mod config;
pub mod envelope;
pub mod error;
pub mod filings;
pub mod nexus;
pub mod pipeline;
pub mod transactions;
pub mod utilities;

pub use config::{ConfigError, Credentials, TaxrateConfig};
pub use envelope::map_error;
pub use error::{ErrorDescriptor, ErrorDetail, TaxrateError};
pub use pipeline::{RequestDescriptor, RequestPipeline};

// Re-export the value model so downstream code can construct and inspect
// instances without naming the core crate.
pub use taxrate_core::{BagScalar, EnumValue, ModelInstance, WireValue};

use std::sync::Arc;

/// Top-level Taxrate API client. Holds sub-clients for each endpoint area,
/// all sharing one request pipeline.
#[derive(Debug, Clone)]
pub struct TaxrateClient {
    addresses: addresses::AddressClient,
    transactions: transactions::TransactionClient,
    nexus: nexus::NexusClient,
    companies: companies::CompanyClient,
    filings: filings::FilingClient,
    utilities: utilities::UtilityClient,
}

impl TaxrateClient {
    /// Create a new client from configuration.
    pub fn new(config: TaxrateConfig) -> Result<Self, TaxrateError> {
        let pipeline = Arc::new(RequestPipeline::new(&config)?);
        Ok(Self {
            addresses: addresses::AddressClient::new(pipeline.clone()),
            transactions: transactions::TransactionClient::new(pipeline.clone()),
            nexus: nexus::NexusClient::new(pipeline.clone()),
            companies: companies::CompanyClient::new(pipeline.clone()),
            filings: filings::FilingClient::new(pipeline.clone()),
            utilities: utilities::UtilityClient::new(pipeline),
        })
    }

    /// Access the address resolution client.
    pub fn addresses(&self) -> &addresses::AddressClient {
        &self.addresses
    }

    /// Access the transactions client.
    pub fn transactions(&self) -> &transactions::TransactionClient {
        &self.transactions
    }

    /// Access the nexus declarations client.
    pub fn nexus(&self) -> &nexus::NexusClient {
        &self.nexus
    }

    /// Access the companies client.
    pub fn companies(&self) -> &companies::CompanyClient {
        &self.companies
    }

    /// Access the filing calendars and requests client.
    pub fn filings(&self) -> &filings::FilingClient {
        &self.filings
    }

    /// Access the utilities client.
    pub fn utilities(&self) -> &utilities::UtilityClient {
        &self.utilities
    }
}
