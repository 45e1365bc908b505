//! # taxrate-models — Generated Model Declarations
//!
//! Data-shape contracts for every model and closed vocabulary the Taxrate
//! API exchanges. There is no behavior here: each model is a
//! [`taxrate_core::TypeDescriptor`] built from field declarations, and each
//! vocabulary is a closed symbol set with an `Unrecognized` sentinel.
//!
//! The single entry point is [`registry`], which builds the frozen
//! process-wide [`TypeRegistry`] on first use and hands out the same
//! immutable reference thereafter.

mod addresses;
mod companies;
mod enums;
mod error_codes;
mod filings;
mod nexus;
mod transactions;
mod utilities;

pub use enums::{
    AddressCategory, AddressType, BoundaryLevel, DocumentStatus, DocumentType, FilingFrequency,
    FilingRequestStatus, JurisdictionType, NexusType, ResolutionQuality, SeverityLevel,
    TaxOverrideType, VoidReasonCode,
};
pub use error_codes::ErrorCode;

use std::sync::OnceLock;

use taxrate_core::{RegistryBuilder, TypeRegistry};

/// Model names, for request descriptors and registry lookups.
pub mod names {
    /// `AddressInfo`
    pub const ADDRESS_INFO: &str = "AddressInfo";
    /// `AddressResolutionModel`
    pub const ADDRESS_RESOLUTION: &str = "AddressResolutionModel";
    /// `CompanyModel`
    pub const COMPANY: &str = "CompanyModel";
    /// `CompanyListResult`
    pub const COMPANY_LIST: &str = "CompanyListResult";
    /// `CompanyInitializationModel`
    pub const COMPANY_INITIALIZATION: &str = "CompanyInitializationModel";
    /// `CreateTransactionModel`
    pub const CREATE_TRANSACTION: &str = "CreateTransactionModel";
    /// `TransactionModel`
    pub const TRANSACTION: &str = "TransactionModel";
    /// `CommitTransactionModel`
    pub const COMMIT_TRANSACTION: &str = "CommitTransactionModel";
    /// `VoidTransactionModel`
    pub const VOID_TRANSACTION: &str = "VoidTransactionModel";
    /// `NexusModel`
    pub const NEXUS: &str = "NexusModel";
    /// `NexusListResult`
    pub const NEXUS_LIST: &str = "NexusListResult";
    /// `DeclareNexusByAddressModel`
    pub const DECLARE_NEXUS_BY_ADDRESS: &str = "DeclareNexusByAddressModel";
    /// `FilingCalendarModel`
    pub const FILING_CALENDAR: &str = "FilingCalendarModel";
    /// `FilingCalendarListResult`
    pub const FILING_CALENDAR_LIST: &str = "FilingCalendarListResult";
    /// `FilingRequestModel`
    pub const FILING_REQUEST: &str = "FilingRequestModel";
    /// `PingResultModel`
    pub const PING_RESULT: &str = "PingResultModel";
    /// `SubscriptionListResult`
    pub const SUBSCRIPTION_LIST: &str = "SubscriptionListResult";
}

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// The frozen process-wide registry of every model and vocabulary.
///
/// Built once on first call; every subsequent call returns the same
/// immutable reference, safe for concurrent lookup without locking.
pub fn registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(build_registry)
}

fn build_registry() -> TypeRegistry {
    RegistryBuilder::new()
        // Vocabularies.
        .enumeration(enums::DocumentType::descriptor())
        .enumeration(enums::DocumentStatus::descriptor())
        .enumeration(enums::AddressType::descriptor())
        .enumeration(enums::AddressCategory::descriptor())
        .enumeration(enums::JurisdictionType::descriptor())
        .enumeration(enums::NexusType::descriptor())
        .enumeration(enums::FilingFrequency::descriptor())
        .enumeration(enums::FilingRequestStatus::descriptor())
        .enumeration(enums::SeverityLevel::descriptor())
        .enumeration(enums::ResolutionQuality::descriptor())
        .enumeration(enums::BoundaryLevel::descriptor())
        .enumeration(enums::VoidReasonCode::descriptor())
        .enumeration(enums::TaxOverrideType::descriptor())
        .enumeration(error_codes::ErrorCode::descriptor())
        // Addresses.
        .model(addresses::address_info())
        .model(addresses::coordinate_info())
        .model(addresses::validated_address_info())
        .model(addresses::tax_authority_info())
        .model(addresses::address_resolution_model())
        // Companies.
        .model(companies::company_model())
        .model(companies::contact_model())
        .model(companies::location_model())
        .model(companies::company_initialization_model())
        .model(companies::company_list_result())
        // Transactions.
        .model(transactions::tax_override_model())
        .model(transactions::line_item_model())
        .model(transactions::create_transaction_model())
        .model(transactions::transaction_line_detail_model())
        .model(transactions::transaction_line_model())
        .model(transactions::transaction_summary())
        .model(transactions::transaction_model())
        .model(transactions::commit_transaction_model())
        .model(transactions::void_transaction_model())
        // Nexus.
        .model(nexus::nexus_model())
        .model(nexus::declare_nexus_by_address_model())
        .model(nexus::nexus_list_result())
        // Filings.
        .model(filings::filing_calendar_model())
        .model(filings::filing_calendar_edit_model())
        .model(filings::filing_request_data_model())
        .model(filings::filing_request_model())
        .model(filings::filing_calendar_list_result())
        // Utilities.
        .model(utilities::message_detail_model())
        .model(utilities::ping_result_model())
        .model(utilities::subscription_model())
        .model(utilities::subscription_list_result())
        .freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxrate_core::SemanticType;

    #[test]
    fn registry_knows_every_declared_model() {
        let registry = registry();
        for name in [
            names::ADDRESS_INFO,
            names::ADDRESS_RESOLUTION,
            names::COMPANY,
            names::CREATE_TRANSACTION,
            names::TRANSACTION,
            names::NEXUS,
            names::FILING_CALENDAR,
            names::FILING_REQUEST,
            names::PING_RESULT,
        ] {
            assert!(registry.contains_model(name), "missing model {name}");
        }
        assert!(registry.model_count() >= 25);
        assert!(registry.enum_count() >= 14);
    }

    #[test]
    fn nested_model_references_all_resolve() {
        // Every Model(...) and SequenceOf(Model(...)) reference inside a
        // registered descriptor must itself be registered.
        let registry = registry();
        fn check(semantic: &SemanticType, registry: &taxrate_core::TypeRegistry) {
            match semantic {
                SemanticType::Model(name) => {
                    assert!(registry.contains_model(name), "dangling model ref {name}");
                }
                SemanticType::Enum(name) => {
                    assert!(registry.enumeration(name).is_ok(), "dangling enum ref {name}");
                }
                SemanticType::SequenceOf(inner) | SemanticType::MapOf(inner) => {
                    check(inner, registry);
                }
                _ => {}
            }
        }
        for name in [
            names::ADDRESS_RESOLUTION,
            names::COMPANY,
            names::COMPANY_LIST,
            names::CREATE_TRANSACTION,
            names::TRANSACTION,
            names::NEXUS_LIST,
            names::FILING_REQUEST,
            names::FILING_CALENDAR_LIST,
            names::SUBSCRIPTION_LIST,
        ] {
            let descriptor = registry.describe(name).unwrap();
            for field in descriptor.fields() {
                check(&field.semantic, registry);
            }
        }
    }

    #[test]
    fn transaction_dates_and_amounts_use_canonical_scalars() {
        let registry = registry();
        let transaction = registry.describe(names::TRANSACTION).unwrap();
        assert_eq!(
            transaction.field("totalTax").unwrap().semantic,
            SemanticType::decimal()
        );
        assert_eq!(
            transaction.field("date").unwrap().semantic,
            SemanticType::instant()
        );
    }
}
