//! Nexus declaration models.
//!
//! A nexus row records that a company is obligated to collect tax in one
//! jurisdiction between two dates.

use taxrate_core::{FieldDescriptor, SemanticType, TypeDescriptor};

pub(crate) fn nexus_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "NexusModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("companyId", SemanticType::integer()),
            FieldDescriptor::required("country", SemanticType::string()),
            FieldDescriptor::required("region", SemanticType::string()),
            FieldDescriptor::nullable("jurisTypeId", SemanticType::enumeration("JurisdictionType")),
            FieldDescriptor::nullable("jurisCode", SemanticType::string()),
            FieldDescriptor::nullable("jurisName", SemanticType::string()),
            FieldDescriptor::nullable("shortName", SemanticType::string()),
            FieldDescriptor::nullable("signatureCode", SemanticType::string()),
            FieldDescriptor::nullable("stateAssignedNo", SemanticType::string()),
            FieldDescriptor::nullable("nexusTypeId", SemanticType::enumeration("NexusType")),
            FieldDescriptor::nullable("hasLocalNexus", SemanticType::boolean()),
            FieldDescriptor::nullable("localNexusTypeId", SemanticType::enumeration("NexusType")),
            FieldDescriptor::nullable("taxId", SemanticType::string()),
            FieldDescriptor::nullable("effectiveDate", SemanticType::instant()),
            FieldDescriptor::nullable("endDate", SemanticType::instant()),
            FieldDescriptor::nullable("streamlinedSalesTax", SemanticType::boolean()),
            FieldDescriptor::nullable("isSellerImporterOfRecord", SemanticType::boolean()),
        ],
    )
}

/// Request of `POST /api/v1/companies/{companyId}/nexus/byaddress` — the
/// service derives the jurisdictions covering the address and declares nexus
/// in each.
pub(crate) fn declare_nexus_by_address_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "DeclareNexusByAddressModel",
        vec![
            FieldDescriptor::nullable("effectiveDate", SemanticType::instant()),
            FieldDescriptor::nullable("endDate", SemanticType::instant()),
            FieldDescriptor::nullable("line1", SemanticType::string()),
            FieldDescriptor::nullable("line2", SemanticType::string()),
            FieldDescriptor::nullable("city", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::required("postalCode", SemanticType::string()),
            FieldDescriptor::required("country", SemanticType::string()),
        ],
    )
}

pub(crate) fn nexus_list_result() -> TypeDescriptor {
    TypeDescriptor::new(
        "NexusListResult",
        vec![
            FieldDescriptor::nullable("count", SemanticType::integer()),
            FieldDescriptor::nullable(
                "value",
                SemanticType::sequence_of(SemanticType::model("NexusModel")),
            ),
        ],
    )
}
