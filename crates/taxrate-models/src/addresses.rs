//! Address resolution models.
//!
//! Wire names are the canonical camelCase contract of the
//! `/api/v1/addresses` endpoints; declaration order matches the service's
//! published schemas.

use taxrate_core::{FieldDescriptor, SemanticType, TypeDescriptor};

/// A postal address, complete or partial. Also accepted as a latitude /
/// longitude pair with no street fields.
pub(crate) fn address_info() -> TypeDescriptor {
    TypeDescriptor::new(
        "AddressInfo",
        vec![
            FieldDescriptor::nullable("line1", SemanticType::string()),
            FieldDescriptor::nullable("line2", SemanticType::string()),
            FieldDescriptor::nullable("line3", SemanticType::string()),
            FieldDescriptor::nullable("city", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("postalCode", SemanticType::string()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("latitude", SemanticType::decimal()),
            FieldDescriptor::nullable("longitude", SemanticType::decimal()),
        ],
    )
}

pub(crate) fn coordinate_info() -> TypeDescriptor {
    TypeDescriptor::new(
        "CoordinateInfo",
        vec![
            FieldDescriptor::nullable("latitude", SemanticType::decimal()),
            FieldDescriptor::nullable("longitude", SemanticType::decimal()),
        ],
    )
}

/// One canonical form of the submitted address, as normalized by the
/// resolution service.
pub(crate) fn validated_address_info() -> TypeDescriptor {
    TypeDescriptor::new(
        "ValidatedAddressInfo",
        vec![
            FieldDescriptor::nullable("addressType", SemanticType::string()),
            FieldDescriptor::nullable("line1", SemanticType::string()),
            FieldDescriptor::nullable("line2", SemanticType::string()),
            FieldDescriptor::nullable("line3", SemanticType::string()),
            FieldDescriptor::nullable("city", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("postalCode", SemanticType::string()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("latitude", SemanticType::decimal()),
            FieldDescriptor::nullable("longitude", SemanticType::decimal()),
        ],
    )
}

pub(crate) fn tax_authority_info() -> TypeDescriptor {
    TypeDescriptor::new(
        "TaxAuthorityInfo",
        vec![
            FieldDescriptor::nullable("authorityId", SemanticType::string()),
            FieldDescriptor::required("jurisdictionName", SemanticType::string()),
            FieldDescriptor::nullable(
                "jurisdictionType",
                SemanticType::enumeration("JurisdictionType"),
            ),
            FieldDescriptor::nullable("signatureCode", SemanticType::string()),
        ],
    )
}

/// Response of `POST /api/v1/addresses/resolve`.
pub(crate) fn address_resolution_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "AddressResolutionModel",
        vec![
            FieldDescriptor::nullable("address", SemanticType::model("AddressInfo")),
            FieldDescriptor::nullable(
                "validatedAddresses",
                SemanticType::sequence_of(SemanticType::model("ValidatedAddressInfo")),
            ),
            FieldDescriptor::nullable("coordinates", SemanticType::model("CoordinateInfo")),
            FieldDescriptor::nullable(
                "resolutionQuality",
                SemanticType::enumeration("ResolutionQuality"),
            ),
            FieldDescriptor::nullable(
                "taxAuthorities",
                SemanticType::sequence_of(SemanticType::model("TaxAuthorityInfo")),
            ),
            FieldDescriptor::nullable(
                "messages",
                SemanticType::sequence_of(SemanticType::model("MessageDetailModel")),
            ),
        ],
    )
}
