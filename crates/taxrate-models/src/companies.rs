//! Company, contact, and location models.

use taxrate_core::{FieldDescriptor, SemanticType, TypeDescriptor};

/// A company as stored by the service.
pub(crate) fn company_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "CompanyModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("accountId", SemanticType::integer()),
            FieldDescriptor::required("companyCode", SemanticType::string()),
            FieldDescriptor::nullable("name", SemanticType::string()),
            FieldDescriptor::nullable("isActive", SemanticType::boolean()),
            FieldDescriptor::nullable("isDefault", SemanticType::boolean()),
            FieldDescriptor::nullable("isReportingEntity", SemanticType::boolean()),
            FieldDescriptor::nullable("taxpayerIdNumber", SemanticType::string()),
            FieldDescriptor::nullable("line1", SemanticType::string()),
            FieldDescriptor::nullable("line2", SemanticType::string()),
            FieldDescriptor::nullable("city", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("postalCode", SemanticType::string()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("defaultCountry", SemanticType::string()),
            FieldDescriptor::nullable(
                "contacts",
                SemanticType::sequence_of(SemanticType::model("ContactModel")),
            ),
            FieldDescriptor::nullable(
                "locations",
                SemanticType::sequence_of(SemanticType::model("LocationModel")),
            ),
            FieldDescriptor::nullable(
                "nexus",
                SemanticType::sequence_of(SemanticType::model("NexusModel")),
            ),
        ],
    )
}

pub(crate) fn contact_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "ContactModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("companyId", SemanticType::integer()),
            FieldDescriptor::required("contactCode", SemanticType::string()),
            FieldDescriptor::nullable("firstName", SemanticType::string()),
            FieldDescriptor::nullable("middleName", SemanticType::string()),
            FieldDescriptor::nullable("lastName", SemanticType::string()),
            FieldDescriptor::nullable("title", SemanticType::string()),
            FieldDescriptor::nullable("line1", SemanticType::string()),
            FieldDescriptor::nullable("city", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("postalCode", SemanticType::string()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("email", SemanticType::string()),
            FieldDescriptor::nullable("phone", SemanticType::string()),
            FieldDescriptor::nullable("mobile", SemanticType::string()),
            FieldDescriptor::nullable("fax", SemanticType::string()),
        ],
    )
}

/// A physical place of business. `settings` is a free-form property bag the
/// service stores without interpretation.
pub(crate) fn location_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "LocationModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("companyId", SemanticType::integer()),
            FieldDescriptor::required("locationCode", SemanticType::string()),
            FieldDescriptor::nullable("description", SemanticType::string()),
            FieldDescriptor::nullable("addressTypeId", SemanticType::enumeration("AddressType")),
            FieldDescriptor::nullable(
                "addressCategoryId",
                SemanticType::enumeration("AddressCategory"),
            ),
            FieldDescriptor::nullable("line1", SemanticType::string()),
            FieldDescriptor::nullable("line2", SemanticType::string()),
            FieldDescriptor::nullable("city", SemanticType::string()),
            FieldDescriptor::nullable("county", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("postalCode", SemanticType::string()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("isDefault", SemanticType::boolean()),
            FieldDescriptor::nullable("isRegistered", SemanticType::boolean()),
            FieldDescriptor::nullable("registeredDate", SemanticType::instant()),
            FieldDescriptor::nullable("endDate", SemanticType::instant()),
            FieldDescriptor::nullable("settings", SemanticType::bag()),
        ],
    )
}

/// Request of `POST /api/v1/companies/initialize` — creates a company with
/// its first location and contact in one call.
pub(crate) fn company_initialization_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "CompanyInitializationModel",
        vec![
            FieldDescriptor::required("name", SemanticType::string()),
            FieldDescriptor::nullable("companyCode", SemanticType::string()),
            FieldDescriptor::nullable("vatRegistrationId", SemanticType::string()),
            FieldDescriptor::nullable("taxpayerIdNumber", SemanticType::string()),
            FieldDescriptor::required("line1", SemanticType::string()),
            FieldDescriptor::nullable("line2", SemanticType::string()),
            FieldDescriptor::required("city", SemanticType::string()),
            FieldDescriptor::required("region", SemanticType::string()),
            FieldDescriptor::required("postalCode", SemanticType::string()),
            FieldDescriptor::required("country", SemanticType::string()),
            FieldDescriptor::required("firstName", SemanticType::string()),
            FieldDescriptor::required("lastName", SemanticType::string()),
            FieldDescriptor::nullable("title", SemanticType::string()),
            FieldDescriptor::required("email", SemanticType::string()),
            FieldDescriptor::required("phoneNumber", SemanticType::string()),
            FieldDescriptor::nullable("mobileNumber", SemanticType::string()),
        ],
    )
}

pub(crate) fn company_list_result() -> TypeDescriptor {
    TypeDescriptor::new(
        "CompanyListResult",
        vec![
            FieldDescriptor::nullable("count", SemanticType::integer()),
            FieldDescriptor::nullable(
                "value",
                SemanticType::sequence_of(SemanticType::model("CompanyModel")),
            ),
        ],
    )
}
