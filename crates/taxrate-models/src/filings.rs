//! Filing calendar and filing request models.

use taxrate_core::{FieldDescriptor, SemanticType, TypeDescriptor};

/// A recurring obligation to file one return with one authority.
pub(crate) fn filing_calendar_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "FilingCalendarModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("companyId", SemanticType::integer()),
            FieldDescriptor::required("returnName", SemanticType::string()),
            FieldDescriptor::nullable(
                "filingFrequencyId",
                SemanticType::enumeration("FilingFrequency"),
            ),
            FieldDescriptor::nullable("months", SemanticType::integer()),
            FieldDescriptor::nullable("registrationId", SemanticType::string()),
            FieldDescriptor::nullable("legalEntityName", SemanticType::string()),
            FieldDescriptor::nullable("effectiveDate", SemanticType::instant()),
            FieldDescriptor::nullable("endDate", SemanticType::instant()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("taxFormCode", SemanticType::string()),
            FieldDescriptor::nullable("locationCode", SemanticType::string()),
        ],
    )
}

/// One edited field in a filing calendar change request. Old and new values
/// are free-form property bags — the set of editable fields varies by form
/// and the service does not type them.
pub(crate) fn filing_calendar_edit_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "FilingCalendarEditModel",
        vec![
            FieldDescriptor::required("fieldName", SemanticType::string()),
            FieldDescriptor::nullable("questionId", SemanticType::integer()),
            FieldDescriptor::nullable("oldValue", SemanticType::bag()),
            FieldDescriptor::nullable("newValue", SemanticType::bag()),
        ],
    )
}

pub(crate) fn filing_request_data_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "FilingRequestDataModel",
        vec![
            FieldDescriptor::nullable("companyReturnId", SemanticType::integer()),
            FieldDescriptor::nullable("returnName", SemanticType::string()),
            FieldDescriptor::nullable("taxFormCode", SemanticType::string()),
            FieldDescriptor::nullable(
                "filingFrequencyId",
                SemanticType::enumeration("FilingFrequency"),
            ),
            FieldDescriptor::nullable("registrationId", SemanticType::string()),
            FieldDescriptor::nullable("months", SemanticType::integer()),
            FieldDescriptor::nullable("locationCode", SemanticType::string()),
            FieldDescriptor::nullable("effDate", SemanticType::instant()),
            FieldDescriptor::nullable("endDate", SemanticType::instant()),
            FieldDescriptor::nullable("isClone", SemanticType::boolean()),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("taxAuthorityId", SemanticType::integer()),
            FieldDescriptor::nullable("taxAuthorityName", SemanticType::string()),
            FieldDescriptor::nullable(
                "edits",
                SemanticType::sequence_of(SemanticType::model("FilingCalendarEditModel")),
            ),
        ],
    )
}

/// A pending change to a company's filing calendars, reviewed by the
/// service's compliance team before taking effect.
pub(crate) fn filing_request_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "FilingRequestModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::required("companyId", SemanticType::integer()),
            FieldDescriptor::nullable(
                "filingRequestStatusId",
                SemanticType::enumeration("FilingRequestStatus"),
            ),
            FieldDescriptor::required("data", SemanticType::model("FilingRequestDataModel")),
        ],
    )
}

pub(crate) fn filing_calendar_list_result() -> TypeDescriptor {
    TypeDescriptor::new(
        "FilingCalendarListResult",
        vec![
            FieldDescriptor::nullable("count", SemanticType::integer()),
            FieldDescriptor::nullable(
                "value",
                SemanticType::sequence_of(SemanticType::model("FilingCalendarModel")),
            ),
        ],
    )
}
