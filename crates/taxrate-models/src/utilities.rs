//! Diagnostic and account-level utility models.

use taxrate_core::{FieldDescriptor, SemanticType, TypeDescriptor};

/// An informational message attached to a response, for example a warning
/// about an address that resolved with reduced precision.
pub(crate) fn message_detail_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "MessageDetailModel",
        vec![
            FieldDescriptor::nullable("summary", SemanticType::string()),
            FieldDescriptor::nullable("details", SemanticType::string()),
            FieldDescriptor::nullable("refersTo", SemanticType::string()),
            FieldDescriptor::nullable("severity", SemanticType::enumeration("SeverityLevel")),
            FieldDescriptor::nullable("source", SemanticType::string()),
        ],
    )
}

/// Response of `GET /api/v1/utilities/ping`. Works with or without
/// credentials; the `authenticated` flag reports which case applied.
pub(crate) fn ping_result_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "PingResultModel",
        vec![
            FieldDescriptor::nullable("version", SemanticType::string()),
            FieldDescriptor::required("authenticated", SemanticType::boolean()),
            FieldDescriptor::nullable("authenticationType", SemanticType::string()),
            FieldDescriptor::nullable("authenticatedUserName", SemanticType::string()),
            FieldDescriptor::nullable("authenticatedUserId", SemanticType::integer()),
            FieldDescriptor::nullable("authenticatedAccountId", SemanticType::integer()),
        ],
    )
}

pub(crate) fn subscription_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "SubscriptionModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("accountId", SemanticType::integer()),
            FieldDescriptor::nullable("subscriptionTypeId", SemanticType::integer()),
            FieldDescriptor::nullable("subscriptionDescription", SemanticType::string()),
            FieldDescriptor::nullable("effectiveDate", SemanticType::instant()),
            FieldDescriptor::nullable("endDate", SemanticType::instant()),
        ],
    )
}

pub(crate) fn subscription_list_result() -> TypeDescriptor {
    TypeDescriptor::new(
        "SubscriptionListResult",
        vec![
            FieldDescriptor::nullable("count", SemanticType::integer()),
            FieldDescriptor::nullable(
                "value",
                SemanticType::sequence_of(SemanticType::model("SubscriptionModel")),
            ),
        ],
    )
}
