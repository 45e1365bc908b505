//! Transaction models: creation requests, the calculated document, its
//! lines, per-jurisdiction details, and tax overrides.
//!
//! Monetary fields are declared `decimal` throughout; the marshalling core
//! guarantees they never pass through a binary float.

use taxrate_core::{FieldDescriptor, SemanticType, TypeDescriptor};

/// A caller-requested override of the engine's own calculation.
pub(crate) fn tax_override_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "TaxOverrideModel",
        vec![
            FieldDescriptor::required("type", SemanticType::enumeration("TaxOverrideType")),
            FieldDescriptor::nullable("taxAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("taxDate", SemanticType::instant()),
            FieldDescriptor::nullable("reason", SemanticType::string()),
        ],
    )
}

/// One line of a transaction being created.
pub(crate) fn line_item_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "LineItemModel",
        vec![
            FieldDescriptor::nullable("number", SemanticType::string()),
            FieldDescriptor::nullable("quantity", SemanticType::decimal()),
            FieldDescriptor::required("amount", SemanticType::decimal()),
            FieldDescriptor::nullable("itemCode", SemanticType::string()),
            FieldDescriptor::nullable("taxCode", SemanticType::string()),
            FieldDescriptor::nullable("entityUseCode", SemanticType::string()),
            FieldDescriptor::nullable("exemptionCode", SemanticType::string()),
            FieldDescriptor::nullable("description", SemanticType::string()),
            FieldDescriptor::nullable("discounted", SemanticType::boolean()),
            FieldDescriptor::nullable("taxIncluded", SemanticType::boolean()),
            FieldDescriptor::nullable("taxOverride", SemanticType::model("TaxOverrideModel")),
            FieldDescriptor::nullable("parameters", SemanticType::bag()),
        ],
    )
}

/// Request of `POST /api/v1/transactions/create`.
///
/// `addresses` maps a role (`shipFrom`, `shipTo`, `pointOfOrderOrigin`,
/// `pointOfOrderAcceptance`, `singleLocation`) to an address; lines without
/// their own addresses inherit the document's.
pub(crate) fn create_transaction_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "CreateTransactionModel",
        vec![
            FieldDescriptor::nullable("code", SemanticType::string()),
            FieldDescriptor::nullable("companyCode", SemanticType::string()),
            FieldDescriptor::nullable("type", SemanticType::enumeration("DocumentType")),
            FieldDescriptor::required("date", SemanticType::instant()),
            FieldDescriptor::required("customerCode", SemanticType::string()),
            FieldDescriptor::nullable("currencyCode", SemanticType::string()),
            FieldDescriptor::nullable("purchaseOrderNo", SemanticType::string()),
            FieldDescriptor::nullable("exemptionNo", SemanticType::string()),
            FieldDescriptor::nullable("discount", SemanticType::decimal()),
            FieldDescriptor::nullable("description", SemanticType::string()),
            FieldDescriptor::nullable("referenceCode", SemanticType::string()),
            FieldDescriptor::nullable("reportingLocationCode", SemanticType::string()),
            FieldDescriptor::nullable("commit", SemanticType::boolean()),
            FieldDescriptor::nullable("taxOverride", SemanticType::model("TaxOverrideModel")),
            FieldDescriptor::nullable(
                "addresses",
                SemanticType::map_of(SemanticType::model("AddressInfo")),
            ),
            FieldDescriptor::required(
                "lines",
                SemanticType::sequence_of(SemanticType::model("LineItemModel")),
            ),
            FieldDescriptor::nullable("parameters", SemanticType::bag()),
        ],
    )
}

/// Per-jurisdiction tax detail on a calculated line.
pub(crate) fn transaction_line_detail_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "TransactionLineDetailModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("transactionLineId", SemanticType::integer()),
            FieldDescriptor::nullable("jurisCode", SemanticType::string()),
            FieldDescriptor::nullable("jurisName", SemanticType::string()),
            FieldDescriptor::nullable(
                "jurisdictionType",
                SemanticType::enumeration("JurisdictionType"),
            ),
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("taxName", SemanticType::string()),
            FieldDescriptor::nullable("rate", SemanticType::decimal()),
            FieldDescriptor::nullable("tax", SemanticType::decimal()),
            FieldDescriptor::nullable("taxableAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("exemptAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("nonTaxableAmount", SemanticType::decimal()),
        ],
    )
}

/// One calculated line of a transaction document.
pub(crate) fn transaction_line_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "TransactionLineModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("transactionId", SemanticType::integer()),
            FieldDescriptor::nullable("lineNumber", SemanticType::string()),
            FieldDescriptor::nullable("boundaryLevel", SemanticType::enumeration("BoundaryLevel")),
            FieldDescriptor::nullable("description", SemanticType::string()),
            FieldDescriptor::nullable("itemCode", SemanticType::string()),
            FieldDescriptor::nullable("taxCode", SemanticType::string()),
            FieldDescriptor::nullable("quantity", SemanticType::decimal()),
            FieldDescriptor::nullable("lineAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("discountAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("exemptAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("taxableAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("tax", SemanticType::decimal()),
            FieldDescriptor::nullable("taxCalculated", SemanticType::decimal()),
            FieldDescriptor::nullable("taxIncluded", SemanticType::boolean()),
            FieldDescriptor::nullable("taxDate", SemanticType::instant()),
            FieldDescriptor::nullable(
                "details",
                SemanticType::sequence_of(SemanticType::model("TransactionLineDetailModel")),
            ),
            FieldDescriptor::nullable("parameters", SemanticType::bag()),
        ],
    )
}

/// Jurisdiction-level rollup across all lines of a document.
pub(crate) fn transaction_summary() -> TypeDescriptor {
    TypeDescriptor::new(
        "TransactionSummary",
        vec![
            FieldDescriptor::nullable("country", SemanticType::string()),
            FieldDescriptor::nullable("region", SemanticType::string()),
            FieldDescriptor::nullable("jurisType", SemanticType::enumeration("JurisdictionType")),
            FieldDescriptor::nullable("jurisCode", SemanticType::string()),
            FieldDescriptor::nullable("jurisName", SemanticType::string()),
            FieldDescriptor::nullable("taxName", SemanticType::string()),
            FieldDescriptor::nullable("rateType", SemanticType::string()),
            FieldDescriptor::nullable("taxable", SemanticType::decimal()),
            FieldDescriptor::nullable("rate", SemanticType::decimal()),
            FieldDescriptor::nullable("tax", SemanticType::decimal()),
            FieldDescriptor::nullable("taxCalculated", SemanticType::decimal()),
            FieldDescriptor::nullable("nonTaxable", SemanticType::decimal()),
            FieldDescriptor::nullable("exemption", SemanticType::decimal()),
        ],
    )
}

/// A calculated transaction document as returned by the service.
pub(crate) fn transaction_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "TransactionModel",
        vec![
            FieldDescriptor::nullable("id", SemanticType::integer()),
            FieldDescriptor::nullable("code", SemanticType::string()),
            FieldDescriptor::nullable("companyId", SemanticType::integer()),
            FieldDescriptor::nullable("date", SemanticType::instant()),
            FieldDescriptor::nullable("status", SemanticType::enumeration("DocumentStatus")),
            FieldDescriptor::nullable("type", SemanticType::enumeration("DocumentType")),
            FieldDescriptor::nullable("currencyCode", SemanticType::string()),
            FieldDescriptor::nullable("customerCode", SemanticType::string()),
            FieldDescriptor::nullable("exemptNo", SemanticType::string()),
            FieldDescriptor::nullable("reconciled", SemanticType::boolean()),
            FieldDescriptor::nullable("locked", SemanticType::boolean()),
            FieldDescriptor::nullable("purchaseOrderNo", SemanticType::string()),
            FieldDescriptor::nullable("referenceCode", SemanticType::string()),
            FieldDescriptor::nullable("totalAmount", SemanticType::decimal()),
            FieldDescriptor::nullable("totalExempt", SemanticType::decimal()),
            FieldDescriptor::nullable("totalDiscount", SemanticType::decimal()),
            FieldDescriptor::nullable("totalTax", SemanticType::decimal()),
            FieldDescriptor::nullable("totalTaxable", SemanticType::decimal()),
            FieldDescriptor::nullable("totalTaxCalculated", SemanticType::decimal()),
            FieldDescriptor::nullable("description", SemanticType::string()),
            FieldDescriptor::nullable(
                "lines",
                SemanticType::sequence_of(SemanticType::model("TransactionLineModel")),
            ),
            FieldDescriptor::nullable(
                "summary",
                SemanticType::sequence_of(SemanticType::model("TransactionSummary")),
            ),
            FieldDescriptor::nullable(
                "messages",
                SemanticType::sequence_of(SemanticType::model("MessageDetailModel")),
            ),
            FieldDescriptor::nullable("parameters", SemanticType::bag()),
        ],
    )
}

pub(crate) fn commit_transaction_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "CommitTransactionModel",
        vec![FieldDescriptor::required("commit", SemanticType::boolean())],
    )
}

pub(crate) fn void_transaction_model() -> TypeDescriptor {
    TypeDescriptor::new(
        "VoidTransactionModel",
        vec![FieldDescriptor::required(
            "code",
            SemanticType::enumeration("VoidReasonCode"),
        )],
    )
}
