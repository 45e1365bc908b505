//! The error-code vocabulary returned inside the service's error envelope.
//!
//! Mirrors the service's published catalog. The list grows with every
//! service release; codes this client does not know resolve to
//! [`ErrorCode::Unrecognized`] and the error mapper substitutes
//! [`ErrorCode::UnhandledException`] so callers always hold a symbol from
//! the closed set.

use crate::enums::wire_enum;

wire_enum! {
    /// Error codes drawn from the service's error-code catalog.
    pub enum ErrorCode {
        ServerConfiguration => "ServerConfiguration",
        UnhandledException => "UnhandledException",
        RemoteServerError => "RemoteServerError",
        ServerUnreachable => "ServerUnreachable",
        OperationCancelled => "OperationCancelled",
        MalformedJson => "MalformedJson",
        ReadOnlyApiKey => "ReadOnlyApiKey",
        InvalidApiVersion => "InvalidApiVersion",
        DeprecatedEndpoint => "DeprecatedEndpoint",
        RateLimitExceeded => "RateLimitExceeded",
        AuthenticationException => "AuthenticationException",
        AuthenticationIncomplete => "AuthenticationIncomplete",
        AuthorizationException => "AuthorizationException",
        PasswordExpired => "PasswordExpired",
        PasswordTooWeak => "PasswordTooWeak",
        CredentialsMismatch => "CredentialsMismatch",
        BearerTokenInvalid => "BearerTokenInvalid",
        BearerTokenExpired => "BearerTokenExpired",
        AccountInvalidException => "AccountInvalidException",
        AccountInactiveException => "AccountInactiveException",
        AccountNotFound => "AccountNotFound",
        AccountAlreadyExists => "AccountAlreadyExists",
        SubscriptionRequired => "SubscriptionRequired",
        SubscriptionExpired => "SubscriptionExpired",
        FreeTrialExpired => "FreeTrialExpired",
        UserInvalidException => "UserInvalidException",
        UserInactive => "UserInactive",
        UserNotFound => "UserNotFound",
        UserAlreadyExists => "UserAlreadyExists",
        PermissionRequired => "PermissionRequired",
        ValidationException => "ValidationException",
        ValueRequired => "ValueRequired",
        ValueTooLong => "ValueTooLong",
        ValueTooShort => "ValueTooShort",
        ValueOutOfRange => "ValueOutOfRange",
        RangeError => "RangeError",
        RangeCompareError => "RangeCompareError",
        InvalidEnumValue => "InvalidEnumValue",
        InvalidDateFormat => "InvalidDateFormat",
        InvalidDecimalValue => "InvalidDecimalValue",
        InvalidIntegerValue => "InvalidIntegerValue",
        InvalidBooleanValue => "InvalidBooleanValue",
        InvalidGuidFormat => "InvalidGuidFormat",
        InvalidFieldName => "InvalidFieldName",
        DuplicateEntry => "DuplicateEntry",
        MissingRequiredField => "MissingRequiredField",
        FieldNotQueryable => "FieldNotQueryable",
        FieldNotSortable => "FieldNotSortable",
        FilterSyntaxError => "FilterSyntaxError",
        PagingOutOfRange => "PagingOutOfRange",
        QueryTooComplex => "QueryTooComplex",
        EntityNotFoundError => "EntityNotFoundError",
        EntityDeleted => "EntityDeleted",
        EntityLocked => "EntityLocked",
        EntityInUse => "EntityInUse",
        ConcurrencyConflict => "ConcurrencyConflict",
        BatchTooLarge => "BatchTooLarge",
        BatchStillRunning => "BatchStillRunning",
        BatchNotFound => "BatchNotFound",
        CompanyCodeInvalid => "CompanyCodeInvalid",
        CompanyNotFound => "CompanyNotFound",
        CompanyInactive => "CompanyInactive",
        CompanyNotInitialized => "CompanyNotInitialized",
        CompanyProfileMissing => "CompanyProfileMissing",
        CompanyLocationRequired => "CompanyLocationRequired",
        DefaultCompanyMissing => "DefaultCompanyMissing",
        ContactNotFound => "ContactNotFound",
        LocationNotFound => "LocationNotFound",
        LocationCodeInvalid => "LocationCodeInvalid",
        CertificateNotFound => "CertificateNotFound",
        CertificateInvalid => "CertificateInvalid",
        CertificateExpired => "CertificateExpired",
        ExemptionNumberInvalid => "ExemptionNumberInvalid",
        EntityUseCodeInvalid => "EntityUseCodeInvalid",
        DocumentCodeRequired => "DocumentCodeRequired",
        DocumentNotFound => "DocumentNotFound",
        DocumentAlreadyExists => "DocumentAlreadyExists",
        DocumentStatusInvalid => "DocumentStatusInvalid",
        DocumentTypeInvalid => "DocumentTypeInvalid",
        DocumentDateInvalid => "DocumentDateInvalid",
        DocumentLocked => "DocumentLocked",
        DocumentVoided => "DocumentVoided",
        DocumentNotCommitted => "DocumentNotCommitted",
        DocumentTooLarge => "DocumentTooLarge",
        LineNumberRequired => "LineNumberRequired",
        LineNumberDuplicate => "LineNumberDuplicate",
        LineAmountInvalid => "LineAmountInvalid",
        LineQuantityInvalid => "LineQuantityInvalid",
        LineTaxCodeInvalid => "LineTaxCodeInvalid",
        TaxCodeNotFound => "TaxCodeNotFound",
        TaxCodeInactive => "TaxCodeInactive",
        TaxRuleNotFound => "TaxRuleNotFound",
        TaxRuleConflict => "TaxRuleConflict",
        ItemCodeNotFound => "ItemCodeNotFound",
        ItemAlreadyExists => "ItemAlreadyExists",
        CurrencyCodeInvalid => "CurrencyCodeInvalid",
        CurrencyConversionUnavailable => "CurrencyConversionUnavailable",
        RoundingRuleInvalid => "RoundingRuleInvalid",
        TaxOverrideInvalid => "TaxOverrideInvalid",
        TaxOverrideAmountRequired => "TaxOverrideAmountRequired",
        TaxOverrideDateRequired => "TaxOverrideDateRequired",
        TaxOverrideReasonRequired => "TaxOverrideReasonRequired",
        TaxDateOutOfRange => "TaxDateOutOfRange",
        AccruedTaxNotSupported => "AccruedTaxNotSupported",
        AddressIncomplete => "AddressIncomplete",
        AddressLine1Required => "AddressLine1Required",
        AddressCountryRequired => "AddressCountryRequired",
        AddressPostalCodeInvalid => "AddressPostalCodeInvalid",
        AddressRegionInvalid => "AddressRegionInvalid",
        AddressCityOrPostalRequired => "AddressCityOrPostalRequired",
        AddressResolutionFailed => "AddressResolutionFailed",
        AddressOutOfBounds => "AddressOutOfBounds",
        CoordinatesIncomplete => "CoordinatesIncomplete",
        CoordinatesOutOfBounds => "CoordinatesOutOfBounds",
        JurisdictionNotFound => "JurisdictionNotFound",
        JurisdictionOverlap => "JurisdictionOverlap",
        CountryNotSupported => "CountryNotSupported",
        RegionNotSupported => "RegionNotSupported",
        PostalCodeNotFound => "PostalCodeNotFound",
        BoundaryUnavailable => "BoundaryUnavailable",
        NexusNotFound => "NexusNotFound",
        NexusAlreadyDeclared => "NexusAlreadyDeclared",
        NexusDateInvalid => "NexusDateInvalid",
        NexusRegionMismatch => "NexusRegionMismatch",
        NexusTypeInvalid => "NexusTypeInvalid",
        LocalNexusConflict => "LocalNexusConflict",
        NexusOutsideCompanyDates => "NexusOutsideCompanyDates",
        FilingCalendarNotFound => "FilingCalendarNotFound",
        FilingCalendarOverlap => "FilingCalendarOverlap",
        FilingFrequencyInvalid => "FilingFrequencyInvalid",
        FilingRequestNotFound => "FilingRequestNotFound",
        FilingRequestStatusInvalid => "FilingRequestStatusInvalid",
        FilingRequestAlreadyApproved => "FilingRequestAlreadyApproved",
        ReturnNameNotFound => "ReturnNameNotFound",
        TaxFormCodeInvalid => "TaxFormCodeInvalid",
        RegistrationIdInvalid => "RegistrationIdInvalid",
        FilingPeriodClosed => "FilingPeriodClosed",
        FilingPeriodNotFound => "FilingPeriodNotFound",
        ReportNotFound => "ReportNotFound",
        ReportStillBuilding => "ReportStillBuilding",
        ReportFormatInvalid => "ReportFormatInvalid",
        ExportTooLarge => "ExportTooLarge",
        SettingNotFound => "SettingNotFound",
        SettingNameInvalid => "SettingNameInvalid",
        ParameterBagTooLarge => "ParameterBagTooLarge",
        ParameterNameInvalid => "ParameterNameInvalid",
        ParameterValueInvalid => "ParameterValueInvalid",
        MarketplaceCodeInvalid => "MarketplaceCodeInvalid",
        ReferenceCodeTooLong => "ReferenceCodeTooLong",
        PurchaseOrderTooLong => "PurchaseOrderTooLong",
        CustomerCodeRequired => "CustomerCodeRequired",
        CustomerNotFound => "CustomerNotFound",
        CustomerInactive => "CustomerInactive",
        VendorNotFound => "VendorNotFound",
        UpcCodeInvalid => "UpcCodeInvalid",
        UpcNotFound => "UpcNotFound",
        HsCodeInvalid => "HsCodeInvalid",
        HsCodeNotFound => "HsCodeNotFound",
        UnitOfMeasureInvalid => "UnitOfMeasureInvalid",
        AmountPrecisionExceeded => "AmountPrecisionExceeded",
        QuantityPrecisionExceeded => "QuantityPrecisionExceeded",
        TotalMismatch => "TotalMismatch",
        RefundPercentInvalid => "RefundPercentInvalid",
        RefundTypeInvalid => "RefundTypeInvalid",
        AdjustmentReasonRequired => "AdjustmentReasonRequired",
        AdjustmentDescriptionRequired => "AdjustmentDescriptionRequired",
        VoidReasonInvalid => "VoidReasonInvalid",
        CommitDisallowed => "CommitDisallowed",
        UncommitDisallowed => "UncommitDisallowed",
        ReconciledDocumentLocked => "ReconciledDocumentLocked",
        AuditTrailUnavailable => "AuditTrailUnavailable",
        WebhookUrlInvalid => "WebhookUrlInvalid",
        WebhookDeliveryFailed => "WebhookDeliveryFailed",
        NotificationNotFound => "NotificationNotFound",
        NotificationExpired => "NotificationExpired",
        IdentityServiceUnavailable => "IdentityServiceUnavailable",
        CalculationServiceUnavailable => "CalculationServiceUnavailable",
        AddressServiceUnavailable => "AddressServiceUnavailable",
        FilingServiceUnavailable => "FilingServiceUnavailable",
        MaintenanceInProgress => "MaintenanceInProgress",
        RequestTimedOut => "RequestTimedOut",
        RetryLimitReached => "RetryLimitReached",
        PayloadTooLarge => "PayloadTooLarge",
        UnsupportedMediaType => "UnsupportedMediaType",
        InvalidRequestUrl => "InvalidRequestUrl",
        MethodNotAllowed => "MethodNotAllowed",
        LiabilityPeriodLocked => "LiabilityPeriodLocked",
        ReturnNotFiled => "ReturnNotFiled",
        ReturnAlreadyFiled => "ReturnAlreadyFiled",
        MultiDocumentNotFound => "MultiDocumentNotFound",
        MultiDocumentPartiallyLocked => "MultiDocumentPartiallyLocked",
        MultiDocumentTypeMismatch => "MultiDocumentTypeMismatch",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_catalog_sized() {
        // The service catalog hovers around 190 codes.
        assert!(ErrorCode::WIRE_SYMBOLS.len() >= 180);
    }

    #[test]
    fn known_codes_resolve_and_print_their_symbol() {
        let code = ErrorCode::from_wire("ValidationException");
        assert_eq!(code, ErrorCode::ValidationException);
        assert_eq!(code.to_string(), "ValidationException");
    }

    #[test]
    fn unknown_codes_keep_the_raw_symbol() {
        let code = ErrorCode::from_wire("BrandNewFailureMode");
        assert_eq!(
            code,
            ErrorCode::Unrecognized("BrandNewFailureMode".to_string())
        );
        assert_eq!(code.as_wire(), "BrandNewFailureMode");
    }
}
