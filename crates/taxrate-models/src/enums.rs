//! Closed enumeration vocabularies used across the model declarations.
//!
//! Every vocabulary is a closed set of wire symbols plus one
//! `Unrecognized(String)` sentinel. The service adds symbols over time;
//! resolving an unknown symbol must never fail, and re-encoding the sentinel
//! emits the raw symbol unchanged.

/// Declare a closed wire vocabulary with an `Unrecognized` sentinel.
///
/// Generates the enum, `from_wire`/`as_wire` conversions, the static symbol
/// table, and a [`taxrate_core::EnumDescriptor`] for registry registration.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Sentinel for wire symbols outside the currently known set.
            Unrecognized(String),
        }

        impl $name {
            /// Every known wire symbol, in declaration order.
            pub const WIRE_SYMBOLS: &'static [&'static str] = &[ $( $wire, )+ ];

            /// Resolve a wire symbol, degrading to [`Self::Unrecognized`]
            /// instead of failing.
            pub fn from_wire(raw: &str) -> Self {
                match raw {
                    $( $wire => Self::$variant, )+
                    other => Self::Unrecognized(other.to_string()),
                }
            }

            /// The wire symbol for this value.
            pub fn as_wire(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unrecognized(raw) => raw.as_str(),
                }
            }

            /// This vocabulary as a core enum value, for setting model fields.
            pub fn wire_value(&self) -> taxrate_core::EnumValue {
                match self {
                    Self::Unrecognized(raw) => {
                        taxrate_core::EnumValue::Unrecognized(raw.clone())
                    }
                    $( Self::$variant => taxrate_core::EnumValue::Known($wire), )+
                }
            }

            /// Registry descriptor for this vocabulary.
            pub fn descriptor() -> taxrate_core::EnumDescriptor {
                taxrate_core::EnumDescriptor::new(stringify!($name), Self::WIRE_SYMBOLS)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_wire())
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Kinds of documents a transaction can represent. Orders are quotes and
    /// are never filed; invoices are permanent once committed.
    pub enum DocumentType {
        SalesOrder => "SalesOrder",
        SalesInvoice => "SalesInvoice",
        PurchaseOrder => "PurchaseOrder",
        PurchaseInvoice => "PurchaseInvoice",
        ReturnOrder => "ReturnOrder",
        ReturnInvoice => "ReturnInvoice",
        InventoryTransferOrder => "InventoryTransferOrder",
        InventoryTransferInvoice => "InventoryTransferInvoice",
        Any => "Any",
    }
}

wire_enum! {
    /// Lifecycle status of a transaction document.
    pub enum DocumentStatus {
        Temporary => "Temporary",
        Saved => "Saved",
        Posted => "Posted",
        Committed => "Committed",
        Cancelled => "Cancelled",
        Adjusted => "Adjusted",
        Queued => "Queued",
        PendingApproval => "PendingApproval",
    }
}

wire_enum! {
    /// What a location address represents.
    pub enum AddressType {
        Location => "Location",
        Salesperson => "Salesperson",
        Marketplace => "Marketplace",
    }
}

wire_enum! {
    /// The business purpose of a location.
    pub enum AddressCategory {
        Storage => "Storage",
        MainOffice => "MainOffice",
        Warehouse => "Warehouse",
        Salesperson => "Salesperson",
        Other => "Other",
    }
}

wire_enum! {
    /// Level of a taxing jurisdiction.
    pub enum JurisdictionType {
        Country => "Country",
        State => "State",
        County => "County",
        City => "City",
        Special => "Special",
    }
}

wire_enum! {
    /// The kind of nexus a company has declared in a jurisdiction.
    pub enum NexusType {
        None => "None",
        SalesOrSellersUseTax => "SalesOrSellersUseTax",
        SalesTax => "SalesTax",
        Volunteer => "Volunteer",
        NonVolunteer => "NonVolunteer",
    }
}

wire_enum! {
    /// How often a return on a filing calendar is due.
    pub enum FilingFrequency {
        Monthly => "Monthly",
        Quarterly => "Quarterly",
        SemiAnnually => "SemiAnnually",
        Annually => "Annually",
        Bimonthly => "Bimonthly",
        Occasional => "Occasional",
        InverseQuarterly => "InverseQuarterly",
        Weekly => "Weekly",
    }
}

wire_enum! {
    /// Review status of a filing calendar change request.
    pub enum FilingRequestStatus {
        New => "New",
        Validated => "Validated",
        Pending => "Pending",
        Active => "Active",
        PendingStop => "PendingStop",
        Inactive => "Inactive",
        ChangeRequest => "ChangeRequest",
        RequestApproved => "RequestApproved",
        RequestDenied => "RequestDenied",
    }
}

wire_enum! {
    /// Severity of a message or error detail.
    pub enum SeverityLevel {
        Success => "Success",
        Warning => "Warning",
        Error => "Error",
        Exception => "Exception",
    }
}

wire_enum! {
    /// Precision of a resolved address, best to worst.
    pub enum ResolutionQuality {
        NotCoded => "NotCoded",
        External => "External",
        CountryCentroid => "CountryCentroid",
        RegionCentroid => "RegionCentroid",
        PartialCentroid => "PartialCentroid",
        PostalCentroidGood => "PostalCentroidGood",
        PostalCentroidBetter => "PostalCentroidBetter",
        PostalCentroidBest => "PostalCentroidBest",
        Intersection => "Intersection",
        Interpolated => "Interpolated",
        Rooftop => "Rooftop",
        Constant => "Constant",
    }
}

wire_enum! {
    /// Boundary precision used when locating an address in tax boundaries.
    pub enum BoundaryLevel {
        Address => "Address",
        Zip9 => "Zip9",
        Zip5 => "Zip5",
    }
}

wire_enum! {
    /// Reason a committed document was voided.
    pub enum VoidReasonCode {
        Unspecified => "Unspecified",
        PostFailed => "PostFailed",
        DocDeleted => "DocDeleted",
        DocVoided => "DocVoided",
        AdjustmentCancelled => "AdjustmentCancelled",
    }
}

wire_enum! {
    /// Ways a caller may override the engine's own calculation on a
    /// transaction or line.
    pub enum TaxOverrideType {
        None => "None",
        TaxAmount => "TaxAmount",
        Exemption => "Exemption",
        TaxDate => "TaxDate",
        AccruedTaxAmount => "AccruedTaxAmount",
        DeriveTaxable => "DeriveTaxable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_wire_resolves_known_symbols() {
        assert_eq!(DocumentType::from_wire("SalesInvoice"), DocumentType::SalesInvoice);
        assert_eq!(TaxOverrideType::from_wire("TaxDate"), TaxOverrideType::TaxDate);
    }

    #[test]
    fn unknown_symbols_become_the_sentinel_and_round_trip() {
        let got = DocumentStatus::from_wire("SomeFutureStatus");
        assert_eq!(
            got,
            DocumentStatus::Unrecognized("SomeFutureStatus".to_string())
        );
        assert_eq!(got.as_wire(), "SomeFutureStatus");
    }

    #[test]
    fn override_vocabulary_has_exactly_six_symbols() {
        assert_eq!(TaxOverrideType::WIRE_SYMBOLS.len(), 6);
    }

    #[test]
    fn wire_value_interns_known_symbols() {
        assert_eq!(
            DocumentType::SalesOrder.wire_value(),
            taxrate_core::EnumValue::Known("SalesOrder")
        );
    }
}
