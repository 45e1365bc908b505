#![warn(missing_docs)]

//! # taxrate-core — Marshalling Core for the Taxrate Client SDK
//!
//! Everything needed to move a typed object graph to and from the Taxrate
//! wire format, with no per-model conversion code:
//!
//! - [`registry`] — the frozen [`TypeRegistry`] of model and enumeration
//!   descriptors, built once at process start and read-only thereafter.
//! - [`value`] — [`ModelInstance`], the tri-state (absent / null / value)
//!   field bag callers construct and inspect, plus [`WireValue`] and the
//!   [`EnumValue`] forward-compatibility sentinel.
//! - [`codec`] — scalar conversions; exact decimals, one canonical
//!   timestamp format, sentinel-tolerant enumerations, opaque bags.
//! - [`graph`] — [`GraphCodec`], the single descriptor-driven walker for
//!   both serialization directions.
//! - [`error`] — the local [`WireError`] taxonomy; every variant is
//!   detectable without a network round-trip.
//!
//! ## Design Principles
//!
//! 1. **Data-driven marshalling.** Serialization logic is one generic walker
//!    over descriptor data, not per-type code.
//! 2. **Absent is not null.** Omitted wire keys and explicit `null` are
//!    distinct states end to end.
//! 3. **Strict out, tolerant in.** Encoding validates against descriptors;
//!    decoding ignores unknown keys and keeps unknown enum symbols as
//!    sentinels so newer servers never break older clients.
//! 4. **No binary floats for money.** Decimal fields ride
//!    [`rust_decimal::Decimal`] and exact JSON literals throughout.

pub mod codec;
pub mod error;
pub mod graph;
pub mod registry;
pub mod value;

pub use error::WireError;
pub use graph::{GraphCodec, MAX_DEPTH};
pub use registry::{
    EnumDescriptor, FieldDescriptor, PrimitiveKind, RegistryBuilder, SemanticType, TypeDescriptor,
    TypeRegistry,
};
pub use value::{BagScalar, EnumValue, ModelInstance, WireValue};
