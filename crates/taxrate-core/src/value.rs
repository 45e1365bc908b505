//! In-memory value model: typed field values and the model instance bag.
//!
//! A [`ModelInstance`] is a mutable, name-keyed bag of [`WireValue`]s
//! conforming to one registered model. Fields are tri-state: absent (no
//! entry), explicitly null ([`WireValue::Null`]), or a value. Absent and
//! null are deliberately distinct — the serializer omits absent fields and
//! emits `null` for explicit nulls, which matters for partial updates.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;

/// One enumeration value: either a symbol from the closed vocabulary or the
/// sentinel carrying a wire symbol this client version does not know yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumValue {
    /// A symbol present in the registered vocabulary.
    Known(&'static str),
    /// A symbol outside the vocabulary, preserved verbatim so that
    /// forward-compatible payloads re-encode unchanged.
    Unrecognized(String),
}

impl EnumValue {
    /// The wire symbol, recognized or not.
    pub fn as_wire(&self) -> &str {
        match self {
            EnumValue::Known(symbol) => symbol,
            EnumValue::Unrecognized(raw) => raw.as_str(),
        }
    }

    /// Whether the symbol was part of the registered vocabulary.
    pub fn is_recognized(&self) -> bool {
        matches!(self, EnumValue::Known(_))
    }
}

impl std::fmt::Display for EnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// A scalar inside an opaque property bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BagScalar {
    /// Text value.
    String(String),
    /// Numeric value, kept as the JSON literal to avoid float coercion.
    Number(serde_json::Number),
    /// Boolean value.
    Bool(bool),
}

/// A field value inside a [`ModelInstance`].
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Explicit null — present on the wire as `null`, unlike an absent field.
    Null,
    /// Boolean scalar.
    Boolean(bool),
    /// Integer scalar.
    Integer(i64),
    /// Exact decimal scalar.
    Decimal(Decimal),
    /// String scalar.
    String(String),
    /// Timestamp scalar.
    Instant(DateTime<FixedOffset>),
    /// Enumeration value.
    Enum(EnumValue),
    /// Opaque property bag.
    Bag(BTreeMap<String, BagScalar>),
    /// Ordered sequence.
    Sequence(Vec<WireValue>),
    /// String-keyed map.
    Map(BTreeMap<String, WireValue>),
    /// Nested model.
    Model(ModelInstance),
}

impl WireValue {
    /// Diagnostic name for this value's shape.
    pub fn kind_name(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Boolean(_) => "boolean",
            WireValue::Integer(_) => "integer",
            WireValue::Decimal(_) => "decimal",
            WireValue::String(_) => "string",
            WireValue::Instant(_) => "instant",
            WireValue::Enum(_) => "enum",
            WireValue::Bag(_) => "opaque bag",
            WireValue::Sequence(_) => "sequence",
            WireValue::Map(_) => "map",
            WireValue::Model(_) => "model",
        }
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::String(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::String(value)
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Integer(value)
    }
}

impl From<i32> for WireValue {
    fn from(value: i32) -> Self {
        WireValue::Integer(i64::from(value))
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Boolean(value)
    }
}

impl From<Decimal> for WireValue {
    fn from(value: Decimal) -> Self {
        WireValue::Decimal(value)
    }
}

impl From<DateTime<FixedOffset>> for WireValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        WireValue::Instant(value)
    }
}

impl From<EnumValue> for WireValue {
    fn from(value: EnumValue) -> Self {
        WireValue::Enum(value)
    }
}

impl From<ModelInstance> for WireValue {
    fn from(value: ModelInstance) -> Self {
        WireValue::Model(value)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(value: Vec<WireValue>) -> Self {
        WireValue::Sequence(value)
    }
}

/// A mutable bag of named field values conforming to one registered model.
///
/// Owned exclusively by the caller that constructed it; the marshalling core
/// never retains references past a single serialize/deserialize call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    model: String,
    fields: BTreeMap<String, WireValue>,
}

impl ModelInstance {
    /// An empty instance of the named model. Field values are validated
    /// against the model's descriptors at serialization time.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            fields: BTreeMap::new(),
        }
    }

    /// The model name this instance conforms to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Set a field value, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<WireValue>) -> &mut Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Set a field to explicit null (present on the wire as `null`).
    pub fn set_null(&mut self, field: impl Into<String>) -> &mut Self {
        self.fields.insert(field.into(), WireValue::Null);
        self
    }

    /// Builder-style [`set`](Self::set) for construction chains.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<WireValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Remove a field, returning it to the absent state.
    pub fn clear(&mut self, field: &str) -> Option<WireValue> {
        self.fields.remove(field)
    }

    /// Whether the field is present (value or explicit null).
    pub fn is_set(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&WireValue> {
        self.fields.get(field)
    }

    /// String accessor; `None` when absent, null, or another shape.
    pub fn string(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(WireValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Integer accessor.
    pub fn integer(&self, field: &str) -> Option<i64> {
        match self.fields.get(field) {
            Some(WireValue::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Decimal accessor.
    pub fn decimal(&self, field: &str) -> Option<Decimal> {
        match self.fields.get(field) {
            Some(WireValue::Decimal(d)) => Some(*d),
            _ => None,
        }
    }

    /// Boolean accessor.
    pub fn boolean(&self, field: &str) -> Option<bool> {
        match self.fields.get(field) {
            Some(WireValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Timestamp accessor.
    pub fn instant(&self, field: &str) -> Option<DateTime<FixedOffset>> {
        match self.fields.get(field) {
            Some(WireValue::Instant(t)) => Some(*t),
            _ => None,
        }
    }

    /// Enumeration accessor.
    pub fn enumeration(&self, field: &str) -> Option<&EnumValue> {
        match self.fields.get(field) {
            Some(WireValue::Enum(e)) => Some(e),
            _ => None,
        }
    }

    /// Sequence accessor.
    pub fn sequence(&self, field: &str) -> Option<&[WireValue]> {
        match self.fields.get(field) {
            Some(WireValue::Sequence(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// String-keyed map accessor.
    pub fn map(&self, field: &str) -> Option<&BTreeMap<String, WireValue>> {
        match self.fields.get(field) {
            Some(WireValue::Map(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Nested-model accessor.
    pub fn nested(&self, field: &str) -> Option<&ModelInstance> {
        match self.fields.get(field) {
            Some(WireValue::Model(instance)) => Some(instance),
            _ => None,
        }
    }

    /// Opaque-bag accessor.
    pub fn bag(&self, field: &str) -> Option<&BTreeMap<String, BagScalar>> {
        match self.fields.get(field) {
            Some(WireValue::Bag(entries)) => Some(entries),
            _ => None,
        }
    }

    /// Names of all present fields.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    /// Number of present fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_null_and_value_are_three_distinct_states() {
        let mut instance = ModelInstance::new("Probe");
        assert!(!instance.is_set("amount"));

        instance.set_null("amount");
        assert!(instance.is_set("amount"));
        assert_eq!(instance.get("amount"), Some(&WireValue::Null));
        assert_eq!(instance.decimal("amount"), None);

        instance.set("amount", Decimal::new(100, 2));
        assert_eq!(instance.decimal("amount"), Some(Decimal::new(100, 2)));

        instance.clear("amount");
        assert!(!instance.is_set("amount"));
    }

    #[test]
    fn typed_accessors_reject_other_shapes() {
        let instance = ModelInstance::new("Probe")
            .with("name", "ACME")
            .with("count", 3i64);
        assert_eq!(instance.string("name"), Some("ACME"));
        assert_eq!(instance.integer("name"), None);
        assert_eq!(instance.integer("count"), Some(3));
        assert_eq!(instance.string("count"), None);
    }

    #[test]
    fn unrecognized_enum_keeps_raw_symbol() {
        let value = EnumValue::Unrecognized("SomeFutureStatus".to_string());
        assert_eq!(value.as_wire(), "SomeFutureStatus");
        assert!(!value.is_recognized());
    }
}
