//! Type registry: the static description of every model and enumeration.
//!
//! The registry is populated once at process start from the generated
//! declarations in `taxrate-models`, then frozen. After
//! [`RegistryBuilder::freeze`] there is no mutation path, so lookups are safe
//! from any number of concurrent tasks without locking.

use std::collections::HashMap;

use crate::error::WireError;

/// Scalar shapes a field can take on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// UTF-8 text.
    String,
    /// Whole number, `i64` range.
    Integer,
    /// Exact decimal; never carried as a binary float.
    Decimal,
    /// True/false.
    Boolean,
    /// Point in time, RFC 3339 with offset on the wire.
    Instant,
}

impl PrimitiveKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Instant => "instant",
        }
    }
}

/// The semantic type of a field, as declared by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    /// A scalar.
    Primitive(PrimitiveKind),
    /// A closed enumeration, referenced by vocabulary name.
    Enum(&'static str),
    /// A nested model, referenced by model name.
    Model(&'static str),
    /// An ordered sequence of one element type.
    SequenceOf(Box<SemanticType>),
    /// A string-keyed mapping of one value type.
    MapOf(Box<SemanticType>),
    /// Caller-defined free-form properties: string keys, scalar values,
    /// passed through without model-aware decoding.
    OpaqueBag,
}

impl SemanticType {
    /// String scalar.
    pub fn string() -> Self {
        SemanticType::Primitive(PrimitiveKind::String)
    }

    /// Integer scalar.
    pub fn integer() -> Self {
        SemanticType::Primitive(PrimitiveKind::Integer)
    }

    /// Exact decimal scalar.
    pub fn decimal() -> Self {
        SemanticType::Primitive(PrimitiveKind::Decimal)
    }

    /// Boolean scalar.
    pub fn boolean() -> Self {
        SemanticType::Primitive(PrimitiveKind::Boolean)
    }

    /// Timestamp scalar.
    pub fn instant() -> Self {
        SemanticType::Primitive(PrimitiveKind::Instant)
    }

    /// Closed enumeration reference.
    pub fn enumeration(name: &'static str) -> Self {
        SemanticType::Enum(name)
    }

    /// Nested model reference.
    pub fn model(name: &'static str) -> Self {
        SemanticType::Model(name)
    }

    /// Sequence of `element`.
    pub fn sequence_of(element: SemanticType) -> Self {
        SemanticType::SequenceOf(Box::new(element))
    }

    /// String-keyed map of `value`.
    pub fn map_of(value: SemanticType) -> Self {
        SemanticType::MapOf(Box::new(value))
    }

    /// Opaque property bag.
    pub fn bag() -> Self {
        SemanticType::OpaqueBag
    }

    /// Human-readable name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            SemanticType::Primitive(kind) => kind.name().to_string(),
            SemanticType::Enum(name) => format!("enum {name}"),
            SemanticType::Model(name) => format!("model {name}"),
            SemanticType::SequenceOf(inner) => format!("sequence of {}", inner.name()),
            SemanticType::MapOf(inner) => format!("map of {}", inner.name()),
            SemanticType::OpaqueBag => "opaque bag".to_string(),
        }
    }
}

/// One field of a model: its exact JSON key, semantic type, and nullability.
///
/// Descriptors are built once per model by the generated declarations and
/// shared read-only by every instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The exact JSON key on the network.
    pub wire_name: &'static str,
    /// The declared semantic type.
    pub semantic: SemanticType,
    /// Whether the field may be absent or explicitly null.
    pub nullable: bool,
}

impl FieldDescriptor {
    /// A field the service always expects a value for.
    pub fn required(wire_name: &'static str, semantic: SemanticType) -> Self {
        Self {
            wire_name,
            semantic,
            nullable: false,
        }
    }

    /// A field that may be absent or null.
    pub fn nullable(wire_name: &'static str, semantic: SemanticType) -> Self {
        Self {
            wire_name,
            semantic,
            nullable: true,
        }
    }
}

/// The registry entry for one model: its name and ordered field descriptors.
///
/// Field order is declaration order and is preserved in serialized output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    name: &'static str,
    fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
    /// Build a descriptor. Wire-name uniqueness within a model is a
    /// generator-upheld invariant, checked here in debug builds.
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
        debug_assert!(
            {
                let mut names: Vec<&str> = fields.iter().map(|f| f.wire_name).collect();
                names.sort_unstable();
                names.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate wire name in model {name}"
        );
        Self { name, fields }
    }

    /// The model's logical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by its exact wire name.
    pub fn field(&self, wire_name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }
}

/// The registry entry for one closed enumeration vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDescriptor {
    name: &'static str,
    symbols: &'static [&'static str],
}

impl EnumDescriptor {
    /// Build a descriptor over a static symbol table.
    pub fn new(name: &'static str, symbols: &'static [&'static str]) -> Self {
        Self { name, symbols }
    }

    /// The vocabulary's logical name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All known wire symbols, in declaration order.
    pub fn symbols(&self) -> &'static [&'static str] {
        self.symbols
    }

    /// Resolve a raw wire symbol to its interned form, if known.
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        self.symbols.iter().copied().find(|s| *s == raw)
    }
}

/// Accumulates model and enumeration descriptors during process
/// initialization, then freezes into an immutable [`TypeRegistry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    models: HashMap<&'static str, TypeDescriptor>,
    enums: HashMap<&'static str, EnumDescriptor>,
}

impl RegistryBuilder {
    /// Start an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model descriptor. Model-name uniqueness is a
    /// generator-upheld invariant, checked in debug builds.
    pub fn model(mut self, descriptor: TypeDescriptor) -> Self {
        let previous = self.models.insert(descriptor.name(), descriptor);
        debug_assert!(previous.is_none(), "model registered twice");
        self
    }

    /// Register an enumeration descriptor.
    pub fn enumeration(mut self, descriptor: EnumDescriptor) -> Self {
        let previous = self.enums.insert(descriptor.name(), descriptor);
        debug_assert!(previous.is_none(), "enumeration registered twice");
        self
    }

    /// Freeze into an immutable registry. There is no way back to a builder.
    pub fn freeze(self) -> TypeRegistry {
        TypeRegistry {
            models: self.models,
            enums: self.enums,
        }
    }
}

/// Immutable mapping from logical names to descriptors.
///
/// Frozen at initialization; lookups never lock and may run concurrently.
#[derive(Debug)]
pub struct TypeRegistry {
    models: HashMap<&'static str, TypeDescriptor>,
    enums: HashMap<&'static str, EnumDescriptor>,
}

impl TypeRegistry {
    /// Look up a model descriptor by name.
    pub fn describe(&self, model: &str) -> Result<&TypeDescriptor, WireError> {
        self.models
            .get(model)
            .ok_or_else(|| WireError::UnknownModel(model.to_string()))
    }

    /// Look up an enumeration descriptor by name.
    pub fn enumeration(&self, name: &str) -> Result<&EnumDescriptor, WireError> {
        self.enums
            .get(name)
            .ok_or_else(|| WireError::UnknownEnum(name.to_string()))
    }

    /// Whether a model with this name is registered.
    pub fn contains_model(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    /// Number of registered models.
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// Number of registered enumerations.
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeRegistry {
        RegistryBuilder::new()
            .model(TypeDescriptor::new(
                "Probe",
                vec![
                    FieldDescriptor::required("name", SemanticType::string()),
                    FieldDescriptor::nullable("weight", SemanticType::decimal()),
                ],
            ))
            .enumeration(EnumDescriptor::new("Mood", &["Calm", "Stormy"]))
            .freeze()
    }

    #[test]
    fn describe_finds_registered_model() {
        let registry = sample();
        let descriptor = registry.describe("Probe").unwrap();
        assert_eq!(descriptor.name(), "Probe");
        assert_eq!(descriptor.fields().len(), 2);
        assert!(descriptor.field("weight").unwrap().nullable);
    }

    #[test]
    fn describe_unknown_model_errors() {
        let registry = sample();
        assert_eq!(
            registry.describe("Ghost"),
            Err(WireError::UnknownModel("Ghost".to_string()))
        );
    }

    #[test]
    fn enumeration_resolves_known_symbols_only() {
        let registry = sample();
        let mood = registry.enumeration("Mood").unwrap();
        assert_eq!(mood.resolve("Calm"), Some("Calm"));
        assert_eq!(mood.resolve("Sunny"), None);
    }

    #[test]
    fn field_lookup_is_case_sensitive() {
        let registry = sample();
        let descriptor = registry.describe("Probe").unwrap();
        assert!(descriptor.field("name").is_some());
        assert!(descriptor.field("Name").is_none());
    }
}
