//! Graph serializer/deserializer: a single descriptor-driven walker.
//!
//! No per-model conversion code exists anywhere in the workspace — both
//! directions are driven entirely by [`TypeDescriptor`] data. Serialization
//! emits fields in declaration order and omits absent fields; deserialization
//! ignores wire keys with no matching descriptor and leaves absent fields
//! absent.

use serde_json::Value;

use crate::codec;
use crate::error::WireError;
use crate::registry::{SemanticType, TypeRegistry};
use crate::value::{ModelInstance, WireValue};

/// Recursion ceiling for both walks. Model schemas are tree-shaped; hitting
/// this depth means a cyclic schema or a pathologically deep payload, and the
/// walk fails with [`WireError::CyclicGraph`] instead of recursing further.
pub const MAX_DEPTH: usize = 64;

/// Bidirectional converter between model instances and wire JSON.
///
/// Holds only a shared reference to the frozen registry; construct one
/// wherever needed, it is free.
#[derive(Debug, Clone, Copy)]
pub struct GraphCodec<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> GraphCodec<'r> {
    /// A codec over the given frozen registry.
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Serialize an instance graph to wire JSON.
    ///
    /// Fields are emitted in declaration order. Absent fields are omitted
    /// entirely — not written as `null` — so partial updates never overwrite
    /// server-side state the caller did not touch.
    pub fn serialize(&self, instance: &ModelInstance) -> Result<Value, WireError> {
        self.serialize_model(instance, 0)
    }

    /// Deserialize wire JSON against the named model's descriptor.
    ///
    /// Wire keys without a matching descriptor are ignored (the service may
    /// be newer than this client); fields absent from the payload stay
    /// absent in the result, never defaulted.
    pub fn deserialize(&self, model: &str, wire: &Value) -> Result<ModelInstance, WireError> {
        self.deserialize_model(model, wire, 0)
    }

    fn serialize_model(&self, instance: &ModelInstance, depth: usize) -> Result<Value, WireError> {
        let descriptor = self.registry.describe(instance.model())?;
        let mut object = serde_json::Map::new();
        for field in descriptor.fields() {
            match instance.get(field.wire_name) {
                None => {}
                Some(WireValue::Null) => {
                    if field.nullable {
                        object.insert(field.wire_name.to_string(), Value::Null);
                    } else {
                        return Err(WireError::TypeMismatch {
                            model: descriptor.name().to_string(),
                            field: field.wire_name.to_string(),
                            expected: field.semantic.name(),
                            actual: "null".to_string(),
                        });
                    }
                }
                Some(value) => {
                    let encoded = self.encode_value(
                        &field.semantic,
                        value,
                        descriptor.name(),
                        field.wire_name,
                        depth,
                    )?;
                    object.insert(field.wire_name.to_string(), encoded);
                }
            }
        }
        Ok(Value::Object(object))
    }

    fn deserialize_model(
        &self,
        model: &str,
        wire: &Value,
        depth: usize,
    ) -> Result<ModelInstance, WireError> {
        let descriptor = self.registry.describe(model)?;
        let object = match wire {
            Value::Object(object) => object,
            other => {
                return Err(WireError::TypeMismatch {
                    model: descriptor.name().to_string(),
                    field: "$".to_string(),
                    expected: "object".to_string(),
                    actual: codec::json_kind(other).to_string(),
                })
            }
        };
        let mut instance = ModelInstance::new(descriptor.name());
        for (key, value) in object {
            // Exact, case-sensitive match; unknown keys are a newer server's
            // business, not an error.
            let Some(field) = descriptor.field(key) else {
                continue;
            };
            if value.is_null() {
                instance.set_null(field.wire_name);
                continue;
            }
            let decoded = self.decode_value(
                &field.semantic,
                value,
                descriptor.name(),
                field.wire_name,
                depth,
            )?;
            instance.set(field.wire_name, decoded);
        }
        Ok(instance)
    }

    fn encode_value(
        &self,
        semantic: &SemanticType,
        value: &WireValue,
        model: &str,
        field: &str,
        depth: usize,
    ) -> Result<Value, WireError> {
        if depth >= MAX_DEPTH {
            return Err(WireError::CyclicGraph {
                model: model.to_string(),
                field: field.to_string(),
                limit: MAX_DEPTH,
            });
        }
        match semantic {
            SemanticType::Primitive(kind) => codec::encode_primitive(*kind, value, model, field),
            SemanticType::Enum(name) => {
                self.registry.enumeration(name)?;
                match value {
                    WireValue::Enum(symbol) => Ok(codec::encode_enum(symbol)),
                    other => Err(self.shape_mismatch(semantic, other, model, field)),
                }
            }
            SemanticType::Model(name) => match value {
                WireValue::Model(nested) if nested.model() == *name => {
                    self.serialize_model(nested, depth + 1)
                }
                other => Err(self.shape_mismatch(semantic, other, model, field)),
            },
            SemanticType::SequenceOf(element) => match value {
                WireValue::Sequence(items) => {
                    let mut encoded = Vec::with_capacity(items.len());
                    for item in items {
                        encoded.push(self.encode_value(element, item, model, field, depth + 1)?);
                    }
                    Ok(Value::Array(encoded))
                }
                other => Err(self.shape_mismatch(semantic, other, model, field)),
            },
            SemanticType::MapOf(element) => match value {
                WireValue::Map(entries) => {
                    let mut object = serde_json::Map::new();
                    for (key, entry) in entries {
                        object.insert(
                            key.clone(),
                            self.encode_value(element, entry, model, field, depth + 1)?,
                        );
                    }
                    Ok(Value::Object(object))
                }
                other => Err(self.shape_mismatch(semantic, other, model, field)),
            },
            SemanticType::OpaqueBag => match value {
                WireValue::Bag(bag) => Ok(codec::encode_bag(bag)),
                other => Err(self.shape_mismatch(semantic, other, model, field)),
            },
        }
    }

    fn decode_value(
        &self,
        semantic: &SemanticType,
        wire: &Value,
        model: &str,
        field: &str,
        depth: usize,
    ) -> Result<WireValue, WireError> {
        if depth >= MAX_DEPTH {
            return Err(WireError::CyclicGraph {
                model: model.to_string(),
                field: field.to_string(),
                limit: MAX_DEPTH,
            });
        }
        match semantic {
            SemanticType::Primitive(kind) => codec::decode_primitive(*kind, wire, model, field),
            SemanticType::Enum(name) => {
                let descriptor = self.registry.enumeration(name)?;
                codec::decode_enum(descriptor, wire, model, field)
            }
            SemanticType::Model(name) => self
                .deserialize_model(name, wire, depth + 1)
                .map(WireValue::Model),
            SemanticType::SequenceOf(element) => match wire {
                Value::Array(items) => {
                    let mut decoded = Vec::with_capacity(items.len());
                    for item in items {
                        decoded.push(self.decode_value(element, item, model, field, depth + 1)?);
                    }
                    Ok(WireValue::Sequence(decoded))
                }
                other => Err(self.wire_mismatch(semantic, other, model, field)),
            },
            SemanticType::MapOf(element) => match wire {
                Value::Object(entries) => {
                    let mut decoded = std::collections::BTreeMap::new();
                    for (key, entry) in entries {
                        decoded.insert(
                            key.clone(),
                            self.decode_value(element, entry, model, field, depth + 1)?,
                        );
                    }
                    Ok(WireValue::Map(decoded))
                }
                other => Err(self.wire_mismatch(semantic, other, model, field)),
            },
            SemanticType::OpaqueBag => codec::decode_bag(wire, model, field),
        }
    }

    fn shape_mismatch(
        &self,
        semantic: &SemanticType,
        value: &WireValue,
        model: &str,
        field: &str,
    ) -> WireError {
        WireError::TypeMismatch {
            model: model.to_string(),
            field: field.to_string(),
            expected: semantic.name(),
            actual: value.kind_name().to_string(),
        }
    }

    fn wire_mismatch(
        &self,
        semantic: &SemanticType,
        wire: &Value,
        model: &str,
        field: &str,
    ) -> WireError {
        WireError::TypeMismatch {
            model: model.to_string(),
            field: field.to_string(),
            expected: semantic.name(),
            actual: codec::json_kind(wire).to_string(),
        }
    }
}
