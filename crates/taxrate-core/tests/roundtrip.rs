//! Property tests: wire round-trips preserve every present field exactly.

use chrono::FixedOffset;
use proptest::prelude::*;
use rust_decimal::Decimal;
use taxrate_core::{
    FieldDescriptor, GraphCodec, ModelInstance, RegistryBuilder, SemanticType, TypeDescriptor,
    TypeRegistry,
};

fn registry() -> TypeRegistry {
    RegistryBuilder::new()
        .model(TypeDescriptor::new(
            "Sample",
            vec![
                FieldDescriptor::required("code", SemanticType::string()),
                FieldDescriptor::nullable("count", SemanticType::integer()),
                FieldDescriptor::nullable("flag", SemanticType::boolean()),
                FieldDescriptor::nullable("amount", SemanticType::decimal()),
                FieldDescriptor::nullable("when", SemanticType::instant()),
                FieldDescriptor::nullable("note", SemanticType::string()),
            ],
        ))
        .freeze()
}

proptest! {
    #[test]
    fn scalars_round_trip_exactly(
        code in "[A-Za-z0-9-]{1,12}",
        count in any::<i64>(),
        flag in any::<bool>(),
        mantissa in any::<i64>(),
        scale in 0u32..=9,
        note in proptest::option::of("[a-z ]{0,16}"),
    ) {
        let amount = Decimal::from_i128_with_scale(i128::from(mantissa), scale);
        let mut instance = ModelInstance::new("Sample");
        instance
            .set("code", code)
            .set("count", count)
            .set("flag", flag)
            .set("amount", amount);
        if let Some(note) = note {
            instance.set("note", note);
        }

        let registry = registry();
        let codec = GraphCodec::new(&registry);
        let wire = codec.serialize(&instance).unwrap();

        // Through text, the same way the transport carries it.
        let text = wire.to_string();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        let back = codec.deserialize("Sample", &parsed).unwrap();

        prop_assert_eq!(back, instance);
    }

    #[test]
    fn timestamps_round_trip_across_offsets(
        secs in -1_000_000_000i64..4_000_000_000i64,
        offset_minutes in -840i32..=840,
    ) {
        let offset = FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let when = chrono::DateTime::from_timestamp(secs, 0)
            .unwrap()
            .with_timezone(&offset);

        let instance = ModelInstance::new("Sample")
            .with("code", "T")
            .with("when", when);

        let registry = registry();
        let codec = GraphCodec::new(&registry);
        let wire = codec.serialize(&instance).unwrap();
        let back = codec.deserialize("Sample", &wire).unwrap();

        prop_assert_eq!(back.instant("when"), Some(when));
    }

    #[test]
    fn absent_fields_never_materialize(
        code in "[A-Z]{1,6}",
    ) {
        let instance = ModelInstance::new("Sample").with("code", code);

        let registry = registry();
        let codec = GraphCodec::new(&registry);
        let wire = codec.serialize(&instance).unwrap();

        let object = wire.as_object().unwrap();
        prop_assert_eq!(object.len(), 1);
        prop_assert!(object.contains_key("code"));

        let back = codec.deserialize("Sample", &wire).unwrap();
        prop_assert!(!back.is_set("count"));
        prop_assert!(!back.is_set("amount"));
        prop_assert!(!back.is_set("when"));
    }
}
