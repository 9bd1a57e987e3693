//! Market data identifier definitions.

use crate::{define_market_data_id, FxMatrix, ObservableSource};

// =============================================================================
// FX
// =============================================================================

define_market_data_id! {
    /// Identifies the market data for an FX matrix.
    pub struct FxMatrixId => FxMatrix {
        /// The source of observable market data, used when looking up the
        /// underlying market quotes for the rates.
        observable_source: ObservableSource,
    }
    builder FxMatrixIdBuilder;
}

/// The canonical identifier, with no particular source.
static STANDARD_FX_MATRIX_ID: FxMatrixId = FxMatrixId::from_fields(ObservableSource::None);

impl FxMatrixId {
    /// Returns the standard identifier for the FX matrix.
    ///
    /// Every call returns the same instance.
    #[must_use]
    pub fn standard() -> &'static FxMatrixId {
        &STANDARD_FX_MATRIX_ID
    }

    /// Creates an identifier for the FX matrix from the given source.
    #[must_use]
    pub fn of(observable_source: ObservableSource) -> Self {
        Self::from_fields(observable_source)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;
    use crate::{Bean, BeanBuilder, IdError, MarketDataId, PropertyValue, TypeDescriptor};

    fn bbg() -> ObservableSource {
        ObservableSource::named("BBG").unwrap()
    }

    fn arb_source() -> impl Strategy<Value = ObservableSource> {
        prop_oneof![
            Just(ObservableSource::None),
            "[A-Za-z_][A-Za-z0-9_]{0,12}"
                .prop_filter_map("reserved name", |s| ObservableSource::named(&s).ok()),
        ]
    }

    #[test]
    fn test_standard_is_singleton() {
        let a = FxMatrixId::standard();
        let b = FxMatrixId::standard();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a, b));
        assert!(a.observable_source().is_none());
    }

    #[test]
    fn test_of_none_equals_standard() {
        let id = FxMatrixId::of(ObservableSource::None);
        assert_eq!(&id, FxMatrixId::standard());
        assert_eq!(id.cached_hash(), FxMatrixId::standard().cached_hash());
    }

    #[test]
    fn test_of_distinguishes_sources() {
        assert_ne!(FxMatrixId::of(bbg()), *FxMatrixId::standard());
        assert_eq!(FxMatrixId::of(bbg()), FxMatrixId::of(bbg()));
    }

    #[test]
    fn test_display() {
        let id = FxMatrixId::of(ObservableSource::None);
        assert_eq!(id.to_string(), "FxMatrixId{observable_source=None}");
        assert_eq!(id.to_string(), id.to_string());
        assert_eq!(
            FxMatrixId::of(bbg()).to_string(),
            "FxMatrixId{observable_source=BBG}"
        );
    }

    #[test]
    fn test_debug_hides_hash_cache() {
        let id = FxMatrixId::of(bbg());
        let _ = id.cached_hash();
        let debug = format!("{id:?}");
        assert!(debug.starts_with("FxMatrixId"));
        assert!(!debug.contains("hash_cache"));
    }

    #[test]
    fn test_market_data_type() {
        let descriptor = FxMatrixId::standard().market_data_type();
        assert_eq!(descriptor, TypeDescriptor::of::<FxMatrix>());
        assert!(descriptor.matches(&FxMatrix::new()));
        assert!(!descriptor.matches(&1.0f64));
        assert_eq!(descriptor.simple_name(), "FxMatrix");
    }

    #[test]
    fn test_property_names() {
        let names: Vec<_> = FxMatrixId::property_names().collect();
        assert_eq!(names, vec!["observable_source"]);
    }

    #[test]
    fn test_property_access() {
        let id = FxMatrixId::of(bbg());
        assert_eq!(
            id.property("observable_source").unwrap(),
            PropertyValue::ObservableSource(bbg())
        );
        assert!(matches!(
            id.property("bogus").unwrap_err(),
            IdError::UnknownProperty { bean: "FxMatrixId", .. }
        ));
        assert_eq!(id.property_quiet("bogus"), None);
    }

    #[test]
    fn test_set_on_built_id_is_read_only() {
        let err = FxMatrixId::standard()
            .set_property("observable_source", PropertyValue::from(bbg()))
            .unwrap_err();
        assert_eq!(
            err,
            IdError::ReadOnlyProperty {
                bean: "FxMatrixId",
                name: "observable_source".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_builder_fails_validation() {
        let err = FxMatrixId::builder().build().unwrap_err();
        assert_eq!(
            err,
            IdError::Validation {
                bean: "FxMatrixId",
                missing: vec!["observable_source"],
            }
        );
    }

    #[test]
    fn test_builder_set_none_equals_standard() {
        let mut builder = FxMatrixId::builder();
        builder
            .set("observable_source", ObservableSource::None)
            .unwrap();
        assert_eq!(&builder.build().unwrap(), FxMatrixId::standard());
    }

    #[test]
    fn test_builder_from_text() {
        let mut builder = FxMatrixId::builder();
        builder.set_from_text("observable_source", "NONE").unwrap();
        assert_eq!(&builder.build().unwrap(), FxMatrixId::standard());

        let mut builder = FxMatrixId::builder();
        builder.set_from_text("observable_source", "BBG").unwrap();
        assert_eq!(builder.build().unwrap(), FxMatrixId::of(bbg()));
    }

    #[test]
    fn test_builder_rejects_bad_text() {
        let mut builder = FxMatrixId::builder();
        let err = builder
            .set_from_text("observable_source", "not-a-source")
            .unwrap_err();
        assert!(err.is_parse());
        assert!(builder
            .set_from_text("bogus", "BBG")
            .unwrap_err()
            .is_unknown_property());
    }

    #[test]
    fn test_builder_typed_setter_and_display() {
        let mut builder = FxMatrixId::builder();
        assert_eq!(
            builder.to_string(),
            "FxMatrixId::Builder{observable_source=<unset>}"
        );
        builder.observable_source(bbg());
        assert_eq!(
            builder.to_string(),
            "FxMatrixId::Builder{observable_source=BBG}"
        );
        assert_eq!(
            builder.get("observable_source").unwrap(),
            Some(PropertyValue::from(bbg()))
        );
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut rates = HashMap::new();
        rates.insert(FxMatrixId::standard().clone(), FxMatrix::new());
        rates.insert(
            FxMatrixId::of(bbg()),
            FxMatrix::new().with_rate("EUR", "USD", 1.1),
        );
        assert_eq!(rates.len(), 2);
        let found = &rates[&FxMatrixId::of(bbg())];
        assert_eq!(found.rate("EUR", "USD"), Some(1.1));
        assert!(rates.contains_key(&FxMatrixId::of(ObservableSource::None)));
    }

    #[test]
    fn test_concurrent_hash_agrees() {
        let id = FxMatrixId::of(bbg());
        let hashes: Vec<u64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16).map(|_| s.spawn(|| id.cached_hash())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(hashes.iter().all(|h| *h == hashes[0]));
        assert_eq!(FxMatrixId::of(bbg()).cached_hash(), hashes[0]);
    }

    #[test]
    fn test_clone_keeps_equality() {
        let id = FxMatrixId::of(bbg());
        let before = id.clone();
        let _ = id.cached_hash();
        let after = id.clone();
        assert_eq!(before, after);
        assert_eq!(before.cached_hash(), after.cached_hash());
    }

    #[test]
    fn test_json_roundtrip() {
        let id = FxMatrixId::of(bbg());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#"{"observable_source":"BBG"}"#);
        let parsed: FxMatrixId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_json_rejects_missing_and_unknown() {
        let missing: Result<FxMatrixId, _> = serde_json::from_str("{}");
        assert!(missing
            .unwrap_err()
            .to_string()
            .contains("missing required properties"));

        let unknown: Result<FxMatrixId, _> =
            serde_json::from_str(r#"{"observable_source":"None","extra":"x"}"#);
        assert!(unknown.unwrap_err().to_string().contains("unknown property"));

        let bad: Result<FxMatrixId, _> = serde_json::from_str(r#"{"observable_source":"a-b"}"#);
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_equality_follows_source(a in arb_source(), b in arb_source()) {
            let id_a = FxMatrixId::of(a.clone());
            let id_b = FxMatrixId::of(b.clone());
            prop_assert_eq!(id_a == id_b, a == b);
            if a == b {
                prop_assert_eq!(id_a.cached_hash(), id_b.cached_hash());
            }
        }

        #[test]
        fn prop_text_roundtrip(source in arb_source()) {
            let id = FxMatrixId::of(source);
            let text = id.property("observable_source").unwrap().to_string();
            let mut builder = FxMatrixId::builder();
            builder.set_from_text("observable_source", &text).unwrap();
            prop_assert_eq!(builder.build().unwrap(), id);
        }
    }
}
