//! Property tests for archive round-trips
//!
//! Verifies the round-trip law over generated object graphs: splitting a
//! graph into an archive and restoring it yields a value-equal graph.

use super::*;
use crate::value::{ArrayData, Value};
use proptest::prelude::*;
use std::fs::File;
use tempfile::tempdir;
use zip::ZipArchive;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // Finite range keeps NaN out; NaN is not value-equal to itself
        (-1e9f64..1e9).prop_map(Value::Float),
        "[a-z0-9_]{0,12}".prop_map(Value::from),
    ]
}

fn arb_array() -> impl Strategy<Value = Value> {
    prop_oneof![
        proptest::collection::vec(-1e3f32..1e3, 0..16)
            .prop_map(|v| Value::Array(ArrayData::from_f32_vec(v))),
        proptest::collection::vec(-1e6f64..1e6, 0..16)
            .prop_map(|v| Value::Array(ArrayData::from_f64_vec(v))),
        proptest::collection::vec(any::<i64>(), 0..16)
            .prop_map(|v| Value::Array(ArrayData::from_i64_vec(v))),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![4 => arb_scalar(), 1 => arb_array()];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Map),
        ]
    })
}

fn arb_config() -> impl Strategy<Value = SaveConfig> {
    (
        prop_oneof![Just(StructFormat::Json), Just(StructFormat::Yaml)],
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(format, pretty, compress)| {
            SaveConfig::new(format)
                .with_pretty(pretty)
                .with_compress(compress)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_preserves_document(root in arb_value(), config in arb_config()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.zip");

        let original = Document::new(DocumentMetadata::new("prop"), root);
        save_document(&original, &path, &config).unwrap();
        let loaded = load_document(&path).unwrap();

        prop_assert_eq!(loaded, original);
    }

    #[test]
    fn entry_count_is_one_plus_arrays(root in arb_value()) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.zip");

        let n_arrays = root.array_count();
        let doc = Document::new(DocumentMetadata::new("prop"), root);
        save_document(&doc, &path, &SaveConfig::default()).unwrap();

        let archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        prop_assert_eq!(archive.len(), 1 + n_arrays);
    }

    #[test]
    fn split_restore_is_identity_in_memory(root in arb_value()) {
        let (stripped, arrays) = split_arrays(root.clone()).unwrap();
        prop_assert_eq!(stripped.array_count(), 0);

        let map: std::collections::HashMap<String, ArrayData> =
            arrays.into_iter().collect();
        let restored = restore_arrays(stripped, &mut |marker: &crate::value::ArrayRef| {
            map.get(&marker.entry)
                .cloned()
                .ok_or_else(|| crate::Error::MissingEntry(marker.entry.clone()))
        })
        .unwrap();

        prop_assert_eq!(restored, root);
    }
}
