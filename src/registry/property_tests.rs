//! Property-Based Tests for Registry Module
//!
//! Uses proptest to check the registry against a plain HashMap model.

use proptest::prelude::*;
use std::collections::HashMap;

use bytes::Bytes;

use crate::registry::Registry;

// == Strategies ==
/// Generates registry keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{0,16}".prop_map(|s| s)
}

/// Generates small binary payloads
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Generates a sequence of registry operations
#[derive(Debug, Clone)]
enum RegistryOp {
    Put { key: String, payload: Vec<u8> },
    Get { key: String },
    Delete { key: String },
}

fn registry_op_strategy() -> impl Strategy<Value = RegistryOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, payload)| RegistryOp::Put { key, payload }),
        key_strategy().prop_map(|key| RegistryOp::Get { key }),
        key_strategy().prop_map(|key| RegistryOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of puts, gets and deletes with a long ttl, the registry
    // holds exactly the entries a plain map would, with byte-identical payloads.
    #[test]
    fn prop_map_model_equivalence(ops in prop::collection::vec(registry_op_strategy(), 1..50)) {
        let mut registry = Registry::new();
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                RegistryOp::Put { key, payload } => {
                    registry.put(
                        key.clone(),
                        Bytes::from(payload.clone()),
                        "application/octet-stream".to_string(),
                        "file.bin".to_string(),
                        60,
                    );
                    model.insert(key, payload);
                }
                RegistryOp::Get { key } => {
                    match registry.get(&key) {
                        Ok(entry) => {
                            let expected = model.get(&key);
                            prop_assert_eq!(
                                Some(entry.payload.as_ref()),
                                expected.map(|v| v.as_slice()),
                                "payload mismatch for key {:?}", &key
                            );
                        }
                        Err(_) => prop_assert!(
                            !model.contains_key(&key),
                            "registry missing key {:?} the model holds", &key
                        ),
                    }
                }
                RegistryOp::Delete { key } => {
                    let removed = registry.delete(&key);
                    let model_removed = model.remove(&key).is_some();
                    prop_assert_eq!(removed, model_removed);
                }
            }
        }

        prop_assert_eq!(registry.len(), model.len());
    }

    // Overwriting a key always leaves exactly the last payload retrievable.
    #[test]
    fn prop_overwrite_supersedes(
        key in key_strategy(),
        payloads in prop::collection::vec(payload_strategy(), 1..10),
    ) {
        let mut registry = Registry::new();
        let last = payloads.last().unwrap().clone();

        for payload in payloads {
            registry.put(
                key.clone(),
                Bytes::from(payload),
                "application/octet-stream".to_string(),
                "file.bin".to_string(),
                60,
            );
        }

        let entry = registry.get(&key).unwrap();
        prop_assert_eq!(entry.payload.as_ref(), last.as_slice());
        prop_assert_eq!(registry.len(), 1);
    }

    // A sweep removes exactly the entries whose deadline has passed and
    // reports every removed key.
    #[test]
    fn prop_sweep_removes_exactly_expired(
        expired_count in 0usize..10,
        live_count in 0usize..10,
    ) {
        let mut registry = Registry::new();

        for i in 0..expired_count {
            registry.put(
                format!("expired_{i}"),
                Bytes::from_static(b"x"),
                "application/octet-stream".to_string(),
                "file.bin".to_string(),
                0,
            );
        }
        for i in 0..live_count {
            registry.put(
                format!("live_{i}"),
                Bytes::from_static(b"x"),
                "application/octet-stream".to_string(),
                "file.bin".to_string(),
                60,
            );
        }

        let mut removed = registry.sweep_now();
        removed.sort();
        let mut expected: Vec<String> = (0..expired_count).map(|i| format!("expired_{i}")).collect();
        expected.sort();

        prop_assert_eq!(removed, expected);
        prop_assert_eq!(registry.len(), live_count);
    }
}
