//! Seeded law checks over randomly generated value trees.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use json_value::JsonValue;
use json_value_random::{generate_seeded, RandomValueOptions};

const SEEDS: [u64; 5] = [
    0x5eed_c0de,
    0x0000_0001,
    0x0000_00ff,
    0x00c0_ffee,
    0x0123_4567_89ab_cdef,
];

fn hash_of(value: &JsonValue) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equality_is_reflexive() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        for offset in 0..30 {
            let value = generate_seeded(seed.wrapping_add(offset), &opts);
            assert_eq!(value, value, "seed={seed} offset={offset}");
        }
    }
}

#[test]
fn equality_is_symmetric() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        for offset in 0..30 {
            let a = generate_seeded(seed.wrapping_add(offset), &opts);
            let b = generate_seeded(seed.wrapping_add(offset + 1), &opts);
            assert_eq!(a == b, b == a, "seed={seed} offset={offset}");
        }
    }
}

#[test]
fn clones_are_equal_and_hash_identically() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        let value = generate_seeded(seed, &opts);
        let clone = value.clone();
        assert_eq!(value, clone, "seed={seed}");
        assert_eq!(hash_of(&value), hash_of(&clone), "seed={seed}");
    }
}

#[test]
fn deep_merge_with_self_is_identity() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        for offset in 0..30 {
            let value = generate_seeded(seed.wrapping_add(offset), &opts);
            assert_eq!(
                value.clone().deep_merge(value.clone()),
                value,
                "seed={seed} offset={offset}"
            );
        }
    }
}

#[test]
fn deep_merge_is_right_biased_when_either_side_is_not_an_object() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        for offset in 0..30 {
            let base = generate_seeded(seed.wrapping_add(offset), &opts);
            let patch = generate_seeded(seed.wrapping_add(1000 + offset), &opts);
            if base.is_object() && patch.is_object() {
                continue;
            }
            assert_eq!(
                base.deep_merge(patch.clone()),
                patch,
                "seed={seed} offset={offset}"
            );
        }
    }
}

#[test]
fn merged_objects_contain_every_key_of_both_sides() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        for offset in 0..30 {
            let base = generate_seeded(seed.wrapping_add(offset), &opts);
            let patch = generate_seeded(seed.wrapping_add(2000 + offset), &opts);
            let (Some(base_obj), Some(patch_obj)) = (base.as_object(), patch.as_object()) else {
                continue;
            };
            let base_keys: Vec<String> = base_obj.keys().cloned().collect();
            let patch_keys: Vec<String> = patch_obj.keys().cloned().collect();

            let merged = base.clone().deep_merge(patch.clone());
            let merged_obj = merged.as_object().expect("object merge yields an object");
            for key in base_keys.iter().chain(&patch_keys) {
                assert!(merged_obj.contains_key(key), "seed={seed} key={key}");
            }
            // Patch wins wherever it holds a non-object value.
            for (key, patch_value) in patch_obj.iter() {
                if !patch_value.is_object() {
                    assert_eq!(
                        merged_obj.get(key),
                        Some(patch_value),
                        "seed={seed} key={key}"
                    );
                }
            }
        }
    }
}

#[test]
fn bounded_merge_agrees_with_unbounded_under_a_generous_limit() {
    let opts = RandomValueOptions::default();
    for seed in SEEDS {
        for offset in 0..30 {
            let base = generate_seeded(seed.wrapping_add(offset), &opts);
            let patch = generate_seeded(seed.wrapping_add(3000 + offset), &opts);
            let bounded = base
                .clone()
                .deep_merge_bounded(patch.clone(), 64)
                .expect("generated trees are shallow");
            assert_eq!(bounded, base.deep_merge(patch), "seed={seed} offset={offset}");
        }
    }
}
