//! Random JSON value generation for tests.
//!
//! Trees are grown from a per-variant odds table with bounded depth and
//! fan-out. Generated numbers are always finite and generated containers are
//! acyclic by construction, so every output satisfies the `JsonValue`
//! invariants. Seed with [`generate_seeded`] (xoshiro256**) to make a test
//! reproducible from a literal seed.

use json_value::{JsonNumber, JsonObject, JsonValue};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Relative weight of each variant when picking the next node.
#[derive(Debug, Clone)]
pub struct NodeOdds {
    pub null: u32,
    pub boolean: u32,
    pub number: u32,
    pub string: u32,
    pub array: u32,
    pub object: u32,
}

impl Default for NodeOdds {
    fn default() -> Self {
        Self {
            null: 1,
            boolean: 2,
            number: 10,
            string: 8,
            array: 2,
            object: 2,
        }
    }
}

/// Options for random value generation.
#[derive(Debug, Clone)]
pub struct RandomValueOptions {
    /// Containers are not generated below this depth.
    pub max_depth: usize,
    /// Maximum number of elements/entries per container.
    pub max_children: usize,
    pub odds: NodeOdds,
}

impl Default for RandomValueOptions {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_children: 6,
            odds: NodeOdds::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// Generate a random value from `rng`.
pub fn generate<R: Rng>(rng: &mut R, opts: &RandomValueOptions) -> JsonValue {
    gen_value(rng, opts, 0)
}

/// Generate a random value from a literal seed. Same seed, same tree.
///
/// # Examples
///
/// ```
/// use json_value_random::{generate_seeded, RandomValueOptions};
///
/// let opts = RandomValueOptions::default();
/// assert_eq!(generate_seeded(7, &opts), generate_seeded(7, &opts));
/// ```
pub fn generate_seeded(seed: u64, opts: &RandomValueOptions) -> JsonValue {
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    generate(&mut rng, opts)
}

/// A random finite number, mixing integer and float representations.
pub fn gen_number<R: Rng>(rng: &mut R) -> JsonNumber {
    match rng.gen_range(0..4_u32) {
        0 => JsonNumber::from(rng.gen::<i64>()),
        1 => JsonNumber::from(rng.gen::<u64>()),
        2 => JsonNumber::from(rng.gen_range(-1000_i64..1000)),
        _ => {
            // gen::<f64>() lies in [0, 1); scaled it stays finite.
            let f = rng.gen::<f64>() * 2e9 - 1e9;
            match JsonNumber::from_f64(f) {
                Some(n) => n,
                None => JsonNumber::from(0_u64),
            }
        }
    }
}

/// A random short string: mostly ASCII, occasionally multi-byte.
pub fn gen_string<R: Rng>(rng: &mut R) -> String {
    const EXOTIC: [char; 12] = [
        'ä', 'ö', 'ü', 'ß', 'а', 'б', 'в', 'г', '诶', '必', '西', '😀',
    ];
    let length = rng.gen_range(0..=12_usize);
    (0..length)
        .map(|_| {
            if rng.gen_bool(0.1) {
                EXOTIC[rng.gen_range(0..EXOTIC.len())]
            } else {
                char::from(rng.gen_range(32_u8..=126))
            }
        })
        .collect()
}

fn pick_node<R: Rng>(rng: &mut R, odds: &NodeOdds, leaf_only: bool) -> NodeType {
    let (array, object) = if leaf_only { (0, 0) } else { (odds.array, odds.object) };
    let weights = [
        (NodeType::Null, odds.null),
        (NodeType::Boolean, odds.boolean),
        (NodeType::Number, odds.number),
        (NodeType::String, odds.string),
        (NodeType::Array, array),
        (NodeType::Object, object),
    ];
    let total: u32 = weights.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return NodeType::Null;
    }
    let mut roll = rng.gen_range(0..total);
    for (node, weight) in weights {
        if roll < weight {
            return node;
        }
        roll -= weight;
    }
    NodeType::Null
}

fn gen_value<R: Rng>(rng: &mut R, opts: &RandomValueOptions, depth: usize) -> JsonValue {
    match pick_node(rng, &opts.odds, depth >= opts.max_depth) {
        NodeType::Null => JsonValue::Null,
        NodeType::Boolean => JsonValue::Bool(rng.gen_bool(0.5)),
        NodeType::Number => JsonValue::Number(gen_number(rng)),
        NodeType::String => JsonValue::String(gen_string(rng)),
        NodeType::Array => {
            let count = rng.gen_range(0..=opts.max_children);
            JsonValue::Array((0..count).map(|_| gen_value(rng, opts, depth + 1)).collect())
        }
        NodeType::Object => {
            let count = rng.gen_range(0..=opts.max_children);
            let mut object = JsonObject::with_capacity(count);
            for _ in 0..count {
                // Key collisions overwrite, which is fine for test data.
                object.insert(gen_string(rng), gen_value(rng, opts, depth + 1));
            }
            JsonValue::Object(object)
        }
    }
}
