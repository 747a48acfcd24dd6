//! Deterministic fixture generation shared by the integration tests. A small
//! linear congruential generator (Numerical Recipes constants) drives every
//! pick, so the same rows come out on every run and on every implementation
//! that reproduces the generator.

use serde_json::json;
use tablefacet::{records_from_json, JsonRecord};

pub const DEPARTMENTS: &[&str] =
    &["Engineering", "Marketing", "Sales", "HR", "Support", "Product", "Finance"];
pub const STATUSES: &[&str] = &["Active", "Inactive", "On Leave"];
pub const LEVELS: &[&str] = &["Junior", "Mid", "Senior", "Lead"];

pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self { Self { state: seed } }

    /// Uniform value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state as f64 / 4294967296.0
    }

    pub fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[(self.next_f64() * pool.len() as f64) as usize]
    }
}

/// Generate `count` employee rows. Roughly one row in ten has a null
/// department, so the empty sentinel shows up in aggregation and filtering.
pub fn employee_records(count: usize) -> Vec<JsonRecord> {
    let mut rng = Lcg::new(42);
    let rows: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            let department = if rng.next_f64() < 0.1 {
                serde_json::Value::Null
            } else {
                json!(rng.pick(DEPARTMENTS))
            };
            json!({
                "id": i + 1,
                "department": department,
                "status": rng.pick(STATUSES),
                "level": rng.pick(LEVELS),
            })
        })
        .collect();
    records_from_json(serde_json::Value::Array(rows)).expect("generated rows are flat objects")
}
