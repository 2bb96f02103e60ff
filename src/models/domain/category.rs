use serde::{Deserialize, Serialize};

/// Read-only reference data, seeded out of band.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub label: String,
}
