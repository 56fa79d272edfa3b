use crate::domain::compliance;
use serde::{Deserialize, Serialize};

/// A land parcel as it is kept in the store.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub cadastral_number: String,
    /// Hectares.
    pub area: f64,
    pub category: String,
    pub permitted_use: String,
    #[serde(default)]
    pub actual_use: Option<String>,
    #[serde(default)]
    pub violations: Vec<String>,
}

impl Parcel {
    /// A freshly registered, unassessed parcel.
    pub fn new(
        cadastral_number: impl Into<String>,
        area: f64,
        category: impl Into<String>,
        permitted_use: impl Into<String>,
    ) -> Self {
        Self {
            cadastral_number: cadastral_number.into(),
            area,
            category: category.into(),
            permitted_use: permitted_use.into(),
            actual_use: None,
            violations: Vec::new(),
        }
    }

    /// Recompute `violations` from the current permitted/actual use.
    pub fn check_violations(&mut self) {
        self.violations = compliance::assess_use(&self.permitted_use, self.actual_use.as_deref());
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}
