use crate::core::report;
use crate::core::{Parcel, Result, Storage};
use crate::utils::error::RegistryError;
use chrono::Local;
use serde::Serialize;

/// Result of recording an observed use.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The first parcel with the number was reassessed; carries its violations.
    Updated { violations: Vec<String> },
    NotFound,
}

/// In-memory parcel collection mirrored to a single store file.
///
/// Every mutation rewrites the whole store before returning. When that write
/// fails the mutation is undone in memory too, so memory never runs ahead of
/// the file.
pub struct Registry<S: Storage> {
    storage: S,
    data_file: String,
    parcels: Vec<Parcel>,
}

impl<S: Storage> Registry<S> {
    /// Load the store at `data_file`, or start empty when it does not exist.
    pub fn open(storage: S, data_file: impl Into<String>) -> Result<Self> {
        let data_file = data_file.into();
        let parcels = Self::load(&storage, &data_file)?;
        tracing::debug!(path = %data_file, parcels = parcels.len(), "Loaded parcel store");

        Ok(Self {
            storage,
            data_file,
            parcels,
        })
    }

    fn load(storage: &S, data_file: &str) -> Result<Vec<Parcel>> {
        if !storage.exists(data_file) {
            tracing::debug!(path = %data_file, "No store yet, starting with an empty registry");
            return Ok(Vec::new());
        }

        let bytes = storage.read_file(data_file)?;
        serde_json::from_slice(&bytes).map_err(|source| RegistryError::MalformedStoreError {
            path: data_file.to_string(),
            source,
        })
    }

    /// Overwrite the store with the full parcel sequence.
    ///
    /// Non-finite areas are refused: JSON would write them as `null`, which
    /// the next load rejects.
    pub fn save(&self) -> Result<()> {
        if let Some(parcel) = self.parcels.iter().find(|p| !p.area.is_finite()) {
            return Err(RegistryError::SerializationError(serde::ser::Error::custom(
                format!(
                    "area of parcel '{}' is not a finite number: {}",
                    parcel.cadastral_number, parcel.area
                ),
            )));
        }

        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.parcels.serialize(&mut serializer)?;

        self.storage.write_file(&self.data_file, &buffer)?;
        tracing::debug!(path = %self.data_file, parcels = self.parcels.len(), "Saved parcel store");
        Ok(())
    }

    /// Append a new unassessed parcel. Duplicate numbers are kept as given.
    pub fn add_parcel(
        &mut self,
        cadastral_number: impl Into<String>,
        area: f64,
        category: impl Into<String>,
        permitted_use: impl Into<String>,
    ) -> Result<&Parcel> {
        self.parcels
            .push(Parcel::new(cadastral_number, area, category, permitted_use));

        if let Err(e) = self.save() {
            self.parcels.pop();
            return Err(e);
        }

        let parcel = &self.parcels[self.parcels.len() - 1];
        tracing::info!(cadastral_number = %parcel.cadastral_number, area = parcel.area, "Parcel added");
        Ok(parcel)
    }

    /// Record the observed use of the first parcel with `cadastral_number`
    /// and reassess it.
    pub fn update_actual_use(
        &mut self,
        cadastral_number: &str,
        actual_use: impl Into<String>,
    ) -> Result<UpdateOutcome> {
        let Some(index) = self
            .parcels
            .iter()
            .position(|p| p.cadastral_number == cadastral_number)
        else {
            tracing::warn!(cadastral_number, "No parcel with this cadastral number");
            return Ok(UpdateOutcome::NotFound);
        };

        let parcel = &mut self.parcels[index];
        let previous_use = parcel.actual_use.replace(actual_use.into());
        let previous_violations = std::mem::take(&mut parcel.violations);
        parcel.check_violations();

        if let Err(e) = self.save() {
            let parcel = &mut self.parcels[index];
            parcel.actual_use = previous_use;
            parcel.violations = previous_violations;
            return Err(e);
        }

        let parcel = &self.parcels[index];
        tracing::info!(
            cadastral_number,
            violations = parcel.violations.len(),
            "Actual use updated"
        );
        Ok(UpdateOutcome::Updated {
            violations: parcel.violations.clone(),
        })
    }

    /// Recompute the violations of a single parcel in place.
    pub fn check_violations(parcel: &mut Parcel) {
        parcel.check_violations();
    }

    /// Write the text report to `output_path`, replacing any existing file.
    pub fn generate_report(&self, output_path: &str) -> Result<String> {
        let content = report::render(&self.parcels, Local::now().naive_local());
        self.storage.write_file(output_path, content.as_bytes())?;

        tracing::info!(
            path = %output_path,
            parcels = self.parcels.len(),
            with_violations = self.parcels.iter().filter(|p| p.has_violations()).count(),
            "Report generated"
        );
        Ok(output_path.to_string())
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    /// First parcel with the given number, the same one an update would touch.
    pub fn find(&self, cadastral_number: &str) -> Option<&Parcel> {
        self.parcels
            .iter()
            .find(|p| p.cadastral_number == cadastral_number)
    }

    pub fn data_file(&self) -> &str {
        &self.data_file
    }
}
