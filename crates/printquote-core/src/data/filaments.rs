//! Filament materials database
//!
//! Maps a material identifier to the physical properties the estimator
//! needs: density for weight conversion and a flow-rate multiplier that
//! scales the layer-height flow preset. Ships with the two calibrated
//! stock filaments (PLA, PETG) and accepts user-defined entries.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filament material identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct MaterialId(pub String);

impl MaterialId {
    /// The default stock filament.
    pub fn pla() -> Self {
        Self("pla".to_string())
    }

    pub fn petg() -> Self {
        Self("petg".to_string())
    }
}

impl Default for MaterialId {
    fn default() -> Self {
        Self::pla()
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical properties of one filament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilamentProperties {
    /// Display name
    pub name: String,
    /// Density in g/cm³ (varies slightly by brand)
    pub density_g_cm3: f64,
    /// Effective flow-rate multiplier relative to PLA
    pub flow_multiplier: f64,
    /// Whether this is a user-defined custom filament
    pub custom: bool,
}

impl FilamentProperties {
    pub fn new(name: impl Into<String>, density_g_cm3: f64, flow_multiplier: f64) -> Self {
        Self {
            name: name.into(),
            density_g_cm3,
            flow_multiplier,
            custom: false,
        }
    }
}

impl Default for FilamentProperties {
    /// PLA properties, also the fallback for unknown material ids.
    fn default() -> Self {
        Self::new("PLA", 1.24, 1.0)
    }
}

/// Filament library - manages the collection of known filaments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilamentLibrary {
    filaments: HashMap<MaterialId, FilamentProperties>,
}

impl FilamentLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            filaments: HashMap::new(),
        }
    }

    /// Add or replace a filament in the library
    pub fn add_filament(&mut self, id: MaterialId, properties: FilamentProperties) {
        self.filaments.insert(id, properties);
    }

    /// Get a filament by id
    pub fn get_filament(&self, id: &MaterialId) -> Option<&FilamentProperties> {
        self.filaments.get(id)
    }

    /// Get a filament by id, falling back to PLA properties.
    ///
    /// Unknown material ids never fail an estimate; the quote degrades
    /// to the stock filament and the lookup miss is logged.
    pub fn get_or_default(&self, id: &MaterialId) -> FilamentProperties {
        match self.filaments.get(id) {
            Some(props) => props.clone(),
            None => {
                tracing::warn!("unknown filament {}, falling back to PLA", id);
                FilamentProperties::default()
            }
        }
    }

    /// Remove a filament from the library
    pub fn remove_filament(&mut self, id: &MaterialId) -> Option<FilamentProperties> {
        self.filaments.remove(id)
    }

    /// Get all filaments
    pub fn get_all_filaments(&self) -> Vec<(&MaterialId, &FilamentProperties)> {
        self.filaments.iter().collect()
    }

    /// Get the number of filaments in the library
    pub fn len(&self) -> usize {
        self.filaments.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.filaments.is_empty()
    }
}

impl Default for FilamentLibrary {
    fn default() -> Self {
        init_standard_library()
    }
}

/// Initialize the standard filament library with the calibrated stock materials
pub fn init_standard_library() -> FilamentLibrary {
    let mut library = FilamentLibrary::new();

    library.add_filament(
        MaterialId::pla(),
        FilamentProperties::new("PLA", 1.24, 1.0),
    );

    // PETG flows slightly slower at the same layer height
    library.add_filament(
        MaterialId::petg(),
        FilamentProperties::new("PETG", 1.27, 0.92),
    );

    library
}
