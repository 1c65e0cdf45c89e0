use crate::errors::ScoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One independent classification dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Domain,
    Application,
    Software,
    Language,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Domain, Axis::Application, Axis::Software, Axis::Language];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::Domain => "domain",
            Axis::Application => "application",
            Axis::Software => "software",
            Axis::Language => "language",
        }
    }
}

/// A canonical label and the phrases that trigger it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub phrases: Vec<String>,
}

impl Category {
    pub fn new(label: &str, phrases: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Keyword tables for the four axes
///
/// Order inside each table is significant: on the single-label axes the
/// first matching label wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub domain: Vec<Category>,
    pub application: Vec<Category>,
    pub software: Vec<Category>,
    pub language: Vec<Category>,
}

const DOMAINS: &[(&str, &[&str])] = &[
    (
        "aerodynamics",
        &["aerodynamic", "aerodynamics", "aérodynamique", "aerodynamik", "external flow"],
    ),
    (
        "combustion",
        &["combustion", "verbrennung", "reacting flow", "reactive flow", "flame"],
    ),
    (
        "heat transfer",
        &[
            "heat transfer",
            "thermal",
            "thermique",
            "transfert thermique",
            "wärmeübertragung",
            "conjugate heat",
        ],
    ),
    (
        "multiphase",
        &["multiphase", "multiphasique", "mehrphasen", "two-phase", "diphasique", "spray"],
    ),
    (
        "turbomachinery",
        &["turbomachinery", "turbomachine", "turbomachines", "strömungsmaschinen", "turbine", "compressor"],
    ),
    (
        "hydrodynamics",
        &["hydrodynamic", "hydrodynamics", "hydrodynamique", "naval", "free surface"],
    ),
    (
        "acoustics",
        &["aeroacoustic", "aeroacoustics", "aéroacoustique", "acoustic", "acoustique", "akustik"],
    ),
];

const APPLICATIONS: &[(&str, &[&str])] = &[
    (
        "aerospace",
        &[
            "aerospace",
            "aéronautique",
            "aeronautique",
            "aeronautics",
            "aircraft",
            "luftfahrt",
            "spatial",
            "space industry",
            "space systems",
        ],
    ),
    (
        "automotive",
        &["automotive", "automobile", "vehicle", "véhicule", "fahrzeug", "motorsport"],
    ),
    (
        "energy",
        &["energy", "énergie", "energie", "nuclear", "nucléaire", "wind turbine", "éolien", "oil and gas"],
    ),
    (
        "defense",
        &["defense", "defence", "défense", "military", "militaire", "verteidigung"],
    ),
    (
        "building",
        &["hvac", "building", "bâtiment", "ventilation", "gebäude"],
    ),
    (
        "process",
        &["chemical", "chimie", "process engineering", "pharmaceutical", "verfahrenstechnik"],
    ),
    (
        "electronics",
        &["electronics", "électronique", "elektronik", "data center", "semiconductor"],
    ),
];

const SOFTWARE: &[(&str, &[&str])] = &[
    ("OpenFOAM", &["openfoam"]),
    ("Fluent", &["ansys fluent", "fluent"]),
    ("Ansys", &["ansys"]),
    ("STAR-CCM+", &["star-ccm+", "starccm+", "star-ccm", "starccm", "star ccm"]),
    ("CFX", &["cfx"]),
    ("Converge", &["converge cfd", "convergecfd"]),
    ("COMSOL", &["comsol"]),
    ("PowerFLOW", &["powerflow"]),
    ("Code_Saturne", &["code_saturne", "code saturne"]),
    ("ParaView", &["paraview"]),
    ("Pointwise", &["pointwise"]),
    ("ICEM", &["icem"]),
    ("SU2", &["su2"]),
];

const LANGUAGES: &[(&str, &[&str])] = &[
    ("Python", &["python"]),
    ("C++", &["c++", "cpp"]),
    ("Fortran", &["fortran"]),
    ("MATLAB", &["matlab"]),
    ("Julia", &["julia"]),
    ("Bash", &["bash", "shell scripting"]),
];

fn table(entries: &[(&str, &[&str])]) -> Vec<Category> {
    entries
        .iter()
        .map(|(label, phrases)| Category::new(label, phrases))
        .collect()
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Taxonomy {
    /// The CFD-oriented tables shipped with the crate
    pub fn builtin() -> Self {
        Self {
            domain: table(DOMAINS),
            application: table(APPLICATIONS),
            software: table(SOFTWARE),
            language: table(LANGUAGES),
        }
    }

    /// Load a taxonomy from a JSON file and validate it
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScoutError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Parse a taxonomy from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self, ScoutError> {
        let taxonomy: Self = serde_json::from_str(json)?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// The table for one axis
    pub fn axis(&self, axis: Axis) -> &[Category] {
        match axis {
            Axis::Domain => &self.domain,
            Axis::Application => &self.application,
            Axis::Software => &self.software,
            Axis::Language => &self.language,
        }
    }

    /// Canonical labels of one axis in declaration order
    pub fn labels(&self, axis: Axis) -> Vec<&str> {
        self.axis(axis).iter().map(|c| c.label.as_str()).collect()
    }

    /// Reject tables that would make matching ill-defined
    pub fn validate(&self) -> Result<(), ScoutError> {
        for axis in Axis::ALL {
            let mut seen = HashSet::new();
            for category in self.axis(axis) {
                if category.label.trim().is_empty() {
                    return Err(ScoutError::Configuration(format!(
                        "{} axis has an entry with an empty label",
                        axis.name()
                    )));
                }
                if !seen.insert(category.label.as_str()) {
                    return Err(ScoutError::Configuration(format!(
                        "{} axis declares '{}' more than once",
                        axis.name(),
                        category.label
                    )));
                }
                if category.phrases.is_empty() {
                    return Err(ScoutError::Configuration(format!(
                        "{} label '{}' has no trigger phrases",
                        axis.name(),
                        category.label
                    )));
                }
                if category.phrases.iter().any(|p| p.trim().is_empty()) {
                    return Err(ScoutError::Configuration(format!(
                        "{} label '{}' has an empty trigger phrase",
                        axis.name(),
                        category.label
                    )));
                }
            }
        }
        Ok(())
    }
}
