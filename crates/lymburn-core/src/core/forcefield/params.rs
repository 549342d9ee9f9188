use super::cutoff::CutoffMode;
use super::evaluator::PotentialForm;
use crate::core::models::ids::{TypeId, TypePair};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Cutoff radius must be positive and finite, got {r_cut}")]
    NonPositiveCutoff { r_cut: f64 },

    #[error("Invalid switch-on radius {r_on} for cutoff {r_cut} in {mode} mode")]
    InvalidSwitchRadius {
        r_on: f64,
        r_cut: f64,
        mode: CutoffMode,
    },

    #[error("Parameter '{name}' for pair ({type_a}, {type_b}) must be finite, got {value}")]
    NonFiniteParameter {
        name: &'static str,
        type_a: String,
        type_b: String,
        value: f64,
    },

    #[error("No strength given for type pair ({type_a}, {type_b})")]
    MissingPairParameter { type_a: String, type_b: String },

    #[error("Unknown particle type '{0}'")]
    UnknownType(String),

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Parameters of one unordered type pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairParams {
    /// Repulsion strength in units of energy (logarithmic form) or energy x length (inverse-r form).
    pub strength: f64,
    /// Overrides the global cutoff radius for this pair.
    pub r_cut: Option<f64>,
    /// Overrides the global switch-on radius for this pair.
    pub r_on: Option<f64>,
}

impl PairParams {
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            r_cut: None,
            r_on: None,
        }
    }

    pub fn with_r_cut(mut self, r_cut: f64) -> Self {
        self.r_cut = Some(r_cut);
        self
    }

    pub fn with_r_on(mut self, r_on: f64) -> Self {
        self.r_on = Some(r_on);
        self
    }
}

/// Symmetric per-type-pair parameter lookup backed by a flat triangular array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairParameterTable {
    entries: Vec<Option<PairParams>>,
}

impl PairParameterTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `params` for the unordered pair `(a, b)`, replacing any previous entry.
    pub fn set(&mut self, a: TypeId, b: TypeId, params: PairParams) -> Option<PairParams> {
        let index = TypePair::new(a, b).flat_index();
        if index >= self.entries.len() {
            self.entries.resize(index + 1, None);
        }
        self.entries[index].replace(params)
    }

    pub fn get(&self, a: TypeId, b: TypeId) -> Option<&PairParams> {
        self.entries
            .get(TypePair::new(a, b).flat_index())
            .and_then(Option::as_ref)
    }

    /// Type pairs among the first `num_types` types that have no entry.
    pub fn missing_pairs(&self, num_types: usize) -> impl Iterator<Item = TypePair> + '_ {
        TypePair::all(num_types).filter(|pair| {
            let (a, b) = pair.types();
            self.get(a, b).is_none()
        })
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One `[[pair]]` entry of a potential parameter file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PairEntry {
    pub types: [String; 2],
    pub strength: f64,
    pub r_cut: Option<f64>,
    pub r_on: Option<f64>,
}

impl PairEntry {
    pub fn params(&self) -> PairParams {
        PairParams {
            strength: self.strength,
            r_cut: self.r_cut,
            r_on: self.r_on,
        }
    }
}

/// Contents of a potential parameter file in TOML format.
///
/// ```toml
/// mode = "xplor"
/// r-cut = 2.0
/// r-on = 1.5
///
/// [[pair]]
/// types = ["A", "A"]
/// strength = 2.0
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PotentialFile {
    pub mode: Option<CutoffMode>,
    pub form: Option<PotentialForm>,
    pub r_cut: Option<f64>,
    pub r_on: Option<f64>,
    #[serde(default, rename = "pair")]
    pub pairs: Vec<PairEntry>,
}

impl PotentialFile {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ParamLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
