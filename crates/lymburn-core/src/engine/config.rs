use crate::core::forcefield::cutoff::{CutoffConfig, CutoffMode};
use crate::core::forcefield::evaluator::{PairEvaluator, PotentialForm};
use crate::core::forcefield::params::{ConfigError, PairParameterTable, PairParams, PotentialFile};
use crate::core::models::ids::TypePair;
use crate::core::models::types::TypeRegistry;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct NamedPairParams {
    pub type_a: String,
    pub type_b: String,
    pub params: PairParams,
}

/// Validated potential settings with pair parameters keyed by type name.
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialConfig {
    pub cutoff: CutoffConfig,
    pub form: PotentialForm,
    pub pairs: Vec<NamedPairParams>,
}

impl PotentialConfig {
    /// Resolves named pairs against `registry` into a parameter table.
    ///
    /// Entries naming a type the registry does not know are skipped, so one
    /// parameter file can serve systems with fewer species.
    pub fn parameter_table(&self, registry: &TypeRegistry) -> PairParameterTable {
        let mut table = PairParameterTable::new();
        for pair in &self.pairs {
            let (Some(a), Some(b)) = (registry.get(&pair.type_a), registry.get(&pair.type_b))
            else {
                debug!(
                    "Skipping parameters for ({}, {}): type not present in system.",
                    pair.type_a, pair.type_b
                );
                continue;
            };
            if table.set(a, b, pair.params).is_some() {
                warn!(
                    "Parameters for ({}, {}) given more than once; the last entry wins.",
                    pair.type_a, pair.type_b
                );
            }
        }
        table
    }

    /// Registry holding every type named by the pair entries, in order of appearance.
    pub fn type_registry(&self) -> TypeRegistry {
        self.pairs
            .iter()
            .flat_map(|p| [p.type_a.as_str(), p.type_b.as_str()])
            .collect()
    }

    pub fn build_evaluator(&self, registry: &TypeRegistry) -> Result<PairEvaluator, ConfigError> {
        PairEvaluator::configure(
            self.cutoff,
            self.form,
            &self.parameter_table(registry),
            registry,
        )
    }

    /// Evaluator for the single pair `(type_a, type_b)` over [`Self::type_registry`].
    ///
    /// Other pairs need no parameters and stay unconfigured.
    pub fn build_pair_evaluator(
        &self,
        type_a: &str,
        type_b: &str,
    ) -> Result<(PairEvaluator, TypePair), ConfigError> {
        let registry = self.type_registry();
        let lookup = |name: &str| {
            registry
                .get(name)
                .ok_or_else(|| ConfigError::UnknownType(name.to_string()))
        };
        let pair = TypePair::new(lookup(type_a)?, lookup(type_b)?);
        let evaluator = PairEvaluator::configure_pairs(
            self.cutoff,
            self.form,
            &self.parameter_table(&registry),
            &registry,
            [pair],
        )?;
        Ok((evaluator, pair))
    }
}

#[derive(Default)]
pub struct PotentialConfigBuilder {
    r_cut: Option<f64>,
    r_on: Option<f64>,
    mode: Option<CutoffMode>,
    form: Option<PotentialForm>,
    pairs: Vec<NamedPairParams>,
}

impl PotentialConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn r_cut(mut self, r_cut: f64) -> Self {
        self.r_cut = Some(r_cut);
        self
    }
    pub fn r_on(mut self, r_on: f64) -> Self {
        self.r_on = Some(r_on);
        self
    }
    pub fn mode(mut self, mode: CutoffMode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn form(mut self, form: PotentialForm) -> Self {
        self.form = Some(form);
        self
    }
    pub fn pair(mut self, type_a: &str, type_b: &str, params: PairParams) -> Self {
        self.pairs.push(NamedPairParams {
            type_a: type_a.to_string(),
            type_b: type_b.to_string(),
            params,
        });
        self
    }
    pub fn strength(self, type_a: &str, type_b: &str, strength: f64) -> Self {
        self.pair(type_a, type_b, PairParams::new(strength))
    }

    /// Builds the configuration, validating the global cutoff immediately.
    ///
    /// `r_cut` is required; `r_on` defaults to 0, the mode to `none` and the
    /// form to logarithmic.
    pub fn build(self) -> Result<PotentialConfig, ConfigError> {
        let cutoff = CutoffConfig {
            r_cut: self.r_cut.ok_or(ConfigError::MissingParameter("r_cut"))?,
            r_on: self.r_on.unwrap_or(0.0),
            mode: self.mode.unwrap_or_default(),
        };
        cutoff.validate()?;
        Ok(PotentialConfig {
            cutoff,
            form: self.form.unwrap_or_default(),
            pairs: self.pairs,
        })
    }
}

impl From<PotentialFile> for PotentialConfigBuilder {
    fn from(file: PotentialFile) -> Self {
        let mut builder = Self::new();
        builder.r_cut = file.r_cut;
        builder.r_on = file.r_on;
        builder.mode = file.mode;
        builder.form = file.form;
        for entry in &file.pairs {
            let [type_a, type_b] = &entry.types;
            builder = builder.pair(type_a, type_b, entry.params());
        }
        builder
    }
}
