use super::cutoff::{CutoffConfig, CutoffMode};
use super::params::{ConfigError, PairParameterTable};
use super::potentials;
use super::term::PairContribution;
use crate::core::models::ids::{TypeId, TypePair};
use crate::core::models::types::TypeRegistry;
use nalgebra::Vector3;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EvaluationError {
    #[error("Degenerate pair geometry: separation {distance:e} is not a positive distance")]
    DegenerateGeometry { distance: f64 },

    #[error("Force or energy overflowed at separation {distance:e} (strength {strength:e})")]
    NumericOverflow { distance: f64, strength: f64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Functional form of the unswitched repulsion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PotentialForm {
    /// `U = -strength ln(r)`, force `strength r_vec / r^2`.
    #[default]
    Logarithmic,
    /// `U = strength / r`, force `strength r_vec / r^3`.
    InverseR,
}

impl PotentialForm {
    pub fn as_str(&self) -> &'static str {
        match self {
            PotentialForm::Logarithmic => "logarithmic",
            PotentialForm::InverseR => "inverse-r",
        }
    }

    /// Unswitched energy and radial force divided by `r`.
    #[inline]
    fn eval(&self, dist: f64, dist_sq: f64, strength: f64) -> (f64, f64) {
        match self {
            PotentialForm::Logarithmic => (
                potentials::logarithmic_energy(dist, strength),
                potentials::logarithmic_force_divr(dist_sq, strength),
            ),
            PotentialForm::InverseR => (
                potentials::inverse_r_energy(dist, strength),
                potentials::inverse_r_force_divr(dist, dist_sq, strength),
            ),
        }
    }
}

impl fmt::Display for PotentialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PotentialForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logarithmic" | "log" => Ok(PotentialForm::Logarithmic),
            "inverse-r" | "1/r" => Ok(PotentialForm::InverseR),
            _ => Err(format!(
                "unknown potential form '{}', expected logarithmic or inverse-r",
                s
            )),
        }
    }
}

/// Per-pair constants resolved once at configuration time.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PairCoefficients {
    strength: f64,
    r_cut: f64,
    r_cut_sq: f64,
    r_on_sq: f64,
    energy_shift: f64,
}

/// One point of a tabulated pair interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileSample {
    pub distance: f64,
    pub energy: f64,
    /// Radial force on the first particle; positive is repulsive.
    pub force: f64,
}

/// Evaluates the Lymburn repulsion for single pairs of particles.
///
/// All parameters are validated and resolved per type pair in
/// [`PairEvaluator::configure`], so evaluation never fails for a
/// configured pair except on degenerate geometry or overflow.
#[derive(Debug, Clone)]
pub struct PairEvaluator {
    mode: CutoffMode,
    form: PotentialForm,
    type_names: Vec<String>,
    coefficients: Vec<Option<PairCoefficients>>,
    max_r_cut: f64,
}

impl PairEvaluator {
    /// Validates `cutoff` and every pair of `registry` against `table`.
    ///
    /// Fails on the first invalid cutoff, non-finite strength, or type pair
    /// without an entry.
    pub fn configure(
        cutoff: CutoffConfig,
        form: PotentialForm,
        table: &PairParameterTable,
        registry: &TypeRegistry,
    ) -> Result<Self, ConfigError> {
        Self::configure_pairs(
            cutoff,
            form,
            table,
            registry,
            TypePair::all(registry.len()),
        )
    }

    /// Like [`PairEvaluator::configure`], but only resolves `pairs`.
    ///
    /// Evaluating any other pair of `registry` fails with
    /// [`ConfigError::MissingPairParameter`].
    pub fn configure_pairs(
        cutoff: CutoffConfig,
        form: PotentialForm,
        table: &PairParameterTable,
        registry: &TypeRegistry,
        pairs: impl IntoIterator<Item = TypePair>,
    ) -> Result<Self, ConfigError> {
        cutoff.validate()?;

        let mut coefficients = vec![None; TypePair::count(registry.len())];
        let mut max_r_cut: f64 = 0.0;
        let mut num_configured = 0;

        for pair in pairs {
            let (a, b) = pair.types();
            let slot = coefficients
                .get_mut(pair.flat_index())
                .ok_or_else(|| ConfigError::UnknownType(registry.describe(b)))?;
            let params = table
                .get(a, b)
                .ok_or_else(|| ConfigError::MissingPairParameter {
                    type_a: registry.describe(a),
                    type_b: registry.describe(b),
                })?;
            if !params.strength.is_finite() {
                return Err(ConfigError::NonFiniteParameter {
                    name: "strength",
                    type_a: registry.describe(a),
                    type_b: registry.describe(b),
                    value: params.strength,
                });
            }

            let pair_cutoff = CutoffConfig {
                r_cut: params.r_cut.unwrap_or(cutoff.r_cut),
                r_on: params.r_on.unwrap_or(cutoff.r_on),
                mode: cutoff.mode,
            };
            pair_cutoff.validate()?;

            if cutoff.mode == CutoffMode::Xplor && pair_cutoff.r_on == 0.0 {
                warn!(
                    "XPLOR switch for pair ({}, {}) starts at r = 0; the whole interaction range is smoothed.",
                    registry.describe(a),
                    registry.describe(b)
                );
            }

            let r_cut_sq = pair_cutoff.r_cut * pair_cutoff.r_cut;
            let energy_shift = match cutoff.mode {
                CutoffMode::Shift => form.eval(pair_cutoff.r_cut, r_cut_sq, params.strength).0,
                CutoffMode::None | CutoffMode::Xplor => 0.0,
            };

            max_r_cut = max_r_cut.max(pair_cutoff.r_cut);
            if slot.is_none() {
                num_configured += 1;
            }
            *slot = Some(PairCoefficients {
                strength: params.strength,
                r_cut: pair_cutoff.r_cut,
                r_cut_sq,
                r_on_sq: pair_cutoff.r_on * pair_cutoff.r_on,
                energy_shift,
            });
        }

        debug!(
            "Configured {} pair(s) for {} type(s): mode = {}, form = {}, max r_cut = {}",
            num_configured,
            registry.len(),
            cutoff.mode,
            form,
            max_r_cut
        );

        Ok(Self {
            mode: cutoff.mode,
            form,
            type_names: registry.iter().map(|(_, name)| name.to_string()).collect(),
            coefficients,
            max_r_cut,
        })
    }

    pub fn mode(&self) -> CutoffMode {
        self.mode
    }

    pub fn form(&self) -> PotentialForm {
        self.form
    }

    pub fn num_types(&self) -> usize {
        self.type_names.len()
    }

    /// Largest cutoff radius over the configured pairs.
    pub fn max_r_cut(&self) -> f64 {
        self.max_r_cut
    }

    pub fn r_cut(&self, type_a: TypeId, type_b: TypeId) -> Option<f64> {
        self.coefficients(type_a, type_b).ok().map(|c| c.r_cut)
    }

    fn coefficients(
        &self,
        type_a: TypeId,
        type_b: TypeId,
    ) -> Result<&PairCoefficients, ConfigError> {
        let describe = |id: TypeId| {
            self.type_names
                .get(id.index())
                .cloned()
                .unwrap_or_else(|| id.to_string())
        };
        // The flat index is only in range when both ids are registered.
        let configured = if type_a.index() < self.num_types() && type_b.index() < self.num_types() {
            self.coefficients
                .get(TypePair::new(type_a, type_b).flat_index())
                .and_then(Option::as_ref)
        } else {
            None
        };
        configured.ok_or_else(|| ConfigError::MissingPairParameter {
            type_a: describe(type_a),
            type_b: describe(type_b),
        })
    }

    /// Force on particle `a` and the pair energy for separation `r_vec = pos_a - pos_b`.
    ///
    /// `r_vec` must already be minimum-image wrapped and `dist` must equal its
    /// norm. The reaction on `b` is `-force_on_a`. Pairs beyond the cutoff
    /// contribute exactly zero.
    pub fn evaluate_pair(
        &self,
        type_a: TypeId,
        type_b: TypeId,
        r_vec: &Vector3<f64>,
        dist: f64,
    ) -> Result<PairContribution, EvaluationError> {
        if !(dist.is_finite() && dist > potentials::MIN_DISTANCE) {
            return Err(EvaluationError::DegenerateGeometry { distance: dist });
        }

        let coeff = self.coefficients(type_a, type_b)?;
        if dist > coeff.r_cut {
            return Ok(PairContribution::zero());
        }

        let dist_sq = dist * dist;
        let (mut energy, mut force_divr) = self.form.eval(dist, dist_sq, coeff.strength);

        match self.mode {
            CutoffMode::None => {}
            CutoffMode::Shift => energy -= coeff.energy_shift,
            CutoffMode::Xplor => {
                if dist_sq > coeff.r_on_sq {
                    let (s, ds_dr_divr) =
                        potentials::xplor_switch(dist_sq, coeff.r_on_sq, coeff.r_cut_sq);
                    force_divr = s * force_divr - ds_dr_divr * energy;
                    energy *= s;
                }
            }
        }

        let force_on_a = r_vec * force_divr;
        if !(energy.is_finite() && force_on_a.iter().all(|c| c.is_finite())) {
            return Err(EvaluationError::NumericOverflow {
                distance: dist,
                strength: coeff.strength,
            });
        }

        Ok(PairContribution::new(force_on_a, energy))
    }

    /// Tabulates energy and radial force for a type pair on `points` evenly spaced distances.
    pub fn profile(
        &self,
        type_a: TypeId,
        type_b: TypeId,
        r_min: f64,
        r_max: f64,
        points: usize,
    ) -> Result<Vec<ProfileSample>, EvaluationError> {
        let step = if points > 1 {
            (r_max - r_min) / (points - 1) as f64
        } else {
            0.0
        };
        (0..points)
            .map(|k| {
                let distance = r_min + step * k as f64;
                let r_vec = Vector3::new(distance, 0.0, 0.0);
                let contribution = self.evaluate_pair(type_a, type_b, &r_vec, distance)?;
                Ok(ProfileSample {
                    distance,
                    energy: contribution.energy,
                    force: contribution.force_on_a.x,
                })
            })
            .collect()
    }
}
