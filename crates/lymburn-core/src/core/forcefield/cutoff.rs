use super::params::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How a pair interaction is brought to zero at the cutoff radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CutoffMode {
    /// Truncate at `r_cut`; energy and force jump to zero there.
    #[default]
    None,
    /// Subtract `U(r_cut)` so the energy is continuous at the cutoff.
    Shift,
    /// Blend energy and force to zero between `r_on` and `r_cut`.
    Xplor,
}

impl CutoffMode {
    pub const ALL: [CutoffMode; 3] = [CutoffMode::None, CutoffMode::Shift, CutoffMode::Xplor];

    pub fn as_str(&self) -> &'static str {
        match self {
            CutoffMode::None => "none",
            CutoffMode::Shift => "shift",
            CutoffMode::Xplor => "xplor",
        }
    }
}

impl fmt::Display for CutoffMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CutoffMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown cutoff mode '{}', expected none, shift or xplor", s))
    }
}

/// Cutoff radius, switch-on radius and smoothing mode of one pair interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutoffConfig {
    pub r_cut: f64,
    pub r_on: f64,
    pub mode: CutoffMode,
}

impl CutoffConfig {
    pub fn new(r_cut: f64, mode: CutoffMode) -> Self {
        Self {
            r_cut,
            r_on: 0.0,
            mode,
        }
    }

    pub fn with_r_on(mut self, r_on: f64) -> Self {
        self.r_on = r_on;
        self
    }

    /// Checks `r_cut > 0`, `r_on >= 0` and, in XPLOR mode, `r_on < r_cut`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.r_cut.is_finite() && self.r_cut > 0.0) {
            return Err(ConfigError::NonPositiveCutoff { r_cut: self.r_cut });
        }
        let invalid_r_on = !(self.r_on.is_finite() && self.r_on >= 0.0)
            || (self.mode == CutoffMode::Xplor && self.r_on >= self.r_cut);
        if invalid_r_on {
            return Err(ConfigError::InvalidSwitchRadius {
                r_on: self.r_on,
                r_cut: self.r_cut,
                mode: self.mode,
            });
        }
        Ok(())
    }
}
