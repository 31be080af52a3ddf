use thiserror::Error;

use super::config::ConfigError;
use super::decomposition::ValidationResult;
use crate::core::schemes::{MicrophysicsScheme, RadiationScheme, ThermoScheme};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid grid decomposition: {0}.")]
    Decomposition(ValidationResult),

    #[error(
        "Radiation and/or microphysics schemes require moist thermodynamics (thermo: {thermo}, radiation: {radiation}, microphysics: {microphysics})."
    )]
    SchemeCombination {
        thermo: ThermoScheme,
        radiation: RadiationScheme,
        microphysics: MicrophysicsScheme,
    },

    #[error(
        "Memory estimate for a {itot} × {jtot} × {ktot} grid exceeds the representable byte count."
    )]
    SizeOverflow { itot: u64, jtot: u64, ktot: u64 },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
