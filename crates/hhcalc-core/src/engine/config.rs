use crate::core::grid::{Decomposition, GridExtents};
use crate::core::schemes::{
    AdvectionScheme, DiffusionScheme, Hardware, MicrophysicsScheme, Mode, Precision,
    RadiationScheme, SchemeSelection, ThermoScheme,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_SCALARS: u32 = 100;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Parameter '{0}' must be at least 1")]
    ZeroValue(&'static str),

    #[error("Number of scalars ({value}) exceeds the maximum of {max}")]
    TooManyScalars { value: u32, max: u32 },
}

/// Everything the estimator needs to know about one simulation setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub precision: Precision,
    pub hardware: Hardware,
    pub mode: Mode,
    pub num_scalars: u32,
    pub grid: GridExtents,
    pub decomposition: Decomposition,
    pub schemes: SchemeSelection,
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    itot: Option<u64>,
    jtot: Option<u64>,
    ktot: Option<u64>,
    npx: Option<u64>,
    npy: Option<u64>,
    precision: Option<Precision>,
    hardware: Option<Hardware>,
    mode: Option<Mode>,
    advection: Option<AdvectionScheme>,
    diffusion: Option<DiffusionScheme>,
    thermo: Option<ThermoScheme>,
    radiation: Option<RadiationScheme>,
    microphysics: Option<MicrophysicsScheme>,
    num_scalars: Option<u32>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn itot(mut self, itot: u64) -> Self {
        self.itot = Some(itot);
        self
    }
    pub fn jtot(mut self, jtot: u64) -> Self {
        self.jtot = Some(jtot);
        self
    }
    pub fn ktot(mut self, ktot: u64) -> Self {
        self.ktot = Some(ktot);
        self
    }
    pub fn grid(self, grid: GridExtents) -> Self {
        self.itot(grid.itot).jtot(grid.jtot).ktot(grid.ktot)
    }
    pub fn npx(mut self, npx: u64) -> Self {
        self.npx = Some(npx);
        self
    }
    pub fn npy(mut self, npy: u64) -> Self {
        self.npy = Some(npy);
        self
    }
    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }
    pub fn hardware(mut self, hardware: Hardware) -> Self {
        self.hardware = Some(hardware);
        self
    }
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
    pub fn advection(mut self, scheme: AdvectionScheme) -> Self {
        self.advection = Some(scheme);
        self
    }
    pub fn diffusion(mut self, scheme: DiffusionScheme) -> Self {
        self.diffusion = Some(scheme);
        self
    }
    pub fn thermo(mut self, scheme: ThermoScheme) -> Self {
        self.thermo = Some(scheme);
        self
    }
    pub fn radiation(mut self, scheme: RadiationScheme) -> Self {
        self.radiation = Some(scheme);
        self
    }
    pub fn microphysics(mut self, scheme: MicrophysicsScheme) -> Self {
        self.microphysics = Some(scheme);
        self
    }
    pub fn schemes(self, schemes: SchemeSelection) -> Self {
        self.advection(schemes.advection)
            .diffusion(schemes.diffusion)
            .thermo(schemes.thermo)
            .radiation(schemes.radiation)
            .microphysics(schemes.microphysics)
    }
    pub fn num_scalars(mut self, n: u32) -> Self {
        self.num_scalars = Some(n);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let positive = |value: Option<u64>, name: &'static str| -> Result<u64, ConfigError> {
            match value {
                None => Err(ConfigError::MissingParameter(name)),
                Some(0) => Err(ConfigError::ZeroValue(name)),
                Some(v) => Ok(v),
            }
        };

        let grid = GridExtents {
            itot: positive(self.itot, "itot")?,
            jtot: positive(self.jtot, "jtot")?,
            ktot: positive(self.ktot, "ktot")?,
        };
        let decomposition = Decomposition {
            npx: positive(self.npx, "npx")?,
            npy: positive(self.npy, "npy")?,
        };
        let schemes = SchemeSelection {
            advection: self
                .advection
                .ok_or(ConfigError::MissingParameter("advection"))?,
            diffusion: self
                .diffusion
                .ok_or(ConfigError::MissingParameter("diffusion"))?,
            thermo: self.thermo.ok_or(ConfigError::MissingParameter("thermo"))?,
            radiation: self
                .radiation
                .ok_or(ConfigError::MissingParameter("radiation"))?,
            microphysics: self
                .microphysics
                .ok_or(ConfigError::MissingParameter("microphysics"))?,
        };

        let num_scalars = self.num_scalars.unwrap_or(0);
        if num_scalars > MAX_SCALARS {
            return Err(ConfigError::TooManyScalars {
                value: num_scalars,
                max: MAX_SCALARS,
            });
        }

        Ok(SimulationConfig {
            precision: self
                .precision
                .ok_or(ConfigError::MissingParameter("precision"))?,
            hardware: self
                .hardware
                .ok_or(ConfigError::MissingParameter("hardware"))?,
            mode: self.mode.ok_or(ConfigError::MissingParameter("mode"))?,
            num_scalars,
            grid,
            decomposition,
            schemes,
        })
    }
}
