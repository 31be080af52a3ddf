use crate::error::{CliError, Result};
use hhcalc::core::schemes::{
    AdvectionScheme, DiffusionScheme, Hardware, MicrophysicsScheme, Mode, Precision,
    RadiationScheme, ThermoScheme,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGridConfig {
    pub itot: Option<u64>,
    pub jtot: Option<u64>,
    pub ktot: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileDecompositionConfig {
    pub npx: Option<u64>,
    pub npy: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSchemesConfig {
    pub advection: Option<AdvectionScheme>,
    pub diffusion: Option<DiffusionScheme>,
    pub thermo: Option<ThermoScheme>,
    pub radiation: Option<RadiationScheme>,
    pub microphysics: Option<MicrophysicsScheme>,
}

/// A setup file where every value is optional. Missing values fall back to the defaults.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub mode: Option<Mode>,
    pub precision: Option<Precision>,
    pub hardware: Option<Hardware>,
    pub num_scalars: Option<u32>,
    pub grid: Option<FileGridConfig>,
    pub decomposition: Option<FileDecompositionConfig>,
    pub schemes: Option<FileSchemesConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading setup from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
