use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::EstimateArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use hhcalc::core::options::legal_options;
use hhcalc::core::schemes::{ParseOptionError, SchemeOption, SchemeSelection};
use hhcalc::engine::config::SimulationConfigBuilder;
use std::str::FromStr;
use tracing::debug;

/// Resolves the final setup. Precedence: CLI flag, then `--set`, then file, then defaults.
pub fn build_config(args: &EstimateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let mode = args.mode.or(file_config.mode).unwrap_or(defaults.mode);
    let scheme_defaults = defaults.schemes(mode);

    let grid_file = file_config.grid.take().unwrap_or_default();
    let decomposition_file = file_config.decomposition.take().unwrap_or_default();
    let schemes_file = file_config.schemes.take().unwrap_or_default();

    let schemes = SchemeSelection {
        advection: args
            .advection
            .or(schemes_file.advection)
            .unwrap_or(scheme_defaults.advection),
        diffusion: args
            .diffusion
            .or(schemes_file.diffusion)
            .unwrap_or(scheme_defaults.diffusion),
        thermo: args
            .thermo
            .or(schemes_file.thermo)
            .unwrap_or(scheme_defaults.thermo),
        radiation: args
            .radiation
            .or(schemes_file.radiation)
            .unwrap_or(scheme_defaults.radiation),
        microphysics: args
            .microphysics
            .or(schemes_file.microphysics)
            .unwrap_or(scheme_defaults.microphysics),
    };

    let illegal = legal_options(mode).check(&schemes);
    if !illegal.is_empty() {
        let details: Vec<_> = illegal.iter().map(ToString::to_string).collect();
        return Err(CliError::Config(details.join("; ")));
    }

    let core_config = SimulationConfigBuilder::new()
        .itot(args.itot.or(grid_file.itot).unwrap_or(defaults.itot))
        .jtot(args.jtot.or(grid_file.jtot).unwrap_or(defaults.jtot))
        .ktot(args.ktot.or(grid_file.ktot).unwrap_or(defaults.ktot))
        .npx(args.npx.or(decomposition_file.npx).unwrap_or(defaults.npx))
        .npy(args.npy.or(decomposition_file.npy).unwrap_or(defaults.npy))
        .precision(
            args.precision
                .or(file_config.precision)
                .unwrap_or(defaults.precision),
        )
        .hardware(
            args.hardware
                .or(file_config.hardware)
                .unwrap_or(defaults.hardware),
        )
        .mode(mode)
        .schemes(schemes)
        .num_scalars(
            args.scalars
                .or(file_config.num_scalars)
                .unwrap_or(defaults.num_scalars),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, "Resolved simulation setup.");

    Ok(AppConfig {
        core_config,
        format: args.format,
    })
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid integer value for {}: {}", key, value))
    })
}

fn parse_option<T>(value: &str) -> Result<T>
where
    T: SchemeOption + FromStr<Err = ParseOptionError>,
{
    value.parse().map_err(|e: ParseOptionError| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let parser::SetValue { key, value } = parser::parse_set_value(kv_pair)
            .map_err(|e| CliError::Argument(e.to_string()))?;

        match key {
            "mode" => config.mode = Some(parse_option(value)?),
            "precision" => config.precision = Some(parse_option(value)?),
            "hardware" => config.hardware = Some(parse_option(value)?),
            "num-scalars" => config.num_scalars = Some(parse_number(key, value)?),
            "grid.itot" => {
                config.grid.get_or_insert_with(Default::default).itot =
                    Some(parse_number(key, value)?)
            }
            "grid.jtot" => {
                config.grid.get_or_insert_with(Default::default).jtot =
                    Some(parse_number(key, value)?)
            }
            "grid.ktot" => {
                config.grid.get_or_insert_with(Default::default).ktot =
                    Some(parse_number(key, value)?)
            }
            "decomposition.npx" => {
                config.decomposition.get_or_insert_with(Default::default).npx =
                    Some(parse_number(key, value)?)
            }
            "decomposition.npy" => {
                config.decomposition.get_or_insert_with(Default::default).npy =
                    Some(parse_number(key, value)?)
            }
            "schemes.advection" => {
                config.schemes.get_or_insert_with(Default::default).advection =
                    Some(parse_option(value)?)
            }
            "schemes.diffusion" => {
                config.schemes.get_or_insert_with(Default::default).diffusion =
                    Some(parse_option(value)?)
            }
            "schemes.thermo" => {
                config.schemes.get_or_insert_with(Default::default).thermo =
                    Some(parse_option(value)?)
            }
            "schemes.radiation" => {
                config.schemes.get_or_insert_with(Default::default).radiation =
                    Some(parse_option(value)?)
            }
            "schemes.microphysics" => {
                config.schemes.get_or_insert_with(Default::default).microphysics =
                    Some(parse_option(value)?)
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
