use crate::cli::{EstimateArgs, OutputFormat};
use crate::config;
use crate::error::Result;
use crate::report;
use hhcalc::workflows::calculate;
use tracing::info;

pub fn run(args: EstimateArgs) -> Result<()> {
    info!("Merging setup from file, --set values and CLI arguments...");
    let app_config = config::build_config(&args)?;

    info!("Invoking the core estimate workflow...");
    let result = calculate::run(&app_config.core_config)?;

    let rendered = match app_config.format {
        OutputFormat::Text => report::render_text(&app_config.core_config, &result),
        OutputFormat::Toml => report::render_toml(&app_config.core_config, &result)?,
    };
    print!("{}", rendered);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use hhcalc::core::schemes::{Mode, RadiationScheme, ThermoScheme};
    use hhcalc::engine::error::EngineError;

    #[test]
    fn reference_setup_runs_to_completion() {
        assert!(run(EstimateArgs::default()).is_ok());
    }

    #[test]
    fn invalid_decomposition_surfaces_as_engine_error() {
        let args = EstimateArgs {
            itot: Some(100),
            jtot: Some(100),
            ktot: Some(50),
            npx: Some(3),
            ..Default::default()
        };

        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::Decomposition(_))
        ));
        assert!(err.to_string().contains("itot % npx != 0"));
    }

    #[test]
    fn radiation_without_moist_thermo_is_refused() {
        let args = EstimateArgs {
            mode: Some(Mode::Les),
            thermo: Some(ThermoScheme::Disabled),
            radiation: Some(RadiationScheme::RteRrtmgp),
            ..Default::default()
        };

        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::SchemeCombination { .. })
        ));
    }

    #[test]
    fn oversized_grid_is_reported_instead_of_a_wrapped_total() {
        let args = EstimateArgs {
            itot: Some(1 << 22),
            jtot: Some(1 << 22),
            ktot: Some(1 << 22),
            ..Default::default()
        };

        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::SizeOverflow { .. })
        ));
    }
}
