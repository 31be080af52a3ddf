use crate::engine::config::SimulationConfig;
use crate::engine::decomposition::validate_grid;
use crate::engine::error::EngineError;
use crate::engine::estimate::{EstimateResult, check_scheme_combination, estimate};
use tracing::{info, instrument};

/// Runs a full calculation: scheme cross-check, decomposition check, then the estimate.
///
/// The first failing stage ends the calculation. A failed decomposition check carries
/// every violated rule, not only the first one.
#[instrument(skip_all, name = "calculate_workflow")]
pub fn run(config: &SimulationConfig) -> Result<EstimateResult, EngineError> {
    info!(
        itot = config.grid.itot,
        jtot = config.grid.jtot,
        ktot = config.grid.ktot,
        npx = config.decomposition.npx,
        npy = config.decomposition.npy,
        "Starting field and memory estimate."
    );

    check_scheme_combination(&config.schemes)?;

    let validation = validate_grid(&config.grid, &config.decomposition);
    if !validation.is_valid() {
        return Err(EngineError::Decomposition(validation));
    }

    let result = estimate(config)?;
    info!(
        total_fields = result.total_field_count,
        total_bytes = result.total_bytes,
        "Estimate complete."
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::GridExtents;
    use crate::core::options::legal_options;
    use crate::core::schemes::{Hardware, Mode, Precision, RadiationScheme, ThermoScheme};
    use crate::engine::config::SimulationConfigBuilder;
    use crate::engine::decomposition::DecompositionRule;

    fn config(grid: GridExtents, npx: u64, npy: u64) -> SimulationConfig {
        SimulationConfigBuilder::new()
            .grid(grid)
            .npx(npx)
            .npy(npy)
            .precision(Precision::Double)
            .hardware(Hardware::Gpu)
            .mode(Mode::Les)
            .schemes(legal_options(Mode::Les).defaults)
            .build()
            .unwrap()
    }

    #[test]
    fn valid_setup_returns_estimate() {
        let result = run(&config(GridExtents::new(1024, 1024, 256), 4, 2)).unwrap();
        assert_eq!(result.temporary_field_count, 2);
        assert_eq!(result.grid_points_per_rank, 33_554_432.0);
    }

    #[test]
    fn invalid_decomposition_is_reported_with_all_violations() {
        let err = run(&config(GridExtents::new(100, 100, 50), 3, 1)).unwrap_err();

        match err {
            EngineError::Decomposition(validation) => {
                assert_eq!(
                    validation.violations(),
                    &[DecompositionRule::ItotByNpx, DecompositionRule::KtotByNpx]
                );
            }
            other => panic!("Expected a decomposition error, got {other:?}"),
        }
    }

    #[test]
    fn scheme_combination_is_checked_before_the_decomposition() {
        let mut config = config(GridExtents::new(100, 100, 50), 3, 1);
        config.schemes.thermo = ThermoScheme::Disabled;
        config.schemes.radiation = RadiationScheme::RteRrtmgp;

        let err = run(&config).unwrap_err();
        assert!(matches!(err, EngineError::SchemeCombination { .. }));
    }
}
