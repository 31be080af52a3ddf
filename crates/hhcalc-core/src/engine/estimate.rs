use super::config::SimulationConfig;
use super::error::EngineError;
use super::fields::{FieldEntry, FieldInventory};
use crate::core::grid::{CellCounts, HaloWidths, grid_points_per_rank};
use crate::core::schemes::{SchemeSelection, ThermoScheme};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateResult {
    pub prognostic_fields: Vec<FieldEntry>,
    pub diagnostic_fields: Vec<FieldEntry>,
    pub prognostic_field_count: u64,
    pub diagnostic_field_count: u64,
    pub temporary_field_count: u64,
    pub total_field_count: u64,
    pub bytes_per_field: u64,
    pub total_bytes: u64,
    /// Exact quotient; callers round it for display.
    pub grid_points_per_rank: f64,
    pub halo: HaloWidths,
    pub cells: CellCounts,
}

/// Radiation and microphysics read moisture fields, so both need moist thermodynamics.
pub fn check_scheme_combination(schemes: &SchemeSelection) -> Result<(), EngineError> {
    let needs_moisture = schemes.radiation.is_enabled() || schemes.microphysics.is_enabled();
    if needs_moisture && schemes.thermo != ThermoScheme::Moist {
        return Err(EngineError::SchemeCombination {
            thermo: schemes.thermo,
            radiation: schemes.radiation,
            microphysics: schemes.microphysics,
        });
    }
    Ok(())
}

/// Counts the 3D fields of `config` and the memory they take.
///
/// The decomposition is not checked here; see
/// [`validate_grid`](super::decomposition::validate_grid).
#[instrument(skip_all, fields(mode = %config.mode, hardware = %config.hardware))]
pub fn estimate(config: &SimulationConfig) -> Result<EstimateResult, EngineError> {
    check_scheme_combination(&config.schemes)?;

    let overflow = || EngineError::SizeOverflow {
        itot: config.grid.itot,
        jtot: config.grid.jtot,
        ktot: config.grid.ktot,
    };

    let halo = config.schemes.advection.halo_widths();
    let cells = CellCounts::with_halo(&config.grid, halo).ok_or_else(overflow)?;
    let bytes_per_field = cells
        .ncells()
        .and_then(|ncells| ncells.checked_mul(config.precision.bytes_per_value()))
        .ok_or_else(overflow)?;
    debug!(?halo, ?cells, bytes_per_field, "Sized one 3D field");

    let inventory = FieldInventory::new(&config.schemes, config.hardware, config.num_scalars);
    let total_field_count = inventory.total_count();
    let total_bytes = total_field_count
        .checked_mul(bytes_per_field)
        .ok_or_else(overflow)?;

    Ok(EstimateResult {
        prognostic_field_count: inventory.prognostic_count(),
        diagnostic_field_count: inventory.diagnostic_count(),
        temporary_field_count: inventory.temporary_count,
        total_field_count,
        prognostic_fields: inventory.prognostic,
        diagnostic_fields: inventory.diagnostic,
        bytes_per_field,
        total_bytes,
        grid_points_per_rank: grid_points_per_rank(&config.grid, &config.decomposition),
        halo,
        cells,
    })
}
