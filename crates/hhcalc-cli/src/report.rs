use crate::error::{CliError, Result};
use hhcalc::core::schemes::SchemeOption;
use hhcalc::core::units::format_bytes;
use hhcalc::engine::config::SimulationConfig;
use hhcalc::engine::estimate::EstimateResult;
use hhcalc::engine::fields::{FieldEntry, PROGNOSTIC_STORAGE_FACTOR};
use serde::Serialize;

const LIST_SEPARATOR: &str = " + ";
const LABEL_WIDTH: usize = 28;

fn join_fields(entries: &[FieldEntry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("  {:<width$}{}\n", label, value, width = LABEL_WIDTH)
}

/// Plain-text report with a results block and a notes block.
pub fn render_text(config: &SimulationConfig, result: &EstimateResult) -> String {
    let setup = format!(
        "{} on {}, {} precision",
        config.mode.description(),
        config.hardware.description(),
        config.precision.label()
    );
    let grid = format!(
        "{} × {} × {} on {} × {} ranks",
        config.grid.itot,
        config.grid.jtot,
        config.grid.ktot,
        config.decomposition.npx,
        config.decomposition.npy
    );
    let results = [
        row("Setup", setup),
        row("Grid", grid),
        row(
            "Ghost cells (ij, k)",
            format!("{}, {}", result.halo.ij_gc, result.halo.k_gc),
        ),
        row(
            "Prognostic 3D fields **",
            format!(
                "{} × {}",
                result.prognostic_field_count, PROGNOSTIC_STORAGE_FACTOR
            ),
        ),
        row("Diagnostic 3D fields", result.diagnostic_field_count),
        row("Temporary 3D fields", result.temporary_field_count),
        row("Total 3D fields", result.total_field_count),
        row("Memory per 3D field", format_bytes(result.bytes_per_field)),
        row("Total memory", format_bytes(result.total_bytes)),
    ];

    let mut text = String::from("Results\n");
    text.extend(results);
    text.push_str("\nNotes\n");
    text.push_str(&format!(
        "  Prognostic 3D fields: {}.\n",
        join_fields(&result.prognostic_fields)
    ));
    text.push_str(&format!(
        "  Diagnostic 3D fields: {}.\n",
        join_fields(&result.diagnostic_fields)
    ));
    text.push_str(&format!(
        "  Grid points per core/GPU: {:.0}.\n",
        result.grid_points_per_rank
    ));
    text.push_str(
        "  ** Low storage Runge Kutta time integration requires two 3D fields per prognostic field.\n",
    );
    text
}

#[derive(Serialize)]
struct MemorySummary {
    per_field: String,
    total: String,
}

#[derive(Serialize)]
struct TomlReport<'a> {
    setup: &'a SimulationConfig,
    memory: MemorySummary,
    estimate: &'a EstimateResult,
}

/// TOML document with the resolved setup, formatted memory sizes and the raw estimate.
pub fn render_toml(config: &SimulationConfig, result: &EstimateResult) -> Result<String> {
    let report = TomlReport {
        setup: config,
        memory: MemorySummary {
            per_field: format_bytes(result.bytes_per_field),
            total: format_bytes(result.total_bytes),
        },
        estimate: result,
    };
    toml::to_string(&report)
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to serialize report: {}", e)))
}
