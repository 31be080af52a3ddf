use crate::cli::OutputFormat;
use hhcalc::engine::config::SimulationConfig;

pub struct AppConfig {
    pub core_config: SimulationConfig,
    pub format: OutputFormat,
}
