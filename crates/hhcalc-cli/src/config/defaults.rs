use hhcalc::core::options::legal_options;
use hhcalc::core::schemes::{Hardware, Mode, Precision, SchemeSelection};

/// Values used when neither the command line nor the setup file provides one.
pub struct DefaultsConfig {
    pub mode: Mode,
    pub itot: u64,
    pub jtot: u64,
    pub ktot: u64,
    pub npx: u64,
    pub npy: u64,
    pub precision: Precision,
    pub hardware: Hardware,
    pub num_scalars: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Les,
            itot: 1024,
            jtot: 1024,
            ktot: 256,
            npx: 1,
            npy: 1,
            precision: Precision::Single,
            hardware: Hardware::Cpu,
            num_scalars: 0,
        }
    }
}

impl DefaultsConfig {
    /// Scheme defaults depend on the mode, so they are looked up once it is known.
    pub fn schemes(&self, mode: Mode) -> SchemeSelection {
        legal_options(mode).defaults
    }
}
