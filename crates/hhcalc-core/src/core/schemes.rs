use super::grid::HaloWidths;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of flux fields (and matching scratch fields) the RTE+RRTMGP scheme keeps in 3D.
pub const RRTMGP_FLUX_FIELDS: u64 = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'. Expected one of: {expected}.")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// A closed set of user-selectable options with stable short labels.
///
/// Labels are looked up case-insensitively through a compile-time alias table, so
/// `"Deardorff TKE"`, `"deardorff-tke"` and `"tke"` all resolve to the same variant.
pub trait SchemeOption: Copy + Eq + Sized + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn label(self) -> &'static str;
    fn description(self) -> &'static str;
    fn aliases() -> &'static Map<&'static str, Self>;

    fn parse_label(value: &str) -> Result<Self, ParseOptionError> {
        let key = value.trim().to_ascii_lowercase();
        Self::aliases()
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ParseOptionError {
                kind: Self::KIND,
                value: value.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|option| option.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

macro_rules! impl_label_conversions {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = ParseOptionError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as SchemeOption>::parse_label(s)
                }
            }

            impl TryFrom<String> for $ty {
                type Error = ParseOptionError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    value.parse()
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.label().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Precision {
    Single,
    Double,
}

impl Precision {
    pub fn bytes_per_value(self) -> u64 {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
        }
    }
}

static PRECISION_ALIASES: Map<&'static str, Precision> = phf_map! {
    "single" => Precision::Single, "4" => Precision::Single, "single (4)" => Precision::Single,
    "single (4 byte)" => Precision::Single, "float" => Precision::Single, "f32" => Precision::Single,
    "double" => Precision::Double, "8" => Precision::Double, "double (8)" => Precision::Double,
    "double (8 byte)" => Precision::Double, "f64" => Precision::Double,
};

impl SchemeOption for Precision {
    const KIND: &'static str = "precision";
    const ALL: &'static [Self] = &[Precision::Single, Precision::Double];

    fn label(self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Precision::Single => "Single (4)",
            Precision::Double => "Double (8)",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &PRECISION_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Hardware {
    Cpu,
    Gpu,
}

impl Hardware {
    /// Scratch fields allocated regardless of the scheme selection.
    /// The GPU kernels share their scratch buffers, the CPU code does not.
    pub fn base_temporary_fields(self) -> u64 {
        match self {
            Hardware::Cpu => 4,
            Hardware::Gpu => 2,
        }
    }
}

static HARDWARE_ALIASES: Map<&'static str, Hardware> = phf_map! {
    "cpu" => Hardware::Cpu,
    "gpu" => Hardware::Gpu, "cuda" => Hardware::Gpu,
};

impl SchemeOption for Hardware {
    const KIND: &'static str = "hardware";
    const ALL: &'static [Self] = &[Hardware::Cpu, Hardware::Gpu];

    fn label(self) -> &'static str {
        match self {
            Hardware::Cpu => "cpu",
            Hardware::Gpu => "gpu",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Hardware::Cpu => "CPU",
            Hardware::Gpu => "GPU",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &HARDWARE_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Mode {
    Les,
    Dns,
}

static MODE_ALIASES: Map<&'static str, Mode> = phf_map! {
    "les" => Mode::Les,
    "dns" => Mode::Dns,
};

impl SchemeOption for Mode {
    const KIND: &'static str = "mode";
    const ALL: &'static [Self] = &[Mode::Les, Mode::Dns];

    fn label(self) -> &'static str {
        match self {
            Mode::Les => "les",
            Mode::Dns => "dns",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Mode::Les => "LES",
            Mode::Dns => "DNS",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &MODE_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AdvectionScheme {
    Second,
    Fourth,
    FourthM,
    Interp2i4,
    Interp2i5,
    Interp2i62,
}

impl AdvectionScheme {
    /// Ghost cells the advection stencil needs on each side of the domain.
    pub fn halo_widths(self) -> HaloWidths {
        let (ij_gc, k_gc) = match self {
            AdvectionScheme::Second => (1, 1),
            AdvectionScheme::Fourth | AdvectionScheme::FourthM => (2, 2),
            AdvectionScheme::Interp2i4 => (2, 1),
            AdvectionScheme::Interp2i5 | AdvectionScheme::Interp2i62 => (3, 1),
        };
        HaloWidths { ij_gc, k_gc }
    }
}

static ADVECTION_ALIASES: Map<&'static str, AdvectionScheme> = phf_map! {
    "2" => AdvectionScheme::Second,
    "4" => AdvectionScheme::Fourth,
    "4m" => AdvectionScheme::FourthM,
    "2i4" => AdvectionScheme::Interp2i4,
    "2i5" => AdvectionScheme::Interp2i5,
    "2i62" => AdvectionScheme::Interp2i62,
};

impl SchemeOption for AdvectionScheme {
    const KIND: &'static str = "advection scheme";
    const ALL: &'static [Self] = &[
        AdvectionScheme::Second,
        AdvectionScheme::Fourth,
        AdvectionScheme::FourthM,
        AdvectionScheme::Interp2i4,
        AdvectionScheme::Interp2i5,
        AdvectionScheme::Interp2i62,
    ];

    fn label(self) -> &'static str {
        match self {
            AdvectionScheme::Second => "2",
            AdvectionScheme::Fourth => "4",
            AdvectionScheme::FourthM => "4m",
            AdvectionScheme::Interp2i4 => "2i4",
            AdvectionScheme::Interp2i5 => "2i5",
            AdvectionScheme::Interp2i62 => "2i62",
        }
    }

    fn description(self) -> &'static str {
        match self {
            AdvectionScheme::Second => "2nd order",
            AdvectionScheme::Fourth => "4th order",
            AdvectionScheme::FourthM => "4th order (4m variant)",
            AdvectionScheme::Interp2i4 => "2nd order, 4th order interpolation",
            AdvectionScheme::Interp2i5 => "2nd order, 5th order interpolation",
            AdvectionScheme::Interp2i62 => "2nd order, 6th order interpolation (2i62)",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &ADVECTION_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DiffusionScheme {
    Second,
    Fourth,
    Smagorinsky,
    DeardorffTke,
}

impl DiffusionScheme {
    pub fn prognostic_fields(self) -> &'static [&'static str] {
        match self {
            DiffusionScheme::DeardorffTke => &["tke"],
            DiffusionScheme::Second | DiffusionScheme::Fourth | DiffusionScheme::Smagorinsky => {
                &[]
            }
        }
    }

    /// Eddy viscosity fields. The TKE scheme keeps a separate one for scalars as soon as
    /// any thermodynamics is active.
    pub fn diagnostic_fields(self, thermo: ThermoScheme) -> &'static [&'static str] {
        match (self, thermo) {
            (DiffusionScheme::Second | DiffusionScheme::Fourth, _) => &[],
            (DiffusionScheme::Smagorinsky, _) => &["evisc"],
            (DiffusionScheme::DeardorffTke, ThermoScheme::Disabled) => &["evisc"],
            (DiffusionScheme::DeardorffTke, _) => &["evisc", "eviscs"],
        }
    }
}

static DIFFUSION_ALIASES: Map<&'static str, DiffusionScheme> = phf_map! {
    "2" => DiffusionScheme::Second,
    "4" => DiffusionScheme::Fourth,
    "smagorinsky" => DiffusionScheme::Smagorinsky, "smag" => DiffusionScheme::Smagorinsky,
    "smag2" => DiffusionScheme::Smagorinsky,
    "tke" => DiffusionScheme::DeardorffTke, "deardorff tke" => DiffusionScheme::DeardorffTke,
    "deardorff-tke" => DiffusionScheme::DeardorffTke, "tke2" => DiffusionScheme::DeardorffTke,
};

impl SchemeOption for DiffusionScheme {
    const KIND: &'static str = "diffusion scheme";
    const ALL: &'static [Self] = &[
        DiffusionScheme::Second,
        DiffusionScheme::Fourth,
        DiffusionScheme::Smagorinsky,
        DiffusionScheme::DeardorffTke,
    ];

    fn label(self) -> &'static str {
        match self {
            DiffusionScheme::Second => "2",
            DiffusionScheme::Fourth => "4",
            DiffusionScheme::Smagorinsky => "smagorinsky",
            DiffusionScheme::DeardorffTke => "tke",
        }
    }

    fn description(self) -> &'static str {
        match self {
            DiffusionScheme::Second => "2nd order",
            DiffusionScheme::Fourth => "4th order",
            DiffusionScheme::Smagorinsky => "Smagorinsky",
            DiffusionScheme::DeardorffTke => "Deardorff TKE",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &DIFFUSION_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThermoScheme {
    Disabled,
    Buoyancy,
    Dry,
    Moist,
}

impl ThermoScheme {
    pub fn is_enabled(self) -> bool {
        self != ThermoScheme::Disabled
    }

    pub fn prognostic_fields(self) -> &'static [&'static str] {
        match self {
            ThermoScheme::Disabled => &[],
            ThermoScheme::Buoyancy => &["b"],
            ThermoScheme::Dry => &["th"],
            ThermoScheme::Moist => &["thl", "qt"],
        }
    }
}

static THERMO_ALIASES: Map<&'static str, ThermoScheme> = phf_map! {
    "disabled" => ThermoScheme::Disabled, "0" => ThermoScheme::Disabled,
    "buoyancy" => ThermoScheme::Buoyancy, "buoy" => ThermoScheme::Buoyancy,
    "dry" => ThermoScheme::Dry,
    "moist" => ThermoScheme::Moist,
};

impl SchemeOption for ThermoScheme {
    const KIND: &'static str = "thermodynamics scheme";
    const ALL: &'static [Self] = &[
        ThermoScheme::Disabled,
        ThermoScheme::Buoyancy,
        ThermoScheme::Dry,
        ThermoScheme::Moist,
    ];

    fn label(self) -> &'static str {
        match self {
            ThermoScheme::Disabled => "disabled",
            ThermoScheme::Buoyancy => "buoyancy",
            ThermoScheme::Dry => "dry",
            ThermoScheme::Moist => "moist",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ThermoScheme::Disabled => "Disabled",
            ThermoScheme::Buoyancy => "Buoyancy",
            ThermoScheme::Dry => "Dry",
            ThermoScheme::Moist => "Moist",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &THERMO_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RadiationScheme {
    Disabled,
    RteRrtmgp,
}

impl RadiationScheme {
    pub fn is_enabled(self) -> bool {
        self != RadiationScheme::Disabled
    }

    /// 3D flux fields kept as diagnostics. Each one needs a scratch field as well.
    pub fn flux_fields(self) -> u64 {
        match self {
            RadiationScheme::Disabled => 0,
            RadiationScheme::RteRrtmgp => RRTMGP_FLUX_FIELDS,
        }
    }
}

static RADIATION_ALIASES: Map<&'static str, RadiationScheme> = phf_map! {
    "disabled" => RadiationScheme::Disabled, "0" => RadiationScheme::Disabled,
    "rte-rrtmgp" => RadiationScheme::RteRrtmgp, "rte+rrtmgp" => RadiationScheme::RteRrtmgp,
    "rrtmgp" => RadiationScheme::RteRrtmgp,
};

impl SchemeOption for RadiationScheme {
    const KIND: &'static str = "radiation scheme";
    const ALL: &'static [Self] = &[RadiationScheme::Disabled, RadiationScheme::RteRrtmgp];

    fn label(self) -> &'static str {
        match self {
            RadiationScheme::Disabled => "disabled",
            RadiationScheme::RteRrtmgp => "rte-rrtmgp",
        }
    }

    fn description(self) -> &'static str {
        match self {
            RadiationScheme::Disabled => "Disabled",
            RadiationScheme::RteRrtmgp => "RTE+RRTMGP",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &RADIATION_ALIASES
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MicrophysicsScheme {
    Disabled,
    SingleMomentIce,
    DoubleMomentWarm,
    DoubleMomentIce,
}

impl MicrophysicsScheme {
    pub fn is_enabled(self) -> bool {
        self != MicrophysicsScheme::Disabled
    }

    pub fn prognostic_fields(self) -> &'static [&'static str] {
        match self {
            MicrophysicsScheme::Disabled => &[],
            MicrophysicsScheme::SingleMomentIce => &["qr", "qs", "qg"],
            MicrophysicsScheme::DoubleMomentWarm => &["qr", "nr"],
            MicrophysicsScheme::DoubleMomentIce => {
                &["qi", "qr", "qs", "qg", "qh", "ni", "nr", "ns", "ng", "nh"]
            }
        }
    }
}

static MICROPHYSICS_ALIASES: Map<&'static str, MicrophysicsScheme> = phf_map! {
    "disabled" => MicrophysicsScheme::Disabled, "0" => MicrophysicsScheme::Disabled,
    "single-moment-ice" => MicrophysicsScheme::SingleMomentIce,
    "single moment ice" => MicrophysicsScheme::SingleMomentIce,
    "nsw6" => MicrophysicsScheme::SingleMomentIce,
    "double-moment-warm" => MicrophysicsScheme::DoubleMomentWarm,
    "double moment warm" => MicrophysicsScheme::DoubleMomentWarm,
    "2mom_warm" => MicrophysicsScheme::DoubleMomentWarm,
    "double-moment-ice" => MicrophysicsScheme::DoubleMomentIce,
    "double moment ice" => MicrophysicsScheme::DoubleMomentIce,
    "sb06" => MicrophysicsScheme::DoubleMomentIce,
};

impl SchemeOption for MicrophysicsScheme {
    const KIND: &'static str = "microphysics scheme";
    const ALL: &'static [Self] = &[
        MicrophysicsScheme::Disabled,
        MicrophysicsScheme::SingleMomentIce,
        MicrophysicsScheme::DoubleMomentWarm,
        MicrophysicsScheme::DoubleMomentIce,
    ];

    fn label(self) -> &'static str {
        match self {
            MicrophysicsScheme::Disabled => "disabled",
            MicrophysicsScheme::SingleMomentIce => "single-moment-ice",
            MicrophysicsScheme::DoubleMomentWarm => "double-moment-warm",
            MicrophysicsScheme::DoubleMomentIce => "double-moment-ice",
        }
    }

    fn description(self) -> &'static str {
        match self {
            MicrophysicsScheme::Disabled => "Disabled",
            MicrophysicsScheme::SingleMomentIce => "Single moment ice",
            MicrophysicsScheme::DoubleMomentWarm => "Double moment warm",
            MicrophysicsScheme::DoubleMomentIce => "Double moment ice",
        }
    }

    fn aliases() -> &'static Map<&'static str, Self> {
        &MICROPHYSICS_ALIASES
    }
}

impl_label_conversions!(
    Precision,
    Hardware,
    Mode,
    AdvectionScheme,
    DiffusionScheme,
    ThermoScheme,
    RadiationScheme,
    MicrophysicsScheme,
);

/// The five numerical-scheme picks that shape the field inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeSelection {
    pub advection: AdvectionScheme,
    pub diffusion: DiffusionScheme,
    pub thermo: ThermoScheme,
    pub radiation: RadiationScheme,
    pub microphysics: MicrophysicsScheme,
}
