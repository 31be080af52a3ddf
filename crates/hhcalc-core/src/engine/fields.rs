use crate::core::schemes::{Hardware, SchemeSelection};
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter;

const MOMENTUM_FIELDS: [&str; 3] = ["u", "v", "w"];
const PRESSURE_FIELD: &str = "p";

/// Low-storage Runge-Kutta keeps a tendency field next to every prognostic field.
pub const PROGNOSTIC_STORAGE_FACTOR: u64 = 2;

/// One line in a field listing. Aggregates stand for several 3D fields at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEntry {
    Named(&'static str),
    Scalars(u32),
    RadiativeFluxes(u64),
}

impl FieldEntry {
    pub fn count(self) -> u64 {
        match self {
            FieldEntry::Named(_) => 1,
            FieldEntry::Scalars(n) => u64::from(n),
            FieldEntry::RadiativeFluxes(n) => n,
        }
    }
}

impl fmt::Display for FieldEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldEntry::Named(name) => f.write_str(name),
            FieldEntry::Scalars(n) => write!(f, "{} × scalar", n),
            FieldEntry::RadiativeFluxes(n) => write!(f, "{} × RRTMGP fluxes", n),
        }
    }
}

impl Serialize for FieldEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The 3D fields a scheme selection allocates, grouped by role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInventory {
    pub prognostic: Vec<FieldEntry>,
    pub diagnostic: Vec<FieldEntry>,
    pub temporary_count: u64,
}

impl FieldInventory {
    pub fn new(schemes: &SchemeSelection, hardware: Hardware, num_scalars: u32) -> Self {
        let named = |names: &'static [&'static str]| names.iter().copied().map(FieldEntry::Named);

        let prognostic = named(&MOMENTUM_FIELDS)
            .chain(named(schemes.diffusion.prognostic_fields()))
            .chain(named(schemes.thermo.prognostic_fields()))
            .chain(named(schemes.microphysics.prognostic_fields()))
            .chain((num_scalars > 0).then_some(FieldEntry::Scalars(num_scalars)))
            .collect();

        let flux_fields = schemes.radiation.flux_fields();
        let diagnostic = iter::once(FieldEntry::Named(PRESSURE_FIELD))
            .chain(named(schemes.diffusion.diagnostic_fields(schemes.thermo)))
            .chain((flux_fields > 0).then_some(FieldEntry::RadiativeFluxes(flux_fields)))
            .collect();

        Self {
            prognostic,
            diagnostic,
            temporary_count: hardware.base_temporary_fields() + flux_fields,
        }
    }

    pub fn prognostic_count(&self) -> u64 {
        self.prognostic.iter().map(|entry| entry.count()).sum()
    }

    pub fn diagnostic_count(&self) -> u64 {
        self.diagnostic.iter().map(|entry| entry.count()).sum()
    }

    pub fn total_count(&self) -> u64 {
        PROGNOSTIC_STORAGE_FACTOR * self.prognostic_count()
            + self.diagnostic_count()
            + self.temporary_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schemes::{
        AdvectionScheme, DiffusionScheme, MicrophysicsScheme, RadiationScheme, ThermoScheme,
    };

    fn selection(
        diffusion: DiffusionScheme,
        thermo: ThermoScheme,
        radiation: RadiationScheme,
        microphysics: MicrophysicsScheme,
    ) -> SchemeSelection {
        SchemeSelection {
            advection: AdvectionScheme::Interp2i5,
            diffusion,
            thermo,
            radiation,
            microphysics,
        }
    }

    fn labels(entries: &[FieldEntry]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn moist_tke_with_double_moment_ice_lists_every_field_in_order() {
        let schemes = selection(
            DiffusionScheme::DeardorffTke,
            ThermoScheme::Moist,
            RadiationScheme::Disabled,
            MicrophysicsScheme::DoubleMomentIce,
        );
        let inventory = FieldInventory::new(&schemes, Hardware::Gpu, 0);

        assert_eq!(
            labels(&inventory.prognostic),
            vec![
                "u", "v", "w", "tke", "thl", "qt", "qi", "qr", "qs", "qg", "qh", "ni", "nr",
                "ns", "ng", "nh"
            ]
        );
        assert_eq!(labels(&inventory.diagnostic), vec!["p", "evisc", "eviscs"]);
        assert_eq!(inventory.prognostic_count(), 16);
        assert_eq!(inventory.temporary_count, 2);
    }

    #[test]
    fn scalars_are_one_label_but_count_individually() {
        let schemes = selection(
            DiffusionScheme::Smagorinsky,
            ThermoScheme::Dry,
            RadiationScheme::Disabled,
            MicrophysicsScheme::Disabled,
        );
        let inventory = FieldInventory::new(&schemes, Hardware::Cpu, 7);

        assert_eq!(
            labels(&inventory.prognostic),
            vec!["u", "v", "w", "th", "7 × scalar"]
        );
        assert_eq!(inventory.prognostic_count(), 4 + 7);
    }

    #[test]
    fn radiation_adds_three_diagnostic_and_three_temporary_fields() {
        let schemes = selection(
            DiffusionScheme::Smagorinsky,
            ThermoScheme::Moist,
            RadiationScheme::RteRrtmgp,
            MicrophysicsScheme::DoubleMomentWarm,
        );
        let inventory = FieldInventory::new(&schemes, Hardware::Cpu, 0);

        assert_eq!(
            labels(&inventory.diagnostic),
            vec!["p", "evisc", "3 × RRTMGP fluxes"]
        );
        assert_eq!(inventory.diagnostic_count(), 5);
        assert_eq!(inventory.temporary_count, 7);
        assert_eq!(
            labels(&inventory.prognostic),
            vec!["u", "v", "w", "thl", "qt", "qr", "nr"]
        );
    }

    #[test]
    fn total_counts_prognostic_fields_twice() {
        let schemes = selection(
            DiffusionScheme::DeardorffTke,
            ThermoScheme::Buoyancy,
            RadiationScheme::Disabled,
            MicrophysicsScheme::Disabled,
        );
        let inventory = FieldInventory::new(&schemes, Hardware::Cpu, 2);

        assert_eq!(inventory.prognostic_count(), 7);
        assert_eq!(inventory.diagnostic_count(), 3);
        assert_eq!(inventory.total_count(), 2 * 7 + 3 + 4);
    }
}
