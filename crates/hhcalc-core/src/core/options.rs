//! Scheme options a simulation mode makes available.
//!
//! DNS runs resolve all scales and only offer the plain finite-difference schemes, while
//! LES runs unlock the subgrid models and the physics parameterizations. The tables are
//! meant for whoever gathers the input: the estimator itself accepts any combination
//! apart from the thermodynamics cross-check.

use super::schemes::{
    AdvectionScheme, DiffusionScheme, MicrophysicsScheme, Mode, RadiationScheme,
    SchemeOption, SchemeSelection, ThermoScheme,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTable {
    pub mode: Mode,
    pub advection: &'static [AdvectionScheme],
    pub diffusion: &'static [DiffusionScheme],
    pub thermo: &'static [ThermoScheme],
    pub radiation: &'static [RadiationScheme],
    pub microphysics: &'static [MicrophysicsScheme],
    pub defaults: SchemeSelection,
}

/// A scheme pick that the selected mode does not offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalOption {
    pub kind: &'static str,
    pub label: &'static str,
    pub mode: Mode,
    pub allowed: Vec<&'static str>,
}

impl fmt::Display for IllegalOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' is not available in {} mode (allowed: {})",
            self.kind,
            self.label,
            self.mode.description(),
            self.allowed.join(", ")
        )
    }
}

static LES_OPTIONS: OptionTable = OptionTable {
    mode: Mode::Les,
    advection: &[
        AdvectionScheme::Second,
        AdvectionScheme::Interp2i4,
        AdvectionScheme::Interp2i5,
        AdvectionScheme::Interp2i62,
    ],
    diffusion: &[DiffusionScheme::Smagorinsky, DiffusionScheme::DeardorffTke],
    thermo: &[
        ThermoScheme::Disabled,
        ThermoScheme::Buoyancy,
        ThermoScheme::Dry,
        ThermoScheme::Moist,
    ],
    radiation: &[RadiationScheme::Disabled, RadiationScheme::RteRrtmgp],
    microphysics: &[
        MicrophysicsScheme::Disabled,
        MicrophysicsScheme::SingleMomentIce,
        MicrophysicsScheme::DoubleMomentWarm,
        MicrophysicsScheme::DoubleMomentIce,
    ],
    defaults: SchemeSelection {
        advection: AdvectionScheme::Interp2i5,
        diffusion: DiffusionScheme::Smagorinsky,
        thermo: ThermoScheme::Moist,
        radiation: RadiationScheme::Disabled,
        microphysics: MicrophysicsScheme::Disabled,
    },
};

static DNS_OPTIONS: OptionTable = OptionTable {
    mode: Mode::Dns,
    advection: &[
        AdvectionScheme::Second,
        AdvectionScheme::Fourth,
        AdvectionScheme::FourthM,
    ],
    diffusion: &[DiffusionScheme::Second, DiffusionScheme::Fourth],
    thermo: &[ThermoScheme::Disabled, ThermoScheme::Buoyancy],
    radiation: &[RadiationScheme::Disabled],
    microphysics: &[MicrophysicsScheme::Disabled],
    defaults: SchemeSelection {
        advection: AdvectionScheme::Fourth,
        diffusion: DiffusionScheme::Fourth,
        thermo: ThermoScheme::Disabled,
        radiation: RadiationScheme::Disabled,
        microphysics: MicrophysicsScheme::Disabled,
    },
};

pub fn legal_options(mode: Mode) -> &'static OptionTable {
    match mode {
        Mode::Les => &LES_OPTIONS,
        Mode::Dns => &DNS_OPTIONS,
    }
}

impl OptionTable {
    /// Returns every pick in `selection` this table does not offer, in category order.
    pub fn check(&self, selection: &SchemeSelection) -> Vec<IllegalOption> {
        [
            self.reject(self.advection, selection.advection),
            self.reject(self.diffusion, selection.diffusion),
            self.reject(self.thermo, selection.thermo),
            self.reject(self.radiation, selection.radiation),
            self.reject(self.microphysics, selection.microphysics),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn reject<T: SchemeOption>(&self, allowed: &'static [T], picked: T) -> Option<IllegalOption> {
        (!allowed.contains(&picked)).then(|| IllegalOption {
            kind: T::KIND,
            label: picked.label(),
            mode: self.mode,
            allowed: allowed.iter().map(|option| option.label()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_legal_in_their_own_mode() {
        for mode in Mode::ALL {
            let table = legal_options(*mode);
            assert_eq!(table.mode, *mode);
            assert!(table.check(&table.defaults).is_empty());
        }
    }

    #[test]
    fn dns_only_offers_disabled_physics() {
        let table = legal_options(Mode::Dns);
        assert_eq!(table.radiation, &[RadiationScheme::Disabled]);
        assert_eq!(table.microphysics, &[MicrophysicsScheme::Disabled]);
        assert_eq!(
            table.thermo,
            &[ThermoScheme::Disabled, ThermoScheme::Buoyancy]
        );
    }

    #[test]
    fn les_defaults_match_the_reference_setup() {
        let defaults = legal_options(Mode::Les).defaults;
        assert_eq!(defaults.advection, AdvectionScheme::Interp2i5);
        assert_eq!(defaults.diffusion, DiffusionScheme::Smagorinsky);
        assert_eq!(defaults.thermo, ThermoScheme::Moist);
    }

    #[test]
    fn check_lists_every_illegal_pick_in_category_order() {
        let selection = SchemeSelection {
            advection: AdvectionScheme::Interp2i5,
            diffusion: DiffusionScheme::Smagorinsky,
            thermo: ThermoScheme::Buoyancy,
            radiation: RadiationScheme::Disabled,
            microphysics: MicrophysicsScheme::DoubleMomentWarm,
        };

        let illegal = legal_options(Mode::Dns).check(&selection);
        let labels: Vec<_> = illegal.iter().map(|i| (i.kind, i.label)).collect();
        assert_eq!(
            labels,
            vec![
                ("advection scheme", "2i5"),
                ("diffusion scheme", "smagorinsky"),
                ("microphysics scheme", "double-moment-warm"),
            ]
        );
        assert_eq!(
            illegal[0].to_string(),
            "advection scheme '2i5' is not available in DNS mode (allowed: 2, 4, 4m)"
        );
    }

    #[test]
    fn les_rejects_dns_only_schemes() {
        let mut selection = legal_options(Mode::Les).defaults;
        selection.advection = AdvectionScheme::Fourth;
        selection.diffusion = DiffusionScheme::Second;

        let illegal = legal_options(Mode::Les).check(&selection);
        assert_eq!(illegal.len(), 2);
    }
}
