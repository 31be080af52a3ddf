use crate::core::grid::{Decomposition, GridExtents};
use serde::Serialize;
use std::fmt;
use tracing::debug;

const VIOLATION_SEPARATOR: &str = " + ";

/// A divisibility requirement the transposes of the pressure solver place on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DecompositionRule {
    ItotByNpx,
    ItotByNpy,
    /// Only enforced for a true 2D decomposition (`npy > 1`).
    JtotByNpx,
    JtotByNpy,
    KtotByNpx,
}

impl DecompositionRule {
    /// All rules in the order they are reported.
    pub const ALL: [DecompositionRule; 5] = [
        DecompositionRule::ItotByNpx,
        DecompositionRule::ItotByNpy,
        DecompositionRule::JtotByNpx,
        DecompositionRule::JtotByNpy,
        DecompositionRule::KtotByNpx,
    ];

    pub fn description(self) -> &'static str {
        match self {
            DecompositionRule::ItotByNpx => "itot % npx != 0",
            DecompositionRule::ItotByNpy => "itot % npy != 0",
            DecompositionRule::JtotByNpx => "jtot % npx != 0",
            DecompositionRule::JtotByNpy => "jtot % npy != 0",
            DecompositionRule::KtotByNpx => "ktot % npx != 0",
        }
    }

    pub fn is_satisfied(self, grid: &GridExtents, decomposition: &Decomposition) -> bool {
        // A zero divisor counts as a violation instead of a panic.
        let divides = |n: u64, d: u64| n.checked_rem(d) == Some(0);
        let Decomposition { npx, npy } = *decomposition;

        match self {
            DecompositionRule::ItotByNpx => divides(grid.itot, npx),
            DecompositionRule::ItotByNpy => divides(grid.itot, npy),
            DecompositionRule::JtotByNpx => npy <= 1 || divides(grid.jtot, npx),
            DecompositionRule::JtotByNpy => divides(grid.jtot, npy),
            DecompositionRule::KtotByNpx => divides(grid.ktot, npx),
        }
    }
}

impl fmt::Display for DecompositionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a decomposition check. Valid when no rule is violated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    violations: Vec<DecompositionRule>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[DecompositionRule] {
        &self.violations
    }

    /// All violated rules joined for display, empty when valid.
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(|rule| rule.description())
            .collect::<Vec<_>>()
            .join(VIOLATION_SEPARATOR)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

pub fn validate(itot: u64, jtot: u64, ktot: u64, npx: u64, npy: u64) -> ValidationResult {
    validate_grid(
        &GridExtents::new(itot, jtot, ktot),
        &Decomposition::new(npx, npy),
    )
}

/// Checks every rule and collects all violations rather than stopping at the first.
pub fn validate_grid(grid: &GridExtents, decomposition: &Decomposition) -> ValidationResult {
    let violations: Vec<_> = DecompositionRule::ALL
        .into_iter()
        .filter(|rule| !rule.is_satisfied(grid, decomposition))
        .collect();

    debug!(
        ?grid,
        ?decomposition,
        violations = violations.len(),
        "Checked grid decomposition"
    );

    ValidationResult { violations }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_violations(itot: u64, jtot: u64, ktot: u64, npx: u64, npy: u64) -> Vec<bool> {
        vec![
            itot % npx != 0,
            itot % npy != 0,
            npy > 1 && jtot % npx != 0,
            jtot % npy != 0,
            ktot % npx != 0,
        ]
    }

    #[test]
    fn validity_matches_independent_recomputation_over_small_grids() {
        for itot in 1..=12 {
            for jtot in 1..=12 {
                for ktot in [1, 2, 3, 5, 6, 8] {
                    for npx in 1..=4 {
                        for npy in 1..=4 {
                            let result = validate(itot, jtot, ktot, npx, npy);
                            let expected = expected_violations(itot, jtot, ktot, npx, npy);
                            let expected_rules: Vec<_> = DecompositionRule::ALL
                                .into_iter()
                                .zip(&expected)
                                .filter(|(_, violated)| **violated)
                                .map(|(rule, _)| rule)
                                .collect();

                            assert_eq!(result.violations(), expected_rules.as_slice());
                            assert_eq!(result.is_valid(), !expected.contains(&true));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn single_rank_is_always_valid() {
        let result = validate(1023, 517, 3, 1, 1);
        assert!(result.is_valid());
        assert_eq!(result.message(), "");
    }

    #[test]
    fn itot_not_divisible_by_npx_is_reported() {
        let result = validate(100, 100, 50, 3, 1);

        assert!(!result.is_valid());
        assert!(
            result
                .violations()
                .contains(&DecompositionRule::ItotByNpx)
        );
        assert!(result.message().contains("itot % npx != 0"));
    }

    #[test]
    fn jtot_by_npx_is_skipped_for_a_one_dimensional_split() {
        let result = validate(8, 9, 8, 2, 1);
        assert!(result.is_valid());

        let result = validate(8, 9, 8, 2, 3);
        assert!(
            result
                .violations()
                .contains(&DecompositionRule::JtotByNpx)
        );
    }

    #[test]
    fn all_violations_are_joined_in_rule_order() {
        let result = validate(7, 7, 7, 2, 2);
        assert_eq!(
            result.message(),
            "itot % npx != 0 + itot % npy != 0 + jtot % npx != 0 + jtot % npy != 0 + ktot % npx != 0"
        );
        assert_eq!(result.to_string(), result.message());
    }

    #[test]
    fn zero_divisor_is_a_violation_not_a_panic() {
        let result = validate(8, 8, 8, 0, 1);
        assert_eq!(
            result.violations(),
            &[DecompositionRule::ItotByNpx, DecompositionRule::KtotByNpx]
        );
    }
}
