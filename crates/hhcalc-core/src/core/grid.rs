use serde::{Deserialize, Serialize};

/// Horizontal slabs stored next to every 3D field for the bottom and top boundary values.
pub const BOUNDARY_SLABS: u64 = 6;

/// Global domain size in grid points, without ghost cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridExtents {
    pub itot: u64,
    pub jtot: u64,
    pub ktot: u64,
}

impl GridExtents {
    pub fn new(itot: u64, jtot: u64, ktot: u64) -> Self {
        Self { itot, jtot, ktot }
    }
}

/// Process (or device) grid the horizontal plane is split across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decomposition {
    pub npx: u64,
    pub npy: u64,
}

impl Decomposition {
    pub fn new(npx: u64, npy: u64) -> Self {
        Self { npx, npy }
    }

    pub fn ranks(&self) -> u64 {
        self.npx * self.npy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HaloWidths {
    pub ij_gc: u64,
    pub k_gc: u64,
}

/// Cell counts of one 3D field once the ghost cells are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCounts {
    pub icells: u64,
    pub jcells: u64,
    pub kcells: u64,
}

impl CellCounts {
    /// `None` when an extent plus its ghost cells does not fit in a `u64`.
    pub fn with_halo(grid: &GridExtents, halo: HaloWidths) -> Option<Self> {
        let padded = |n: u64, gc: u64| gc.checked_mul(2).and_then(|both| n.checked_add(both));
        Some(Self {
            icells: padded(grid.itot, halo.ij_gc)?,
            jcells: padded(grid.jtot, halo.ij_gc)?,
            kcells: padded(grid.ktot, halo.k_gc)?,
        })
    }

    pub fn ijcells(&self) -> Option<u64> {
        self.icells.checked_mul(self.jcells)
    }

    /// Cells allocated per field, including the boundary slabs.
    /// `None` on `u64` overflow.
    pub fn ncells(&self) -> Option<u64> {
        let ijcells = self.ijcells()?;
        self.kcells
            .checked_add(BOUNDARY_SLABS)?
            .checked_mul(ijcells)
    }
}

/// Grid points handled by a single rank. Not rounded: the decomposition may be invalid.
pub fn grid_points_per_rank(grid: &GridExtents, decomposition: &Decomposition) -> f64 {
    let points = grid.itot as f64 * grid.jtot as f64 * grid.ktot as f64;
    points / decomposition.npx as f64 / decomposition.npy as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halo_is_added_on_both_sides_of_each_axis() {
        let grid = GridExtents::new(64, 32, 16);
        let cells = CellCounts::with_halo(&grid, HaloWidths { ij_gc: 3, k_gc: 1 }).unwrap();

        assert_eq!(cells.icells, 70);
        assert_eq!(cells.jcells, 38);
        assert_eq!(cells.kcells, 18);
        assert_eq!(cells.ijcells(), Some(70 * 38));
    }

    #[test]
    fn ncells_includes_six_boundary_slabs() {
        let cells = CellCounts {
            icells: 10,
            jcells: 10,
            kcells: 10,
        };
        assert_eq!(cells.ncells(), Some(1000 + 600));
    }

    #[test]
    fn grid_points_per_rank_uses_real_division() {
        let grid = GridExtents::new(100, 100, 50);
        let decomposition = Decomposition::new(3, 1);

        let points = grid_points_per_rank(&grid, &decomposition);
        assert!((points - 500_000.0 / 3.0).abs() < 1e-6);
        assert_eq!(decomposition.ranks(), 3);
    }

    #[test]
    fn oversized_grid_reports_overflow_instead_of_wrapping() {
        let huge = GridExtents::new(1 << 22, 1 << 22, 1 << 22);
        let cells = CellCounts::with_halo(&huge, HaloWidths { ij_gc: 3, k_gc: 1 }).unwrap();
        assert!(cells.ijcells().is_some());
        assert_eq!(cells.ncells(), None);

        let at_limit = GridExtents::new(u64::MAX - 1, 8, 8);
        assert!(CellCounts::with_halo(&at_limit, HaloWidths { ij_gc: 1, k_gc: 1 }).is_none());
    }

    #[test]
    fn grid_points_per_rank_stays_finite_for_huge_grids() {
        let huge = GridExtents::new(1 << 22, 1 << 22, 1 << 22);
        let points = grid_points_per_rank(&huge, &Decomposition::new(1, 1));
        assert_eq!(points, 2f64.powi(66));
    }
}
