//! Ghost-layer boundary fill.
//!
//! A reflective wall mirrors the adjacent interior cell and reverses the
//! normal momentum, giving zero normal mass flux through the block edge.
//! Outflow copies the interior cell unchanged (zero-gradient extrapolation).
//! Corner ghost cells are never read by the flux sweeps and are left as is.

use super::BlockState;

/// Ghost-cell treatment for one side of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryType {
    /// Reflective solid wall
    #[default]
    Wall,
    /// Zero-gradient outflow
    Outflow,
}

/// Boundary treatment for all four sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryConditions {
    /// x = 0 side (ghost column i = 0)
    pub left: BoundaryType,
    /// x = nx side (ghost column i = nx + 1)
    pub right: BoundaryType,
    /// y = 0 side (ghost row j = 0)
    pub bottom: BoundaryType,
    /// y = ny side (ghost row j = ny + 1)
    pub top: BoundaryType,
}

impl BoundaryConditions {
    /// Same treatment on every side.
    pub fn uniform(kind: BoundaryType) -> Self {
        Self {
            left: kind,
            right: kind,
            bottom: kind,
            top: kind,
        }
    }

    /// Closed basin.
    pub fn walls() -> Self {
        Self::uniform(BoundaryType::Wall)
    }

    /// Open domain.
    pub fn outflow() -> Self {
        Self::uniform(BoundaryType::Outflow)
    }
}

impl BlockState {
    /// Fill the ghost layer from the adjacent interior cells.
    pub fn apply_boundaries(&mut self, bc: &BoundaryConditions) {
        let (nx, ny) = self.resolution().as_tuple();

        for j in 1..=ny {
            self.copy_ghost((0, j), (1, j), bc.left, Normal::X);
            self.copy_ghost((nx + 1, j), (nx, j), bc.right, Normal::X);
        }
        for i in 1..=nx {
            self.copy_ghost((i, 0), (i, 1), bc.bottom, Normal::Y);
            self.copy_ghost((i, ny + 1), (i, ny), bc.top, Normal::Y);
        }
    }

    fn copy_ghost(
        &mut self,
        ghost: (usize, usize),
        interior: (usize, usize),
        kind: BoundaryType,
        normal: Normal,
    ) {
        let sign_u = match (kind, normal) {
            (BoundaryType::Wall, Normal::X) => -1.0,
            _ => 1.0,
        };
        let sign_v = match (kind, normal) {
            (BoundaryType::Wall, Normal::Y) => -1.0,
            _ => 1.0,
        };

        let h = self.h()[interior];
        let hu = self.hu()[interior];
        let hv = self.hv()[interior];
        let b = self.b()[interior];

        self.h_mut()[ghost] = h;
        self.hu_mut()[ghost] = sign_u * hu;
        self.hv_mut()[ghost] = sign_v * hv;
        self.b_mut()[ghost] = b;
    }
}

#[derive(Clone, Copy)]
enum Normal {
    X,
    Y,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Resolution2D;

    fn moving_state() -> BlockState {
        let mut s = BlockState::new(Resolution2D::new(3, 2).unwrap());
        s.set_unknowns(|i, j| (1.0 + i as f64, 0.5, -0.25 * j as f64));
        s.set_bathymetry(|i, _| -(i as f64));
        s
    }

    #[test]
    fn test_wall_reverses_normal_momentum() {
        let mut s = moving_state();
        s.apply_boundaries(&BoundaryConditions::walls());

        // Left/right: hu flips, hv kept
        assert_eq!(s.h()[(0, 1)], s.h()[(1, 1)]);
        assert_eq!(s.hu()[(0, 1)], -s.hu()[(1, 1)]);
        assert_eq!(s.hv()[(0, 1)], s.hv()[(1, 1)]);
        assert_eq!(s.hu()[(4, 2)], -s.hu()[(3, 2)]);

        // Bottom/top: hv flips, hu kept
        assert_eq!(s.hv()[(2, 0)], -s.hv()[(2, 1)]);
        assert_eq!(s.hu()[(2, 0)], s.hu()[(2, 1)]);
        assert_eq!(s.hv()[(2, 3)], -s.hv()[(2, 2)]);
    }

    #[test]
    fn test_outflow_copies_interior() {
        let mut s = moving_state();
        s.apply_boundaries(&BoundaryConditions::outflow());
        assert_eq!(s.hu()[(0, 2)], s.hu()[(1, 2)]);
        assert_eq!(s.hv()[(1, 3)], s.hv()[(1, 2)]);
        assert_eq!(s.b()[(4, 1)], s.b()[(3, 1)]);
    }

    #[test]
    fn test_mixed_sides() {
        let mut s = moving_state();
        let bc = BoundaryConditions {
            left: BoundaryType::Wall,
            right: BoundaryType::Outflow,
            ..Default::default()
        };
        s.apply_boundaries(&bc);
        assert_eq!(s.hu()[(0, 1)], -0.5);
        assert_eq!(s.hu()[(4, 1)], 0.5);
    }
}
