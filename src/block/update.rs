//! Conservative state update from net updates, followed by depth clipping.

use crate::config::BlockConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, Severity};
use crate::grid::{BlockState, NetUpdates};
use crate::types::CellSize;

/// What the clipping pass did during one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Cells whose depth went negative and were reset to dry
    pub negative_clipped: usize,
    /// Thin-water cells whose momentum was zeroed
    pub momentum_zeroed: usize,
}

impl UpdateSummary {
    #[inline]
    pub fn total(&self) -> usize {
        self.negative_clipped + self.momentum_zeroed
    }
}

/// Advance every interior cell by `dt` and clip the result.
///
/// Cell `(i, j)` receives the right-going update of its left edge, the
/// left-going update of its right edge, and likewise for its bottom and top
/// edges:
///
/// ```text
/// h  -= dt/dx (hR[i-1, j-1] + hL[i, j-1]) + dt/dy (hA[i-1, j-1] + hB[i-1, j])
/// hu -= dt/dx (huR[i-1, j-1] + huL[i, j-1])
/// hv -= dt/dy (hvA[i-1, j-1] + hvB[i-1, j])
/// ```
///
/// Afterwards `h < 0` makes the cell dry (`h = hu = hv = 0`) and
/// `h < dry_tolerance` zeroes its momentum. Events go to `sink` only; they
/// never change the numbers.
pub(crate) fn update_cells(
    state: &mut BlockState,
    nu: &NetUpdates,
    cell_size: CellSize,
    dt: f64,
    config: &BlockConfig,
    sink: &dyn DiagnosticSink,
) -> UpdateSummary {
    let res = state.resolution();
    let (nx, ny) = (res.nx(), res.ny());
    let rx = dt / cell_size.dx();
    let ry = dt / cell_size.dy();

    let report_negative = config.verbosity.allows(Severity::Warning);

    let (h, hu, hv, b) = state.unknowns_mut();
    let mut summary = UpdateSummary::default();

    for i in 1..=nx {
        for j in 1..=ny {
            h[(i, j)] -= rx * (nu.h_right[(i - 1, j - 1)] + nu.h_left[(i, j - 1)])
                + ry * (nu.h_above[(i - 1, j - 1)] + nu.h_below[(i - 1, j)]);
            hu[(i, j)] -= rx * (nu.hu_right[(i - 1, j - 1)] + nu.hu_left[(i, j - 1)]);
            hv[(i, j)] -= ry * (nu.hv_above[(i - 1, j - 1)] + nu.hv_below[(i - 1, j)]);

            let depth = h[(i, j)];
            if depth < 0.0 {
                if report_negative && depth < -config.negative_depth_report {
                    sink.emit(&Diagnostic::NegativeDepth {
                        i,
                        j,
                        h: depth,
                        b: b[(i, j)],
                    });
                }
                h[(i, j)] = 0.0;
                hu[(i, j)] = 0.0;
                hv[(i, j)] = 0.0;
                summary.negative_clipped += 1;
            } else if depth < config.dry_tolerance {
                hu[(i, j)] = 0.0;
                hv[(i, j)] = 0.0;
                summary.momentum_zeroed += 1;
            }
        }
    }

    let clipped = Diagnostic::CellsClipped {
        negative: summary.negative_clipped,
        thin: summary.momentum_zeroed,
    };
    if summary.total() > 0 && config.verbosity.allows(clipped.severity()) {
        sink.emit(&clipped);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, Verbosity};
    use crate::types::Resolution2D;

    fn block(nx: usize, ny: usize, h: f64) -> (BlockState, NetUpdates) {
        let res = Resolution2D::new(nx, ny).unwrap();
        let mut s = BlockState::new(res);
        s.set_unknowns(|_, _| (h, 0.0, 0.0));
        (s, NetUpdates::new(res))
    }

    #[test]
    fn test_zero_updates_leave_state_unchanged() {
        let (mut s, nu) = block(3, 2, 1.0);
        let before = s.clone();
        let sink = CollectingSink::new();
        let summary = update_cells(
            &mut s,
            &nu,
            CellSize::uniform(1.0).unwrap(),
            10.0,
            &BlockConfig::default(),
            &sink,
        );
        assert_eq!(s, before);
        assert_eq!(summary, UpdateSummary::default());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_edge_to_cell_mapping() {
        let (mut s, mut nu) = block(2, 2, 1.0);
        // Left edge of cell (2, 1), right edge of cell (1, 1)
        nu.h_right[(1, 0)] = 0.1;
        nu.h_left[(1, 0)] = -0.1;
        // Top edge of cell (1, 1), bottom edge of cell (1, 2)
        nu.h_below[(0, 1)] = 0.2;
        nu.h_above[(0, 1)] = -0.2;
        nu.hu_right[(1, 0)] = 0.5;
        nu.hv_below[(0, 1)] = 0.25;

        let cells = CellSize::new(1.0, 2.0).unwrap();
        update_cells(&mut s, &nu, cells, 1.0, &BlockConfig::default(), &CollectingSink::new());

        assert!((s.h()[(1, 1)] - (1.0 + 0.1 - 0.1)).abs() < 1e-12);
        assert!((s.h()[(2, 1)] - (1.0 - 0.1)).abs() < 1e-12);
        assert!((s.h()[(1, 2)] - (1.0 + 0.1)).abs() < 1e-12);
        assert!((s.h()[(2, 2)] - 1.0).abs() < 1e-12);
        assert!((s.hu()[(2, 1)] + 0.5).abs() < 1e-12);
        assert!((s.hv()[(1, 1)] + 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_negative_depth_is_dried_and_reported() {
        let (mut s, mut nu) = block(1, 1, 0.5);
        s.hu_mut()[(1, 1)] = 1.0;
        nu.h_left[(1, 0)] = 1.0;

        let sink = CollectingSink::new();
        let config = BlockConfig::default().with_verbosity(Verbosity::Debug);
        let summary = update_cells(&mut s, &nu, CellSize::uniform(1.0).unwrap(), 1.0, &config, &sink);

        assert_eq!(s.h()[(1, 1)], 0.0);
        assert_eq!(s.hu()[(1, 1)], 0.0);
        assert_eq!(summary.negative_clipped, 1);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        match events[0] {
            Diagnostic::NegativeDepth { i, j, h, .. } => {
                assert_eq!((i, j), (1, 1));
                assert!((h + 0.5).abs() < 1e-12);
            }
            ref other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_small_negative_depth_is_silent() {
        let (mut s, mut nu) = block(1, 1, 0.5);
        nu.h_left[(1, 0)] = 0.55;
        let sink = CollectingSink::new();
        let summary = update_cells(
            &mut s,
            &nu,
            CellSize::uniform(1.0).unwrap(),
            1.0,
            &BlockConfig::default(),
            &sink,
        );
        assert_eq!(summary.negative_clipped, 1);
        assert_eq!(s.h()[(1, 1)], 0.0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_verbosity_does_not_change_results() {
        let (mut a, mut nu) = block(2, 1, 0.2);
        a.hu_mut()[(1, 1)] = 0.3;
        nu.h_left[(1, 0)] = 0.15;
        nu.h_right[(1, 0)] = -0.9;
        let mut b = a.clone();

        let cells = CellSize::uniform(1.0).unwrap();
        let quiet = BlockConfig::default().with_verbosity(Verbosity::Quiet);
        let loud = BlockConfig::default().with_verbosity(Verbosity::Debug);
        let sa = update_cells(&mut a, &nu, cells, 1.0, &quiet, &CollectingSink::new());
        let sb = update_cells(&mut b, &nu, cells, 1.0, &loud, &CollectingSink::new());
        assert_eq!(a, b);
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_thin_cells_lose_momentum() {
        let (mut s, nu) = block(2, 2, 1.0);
        s.h_mut()[(2, 2)] = 0.05;
        s.hu_mut()[(2, 2)] = 0.3;
        s.hv_mut()[(2, 2)] = -0.1;
        s.hu_mut()[(1, 1)] = 0.3;

        let summary = update_cells(
            &mut s,
            &nu,
            CellSize::uniform(1.0).unwrap(),
            0.5,
            &BlockConfig::default(),
            &CollectingSink::new(),
        );
        assert_eq!(s.h()[(2, 2)], 0.05);
        assert_eq!(s.hu()[(2, 2)], 0.0);
        assert_eq!(s.hv()[(2, 2)], 0.0);
        assert_eq!(s.hu()[(1, 1)], 0.3);
        assert_eq!(summary.momentum_zeroed, 1);
    }
}
