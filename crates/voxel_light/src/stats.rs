//! Counters reported by cone traces.

use std::iter::Sum;
use std::ops::AddAssign;

/// Statistics from one or more cone traces.
///
/// A single [`trace_cone`](crate::propagate::trace_cone) call reports
/// `cones_traced == 1`; sweeps sum the per-cone values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
  /// Number of cones traced.
  pub cones_traced: u32,
  /// Cones that stopped before reaching their range because a whole shell
  /// was dark.
  pub cones_terminated_early: u32,
  /// Shells swept, summed over cones.
  pub shells_traced: u64,
  /// Cells whose opacity was queried.
  pub cells_visited: u64,
  /// Cells found opaque.
  pub cells_blocked: u64,
  /// Consumer invocations.
  pub samples_emitted: u64,
  /// Lit cells skipped because a neighbouring cone owns the boundary.
  pub samples_deferred: u64,
}

impl TraceStats {
  /// Lit cells, whether emitted or deferred.
  pub fn cells_lit(&self) -> u64 {
    self.samples_emitted + self.samples_deferred
  }
}

impl AddAssign for TraceStats {
  fn add_assign(&mut self, rhs: Self) {
    self.cones_traced += rhs.cones_traced;
    self.cones_terminated_early += rhs.cones_terminated_early;
    self.shells_traced += rhs.shells_traced;
    self.cells_visited += rhs.cells_visited;
    self.cells_blocked += rhs.cells_blocked;
    self.samples_emitted += rhs.samples_emitted;
    self.samples_deferred += rhs.samples_deferred;
  }
}

impl Sum for TraceStats {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::default(), |mut acc, stats| {
      acc += stats;
      acc
    })
  }
}
