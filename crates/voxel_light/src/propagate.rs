//! Visibility propagation over a single cone.
//!
//! # Algorithm
//!
//! A cone is swept shell by shell along its dominant axis. Every cell's
//! visibility is a barycentric blend of three cells of the previous shell:
//!
//! ```text
//!   shell d1-1                      shell d1
//!
//!   p1 = (d2,   d3  )  ── w1 ──┐
//!   p2 = (d2-1, d3  )  ── w2 ──┼──▶ (d2, d3)
//!   p3 = (d2-1, d3-1)  ── w3 ──┘
//!
//!   w1 = d1 - d2 + of1     w2 = d2 - d3 + of2     w3 = d3 + of3
//!
//!   visibility = clamp((w1·p1 + w2·p2 + w3·p3) / (d1 + o1), 0, 1)
//! ```
//!
//! With a zero offset `w1 + w2 + w3 == d1`, so open space keeps visibility at
//! exactly 1. Opaque cells store [`BLOCKED`] and cast their shadow forward
//! through the weights. A predecessor whose weight equals its offset shift
//! lies outside the cone and contributes nothing.
//!
//! When a whole shell is dark, every later shell is dark too and the sweep
//! stops.

use glam::{DVec3, IVec3};

use crate::cone::Cone;
use crate::config::TraceConfig;
use crate::constants::{BLOCKED, SOURCE_VISIBILITY};
use crate::error::TraceError;
use crate::stats::TraceStats;
use crate::types::{LightSink, OpacitySource, Offset};

/// Rolling triangular visibility buffer for one cone.
///
/// Row `d2`, column `d3`, with `d3 <= d2 <= range`. Holds the previous shell
/// until each slot is overwritten by the current one.
pub(crate) struct VisibilityBuffer {
  width: usize,
  cells: Vec<f32>,
}

impl VisibilityBuffer {
  /// Buffer for `range` shells, seeded with the source cell.
  pub(crate) fn new(range: usize) -> Self {
    let width = range + 1;
    let mut cells = vec![0.0; width * width];
    cells[0] = SOURCE_VISIBILITY;
    Self { width, cells }
  }

  #[inline(always)]
  pub(crate) fn get(&self, d2: i32, d3: i32) -> f32 {
    self.cells[d2 as usize * self.width + d3 as usize]
  }

  #[inline(always)]
  pub(crate) fn set(&mut self, d2: i32, d3: i32, visibility: f32) {
    self.cells[d2 as usize * self.width + d3 as usize] = visibility;
  }
}

/// Compute visibility over one cone and report lit voxels to `sink`.
///
/// # Parameters
/// - `origin`: world position the cone starts from
/// - `offset`: re-basing from `origin` to the light source, in cone axes
///   ([`Offset::ZERO`] when tracing from the source itself)
/// - `config`: number of shells to sweep and its bound
/// - `cone`: axes and boundary ownership
/// - `opacity`: queried once per visited cell
/// - `sink`: receives `(position, visibility, distance)` for each lit voxel
///   the cone owns
///
/// # Errors
/// Rejects an invalid range, or an offset too large to sweep `range` shells
/// from, before any collaborator is called.
pub fn trace_cone<O, S>(
  origin: IVec3,
  offset: Offset,
  config: &TraceConfig,
  cone: &Cone,
  opacity: &O,
  sink: &mut S,
) -> Result<TraceStats, TraceError>
where
  O: OpacitySource + ?Sized,
  S: LightSink + ?Sized,
{
  let range = config.validate()?;
  if !offset.fits_range(range) {
    return Err(TraceError::OffsetOutOfBounds { offset, range });
  }
  Ok(propagate_cone(origin, offset, range, cone, opacity, sink))
}

/// Kernel behind [`trace_cone`].
///
/// `range` comes from [`TraceConfig::validate`] and satisfies
/// [`Offset::fits_range`], so no step below can overflow.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "propagate::propagate_cone"))]
pub(crate) fn propagate_cone<O, S>(
  origin: IVec3,
  offset: Offset,
  range: u32,
  cone: &Cone,
  opacity: &O,
  sink: &mut S,
) -> TraceStats
where
  O: OpacitySource + ?Sized,
  S: LightSink + ?Sized,
{
  let mut stats = TraceStats {
    cones_traced: 1,
    ..Default::default()
  };
  if range == 0 {
    return stats;
  }

  let range = range as i32;
  let mut buffer = VisibilityBuffer::new(range as usize);
  let (of1, of2, of3) = offset.deltas();
  let o1 = offset.o1();
  let source = DVec3::new(o1 as f64, offset.o2() as f64, offset.o3() as f64);

  for d1 in 1..=range {
    let norm = (d1 + o1) as f32;
    let mut lit = false;

    // Descending d2/d3: each slot is read as the previous shell's value
    // before it is overwritten with the current one.
    for d2 in (0..=d1).rev() {
      for d3 in (0..=d2).rev() {
        let position = cone.voxel(origin, d1, d2, d3);
        stats.cells_visited += 1;

        if opacity.is_opaque(position) {
          buffer.set(d2, d3, BLOCKED);
          stats.cells_blocked += 1;
          continue;
        }

        let w1 = d1 - d2 + of1;
        let w2 = d2 - d3 + of2;
        let w3 = d3 + of3;

        // Boundary predecessors are skipped, which also keeps d2-1 and d3-1
        // in bounds.
        let p1 = if w1 == of1 { 0.0 } else { buffer.get(d2, d3) * w1 as f32 };
        let p2 = if w2 == of2 { 0.0 } else { buffer.get(d2 - 1, d3) * w2 as f32 };
        let p3 = if w3 == of3 { 0.0 } else { buffer.get(d2 - 1, d3 - 1) * w3 as f32 };

        let visibility = ((p1 + p2 + p3) / norm).clamp(0.0, SOURCE_VISIBILITY);
        buffer.set(d2, d3, visibility);

        if visibility <= 0.0 {
          continue;
        }
        lit = true;

        if cone.defers(w1, w2, d2, d3) {
          stats.samples_deferred += 1;
          continue;
        }

        let distance = (source + DVec3::new(d1 as f64, d2 as f64, d3 as f64)).length();
        sink.receive(position, visibility, distance);
        stats.samples_emitted += 1;
      }
    }

    stats.shells_traced += 1;
    if !lit {
      if d1 < range {
        stats.cones_terminated_early += 1;
      }
      break;
    }
  }

  stats
}

#[cfg(test)]
#[path = "propagate_test.rs"]
mod propagate_test;
