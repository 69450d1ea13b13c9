//! Test utilities for tracer tests.
//!
//! Provides opacity fixtures, sample inspection and a reference kernel that
//! keeps every shell instead of reusing one buffer.

use std::collections::HashMap;

use glam::{DVec3, IVec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cone::Cone;
use crate::constants::{BLOCKED, OPAQUE, SOURCE_VISIBILITY};
use crate::grid::OpacityGrid;
use crate::types::{LightSample, OpacitySource, Offset};

// =============================================================================
// Opacity fixtures
// =============================================================================

/// Opacity query that lets light through everywhere.
pub fn open_space(_: IVec3) -> f32 {
  1.0
}

/// Open space with a single opaque voxel.
pub fn single_block(block: IVec3) -> impl Fn(IVec3) -> f32 + Sync {
  move |pos: IVec3| -> f32 {
    if pos == block {
      OPAQUE
    } else {
      1.0
    }
  }
}

/// Grid around `center` with each voxel opaque with probability `density`.
/// The center itself is always left open.
pub fn random_grid(center: IVec3, range: u32, density: f64, seed: u64) -> OpacityGrid {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut grid = OpacityGrid::around(center, range, 1.0);
  let radius = range as i32;
  for x in -radius..=radius {
    for y in -radius..=radius {
      for z in -radius..=radius {
        let pos = center + IVec3::new(x, y, z);
        if pos != center && rng.random_bool(density) {
          grid.set(pos, OPAQUE);
        }
      }
    }
  }
  grid
}

// =============================================================================
// Sample inspection
// =============================================================================

/// Number of invocations per voxel.
pub fn hit_counts(samples: &[LightSample]) -> HashMap<IVec3, usize> {
  let mut counts = HashMap::new();
  for sample in samples {
    *counts.entry(sample.position).or_default() += 1;
  }
  counts
}

/// Order-independent, bit-exact view of a sample list.
pub fn sorted_bits(samples: &[LightSample]) -> Vec<([i32; 3], u32, u64)> {
  let mut bits: Vec<_> = samples
    .iter()
    .map(|s| (s.position.to_array(), s.visibility.to_bits(), s.distance.to_bits()))
    .collect();
  bits.sort_unstable();
  bits
}

// =============================================================================
// Reference kernel
// =============================================================================

/// Same propagation as `propagate_cone`, but stores every shell in its own slice
/// so no slot is ever reused.
pub fn reference_trace<O: OpacitySource>(
  origin: IVec3,
  offset: Offset,
  range: u32,
  cone: &Cone,
  opacity: &O,
) -> Vec<LightSample> {
  let mut samples = Vec::new();
  let range = range as usize;
  if range == 0 {
    return samples;
  }

  let width = range + 1;
  let mut shells = vec![vec![vec![0.0f32; width]; width]; width];
  shells[0][0][0] = SOURCE_VISIBILITY;
  let (of1, of2, of3) = offset.deltas();

  for d1 in 1..=range {
    let mut lit = false;
    for d2 in (0..=d1).rev() {
      for d3 in (0..=d2).rev() {
        let (i1, i2, i3) = (d1 as i32, d2 as i32, d3 as i32);
        let position = cone.voxel(origin, i1, i2, i3);
        if opacity.opacity(position) == OPAQUE {
          shells[d1][d2][d3] = BLOCKED;
          continue;
        }
        let prev = &shells[d1 - 1];
        let w1 = i1 - i2 + of1;
        let w2 = i2 - i3 + of2;
        let w3 = i3 + of3;
        let p1 = if w1 == of1 { 0.0 } else { prev[d2][d3] * w1 as f32 };
        let p2 = if w2 == of2 { 0.0 } else { prev[d2 - 1][d3] * w2 as f32 };
        let p3 = if w3 == of3 { 0.0 } else { prev[d2 - 1][d3 - 1] * w3 as f32 };
        let visibility = ((p1 + p2 + p3) / (i1 + offset.o1()) as f32).clamp(0.0, SOURCE_VISIBILITY);
        shells[d1][d2][d3] = visibility;

        if visibility <= 0.0 {
          continue;
        }
        lit = true;
        if cone.defers(w1, w2, i2, i3) {
          continue;
        }
        let distance = DVec3::new(
          (i1 + offset.o1()) as f64,
          (i2 + offset.o2()) as f64,
          (i3 + offset.o3()) as f64,
        )
        .length();
        samples.push(LightSample::new(position, visibility, distance));
      }
    }
    if !lit {
      break;
    }
  }

  samples
}
