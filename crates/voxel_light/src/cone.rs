//! Precomputed cone table for point-light sweeps.
//!
//! The directions around a voxel are split into 48 cones. Each cone is a
//! signed permutation of the unit axes:
//!
//! ```text
//! 6 unsigned shapes (which axis dominates, which comes second):
//!
//!   XYZ  XZY  YXZ  YZX  ZXY  ZYX
//!
//! × 8 sign assignments (±axis1, ±axis2, ±axis3)
//!
//! = 48 signed cones
//! ```
//!
//! # Boundary Ownership
//!
//! Neighbouring cones share faces and edges. Without deduplication a voxel on
//! a shared boundary would be lit twice, so every boundary is owned by exactly
//! one cone and the others skip it:
//!
//! ```text
//! Flag    Boundary              Skipped by the cone when set
//! ─────   ───────────────────   ────────────────────────────
//! edge1   d1 == d2 (diagonal)   inherited from the shape
//! edge2   d2 == d3 (diagonal)   inherited from the shape
//! qedge2  d2 == 0  (quadrant)   axis2 points along +axis
//! qedge3  d3 == 0  (quadrant)   axis3 points along +axis
//! ```
//!
//! Honoring these flags, the 48 cones tile every voxel around a source exactly
//! once.

use glam::IVec3;

use crate::constants::{CONE_COUNT, UCONE_COUNT};

/// Unsigned cone template: an axis-dominance permutation and the diagonal
/// edges it gives away to neighbouring shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UCone {
  pub axis1: IVec3,
  pub axis2: IVec3,
  pub axis3: IVec3,
  /// Skip the `d1 == d2` diagonal.
  pub edge1: bool,
  /// Skip the `d2 == d3` diagonal.
  pub edge2: bool,
}

impl UCone {
  const fn new(axis1: IVec3, axis2: IVec3, axis3: IVec3, edge1: bool, edge2: bool) -> Self {
    Self {
      axis1,
      axis2,
      axis3,
      edge1,
      edge2,
    }
  }
}

/// The 6 axis-dominance permutations with their diagonal edge ownership.
pub const UCONES: [UCone; UCONE_COUNT] = [
  UCone::new(IVec3::X, IVec3::Y, IVec3::Z, false, true),
  UCone::new(IVec3::X, IVec3::Z, IVec3::Y, true, false),
  UCone::new(IVec3::Y, IVec3::X, IVec3::Z, true, true),
  UCone::new(IVec3::Y, IVec3::Z, IVec3::X, true, false),
  UCone::new(IVec3::Z, IVec3::X, IVec3::Y, false, false),
  UCone::new(IVec3::Z, IVec3::Y, IVec3::X, false, true),
];

/// Signed cone: three signed unit axes plus boundary ownership flags.
///
/// A flag set to `true` means the boundary belongs to a neighbouring cone and
/// this cone must not report voxels on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cone {
  /// Dominant axis (shell direction).
  pub axis1: IVec3,
  pub axis2: IVec3,
  pub axis3: IVec3,
  /// Diagonal edge `d1 == d2`.
  pub edge1: bool,
  /// Diagonal edge `d2 == d3`.
  pub edge2: bool,
  /// Quadrant plane `d2 == 0`.
  pub qedge2: bool,
  /// Quadrant plane `d3 == 0`.
  pub qedge3: bool,
}

impl Cone {
  /// Cone that owns all of its boundaries.
  ///
  /// Used for incremental traces, which report boundary voxels and leave
  /// double-counting to the caller.
  pub const fn unprioritized(axis1: IVec3, axis2: IVec3, axis3: IVec3) -> Self {
    Self {
      axis1,
      axis2,
      axis3,
      edge1: false,
      edge2: false,
      qedge2: false,
      qedge3: false,
    }
  }

  /// World position of cone-local steps `(d1, d2, d3)` from `origin`.
  #[inline(always)]
  pub fn voxel(&self, origin: IVec3, d1: i32, d2: i32, d3: i32) -> IVec3 {
    origin + self.axis1 * d1 + self.axis2 * d2 + self.axis3 * d3
  }

  /// True if the voxel lies on a boundary owned by a neighbouring cone.
  ///
  /// `w1 = d1 - d2 + of1` and `w2 = d2 - d3 + of2` are the kernel's
  /// re-based weights; with a zero offset they reduce to the diagonal tests.
  #[inline(always)]
  pub fn defers(&self, w1: i32, w2: i32, d2: i32, d3: i32) -> bool {
    (w1 == 0 && self.edge1)
      || (w2 == 0 && self.edge2)
      || (d2 == 0 && self.qedge2)
      || (d3 == 0 && self.qedge3)
  }
}

/// All 48 signed cones, in shape-major, sign-minor order.
pub static CONES: [Cone; CONE_COUNT] = generate_cones();

/// Sign order for each axis: positive first.
const SIGNS: [i32; 2] = [1, -1];

const fn signed(axis: IVec3, sign: i32) -> IVec3 {
  IVec3::new(axis.x * sign, axis.y * sign, axis.z * sign)
}

/// Generate the cone table at compile time.
const fn generate_cones() -> [Cone; CONE_COUNT] {
  let mut cones = [Cone::unprioritized(IVec3::X, IVec3::Y, IVec3::Z); CONE_COUNT];
  let mut index = 0;
  let mut shape = 0;

  while shape < UCONE_COUNT {
    let ucone = UCONES[shape];
    let mut i1 = 0;
    while i1 < 2 {
      let mut i2 = 0;
      while i2 < 2 {
        let mut i3 = 0;
        while i3 < 2 {
          let (s1, s2, s3) = (SIGNS[i1], SIGNS[i2], SIGNS[i3]);
          cones[index] = Cone {
            axis1: signed(ucone.axis1, s1),
            axis2: signed(ucone.axis2, s2),
            axis3: signed(ucone.axis3, s3),
            edge1: ucone.edge1,
            edge2: ucone.edge2,
            qedge2: s2 > 0,
            qedge3: s3 > 0,
          };
          index += 1;
          i3 += 1;
        }
        i2 += 1;
      }
      i1 += 1;
    }
    shape += 1;
  }

  cones
}

#[cfg(test)]
#[path = "cone_test.rs"]
mod cone_test;
