//! Constants shared by the cone generator and the visibility kernel.
//!
//! # Cone Layout
//!
//! ```text
//! Every cone is spanned by three signed unit axes. A voxel inside the cone
//! is addressed by cone-local steps (d1, d2, d3) with
//!
//!     R >= d1 >= d2 >= d3 >= 0
//!
//!     position = origin + d1·axis1 + d2·axis2 + d3·axis3
//!
//!   d1: shell index, distance along the dominant axis
//!   d2: steps along the secondary axis (bounded by d1)
//!   d3: steps along the tertiary axis  (bounded by d2)
//!
//! Cone boundaries (shared with neighbouring cones):
//!
//!   d1 == d2  (w1 == 0)   diagonal edge between dominant and secondary
//!   d2 == d3  (w2 == 0)   diagonal edge between secondary and tertiary
//!   d2 == 0               quadrant plane of the secondary axis
//!   d3 == 0               quadrant plane of the tertiary axis
//! ```
//!
//! # Visibility Buffer
//!
//! ```text
//! Triangular (R+1)×(R+1) slice of one shell, row = d2, column = d3:
//!
//!   d2 ▲
//!    3 │ ■ ■ ■ ■
//!    2 │ ■ ■ ■ ·
//!    1 │ ■ ■ · ·
//!    0 │ ■ · · ·
//!      └──────────▶ d3
//!
//! Cells are rewritten in place while a shell is swept, d2 and d3 descending,
//! so each predecessor is read before the slot holding it is reused.
//! ```

/// Number of signed cones around a point source (6 shapes × 8 sign sets).
pub const CONE_COUNT: usize = 48;

/// Number of unsigned cone shapes (one per axis-dominance permutation).
pub const UCONE_COUNT: usize = 6;

/// Number of sign assignments applied to each unsigned shape.
pub const SIGN_COMBINATIONS: usize = 8;

/// Visibility stored for the source cell `buffer[0][0]`.
pub const SOURCE_VISIBILITY: f32 = 1.0;

/// Sentinel stored for opacity-blocked cells.
///
/// Negative zero compares equal to `0.0`, so it contributes nothing to
/// successors, but stays distinguishable with `is_sign_negative`.
pub const BLOCKED: f32 = -0.0;

/// Opacity value that blocks light. Anything else lets light through.
pub const OPAQUE: f32 = 0.0;

/// Default trace range in voxels.
pub const DEFAULT_RANGE: i32 = 16;

/// Default upper bound on trace range.
///
/// A trace allocates an (R+1)² buffer and visits O(R³) cells per cone.
pub const MAX_RANGE: i32 = 1024;

/// Number of voxels within Chebyshev distance `range` of a point,
/// excluding the point itself.
#[inline]
pub const fn cube_voxel_count(range: u32) -> u64 {
  let side = 2 * range as u64 + 1;
  side * side * side - 1
}

/// Number of cone-local cells `(d1, d2, d3)` with `1 <= d1 <= range` and
/// `d1 >= d2 >= d3 >= 0`, i.e. the cells a cone visits when nothing blocks.
#[inline]
pub const fn cone_cell_count(range: u32) -> u64 {
  let mut total = 0u64;
  let mut d1 = 1u64;
  while d1 <= range as u64 {
    total += (d1 + 1) * (d1 + 2) / 2;
    d1 += 1;
  }
  total
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
