//! Cone selection for incremental updates.
//!
//! When a single voxel changes opacity, only light passing through it changes.
//! That light continues away from the source inside one cone rooted at the
//! changed voxel, re-based so weights and distances are computed as if traced
//! from the source:
//!
//! ```text
//!   source ●─────────────▶ ■ changed voxel (origin)
//!            delta              ╲
//!                                ╲ cone axes follow the signs of delta,
//!                                 ╲ ordered by |delta| descending
//! ```
//!
//! # Known Limitation
//!
//! When two magnitudes of `delta` tie, or one is zero, the changed voxel sits
//! on a boundary shared by several full-sweep cones. Only one cone is picked
//! (stable ordering: x before y before z, positive axis for zero components)
//! and it reports every boundary voxel, so the choice can disagree with the
//! ownership rules of the 48-cone sweep. [`ChangeCone::is_degenerate`] flags
//! these cases; callers relying on exact boundary attribution must handle
//! them.

use glam::IVec3;

use crate::cone::Cone;
use crate::error::TraceError;
use crate::types::Offset;

/// Cone and offset chosen for an incremental trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeCone {
  /// Axes ordered by descending delta magnitude, all boundaries owned.
  pub cone: Cone,
  /// Sorted delta magnitudes.
  pub offset: Offset,
}

impl ChangeCone {
  /// True if delta magnitudes tie or one is zero, where the selected cone
  /// may not match full-sweep boundary ownership.
  pub fn is_degenerate(&self) -> bool {
    self.offset.is_on_boundary()
  }
}

/// Pick the cone and offset for a change at `delta` from the light source.
///
/// Each axis points along the sign of its delta component (positive for
/// zero). Axes are stably sorted by magnitude, descending, keeping each axis
/// paired with its magnitude.
pub fn select_change_cone(delta: IVec3) -> Result<ChangeCone, TraceError> {
  let magnitude = |component: i32| component.checked_abs().ok_or(TraceError::DeltaOutOfBounds(delta));
  let axis = |component: i32, positive: IVec3| if component < 0 { -positive } else { positive };

  let mut pairs = [
    (axis(delta.x, IVec3::X), magnitude(delta.x)?),
    (axis(delta.y, IVec3::Y), magnitude(delta.y)?),
    (axis(delta.z, IVec3::Z), magnitude(delta.z)?),
  ];
  pairs.sort_by(|a, b| b.1.cmp(&a.1));

  let [(axis1, o1), (axis2, o2), (axis3, o3)] = pairs;
  Ok(ChangeCone {
    cone: Cone::unprioritized(axis1, axis2, axis3),
    offset: Offset::from_sorted(o1, o2, o3),
  })
}

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;
