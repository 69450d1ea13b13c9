//! Core data types and collaborator traits for cone tracing.
//!
//! The tracer owns no voxel storage and no light target. Callers plug them in
//! through two traits:
//!
//! - [`OpacitySource`]: `(x, y, z) -> opacity`, where exactly `0.0` blocks.
//! - [`LightSink`]: receives `(position, visibility, distance)` per voxel.
//!
//! Both are implemented for plain closures, so most callers never name them.

use glam::IVec3;

use crate::constants::OPAQUE;
use crate::error::TraceError;

/// Opacity query over integer voxel coordinates.
///
/// Exactly [`OPAQUE`] (`0.0`) means the voxel blocks light, any other value
/// means light passes. Only the zero test is applied; fractional values are
/// not used to attenuate visibility.
///
/// Must answer every coordinate within `origin ± range` along the traced cone
/// axes. Implementations shared by [`par_trace_all_cones`] must also be `Sync`.
///
/// [`par_trace_all_cones`]: crate::trace::par_trace_all_cones
pub trait OpacitySource {
  fn opacity(&self, pos: IVec3) -> f32;

  /// True if the voxel at `pos` blocks light.
  #[inline]
  fn is_opaque(&self, pos: IVec3) -> bool {
    self.opacity(pos) == OPAQUE
  }
}

impl<F> OpacitySource for F
where
  F: Fn(IVec3) -> f32,
{
  #[inline]
  fn opacity(&self, pos: IVec3) -> f32 {
    self(pos)
  }
}

/// Receiver of per-voxel visibility.
///
/// Called at most once per voxel per cone, shells in ascending order, no fixed
/// order within a shell. `visibility` is in `(0, 1]`, `distance` is the
/// Euclidean distance from the light source and is `>= 0`.
pub trait LightSink {
  fn receive(&mut self, pos: IVec3, visibility: f32, distance: f64);
}

impl<F> LightSink for F
where
  F: FnMut(IVec3, f32, f64),
{
  #[inline]
  fn receive(&mut self, pos: IVec3, visibility: f32, distance: f64) {
    self(pos, visibility, distance)
  }
}

/// One buffered consumer invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSample {
  /// World voxel position.
  pub position: IVec3,

  /// Fraction of the source's light reaching the voxel, in `(0, 1]`.
  pub visibility: f32,

  /// Distance from the light source in voxels.
  pub distance: f64,
}

impl LightSample {
  pub fn new(position: IVec3, visibility: f32, distance: f64) -> Self {
    Self {
      position,
      visibility,
      distance,
    }
  }
}

/// Buffers every invocation in call order.
impl LightSink for Vec<LightSample> {
  #[inline]
  fn receive(&mut self, pos: IVec3, visibility: f32, distance: f64) {
    self.push(LightSample::new(pos, visibility, distance));
  }
}

/// Re-basing offset between a cone's origin and the light source.
///
/// Components are magnitudes along the cone's own axes, sorted descending:
/// `o1 >= o2 >= o3 >= 0`. [`Offset::ZERO`] traces from the source itself.
///
/// Fields are private so every offset passes through [`Offset::new`] or the
/// selector and the ordering always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
  o1: i32,
  o2: i32,
  o3: i32,
}

impl Offset {
  /// Cone origin coincides with the light source.
  pub const ZERO: Self = Self {
    o1: 0,
    o2: 0,
    o3: 0,
  };

  /// Build an offset, rejecting negative or unsorted components.
  pub fn new(o1: i32, o2: i32, o3: i32) -> Result<Self, TraceError> {
    let offset = Self { o1, o2, o3 };
    if o1 < 0 || o2 < 0 || o3 < 0 {
      return Err(TraceError::NegativeOffset(offset));
    }
    if o1 < o2 || o2 < o3 {
      return Err(TraceError::UnsortedOffset(offset));
    }
    Ok(offset)
  }

  /// Caller guarantees `o1 >= o2 >= o3 >= 0`.
  pub(crate) const fn from_sorted(o1: i32, o2: i32, o3: i32) -> Self {
    Self { o1, o2, o3 }
  }

  /// Largest component, along the cone's dominant axis.
  #[inline]
  pub fn o1(&self) -> i32 {
    self.o1
  }

  #[inline]
  pub fn o2(&self) -> i32 {
    self.o2
  }

  /// Smallest component.
  #[inline]
  pub fn o3(&self) -> i32 {
    self.o3
  }

  /// Components as `[o1, o2, o3]`.
  pub fn to_array(&self) -> [i32; 3] {
    [self.o1, self.o2, self.o3]
  }

  /// True if `range` shells can be swept from this offset without the
  /// re-based step `d1 + o1` leaving `i32`.
  ///
  /// Every weight the kernel derives is bounded by `o1 + range`.
  pub fn fits_range(&self, range: u32) -> bool {
    i32::try_from(range)
      .ok()
      .and_then(|range| self.o1.checked_add(range))
      .is_some()
  }

  /// Per-axis weight shifts `(o1 - o2, o2 - o3, o3)`.
  ///
  /// A predecessor whose weight equals its shift sits on the cone boundary
  /// and contributes nothing.
  #[inline]
  pub fn deltas(&self) -> (i32, i32, i32) {
    (self.o1 - self.o2, self.o2 - self.o3, self.o3)
  }

  /// True if any two components tie or the smallest is zero.
  ///
  /// Those offsets sit on a boundary shared by several full-sweep cones.
  pub fn is_on_boundary(&self) -> bool {
    self.o1 == self.o2 || self.o2 == self.o3 || self.o3 == 0
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
