//! Simple collaborators for driving traces without a voxel engine.
//!
//! - [`OpacityGrid`]: dense box of opacity values, an [`OpacitySource`]
//! - [`LightMap`]: sparse per-voxel accumulation, a [`LightSink`]
//!
//! Useful for tests, benches and tools. Engines plug in their own storage.

use std::collections::HashMap;

use glam::{IVec3, UVec3};

use crate::constants::OPAQUE;
use crate::types::{LightSample, LightSink, OpacitySource};

/// Dense opacity values over an axis-aligned box of voxels.
///
/// Layout: X is major axis, Y is middle, Z is minor (stride 1).
/// Queries outside the box return the `outside` value (opaque by default),
/// so light never leaks past the stored region.
#[derive(Clone, Debug)]
pub struct OpacityGrid {
  min: IVec3,
  size: UVec3,
  cells: Vec<f32>,
  outside: f32,
}

impl OpacityGrid {
  /// Grid covering `min .. min + size`, every cell set to `fill`.
  pub fn new(min: IVec3, size: UVec3, fill: f32) -> Self {
    let len = size.x as usize * size.y as usize * size.z as usize;
    Self {
      min,
      size,
      cells: vec![fill; len],
      outside: OPAQUE,
    }
  }

  /// Grid covering every voxel within Chebyshev distance `range` of `center`.
  pub fn around(center: IVec3, range: u32, fill: f32) -> Self {
    let radius = range as i32;
    Self::new(
      center - IVec3::splat(radius),
      UVec3::splat(2 * range + 1),
      fill,
    )
  }

  /// Value returned for queries outside the box.
  pub fn with_outside(mut self, opacity: f32) -> Self {
    self.outside = opacity;
    self
  }

  /// Smallest covered voxel.
  pub fn min(&self) -> IVec3 {
    self.min
  }

  /// Largest covered voxel (inclusive).
  pub fn max(&self) -> IVec3 {
    self.min + self.size.as_ivec3() - IVec3::ONE
  }

  pub fn contains(&self, pos: IVec3) -> bool {
    self.index(pos).is_some()
  }

  #[inline]
  fn index(&self, pos: IVec3) -> Option<usize> {
    let local = pos - self.min;
    if local.min_element() < 0 {
      return None;
    }
    let local = local.as_uvec3();
    if local.x >= self.size.x || local.y >= self.size.y || local.z >= self.size.z {
      return None;
    }
    let (sy, sz) = (self.size.y as usize, self.size.z as usize);
    Some((local.x as usize * sy + local.y as usize) * sz + local.z as usize)
  }

  /// Opacity at `pos`, or the outside value.
  #[inline]
  pub fn get(&self, pos: IVec3) -> f32 {
    match self.index(pos) {
      Some(idx) => self.cells[idx],
      None => self.outside,
    }
  }

  /// Store `opacity` at `pos`. Returns false if `pos` is outside the box.
  pub fn set(&mut self, pos: IVec3, opacity: f32) -> bool {
    match self.index(pos) {
      Some(idx) => {
        self.cells[idx] = opacity;
        true
      }
      None => false,
    }
  }

  /// Number of stored cells that block light.
  pub fn opaque_count(&self) -> usize {
    self.cells.iter().filter(|&&opacity| opacity == OPAQUE).count()
  }
}

impl OpacitySource for OpacityGrid {
  #[inline]
  fn opacity(&self, pos: IVec3) -> f32 {
    self.get(pos)
  }
}

/// Light accumulated at one voxel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightCell {
  /// Sum of received visibilities.
  pub visibility: f32,
  /// Distance reported by the most recent sample.
  pub distance: f64,
  /// Number of samples received.
  pub hits: u32,
}

/// Sparse per-voxel light accumulation.
///
/// Each received sample adds its visibility to the voxel's total, so a voxel
/// reported twice is visible in `hits`.
#[derive(Clone, Debug, Default)]
pub struct LightMap {
  cells: HashMap<IVec3, LightCell>,
}

impl LightMap {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, pos: IVec3) -> Option<&LightCell> {
    self.cells.get(&pos)
  }

  /// Accumulated visibility at `pos`, zero if never lit.
  pub fn visibility(&self, pos: IVec3) -> f32 {
    self.cells.get(&pos).map_or(0.0, |cell| cell.visibility)
  }

  /// Number of distinct lit voxels.
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Total samples received across all voxels.
  pub fn total_hits(&self) -> u64 {
    self.cells.values().map(|cell| cell.hits as u64).sum()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&IVec3, &LightCell)> {
    self.cells.iter()
  }

  pub fn clear(&mut self) {
    self.cells.clear();
  }

  /// Accumulate one sample.
  pub fn add(&mut self, sample: LightSample) {
    let cell = self.cells.entry(sample.position).or_insert(LightCell {
      visibility: 0.0,
      distance: sample.distance,
      hits: 0,
    });
    cell.visibility += sample.visibility;
    cell.distance = sample.distance;
    cell.hits += 1;
  }
}

impl LightSink for LightMap {
  #[inline]
  fn receive(&mut self, pos: IVec3, visibility: f32, distance: f64) {
    self.add(LightSample::new(pos, visibility, distance));
  }
}

impl Extend<LightSample> for LightMap {
  fn extend<I: IntoIterator<Item = LightSample>>(&mut self, iter: I) {
    for sample in iter {
      self.add(sample);
    }
  }
}

impl FromIterator<LightSample> for LightMap {
  fn from_iter<I: IntoIterator<Item = LightSample>>(iter: I) -> Self {
    let mut map = Self::new();
    map.extend(iter);
    map
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
