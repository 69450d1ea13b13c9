//! TraceConfig - range settings and validation for cone traces.

use crate::constants::{DEFAULT_RANGE, MAX_RANGE};
use crate::error::TraceError;

/// Configuration shared by the sweep and incremental entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceConfig {
  /// How far visibility is computed, in voxels along each cone's dominant
  /// axis. Usually estimated from the light's emission strength.
  pub range: i32,

  /// Largest range accepted by [`TraceConfig::validate`].
  pub max_range: i32,
}

impl Default for TraceConfig {
  fn default() -> Self {
    Self {
      range: DEFAULT_RANGE,
      max_range: MAX_RANGE,
    }
  }
}

impl TraceConfig {
  /// Config with the given range and the default bound.
  pub fn new(range: i32) -> Self {
    Self {
      range,
      ..Self::default()
    }
  }

  pub fn with_range(mut self, range: i32) -> Self {
    self.range = range;
    self
  }

  pub fn with_max_range(mut self, max_range: i32) -> Self {
    self.max_range = max_range;
    self
  }

  /// Check the range and return it as an unsigned step count.
  pub fn validate(&self) -> Result<u32, TraceError> {
    if self.range < 0 {
      return Err(TraceError::NegativeRange(self.range));
    }
    if self.range > self.max_range {
      return Err(TraceError::RangeTooLarge {
        range: self.range,
        max: self.max_range,
      });
    }
    Ok(self.range as u32)
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
