//! Error type for trace configuration.
//!
//! The kernel itself cannot fail. Everything here is rejected before a trace
//! starts, so a returned error means no collaborator was called.

use glam::IVec3;
use thiserror::Error;

use crate::types::Offset;

/// Configuration rejected before entering the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
  /// Range must be zero or positive.
  #[error("trace range must not be negative (got {0})")]
  NegativeRange(i32),

  /// Range exceeds the configured allocation bound.
  #[error("trace range {range} exceeds the configured maximum of {max}")]
  RangeTooLarge { range: i32, max: i32 },

  /// Offset components must be non-negative.
  #[error("offset components must be non-negative (got {0:?})")]
  NegativeOffset(Offset),

  /// Offset components must be sorted by descending magnitude.
  #[error("offset components must be sorted o1 >= o2 >= o3 (got {0:?})")]
  UnsortedOffset(Offset),

  /// Sweeping `range` shells from this offset would leave `i32`.
  #[error("offset {offset:?} is too large to sweep {range} shells")]
  OffsetOutOfBounds { offset: Offset, range: u32 },

  /// A change delta has no representable magnitude, or is too large to
  /// trace the configured range from.
  #[error("change delta {0} is out of bounds for the configured range")]
  DeltaOutOfBounds(IVec3),
}
