//! voxel_light - Cone-traced point light visibility for voxel worlds
//!
//! This crate computes how much of a point light reaches each voxel around
//! it, for real-time light and shadow propagation in voxel worlds. Directions
//! around the source are split into 48 cones; each cone is swept shell by
//! shell, blending visibility from three predecessor cells and stopping light
//! at opaque voxels.
//!
//! # Features
//!
//! - **Full sweep**: all 48 cones around a light, every voxel reported once
//! - **Parallel sweep**: the 48 cones on rayon's pool, merged deterministically
//! - **Incremental trace**: one re-based cone after a single voxel changes
//! - **Engine agnostic**: opacity and light targets are plain closures or
//!   trait implementations; no storage is owned here
//!
//! # Example
//!
//! ```ignore
//! use glam::IVec3;
//! use voxel_light::{trace_all_cones, LightMap, OpacityGrid, TraceConfig};
//!
//! let source = IVec3::new(8, 8, 8);
//! let mut grid = OpacityGrid::around(source, 12, 1.0);
//! grid.set(source + IVec3::X, 0.0); // opaque
//!
//! let mut light = LightMap::new();
//! let stats = trace_all_cones(source, &TraceConfig::new(12), &grid, &mut light)?;
//!
//! println!("Lit {} voxels, {} cells blocked", light.len(), stats.cells_blocked);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use config::TraceConfig;
pub use constants::{CONE_COUNT, MAX_RANGE, OPAQUE};
pub use error::TraceError;
pub use types::{LightSample, LightSink, OpacitySource, Offset};

// Cone table
pub mod cone;
pub use cone::{Cone, UCone, CONES};

// Incremental cone selection
pub mod selector;
pub use selector::{select_change_cone, ChangeCone};

// Visibility kernel
pub mod propagate;
pub use propagate::trace_cone;

// Trace counters
pub mod stats;
pub use stats::TraceStats;

// Sweep and incremental entry points
pub mod trace;
pub use trace::{par_trace_all_cones, trace_all_cones, trace_change_cone, SweepOutput};

// Reference opacity storage and light accumulation
pub mod grid;
pub use grid::{LightCell, LightMap, OpacityGrid};

#[cfg(test)]
mod test_utils;
