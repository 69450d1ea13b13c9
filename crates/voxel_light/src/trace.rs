//! Entry points: full sweeps around a light source and incremental traces.
//!
//! ```text
//!   trace_all_cones      CONES (48) ──▶ propagate_cone ×48 ──▶ sink
//!   par_trace_all_cones  CONES (48) ──▶ rayon: propagate_cone ×48 ──▶ Vec ×48 ──▶ merge
//!   trace_change_cone    select_change_cone ──▶ propagate_cone ×1 ──▶ sink
//! ```
//!
//! Configuration is validated up front; once a trace starts it cannot fail.

use glam::IVec3;
use rayon::prelude::*;
use web_time::Instant;

use crate::cone::CONES;
use crate::config::TraceConfig;
use crate::error::TraceError;
use crate::propagate::propagate_cone;
use crate::selector::select_change_cone;
use crate::stats::TraceStats;
use crate::types::{LightSample, LightSink, OpacitySource, Offset};

/// Result of a parallel sweep.
#[derive(Clone, Debug, Default)]
pub struct SweepOutput {
  /// Samples in cone-table order, matching a sequential sweep.
  pub samples: Vec<LightSample>,
  /// Counters summed over all cones.
  pub stats: TraceStats,
  /// Wall time of the sweep in microseconds.
  pub elapsed_us: u64,
}

impl SweepOutput {
  /// Replay the buffered samples into a sink.
  pub fn replay<S: LightSink + ?Sized>(&self, sink: &mut S) {
    for sample in &self.samples {
      sink.receive(sample.position, sample.visibility, sample.distance);
    }
  }
}

fn validate(config: &TraceConfig) -> Result<u32, TraceError> {
  config.validate().inspect_err(|_err| {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %_err, "rejected trace configuration");
  })
}

/// Trace all 48 cones around `source`.
///
/// Every voxel within Chebyshev distance `config.range` of `source` that is
/// not fully shadowed is reported exactly once.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "trace::trace_all_cones"))]
pub fn trace_all_cones<O, S>(
  source: IVec3,
  config: &TraceConfig,
  opacity: &O,
  sink: &mut S,
) -> Result<TraceStats, TraceError>
where
  O: OpacitySource + ?Sized,
  S: LightSink + ?Sized,
{
  let range = validate(config)?;
  let mut stats = TraceStats::default();
  for cone in CONES.iter() {
    stats += propagate_cone(source, Offset::ZERO, range, cone, opacity, sink);
  }
  Ok(stats)
}

/// Trace all 48 cones around `source` on rayon's thread pool.
///
/// Each cone buffers its own samples; buffers are concatenated in cone-table
/// order, so the output equals the sequential sweep's invocation sequence.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "trace::par_trace_all_cones"))]
pub fn par_trace_all_cones<O>(
  source: IVec3,
  config: &TraceConfig,
  opacity: &O,
) -> Result<SweepOutput, TraceError>
where
  O: OpacitySource + Sync + ?Sized,
{
  let range = validate(config)?;
  let start = Instant::now();

  let per_cone: Vec<(Vec<LightSample>, TraceStats)> = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("trace_cones").entered();
    CONES
      .par_iter()
      .map(|cone| {
        let mut samples: Vec<LightSample> = Vec::new();
        let stats = propagate_cone(source, Offset::ZERO, range, cone, opacity, &mut samples);
        (samples, stats)
      })
      .collect()
  };

  let mut output = SweepOutput::default();
  {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("merge_samples").entered();
    output.samples.reserve(per_cone.iter().map(|(samples, _)| samples.len()).sum());
    for (samples, stats) in per_cone {
      output.samples.extend(samples);
      output.stats += stats;
    }
  }
  output.elapsed_us = start.elapsed().as_micros() as u64;

  Ok(output)
}

/// Re-trace the light passing through `origin` after its opacity changed.
///
/// `delta` is the signed offset from the light source to `origin`. One cone
/// pointing away from the source is traced from `origin`, with visibility and
/// distances re-based onto the source. The cone reports its boundary voxels;
/// see [`select_change_cone`] for the tie and zero cases.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "trace::trace_change_cone"))]
pub fn trace_change_cone<O, S>(
  origin: IVec3,
  delta: IVec3,
  config: &TraceConfig,
  opacity: &O,
  sink: &mut S,
) -> Result<TraceStats, TraceError>
where
  O: OpacitySource + ?Sized,
  S: LightSink + ?Sized,
{
  let range = validate(config)?;
  let change = select_change_cone(delta)?;
  if !change.offset.fits_range(range) {
    return Err(TraceError::DeltaOutOfBounds(delta));
  }

  #[cfg(feature = "tracing")]
  {
    if change.is_degenerate() {
      tracing::debug!(%delta, "change delta lies on a cone boundary");
    }
  }

  Ok(propagate_cone(
    origin,
    change.offset,
    range,
    &change.cone,
    opacity,
    sink,
  ))
}

#[cfg(test)]
#[path = "trace_test.rs"]
mod trace_test;
