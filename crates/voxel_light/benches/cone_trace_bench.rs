//! Benchmarks for the cone kernel, full sweeps and incremental traces.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::IVec3;
use voxel_light::{
  par_trace_all_cones, trace_all_cones, trace_change_cone, trace_cone, LightMap, Offset,
  OpacityGrid, TraceConfig, CONES, OPAQUE,
};

/// Grid with a ring of pillars around the source, so shadows are cast in
/// every direction.
fn pillar_grid(source: IVec3, range: u32) -> OpacityGrid {
  let mut grid = OpacityGrid::around(source, range, 1.0);
  let radius = range as i32;
  for x in (-radius..=radius).step_by(3) {
    for z in (-radius..=radius).step_by(3) {
      if x.abs() + z.abs() < 4 {
        continue;
      }
      for y in -radius..=radius {
        grid.set(source + IVec3::new(x, y, z), OPAQUE);
      }
    }
  }
  grid
}

fn bench_single_cone(c: &mut Criterion) {
  let source = IVec3::ZERO;
  let mut group = c.benchmark_group("trace_cone");

  for range in [16i32, 32, 64] {
    let grid = pillar_grid(source, range as u32);
    let config = TraceConfig::new(range);
    group.bench_with_input(BenchmarkId::from_parameter(range), &config, |b, config| {
      b.iter(|| {
        let mut lit = 0u64;
        let stats = trace_cone(
          source,
          Offset::ZERO,
          config,
          &CONES[0],
          &grid,
          &mut |_: IVec3, visibility: f32, _: f64| {
            if visibility > 0.5 {
              lit += 1;
            }
          },
        )
        .unwrap();
        black_box((stats, lit))
      })
    });
  }

  group.finish();
}

fn bench_full_sweep(c: &mut Criterion) {
  let source = IVec3::ZERO;
  let mut group = c.benchmark_group("trace_all_cones");

  for range in [8i32, 16, 32] {
    let grid = pillar_grid(source, range as u32);
    let config = TraceConfig::new(range);

    group.bench_with_input(BenchmarkId::new("sequential", range), &config, |b, config| {
      b.iter(|| {
        let mut light = LightMap::new();
        let stats = trace_all_cones(source, config, &grid, &mut light).unwrap();
        black_box((stats, light.len()))
      })
    });

    group.bench_with_input(BenchmarkId::new("parallel", range), &config, |b, config| {
      b.iter(|| {
        let output = par_trace_all_cones(source, config, &grid).unwrap();
        black_box(output.samples.len())
      })
    });
  }

  group.finish();
}

fn bench_change_cone(c: &mut Criterion) {
  let source = IVec3::ZERO;
  let grid = pillar_grid(source, 32);
  let config = TraceConfig::new(24);
  let delta = IVec3::new(5, -3, 1);

  c.bench_function("trace_change_cone (range 24)", |b| {
    b.iter(|| {
      let mut light = LightMap::new();
      let stats = trace_change_cone(source + delta, black_box(delta), &config, &grid, &mut light)
        .unwrap();
      black_box(stats)
    })
  });
}

criterion_group!(benches, bench_single_cone, bench_full_sweep, bench_change_cone);
criterion_main!(benches);
