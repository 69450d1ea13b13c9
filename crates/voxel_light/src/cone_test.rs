use std::collections::{HashMap, HashSet};

use super::*;

#[test]
fn test_cone_table_has_48_distinct_cones() {
  assert_eq!(CONES.len(), 48);
  let unique: HashSet<Cone> = CONES.iter().copied().collect();
  assert_eq!(unique.len(), 48, "Every cone must be distinct");
}

#[test]
fn test_cone_axes_are_orthogonal_units() {
  for (i, cone) in CONES.iter().enumerate() {
    for axis in [cone.axis1, cone.axis2, cone.axis3] {
      assert_eq!(axis.abs().element_sum(), 1, "Cone {} axis {} not unit", i, axis);
    }
    assert_eq!(cone.axis1.dot(cone.axis2), 0, "Cone {}", i);
    assert_eq!(cone.axis2.dot(cone.axis3), 0, "Cone {}", i);
    assert_eq!(cone.axis1.dot(cone.axis3), 0, "Cone {}", i);
  }
}

/// Shape-major, sign-minor: first cone is +X+Y+Z, second flips axis3.
#[test]
fn test_cone_table_order() {
  assert_eq!(
    CONES[0],
    Cone {
      axis1: IVec3::X,
      axis2: IVec3::Y,
      axis3: IVec3::Z,
      edge1: false,
      edge2: true,
      qedge2: true,
      qedge3: true,
    }
  );
  assert_eq!(CONES[1].axis3, IVec3::NEG_Z);
  assert!(!CONES[1].qedge3);
  // Sign of the dominant axis varies slowest within a shape.
  assert_eq!(CONES[4].axis1, IVec3::NEG_X);
  assert_eq!(CONES[4].axis2, IVec3::Y);
  assert_eq!(CONES[4].axis3, IVec3::Z);
  assert_eq!(CONES[7].axis1, IVec3::NEG_X);
  assert_eq!(CONES[7].axis2, IVec3::NEG_Y);
  assert_eq!(CONES[7].axis3, IVec3::NEG_Z);
  assert_eq!(CONES[8].axis1, IVec3::X);
  assert_eq!(CONES[8].axis2, IVec3::Z);
  assert_eq!(CONES[8].axis3, IVec3::Y);
  assert_eq!(CONES[47].axis1, IVec3::NEG_Z);
  assert_eq!(CONES[47].axis2, IVec3::NEG_Y);
  assert_eq!(CONES[47].axis3, IVec3::NEG_X);
}

#[test]
fn test_edge_flags_inherited_from_shape() {
  for (shape, ucone) in UCONES.iter().enumerate() {
    for cone in &CONES[shape * 8..(shape + 1) * 8] {
      assert_eq!(cone.axis1.abs(), ucone.axis1);
      assert_eq!(cone.axis2.abs(), ucone.axis2);
      assert_eq!(cone.axis3.abs(), ucone.axis3);
      assert_eq!(cone.edge1, ucone.edge1);
      assert_eq!(cone.edge2, ucone.edge2);
      assert_eq!(cone.qedge2, cone.axis2.element_sum() > 0);
      assert_eq!(cone.qedge3, cone.axis3.element_sum() > 0);
    }
  }
}

/// Every dominant axis direction gets 8 cones.
#[test]
fn test_each_dominant_axis_has_8_cones() {
  let mut by_axis: HashMap<IVec3, usize> = HashMap::new();
  for cone in &CONES {
    *by_axis.entry(cone.axis1).or_default() += 1;
  }
  assert_eq!(by_axis.len(), 6);
  assert!(by_axis.values().all(|&count| count == 8));
}

/// Geometric partition: with boundary flags honored, each voxel of the cube
/// around a point is claimed by exactly one cone.
#[test]
fn test_cones_partition_directions() {
  let range = 5;
  let mut claims: HashMap<IVec3, usize> = HashMap::new();

  for cone in &CONES {
    for d1 in 1..=range {
      for d2 in 0..=d1 {
        for d3 in 0..=d2 {
          if cone.defers(d1 - d2, d2 - d3, d2, d3) {
            continue;
          }
          *claims.entry(cone.voxel(IVec3::ZERO, d1, d2, d3)).or_default() += 1;
        }
      }
    }
  }

  let side = 2 * range + 1;
  assert_eq!(claims.len(), (side * side * side - 1) as usize);
  for (pos, count) in &claims {
    assert_eq!(*count, 1, "Voxel {} claimed by {} cones", pos, count);
    assert!(pos.abs().max_element() <= range);
  }
  assert!(!claims.contains_key(&IVec3::ZERO));
}

#[test]
fn test_unprioritized_cone_claims_everything() {
  let cone = Cone::unprioritized(IVec3::X, IVec3::Y, IVec3::Z);
  assert!(!cone.defers(0, 0, 0, 0));
}

#[test]
fn test_voxel_position() {
  let cone = CONES[8 * 3 + 5]; // YZX shape, signs (-, +, -)
  assert_eq!(cone.axis1, IVec3::NEG_Y);
  assert_eq!(cone.axis2, IVec3::Z);
  assert_eq!(cone.axis3, IVec3::NEG_X);

  let origin = IVec3::new(10, 20, 30);
  assert_eq!(cone.voxel(origin, 3, 2, 1), IVec3::new(9, 17, 32));
}
