//! Copy-on-rotate mesh transform
//!
//! Rotations follow the intrinsic XYZ Euler convention: the composed
//! matrix is `Rx · Ry · Rz`, matching how build orientation is expressed
//! in the print profile. The source mesh is never mutated; the rotated
//! copy is exclusively owned by the caller. Rotation changes neither
//! volume nor surface area, only which triangles face down and the
//! bounding-box footprint.

use crate::mesh::TriangleMesh;
use nalgebra::{Rotation3, Vector3};
use printquote_core::profile::Rotation;

/// Composed rotation matrix for a profile rotation, angles wrapped into
/// their declared bounds first.
pub fn rotation_matrix(rotation: &Rotation) -> Rotation3<f64> {
    let r = rotation.clamped();
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), r.x_deg.to_radians());
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), r.y_deg.to_radians());
    let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), r.z_deg.to_radians());
    rx * ry * rz
}

/// Rotate a mesh about the origin, returning a new mesh.
///
/// The index list (if any) is carried over unchanged; only vertex
/// positions move.
pub fn rotated(mesh: &TriangleMesh, rotation: &Rotation) -> TriangleMesh {
    if rotation.is_identity() {
        return mesh.clone();
    }
    let m = rotation_matrix(rotation);
    let vertices = mesh.vertices().iter().map(|v| m.transform_point(v)).collect();
    TriangleMesh::from_parts(vertices, mesh.indices().map(|i| i.to_vec()))
}
