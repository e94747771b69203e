//! Linear algebra primitives.
//!
//! This crate leans on `nalgebra` for the actual vector/matrix storage and
//! arithmetic (cross, dot, normalize, multiply, inverse) rather than
//! reimplementing it. What lives here is construction of the handful of
//! matrices whose exact
//! numerical convention the rest of the pipeline depends on: the projection
//! matrix and the rotation matrices, which use a **negated** angle
//! convention (see `rotation_x`/`rotation_y`/`rotation_z`).

use nalgebra::{Matrix3, Matrix4, Vector3};

use crate::error::{RenderError, RenderResult};

/// Vector and point aliases used throughout the crate.
pub type Vec2 = nalgebra::Vector2<f32>;
pub type Vec3 = nalgebra::Vector3<f32>;
pub type Vec4 = nalgebra::Vector4<f32>;
pub type Point3 = nalgebra::Point3<f32>;
pub type Mat3 = nalgebra::Matrix3<f32>;
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Builds a right-handed, looking-down-negative-Z perspective projection
/// matrix from vertical field of view (in degrees), aspect ratio, and the
/// near/far clip distances.
///
/// ```text
/// P[0][0]=f/aspect  P[1][1]=f  with f=1/tan(fov/2)
/// P[2][2]=(far+near)/(near-far)   P[2][3]=2*far*near/(near-far)
/// P[3][2]=-1                      P[3][3]=0
/// ```
pub fn projection(near: f32, far: f32, fov_degrees: f32, aspect: f32) -> RenderResult<Mat4> {
    if (far - near).abs() < f32::EPSILON {
        return Err(RenderError::DegenerateGeometry("near == far in projection()"));
    }

    let f = 1.0 / (fov_degrees.to_radians() * 0.5).tan();

    #[rustfmt::skip]
    let m = Mat4::new(
        f / aspect, 0.0, 0.0,                          0.0,
        0.0,        f,   0.0,                          0.0,
        0.0,        0.0, (far + near) / (near - far),  2.0 * far * near / (near - far),
        0.0,        0.0, -1.0,                         0.0,
    );

    Ok(m)
}

/// Rotation about the X axis, using the source's negated-angle convention:
/// `Rx(theta)` is built from `cos(-theta)`/`sin(-theta)`, which is clockwise
/// about +X when viewed from +X towards the origin.
pub fn rotation_x(theta: f32) -> Mat4 {
    let (s, c) = (-theta).sin_cos();

    #[rustfmt::skip]
    let m = Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, c,  -s,   0.0,
        0.0, s,   c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    m
}

/// Rotation about the Y axis, negated-angle convention (see `rotation_x`).
pub fn rotation_y(theta: f32) -> Mat4 {
    let (s, c) = (-theta).sin_cos();

    #[rustfmt::skip]
    let m = Mat4::new(
        c,   0.0, s,   0.0,
        0.0, 1.0, 0.0, 0.0,
       -s,   0.0, c,   0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    m
}

/// Rotation about the Z axis, negated-angle convention (see `rotation_x`).
pub fn rotation_z(theta: f32) -> Mat4 {
    let (s, c) = (-theta).sin_cos();

    #[rustfmt::skip]
    let m = Mat4::new(
        c,  -s,   0.0, 0.0,
        s,   c,   0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    m
}

/// Homogeneous translation matrix.
pub fn translation(v: Vector3<f32>) -> Mat4 {
    Mat4::new_translation(&v)
}

/// Homogeneous non-uniform scale matrix.
pub fn scale(v: Vector3<f32>) -> Mat4 {
    Mat4::new_nonuniform_scaling(&v)
}

/// Extracts the upper-left 3x3 of `m`, inverts it, and transposes the
/// result. Used to transform normals correctly under non-uniform scaling.
///
/// Returns `RenderError::DegenerateGeometry` if the 3x3 block is singular
/// (determinant within `1e-8` of zero), rather than silently returning
/// nonsense, per the explicit fix noted in the design notes.
pub fn inv_transpose_3(m: &Mat4) -> RenderResult<Mat3> {
    let upper = m.fixed_view::<3, 3>(0, 0).into_owned();

    if upper.determinant().abs() < 1e-8 {
        return Err(RenderError::DegenerateGeometry(
            "inv_transpose_3: singular 3x3 block",
        ));
    }

    let inv = upper
        .try_inverse()
        .ok_or(RenderError::DegenerateGeometry(
            "inv_transpose_3: matrix inversion failed",
        ))?;

    Ok(inv.transpose())
}
