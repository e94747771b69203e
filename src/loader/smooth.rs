//! Smooth-normal synthesis.

use crate::math::Vec3;
use crate::mesh::Triangle;

const POSITION_TOLERANCE: f32 = 1e-6;

/// Replaces every triangle corner's normal with the normalized average of
/// the face normals of every triangle sharing that corner's position
/// (within `1e-6` per component). Idempotent: running this twice on the
/// same geometry yields the same normals.
pub fn synthesize_smooth_normals(triangles: &mut [Triangle]) {
    let mut unique_positions: Vec<Vec3> = Vec::new();
    let mut bucket_sum: Vec<Vec3> = Vec::new();
    let mut bucket_count: Vec<u32> = Vec::new();

    let mut bucket_of = |pos: Vec3, unique_positions: &mut Vec<Vec3>| -> usize {
        for (i, candidate) in unique_positions.iter().enumerate() {
            if (candidate - pos).abs().max() < POSITION_TOLERANCE {
                return i;
            }
        }
        unique_positions.push(pos);
        bucket_sum.push(Vec3::zeros());
        bucket_count.push(0);
        unique_positions.len() - 1
    };

    let mut corner_buckets: Vec<[usize; 3]> = Vec::with_capacity(triangles.len());

    for tri in triangles.iter() {
        let face_normal = tri.face_normal_unnormalized();
        let face_normal = if face_normal.norm() > f32::EPSILON {
            face_normal.normalize()
        } else {
            Vec3::zeros()
        };

        let ia = bucket_of(tri.a.position, &mut unique_positions);
        let ib = bucket_of(tri.b.position, &mut unique_positions);
        let ic = bucket_of(tri.c.position, &mut unique_positions);

        for i in [ia, ib, ic] {
            bucket_sum[i] += face_normal;
            bucket_count[i] += 1;
        }

        corner_buckets.push([ia, ib, ic]);
    }

    let averaged: Vec<Vec3> = bucket_sum
        .iter()
        .zip(bucket_count.iter())
        .map(|(&sum, &count)| {
            if count == 0 {
                Vec3::zeros()
            } else {
                let avg = sum / (count as f32);
                if avg.norm() > f32::EPSILON {
                    avg.normalize()
                } else {
                    Vec3::zeros()
                }
            }
        })
        .collect();

    for (tri, buckets) in triangles.iter_mut().zip(corner_buckets.iter()) {
        tri.a.normal = averaged[buckets[0]];
        tri.b.normal = averaged[buckets[1]];
        tri.c.normal = averaged[buckets[2]];
    }
}
