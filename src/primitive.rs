use std::sync::Arc;

use nalgebra::Point3;

use crate::aabb::Aabb;
use crate::node::Intersector;

/// A build input: either a raw triangle or an opaque handle to an
/// already-built sub-tree with its world-space bounds.
#[derive(Clone)]
pub enum Primitive {
    Triangle {
        vertices: [Point3<f32>; 3],
        material: u32,
    },
    SubIntersector {
        tree: Arc<Intersector>,
        bounds: Aabb,
    },
}

impl Primitive {
    pub fn triangle(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Primitive {
        Primitive::Triangle {
            vertices: [v0, v1, v2],
            material: 0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        match self {
            Primitive::Triangle { vertices, .. } => Aabb::from_points(vertices),
            Primitive::SubIntersector { bounds, .. } => *bounds,
        }
    }

    /// Triangle centroid is the mean of the three vertices (factor 1/3, not
    /// the box center); the SAH orders split candidates by this value, so the
    /// convention is part of the output contract.
    pub fn centroid(&self) -> Point3<f32> {
        match self {
            Primitive::Triangle { vertices, .. } => Point3::from(
                (vertices[0].coords + vertices[1].coords + vertices[2].coords) / 3.0,
            ),
            Primitive::SubIntersector { bounds, .. } => bounds.center(),
        }
    }

    pub fn is_triangle(&self) -> bool {
        matches!(self, Primitive::Triangle { .. })
    }
}
