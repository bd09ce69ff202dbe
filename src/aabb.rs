use nalgebra::{Point3, Vector3};

/// Axis-aligned bounding box. The empty box is the union identity:
/// `min = +INF`, `max = -INF`.
#[derive(Clone, Copy, Debug)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::empty()
    }
}

impl Aabb {
    pub fn empty() -> Aabb {
        Aabb {
            min: Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Point3<f32>]) -> Aabb {
        let mut bounds = Aabb::empty();
        for point in points {
            bounds.min = bounds.min.inf(point);
            bounds.max = bounds.max.sup(point);
        }
        bounds
    }

    pub fn union(a: &Aabb, b: &Aabb) -> Aabb {
        Aabb {
            min: a.min.inf(&b.min),
            max: a.max.sup(&b.max),
        }
    }

    pub fn center(&self) -> Point3<f32> {
        Point3::from((self.min.coords + self.max.coords) / 2.0)
    }

    pub fn diagonal(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Half the surface area: `dx*dy + dy*dz + dz*dx`. Zero for inverted
    /// (empty) boxes so the SAH never sees an infinity-times-zero NaN.
    pub fn half_area(&self) -> f32 {
        let d = self.max - self.min;
        if d.x < 0.0 || d.y < 0.0 || d.z < 0.0 {
            0.0
        } else {
            d.x * d.y + d.y * d.z + d.z * d.x
        }
    }

    /// Moves all six faces outward by `eps`.
    pub fn inflate(&mut self, eps: f32) {
        self.min -= Vector3::repeat(eps);
        self.max += Vector3::repeat(eps);
    }

    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.min.z <= other.min.z
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
            && self.max.z >= other.max.z
    }
}
