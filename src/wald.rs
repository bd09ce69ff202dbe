use nalgebra::{Point3, Vector2};

/// Precomputed triangle in Wald's projection format: the triangle is
/// intersected in 2D on the plane spanned by the two axes other than the
/// dominant normal axis `k`. `n` is the normal projected onto that plane and
/// scaled by `1/N[k]`, `bn`/`cn` are the edge vectors prepared so that the
/// barycentric coordinates come out of two dot products, `vert_k` is the base
/// vertex in plane coordinates and `nd` the scaled plane distance.
///
/// A degenerate triangle (zero-area, or `N[k] == 0`) produces a record full
/// of infinities or NaNs; callers are expected to filter such triangles out
/// before the build.
#[derive(Clone, Copy, Debug)]
pub struct WaldTriangle {
    pub n: Vector2<f32>,
    pub bn: Vector2<f32>,
    pub cn: Vector2<f32>,
    pub vert_k: Vector2<f32>,
    pub nd: f32,
    /// Index of the source primitive in the input soup.
    pub id: u32,
    /// Dominant normal axis, 0..3.
    pub k: u32,
    /// 1 iff `N[k] < 0`.
    pub sign: u32,
    pub material: u32,
    /// Number of triangles in the leaf this record belongs to, duplicated
    /// into each member so the traversal can walk the contiguous run.
    pub num: u32,
}

impl WaldTriangle {
    pub fn new(vertices: &[Point3<f32>; 3], id: u32, material: u32, num: u32) -> WaldTriangle {
        let a = vertices[0];
        let b = vertices[1] - a;
        let c = vertices[2] - a;
        let normal = b.cross(&c);

        let mut k = 0;
        for i in 1..3 {
            if normal[i].abs() > normal[k].abs() {
                k = i;
            }
        }
        let u = (k + 1) % 3;
        let v = (k + 2) % 3;

        let denom = b[u] * c[v] - b[v] * c[u];
        let krec = normal[k];
        WaldTriangle {
            n: Vector2::new(normal[u] / krec, normal[v] / krec),
            bn: Vector2::new(-b[v] / denom, b[u] / denom),
            cn: Vector2::new(c[v] / denom, -c[u] / denom),
            vert_k: Vector2::new(a[u], a[v]),
            nd: normal.dot(&a.coords) / krec,
            id,
            k: k as u32,
            sign: if normal[k] < 0.0 { 1 } else { 0 },
            material,
            num,
        }
    }
}
