//! Static BVH builder for ray-tracing acceleration.
//!
//! [`create`] takes a soup of triangles and opaque sub-intersectors and
//! produces an immutable [`Intersector`]: a flat binary tree of axis-aligned
//! boxes in a compact pool layout, with leaves pointing at Wald-precomputed
//! triangle records. Splits are chosen by a full centroid-sweep Surface Area
//! Heuristic over all three axes, maintained through three parallel index
//! permutations so no range is ever re-sorted.
//!
//! The builder is single-threaded and synchronous; the result can be shared
//! across traversal threads without synchronization.

pub mod aabb;
mod build;
pub mod config;
pub mod node;
pub mod primitive;
pub mod wald;

pub use aabb::Aabb;
pub use build::create;
pub use config::{BuildConfig, ConfigError};
pub use node::{Intersector, Node, NodeKind};
pub use primitive::Primitive;
pub use wald::WaldTriangle;
