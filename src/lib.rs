#![doc = include_str!("../README.md")]

mod coord;
mod error;
pub mod kdtree;
pub mod metric;
mod record;
mod store;

pub use coord::{Axis, GeoCoord};
pub use error::GeoKnnError;
pub use kdtree::{KdTree, Neighbor};
pub use record::{embedding_sq_dist, Embedding, PointRecord, EMBEDDING_DIM, MAX_IDENTIFIER_LEN};
pub use store::IndexStore;
