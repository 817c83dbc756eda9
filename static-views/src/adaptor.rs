//! View adaptors
//!
//! Each adaptor owns its parent view and differs from the others only in
//! its size rule and in how it maps an index onto the parent. None of them
//! allocate or copy items.

mod chunk;
mod drop;
mod flatten;
mod slice;
mod take;
mod through;
mod transform;

pub use chunk::ChunkView;
pub use drop::DropView;
pub use flatten::FlattenView;
pub use slice::SliceView;
pub use take::TakeView;
pub use through::ThroughView;
pub use transform::TransformView;
