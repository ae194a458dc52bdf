//! WebGPU rendering module
//!
//! The scene is rebuilt as flat-coloured triangles every frame and drawn with a
//! single pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{build_scene, draw_order};
pub use vertex::Vertex;
