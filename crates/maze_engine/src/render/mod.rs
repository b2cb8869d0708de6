//! Rendering-side data
//!
//! Everything here is backend-agnostic: the draw list is plain data and the
//! camera only produces matrices. Issuing GPU work is left to the backend.

pub mod camera;
pub mod commands;
pub mod draw_list;

pub use camera::Camera;
pub use commands::{DrawInstruction, DrawList};
pub use draw_list::DrawListBuilder;
