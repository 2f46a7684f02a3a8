//! Map discovery and rendering.
//!
//! [`model::MapModel`] tracks what a session has seen; [`render`]
//! turns one level of it into ASCII. Discovery only ever grows, and
//! rendering is a pure function of the model.

pub mod model;
pub mod render;

pub use model::{MapModel, MapRoom};
pub use render::render;
