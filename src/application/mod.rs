//! Application layer: rendering pipeline
//!
//! This layer orchestrates domain logic and owns the output sink boundary.

pub mod error;
pub mod error_ext;
pub mod printer;
pub mod render;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use printer::{
    ensure_depth_within, print_tree, print_tree_with_depth, render_tree, render_tree_with_depth,
};
pub use render::render;
