//! Render binary trees as level-aligned text diagrams.
//!
//! A tree of any shape is padded with placeholder nodes into a fully balanced
//! tree, every level is assigned precomputed character columns, and the
//! level-order values are streamed into those columns:
//!
//! ```
//! use bintree_render::application::render_tree;
//! use bintree_render::domain::Node;
//!
//! let root = Node::new(1).with_right(Node::new(2).with_right(Node::new(3)));
//! assert_eq!(render_tree(Some(&root)).unwrap(), "   1\n     2\n      3\n");
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod util;

pub use application::{print_tree, render_tree};
pub use domain::{ColumnTable, Node, Tree};
