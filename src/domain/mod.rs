//! Domain layer: tree shape and layout algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod balance;
pub mod error;
pub mod node;
pub mod table;
pub mod traversal;

pub use balance::{balance, is_balanced};
pub use error::{DomainError, DomainResult};
pub use node::{depth, Node, Tree};
pub use table::ColumnTable;
pub use traversal::level_order;
