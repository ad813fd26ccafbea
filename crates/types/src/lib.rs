pub mod ids;
pub mod list;

pub use ids::{IdGenerator, NodeId};
pub use list::{IndexError, OneOrMany, insert_index, valid_index};
