//! Styling attributes carried by layout nodes.
//!
//! Nodes hold two ordered token lists: CSS classes and inline style
//! declarations. Neither list is deduplicated; order is preserved so that
//! later tokens win in the browser.

pub mod defaults;
pub mod tokens;

pub use defaults::{NodeStyle, StyleDefaults, merge};
pub use tokens::TokenList;
