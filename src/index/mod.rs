pub mod inverted;
pub mod posting;
pub mod field_tree;
