pub mod path;
pub mod resolver;
