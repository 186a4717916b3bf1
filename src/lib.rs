pub mod commands;
pub mod package;
pub mod project;
pub mod registry;
pub mod runtime;
pub mod style;
pub mod tree;
