//! Node placement for rendering.

pub mod hierarchy;

pub use hierarchy::{HierarchicalLayout, Layout, LayoutParams, Position};
