//! Chart rendering

pub mod pie;

pub use pie::{PieChart, Slice, SlicePaths};
