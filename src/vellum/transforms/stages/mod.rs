//! Individual compiler stages composable into pipelines.

pub mod lowering;

pub use lowering::Lowering;
