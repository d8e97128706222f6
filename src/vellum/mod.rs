//! Core modules of the vellum lowering stage.

pub mod ir;
pub mod lowering;
pub mod syntax;
pub mod testing;
pub mod transforms;
