pub mod completion;
pub mod sweep;
