pub mod git;
pub mod sweep;
