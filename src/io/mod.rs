//! Input/output helpers for exporting calculation results.

pub mod export;
