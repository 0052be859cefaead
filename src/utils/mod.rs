//! Contains utilities shared by the reports of this crate

pub mod presentable_measurements;
