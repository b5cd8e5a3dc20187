// src/config/mod.rs
pub mod classifier;
pub mod consts;
pub mod options;
