// src/core/mod.rs

pub mod amount;
pub mod html;
pub mod sanitize;
