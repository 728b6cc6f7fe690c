//! GearPack Library
//!
//! Pack weight totals and category summaries for hiking gear lists.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod weight;
