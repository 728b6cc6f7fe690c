//! GearPack Tools module
//!
//! Tool implementations behind the MCP server.

pub mod packs;
pub mod status;
