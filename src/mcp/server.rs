//! GearPack MCP Server Implementation
//!
//! Exposes the pack weight tools over MCP.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::packs;
use crate::tools::status::StatusTracker;

/// GearPack MCP Service
#[derive(Clone)]
pub struct GearPackService {
    config: Config,
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<GearPackService>,
}

impl GearPackService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(config.display_unit))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputePackWeightsParams {
    /// Pack object: { id, items: [{ weight, weightUnit, quantity, category, consumable, worn }] }
    pub pack: serde_json::Value,
    /// Display unit: g, oz, kg or lb (default: server setting)
    pub preferred_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputePacksWeightsParams {
    /// Array of pack objects
    pub packs: serde_json::Value,
    /// Display unit: g, oz, kg or lb (default: server setting)
    pub preferred_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SummarizeCategoriesParams {
    /// Flat array of items
    pub items: serde_json::Value,
    /// Denominator for percentages (default: combined weight of the items)
    pub total_weight: Option<f64>,
    /// Unit of total_weight (default g)
    pub total_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PackBreakdownParams {
    /// Pack object with items
    pub pack: serde_json::Value,
    /// Display unit: g, oz, kg or lb (default: server setting)
    pub preferred_unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertWeightParams {
    pub value: f64,
    /// Source unit: g, oz, kg or lb
    pub from: String,
    /// Target unit: g, oz, kg or lb
    pub to: String,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl GearPackService {
    // --- Status ---

    #[tool(description = "Get the current status of the GearPack service including build info, display unit and process information")]
    async fn gearpack_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for describing packs and items. Call this before the first weight calculation in a session.")]
    fn packing_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PACKING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PACKING_INSTRUCTIONS)]))
    }

    // --- Weights ---

    #[tool(description = "Compute base weight (excluding consumable and worn items) and total weight for a pack")]
    async fn compute_pack_weights(&self, Parameters(p): Parameters<ComputePackWeightsParams>) -> Result<CallToolResult, McpError> {
        let unit = packs::resolve_unit(p.preferred_unit.as_deref(), self.config.display_unit);
        let result = packs::compute_pack_weights(p.pack, unit).map_err(|e| McpError::internal_error(e, None))?;
        self.status_tracker.lock().await.record_packs(1);
        to_json(&result)
    }

    #[tool(description = "Compute base and total weight for each pack in a list, preserving order")]
    async fn compute_packs_weights(&self, Parameters(p): Parameters<ComputePacksWeightsParams>) -> Result<CallToolResult, McpError> {
        let unit = packs::resolve_unit(p.preferred_unit.as_deref(), self.config.display_unit);
        let result = packs::compute_packs_weights(p.packs, unit).map_err(|e| McpError::internal_error(e, None))?;
        self.status_tracker.lock().await.record_packs(result.total);
        to_json(&result)
    }

    #[tool(description = "Split a pack into base, worn, consumable and total weight, with a per-category table")]
    async fn pack_breakdown(&self, Parameters(p): Parameters<PackBreakdownParams>) -> Result<CallToolResult, McpError> {
        let unit = packs::resolve_unit(p.preferred_unit.as_deref(), self.config.display_unit);
        let result = packs::pack_breakdown(p.pack, unit).map_err(|e| McpError::internal_error(e, None))?;
        self.status_tracker.lock().await.record_packs(1);
        to_json(&result)
    }

    #[tool(description = "Group items by category with item counts and percentage of total weight")]
    fn summarize_categories(&self, Parameters(p): Parameters<SummarizeCategoriesParams>) -> Result<CallToolResult, McpError> {
        let total = packs::total_from_params(p.total_weight, p.total_unit.as_deref());
        let result = packs::summarize_categories(p.items, total).map_err(|e| McpError::internal_error(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Convert a weight between g, oz, kg and lb, rounded to 2 decimals")]
    fn convert_weight(&self, Parameters(p): Parameters<ConvertWeightParams>) -> Result<CallToolResult, McpError> {
        to_json(&packs::convert_weight(p.value, &p.from, &p.to))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for GearPackService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "gearpack".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("GearPack".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "GearPack - hiking pack weight calculator. Call packing_instructions first. \
                 Weights: compute_pack_weights, compute_packs_weights, pack_breakdown. \
                 Categories: summarize_categories. Units: convert_weight. Status: gearpack_status."
                    .into(),
            ),
        }
    }
}
