use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_products: u64,
    pub total_raw_materials: u64,
    pub total_requests: u64,
    pub pending_requests: u64,
    pub low_stock_count: u64,
}
