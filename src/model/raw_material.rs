use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::constants::{MaterialCategory, MaterialUnit};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawMaterialDto {
    pub id: i32,
    pub item_name: String,
    pub category: MaterialCategory,
    pub unit: MaterialUnit,
    pub count: i32,
    pub quantity_per_unit: f64,
    pub reorder_threshold: i32,
    /// `count` is at or below `reorder_threshold`
    pub low_stock: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRawMaterialDto {
    pub item_name: String,
    pub category: MaterialCategory,
    pub count: i32,
    pub unit: MaterialUnit,
    pub quantity_per_unit: f64,
    pub reorder_threshold: i32,
}

/// Partial update; absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRawMaterialDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MaterialCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<MaterialUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reorder_threshold: Option<i32>,
}
