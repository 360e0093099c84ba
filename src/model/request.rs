use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::constants::RequestStatus;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub id: i32,
    pub requester_id: i32,
    pub product_id: Option<i32>,
    pub raw_material_id: Option<i32>,
    pub quantity: i32,
    pub status: RequestStatus,
    pub notes: Option<String>,
    pub reviewed_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A new request targets exactly one of a product or a raw material
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    pub product_id: Option<i32>,
    pub raw_material_id: Option<i32>,
    pub quantity: i32,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatusDto {
    pub status: RequestStatus,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequestListParams {
    pub status: Option<RequestStatus>,
}
