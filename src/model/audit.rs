use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::constants::{AuditAction, UnknownVariant};

/// Table an audit entry refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEntity {
    User,
    Product,
    RawMaterial,
    Request,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Product => "PRODUCT",
            Self::RawMaterial => "RAW_MATERIAL",
            Self::Request => "REQUEST",
        }
    }
}

impl fmt::Display for AuditEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditEntity {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Self::User),
            "PRODUCT" => Ok(Self::Product),
            "RAW_MATERIAL" => Ok(Self::RawMaterial),
            "REQUEST" => Ok(Self::Request),
            other => Err(UnknownVariant {
                enumeration: "AuditEntity",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryDto {
    pub id: i32,
    pub user_id: i32,
    pub action: AuditAction,
    pub entity_type: AuditEntity,
    pub entity_id: i32,
    #[schema(value_type = Option<Object>)]
    pub details: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuditListParams {
    /// Maximum entries to return, newest first (default 100, max 500)
    pub limit: Option<u64>,
}
