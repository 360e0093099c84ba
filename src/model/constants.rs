//! Domain enumerations.
//!
//! Every enumeration here is a closed set of string tags. The database stores the tag
//! strings and the `entity` crate treats them as plain text, so regenerating entities or
//! swapping the ORM never changes which values are valid. Code that only needs the values
//! imports them from this module.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names of the enumerations defined in this module.
///
/// Used by the import rewriter to decide which symbols belong to the constants module
/// rather than the ORM client.
pub const ENUM_NAMES: &[&str] = &[
    "Role",
    "ProductCategory",
    "SizeFormat",
    "MaterialCategory",
    "MaterialUnit",
    "RequestStatus",
    "AuditAction",
];

/// A string did not match any tag of the named enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value:?} is not a valid {enumeration}")]
pub struct UnknownVariant {
    pub enumeration: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $tag)] $variant,)+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The tag stored in the database and sent over the API.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        enumeration: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Access level of a user account.
    pub enum Role {
        Admin => "ADMIN",
        Staff => "STAFF",
    }
}

string_enum! {
    pub enum ProductCategory {
        BlackTea => "BLACK_TEA",
        GreenTea => "GREEN_TEA",
        OolongTea => "OOLONG_TEA",
        WhiteTea => "WHITE_TEA",
        HerbalTea => "HERBAL_TEA",
        Blend => "BLEND",
    }
}

string_enum! {
    /// Packaging format a product is sold in.
    pub enum SizeFormat {
        LooseLeaf => "LOOSE_LEAF",
        TeaBags => "TEA_BAGS",
        Tin => "TIN",
        Sample => "SAMPLE",
        Bulk => "BULK",
    }
}

string_enum! {
    pub enum MaterialCategory {
        TeaLeaf => "TEA_LEAF",
        Herb => "HERB",
        Flavoring => "FLAVORING",
        Packaging => "PACKAGING",
        Label => "LABEL",
        Other => "OTHER",
    }
}

string_enum! {
    /// Unit a raw material count is tracked in.
    pub enum MaterialUnit {
        Gram => "GRAM",
        Kilogram => "KILOGRAM",
        Piece => "PIECE",
        Roll => "ROLL",
        Box => "BOX",
        Bag => "BAG",
    }
}

string_enum! {
    /// Lifecycle state of a stock request. Requests start `Pending` and are reviewed
    /// exactly once.
    pub enum RequestStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

string_enum! {
    /// Kind of state change recorded in the audit log.
    pub enum AuditAction {
        Create => "CREATE",
        Update => "UPDATE",
        Approve => "APPROVE",
        Reject => "REJECT",
        Login => "LOGIN",
        Logout => "LOGOUT",
    }
}
