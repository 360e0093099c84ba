//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, the way the router would call
//! them, against an in-memory database and session store.

mod audit;
mod dashboard;
mod health;
mod product;
mod raw_material;
mod request;

use tea_inventory_test_utils::prelude::*;

use crate::util::{anonymous, json_body, logged_in};
