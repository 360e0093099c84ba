//! API data transfer objects and domain enumerations shared by the server and its clients.

pub mod api;
pub mod audit;
pub mod constants;
pub mod dashboard;
pub mod product;
pub mod raw_material;
pub mod request;
pub mod user;
