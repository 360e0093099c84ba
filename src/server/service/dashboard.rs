use sea_orm::DatabaseConnection;

use crate::{
    model::{constants::RequestStatus, dashboard::DashboardStatsDto},
    server::{
        data::{
            product::ProductRepository, raw_material::RawMaterialRepository,
            request::RequestRepository,
        },
        error::Error,
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn stats(&self) -> Result<DashboardStatsDto, Error> {
        let raw_material_repository = RawMaterialRepository::new(self.db);
        let request_repository = RequestRepository::new(self.db);

        Ok(DashboardStatsDto {
            total_products: ProductRepository::new(self.db).count().await?,
            total_raw_materials: raw_material_repository.count().await?,
            total_requests: request_repository.count().await?,
            pending_requests: request_repository
                .count_by_status(RequestStatus::Pending)
                .await?,
            low_stock_count: raw_material_repository.count_low_stock().await?,
        })
    }
}
