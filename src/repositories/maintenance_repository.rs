use crate::database::MemoryDatabase;
use crate::models::maintenance::{CreateMaintenanceRequest, MaintenanceFilters, UpdateMaintenanceRequest};
use crate::models::{MaintenanceRecord, MaintenanceStatus, ServiceType};
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct MaintenanceRepository {
    db: MemoryDatabase,
}

impl MaintenanceRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }

    /// Los registros nuevos siempre empiezan como `scheduled`
    pub async fn create(&self, request: CreateMaintenanceRequest, today: NaiveDate) -> Result<MaintenanceRecord, AppError> {
        let mut tables = self.db.write().await;

        if !tables.vehicle_exists(request.car_id) {
            return Err(not_found_error("Car", &request.car_id.to_string()));
        }

        let item = MaintenanceRecord {
            id: Uuid::new_v4(),
            car_id: request.car_id,
            title: request.title.trim().to_string(),
            description: request.description,
            date: request.date.unwrap_or(today),
            mileage: request.mileage,
            cost: request.cost.unwrap_or(0.0),
            status: MaintenanceStatus::Scheduled,
            service_type: request.service_type.unwrap_or(ServiceType::OilChange),
            next_due_mileage: request.next_due_mileage,
            next_due_date: request.next_due_date,
        };

        tables.maintenance.push(item.clone());
        Ok(item)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MaintenanceRecord>, AppError> {
        let tables = self.db.read().await;
        Ok(tables.maintenance.iter().find(|m| m.id == id).cloned())
    }

    /// Registros que cumplen el filtro, del más reciente al más antiguo
    pub async fn list(&self, filters: &MaintenanceFilters) -> Result<Vec<MaintenanceRecord>, AppError> {
        let mut items: Vec<MaintenanceRecord> = {
            let tables = self.db.read().await;
            tables
                .maintenance
                .iter()
                .filter(|m| filters.matches(m))
                .cloned()
                .collect()
        };
        items.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(items)
    }

    pub async fn update(&self, id: Uuid, request: UpdateMaintenanceRequest) -> Result<MaintenanceRecord, AppError> {
        let mut tables = self.db.write().await;
        let item = tables
            .maintenance
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| not_found_error("Maintenance item", &id.to_string()))?;

        if let Some(title) = request.title {
            item.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            item.description = description;
        }
        if let Some(date) = request.date {
            item.date = date;
        }
        if let Some(mileage) = request.mileage {
            item.mileage = mileage;
        }
        if let Some(cost) = request.cost {
            item.cost = cost;
        }
        if let Some(status) = request.status {
            item.status = status;
        }
        if let Some(service_type) = request.service_type {
            item.service_type = service_type;
        }
        if let Some(next_due_mileage) = request.next_due_mileage {
            item.next_due_mileage = Some(next_due_mileage);
        }
        if let Some(next_due_date) = request.next_due_date {
            item.next_due_date = Some(next_due_date);
        }

        Ok(item.clone())
    }

    pub async fn mark_completed(&self, id: Uuid) -> Result<MaintenanceRecord, AppError> {
        self.update(
            id,
            UpdateMaintenanceRequest {
                status: Some(MaintenanceStatus::Completed),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_cost(&self, id: Uuid, cost: f64) -> Result<MaintenanceRecord, AppError> {
        self.update(
            id,
            UpdateMaintenanceRequest {
                cost: Some(cost),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_mileage(&self, id: Uuid, mileage: u64) -> Result<MaintenanceRecord, AppError> {
        self.update(
            id,
            UpdateMaintenanceRequest {
                mileage: Some(mileage),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.db.write().await;
        let before = tables.maintenance.len();
        tables.maintenance.retain(|m| m.id != id);
        if tables.maintenance.len() == before {
            return Err(not_found_error("Maintenance item", &id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::demo_tables;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_starts_scheduled() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let car_id = db.read().await.vehicles[1].id;
        let repository = MaintenanceRepository::new(db);

        let item = repository
            .create(
                CreateMaintenanceRequest {
                    car_id,
                    title: "Inspection".to_string(),
                    description: String::new(),
                    date: None,
                    mileage: 32000,
                    cost: None,
                    service_type: Some(ServiceType::Inspection),
                    next_due_mileage: Some(40000),
                    next_due_date: None,
                },
                date(2024, 2, 1),
            )
            .await
            .unwrap();

        assert_eq!(item.status, MaintenanceStatus::Scheduled);
        assert_eq!(item.cost, 0.0);
        assert_eq!(item.date, date(2024, 2, 1));
    }

    #[tokio::test]
    async fn test_mark_completed_and_filters() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let repository = MaintenanceRepository::new(db);

        let scheduled = repository
            .list(&MaintenanceFilters {
                status: Some(MaintenanceStatus::Scheduled),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(scheduled.len(), 1);

        let completed = repository.mark_completed(scheduled[0].id).await.unwrap();
        assert_eq!(completed.status, MaintenanceStatus::Completed);

        let still_scheduled = repository
            .list(&MaintenanceFilters {
                status: Some(MaintenanceStatus::Scheduled),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(still_scheduled.is_empty());
    }

    #[tokio::test]
    async fn test_single_field_edits_and_delete() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let item_id = db.read().await.maintenance[0].id;
        let repository = MaintenanceRepository::new(db);

        assert_eq!(repository.update_cost(item_id, 55.0).await.unwrap().cost, 55.0);
        assert_eq!(repository.update_mileage(item_id, 45100).await.unwrap().mileage, 45100);

        repository.delete(item_id).await.unwrap();
        assert!(repository.find_by_id(item_id).await.unwrap().is_none());
        assert!(matches!(repository.mark_completed(item_id).await, Err(AppError::NotFound(_))));
    }
}
