use crate::database::MemoryDatabase;
use crate::models::fuel_entry::{CreateFuelEntryRequest, UpdateFuelEntryRequest};
use crate::models::FuelEntry;
use crate::repositories::RecordFilter;
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDate;
use uuid::Uuid;

pub struct FuelRepository {
    db: MemoryDatabase,
}

impl FuelRepository {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: CreateFuelEntryRequest, today: NaiveDate) -> Result<FuelEntry, AppError> {
        let mut tables = self.db.write().await;

        if !tables.vehicle_exists(request.car_id) {
            return Err(not_found_error("Car", &request.car_id.to_string()));
        }

        let entry = FuelEntry {
            id: Uuid::new_v4(),
            car_id: request.car_id,
            date: request.date.unwrap_or(today),
            liters: request.liters,
            cost_per_liter: request.cost_per_liter,
            // El total se guarda tal cual; solo se calcula si no viene
            total_cost: request
                .total_cost
                .unwrap_or(request.liters * request.cost_per_liter),
            mileage: request.mileage,
            fuel_type: request
                .fuel_type
                .map(|f| f.trim().to_string())
                .unwrap_or_else(|| "Regular".to_string()),
        };

        tables.fuel_entries.push(entry.clone());
        Ok(entry)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FuelEntry>, AppError> {
        let tables = self.db.read().await;
        Ok(tables.fuel_entries.iter().find(|f| f.id == id).cloned())
    }

    /// Repostajes que cumplen el filtro, del más reciente al más antiguo
    pub async fn list(&self, filter: &RecordFilter) -> Result<Vec<FuelEntry>, AppError> {
        let mut entries: Vec<FuelEntry> = {
            let tables = self.db.read().await;
            tables
                .fuel_entries
                .iter()
                .filter(|f| filter.matches(f.car_id, f.date))
                .cloned()
                .collect()
        };
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    pub async fn update(&self, id: Uuid, request: UpdateFuelEntryRequest) -> Result<FuelEntry, AppError> {
        let mut tables = self.db.write().await;
        let entry = tables
            .fuel_entries
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| not_found_error("Fuel entry", &id.to_string()))?;

        if let Some(date) = request.date {
            entry.date = date;
        }
        if let Some(liters) = request.liters {
            entry.liters = liters;
        }
        if let Some(cost_per_liter) = request.cost_per_liter {
            entry.cost_per_liter = cost_per_liter;
        }
        if let Some(total_cost) = request.total_cost {
            entry.total_cost = total_cost;
        }
        if let Some(mileage) = request.mileage {
            entry.mileage = mileage;
        }
        if let Some(fuel_type) = request.fuel_type {
            entry.fuel_type = fuel_type.trim().to_string();
        }

        Ok(entry.clone())
    }

    /// Cambia el costo total del repostaje
    pub async fn update_cost(&self, id: Uuid, total_cost: f64) -> Result<FuelEntry, AppError> {
        self.update(
            id,
            UpdateFuelEntryRequest {
                total_cost: Some(total_cost),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_liters(&self, id: Uuid, liters: f64) -> Result<FuelEntry, AppError> {
        self.update(
            id,
            UpdateFuelEntryRequest {
                liters: Some(liters),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut tables = self.db.write().await;
        let before = tables.fuel_entries.len();
        tables.fuel_entries.retain(|f| f.id != id);
        if tables.fuel_entries.len() == before {
            return Err(not_found_error("Fuel entry", &id.to_string()));
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
    async fn test_create_computes_missing_total() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let car_id = db.read().await.vehicles[0].id;
        let repository = FuelRepository::new(db);

        let entry = repository
            .create(
                CreateFuelEntryRequest {
                    car_id,
                    date: None,
                    liters: 40.0,
                    cost_per_liter: 1.5,
                    total_cost: None,
                    mileage: 45400,
                    fuel_type: None,
                },
                date(2024, 1, 20),
            )
            .await
            .unwrap();

        assert_eq!(entry.total_cost, 60.0);
        assert_eq!(entry.date, date(2024, 1, 20));
        assert_eq!(entry.fuel_type, "Regular");
    }

    #[tokio::test]
    async fn test_create_keeps_given_total() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let car_id = db.read().await.vehicles[0].id;
        let repository = FuelRepository::new(db);

        let entry = repository
            .create(
                CreateFuelEntryRequest {
                    car_id,
                    date: Some(date(2024, 1, 21)),
                    liters: 40.0,
                    cost_per_liter: 1.5,
                    total_cost: Some(59.99),
                    mileage: 45400,
                    fuel_type: Some("Premium".to_string()),
                },
                date(2024, 1, 20),
            )
            .await
            .unwrap();

        assert_eq!(entry.total_cost, 59.99);
        assert_eq!(entry.fuel_type, "Premium");
    }

    #[tokio::test]
    async fn test_single_field_edits() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let entry_id = db.read().await.fuel_entries[0].id;
        let repository = FuelRepository::new(db);

        assert_eq!(repository.update_cost(entry_id, 50.0).await.unwrap().total_cost, 50.0);
        let updated = repository.update_liters(entry_id, 41.0).await.unwrap();
        assert_eq!(updated.liters, 41.0);
        assert_eq!(updated.total_cost, 50.0);

        let missing = repository.update_cost(Uuid::new_v4(), 1.0).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_vehicle_and_delete() {
        let db = MemoryDatabase::with_tables(demo_tables());
        let civic = db.read().await.vehicles[1].id;
        let repository = FuelRepository::new(db);

        let entries = repository.list(&RecordFilter::for_vehicle(Some(civic))).await.unwrap();
        assert_eq!(entries.len(), 1);

        repository.delete(entries[0].id).await.unwrap();
        assert!(repository.list(&RecordFilter::for_vehicle(Some(civic))).await.unwrap().is_empty());
    }
}
