use async_trait::async_trait;
use models::{Vehicle, VehicleFields};

use crate::errors::ServiceError;

/// Storage collaborator for vehicle records, keyed by integer id.
#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Persist a new record; the store assigns the id.
    async fn insert(&self, fields: VehicleFields) -> Result<Vehicle, ServiceError>;
    /// Overwrite the stored row with the same id; `NotFound` if it is gone.
    async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, ServiceError>;
    /// All records in ascending id order.
    async fn find_all(&self) -> Result<Vec<Vehicle>, ServiceError>;
    /// Removing an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// In-memory repository for tests and local runs without a database.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i32, Vehicle>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryVehicleRepository {
        inner: RwLock<Inner>,
    }

    impl InMemoryVehicleRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed with existing records; new inserts continue after the highest id.
        pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
            let mut inner = Inner::default();
            for v in vehicles {
                inner.last_id = inner.last_id.max(v.id);
                inner.rows.insert(v.id, v);
            }
            Self { inner: RwLock::new(inner) }
        }
    }

    #[async_trait]
    impl VehicleRepository for InMemoryVehicleRepository {
        async fn insert(&self, fields: VehicleFields) -> Result<Vehicle, ServiceError> {
            let mut inner = self.inner.write().await;
            let id = inner
                .last_id
                .checked_add(1)
                .ok_or_else(|| ServiceError::Db("vehicle id space exhausted".into()))?;
            inner.last_id = id;
            let vehicle = Vehicle { id, year: fields.year, make: fields.make, model: fields.model };
            inner.rows.insert(vehicle.id, vehicle.clone());
            Ok(vehicle)
        }

        async fn save(&self, vehicle: Vehicle) -> Result<Vehicle, ServiceError> {
            let mut inner = self.inner.write().await;
            match inner.rows.get_mut(&vehicle.id) {
                Some(row) => {
                    *row = vehicle.clone();
                    Ok(vehicle)
                }
                None => Err(ServiceError::NotFound(vehicle.id)),
            }
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Vehicle>, ServiceError> {
            let inner = self.inner.read().await;
            Ok(inner.rows.values().cloned().collect())
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            let mut inner = self.inner.write().await;
            inner.rows.remove(&id);
            Ok(())
        }
    }

}
