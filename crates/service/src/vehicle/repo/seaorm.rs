use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::{NotSet, Set, Unchanged}, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use models::{vehicle, Vehicle, VehicleFields};

use crate::errors::ServiceError;
use crate::vehicle::repository::VehicleRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmVehicleRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn insert(&self, fields: VehicleFields) -> Result<Vehicle, ServiceError> {
        let am = vehicle::ActiveModel {
            id: NotSet,
            year: Set(fields.year),
            make: Set(fields.make),
            model: Set(fields.model),
        };
        am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, v: Vehicle) -> Result<Vehicle, ServiceError> {
        let id = v.id;
        let am = vehicle::ActiveModel {
            id: Unchanged(v.id),
            year: Set(v.year),
            make: Set(v.make),
            model: Set(v.model),
        };
        am.update(&self.db).await.map_err(|e| match e {
            // Row vanished between the existence check and the write.
            DbErr::RecordNotUpdated => ServiceError::NotFound(id),
            other => ServiceError::Db(other.to_string()),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, ServiceError> {
        vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<Vehicle>, ServiceError> {
        vehicle::Entity::find()
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        vehicle::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}
