use std::sync::Arc;

use models::errors::ValidationError;
use models::vehicle::validate;
use models::{Vehicle, VehicleInput};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::vehicle::filter::VehicleFilter;
use crate::vehicle::repository::VehicleRepository;

/// Application service encapsulating the vehicle business rules.
/// Validation runs before every write; the repository is only a store.
pub struct VehicleService<R: VehicleRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: VehicleRepository + ?Sized> VehicleService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and persist a new vehicle. Any id on the input is ignored.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use models::VehicleInput;
    /// use service::vehicle::{VehicleService, repository::memory::InMemoryVehicleRepository};
    /// let svc = VehicleService::new(Arc::new(InMemoryVehicleRepository::new()));
    /// let input = VehicleInput { id: None, year: 2000, make: Some("honda".into()), model: Some("civic".into()) };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(year = input.year))]
    pub async fn create(&self, input: VehicleInput) -> Result<Vehicle, ServiceError> {
        let fields = validate(&input)?;
        let created = self.repo.insert(fields).await?;
        info!(id = created.id, "vehicle created");
        Ok(created)
    }

    /// All vehicles narrowed by `filter`, in store order.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, ServiceError> {
        let all = self.repo.find_all().await?;
        let total = all.len();
        let matched = filter.apply(all);
        debug!(total, matched = matched.len(), "vehicles listed");
        Ok(matched)
    }

    pub async fn get(&self, id: i32) -> Result<Vehicle, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or(ServiceError::NotFound(id))
    }

    /// Overwrite year, make and model of an existing vehicle.
    ///
    /// The existence check runs before validation, so an unknown id reports
    /// `NotFound` even when the payload is also invalid.
    #[instrument(skip(self, input), fields(id = ?input.id))]
    pub async fn update(&self, input: VehicleInput) -> Result<Vehicle, ServiceError> {
        let id = input.id.ok_or(ValidationError::MissingId)?;
        let existing = self.get(id).await?;
        let fields = validate(&input)?;
        let updated = self.repo.save(fields.apply_to(existing)).await?;
        info!(id = updated.id, "vehicle updated");
        Ok(updated)
    }

    /// Delete by id without checking that the vehicle exists.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "vehicle deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_vehicles};
    use crate::vehicle::repo::seaorm::SeaOrmVehicleRepository;
    use crate::vehicle::repository::memory::InMemoryVehicleRepository;

    fn seeded() -> VehicleService<InMemoryVehicleRepository> {
        VehicleService::new(Arc::new(InMemoryVehicleRepository::with_vehicles(seed_vehicles())))
    }

    fn input(id: Option<i32>, year: i32, make: Option<&str>, model: Option<&str>) -> VehicleInput {
        VehicleInput { id, year, make: make.map(Into::into), model: model.map(Into::into) }
    }

    #[tokio::test]
    async fn create_rejects_invalid_fields_in_order() {
        let svc = VehicleService::new(Arc::new(InMemoryVehicleRepository::new()));
        let cases = [
            (input(None, 2000, None, Some("civic")), "Make or Model cannot be null"),
            (input(None, 2000, Some("honda"), None), "Make or Model cannot be null"),
            (input(None, 2000, Some(""), Some("civic")), "Make or Model cannot be empty"),
            (input(None, 2000, Some("honda"), Some("")), "Make or Model cannot be empty"),
            (input(None, 2051, Some("honda"), Some("civic")), "Year must be between 1950 and 2050"),
            (input(None, 1949, Some("honda"), Some("civic")), "Year must be between 1950 and 2050"),
        ];
        for (bad, msg) in cases {
            let err = svc.create(bad).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
            assert_eq!(err.to_string(), msg);
        }
        assert!(svc.list(&VehicleFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_persists_and_assigns_id() -> Result<(), ServiceError> {
        let svc = seeded();
        let created = svc.create(input(Some(99), 2000, Some("honda"), Some("civic"))).await?;
        assert_eq!(created.id, 5);
        assert_eq!(svc.get(5).await?, Vehicle { id: 5, year: 2000, make: "honda".into(), model: "civic".into() });
        assert!(matches!(svc.get(99).await, Err(ServiceError::NotFound(99))));

        svc.create(input(None, 1950, Some("a"), Some("b"))).await?;
        svc.create(input(None, 2050, Some("a"), Some("b"))).await?;
        Ok(())
    }

    #[tokio::test]
    async fn seeded_scenario() -> Result<(), ServiceError> {
        let svc = seeded();

        let all = svc.list(&VehicleFilter::default()).await?;
        assert_eq!(all, seed_vehicles());

        let hondas = svc.list(&VehicleFilter { make: Some("honda".into()), ..Default::default() }).await?;
        assert_eq!(hondas.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2]);

        let accords = svc.list(&VehicleFilter { model: Some("accord".into()), ..Default::default() }).await?;
        assert_eq!(accords.iter().map(|v| v.id).collect::<Vec<_>>(), vec![2]);

        let err = svc.get(1000).await.unwrap_err();
        assert_eq!(err.to_string(), "Vehicle with id 1000 is not present in the database");

        svc.delete(1).await?;
        assert!(matches!(svc.get(1).await, Err(ServiceError::NotFound(1))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_unknown_id_succeeds() -> Result<(), ServiceError> {
        let svc = seeded();
        svc.delete(1000).await?;
        assert_eq!(svc.list(&VehicleFilter::default()).await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() -> Result<(), ServiceError> {
        let svc = seeded();
        let updated = svc.update(input(Some(1), 2003, Some("Tesla"), Some("model X"))).await?;
        assert_eq!(updated, Vehicle { id: 1, year: 2003, make: "Tesla".into(), model: "model X".into() });
        assert_eq!(svc.get(1).await?, updated);
        assert_eq!(svc.list(&VehicleFilter::default()).await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn update_checks_existence_before_validation() {
        let svc = seeded();
        let err = svc.update(input(Some(1000), 1800, None, None)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(1000)));

        let err = svc.update(input(Some(1), 1800, Some("honda"), Some("civic"))).await.unwrap_err();
        assert_eq!(err.to_string(), "Year must be between 1950 and 2050");
        assert_eq!(svc.get(1).await.unwrap().year, 2000);
    }

    #[tokio::test]
    async fn update_without_id_is_rejected() {
        let svc = seeded();
        let err = svc.update(input(None, 2000, Some("honda"), Some("civic"))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ValidationError::MissingId)));
    }

    #[tokio::test]
    async fn service_over_seaorm_repository() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmVehicleRepository::new(get_db().await?));
        let svc = VehicleService::new(repo);
        for v in seed_vehicles() {
            svc.create(input(None, v.year, Some(v.make.as_str()), Some(v.model.as_str()))).await?;
        }

        let hondas = svc.list(&VehicleFilter { make: Some("honda".into()), ..Default::default() }).await?;
        assert_eq!(hondas.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 2]);

        svc.update(input(Some(2), 2004, Some("honda"), Some("accord"))).await?;
        assert_eq!(svc.get(2).await?.year, 2004);

        svc.delete(1).await?;
        assert!(matches!(svc.get(1).await, Err(ServiceError::NotFound(1))));
        Ok(())
    }
}
