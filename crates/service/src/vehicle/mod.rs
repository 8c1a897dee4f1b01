//! Vehicle module: domain rules (filter), storage abstraction (repository),
//! storage backends (repo), and the application service.

pub mod filter;
pub mod repository;
pub mod repo;
pub mod service;

pub use filter::VehicleFilter;
pub use repository::VehicleRepository;
pub use service::VehicleService;
