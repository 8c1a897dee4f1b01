pub mod errors;
pub mod db;
pub mod vehicle;

pub use vehicle::{Vehicle, VehicleFields, VehicleInput};
