//! Service layer for the vehicle registry.
//! - Separates business rules (validation, filtering, update policy) from data access.
//! - Reuses entity definitions and field validation from the `models` crate.
//! - Storage is reached only through [`vehicle::repository::VehicleRepository`].

pub mod errors;
pub mod vehicle;
#[cfg(test)]
pub mod test_support;
