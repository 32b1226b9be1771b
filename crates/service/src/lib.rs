//! Service layer for the pizza restaurants API.
//! - `db` holds the SeaORM queries and transactional units of work.
//! - `pizzeria` exposes the repository seam, the business service and the response projections.
//! - `seed` loads the fixed demo data set.

pub mod errors;
pub mod db;
pub mod pizzeria;
pub mod seed;
#[cfg(test)]
pub mod test_support;
