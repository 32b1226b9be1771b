pub mod domain;
pub mod repository;
pub mod service;

pub use domain::*;
pub use repository::{PizzeriaRepository, SeaOrmPizzeriaRepository};
pub use service::PizzeriaService;
