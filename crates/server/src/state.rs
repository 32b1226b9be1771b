use sea_orm::DatabaseConnection;
use std::sync::Arc;

use service::pizzeria::{PizzeriaService, SeaOrmPizzeriaRepository};

/// Shared handler state; the only shared resource is the connection pool inside the repository.
#[derive(Clone)]
pub struct ServerState {
    pub pizzeria: PizzeriaService<SeaOrmPizzeriaRepository>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmPizzeriaRepository::new(db));
        Self { pizzeria: PizzeriaService::new(repo) }
    }
}
