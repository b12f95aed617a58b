//! Shared application state.

use barista_core::{ConsumptionAnalyzer, MenuService, OrderService};
use barista_db::Database;

/// State handed to every handler. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }

    pub fn menu(&self) -> MenuService<Database> {
        MenuService::new(self.db.clone())
    }

    pub fn orders(&self) -> OrderService<Database> {
        OrderService::new(self.db.clone())
    }

    pub fn consumption(&self) -> ConsumptionAnalyzer<Database> {
        ConsumptionAnalyzer::new(self.db.clone())
    }
}
