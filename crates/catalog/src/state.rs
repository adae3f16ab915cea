use crate::di::DependenciesInject;
use anyhow::Result;
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Result<Self> {
        let di_container = DependenciesInject::new(pool);

        Ok(Self { di_container })
    }
}
