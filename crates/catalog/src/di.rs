use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    repository::{command::ProductCommandRepository, query::ProductQueryRepository},
    service::{command::ProductCommandService, query::ProductQueryService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let command_repo = Arc::new(ProductCommandRepository::new(pool));

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(query_repo));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(command_repo));

        Self {
            product_query,
            product_command,
        }
    }
}
