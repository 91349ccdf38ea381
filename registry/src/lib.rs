use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::event_access::EventAccessRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::access::resolver::AccessResolver;
use kernel::repository::event_access::EventAccessRepository;
use kernel::repository::user::UserRepository;

#[derive(Clone)]
pub struct AppRegistry {
    event_access_repository: Arc<dyn EventAccessRepository>,
    user_repository: Arc<dyn UserRepository>,
    access_resolver: AccessResolver,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let event_access_repository: Arc<dyn EventAccessRepository> =
            Arc::new(EventAccessRepositoryImpl::new(pool.clone()));
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(pool.clone()));
        let access_resolver =
            AccessResolver::new(event_access_repository.clone(), user_repository.clone());
        Self {
            event_access_repository,
            user_repository,
            access_resolver,
        }
    }

    pub fn event_access_repository(&self) -> Arc<dyn EventAccessRepository> {
        self.event_access_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn access_resolver(&self) -> AccessResolver {
        self.access_resolver.clone()
    }
}
