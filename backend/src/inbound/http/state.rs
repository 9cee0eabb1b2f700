//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and only depend on
//! the driving ports, so they stay testable without touching the disk.

use std::sync::Arc;

use crate::domain::UsersService;
use crate::domain::ports::{UserStore, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-only user operations.
    pub users: Arc<dyn UsersQuery>,
    /// User mutations.
    pub user_commands: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Bundle explicit port implementations.
    pub fn new(users: Arc<dyn UsersQuery>, user_commands: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            user_commands,
        }
    }

    /// Wire both ports to a single [`UsersService`] over `store`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use users_service::inbound::http::state::HttpState;
    /// use users_service::outbound::persistence::InMemoryUserStore;
    ///
    /// let state = HttpState::from_store(Arc::new(InMemoryUserStore::default()));
    /// # drop(state);
    /// ```
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserStore + 'static,
    {
        let service = Arc::new(UsersService::new(store));
        Self::new(service.clone(), service)
    }
}
