use std::sync::Arc;

use crate::auth::JwtKeys;
use crate::database::IntakeStore;

/// Shared router state, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn IntakeStore>,
    jwt: Arc<JwtKeys>,
}

impl AppState {
    pub fn new(store: Arc<dyn IntakeStore>, jwt: Arc<JwtKeys>) -> Self {
        Self { store, jwt }
    }

    pub fn store(&self) -> &dyn IntakeStore {
        self.store.as_ref()
    }

    pub fn jwt(&self) -> &JwtKeys {
        &self.jwt
    }
}
