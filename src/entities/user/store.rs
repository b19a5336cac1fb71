//! User store: the directory that purchase requests and demands resolve
//! their `user` references against

use super::model::{User, UserPayload};
use crate::core::{DataService, PharmacyResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserStore {
    data: Arc<dyn DataService<User>>,
}

impl UserStore {
    pub fn new(data: Arc<dyn DataService<User>>) -> Self {
        Self { data }
    }

    /// Register a user
    ///
    /// Usernames are the user table's unique key; the backend rejects a taken
    /// one with `EntityError::AlreadyExists`.
    pub async fn create(&self, payload: UserPayload) -> PharmacyResult<User> {
        let fields = payload.into_fields()?;
        let user = self.data.create(fields).await?;
        tracing::info!(id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn get(&self, id: i64) -> PharmacyResult<User> {
        self.data.fetch(id).await
    }

    pub async fn list(&self) -> PharmacyResult<Vec<User>> {
        self.data.list().await
    }

    pub async fn exists(&self, id: i64) -> PharmacyResult<bool> {
        self.data.exists(id).await
    }
}
