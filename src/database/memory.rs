use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::manager::DatabaseError;
use super::repository::{HealthCheck, SkillRepository, UserRepository, UserStatus};

/// In-process store for tests and local runs without Postgres
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<i64, UserStatus>>>,
    skills: Arc<RwLock<HashSet<(i64, i64)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, id: i64, email: impl Into<String>, is_active: bool) {
        let user = UserStatus { id, email: email.into(), is_active };
        self.users.write().await.insert(id, user);
    }

    pub async fn user(&self, id: i64) -> Option<UserStatus> {
        self.users.read().await.get(&id).cloned()
    }

    pub async fn grant_skill(&self, user_id: i64, skill_id: i64) {
        self.skills.write().await.insert((user_id, skill_id));
    }

    pub async fn has_skill(&self, user_id: i64, skill_id: i64) -> bool {
        self.skills.read().await.contains(&(user_id, skill_id))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<UserStatus>, DatabaseError> {
        let mut users = self.users.write().await;
        Ok(users.get_mut(&id).map(|user| {
            user.is_active = is_active;
            user.clone()
        }))
    }
}

#[async_trait]
impl SkillRepository for MemoryStore {
    async fn delete_owned(&self, user_id: i64, skill_id: i64) -> Result<bool, DatabaseError> {
        Ok(self.skills.write().await.remove(&(user_id, skill_id)))
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
