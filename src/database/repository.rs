use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use super::manager::{DatabaseError, DatabaseManager};

/// Account status row returned after a toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserStatus {
    pub id: i64,
    pub email: String,
    pub is_active: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Set a user's active flag. `None` when no such user exists.
    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<UserStatus>, DatabaseError>;
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Remove a skill from a user's profile. `false` when the user does
    /// not hold that skill.
    async fn delete_owned(&self, user_id: i64, skill_id: i64) -> Result<bool, DatabaseError>;
}

/// Store health, used by the `/health` endpoint
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;
}

// `users.id` may be SERIAL (INT4); the cast keeps the decoded column INT8 to match `UserStatus.id`.
const SET_ACTIVE_SQL: &str =
    "UPDATE users SET is_active = $1 WHERE id = $2 RETURNING id::bigint AS id, email, is_active";

const DELETE_OWNED_SKILL_SQL: &str = "DELETE FROM user_skills WHERE user_id = $1 AND skill_id = $2";

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgStore {
    async fn set_active(&self, id: i64, is_active: bool) -> Result<Option<UserStatus>, DatabaseError> {
        let row = sqlx::query_as::<_, UserStatus>(SET_ACTIVE_SQL)
            .bind(is_active)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl SkillRepository for PgStore {
    async fn delete_owned(&self, user_id: i64, skill_id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query(DELETE_OWNED_SKILL_SQL)
            .bind(user_id)
            .bind(skill_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl HealthCheck for PgStore {
    async fn ping(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
