//! User entity model and schemas.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::Entity;

/// A registered customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Globally unique; a duplicate insert fails at commit time.
    pub email: String,
    /// Stored and returned as-is. There is no auth subsystem here.
    pub password: String,
}

/// Data required to create a user. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[async_trait]
impl Entity for User {
    type Create = CreateUser;
    type Update = UpdateUser;

    const TABLE: &'static str = "users";
    const NAME: &'static str = "User";

    async fn insert(pool: &SqlitePool, input: CreateUser) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO users (first_name, last_name, email, password) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.password)
        .fetch_one(pool)
        .await
    }

    fn merge(&mut self, input: UpdateUser) {
        if let Some(first_name) = input.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = input.email {
            self.email = email;
        }
        if let Some(password) = input.password {
            self.password = password;
        }
    }

    async fn save(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(
            "UPDATE users SET first_name = ?, last_name = ?, email = ?, password = ? \
             WHERE id = ?",
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.password)
        .bind(self.id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
