//! Order entity model and schemas.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::Entity;

/// One purchase of one product by one user. `status` is a free-form
/// business state; the seeder uses "processed", "delivering" and
/// "delivered".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: NaiveDate,
    pub status: String,
}

/// Creation schema. `user_id` and `product_id` must reference existing
/// rows; the database rejects dangling references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateOrder {
    pub user_id: Option<i64>,
    pub product_id: Option<i64>,
    pub order_date: Option<NaiveDate>,
    pub status: Option<String>,
}

#[async_trait]
impl Entity for Order {
    type Create = CreateOrder;
    type Update = UpdateOrder;

    const TABLE: &'static str = "orders";
    const NAME: &'static str = "Order";

    async fn insert(pool: &SqlitePool, input: CreateOrder) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO orders (user_id, product_id, order_date, status) \
             VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(input.user_id)
        .bind(input.product_id)
        .bind(input.order_date)
        .bind(&input.status)
        .fetch_one(pool)
        .await
    }

    fn merge(&mut self, input: UpdateOrder) {
        if let Some(user_id) = input.user_id {
            self.user_id = user_id;
        }
        if let Some(product_id) = input.product_id {
            self.product_id = product_id;
        }
        if let Some(order_date) = input.order_date {
            self.order_date = order_date;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
    }

    async fn save(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query(
            "UPDATE orders SET user_id = ?, product_id = ?, order_date = ?, status = ? \
             WHERE id = ?",
        )
        .bind(self.user_id)
        .bind(self.product_id)
        .bind(self.order_date)
        .bind(&self.status)
        .bind(self.id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
