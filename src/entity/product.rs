//! Product entity model and schemas.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::Entity;

/// An item in the catalog. Price is an integer in minor currency units.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

#[async_trait]
impl Entity for Product {
    type Create = CreateProduct;
    type Update = UpdateProduct;

    const TABLE: &'static str = "products";
    const NAME: &'static str = "Product";

    async fn insert(pool: &SqlitePool, input: CreateProduct) -> sqlx::Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO products (name, description, price) \
             VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .fetch_one(pool)
        .await
    }

    fn merge(&mut self, input: UpdateProduct) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
    }

    async fn save(&self, pool: &SqlitePool) -> sqlx::Result<()> {
        sqlx::query("UPDATE products SET name = ?, description = ?, price = ? WHERE id = ?")
            .bind(&self.name)
            .bind(&self.description)
            .bind(self.price)
            .bind(self.id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
