use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductDraft};
use business::domain::product::repository::ProductRepository;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => RepositoryError::DatabaseError,
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn list(
        &self,
        page: u32,
        size: u32,
        name: Option<String>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let limit = i64::from(size);
        let offset = i64::from(page) * limit;

        let entities = match name {
            Some(name) => {
                sqlx::query_as::<_, ProductEntity>(
                    "SELECT id, code, name, price_eur, description, is_available FROM products WHERE name ILIKE '%' || $1 || '%' ORDER BY id LIMIT $2 OFFSET $3",
                )
                .bind(name)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ProductEntity>(
                    "SELECT id, code, name, price_eur, description, is_available FROM products ORDER BY id LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, code, name, price_eur, description, is_available FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (code, name, price_eur, description, is_available)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, code, name, price_eur, description, is_available"#,
        )
        .bind(&draft.code)
        .bind(&draft.name)
        .bind(&draft.price_eur)
        .bind(&draft.description)
        .bind(draft.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                code = $2,
                name = $3,
                price_eur = $4,
                description = $5,
                is_available = $6
            WHERE id = $1
            RETURNING id, code, name, price_eur, description, is_available"#,
        )
        .bind(id)
        .bind(&draft.code)
        .bind(&draft.name)
        .bind(&draft.price_eur)
        .bind(&draft.description)
        .bind(draft.is_available)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
