//! PostgreSQL customer store
//!
//! Queries are checked at runtime (`query_as` with `FromRow`), so the crate
//! builds without a live database.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{CustomerFilter, CustomerStore, StoreResult};
use crate::db;
use crate::models::{Customer, CustomerPatch, NewCustomer};

const CUSTOMER_COLUMNS: &str =
    "id, first_name, last_name, email, phone, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgCustomerStore {
    pool: PgPool,
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    #[tracing::instrument(skip(self))]
    async fn find(&self, filter: &CustomerFilter) -> StoreResult<Vec<Customer>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {CUSTOMER_COLUMNS} FROM customers"));

        for (i, (column, value)) in filter.conditions().into_iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            builder.push(column).push(" = ").push_bind(value.to_string());
        }
        builder.push(" ORDER BY created_at, id");

        let customers = builder
            .build_query_as::<Customer>()
            .fetch_all(&self.pool)
            .await?;

        Ok(customers)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    #[tracing::instrument(skip(self, customer), fields(email = %customer.email))]
    async fn insert(&self, customer: NewCustomer) -> StoreResult<Customer> {
        let created = sqlx::query_as::<_, Customer>(&format!(
            r#"
            INSERT INTO customers (id, first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(customer.first_name)
        .bind(customer.last_name)
        .bind(customer.email)
        .bind(customer.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id_and_update(&self, id: Uuid, patch: &CustomerPatch) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.first_name.as_deref())
        .bind(patch.last_name.as_deref())
        .bind(patch.email.as_deref())
        .bind(patch.phone.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        db::health_check(&self.pool).await?;
        Ok(())
    }
}
