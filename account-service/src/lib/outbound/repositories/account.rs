use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::NewAccount;
use crate::domain::account::ports::AccountRepository;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password: String,
    access_token: Option<String>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: AccountId(row.id),
            name: row.name,
            email: row.email,
            password: row.password,
            access_token: row.access_token,
        }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn add(&self, account: NewAccount) -> Result<Account, AccountError> {
        let id = AccountId::new();

        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(id.0)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("accounts_email_key")
                {
                    return AccountError::EmailAlreadyExists(account.email.clone());
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(Account {
            id,
            name: account.name,
            email: account.email,
            password: account.password,
            access_token: None,
        })
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, email, password, access_token
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok(row.map(Account::from))
    }

    async fn update_access_token(
        &self,
        id: &AccountId,
        access_token: &str,
    ) -> Result<(), AccountError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET access_token = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(access_token)
        .execute(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
