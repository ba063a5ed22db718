use sqlx::PgPool;
use wallet_store::{Error, Result, StorageTransaction, WalletRecord};

/// PostgreSQL-backed WalletStorage.  Balance mutations serialize per wallet row via
/// `SELECT ... FOR UPDATE`; reads and operations on different wallet ids don't contend.
#[derive(Clone)]
pub struct WalletStoragePostgres {
    pg_pool: PgPool,
}

impl WalletStoragePostgres {
    pub async fn open_and_run_migrations(pg_pool: PgPool) -> Result<Self> {
        sqlx::migrate!().run(&pg_pool).await.map_err(|err| {
            Error::StorageError(
                format!(
                    "Failed to run PostgreSQL database migrations; error was: {}",
                    err
                )
                .into(),
            )
        })?;
        Ok(Self { pg_pool })
    }

    /// Lock-check-update sequence for update_balance.  Must run inside a transaction so
    /// that the row lock taken by `FOR UPDATE` is held until commit or rollback.
    async fn update_balance_in_transaction(
        transaction: &mut sqlx::Transaction<'static, sqlx::Postgres>,
        wallet_id: &uuid::Uuid,
        delta: i64,
    ) -> Result<i64> {
        let balance_o: Option<i64> =
            sqlx::query_scalar("SELECT balance FROM wallets WHERE id = $1 FOR UPDATE")
                .bind(wallet_id)
                .fetch_optional(transaction.as_mut())
                .await?;
        let balance = balance_o.ok_or(Error::WalletNotFound(*wallet_id))?;
        let new_balance = balance
            .checked_add(delta)
            .ok_or(Error::StorageError("balance arithmetic overflow".into()))?;
        if new_balance < 0 {
            return Err(Error::NotEnoughBalance(*wallet_id));
        }
        sqlx::query("UPDATE wallets SET balance = $1 WHERE id = $2")
            .bind(new_balance)
            .bind(wallet_id)
            .execute(transaction.as_mut())
            .await?;
        Ok(new_balance)
    }
}

#[async_trait::async_trait]
impl wallet_store::WalletStorage for WalletStoragePostgres {
    async fn begin_transaction(&self) -> Result<Box<dyn StorageTransaction>> {
        Ok(Box::new(self.pg_pool.begin().await?))
    }
    async fn create_wallet(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_record: &WalletRecord,
    ) -> Result<()> {
        let query = sqlx::query(
            "INSERT INTO wallets(id, balance) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        )
        .bind(wallet_record.wallet_id)
        .bind(wallet_record.balance);
        if let Some(transaction) = transaction_o {
            query
                .execute(
                    transaction
                        .as_any_mut()
                        .downcast_mut::<sqlx::Transaction<'static, sqlx::Postgres>>()
                        .unwrap()
                        .as_mut(),
                )
                .await?;
        } else {
            query.execute(&self.pg_pool).await?;
        }
        Ok(())
    }
    async fn get_wallet_record(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
    ) -> Result<Option<WalletRecord>> {
        let query = sqlx::query_as::<_, (uuid::Uuid, i64)>(
            "SELECT id, balance FROM wallets WHERE id = $1",
        )
        .bind(wallet_id);
        let row_o = if let Some(transaction) = transaction_o {
            query
                .fetch_optional(
                    transaction
                        .as_any_mut()
                        .downcast_mut::<sqlx::Transaction<'static, sqlx::Postgres>>()
                        .unwrap()
                        .as_mut(),
                )
                .await?
        } else {
            query.fetch_optional(&self.pg_pool).await?
        };
        Ok(row_o.map(|(wallet_id, balance)| WalletRecord { wallet_id, balance }))
    }
    async fn update_balance(
        &self,
        transaction_o: Option<&mut dyn StorageTransaction>,
        wallet_id: &uuid::Uuid,
        delta: i64,
    ) -> Result<i64> {
        if let Some(transaction) = transaction_o {
            let transaction = transaction
                .as_any_mut()
                .downcast_mut::<sqlx::Transaction<'static, sqlx::Postgres>>()
                .unwrap();
            Self::update_balance_in_transaction(transaction, wallet_id, delta).await
        } else {
            // No transaction was supplied, so run the lock-check-update sequence in one
            // of our own.  Dropping the transaction without committing rolls it back.
            let mut transaction = self.pg_pool.begin().await?;
            let new_balance =
                Self::update_balance_in_transaction(&mut transaction, wallet_id, delta).await?;
            transaction.commit().await?;
            Ok(new_balance)
        }
    }
}
