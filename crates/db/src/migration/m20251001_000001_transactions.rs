//! Ledger schema.
//!
//! Creates the transactions table with its soft-delete column and the
//! indexes backing list ordering and date-range queries.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for statement in UP_SQL {
            db.execute_unprepared(statement).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS transactions;")
            .await?;
        Ok(())
    }
}

const UP_SQL: [&str; 3] = [
    // AUTOINCREMENT: ids are never reused, even after the highest row is removed.
    r"
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT,
    name TEXT NOT NULL DEFAULT '',
    purpose TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL DEFAULT '',
    amount REAL NOT NULL DEFAULT 0,
    entry_type TEXT NOT NULL CHECK (entry_type IN ('pemasukan', 'pengeluaran')),
    date_string TEXT NOT NULL,
    parsed_date TEXT NOT NULL
);
",
    r"
CREATE INDEX IF NOT EXISTS idx_transactions_parsed_date
    ON transactions(parsed_date) WHERE deleted_at IS NULL;
",
    r"
CREATE INDEX IF NOT EXISTS idx_transactions_date_string
    ON transactions(date_string DESC, id DESC) WHERE deleted_at IS NULL;
",
];
