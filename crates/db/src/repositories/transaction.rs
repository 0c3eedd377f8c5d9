//! Transaction repository: the ledger store over SQLite.
//!
//! Deletion is logical. Every read, range and sum excludes rows whose
//! `deleted_at` is set.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, sea_query::Expr,
};

use dompet_core::ledger::{
    DateField, Entry, EntryId, LedgerError, LedgerStore, NewEntry, RangeQuery, SortDirection,
    SortField, SortOrder, SumQuery,
};

use crate::entities::transactions;

/// Ledger store backed by the `transactions` table.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rows that have not been deleted.
    fn live() -> Select<transactions::Entity> {
        transactions::Entity::find().filter(transactions::Column::DeletedAt.is_null())
    }

    async fn find_live(&self, id: EntryId) -> Result<transactions::Model, LedgerError> {
        Self::live()
            .filter(transactions::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(storage_error)?
            .ok_or(LedgerError::NotFound(id))
    }

    async fn fetch(&self, select: Select<transactions::Entity>) -> Result<Vec<Entry>, LedgerError> {
        select
            .all(&self.db)
            .await
            .map_err(storage_error)?
            .into_iter()
            .map(into_entry)
            .collect()
    }
}

#[async_trait]
impl LedgerStore for TransactionRepository {
    async fn insert(&self, entry: NewEntry) -> Result<Entry, LedgerError> {
        let now = Utc::now();

        let model = transactions::ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            name: Set(entry.name),
            purpose: Set(entry.purpose),
            category: Set(entry.category),
            amount: Set(entry.amount),
            entry_type: Set(entry.entry_type.as_str().to_string()),
            date_string: Set(entry.date_string),
            parsed_date: Set(entry.parsed_date),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(storage_error)?;
        into_entry(result)
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Entry, LedgerError> {
        into_entry(self.find_live(id).await?)
    }

    async fn list_all(&self, order: SortOrder) -> Result<Vec<Entry>, LedgerError> {
        self.fetch(ordered(Self::live(), order)).await
    }

    async fn range(&self, query: RangeQuery) -> Result<Vec<Entry>, LedgerError> {
        let column = match query.field {
            DateField::ParsedDate => transactions::Column::ParsedDate,
            DateField::CreatedAt => transactions::Column::CreatedAt,
        };

        let mut select = Self::live()
            .filter(column.gte(query.range.start))
            .filter(column.lt(query.range.end));
        if let Some(entry_type) = query.entry_type {
            select = select.filter(transactions::Column::EntryType.eq(entry_type.as_str()));
        }

        self.fetch(ordered(select, query.order)).await
    }

    async fn sum_amount(&self, query: SumQuery) -> Result<Decimal, LedgerError> {
        let mut select = Self::live()
            .select_only()
            .column_as(Expr::col(transactions::Column::Amount).sum(), "total");
        if let Some(entry_type) = query.entry_type {
            select = select.filter(transactions::Column::EntryType.eq(entry_type.as_str()));
        }
        if let Some(range) = query.range {
            select = select
                .filter(transactions::Column::ParsedDate.gte(range.start))
                .filter(transactions::Column::ParsedDate.lt(range.end));
        }

        // SUM over no rows is NULL.
        let total: Option<Option<Decimal>> = select
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(storage_error)?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }

    async fn update(&self, entry: Entry) -> Result<Entry, LedgerError> {
        let existing = self.find_live(entry.id).await?;
        let mut model: transactions::ActiveModel = existing.into();

        model.name = Set(entry.name);
        model.purpose = Set(entry.purpose);
        model.category = Set(entry.category);
        model.amount = Set(entry.amount);
        model.entry_type = Set(entry.entry_type.as_str().to_string());
        model.date_string = Set(entry.date_string);
        model.parsed_date = Set(entry.parsed_date);
        model.updated_at = Set(Utc::now());

        let result = model.update(&self.db).await.map_err(storage_error)?;
        into_entry(result)
    }

    async fn delete(&self, id: EntryId) -> Result<(), LedgerError> {
        let existing = self.find_live(id).await?;
        let mut model: transactions::ActiveModel = existing.into();

        model.deleted_at = Set(Some(Utc::now()));
        model.update(&self.db).await.map_err(storage_error)?;

        Ok(())
    }
}

/// Applies a total order: the sort column, then id in the same direction.
fn ordered(select: Select<transactions::Entity>, order: SortOrder) -> Select<transactions::Entity> {
    let column = match order.field {
        SortField::DateString => transactions::Column::DateString,
        SortField::ParsedDate => transactions::Column::ParsedDate,
        SortField::CreatedAt => transactions::Column::CreatedAt,
    };
    let direction = match order.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    select
        .order_by(column, direction.clone())
        .order_by(transactions::Column::Id, direction)
}

fn into_entry(model: transactions::Model) -> Result<Entry, LedgerError> {
    let entry_type = model.entry_type.parse().map_err(|_| {
        LedgerError::Storage(format!(
            "invalid entry type {:?} stored for id {}",
            model.entry_type, model.id
        ))
    })?;

    Ok(Entry {
        id: model.id,
        created_at: model.created_at,
        updated_at: model.updated_at,
        deleted_at: model.deleted_at,
        name: model.name,
        purpose: model.purpose,
        category: model.category,
        amount: model.amount,
        entry_type,
        date_string: model.date_string,
        parsed_date: model.parsed_date,
    })
}

#[allow(clippy::needless_pass_by_value)]
fn storage_error(err: DbErr) -> LedgerError {
    LedgerError::Storage(err.to_string())
}
