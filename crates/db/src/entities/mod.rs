//! `SeaORM` entity definitions.

pub mod transactions;
