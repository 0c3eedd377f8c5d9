//! Sample data seeder for Dompet development.
//!
//! Fills an empty ledger with a few months of income and expenses so the
//! summary endpoints have something to show. A ledger that already holds
//! entries is left untouched.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Local, Months};
use rust_decimal::Decimal;

use dompet_core::ledger::{EntryDraft, LedgerService};
use dompet_core::period::DAY_FORMAT;
use dompet_db::TransactionRepository;
use dompet_shared::AppConfig;

/// (nama, keperluan, kategori, amount, tipe, day of month)
const MONTHLY: [(&str, &str, &str, i64, &str, u32); 5] = [
    ("Gaji", "Gaji bulanan", "salary", 5_000_000, "pemasukan", 1),
    ("Kos", "Sewa kamar", "housing", 1_500_000, "pengeluaran", 2),
    ("Listrik", "Token listrik", "utilities", 200_000, "pengeluaran", 5),
    ("Belanja", "Kebutuhan dapur", "food", 750_000, "pengeluaran", 10),
    ("Freelance", "Proyek sampingan", "side", 1_250_000, "pemasukan", 20),
];

/// Months of history to generate, ending with the current month.
const MONTHS: u32 = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    println!("Opening ledger at {}...", config.database.url);
    let db = dompet_db::open(&config.database).await?;
    let ledger = LedgerService::new(TransactionRepository::new(db));

    if !ledger.list_all().await?.is_empty() {
        println!("  Ledger already has entries, skipping...");
        return Ok(());
    }

    let this_month = Local::now()
        .date_naive()
        .with_day0(0)
        .context("no first day of the current month")?;

    let mut created = 0;
    for back in (0..MONTHS).rev() {
        let first_day = this_month
            .checked_sub_months(Months::new(back))
            .context("seed month out of range")?;

        for (name, purpose, category, amount, tipe, day) in MONTHLY {
            let Some(date) = first_day.with_day(day) else {
                continue;
            };
            ledger
                .create(EntryDraft {
                    name: name.to_string(),
                    purpose: purpose.to_string(),
                    category: category.to_string(),
                    amount: Decimal::from(amount),
                    entry_type: tipe.to_string(),
                    date_string: Some(date.format(DAY_FORMAT).to_string()),
                })
                .await?;
            created += 1;
        }
    }

    let summary = ledger.resume_overall().await?;
    println!("Seeded {created} entries");
    println!(
        "  pemasukan {} / pengeluaran {} / saldo {}",
        summary.total_income, summary.total_expense, summary.balance
    );
    println!("Seeding complete!");

    Ok(())
}
