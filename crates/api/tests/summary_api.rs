//! HTTP tests for the summary endpoints.

mod common;

use axum::http::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;

use common::{build_test_app, decimal, get, post};

async fn seed(app: &axum::Router) {
    for (name, amount, tipe, tanggal) in [
        ("Gaji", 5_000_000, "pemasukan", "2025-07-01"),
        ("Belanja", 200_000, "pengeluaran", "2025-07-15"),
        ("Sewa", 1_500_000, "pengeluaran", "2025-08-01"),
        ("Bonus", 750_000, "pemasukan", "2024-12-31"),
    ] {
        let (status, _) = post(
            app,
            "/transactions",
            json!({"nama": name, "amount": amount, "tipe": tipe, "tanggal": tanggal}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn resume_on_empty_ledger_is_zero() {
    let app = build_test_app().await;

    let (status, json) = get(&app, "/transactions/resume").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&json["total_pemasukan"]), dec!(0));
    assert_eq!(decimal(&json["total_pengeluaran"]), dec!(0));
    assert_eq!(decimal(&json["saldo"]), dec!(0));
}

#[tokio::test]
async fn resume_totals_whole_ledger() {
    let app = build_test_app().await;
    seed(&app).await;

    let (status, json) = get(&app, "/transactions/resume").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&json["total_pemasukan"]), dec!(5750000));
    assert_eq!(decimal(&json["total_pengeluaran"]), dec!(1700000));
    assert_eq!(decimal(&json["saldo"]), dec!(4050000));
}

#[tokio::test]
async fn monthly_resume_for_given_month() {
    let app = build_test_app().await;
    seed(&app).await;

    let (status, json) = get(&app, "/transactions/resume/monthly?bulan=2025-07").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&json["total_pemasukan"]), dec!(5000000));
    assert_eq!(decimal(&json["total_pengeluaran"]), dec!(200000));
    assert_eq!(decimal(&json["saldo"]), dec!(4800000));
    assert_eq!(json["periode"], "2025-07");
    assert_eq!(json["start"], "2025-07-01");
    assert_eq!(json["end"], "2025-08-01");
}

#[tokio::test]
async fn monthly_resume_accepts_english_aliases() {
    let app = build_test_app().await;
    seed(&app).await;

    let (_, by_month) = get(&app, "/transactions/resume/monthly?month=2025-08").await;
    assert_eq!(by_month["periode"], "2025-08");
    assert_eq!(decimal(&by_month["total_pengeluaran"]), dec!(1500000));

    let (_, by_year) = get(&app, "/transactions/resume/monthly?year=2024").await;
    assert_eq!(by_year["periode"], "2024");
    assert_eq!(decimal(&by_year["total_pemasukan"]), dec!(750000));
}

#[tokio::test]
async fn monthly_resume_for_year() {
    let app = build_test_app().await;
    seed(&app).await;

    let (status, json) = get(&app, "/transactions/resume/monthly?tahun=2025").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["periode"], "2025");
    assert_eq!(json["start"], "2025-01-01");
    assert_eq!(json["end"], "2026-01-01");
    assert_eq!(decimal(&json["total_pemasukan"]), dec!(5000000));
    assert_eq!(decimal(&json["total_pengeluaran"]), dec!(1700000));
}

#[tokio::test]
async fn month_takes_precedence_over_year() {
    let app = build_test_app().await;
    seed(&app).await;

    let (_, json) = get(&app, "/transactions/resume/monthly?bulan=2025-08&tahun=2024").await;

    assert_eq!(json["periode"], "2025-08");
}

#[tokio::test]
async fn monthly_resume_defaults_to_current_month() {
    let app = build_test_app().await;

    let (status, json) = get(&app, "/transactions/resume/monthly").await;

    assert_eq!(status, StatusCode::OK);
    let label = chrono::Local::now().date_naive().format("%Y-%m").to_string();
    assert_eq!(json["periode"], label);
    assert_eq!(decimal(&json["saldo"]), dec!(0));
}

#[tokio::test]
async fn monthly_resume_rejects_bad_month_and_year() {
    let app = build_test_app().await;

    let (status, json) = get(&app, "/transactions/resume/monthly?bulan=2025-13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Format bulan salah. Gunakan YYYY-MM");

    let (status, json) = get(&app, "/transactions/resume/monthly?tahun=25").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Format tahun salah. Gunakan YYYY");
}

#[tokio::test]
async fn monthly_resume_matches_overall_over_same_entries() {
    let app = build_test_app().await;

    for (amount, tipe) in [(100, "pemasukan"), (40, "pengeluaran"), (5, "pengeluaran")] {
        post(
            &app,
            "/transactions",
            json!({"amount": amount, "tipe": tipe, "tanggal": "2025-03-10"}),
        )
        .await;
    }

    let (_, overall) = get(&app, "/transactions/resume").await;
    let (_, monthly) = get(&app, "/transactions/resume/monthly?bulan=2025-03").await;

    assert_eq!(monthly["total_pemasukan"], overall["total_pemasukan"]);
    assert_eq!(monthly["total_pengeluaran"], overall["total_pengeluaran"]);
    assert_eq!(monthly["saldo"], overall["saldo"]);
}
