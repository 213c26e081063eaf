// src/bin/purge_eggs.rs
// Delete every egg record. Destructive one-off used when re-importing
// collection data; prints a countdown so an accidental run can be aborted.

use anyhow::Context;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::time::Duration;

// --- ANSI colors for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    println!("{}Starting egg data deletion...{}\n", BOLD, RESET);

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;
    println!("{}✓{} Connected to database", GREEN, RESET);

    let before: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM eggs")
        .fetch_one(&pool)
        .await?;
    println!("{}✓{} Found {} egg records", GREEN, RESET, before.0);

    if before.0 == 0 {
        println!("\nNo egg records to delete.");
        return Ok(());
    }

    println!(
        "\n{}{}WARNING: This will delete ALL egg records!{}",
        BOLD, RED, RESET
    );
    println!("{}Press Ctrl+C now to cancel...{}\n", YELLOW, RESET);

    tokio::time::sleep(Duration::from_secs(3)).await;

    let deleted = sqlx::query("DELETE FROM eggs")
        .execute(&pool)
        .await
        .context("delete failed")?
        .rows_affected();
    println!("{}✓{} Deleted {} egg records", GREEN, RESET, deleted);

    let after: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM eggs")
        .fetch_one(&pool)
        .await?;
    println!("{}✓{} Remaining egg records: {}", GREEN, RESET, after.0);

    println!(
        "\n{}{}Egg data deletion completed successfully!{}",
        BOLD, GREEN, RESET
    );
    Ok(())
}
