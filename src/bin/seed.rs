// src/bin/seed.rs
// Bootstrap the farmkeep schema and seed the initial user accounts.
// Safe to re-run: tables use IF NOT EXISTS and existing accounts are skipped.

use anyhow::Context;
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use uuid::Uuid;

// --- ANSI colors for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        name TEXT NOT NULL,
        api_token TEXT NOT NULL UNIQUE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS batches (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        batch_code TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL,
        breed TEXT NOT NULL,
        bird_count INTEGER NOT NULL,
        start_date DATE NOT NULL,
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS feed_purchases (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        feed_type TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL CHECK (price >= 0),
        bags INTEGER NOT NULL CHECK (bags >= 1),
        kg_per_bag DOUBLE PRECISION NOT NULL CHECK (kg_per_bag > 0),
        total_kg DOUBLE PRECISION NOT NULL,
        purchased_at TIMESTAMPTZ NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        entry_type TEXT NOT NULL CHECK (entry_type IN ('expense', 'income')),
        category TEXT NOT NULL,
        amount DOUBLE PRECISION NOT NULL CHECK (amount >= 0),
        description TEXT NOT NULL,
        feed_id UUID UNIQUE REFERENCES feed_purchases(id),
        occurred_on TIMESTAMPTZ NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS eggs (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        batch_id UUID NOT NULL REFERENCES batches(id) ON DELETE CASCADE,
        laid_on DATE NOT NULL,
        collected INTEGER NOT NULL CHECK (collected >= 0),
        sold INTEGER NOT NULL CHECK (sold >= 0),
        spoiled INTEGER NOT NULL CHECK (spoiled >= 0),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vaccinations (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        batch_id UUID NOT NULL REFERENCES batches(id) ON DELETE CASCADE,
        vaccine_name TEXT NOT NULL,
        scheduled_for DATE NOT NULL,
        completed_on DATE,
        notes TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mortality (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        batch_id UUID NOT NULL REFERENCES batches(id) ON DELETE CASCADE,
        recorded_on DATE NOT NULL,
        count INTEGER NOT NULL CHECK (count >= 1),
        cause TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions (user_id, occurred_on)",
    "CREATE INDEX IF NOT EXISTS idx_eggs_user_laid ON eggs (user_id, laid_on)",
    "CREATE INDEX IF NOT EXISTS idx_vaccinations_user ON vaccinations (user_id, scheduled_for)",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    println!("{}{}farmkeep seeder{}", BOLD, CYAN, RESET);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;
    println!("{}✓{} Connected to PostgreSQL", GREEN, RESET);

    create_schema(&pool).await?;
    println!("{}✓{} Schema is up to date", GREEN, RESET);

    seed_user(&pool, "admin@poultry.com", "admin123", "Admin User").await?;
    seed_user(&pool, "demo@farmkeep.dev", "demo1234", "Demo Farmer").await?;

    println!(
        "\n{}Please change these passwords after first login!{}",
        YELLOW, RESET
    );

    Ok(())
}

async fn create_schema(pool: &PgPool) -> anyhow::Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .context("schema statement failed")?;
    }
    Ok(())
}

async fn seed_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: &str,
) -> anyhow::Result<()> {
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE email = LOWER($1))")
            .bind(email)
            .fetch_one(pool)
            .await?;

    if exists.0 {
        println!(
            "{}•{} User already exists, skipping: {}",
            YELLOW, RESET, email
        );
        return Ok(());
    }

    let password_hash =
        bcrypt::hash(password, bcrypt::DEFAULT_COST).context("password hashing failed")?;
    let api_token = Uuid::new_v4().simple().to_string();

    sqlx::query(
        r#"
        INSERT INTO users (email, password_hash, name, api_token)
        VALUES (LOWER($1), $2, $3, $4)
        "#,
    )
    .bind(email)
    .bind(&password_hash)
    .bind(name)
    .bind(&api_token)
    .execute(pool)
    .await
    .context("user insert failed")?;

    println!("\n{}✓ User created successfully!{}", GREEN, RESET);
    println!("==========================================");
    println!("Email:     {}", email);
    println!("Password:  {}", password);
    println!("API token: {}", api_token);
    println!("==========================================");

    Ok(())
}
