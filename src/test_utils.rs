#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use model::entities::{gst_return, taxpayer};
    use moka::future::Cache;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use std::time::Duration;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// TIN seeded with returns for 2021 and January 2022.
    pub const SEEDED_TIN: &str = "500000009";
    /// TIN registered without any returns.
    pub const IDLE_TIN: &str = "100000001";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    async fn file_return(db: &DatabaseConnection, year: i32, month: i32, income: i64, taxable: i64) {
        gst_return::ActiveModel {
            tin: Set(SEEDED_TIN.to_string()),
            year: Set(year),
            month: Set(month),
            total_sales_income: Set(Decimal::new(income, 0)),
            exempt_sales: Set(Decimal::new(20, 0)),
            zero_rated_sales: Set(Decimal::new(100, 0)),
            gst_taxable_sales: Set(Decimal::new(taxable, 0)),
            filed_on: Set(NaiveDate::from_ymd_opt(year, month as u32, 20)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to file test return");
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        for tin in [SEEDED_TIN, IDLE_TIN] {
            taxpayer::ActiveModel {
                tin: Set(tin.to_string()),
                name: Set(Some(format!("Test taxpayer {tin}"))),
                ..Default::default()
            }
            .insert(&db)
            .await
            .expect("Failed to create test taxpayer");
        }

        for month in 1..=12 {
            file_return(&db, 2021, month, 1_000 * i64::from(month), 400).await;
        }
        // January 2022 is filed once and amended once
        file_return(&db, 2022, 1, 5_000, 2_000).await;
        file_return(&db, 2022, 1, 250, 100).await;

        let cache = Cache::new(100);

        AppState {
            db,
            cache,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }
}
