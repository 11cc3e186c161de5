//! Schema creation and first-run seeding.
//!
//! Every statement here is idempotent (`CREATE ... IF NOT EXISTS`,
//! `INSERT ... WHERE NOT EXISTS`), so running the bootstrap again against
//! an initialized database changes nothing. [`DatabaseBootstrap`] adds a
//! once-guard so a process runs it at most once.

use sqlx::SqlitePool;
use tokio::sync::OnceCell;
use tracing::info;

use youthhub_core::error::{AppError, ErrorKind};
use youthhub_core::result::AppResult;

const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS branches (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        governorate TEXT NOT NULL,
        address TEXT NOT NULL,
        phone TEXT NOT NULL,
        whatsapp TEXT NOT NULL,
        facebook TEXT,
        telegram TEXT,
        instagram TEXT,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        display_name TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL CHECK (role IN ('superadmin', 'admin')),
        branch_id INTEGER REFERENCES branches (id),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        branch_id INTEGER NOT NULL REFERENCES branches (id),
        title TEXT NOT NULL,
        image_url TEXT NOT NULL,
        announcement TEXT NOT NULL,
        event_date TEXT NOT NULL,
        location TEXT NOT NULL,
        created_by INTEGER REFERENCES users (id) ON DELETE SET NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
    r#"CREATE TABLE IF NOT EXISTS site_content (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        organization_name TEXT NOT NULL,
        slogan TEXT NOT NULL,
        definition_text TEXT NOT NULL,
        vision_text TEXT NOT NULL,
        mission_text TEXT NOT NULL,
        goals_text TEXT NOT NULL,
        volunteer_form_url TEXT NOT NULL,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_users_branch ON users (branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_events_branch ON events (branch_id)",
    "CREATE INDEX IF NOT EXISTS idx_events_date ON events (event_date)",
];

const SEED_CONTENT: &str = r#"INSERT OR IGNORE INTO site_content (
        id, organization_name, slogan, definition_text, vision_text,
        mission_text, goals_text, volunteer_form_url
    ) VALUES (
        1,
        'شؤون الشباب',
        'جيل شبابي متمكن وقوي',
        'مؤسسة رسمية وطنية تُعنى بتمكين الشباب فكرياً وسياسياً واجتماعياً لصناعة جيل واعٍ يسهم في بناء وطنه.',
        'الريادة في صناعة جيل شبابي متمكن فكرياً، مؤهل سياسياً، فاعل اجتماعياً، ومعتز بهويته.',
        'النهوض بالشباب عبر تنمية الوعي ورفع الكفاءة المعرفية والمهارات القيادية ليكون شريكاً حقيقياً في صناعة القرار وبناء الدولة.',
        '1) تنمية الشباب تنمية شاملة
2) إعداد جيل قيادي ومبادر
3) حماية الهوية الثقافية
4) تعزيز العمل التطوعي
5) إبراز الرموز الشبابية السورية',
        'https://forms.google.com'
    )"#;

/// A branch inserted on first run.
#[derive(Debug, Clone, Copy)]
struct SeedBranch {
    name: &'static str,
    governorate: &'static str,
    address: &'static str,
    phone: &'static str,
}

const SEED_BRANCHES: &[SeedBranch] = &[
    SeedBranch {
        name: "شؤون الشباب - دمشق",
        governorate: "دمشق",
        address: "دمشق - المزة",
        phone: "0933000001",
    },
    SeedBranch {
        name: "شؤون الشباب - حلب",
        governorate: "حلب",
        address: "حلب - الجميلية",
        phone: "0933000002",
    },
];

/// The superadmin account created when none exists.
#[derive(Debug, Clone)]
pub struct BootstrapAccount {
    /// Login name.
    pub username: String,
    /// Display name.
    pub display_name: String,
    /// Already-hashed password.
    pub password_hash: String,
}

/// What a bootstrap run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Seed branches inserted by this run.
    pub branches_seeded: u64,
    /// Whether this run created the superadmin.
    pub superadmin_created: bool,
}

/// Create all tables and insert seed rows that are still missing.
pub async fn run_bootstrap(
    pool: &SqlitePool,
    account: &BootstrapAccount,
) -> AppResult<BootstrapReport> {
    info!("Applying database schema...");
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to apply schema", e))?;
    }

    sqlx::query(SEED_CONTENT)
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed site content", e))?;

    let mut report = BootstrapReport::default();

    for seed in SEED_BRANCHES {
        let result = sqlx::query(
            "INSERT INTO branches (name, governorate, address, phone, whatsapp) \
             SELECT ?, ?, ?, ?, ? \
             WHERE NOT EXISTS (SELECT 1 FROM branches WHERE name = ?)",
        )
        .bind(seed.name)
        .bind(seed.governorate)
        .bind(seed.address)
        .bind(seed.phone)
        .bind(seed.phone)
        .bind(seed.name)
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed branches", e))?;
        report.branches_seeded += result.rows_affected();
    }

    let result = sqlx::query(
        "INSERT INTO users (username, display_name, password_hash, role, branch_id) \
         SELECT ?, ?, ?, 'superadmin', NULL \
         WHERE NOT EXISTS (SELECT 1 FROM users WHERE role = 'superadmin')",
    )
    .bind(&account.username)
    .bind(&account.display_name)
    .bind(&account.password_hash)
    .execute(pool)
    .await
    .map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to create bootstrap superadmin '{}'", account.username),
            e,
        )
    })?;
    report.superadmin_created = result.rows_affected() == 1;

    info!(
        branches_seeded = report.branches_seeded,
        superadmin_created = report.superadmin_created,
        "Database bootstrap complete"
    );
    Ok(report)
}

/// Runs [`run_bootstrap`] at most once per instance.
#[derive(Debug)]
pub struct DatabaseBootstrap {
    pool: SqlitePool,
    account: BootstrapAccount,
    done: OnceCell<BootstrapReport>,
}

impl DatabaseBootstrap {
    /// Create a guard for the given pool and bootstrap account.
    pub fn new(pool: SqlitePool, account: BootstrapAccount) -> Self {
        Self {
            pool,
            account,
            done: OnceCell::new(),
        }
    }

    /// Run the bootstrap if it has not completed yet.
    ///
    /// Concurrent callers wait for the first run; a failed run leaves the
    /// guard unset so the next call retries.
    pub async fn ensure_initialized(&self) -> AppResult<BootstrapReport> {
        self.done
            .get_or_try_init(|| run_bootstrap(&self.pool, &self.account))
            .await
            .copied()
    }

    /// Whether a bootstrap run has completed.
    pub fn is_initialized(&self) -> bool {
        self.done.initialized()
    }
}
