//! Run with: cargo run --bin seed
//!
//! Populates empty canonical collections with fixture data and makes sure an
//! admin login exists. Collections that already hold documents are skipped.

use bson::{doc, Document};
use mongodb::Database;

use hrops::config;
use hrops::modules::users::model::UserAccount;
use hrops::ops::accounts;
use hrops::ops::seed::{seed, SeedOutcome};
use hrops::OpsError;

fn fixtures() -> Vec<(&'static str, Vec<(String, Document)>)> {
    vec![
        (
            "departments",
            vec![
                (
                    "dept-eng".to_string(),
                    doc! { "name": "Engineering", "managerId": "emp-001" },
                ),
                (
                    "dept-ops".to_string(),
                    doc! { "name": "Operations", "managerId": "emp-002" },
                ),
            ],
        ),
        (
            "employees",
            vec![
                (
                    "emp-001".to_string(),
                    doc! {
                        "name": "Alice Johnson",
                        "email": "alice@example.com",
                        "departmentId": "dept-eng",
                        "hourlyRate": 42.5,
                        "status": "active",
                    },
                ),
                (
                    "emp-002".to_string(),
                    doc! {
                        "name": "Bob Martinez",
                        "email": "bob@example.com",
                        "departmentId": "dept-ops",
                        "hourlyRate": 38.0,
                        "status": "active",
                    },
                ),
                (
                    "emp-003".to_string(),
                    doc! {
                        "name": "Carol White",
                        "email": "carol@example.com",
                        "departmentId": "dept-eng",
                        "hourlyRate": 45.0,
                        "status": "active",
                    },
                ),
            ],
        ),
        (
            "leave_requests",
            vec![
                (
                    "leave-0001".to_string(),
                    doc! {
                        "employeeId": "emp-001",
                        "employeeName": "Alice Johnson",
                        "type": "vacation",
                        "startDate": "2026-09-07",
                        "endDate": "2026-09-11",
                        "status": "pending",
                        "submittedAt": bson::DateTime::now(),
                    },
                ),
                (
                    "leave-0002".to_string(),
                    doc! {
                        "employeeId": "emp-002",
                        "employeeName": "Bob Martinez",
                        "type": "sick",
                        "startDate": "2026-08-24",
                        "endDate": "2026-08-25",
                        "status": "approved",
                        "submittedAt": bson::DateTime::now(),
                    },
                ),
            ],
        ),
        (
            "settings",
            vec![(
                "global".to_string(),
                doc! {
                    "workWeekHours": 40,
                    "overtimeMultiplier": 1.5,
                    "payrollDay": 28,
                },
            )],
        ),
    ]
}

struct SeedSummary {
    seeded: usize,
    skipped: usize,
    admin_created: bool,
}

async fn run(db: &Database) -> Result<SeedSummary, OpsError> {
    let mut summary = SeedSummary {
        seeded: 0,
        skipped: 0,
        admin_created: false,
    };

    for (collection, documents) in fixtures() {
        match seed(db, collection, &documents).await? {
            SeedOutcome::Seeded { written } => {
                println!("✓ Seeded {collection} ({written} documents)");
                summary.seeded += 1;
            }
            SeedOutcome::Skipped { existing } => {
                println!("- Skipped {collection} ({existing} documents already present)");
                summary.skipped += 1;
            }
        }
    }

    let email = config::database::require_env("HROPS_ADMIN_EMAIL")?;
    let password = config::database::require_env("HROPS_ADMIN_PASSWORD")?;
    let admin = UserAccount::admin(email, "Administrator".to_string(), password);
    summary.admin_created = accounts::ensure_account(db, admin).await?;

    Ok(summary)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    config::init_tracing();

    println!("Connecting to MongoDB...");
    let db = config::database::connect().await?;

    let summary = run(&db).await?;

    println!(
        "\n✓ Seed complete: {} collections seeded, {} skipped, admin {}",
        summary.seeded,
        summary.skipped,
        if summary.admin_created {
            "created"
        } else {
            "already present"
        }
    );
    Ok(())
}
