//! Library Ledger demo driver
//!
//! Creates the schema, registers a handful of books and students, and prints
//! what is on the shelf.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_ledger::{schema, Config, Library, NewBook, NewStudent};

const BOOKS: &[(i64, &str)] = &[
    (1, "Halo"),
    (2, "dadadad"),
    (3, "chto"),
    (4, "kavo"),
    (5, "how to be number one"),
    (6, "very usefull book"),
    (7, "bored book"),
];

const STUDENTS: &[(i64, &str)] = &[(1, "Mike"), (2, "Jordan"), (3, "Emily")];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,library_ledger=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting library ledger demo...");

    let config = Config::from_env()?;

    let db = library_ledger::connect_store(&config).await?;
    schema::create_tables(&db)
        .await
        .context("Failed to create tables")?;

    let library = Library::new(db).await?;

    for &(id, title) in BOOKS {
        if let Err(e) = library.register_book(&NewBook::new(id, title)).await {
            tracing::warn!("Skipping book {}: {}", id, e);
        }
    }
    for &(id, name) in STUDENTS {
        if let Err(e) = library.register_student(&NewStudent::new(id, name)).await {
            tracing::warn!("Skipping student {}: {}", id, e);
        }
    }

    let available = library.list_available_books().await?;
    println!("{}", serde_json::to_string_pretty(&available)?);

    let students = library.list_all_students().await?;
    println!("{}", serde_json::to_string_pretty(&students)?);

    library.close().await?;
    Ok(())
}
