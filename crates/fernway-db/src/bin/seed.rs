//! # Seed Data Generator
//!
//! Populates the database with the development plant catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p fernway-db --bin seed
//!
//! # Specify database path
//! cargo run -p fernway-db --bin seed -- --db ./data/fernway.db
//! ```

use std::env;

use fernway_db::repository::product::new_product;
use fernway_db::{Database, DbConfig};

/// The development catalog: slug, name, description, price in cents.
///
/// Deliberately small and bounded - it mirrors the size of catalog the
/// storefront is designed around.
const CATALOG: &[(&str, &str, &str, i64)] = &[
    (
        "boston-fern",
        "Boston Fern",
        "Classic hanging fern, loves humidity",
        1899,
    ),
    (
        "golden-pothos",
        "Golden Pothos",
        "Trailing vine, tolerates low light",
        1299,
    ),
    (
        "snake-plant",
        "Snake Plant",
        "Near-indestructible, upright leaves",
        2499,
    ),
    (
        "monstera-deliciosa",
        "Monstera Deliciosa",
        "Swiss cheese plant, 6\" pot",
        3499,
    ),
    (
        "zz-plant",
        "ZZ Plant",
        "Glossy leaves, drought tolerant",
        2199,
    ),
    (
        "peace-lily",
        "Peace Lily",
        "White blooms, droops when thirsty",
        1999,
    ),
    (
        "rubber-plant",
        "Rubber Plant",
        "Burgundy leaves, fast grower",
        2799,
    ),
    (
        "spider-plant",
        "Spider Plant",
        "Produces plantlets on runners",
        1099,
    ),
    (
        "fiddle-leaf-fig",
        "Fiddle Leaf Fig",
        "Statement tree, bright indirect light",
        4999,
    ),
    (
        "string-of-pearls",
        "String of Pearls",
        "Succulent with bead-like leaves",
        1599,
    ),
    (
        "calathea-orbifolia",
        "Calathea Orbifolia",
        "Striped round leaves, pet safe",
        2899,
    ),
    (
        "aloe-vera",
        "Aloe Vera",
        "Easy succulent, useful gel",
        999,
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./fernway_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Fernway Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./fernway_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Fernway Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Don't double-seed an existing catalog
    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicate slugs.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    let repo = db.products();
    let mut seeded = 0;
    for (slug, name, description, price_cents) in CATALOG {
        let image_url = format!("/images/{}.jpg", slug);
        let product = new_product(
            slug,
            name,
            Some(description),
            Some(&image_url),
            *price_cents,
        );

        if let Err(e) = repo.insert(&product).await {
            eprintln!("Failed to insert {}: {}", slug, e);
            continue;
        }
        seeded += 1;
    }

    println!("✓ Seeded {} products", seeded);

    let count = repo.count().await?;
    println!("  Catalog size: {}", count);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
