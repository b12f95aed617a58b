//! # Menu Seeder
//!
//! Populates the database with the house menu.
//!
//! ## Usage
//! ```bash
//! # Seed ./barista.db (or $DATABASE_URL)
//! cargo run -p barista-db --bin seed
//!
//! # Specify database path
//! cargo run -p barista-db --bin seed -- --db ./data/barista.db
//! ```
//!
//! Running it twice does nothing the second time: an existing menu is left
//! untouched.

use std::env;

use barista_core::{MenuService, NewCoffee};
use barista_db::{Database, DbConfig};

/// `(name, price_cents, water_ml, milk_ml, coffee_grounds_g)`
const HOUSE_MENU: &[(&str, i64, i64, i64, i64)] = &[
    ("Expresso", 200, 50, 0, 15),
    ("Expresso Duplo", 300, 100, 0, 30),
    ("Cappuccino", 450, 30, 120, 15),
    ("Flat White", 550, 30, 150, 15),
    ("Americano", 350, 100, 0, 15),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "./barista.db".to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-d" | "--db" => {
                if i + 1 < args.len() {
                    db_url = args[i + 1].clone();
                    i += 1;
                }
            }
            "-h" | "--help" => {
                println!("Barista Menu Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file or sqlite:// URL (default: $DATABASE_URL or ./barista.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("☕ Barista Menu Seeder");
    println!("======================");

    let config = DbConfig::from_url(&db_url);
    println!("Database: {}", config.database_path.display());
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.coffees().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} coffees", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let menu = MenuService::new(db.clone());
    for &(name, price_cents, water_ml, milk_ml, coffee_grounds_g) in HOUSE_MENU {
        let coffee = menu
            .create_coffee(&NewCoffee {
                name: name.to_string(),
                price_cents,
                water_ml,
                milk_ml,
                coffee_grounds_g,
            })
            .await?;
        println!("  + {:<16} {:>6} (id {})", coffee.name, coffee.price().to_string(), coffee.id);
    }

    println!();
    println!("✓ Seeded {} coffees", HOUSE_MENU.len());

    db.close().await;
    Ok(())
}
