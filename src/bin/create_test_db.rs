use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use envelope_api::{EnvelopeTitle, NewEnvelope, create_envelope, initialize_db};

/// A utility for creating a test database for the envelope API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_ENVELOPES: [(&str, i64); 4] = [
    ("Restaurant", 90),
    ("Surf lesson", 150),
    ("Groceries", 400),
    ("Rainy day", 0),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample envelopes...");

    for (title, budget) in SAMPLE_ENVELOPES {
        let new_envelope = NewEnvelope::new(EnvelopeTitle::new(title)?, budget)?;
        let envelope = create_envelope(&new_envelope, &conn)?;
        println!(
            "  {}: {} (budget {})",
            envelope.id, envelope.title, envelope.budget
        );
    }

    println!("Success!");

    Ok(())
}
