//! Database setup for the application.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, envelope::create_envelope_table};

/// Create the application's tables if they do not exist.
///
/// Safe to call on a database that has already been initialized.
///
/// # Errors
/// Returns an [Error::SqlError] if the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_envelope_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
