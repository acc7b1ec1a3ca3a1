//! Database operations for envelopes.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    envelope::{Envelope, EnvelopeId, EnvelopeTitle, NewEnvelope},
};

/// Create an envelope and return it with its generated ID.
pub fn create_envelope(envelope: &NewEnvelope, connection: &Connection) -> Result<Envelope, Error> {
    connection
        .prepare(
            "INSERT INTO envelope (title, budget) VALUES (?1, ?2)
             RETURNING id, title, budget;",
        )?
        .query_row((envelope.title.as_ref(), envelope.budget), map_row)
        .map_err(|error| error.into())
}

/// Retrieve a single envelope by ID.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `envelope_id` does not refer to a valid envelope,
/// - or [Error::SqlError] there is some other SQL error.
pub fn get_envelope(envelope_id: EnvelopeId, connection: &Connection) -> Result<Envelope, Error> {
    connection
        .prepare("SELECT id, title, budget FROM envelope WHERE id = :id;")?
        .query_row(&[(":id", &envelope_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all envelopes ordered by ID.
///
/// # Errors
/// Returns an [Error::EmptyCollection] if there are no envelopes.
pub fn list_envelopes(connection: &Connection) -> Result<Vec<Envelope>, Error> {
    let envelopes = connection
        .prepare("SELECT id, title, budget FROM envelope ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_envelope| maybe_envelope.map_err(Error::from))
        .collect::<Result<Vec<_>, _>>()?;

    if envelopes.is_empty() {
        return Err(Error::EmptyCollection);
    }

    Ok(envelopes)
}

/// Overwrite the title and budget of an envelope and return the updated envelope.
///
/// # Errors
/// Returns an [Error::NotFound] if the envelope doesn't exist.
pub fn update_envelope(
    envelope_id: EnvelopeId,
    envelope: &NewEnvelope,
    connection: &Connection,
) -> Result<Envelope, Error> {
    connection
        .prepare(
            "UPDATE envelope SET title = ?1, budget = ?2 WHERE id = ?3
             RETURNING id, title, budget;",
        )?
        .query_row(
            (envelope.title.as_ref(), envelope.budget, envelope_id),
            map_row,
        )
        .map_err(|error| error.into())
}

/// Delete an envelope by ID.
///
/// # Errors
/// Returns an [Error::NotFound] if the envelope doesn't exist.
pub fn delete_envelope(envelope_id: EnvelopeId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM envelope WHERE id = ?1", [envelope_id])?;

    if rows_affected == 0 {
        return Err(Error::NotFound);
    }

    Ok(())
}

/// Initialize the envelope table.
pub fn create_envelope_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS envelope (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            budget INTEGER NOT NULL
        )",
        (),
    )?;

    Ok(())
}

pub(crate) fn map_row(row: &Row) -> Result<Envelope, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_title: String = row.get(1)?;
    let title = EnvelopeTitle::new_unchecked(&raw_title);
    let budget = row.get(2)?;

    Ok(Envelope { id, title, budget })
}


#[cfg(test)]
mod envelope_query_tests {
    use crate::{
        Error,
        envelope::{
            EnvelopeTitle, NewEnvelope, create_envelope, delete_envelope, get_envelope,
            list_envelopes, update_envelope,
        },
        test_utils::must_create_test_connection,
    };

    fn new_envelope(title: &str, budget: i64) -> NewEnvelope {
        NewEnvelope {
            title: EnvelopeTitle::new_unchecked(title),
            budget,
        }
    }

    #[test]
    fn create_envelope_succeeds() {
        let connection = must_create_test_connection();

        let envelope = create_envelope(&new_envelope("Restaurant", 90), &connection)
            .expect("Could not create envelope");

        assert_eq!(envelope.id, 1);
        assert_eq!(envelope.title.as_ref(), "Restaurant");
        assert_eq!(envelope.budget, 90);
    }

    #[test]
    fn create_then_get_returns_same_envelope() {
        let connection = must_create_test_connection();
        let inserted = create_envelope(&new_envelope("Surf lesson", 150), &connection)
            .expect("Could not create test envelope");

        let selected = get_envelope(inserted.id, &connection);

        assert_eq!(Ok(inserted), selected);
    }

    #[test]
    fn get_envelope_with_invalid_id_returns_not_found() {
        let connection = must_create_test_connection();
        let inserted = create_envelope(&new_envelope("Restaurant", 90), &connection)
            .expect("Could not create test envelope");

        let selected = get_envelope(inserted.id + 123, &connection);

        assert_eq!(selected, Err(Error::NotFound));
    }

    #[test]
    fn list_envelopes_on_empty_table_returns_empty_collection() {
        let connection = must_create_test_connection();

        let result = list_envelopes(&connection);

        assert_eq!(result, Err(Error::EmptyCollection));
    }

    #[test]
    fn list_envelopes_is_ordered_by_id() {
        let connection = must_create_test_connection();
        let want = vec![
            create_envelope(&new_envelope("Zoo", 1), &connection).unwrap(),
            create_envelope(&new_envelope("Aquarium", 2), &connection).unwrap(),
            create_envelope(&new_envelope("Museum", 3), &connection).unwrap(),
        ];

        let got = list_envelopes(&connection).expect("Could not list envelopes");

        assert_eq!(want, got);
    }

    #[test]
    fn update_envelope_changes_only_that_envelope() {
        let connection = must_create_test_connection();
        let target = create_envelope(&new_envelope("Original", 10), &connection).unwrap();
        let bystander = create_envelope(&new_envelope("Bystander", 20), &connection).unwrap();

        let updated = update_envelope(target.id, &new_envelope("Updated", 30), &connection)
            .expect("Could not update envelope");

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.title.as_ref(), "Updated");
        assert_eq!(updated.budget, 30);
        assert_eq!(get_envelope(target.id, &connection), Ok(updated));
        assert_eq!(get_envelope(bystander.id, &connection), Ok(bystander));
    }

    #[test]
    fn update_envelope_with_invalid_id_returns_not_found() {
        let connection = must_create_test_connection();
        let existing = create_envelope(&new_envelope("Existing", 10), &connection).unwrap();

        let result = update_envelope(999999, &new_envelope("Updated", 30), &connection);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(list_envelopes(&connection), Ok(vec![existing]));
    }

    #[test]
    fn delete_envelope_succeeds() {
        let connection = must_create_test_connection();
        let envelope = create_envelope(&new_envelope("ToDelete", 10), &connection).unwrap();

        let result = delete_envelope(envelope.id, &connection);

        assert!(result.is_ok());
        assert_eq!(get_envelope(envelope.id, &connection), Err(Error::NotFound));
    }

    #[test]
    fn delete_envelope_with_invalid_id_returns_not_found() {
        let connection = must_create_test_connection();
        let existing = create_envelope(&new_envelope("Existing", 10), &connection).unwrap();

        let result = delete_envelope(999999, &connection);

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(list_envelopes(&connection), Ok(vec![existing]));
    }
}
