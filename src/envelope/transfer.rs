//! Moving budget from one envelope to another.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    envelope::{
        Envelope, EnvelopeId, EnvelopeState, db::map_row, get_envelope, parse_envelope_id,
    },
    extract::{AppJson, AppPath},
    response::ApiResponse,
};

/// The request body for a transfer.
#[derive(Debug, Deserialize)]
pub struct TransferForm {
    /// How much budget to move, must be greater than zero.
    pub amount: i64,
}

/// The outcome of a transfer: both envelopes after the move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// The envelope that was debited.
    pub from: Envelope,
    /// The envelope that was credited.
    pub to: Envelope,
    /// How much budget was moved.
    pub amount: i64,
}

/// Move `amount` from the budget of envelope `from_id` to envelope `to_id`.
///
/// Both budgets are read and written inside a single immediate transaction,
/// so either both changes are committed or neither is.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidAmount] if `amount` is not greater than zero,
/// - [Error::SameEnvelope] if `from_id` and `to_id` are the same,
/// - [Error::NotFound] if either envelope does not exist,
/// - [Error::InsufficientFunds] if the source budget is smaller than `amount`,
/// - [Error::BudgetOverflow] if the destination budget would overflow,
/// - or [Error::SqlError] if there is some other SQL error.
///
/// The budgets are left unchanged on any error.
pub fn transfer_budget(
    from_id: EnvelopeId,
    to_id: EnvelopeId,
    amount: i64,
    connection: &Connection,
) -> Result<Transfer, Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount(amount));
    }

    if from_id == to_id {
        return Err(Error::SameEnvelope);
    }

    // Using new_unchecked because we only have &Connection from the MutexGuard.
    // Dropping the transaction without committing rolls it back.
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let from = get_envelope(from_id, &transaction)?;
    let to = get_envelope(to_id, &transaction)?;

    if from.budget < amount {
        return Err(Error::InsufficientFunds {
            available: from.budget,
            requested: amount,
        });
    }

    let to_budget = to.budget.checked_add(amount).ok_or(Error::BudgetOverflow)?;

    let mut statement = transaction.prepare(
        "UPDATE envelope SET budget = ?1 WHERE id = ?2
         RETURNING id, title, budget;",
    )?;
    let from = statement.query_row((from.budget - amount, from_id), map_row)?;
    let to = statement.query_row((to_budget, to_id), map_row)?;
    drop(statement);

    transaction.commit()?;

    Ok(Transfer { from, to, amount })
}

/// A route handler for moving budget between two envelopes.
///
/// Responds with both updated envelopes.
pub async fn transfer_endpoint(
    State(state): State<EnvelopeState>,
    AppPath((raw_from_id, raw_to_id)): AppPath<(String, String)>,
    AppJson(form): AppJson<TransferForm>,
) -> Result<Response, Error> {
    let from_id = parse_envelope_id(&raw_from_id)?;
    let to_id = parse_envelope_id(&raw_to_id)?;

    let connection = state.lock_connection()?;

    let transfer = transfer_budget(from_id, to_id, form.amount, &connection).inspect_err(
        |error| {
            tracing::debug!(
                "Could not transfer {} from envelope {from_id} to {to_id}: {error}",
                form.amount
            )
        },
    )?;

    let message = format!(
        "The budgets of envelopes {from_id} and {to_id} have been successfully updated"
    );

    Ok(ApiResponse::ok(&message, transfer).into_response())
}
