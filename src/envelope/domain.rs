//! Core envelope domain types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Database identifier for an envelope.
pub type EnvelopeId = i64;

/// Parse an envelope ID taken from a request path.
///
/// # Errors
///
/// Returns [Error::NotFound] if `raw_id` is not an integer, since such an ID
/// cannot refer to any envelope.
pub fn parse_envelope_id(raw_id: &str) -> Result<EnvelopeId, Error> {
    raw_id.trim().parse().map_err(|_| Error::NotFound)
}

/// A validated, non-empty envelope title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeTitle(String);

impl EnvelopeTitle {
    /// Create an envelope title.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyTitle] if `title` is empty or only whitespace.
    pub fn new(title: &str) -> Result<Self, Error> {
        let title = title.trim();

        if title.is_empty() {
            Err(Error::EmptyTitle)
        } else {
            Ok(Self(title.to_string()))
        }
    }

    /// Create an envelope title without validation.
    ///
    /// The caller should ensure that the string is not empty, e.g. because it
    /// was read back from the database.
    pub fn new_unchecked(title: &str) -> Self {
        Self(title.to_string())
    }
}

impl AsRef<str> for EnvelopeTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for EnvelopeTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named bucket holding a budget, e.g. 'Restaurant' with a budget of 90.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The ID assigned by the database.
    pub id: EnvelopeId,
    /// The label shown for the envelope.
    pub title: EnvelopeTitle,
    /// The remaining allowance.
    pub budget: i64,
}

/// The validated data needed to create or overwrite an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnvelope {
    /// The title for the envelope.
    pub title: EnvelopeTitle,
    /// The budget for the envelope, never negative.
    pub budget: i64,
}

impl NewEnvelope {
    /// Create the data for an envelope.
    ///
    /// # Errors
    ///
    /// Returns an [Error::NegativeBudget] if `budget` is below zero.
    pub fn new(title: EnvelopeTitle, budget: i64) -> Result<Self, Error> {
        if budget < 0 {
            return Err(Error::NegativeBudget(budget));
        }

        Ok(Self { title, budget })
    }
}

/// The request body for creating and updating envelopes.
#[derive(Debug, Serialize, Deserialize)]
pub struct EnvelopeForm {
    /// The envelope title, must not be empty.
    pub title: String,
    /// The envelope budget, must not be negative.
    pub budget: i64,
}

impl TryFrom<EnvelopeForm> for NewEnvelope {
    type Error = Error;

    fn try_from(form: EnvelopeForm) -> Result<Self, Self::Error> {
        NewEnvelope::new(EnvelopeTitle::new(&form.title)?, form.budget)
    }
}
