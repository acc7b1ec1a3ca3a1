//! Envelope management: CRUD endpoints and budget transfers.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod get;
mod list;
mod state;
mod transfer;

pub use create::create_envelope_endpoint;
pub use db::{
    create_envelope, create_envelope_table, delete_envelope, get_envelope, list_envelopes,
    update_envelope,
};
pub use delete::delete_envelope_endpoint;
pub use domain::{Envelope, EnvelopeForm, EnvelopeId, EnvelopeTitle, NewEnvelope, parse_envelope_id};
pub use edit::update_envelope_endpoint;
pub use get::get_envelope_endpoint;
pub use list::list_envelopes_endpoint;
pub use state::EnvelopeState;
pub use transfer::{Transfer, transfer_budget, transfer_endpoint};
