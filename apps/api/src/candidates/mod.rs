// Candidate records: the SQLite-backed store, résumé intake, and HTTP handlers.

pub mod handlers;
pub mod intake;
pub mod store;
