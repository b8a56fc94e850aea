//! Core domain for the confirma suite: members, RSVP responses, input
//! validation, attendance statistics, the reconciled roster, and the
//! report/export builders. Pure logic only; no I/O lives here.

pub mod error;
pub mod model;
pub mod report;
pub mod roster;
pub mod stats;
pub mod text;
pub mod types;
pub mod validation;
