//! Resource operations: one fixed route+verb pair per method.
//!
//! Every method is a thin mapping onto the transport primitives in
//! `client`; the path shapes belong to the backend contract and must not
//! drift.

mod auth;
mod budgets;
mod chat;
mod documents;
mod health;
mod materials;
mod metrics;
mod projects;
mod tasks;
mod teams;
