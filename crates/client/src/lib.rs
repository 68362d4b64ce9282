//! HTTP gateway for the obra project-management backend.
//!
//! One [`ApiClient`] wraps one base URL: it attaches bearer authentication
//! from the stored session, normalizes transport/auth/application errors
//! into one taxonomy, and keeps the persisted session in step with what
//! the server reports (a 401 logs the client out). Resource operations
//! (projects, tasks, documents, teams, materials, budgets, chat, metrics)
//! are thin typed shortcuts over the same transport primitive.

pub mod client;
pub mod error;
pub mod model;
pub mod payload;
mod resources;

pub use {
    client::{ApiClient, RequestOptions},
    error::{Error, Result},
    model::{
        BudgetDraft, BudgetPatch, Credentials, MaterialDraft, MaterialPatch, Page, ProjectDraft,
        ProjectPatch, RegisterUser, TaskDraft, TaskPatch, TeamMemberDraft, TokenGrant,
        TwoFactorCode,
    },
    payload::Payload,
};
