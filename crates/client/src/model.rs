//! Typed request and response shapes for the fixed backend contract.
//!
//! Field names stay in the backend's wire vocabulary (`nome`, `senha`,
//! `titulo`, ...) because the routes are owned externally; renaming them
//! here would silently break every call.

use {
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// `skip`/`limit` pagination window for listing routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: u32,
    pub limit: u32,
}

impl Page {
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

// ── Auth ────────────────────────────────────────────────────────────────────

/// `POST /auth/register` body.
#[derive(Clone, Serialize)]
pub struct RegisterUser {
    pub nome: String,
    pub email: String,
    pub senha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cargo: Option<String>,
}

impl std::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("nome", &self.nome)
            .field("email", &self.email)
            .field("senha", &"[REDACTED]")
            .field("telefone", &self.telefone)
            .field("cargo", &self.cargo)
            .finish()
    }
}

/// `POST /auth/login` body.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("senha", &"[REDACTED]")
            .finish()
    }
}

/// `POST /auth/verify-2fa` body.
#[derive(Debug, Clone, Serialize)]
pub struct TwoFactorCode {
    pub email: String,
    pub codigo_otp: String,
}

/// Successful login/2FA response: the token plus the profile it belongs to.
#[derive(Clone, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub user: Map<String, Value>,
}

impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("user", &self.user)
            .finish()
    }
}

// ── Projects ────────────────────────────────────────────────────────────────

/// `POST /projetos` body. Dates travel as ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectDraft {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_prevista: Option<String>,
    /// The server defaults this to `planejamento` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// `PUT /projetos/{id}` body; every field optional, absent fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_prevista: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_real: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progresso_percentual: Option<f64>,
}

// ── Tasks ───────────────────────────────────────────────────────────────────

/// `POST /tarefas` body.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub projeto_id: i64,
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    /// Server default: `a_fazer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Server default: `media`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioridade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_prevista: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<i64>,
}

/// `PUT /tarefas/{id}` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioridade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_prevista: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim_real: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsavel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progresso_percentual: Option<f64>,
}

// ── Teams ───────────────────────────────────────────────────────────────────

/// `POST /equipes/{id}/members` body.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberDraft {
    pub usuario_id: i64,
    pub funcao: String,
}

// ── Materials ───────────────────────────────────────────────────────────────

/// `POST /materiais` body.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialDraft {
    pub nome: String,
    pub categoria: String,
    pub unidade: String,
    pub preco_unitario: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fornecedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

/// `PUT /materiais/{id}` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MaterialPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco_unitario: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fornecedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
}

// ── Budgets ─────────────────────────────────────────────────────────────────

/// `POST /orcamentos` body.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetDraft {
    pub categoria: String,
    pub descricao: String,
    pub valor_previsto: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_prevista: Option<String>,
}

/// `PUT /orcamentos/{id}` body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BudgetPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_previsto: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_gasto: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_prevista: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pagamento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_optionals_are_omitted_from_the_wire() {
        let draft = TaskDraft {
            projeto_id: 3,
            titulo: "Fundação".into(),
            descricao: None,
            status: None,
            prioridade: None,
            data_inicio: None,
            data_fim_prevista: None,
            responsavel_id: None,
        };

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({"projeto_id": 3, "titulo": "Fundação"})
        );
    }

    #[test]
    fn debug_never_prints_passwords() {
        let creds = Credentials {
            email: "a@b.c".into(),
            senha: "hunter2".into(),
        };
        let out = format!("{creds:?}");
        assert!(out.contains("[REDACTED]"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn debug_never_prints_granted_tokens() {
        let grant: TokenGrant = serde_json::from_value(json!({
            "access_token": "jwt-secret",
            "token_type": "bearer",
            "user": {"id": 1}
        }))
        .unwrap();
        let out = format!("{grant:?}");
        assert!(out.contains("[REDACTED]"));
        assert!(!out.contains("jwt-secret"));
    }

    #[test]
    fn token_grant_tolerates_missing_optional_fields() {
        let grant: TokenGrant =
            serde_json::from_value(json!({"access_token": "t"})).unwrap();
        assert_eq!(grant.access_token, "t");
        assert!(grant.user.is_empty());
    }

    #[test]
    fn default_page_matches_listing_defaults() {
        assert_eq!(Page::default(), Page::new(0, 100));
    }
}
