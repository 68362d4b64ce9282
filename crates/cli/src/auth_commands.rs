use {
    anyhow::{Context, Result, bail},
    clap::Subcommand,
    obra_client::{ApiClient, Credentials, Payload, TokenGrant, TwoFactorCode},
    serde_json::Value,
};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Log in to the backend.
    Login {
        #[arg(long)]
        email: String,
        /// Password; prompted when absent.
        #[arg(long, env = "OBRA_SENHA", hide_env_values = true)]
        senha: Option<String>,
    },
    /// Show the stored session.
    Status {
        /// Also check the token against the server.
        #[arg(long)]
        verify: bool,
    },
    /// Drop the stored session.
    Logout,
}

pub async fn handle_auth(client: &ApiClient, action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Login { email, senha } => login(client, &email, senha).await,
        AuthAction::Status { verify } => status(client, verify).await,
        AuthAction::Logout => logout(client),
    }
}

async fn login(client: &ApiClient, email: &str, senha: Option<String>) -> Result<()> {
    let senha = match senha {
        Some(s) => s,
        None => prompt("Senha: ")?,
    };

    let payload = client
        .login(&Credentials {
            email: email.to_string(),
            senha,
        })
        .await?;

    // Accounts with 2FA enabled answer the login without a token; the
    // grant only arrives after the OTP code is verified.
    let grant = match token_grant(&payload) {
        Some(grant) => grant,
        None => {
            println!("Código de verificação enviado para {email}.");
            let codigo_otp = prompt("Código 2FA: ")?;
            let payload = client
                .verify_2fa(&TwoFactorCode {
                    email: email.to_string(),
                    codigo_otp,
                })
                .await?;
            match token_grant(&payload) {
                Some(grant) => grant,
                None => bail!("o servidor não retornou um token de acesso"),
            }
        },
    };

    client.set_session(grant.access_token, grant.user)?;
    println!("Login efetuado como {email}.");
    Ok(())
}

/// A grant is any JSON response carrying `access_token`.
fn token_grant(payload: &Payload) -> Option<TokenGrant> {
    payload.as_json()?.get("access_token")?;
    payload.clone().decode().ok()
}

async fn status(client: &ApiClient, verify: bool) -> Result<()> {
    if !client.is_authenticated() {
        println!("Não autenticado.");
        return Ok(());
    }

    let user = client.current_user();
    let nome = user.get("nome").and_then(Value::as_str).unwrap_or("?");
    let email = user.get("email").and_then(Value::as_str).unwrap_or("?");
    println!("Autenticado como {nome} <{email}>.");

    if verify && let Some(token) = client.token() {
        match client.validate_token(&token).await {
            Ok(_) => println!("Token aceito pelo servidor."),
            Err(e) => println!("Token rejeitado: {e}"),
        }
    }
    Ok(())
}

fn logout(client: &ApiClient) -> Result<()> {
    client.clear_session()?;
    println!("Sessão encerrada.");
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    use std::io::Write;

    print!("{label}");
    std::io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("read stdin")?;
    Ok(line.trim().to_string())
}
