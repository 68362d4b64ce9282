mod auth_commands;

use {
    clap::{Parser, Subcommand},
    obra_client::{ApiClient, Page, Payload},
    serde_json::Value,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "obra", about = "obra — client for the project-management backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Authentication against the backend.
    Auth {
        #[command(subcommand)]
        action: auth_commands::AuthAction,
    },
    /// Project listing.
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },
    /// Task listing.
    Tasks {
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Probe the backend's health route.
    Health,
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List projects, optionally filtered by status.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
}

#[derive(Subcommand)]
enum TaskAction {
    /// List tasks, optionally filtered by status.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Dump a response the way it arrived: pretty JSON or raw text.
fn print_payload(payload: &Payload) {
    match payload {
        Payload::Json(v) => {
            println!("{}", serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()));
        },
        Payload::Text(t) => println!("{t}"),
    }
}

/// One line per record: id, status, then the record's display field.
fn print_listing(payload: &Payload, name_key: &str) {
    let Some(Value::Array(items)) = payload.as_json() else {
        print_payload(payload);
        return;
    };
    if items.is_empty() {
        println!("(nenhum registro)");
        return;
    }
    for item in items {
        let id = item.get("id").and_then(Value::as_i64).unwrap_or_default();
        let status = item.get("status").and_then(Value::as_str).unwrap_or("-");
        let name = item.get(name_key).and_then(Value::as_str).unwrap_or("?");
        println!("{id:>5}  {status:<14}  {name}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let client = ApiClient::from_config();
    info!(base_url = client.base_url(), "obra starting");

    // The gateway only clears state on expiry; sending the user back to
    // login is this shell's job.
    client.on_session_expired(|| {
        eprintln!("Sessão expirada. Faça login novamente com `obra auth login`.");
    });

    match cli.command {
        Commands::Auth { action } => auth_commands::handle_auth(&client, action).await,
        Commands::Projects {
            action: ProjectAction::List { status, skip, limit },
        } => {
            let payload = client
                .list_projects(status.as_deref(), Some(Page::new(skip, limit)))
                .await?;
            print_listing(&payload, "nome");
            Ok(())
        },
        Commands::Tasks {
            action: TaskAction::List { status, skip, limit },
        } => {
            let payload = client
                .list_tasks(status.as_deref(), Some(Page::new(skip, limit)))
                .await?;
            print_listing(&payload, "titulo");
            Ok(())
        },
        Commands::Health => {
            let payload = client.health().await?;
            print_payload(&payload);
            Ok(())
        },
    }
}
