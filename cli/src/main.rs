use clap::{Parser, Subcommand};
use wire::{HealthResponse, HistorialResponse, QueryRequest, QueryResponse};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("question is empty")]
    EmptyQuestion,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error(transparent)]
    Decode(#[from] wire::DecodeError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "asistente-cli", about = "Ask the assistant and browse conversation history")]
struct Cli {
    #[arg(long, env = "ASSISTANT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Print raw JSON instead of formatted text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the host server is up.
    Ping,
    /// Report backend and vector store status.
    Health,
    /// Ask a question.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
        #[arg(long)]
        user: Option<String>,
    },
    /// Show the stored conversation history.
    History {
        #[arg(long, default_value = wire::DEFAULT_USER_ID)]
        user: String,
        #[arg(long, help = "Only show the most recent N conversations")]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url.trim_end_matches('/').to_owned(), json: cli.json };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Health => run_health(&ctx).await,
        Command::Ask { question, user } => run_ask(&ctx, &question.join(" "), user).await,
        Command::History { user, limit } => run_history(&ctx, &user, limit).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let response = reqwest::Client::new()
        .get(format!("{}/healthz", cli.base_url))
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_health(cli: &CliContext) -> Result<(), CliError> {
    let body = get_text(&format!("{}{}", cli.base_url, wire::HEALTH_PATH), &[]).await?;
    if cli.json {
        return print_raw(&body);
    }
    let health: HealthResponse = wire::decode(&body)?;
    println!("status: {}\nvector store: {}", health.status, health.vector_store);
    Ok(())
}

async fn run_ask(cli: &CliContext, question: &str, user: Option<String>) -> Result<(), CliError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(CliError::EmptyQuestion);
    }
    let mut request = QueryRequest::new(question);
    if let Some(user) = user {
        request = request.with_user(user);
    }

    let response = reqwest::Client::new()
        .post(format!("{}{}", cli.base_url, wire::QUERY_PATH))
        .json(&request)
        .send()
        .await?;
    let body = checked_body(response).await?;
    if cli.json {
        return print_raw(&body);
    }
    let answer = wire::decode_query_response(&body)?;
    print!("{}", format_answer(&answer));
    Ok(())
}

async fn run_history(cli: &CliContext, user: &str, limit: Option<usize>) -> Result<(), CliError> {
    let url = format!("{}{}", cli.base_url, wire::HISTORIAL_PATH);
    let body = get_text(&url, &[(wire::HISTORIAL_USER_PARAM, user)]).await?;
    if cli.json {
        return print_raw(&body);
    }
    let historial = wire::decode_historial_response(&body)?;
    print!("{}", format_historial(&historial, limit));
    Ok(())
}

async fn get_text(url: &str, query: &[(&str, &str)]) -> Result<String, CliError> {
    let response = reqwest::Client::new().get(url).query(query).send().await?;
    checked_body(response).await
}

async fn checked_body(response: reqwest::Response) -> Result<String, CliError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        let message = wire::error_detail(&body).unwrap_or(body);
        return Err(CliError::ServerError { status: status.as_u16(), message });
    }
    Ok(body)
}

fn print_raw(body: &str) -> Result<(), CliError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn format_answer(answer: &QueryResponse) -> String {
    let mut out = format!("{}\n", answer.answer);
    if !answer.sources.is_empty() {
        out.push_str("\nFuentes:\n");
        for source in &answer.sources {
            out.push_str(&format!("  - {}\n", source.document));
        }
    }
    out
}

/// Oldest first, like the modal; `limit` keeps only the newest N.
fn format_historial(historial: &HistorialResponse, limit: Option<usize>) -> String {
    let conversations = &historial.conversations;
    if conversations.is_empty() {
        return "(sin conversaciones)\n".to_owned();
    }
    let skip = limit.map_or(0, |n| conversations.len().saturating_sub(n));
    let mut out = String::new();
    for conversation in &conversations[skip..] {
        if let Some(date) = &conversation.date {
            out.push_str(&format!("[{date}]\n"));
        }
        out.push_str(&format!("Usuario: {}\nAsistente: {}\n\n", conversation.user, conversation.agent));
    }
    out
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
