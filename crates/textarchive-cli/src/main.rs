//! Text Archive CLI: command-line client for the Text Archive API.
//!
//! Set TEXTARCHIVE_API_URL (or API_URL). The session token is kept in
//! TEXTARCHIVE_STATE_FILE, defaulting to the user's config directory.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use textarchive_api_client::upload::{DEFAULT_LIMIT, DEFAULT_SKIP};
use textarchive_api_client::{
    ApiClient, AuthStore, ClassificationKind, MemoCreateRequest, MemoUpdateRequest,
    ScheduleCreateRequest, ScheduleUpdateRequest,
};
use textarchive_cli::init_tracing;
use textarchive_cli::views::{app_router, ViewContext};
use textarchive_core::{parse_tags, ClientConfig, FileStore};

#[derive(Parser)]
#[command(name = "textarchive", about = "Text Archive API CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        username: String,
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in and remember the session
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show whether a session is stored
    Status,
    /// Classify text as a schedule or memo
    Classify {
        text: String,
        /// Skip automatic classification: schedule or memo
        #[arg(long = "type")]
        kind: Option<ClassificationKind>,
    },
    /// Memo operations
    Memo {
        #[command(subcommand)]
        sub: MemoCommands,
    },
    /// Schedule operations
    Schedule {
        #[command(subcommand)]
        sub: ScheduleCommands,
    },
    /// OCR operations
    Ocr {
        #[command(subcommand)]
        sub: OcrCommands,
    },
    /// Upload files or raw text
    Upload {
        #[command(subcommand)]
        sub: UploadCommands,
    },
    /// Render one of the application pages (/, /login, /memos, ...)
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
}

#[derive(Subcommand)]
enum MemoCommands {
    Create {
        content: String,
        #[arg(long)]
        summary: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    List {
        /// Only memos carrying this tag
        #[arg(long)]
        tags: Option<String>,
    },
    Get {
        id: String,
    },
    Update {
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum ScheduleCommands {
    Create {
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
        /// HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Source text; defaults to the description
        #[arg(long)]
        original_text: Option<String>,
    },
    List {
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    Get {
        id: String,
    },
    Update {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        original_text: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum OcrCommands {
    /// Run OCR on an uploaded file
    Recognize { file_id: String },
    /// Replace the recognized text of a file
    Edit { file_id: String, text: String },
}

#[derive(Subcommand)]
enum UploadCommands {
    /// Upload an image file
    File { path: PathBuf },
    /// Submit raw text
    Text {
        text: String,
        #[arg(long)]
        source: Option<String>,
    },
    /// List uploaded files
    List {
        #[arg(long, default_value_t = DEFAULT_SKIP)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    Delete {
        file_id: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

fn tag_arg(tags: Option<String>) -> Option<Vec<String>> {
    tags.map(|t| parse_tags(Some(&t)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("Invalid client configuration")?;
    let session = Arc::new(AuthStore::new(Arc::new(FileStore::new(
        config.state_file.clone(),
    ))));
    let client = ApiClient::from_config(&config, session.clone())
        .context("Failed to create API client. Check TEXTARCHIVE_API_URL (or API_URL)")?;

    match cli.command {
        Commands::Register {
            username,
            email,
            password,
        } => {
            let response = client.register(&username, &email, &password).await?;
            print_json(&serde_json::json!({
                "user_id": response.user_id,
                "message": "Registered. Sign in with `textarchive login`."
            }))?;
        }
        Commands::Login { username, password } => {
            let response = client.login(&username, &password).await?;
            session
                .set_auth(&response.access_token, &response.user_id)
                .context("Failed to store session")?;
            print_json(&serde_json::json!({
                "user_id": response.user_id,
                "expires_at": response.expires_at,
            }))?;
        }
        Commands::Logout => {
            client.logout();
            print_json(&serde_json::json!({ "success": true }))?;
        }
        Commands::Whoami => {
            let user = client.current_user().await?;
            print_json(&user)?;
        }
        Commands::Status => {
            let state = session.snapshot();
            print_json(&serde_json::json!({
                "authenticated": state.is_authenticated(),
                "user_id": state.user_id,
                "state_file": config.state_file,
            }))?;
        }
        Commands::Classify { text, kind } => match kind {
            Some(kind) => print_json(&client.manual_classify(&text, kind).await?)?,
            None => print_json(&client.classify_text(&text).await?)?,
        },
        Commands::Memo { sub } => match sub {
            MemoCommands::Create {
                content,
                summary,
                tags,
            } => {
                let request = MemoCreateRequest {
                    content,
                    summary,
                    tags: tag_arg(tags),
                };
                print_json(&client.create_memo(&request).await?)?;
            }
            MemoCommands::List { tags } => {
                print_json(&client.list_memos(tags.as_deref()).await?)?;
            }
            MemoCommands::Get { id } => print_json(&client.get_memo(&id).await?)?,
            MemoCommands::Update {
                id,
                content,
                summary,
                tags,
            } => {
                let request = MemoUpdateRequest {
                    content,
                    summary,
                    tags: tag_arg(tags),
                };
                print_json(&client.update_memo(&id, &request).await?)?;
            }
            MemoCommands::Delete { id } => {
                client.delete_memo(&id).await?;
                print_json(
                    &serde_json::json!({ "success": true, "message": format!("Memo {} deleted", id) }),
                )?;
            }
        },
        Commands::Schedule { sub } => match sub {
            ScheduleCommands::Create {
                description,
                date,
                time,
                original_text,
            } => {
                let request = ScheduleCreateRequest {
                    date,
                    time,
                    original_text: original_text.unwrap_or_else(|| description.clone()),
                    description,
                };
                print_json(&client.create_schedule(&request).await?)?;
            }
            ScheduleCommands::List {
                start_date,
                end_date,
            } => {
                let response = client
                    .list_schedules(start_date.as_deref(), end_date.as_deref())
                    .await?;
                print_json(&response)?;
            }
            ScheduleCommands::Get { id } => print_json(&client.get_schedule(&id).await?)?,
            ScheduleCommands::Update {
                id,
                date,
                time,
                description,
                original_text,
            } => {
                let request = ScheduleUpdateRequest {
                    date,
                    time,
                    description,
                    original_text,
                };
                print_json(&client.update_schedule(&id, &request).await?)?;
            }
            ScheduleCommands::Delete { id } => {
                client.delete_schedule(&id).await?;
                print_json(
                    &serde_json::json!({ "success": true, "message": format!("Schedule {} deleted", id) }),
                )?;
            }
        },
        Commands::Ocr { sub } => match sub {
            OcrCommands::Recognize { file_id } => {
                print_json(&client.recognize_image(&file_id).await?)?;
            }
            OcrCommands::Edit { file_id, text } => {
                print_json(&client.edit_ocr_result(&file_id, &text).await?)?;
            }
        },
        Commands::Upload { sub } => match sub {
            UploadCommands::File { path } => print_json(&client.upload_file(&path).await?)?,
            UploadCommands::Text { text, source } => {
                print_json(&client.input_text(&text, source.as_deref()).await?)?;
            }
            UploadCommands::List { skip, limit } => {
                print_json(&client.get_uploaded_files(skip, limit).await?)?;
            }
            UploadCommands::Delete { file_id } => {
                client.delete_uploaded_file(&file_id).await?;
                print_json(
                    &serde_json::json!({ "success": true, "message": format!("File {} deleted", file_id) }),
                )?;
            }
        },
        Commands::Open { path } => {
            let router = app_router();
            let view = router
                .navigate(&path)
                .with_context(|| format!("No page at {}", path))?;
            let ctx = ViewContext {
                client: &client,
                session: &session,
            };
            let body = view.render(&ctx).await?;
            println!("== {} ==", view.title());
            print!("{}", body);
        }
    }

    Ok(())
}
