//! formbox CLI
//!
//! Runs a modal form dialog from the command line and prints the result
//! mapping as JSON, so shell scripts can prompt for structured input.
//!
//! # Usage
//!
//! Show a form built from a JSON field-spec array:
//! ```bash
//! formbox form \
//!   --title "Server Setup" \
//!   --header "Connection settings" \
//!   --fields '[{"name":"host","type":"text","default":"localhost"},
//!              {"name":"tls","type":"checkbox","label":"Use TLS?"}]'
//! ```
//!
//! Show a login prompt:
//! ```bash
//! formbox login --header "Log in to secure server" --username admin
//! ```
//!
//! The process exits with status 1 when the dialog is cancelled, so scripts
//! can branch without parsing the (empty) result.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use formbox::{login_form, run_form, FieldSpec, FormConfig, FormResult, ThemeRegistry};

#[derive(Parser, Debug)]
#[command(name = "formbox")]
#[command(about = "Modal form dialogs for shell scripts")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show a form built from a JSON array of field specs
    Form {
        /// Window title
        #[arg(long, short, default_value = "")]
        title: String,
        /// Heading shown above the fields
        #[arg(long, default_value = "")]
        header: String,
        /// Error banner shown under the heading
        #[arg(long)]
        error: Option<String>,
        /// JSON array of field specs
        #[arg(long, short)]
        fields: String,
        /// Label for the confirm button
        #[arg(long)]
        ok_label: Option<String>,
        /// Style preset name (see `formbox themes`)
        #[arg(long)]
        theme: Option<String>,
        /// Spacing around rows and widgets
        #[arg(long, default_value = "5")]
        padding: f32,
    },

    /// Show a username/password prompt, with optional extra fields
    Login {
        /// Heading shown above the fields
        #[arg(long, default_value = "")]
        header: String,
        /// Error banner shown under the heading
        #[arg(long)]
        error: Option<String>,
        /// Pre-filled username
        #[arg(long, short, default_value = "")]
        username: String,
        /// JSON array of additional field specs
        #[arg(long)]
        fields: Option<String>,
        /// Style preset name (see `formbox themes`)
        #[arg(long)]
        theme: Option<String>,
    },

    /// List the built-in theme names
    Themes,
}

fn parse_fields(json: &str) -> anyhow::Result<Vec<FieldSpec>> {
    serde_json::from_str(json).map_err(|e| anyhow::anyhow!("invalid field specs: {e}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result: FormResult = match args.command {
        Commands::Form {
            title,
            header,
            error,
            fields,
            ok_label,
            theme,
            padding,
        } => {
            let config = FormConfig {
                title,
                header,
                error_message: error,
                padding,
                ok_label,
                theme,
            };
            run_form(config, parse_fields(&fields)?).map_err(|e| anyhow::anyhow!(e.to_string()))?
        }

        Commands::Login {
            header,
            error,
            username,
            fields,
            theme,
        } => {
            let extra = match fields {
                Some(json) => parse_fields(&json)?,
                None => Vec::new(),
            };
            let config = FormConfig {
                header,
                error_message: error,
                theme,
                ..FormConfig::default()
            };
            login_form(config, &username, extra).map_err(|e| anyhow::anyhow!(e.to_string()))?
        }

        Commands::Themes => {
            for name in formbox::BuiltinThemes.names() {
                println!("{name}");
            }
            return Ok(());
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    // Cancelled: empty mapping, non-zero exit for scripts.
    if result.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
