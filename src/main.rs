use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use archscope::ArchError;
use archscope::cli::ConfigOverrides;
use archscope::cli::commands::analyze::AnalyzeOptions;
use archscope::cli::ui::Output;
use archscope::config::OutputFormat;
use archscope::constants::report::DEFAULT_INPUT_FILE;

#[derive(Parser)]
#[command(name = "archscope")]
#[command(
    version,
    about = "Architecture analysis reports from design-session transcripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a transcript and write the report
    Analyze {
        #[arg(
            long,
            short,
            default_value = "comprehensive",
            help = "Stage: basic, failure, performance, integration, comparative, comprehensive"
        )]
        stage: String,
        #[arg(long, short, default_value = DEFAULT_INPUT_FILE, help = "Subject transcript")]
        input: PathBuf,
        #[arg(long, help = "Second transcript for the comparative stage")]
        compare: Option<PathBuf>,
        #[arg(long, short, help = "Report path (default from config)")]
        output: Option<PathBuf>,
        #[arg(long, conflicts_with = "output", help = "Print the report instead of writing it")]
        stdout: bool,
        #[arg(long, short, help = "Output format: markdown, json")]
        format: Option<OutputFormat>,
        #[arg(long, help = "LLM provider (openai, ollama)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
        #[arg(long, help = "Analyst notes attached to comprehensive reports")]
        notes: Option<String>,
    },

    /// List analysis stages
    Stages {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Validate configuration and ping the provider
    Check {
        #[arg(long, help = "LLM provider (openai, ollama)")]
        provider: Option<String>,
        #[arg(long, help = "Model to use")]
        model: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json, yaml"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31marchscope encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // RUST_BACKTRACE=1 still prints a backtrace
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = match e.downcast_ref::<ArchError>() {
                Some(err) => format!("[{}] {}", err.class(), err),
                None => e.to_string(),
            };
            Output::new().error(&message);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Analyze {
            stage,
            input,
            compare,
            output,
            stdout,
            format,
            provider,
            model,
            notes,
        } => {
            archscope::cli::commands::analyze::run(AnalyzeOptions {
                stage,
                input,
                compare,
                output,
                stdout,
                format,
                overrides: ConfigOverrides {
                    provider,
                    model,
                    notes,
                },
            })?;
        }
        Commands::Stages { format } => {
            archscope::cli::commands::stages::run(&format)?;
        }
        Commands::Check { provider, model } => {
            archscope::cli::commands::check::run(&ConfigOverrides {
                provider,
                model,
                notes: None,
            })?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                archscope::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                archscope::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                archscope::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
