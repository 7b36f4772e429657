//! Folio command line
//!
//! Tooling around the portfolio translation table: consistency checks,
//! single lookups, and preference updates.

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::info;

use folio::{
    config::Settings,
    handlers::select_stored_language,
    i18n::{load_table, SelectOutcome, TranslationSource},
    utils::logging,
    FileStore,
};

/// Folio - portfolio localization tooling
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Translation table tooling for the portfolio page")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration file name without extension
    #[arg(short, long, global = true, default_value = "folio")]
    config: String,

    /// Translation resource (file path or URL), overrides the configuration
    #[arg(short, long, global = true)]
    resource: Option<String>,

    /// Commands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report key counts and languages missing keys
    Check,
    /// Print one translation
    Get {
        /// Dotted key path, e.g. contact.form.name
        key: String,
        /// Language code, defaults to the configured default language
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Save a language preference the way the page's language switch does
    Prefer {
        /// Language code
        lang: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut settings = Settings::from_file(&cli.config).context("loading configuration")?;
    if let Some(resource) = cli.resource {
        settings.i18n.resource = resource;
    }
    settings.validate()?;

    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", folio::info());

    match cli.command {
        Commands::Check => check(&settings).await,
        Commands::Get { key, lang } => get(&settings, &key, lang.as_deref()).await,
        Commands::Prefer { lang } => prefer(&settings, &lang).await,
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&settings)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Report per-language key counts and coverage gaps
async fn check(settings: &Settings) -> anyhow::Result<ExitCode> {
    let source = TranslationSource::from_location(&settings.i18n.resource)?;
    let table = load_table(&source, settings.i18n.fetch_timeout()).await?;
    let report = table.report(&settings.i18n.supported_languages, &settings.i18n.default_language);

    for lang in &report.stats.languages {
        println!("{:<6} {} keys", lang.code, lang.key_count);
    }
    for lang in &report.missing_languages {
        println!("missing language: {}", lang);
    }
    for gap in &report.gaps {
        println!("{} lacks {} key(s):", gap.language, gap.missing.len());
        for key in &gap.missing {
            println!("  {}", key);
        }
    }

    Ok(if report.is_healthy() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print one resolved translation
async fn get(settings: &Settings, key: &str, lang: Option<&str>) -> anyhow::Result<ExitCode> {
    let lang = lang.unwrap_or(&settings.i18n.default_language);
    if !settings.i18n.is_language_supported(lang) {
        bail!("unsupported language '{}'", lang);
    }

    let source = TranslationSource::from_location(&settings.i18n.resource)?;
    let table = load_table(&source, settings.i18n.fetch_timeout()).await?;

    match table.display_value(lang, key)? {
        Some(text) => {
            println!("{}", text);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{}: no translation for '{}'", lang, key);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Select a language against the persisted preference file
async fn prefer(settings: &Settings, lang: &str) -> anyhow::Result<ExitCode> {
    let store = FileStore::open(&settings.storage.path)?;
    let source = TranslationSource::from_location(&settings.i18n.resource)?;

    match select_stored_language(settings, &source, store, lang).await? {
        SelectOutcome::Applied(_) => println!("{} applied", lang),
        SelectOutcome::ReloadScheduled { delay } => {
            println!("{} saved, page reloads after {} ms", lang, delay.as_millis())
        }
        SelectOutcome::ReloadPending | SelectOutcome::Ignored => println!("{} saved", lang),
    }
    Ok(ExitCode::SUCCESS)
}
