//! CLI entrypoint for tastetrip
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tastetrip_application::{
    AggregateRecommendationsInput, AggregateRecommendationsUseCase, ExtractTastesUseCase,
    GenerativeBackend, NoProgress, PlanTripUseCase, ProgressNotifier,
    StructuredRecommendationSource, TranscriptLogger,
};
use tastetrip_domain::{DEFAULT_TRIP_DAYS, OutputFormat};
use tastetrip_infrastructure::{
    CachedRecommendationSource, CatalogRecommendationSource, ConfigLoader, FileConfig,
    FileSourceConfig, HttpRecommendationSource, JsonTripRepository, JsonlTranscriptLogger,
    OpenAiCompatibleBackend, SourceKind,
};
use tastetrip_presentation::{
    Cli, Command, ConsoleFormatter, ProgressReporter, ReplConfig, TripRepl,
};
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting tastetrip");

    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("{}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }
    let error_count = issues.iter().filter(|i| i.is_error()).count();
    if error_count > 0 {
        bail!("Invalid configuration ({} error(s))", error_count);
    }

    ConsoleFormatter::set_color_enabled(config.output.color);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // Config inspection must work even when adapters cannot be built
    if let Some(Command::Config) = cli.command {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", ConsoleFormatter::format_json(&config));
        return Ok(());
    }

    // === Dependency Injection ===
    let source = build_source(&config.source)?;
    let backend = build_backend(&config)?;

    let (params, _) = config.recommendation.to_params();
    let aggregator = AggregateRecommendationsUseCase::new(source, backend.clone()).with_params(params);
    let extractor = ExtractTastesUseCase::new(backend);
    let repository = Arc::new(JsonTripRepository::new(config.storage.resolve_trips_file()));

    let mut use_case = PlanTripUseCase::new(aggregator.clone(), extractor, repository);
    if let Some(transcript) = build_transcript(&config) {
        use_case = use_case.with_transcript(transcript);
    }

    let progress: Box<dyn ProgressNotifier> = if cli.quiet || format == OutputFormat::Json {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    match cli.command {
        None => run_chat(use_case, Default::default(), &config, cli.quiet).await?,

        Some(Command::Chat { tastes }) => {
            run_chat(use_case, tastes.to_profile(), &config, cli.quiet).await?
        }

        Some(Command::Recommend { taste, categories }) => {
            let mut input = AggregateRecommendationsInput::new(taste.as_str());
            if !categories.is_empty() {
                input = input.with_categories(categories);
            }
            let set = aggregator
                .execute_with_progress(input, progress.as_ref())
                .await;

            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&set)),
                OutputFormat::Text => {
                    print!("{}", ConsoleFormatter::format_recommendations(&taste, &set))
                }
            }
        }

        Some(Command::Plan {
            destination,
            days,
            budget,
        }) => {
            let trip = use_case.lock_plan(&destination, days, budget).await?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&trip)),
                OutputFormat::Text => {
                    println!("{}", trip.lock_message());
                    print!("{}", ConsoleFormatter::format_trip(&trip));
                }
            }
        }

        Some(Command::Pack { tastes, days }) => {
            let days = match days {
                Some(days) => days,
                None => use_case
                    .latest_trip()
                    .await?
                    .map_or(DEFAULT_TRIP_DAYS, |trip| trip.days),
            };
            let list = use_case
                .pack(&tastes.to_profile(), days, progress.as_ref())
                .await;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&list)),
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_packing(&list)),
            }
        }

        Some(Command::Journey { tastes }) => {
            let kit = use_case
                .journey(&tastes.to_profile(), progress.as_ref())
                .await;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&kit)),
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_journey(&kit)),
            }
        }

        Some(Command::Destiny {
            tastes,
            destination,
        }) => {
            let destination = match destination {
                Some(destination) => Some(destination),
                None => use_case.latest_trip().await?.map(|trip| trip.destination),
            };
            let highlights = use_case
                .destiny(&tastes.to_profile(), destination, progress.as_ref())
                .await;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&highlights)),
                OutputFormat::Text => {
                    print!("{}", ConsoleFormatter::format_destiny(&highlights))
                }
            }
        }

        Some(Command::Feedback { rating, comment }) => {
            let feedback = use_case.feedback(rating, &comment.join(" "))?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&feedback)),
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_feedback(&feedback)),
            }
        }

        Some(Command::Trips) => {
            let trips = use_case.trips().await?;
            match format {
                OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&trips)),
                OutputFormat::Text => print!("{}", ConsoleFormatter::format_trips(&trips)),
            }
        }

        Some(Command::Config) => {}
    }

    Ok(())
}

/// Initialize tracing from the verbosity level, optionally mirroring to a file
fn init_logging(verbose: u8, file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let Some(file) = file else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level))
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let path = Path::new(file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("logging.file has no file name: {}", file))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    Ok(Some(guard))
}

fn build_source(config: &FileSourceConfig) -> Result<Arc<dyn StructuredRecommendationSource>> {
    let (kind, _) = config.parse_kind();

    let source: Arc<dyn StructuredRecommendationSource> = match kind {
        SourceKind::Http => {
            let api_key = std::env::var(&config.api_key_env).ok();
            let source = HttpRecommendationSource::new(
                config.base_url.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?
            .with_api_key(config.api_key_header.clone(), api_key);
            Arc::new(source)
        }
        SourceKind::Catalog => {
            let path = config
                .catalog_path
                .as_ref()
                .ok_or_else(|| anyhow!("source.catalog_path is not set"))?;
            Arc::new(CatalogRecommendationSource::load(path)?)
        }
    };

    if config.cache {
        Ok(Arc::new(CachedRecommendationSource::new(source)))
    } else {
        Ok(source)
    }
}

fn build_backend(config: &FileConfig) -> Result<Arc<dyn GenerativeBackend>> {
    let backend = OpenAiCompatibleBackend::from_config(&config.generative)?;
    if config.generative.resolve_api_key().is_none() {
        warn!(
            "No API key in ${}; generative fallback is disabled",
            config.generative.api_key_env
        );
    }
    info!("Generative fallback model: {}", backend.model());
    Ok(Arc::new(backend))
}

fn build_transcript(config: &FileConfig) -> Option<Arc<dyn TranscriptLogger>> {
    let path = config.repl.transcript_file.as_ref()?;
    let logger = JsonlTranscriptLogger::new(path)?;
    info!("Recording transcript to {}", logger.path().display());
    Some(Arc::new(logger))
}

async fn run_chat(
    use_case: PlanTripUseCase,
    profile: tastetrip_domain::TasteProfile,
    config: &FileConfig,
    quiet: bool,
) -> Result<()> {
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress && !quiet,
        history_file: config.repl.history_file.clone(),
    };

    let mut repl = TripRepl::new(use_case)
        .with_profile(profile)
        .with_config(repl_config);
    repl.run().await?;
    Ok(())
}
