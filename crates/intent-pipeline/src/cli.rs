//! Command-line interface for the `intent` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use intent_core::config::IntentConfig;
use intent_core::constants::VERSION;
use intent_core::models::{EmbeddedMessage, RawMessage, TaggedMessage};
use intent_embeddings::EmbeddingEngine;
use intent_tagger::{tag_messages, KeywordTagger};
use tracing::info;

use crate::io::{read_json, write_json};
use crate::runner::run_pipeline;

#[derive(Parser, Debug)]
#[command(name = "intent", version = VERSION, about = "Intent taxonomy expansion pipeline")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, short, global = true, env = "INTENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign coarse intents to raw messages
    Tag(TagArgs),
    /// Embed tagged messages
    Embed(EmbedArgs),
    /// Cluster buckets and decide taxonomy actions
    Run(RunArgs),
}

#[derive(Args, Debug)]
pub struct TagArgs {
    /// JSON array of raw messages
    pub input: PathBuf,
    /// Where to write tagged messages
    #[arg(long, short, default_value = "outputs/tagged_messages.json")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// JSON array of tagged messages
    pub input: PathBuf,
    #[arg(long, short, default_value = "outputs/embeddings.json")]
    pub output: PathBuf,
    /// Persistent embedding cache; overrides `embedding.cache_path`
    #[arg(long)]
    pub cache: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON array of embedded messages
    pub input: PathBuf,
    #[arg(long, short, default_value = "outputs/decision_results.json")]
    pub output: PathBuf,
    /// Also write the run summary here
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

/// Load the configuration file, or defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<IntentConfig> {
    match path {
        Some(p) => IntentConfig::from_file(p)
            .with_context(|| format!("failed to load config from {}", p.display())),
        None => Ok(IntentConfig::default()),
    }
}

pub fn execute(command: Commands, config: &IntentConfig) -> Result<()> {
    match command {
        Commands::Tag(args) => tag(args),
        Commands::Embed(args) => embed(args, config),
        Commands::Run(args) => run(args, config),
    }
}

fn tag(args: TagArgs) -> Result<()> {
    let raw: Vec<RawMessage> = read_json(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let tagged = tag_messages(&KeywordTagger::new(), &raw);
    write_json(&args.output, &tagged)?;
    info!(count = tagged.len(), path = %args.output.display(), "tagged messages saved");
    Ok(())
}

fn embed(args: EmbedArgs, config: &IntentConfig) -> Result<()> {
    let tagged: Vec<TaggedMessage> = read_json(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut embedding_config = config.embedding.clone();
    if args.cache.is_some() {
        embedding_config.cache_path = args.cache;
    }
    let mut engine = EmbeddingEngine::new(embedding_config)?;
    let embedded: Vec<EmbeddedMessage> = engine.embed_messages(&tagged)?;

    write_json(&args.output, &embedded)?;
    info!(count = embedded.len(), path = %args.output.display(), "embeddings saved");
    Ok(())
}

fn run(args: RunArgs, config: &IntentConfig) -> Result<()> {
    let report = run_pipeline(&args.input, &args.output, config)
        .with_context(|| format!("pipeline failed for {}", args.input.display()))?;
    if let Some(path) = args.summary {
        write_json(&path, &report.summary)?;
    }
    Ok(())
}
