//! Spelling Bee CLI
//!
//! Generate, preview and score letter-counting conversations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spelling_bee::{build_task, write_jsonl, Task, TaskConfig, TaskLoader, WordCorpus};
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spelling-bee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate examples as JSON lines
    Generate {
        /// Task configuration files (glob pattern)
        #[arg(long, default_value = "tasks/*.yaml")]
        tasks: String,

        /// Output directory; one <task-id>.jsonl per task. Writes to stdout if omitted
        #[arg(long)]
        output: Option<String>,

        /// Maximum examples per task (overrides task config)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print a few examples in readable form
    Preview {
        /// Task configuration file
        #[arg(long)]
        config: String,

        /// Number of examples to show
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Score a candidate completion against one generated example
    Score {
        /// Task configuration file
        #[arg(long)]
        config: String,

        /// Example index
        #[arg(long)]
        index: usize,

        /// File holding the candidate completion
        #[arg(long)]
        response: String,
    },

    /// Show word corpus statistics
    CorpusStats {
        /// Path to the word list
        #[arg(long)]
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose overrides RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match cli.command {
        Commands::Generate {
            tasks,
            output,
            limit,
        } => generate(&tasks, output.as_deref(), limit),
        Commands::Preview { config, count } => preview(&config, count),
        Commands::Score {
            config,
            index,
            response,
        } => score(&config, index, &response),
        Commands::CorpusStats { path } => corpus_stats(&path),
    }
}

fn generate(pattern: &str, output: Option<&str>, limit: Option<usize>) -> Result<()> {
    let loader = TaskLoader::load_glob(pattern)
        .with_context(|| format!("loading tasks from {pattern}"))?;
    if loader.is_empty() {
        anyhow::bail!("No task configurations match {pattern}");
    }

    tracing::info!(tasks = loader.len(), output = ?output, limit = ?limit, "Generating examples");

    for config in loader {
        let task =
            build_task(&config).with_context(|| format!("building task {}", config.task.id))?;

        match output {
            Some(dir) => {
                std::fs::create_dir_all(dir).with_context(|| format!("creating {dir}"))?;
                let path = std::path::Path::new(dir).join(format!("{}.jsonl", config.task.id));
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                let stats = write_jsonl(task.as_ref(), &mut BufWriter::new(file), limit)?;
                println!(
                    "{}: {} examples -> {}",
                    config.task.id,
                    stats.written,
                    path.display()
                );
            }
            None => {
                let stdout = std::io::stdout();
                write_jsonl(task.as_ref(), &mut stdout.lock(), limit)?;
            }
        }
    }
    Ok(())
}

fn preview(config_path: &str, count: usize) -> Result<()> {
    let config = TaskConfig::load(config_path).with_context(|| format!("loading {config_path}"))?;
    let task = build_task(&config)?;

    let mut stdout = std::io::stdout().lock();
    for index in 0..count.min(task.num_examples()) {
        let conversation = task.get_example(index)?;
        writeln!(stdout, "{}", "=".repeat(100))?;
        write!(stdout, "{}", conversation.render_preview())?;
    }
    Ok(())
}

fn score(config_path: &str, index: usize, response_path: &str) -> Result<()> {
    let config = TaskConfig::load(config_path).with_context(|| format!("loading {config_path}"))?;
    let task = build_task(&config)?;
    let candidate =
        std::fs::read_to_string(response_path).with_context(|| format!("reading {response_path}"))?;

    let conversation = task
        .get_example(index)
        .with_context(|| format!("generating example {index}"))?;
    let outcome = task.evaluate(&conversation, &candidate)?;

    tracing::info!(task = task.name(), index, outcome, "Scored candidate");
    println!("{outcome}");
    Ok(())
}

fn corpus_stats(path: &str) -> Result<()> {
    tracing::info!(path = %path, "Loading corpus statistics");

    let corpus = WordCorpus::load(path).with_context(|| format!("loading corpus {path}"))?;
    let stats = corpus.stats();

    println!("Corpus Statistics");
    println!("=================");
    println!("Path: {path}");
    println!("Total words: {}", stats.total_words);
    println!(
        "Word length: min {}, max {}, mean {:.2}",
        stats.min_length, stats.max_length, stats.mean_length
    );
    println!("Too short to misspell: {}", stats.short_words);
    println!();
    println!("Sample:");
    for word in corpus.iter().take(10) {
        println!("  - {word}");
    }
    if corpus.len() > 10 {
        println!("  ... and {} more", corpus.len() - 10);
    }
    Ok(())
}
