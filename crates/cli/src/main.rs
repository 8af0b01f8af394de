//! OAS minifier CLI
//!
//! Command-line interface for shrinking an OpenAPI specification into
//! per-endpoint documents sized for language-model consumption, plus a
//! keypoint guide for endpoint selection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use oas_minifier_common::{MinifyConfig, TiktokenCounter, TokenCounter};
use oas_minifier_pipeline::extract_endpoints;
use oas_minifier_writer::{
    directory_token_report, prepare_output_dir, write_chunk_files, write_chunk_guide,
    write_endpoint_files, write_keypoint_guide, TokenReport, GUIDE_FILE_NAME,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "oas-minifier")]
#[command(version, about = "Minify OpenAPI specs into LLM-ready endpoint documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minify a spec into per-endpoint documents and a keypoint guide
    #[command(after_help = "EXAMPLES:\n  \
        # One document per endpoint\n  \
        oas-minifier generate --spec petstore.json\n\n  \
        # Point doc URLs at a hosted reference\n  \
        oas-minifier generate \\\n    \
        --spec petstore.json \\\n    \
        --api-url-format 'https://docs.example.com/{tag}#operation/{operationId}'\n\n  \
        # Token-budgeted chunks instead of per-endpoint files\n  \
        oas-minifier generate --spec petstore.json --balanced-chunks --token-goal 3000")]
    Generate {
        /// Path to the OpenAPI spec file (JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory (deleted and recreated on every run)
        #[arg(short, long, default_value = "minified_openapi_docs")]
        output: PathBuf,

        /// Documentation URL template with {tag} and {operationId} placeholders
        #[arg(long)]
        api_url_format: Option<String>,

        /// Target token count per chunk document
        #[arg(long)]
        token_goal: Option<usize>,

        /// Absolute token ceiling before an endpoint is truncated
        #[arg(long)]
        token_max: Option<usize>,

        /// Comma-separated HTTP methods to extract
        #[arg(long, value_delimiter = ',')]
        methods: Option<Vec<String>>,

        /// Group endpoints into token-budgeted chunks instead of one file each
        #[arg(long)]
        balanced_chunks: bool,

        /// Keep endpoints marked deprecated
        #[arg(long)]
        include_deprecated: bool,

        /// Include tag descriptions in the keypoint guide
        #[arg(long)]
        tag_descriptions: bool,
    },

    /// Report token statistics over a generated output directory
    Stats {
        /// Output directory to scan
        #[arg(short, long, default_value = "minified_openapi_docs")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            spec,
            output,
            api_url_format,
            token_goal,
            token_max,
            methods,
            balanced_chunks,
            include_deprecated,
            tag_descriptions,
        } => {
            let config = build_config(GenerateOptions {
                api_url_format,
                token_goal,
                token_max,
                methods,
                balanced_chunks,
                include_deprecated,
                tag_descriptions,
            })?;
            generate_command(&spec, &output, &config, cli.verbose)
        }
        Commands::Stats { dir } => stats_command(&dir),
    }
}

/// Flag overlay applied to the default configuration
struct GenerateOptions {
    api_url_format: Option<String>,
    token_goal: Option<usize>,
    token_max: Option<usize>,
    methods: Option<Vec<String>>,
    balanced_chunks: bool,
    include_deprecated: bool,
    tag_descriptions: bool,
}

fn build_config(options: GenerateOptions) -> Result<MinifyConfig> {
    let mut config = MinifyConfig::default();
    if let Some(api_url_format) = options.api_url_format {
        config.api_url_format = api_url_format;
    }
    if let Some(token_goal) = options.token_goal {
        config.token_count_goal = token_goal;
    }
    if let Some(token_max) = options.token_max {
        config.token_count_max = token_max;
    }
    if let Some(methods) = options.methods {
        config.methods_to_handle = methods
            .into_iter()
            .map(|method| method.to_lowercase())
            .collect();
    }
    config.balanced_chunks = options.balanced_chunks;
    config.keys_to_keep.deprecated = options.include_deprecated;
    config.keys_to_keep.tag_descriptions = options.tag_descriptions;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn generate_command(
    spec_path: &Path,
    output: &Path,
    config: &MinifyConfig,
    verbose: bool,
) -> Result<()> {
    println!("{} Loading spec: {}", "→".cyan(), spec_path.display());
    let raw = fs::read_to_string(spec_path)
        .with_context(|| format!("Failed to read spec file {}", spec_path.display()))?;
    let spec: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse spec file {}", spec_path.display()))?;

    if verbose {
        println!("  Output: {}", output.display());
        println!("  Token goal: {}", config.token_count_goal);
        println!("  Token max: {}", config.token_count_max);
        println!("  Methods: {:?}", config.methods_to_handle);
        println!("  Balanced chunks: {}", config.balanced_chunks);
    }

    let counter = TiktokenCounter::new().context("Failed to initialize tokenizer")?;

    let extraction = extract_endpoints(&spec, config).context("Failed to extract endpoints")?;
    println!(
        "{} {} endpoints found",
        "✓".green(),
        extraction.endpoint_count
    );

    prepare_output_dir(output).context("Failed to prepare output directory")?;

    let guide = if config.balanced_chunks {
        let (index, notices) = write_chunk_files(output, &extraction, config, &counter)
            .context("Failed to write chunk documents")?;
        for notice in &notices {
            eprintln!(
                "{} truncating {}: {} tokens",
                "⚠".yellow(),
                notice.operation_id,
                notice.token_count
            );
        }
        write_chunk_guide(output, &index, config).context("Failed to write keypoint guide")?
    } else {
        let index =
            write_endpoint_files(output, &extraction).context("Failed to write endpoint documents")?;
        write_keypoint_guide(output, &index, config).context("Failed to write keypoint guide")?
    };

    println!(
        "{} {}: {} tokens",
        "✓".green(),
        GUIDE_FILE_NAME,
        counter.count(&guide)
    );

    let report =
        directory_token_report(output, &counter).context("Failed to scan output directory")?;
    print_report(&report);

    println!("\n{}", "✓ Minification complete!".green().bold());
    Ok(())
}

fn stats_command(dir: &Path) -> Result<()> {
    let counter = TiktokenCounter::new().context("Failed to initialize tokenizer")?;
    let report = directory_token_report(dir, &counter)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &TokenReport) {
    println!("\n{}", "Token report:".bold());
    println!("  Files: {}", report.files);
    if report.files == 0 {
        return;
    }
    println!("  Min: {}", report.min);
    println!("  Avg: {}", report.average());
    println!("  Max: {}", report.max);
    if let Some(ref max_file) = report.max_file {
        println!("  Largest: {}", max_file.display());
    }
    println!("  Total: {}", report.total);
}
