//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::io;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::cli::{Args, render_dashboard};
use chatlens::config::{AnalysisConfig, ExportConfig, ParserConfig};
use chatlens::core::output::{write_report_json, write_summary_csv};
use chatlens::core::{Report, Selector, senders};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::parser::ExportParser;
use chatlens::resources::{EmojiSet, StopWords};
use chatlens::{ChatlensError, MessageRecord};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chatlens=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let records = parse_input(args)?;

    if args.list_users {
        for name in senders(&records) {
            println!("{name}");
        }
        return Ok(());
    }

    let analysis = analysis_config(args)?;
    let selector = args
        .user
        .as_deref()
        .map_or(Selector::Overall, Selector::parse);

    if let Selector::Sender(name) = &selector {
        if !senders(&records).contains(&name.as_str()) {
            eprintln!("⚠️  No messages from '{name}' in this export");
        }
    }

    let report = Report::build(&records, &selector, &analysis);
    println!();
    render_dashboard(&report, &mut io::stdout().lock())?;

    if let Some(path) = &args.export {
        export_records(args, &records, path)?;
    }

    if let Some(path) = &args.summary {
        write_summary_csv(&report.stats, path)?;
        println!("💾 Summary saved to {}", path.display());
    }

    if let Some(path) = &args.report {
        write_report_json(&report, path)?;
        println!("💾 Report saved to {}", path.display());
    }

    Ok(())
}

fn parse_input(args: &Args) -> Result<Vec<MessageRecord>, ChatlensError> {
    let config = ParserConfig::new()
        .with_date_order(args.date_order.into())
        .with_media_placeholder(args.media_placeholder.as_str());
    let parser = ExportParser::with_config(config);

    if !args.list_users {
        println!("🔍 chatlens v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input.display());
        if let Some(user) = &args.user {
            println!("👤 User:    {user}");
        }
        println!("⏳ Parsing...");
    }

    let parse_start = Instant::now();
    let records = parser.parse(&args.input)?;

    if !args.list_users {
        println!(
            "   Found {} messages ({:.2}s)",
            records.len(),
            parse_start.elapsed().as_secs_f64()
        );
    }
    Ok(records)
}

fn analysis_config(args: &Args) -> Result<AnalysisConfig, ChatlensError> {
    let mut config = AnalysisConfig::new()
        .with_top_n(args.top)
        .with_media_placeholder(args.media_placeholder.as_str());

    if let Some(path) = &args.stop_words {
        config = config.with_stop_words(StopWords::from_file(path)?);
    }
    if let Some(path) = &args.emoji {
        config = config.with_emoji(EmojiSet::from_file(path)?);
    }
    Ok(config)
}

fn export_records(args: &Args, records: &[MessageRecord], path: &Path) -> Result<(), ChatlensError> {
    let format = match args.format {
        Some(format) => format.into(),
        None => OutputFormat::from_path(path).unwrap_or_default(),
    };

    let mut config = ExportConfig::new();
    if args.date_parts {
        config = config.with_date_parts();
    }

    let write_start = Instant::now();
    write_to_format(records, path, format, &config)?;
    println!(
        "💾 {} messages saved to {} ({}, {:.2}s)",
        records.len(),
        path.display(),
        format,
        write_start.elapsed().as_secs_f64()
    );
    Ok(())
}
