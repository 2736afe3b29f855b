// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

use pagesearch::loader::load_documents;
use pagesearch::{Document, HtmlContainer, IndexSource, ResultsContainer, SearchWidget, WidgetConfig};

mod cli;
use cli::display::{self, TerminalContainer};
use cli::{Cli, Commands, OutputFormat};

fn main() -> Result<()> {
    // stdout carries results, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            source,
            query,
            limit,
            format,
            trusted_markup,
        } => {
            let config = WidgetConfig {
                max_results: limit,
                trusted_markup,
                ..WidgetConfig::default()
            };
            run_search(&source, &query, config, format)
        }
        Commands::Interactive { source, limit } => {
            let config = WidgetConfig {
                max_results: limit,
                ..WidgetConfig::default()
            };
            run_interactive(&source, config)
        }
        Commands::Inspect { source, top } => run_inspect(&source, top),
    }
}

/// The fetch is the only async step, so a current-thread runtime is enough.
fn load(source: &IndexSource) -> Result<Vec<Document>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let docs = runtime
        .block_on(load_documents(source))
        .with_context(|| format!("failed to load search index from {}", source))?;
    tracing::info!(%source, docs = docs.len(), "loaded search index");
    Ok(docs)
}

fn run_search(source: &IndexSource, query: &str, config: WidgetConfig, format: OutputFormat) -> Result<()> {
    let widget = SearchWidget::from_documents(config, load(source)?).context("failed to build the search index")?;
    let entries = widget.query(query)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Html => {
            let mut html = HtmlContainer::new(widget.config());
            for entry in &entries {
                html.append(entry);
            }
            println!("{}", html.into_string());
        }
        OutputFormat::Text => {
            if entries.is_empty() {
                eprintln!("{}", display::themed(display::GRAY, &[], "no results"));
                return Ok(());
            }
            let mut out = TerminalContainer::stdout();
            for entry in &entries {
                out.append(entry);
            }
            out.finish().context("failed to write results")?;
        }
    }
    Ok(())
}

fn run_interactive(source: &IndexSource, config: WidgetConfig) -> Result<()> {
    let widget = SearchWidget::from_documents(config, load(source)?).context("failed to build the search index")?;
    let prompt = atty::is(atty::Stream::Stdin);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            eprint!("{} ", display::themed(display::CYAN, &[display::BOLD], "search>"));
            io::stderr().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;

        let mut out = TerminalContainer::stdout();
        let rendered = widget.on_input(&line, &mut out);
        out.finish().context("failed to write results")?;
        if rendered == 0 && !line.trim().is_empty() {
            eprintln!("{}", display::themed(display::GRAY, &[], "no results"));
        }
    }
    Ok(())
}

fn run_inspect(source: &IndexSource, top: usize) -> Result<()> {
    let widget = SearchWidget::from_documents(WidgetConfig::default(), load(source)?)
        .context("failed to build the search index")?;
    let index = widget.index().context("index was not built")?;
    let stats = index.stats(top).context("failed to read index statistics")?;
    display::print_stats(&source.to_string(), &stats);
    Ok(())
}
