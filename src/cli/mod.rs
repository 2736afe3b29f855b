// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pagesearch command-line interface.
//!
//! Three subcommands over the same `search_index.json` the page loads: `search`
//! for one query, `interactive` which treats every stdin line as an input event,
//! and `inspect` to summarize the index. `SOURCE` is a path or an http(s) URL.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use pagesearch::config::MAX_RESULTS;
use pagesearch::IndexSource;

#[derive(Parser)]
#[command(
    name = "pagesearch",
    about = "Search a static site's search_index.json from the terminal",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query and print the results
    Search {
        /// Path or URL of search_index.json
        source: IndexSource,

        /// Search query (+required -prohibited field:term term^2.0 "phrase")
        query: String,

        /// Maximum number of results to render
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Insert snippets into HTML output without escaping
        #[arg(long)]
        trusted_markup: bool,
    },

    /// Read queries from stdin, one per line, like typing into the search box
    Interactive {
        /// Path or URL of search_index.json
        source: IndexSource,

        /// Maximum number of results to render per query
        #[arg(short, long, default_value_t = MAX_RESULTS)]
        limit: usize,
    },

    /// Summarize the index built from search_index.json
    Inspect {
        /// Path or URL of search_index.json
        source: IndexSource,

        /// How many of the most widespread terms to list per field
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output
    Text,
    /// The markup the page would render
    Html,
    /// Result entries as a JSON array
    Json,
}
