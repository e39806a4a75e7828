//! CLI module - Command-line interface for the explorer
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Args, Parser, Subcommand};

use crate::domain::{AnimeId, Season};

/// Anime Explorer - browse the Jikan anime catalog and keep favorites
#[derive(Parser)]
#[command(name = "anime-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Copy, Default)]
pub struct DisplayArgs {
    /// Show English titles where available
    #[arg(long, global = true)]
    pub translate: bool,

    /// Print HTML card markup instead of text
    #[arg(long, global = true)]
    pub html: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog by title
    #[command(alias = "s")]
    Search {
        /// Search query
        #[arg(required = true)]
        query: Vec<String>,
        /// Only show results with this genre
        #[arg(long)]
        genre: Option<String>,
        /// Only show results from this year
        #[arg(long)]
        year: Option<i32>,
        /// Only show results of this media type (TV, Movie, OVA, ...)
        #[arg(long = "type")]
        media_type: Option<String>,
    },

    /// Show one random anime
    #[command(alias = "r")]
    Random,

    /// Show the top-ranked anime
    #[command(alias = "top")]
    Trending,

    /// Show anime airing in a season (defaults to the current one)
    Seasonal {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        season: Option<Season>,
    },

    /// List favorites
    #[command(alias = "favs")]
    Favorites,

    /// Add or remove a favorite
    #[command(alias = "fav")]
    Favorite {
        /// Anime ID
        id: AnimeId,
        /// Title to store (looked up from the catalog when omitted)
        #[arg(long)]
        title: Option<String>,
        /// Image URL to store
        #[arg(long)]
        image: Option<String>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
