//! Command-line argument definitions.

use ante_engine::blinds::MAX_ANTE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ante",
    author,
    version,
    about = "Ante: a single-ante poker-hand scoring game"
)]
pub struct AnteCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an ante interactively: Small, Big and Boss blind
    Play {
        /// Ante level (defaults to the configured level)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_ANTE)))]
        ante: Option<u8>,
        /// Session seed; per-blind decks are derived from it
        #[arg(long)]
        seed: Option<u64>,
        /// Append one JSON record per finished round to this file
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Classify and score a list of cards, e.g. `ante score 7h 7s 7d 7c Kh`
    Score {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Shuffle a deck and show the opening hand
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the three blinds of an ante
    Blinds {
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_ANTE)))]
        ante: Option<u8>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
