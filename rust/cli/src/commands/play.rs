//! # Play Command
//!
//! Interactive play of one ante: the Small, Big and Boss blind in order.
//!
//! ## Input
//!
//! - `p` / `play` and `d` / `discard` switch what a selection does
//! - a string of digits selects 1-based hand positions (`135` picks the
//!   first, third and fifth card)
//! - `q` / `quit` or end of input ends the session
//!
//! After a lost blind the `restart> ` prompt accepts `y` / `yes` to retry
//! the ante from the Small blind with no money; anything else quits.
//!
//! ## Determinism
//!
//! Every blind (including retries) gets its own deck seed, drawn from a
//! ChaCha20 stream keyed by the session seed, so a session seed replays
//! the whole session.

use crate::config;
use crate::error::CliError;
use crate::formatters::{
    format_blind_header, format_loss, format_payout, format_play, format_snapshot,
};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{Mode, ParseResult, parse_input, parse_restart};
use ante_engine::blinds::{AnteRun, MAX_ANTE, Payout};
use ante_engine::deck::Deck;
use ante_engine::history::{HistoryLogger, RoundRecord};
use ante_engine::round::{Round, RoundRules, RoundStatus};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// How a round handed control back to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Won,
    Lost,
    Quit,
}

/// Handle the play command: interactive play of one ante.
///
/// Flags take precedence over the configuration (`ANTE_CONFIG`, `ANTE_*`).
///
/// # Arguments
///
/// * `ante` - Ante level (default: configured level)
/// * `seed` - Session seed (default: configured seed, else random)
/// * `history` - Optional JSONL file receiving one record per finished round
/// * `out` - Output stream for game display
/// * `err` - Error stream for rejected input and warnings
/// * `stdin` - Input stream for player commands
///
/// # Returns
///
/// `Ok(())` when the ante is cleared or the player quits.
///
/// # Examples
///
/// ```ignore
/// use std::io::Cursor;
///
/// let mut input = Cursor::new(b"q\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// handle_play_command(Some(1), Some(7), None, &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    ante: Option<u8>,
    seed: Option<u64>,
    history: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;
    let cfg = resolved.config;

    let ante = ante.unwrap_or(cfg.level);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut logger = match history {
        Some(path) => Some(HistoryLogger::create(path)?),
        None => None,
    };

    execute_play_command(ante, seed, cfg.rules(), logger.as_mut(), stdin, out, err)
}

/// Session loop. A lost blind that is retried starts a fresh [`AnteRun`].
fn execute_play_command(
    ante: u8,
    seed: u64,
    rules: RoundRules,
    mut logger: Option<&mut HistoryLogger>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if ante > MAX_ANTE {
        return Err(CliError::InvalidInput(format!(
            "ante must be <= {}",
            MAX_ANTE
        )));
    }
    rules.validate()?;

    writeln!(out, "play: ante={} seed={}", ante, seed)?;
    info!(ante, seed, "session started");

    let mut deck_seeds = ChaCha20Rng::seed_from_u64(seed);

    loop {
        let mut run = AnteRun::new(ante);
        if run.blinds().iter().any(|(_, r)| r.chips().is_none()) {
            ui::display_warning(err, "this ante has requirements that can never be reached")?;
        }

        while let Some(blind) = run.current_blind() {
            let deck_seed = deck_seeds.next_u64();
            debug!(blind = blind.name(), deck_seed, "dealing blind");
            let mut round = run.start_round(Deck::shuffled(deck_seed), rules)?;

            writeln!(out)?;
            writeln!(out, "{}", format_blind_header(blind, round.requirement()))?;
            writeln!(out, "{}", format_snapshot(&round.snapshot(run.money())))?;

            let end = play_round(&mut round, run.money(), stdin, out, err)?;
            let payout = match end {
                RoundEnd::Won => {
                    let payout = run.cash_out(&round)?;
                    writeln!(out, "{}", format_payout(&payout, run.money()))?;
                    Some(payout)
                }
                RoundEnd::Lost | RoundEnd::Quit => None,
            };
            record_round(logger.as_deref_mut(), ante, deck_seed, &round, payout)?;

            match end {
                RoundEnd::Won => {}
                RoundEnd::Quit => return Ok(()),
                RoundEnd::Lost => {
                    writeln!(
                        out,
                        "{}",
                        format_loss(blind, round.score(), round.requirement())
                    )?;
                    ui::prompt(out, "restart")?;
                    let retry = read_stdin_line(stdin).is_some_and(|line| parse_restart(&line));
                    if !retry {
                        return Ok(());
                    }
                    break;
                }
            }
        }

        if run.is_complete() {
            writeln!(out)?;
            writeln!(out, "Ante {} cleared with ${}", ante, run.money())?;
            return Ok(());
        }
    }
}

/// Reads commands until the round is decided or the player quits.
fn play_round(
    round: &mut Round,
    money: u32,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<RoundEnd, CliError> {
    let mut mode = Mode::Play;
    loop {
        match round.status() {
            RoundStatus::Won => return Ok(RoundEnd::Won),
            RoundStatus::Lost => return Ok(RoundEnd::Lost),
            RoundStatus::Active => {}
        }

        ui::prompt(out, mode.prompt())?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(RoundEnd::Quit);
        };

        match parse_input(&line, round.hand().len()) {
            ParseResult::Mode(m) => mode = m,
            ParseResult::Quit => return Ok(RoundEnd::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Select(indices) => {
                let acted = match mode {
                    Mode::Play => round.play(&indices).map(Some),
                    Mode::Discard => round.discard(&indices).map(|_| None),
                };
                match acted {
                    Ok(played) => {
                        if let Some(result) = played {
                            writeln!(out, "{}", format_play(&result))?;
                        }
                        writeln!(out, "{}", format_snapshot(&round.snapshot(money)))?;
                    }
                    Err(e) => ui::write_error(err, &e.to_string())?,
                }
            }
        }
    }
}

fn record_round(
    logger: Option<&mut HistoryLogger>,
    ante: u8,
    deck_seed: u64,
    round: &Round,
    payout: Option<Payout>,
) -> Result<(), CliError> {
    let Some(logger) = logger else {
        return Ok(());
    };
    let id = logger.next_id();
    let record = RoundRecord::from_round(id, ante, Some(deck_seed), round, payout);
    logger.write(&record)?;
    Ok(())
}
