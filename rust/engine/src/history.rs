use serde::{Deserialize, Serialize};

use crate::blinds::{Blind, Payout, Requirement};
use crate::cards::Card;
use crate::hand::HandCategory;
use crate::round::{Round, RoundStatus};
use crate::scoring::PlayResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Play,
    Discard,
}

/// One play or discard within a round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub kind: ActionKind,
    /// Cards that left the hand, in selection order
    pub cards: Vec<Card>,
    /// Category of a play; absent for discards
    #[serde(default)]
    pub category: Option<HandCategory>,
    #[serde(default)]
    pub score: Option<u64>,
}

impl ActionRecord {
    pub fn played(result: &PlayResult) -> Self {
        Self {
            kind: ActionKind::Play,
            cards: result.played.clone(),
            category: Some(result.category),
            score: Some(result.score),
        }
    }

    pub fn discarded(cards: &[Card]) -> Self {
        Self {
            kind: ActionKind::Discard,
            cards: cards.to_vec(),
            category: None,
            score: None,
        }
    }
}

/// Complete record of a finished (or abandoned) round.
/// Serialized to JSONL, one round per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    pub ante: u8,
    pub blind: Blind,
    pub requirement: Requirement,
    /// Seed of the deck the round was dealt from
    pub seed: Option<u64>,
    pub actions: Vec<ActionRecord>,
    pub score: u64,
    pub outcome: RoundStatus,
    #[serde(default)]
    pub payout: Option<Payout>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_round(
        round_id: String,
        ante: u8,
        seed: Option<u64>,
        round: &Round,
        payout: Option<Payout>,
    ) -> Self {
        Self {
            round_id,
            ante,
            blind: round.blind(),
            requirement: round.requirement(),
            seed,
            actions: round.actions().to_vec(),
            score: round.score(),
            outcome: round.status(),
            payout,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`RoundRecord`]s to a JSONL file.
pub struct HistoryLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HistoryLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
