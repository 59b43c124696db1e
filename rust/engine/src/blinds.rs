use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::deck::Deck;
use crate::errors::GameError;
use crate::round::{Round, RoundRules, RoundStatus};

/// Highest ante level with an entry in the requirement table.
pub const MAX_ANTE: u8 = 39;

/// One unit of interest is paid per this much money held, up to the cap.
pub const INTEREST_STEP: u32 = 5;
pub const INTEREST_CAP: u32 = 5;

// Base requirement per ante level. The last entry is a hard cap: no score reaches it.
const ANTE_BASE: [f64; MAX_ANTE as usize + 1] = [
    100.0,
    300.0,
    800.0,
    2_000.0,
    5_000.0,
    11_000.0,
    20_000.0,
    35_000.0,
    50_000.0,
    110_000.0,
    560_000.0,
    7_200_000.0,
    300_000_000.0,
    47_000_000_000.0,
    2.9e13,
    7.7e16,
    8.6e20,
    4.2e25,
    9.2e30,
    9.2e36,
    4.3e43,
    9.7e50,
    1.0e59,
    5.8e67,
    1.6e77,
    2.4e87,
    1.9e98,
    8.4e109,
    2.0e122,
    2.7e135,
    2.1e149,
    9.9e163,
    2.7e179,
    4.4e195,
    4.4e212,
    2.8e230,
    1.1e249,
    2.7e268,
    4.5e288,
    f64::INFINITY,
];

/// Score a blind asks for.
///
/// Requirements beyond what a `u64` score can hold are [`Requirement::Unreachable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Chips(u64),
    Unreachable,
}

impl Requirement {
    fn from_table(value: f64) -> Self {
        // u64::MAX as f64 rounds up to 2^64, so anything below it casts exactly.
        if value.is_finite() && value >= 0.0 && value < u64::MAX as f64 {
            Requirement::Chips(value as u64)
        } else {
            Requirement::Unreachable
        }
    }

    pub fn is_met(self, score: u64) -> bool {
        match self {
            Requirement::Chips(chips) => score >= chips,
            Requirement::Unreachable => false,
        }
    }

    pub fn chips(self) -> Option<u64> {
        match self {
            Requirement::Chips(chips) => Some(chips),
            Requirement::Unreachable => None,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Chips(chips) => write!(f, "{}", chips),
            Requirement::Unreachable => f.write_str("∞"),
        }
    }
}

fn ante_base_value(ante: u8) -> f64 {
    ANTE_BASE
        .get(usize::from(ante))
        .copied()
        .unwrap_or(f64::INFINITY)
}

/// Base requirement of an ante level (the Small blind's requirement).
pub fn ante_base(ante: u8) -> Requirement {
    Requirement::from_table(ante_base_value(ante))
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Blind {
    Small,
    Big,
    Boss,
}

impl Blind {
    /// Play order within an ante.
    pub const ALL: [Blind; 3] = [Blind::Small, Blind::Big, Blind::Boss];

    pub fn name(self) -> &'static str {
        match self {
            Blind::Small => "Small blind",
            Blind::Big => "Big blind",
            Blind::Boss => "Boss blind",
        }
    }

    /// Cash paid for clearing the blind.
    pub fn reward(self) -> u32 {
        match self {
            Blind::Small => 3,
            Blind::Big => 4,
            Blind::Boss => 5,
        }
    }

    pub fn requirement(self, ante: u8) -> Requirement {
        let base = ante_base_value(ante);
        let value = match self {
            Blind::Small => base,
            Blind::Big => (base * 1.5).floor(),
            Blind::Boss => base * 2.0,
        };
        Requirement::from_table(value)
    }
}

impl fmt::Display for Blind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cash-out breakdown for a cleared blind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub reward: u32,
    /// One per unused hand
    pub hand_bonus: u32,
    pub interest: u32,
}

impl Payout {
    pub fn total(&self) -> u32 {
        self.reward + self.hand_bonus + self.interest
    }
}

/// Payout for clearing `blind` with `hands_left` unused plays while holding `money`.
///
/// Interest is computed on the money held before this payout.
pub fn payout(blind: Blind, hands_left: u8, money: u32) -> Payout {
    Payout {
        reward: blind.reward(),
        hand_bonus: u32::from(hands_left),
        interest: (money / INTEREST_STEP).min(INTEREST_CAP),
    }
}

/// One attempt at an ante: Small, Big and Boss blind in order, with the
/// money earned so far.
///
/// A retry after a loss is a fresh `AnteRun`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnteRun {
    ante: u8,
    next: usize,
    money: u32,
}

impl AnteRun {
    pub fn new(ante: u8) -> Self {
        Self {
            ante,
            next: 0,
            money: 0,
        }
    }

    pub fn ante(&self) -> u8 {
        self.ante
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn blinds(&self) -> [(Blind, Requirement); 3] {
        Blind::ALL.map(|b| (b, self.requirement_for(b)))
    }

    /// Blind to be played next, `None` once all three are cleared.
    pub fn current_blind(&self) -> Option<Blind> {
        Blind::ALL.get(self.next).copied()
    }

    pub fn requirement_for(&self, blind: Blind) -> Requirement {
        blind.requirement(self.ante)
    }

    pub fn cleared(&self) -> usize {
        self.next
    }

    pub fn is_complete(&self) -> bool {
        self.next >= Blind::ALL.len()
    }

    /// Deals the current blind's round from `deck`.
    pub fn start_round(&self, deck: Deck, rules: RoundRules) -> Result<Round, GameError> {
        let blind = self.current_blind().ok_or(GameError::AnteComplete)?;
        Round::new(blind, self.requirement_for(blind), deck, rules)
    }

    /// Pays out a won round and moves on to the next blind.
    pub fn cash_out(&mut self, round: &Round) -> Result<Payout, GameError> {
        let blind = self.current_blind().ok_or(GameError::AnteComplete)?;
        if round.status() != RoundStatus::Won {
            return Err(GameError::RoundNotWon);
        }
        let p = payout(blind, round.hands_left(), self.money);
        self.money += p.total();
        self.next += 1;
        info!(
            ante = self.ante,
            blind = blind.name(),
            gain = p.total(),
            money = self.money,
            "blind cleared"
        );
        Ok(p)
    }
}
