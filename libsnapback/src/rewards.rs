//! Synthetic rewards ledger generation
//!
//! Produces a plausible-looking points balance and transaction history for
//! a username. The ledger is regenerated on every login and every
//! rehydration, so balances are per-process rather than durable; the
//! persisted session record stays a pure identity payload.

use rand::Rng;
use uuid::Uuid;

use crate::directory::random_business;
use crate::types::{Transaction, UserRewards};

/// Inclusive range the points balance is drawn from.
const MIN_POINTS: i64 = 100;
const MAX_POINTS: i64 = 500;

/// How the balance is split across the three transactions. Each share is
/// floored, so the shares may undershoot the balance slightly; the balance
/// is the figure of record.
const SHARE_WEIGHTS: [f64; 3] = [0.30, 0.35, 0.35];

const DAY_MS: i64 = 86_400_000;

/// Generate a fresh rewards ledger for `username`.
///
/// Three transactions at three venues drawn with replacement (the same
/// business can appear more than once), dated today, yesterday, and the
/// day before.
pub fn generate_rewards(username: &str) -> UserRewards {
    let points = rand::thread_rng().gen_range(MIN_POINTS..=MAX_POINTS);
    let now_ms = chrono::Utc::now().timestamp_millis();

    let transactions = SHARE_WEIGHTS
        .iter()
        .enumerate()
        .map(|(idx, weight)| Transaction {
            id: Uuid::new_v4().to_string(),
            store: random_business().to_string(),
            points: (points as f64 * weight).floor() as i64,
            date: now_ms - idx as i64 * DAY_MS,
        })
        .collect();

    UserRewards {
        username: username.to_string(),
        points,
        transactions,
    }
}
