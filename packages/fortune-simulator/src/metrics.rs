//! Per-game metrics emitted by the simulator.

use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub phrase: String,
    pub seats: Vec<String>,
    pub final_scores: Vec<i64>,
    pub winners: Vec<usize>,
    pub spins: usize,
    pub letters_guessed: usize,
    pub guessed_letters: String,
    pub duration_ms: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    seats: &[String],
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    GameMetrics {
        game_id,
        seed,
        phrase: result.phrase.clone(),
        seats: seats.to_vec(),
        final_scores: result.final_scores.clone(),
        winners: result.winners.clone(),
        spins: result.spins,
        letters_guessed: result.guessed_letters.len(),
        guessed_letters: result.guessed_letters.iter().collect(),
        duration_ms,
    }
}

/// Running per-seat totals across a batch.
#[derive(Debug, Clone, Default)]
pub struct SeatStats {
    pub games: u32,
    pub wins: u32,
    pub total_score: i64,
    pub min_score: Option<i64>,
    pub max_score: Option<i64>,
}

impl SeatStats {
    pub fn record(&mut self, score: i64, won: bool) {
        self.games += 1;
        self.total_score += score;
        if won {
            self.wins += 1;
        }
        self.min_score = Some(self.min_score.map_or(score, |m| m.min(score)));
        self.max_score = Some(self.max_score.map_or(score, |m| m.max(score)));
    }

    pub fn average(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / f64::from(self.games)
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games) * 100.0
        }
    }
}

/// Fold a batch of results into one `SeatStats` per seat.
pub fn seat_stats(results: &[GameResult], seats: usize) -> Vec<SeatStats> {
    let mut stats = vec![SeatStats::default(); seats];
    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            if let Some(entry) = stats.get_mut(seat) {
                entry.record(score, result.winners.contains(&seat));
            }
        }
    }
    stats
}
