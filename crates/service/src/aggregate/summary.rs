use filmiq_core::JoinedRecord;
use serde::Serialize;

use super::Mean;

/// Headline metrics of the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Joined rows, so a movie with several award rows counts several times
    pub movies: usize,
    /// `None` when no row has a rating
    pub avg_rating: Option<f64>,
    pub total_votes: u64,
    pub oscar_wins: u64,
}

pub fn summary_metrics(view: &[&JoinedRecord]) -> SummaryMetrics {
    let mut rating = Mean::default();
    let mut total_votes = 0u64;
    let mut oscar_wins = 0u64;
    for row in view {
        rating.push(row.movie.rating);
        total_votes = total_votes.saturating_add(row.movie.votes.unwrap_or(0));
        oscar_wins += u64::from(row.is_winner());
    }
    SummaryMetrics { movies: view.len(), avg_rating: rating.rounded(), total_votes, oscar_wins }
}
