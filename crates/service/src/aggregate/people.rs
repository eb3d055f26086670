//! Director and actor rollups.
//!
//! Votes, ratings and wins are summed over joined rows, so a movie with
//! several award rows weighs more than one without; `movies` counts
//! distinct movie ids.

use std::collections::{HashMap, HashSet};

use filmiq_core::{JoinedRecord, TOP_DIRECTOR_MIN_MOVIES, TOP_RANKING_LIMIT, explode};
use serde::Serialize;

use super::{Mean, desc_nulls_last};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorStats {
    pub director: String,
    pub movies: usize,
    pub avg_rating: Option<f64>,
    pub total_votes: u64,
    pub oscar_wins: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorStats {
    pub actor: String,
    pub movies: usize,
    pub avg_rating: Option<f64>,
    pub total_votes: u64,
    pub oscar_wins: u64,
}

#[derive(Default)]
struct Group<'a> {
    movie_ids: HashSet<&'a str>,
    rating: Mean,
    votes: u64,
    wins: u64,
}

impl<'a> Group<'a> {
    fn add(&mut self, row: &'a JoinedRecord) {
        self.movie_ids.insert(row.movie.movie_id.as_str());
        self.rating.push(row.movie.rating);
        self.votes = self.votes.saturating_add(row.movie.votes.unwrap_or(0));
        self.wins += u64::from(row.is_winner());
    }
}

fn group_by<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a JoinedRecord)>,
) -> HashMap<&'a str, Group<'a>> {
    let mut groups: HashMap<&str, Group<'_>> = HashMap::new();
    for (name, row) in pairs {
        groups.entry(name).or_default().add(row);
    }
    groups
}

/// Per-director rollup, best mean rating first.
///
/// Rows without a director are left out instead of being pooled into one
/// unnamed group.
pub fn director_stats(view: &[&JoinedRecord]) -> Vec<DirectorStats> {
    let pairs = view.iter().filter_map(|row| {
        row.movie
            .director
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| (d, *row))
    });
    let mut stats: Vec<DirectorStats> = group_by(pairs)
        .into_iter()
        .map(|(name, g)| DirectorStats {
            director: name.to_owned(),
            movies: g.movie_ids.len(),
            avg_rating: g.rating.rounded(),
            total_votes: g.votes,
            oscar_wins: g.wins,
        })
        .collect();
    stats.sort_by(|a, b| {
        desc_nulls_last(a.avg_rating, b.avg_rating).then_with(|| a.director.cmp(&b.director))
    });
    stats
}

/// Best-rated directors with at least two distinct movies.
pub fn top_directors(stats: &[DirectorStats]) -> Vec<DirectorStats> {
    stats
        .iter()
        .filter(|d| d.movies >= TOP_DIRECTOR_MIN_MOVIES)
        .take(TOP_RANKING_LIMIT)
        .cloned()
        .collect()
}

/// Per-actor rollup over the exploded cast, most movies first.
pub fn actor_stats(view: &[&JoinedRecord]) -> Vec<ActorStats> {
    let pairs = explode(view.iter().copied(), |row| row.movie.star.as_deref())
        .map(|item| (item.token, item.parent));
    let mut stats: Vec<ActorStats> = group_by(pairs)
        .into_iter()
        .map(|(name, g)| ActorStats {
            actor: name.to_owned(),
            movies: g.movie_ids.len(),
            avg_rating: g.rating.rounded(),
            total_votes: g.votes,
            oscar_wins: g.wins,
        })
        .collect();
    stats.sort_by(|a, b| b.movies.cmp(&a.movies).then_with(|| a.actor.cmp(&b.actor)));
    stats
}

/// Actors with the most Oscar wins.
pub fn top_actors(stats: &[ActorStats]) -> Vec<ActorStats> {
    let mut ranked = stats.to_vec();
    ranked.sort_by(|a, b| b.oscar_wins.cmp(&a.oscar_wins).then_with(|| a.actor.cmp(&b.actor)));
    ranked.truncate(TOP_RANKING_LIMIT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{award, credited, joined};
    use crate::query::full_view;

    fn fixture() -> Vec<JoinedRecord> {
        joined(
            vec![
                credited("tt1", "Inception", 2010, 8.8, "Christopher Nolan", "Leonardo DiCaprio, Tom Hardy"),
                credited("tt2", "Dunkirk", 2017, 7.8, "Christopher Nolan", "Tom Hardy"),
                credited("tt3", "The Revenant", 2015, 8.0, "Alejandro G. Inarritu", "Leonardo DiCaprio, Tom Hardy"),
                credited("tt4", "Birdman", 2014, 7.7, "Alejandro G. Inarritu", "Michael Keaton"),
                credited("tt5", "Lost in Translation", 2003, 7.7, "Sofia Coppola", "Bill Murray"),
            ],
            vec![
                award("Inception", "Cinematography", "yes"),
                award("Inception", "Sound Mixing", "yes"),
                award("The Revenant", "Actor", "True"),
                award("Birdman", "Best Picture", "1"),
            ],
        )
    }

    #[test]
    fn directors_roll_up_joined_rows() {
        let table = fixture();
        let stats = director_stats(&full_view(&table));
        let names: Vec<&str> = stats.iter().map(|d| d.director.as_str()).collect();
        assert_eq!(names, vec!["Christopher Nolan", "Alejandro G. Inarritu", "Sofia Coppola"]);

        let nolan = &stats[0];
        assert_eq!(nolan.movies, 2);
        // rows: 8.8, 8.8 (two award rows), 7.8
        assert_eq!(nolan.avg_rating, Some(8.47));
        assert_eq!(nolan.total_votes, 3000);
        assert_eq!(nolan.oscar_wins, 2);
    }

    #[test]
    fn rows_without_a_director_form_no_group() {
        let table = joined(
            vec![
                credited("tt1", "Heat", 1995, 8.3, "Michael Mann", "Al Pacino"),
                credited("tt2", "Untitled", 2001, 6.0, "   ", "Al Pacino"),
                crate::fixtures::movie("tt3", "Anonymous", 2002, 9.9, "Drama"),
            ],
            vec![],
        );
        let stats = director_stats(&full_view(&table));
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].director, "Michael Mann");
        assert_eq!(stats[0].movies, 1);
    }

    #[test]
    fn top_directors_need_two_movies() {
        let table = fixture();
        let top = top_directors(&director_stats(&full_view(&table)));
        assert!(top.iter().all(|d| d.movies >= 2));
        assert!(!top.iter().any(|d| d.director == "Sofia Coppola"));
    }

    #[test]
    fn actors_come_from_the_exploded_cast() {
        let table = fixture();
        let stats = actor_stats(&full_view(&table));
        let hardy = stats.iter().find(|a| a.actor == "Tom Hardy").unwrap();
        assert_eq!(hardy.movies, 3);
        assert_eq!(hardy.oscar_wins, 3);
        assert_eq!(stats[0].actor, "Tom Hardy");
    }

    #[test]
    fn top_actors_rank_by_wins() {
        let table = fixture();
        let top = top_actors(&actor_stats(&full_view(&table)));
        let ranked: Vec<(&str, u64)> = top.iter().map(|a| (a.actor.as_str(), a.oscar_wins)).collect();
        assert_eq!(
            ranked,
            vec![
                ("Leonardo DiCaprio", 3),
                ("Tom Hardy", 3),
                ("Michael Keaton", 1),
                ("Bill Murray", 0),
            ]
        );
    }

    #[test]
    fn actors_outside_the_view_never_appear() {
        let table = fixture();
        let view: Vec<&JoinedRecord> = table.iter().filter(|r| r.movie.year == Some(2003)).collect();
        let actors: Vec<String> = actor_stats(&view).into_iter().map(|a| a.actor).collect();
        assert_eq!(actors, vec!["Bill Murray".to_owned()]);
    }

    #[test]
    fn empty_view_gives_empty_stats() {
        assert!(director_stats(&[]).is_empty());
        assert!(actor_stats(&[]).is_empty());
        assert!(top_actors(&[]).is_empty());
    }
}
