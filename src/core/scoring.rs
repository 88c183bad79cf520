use crate::models::{ExperienceLevel, Profile, ScoreResult, ScoreSource};
use crate::services::inference::InferenceError;
use thiserror::Error;

/// Errors that can occur while producing a compatibility score
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unrecognized experience level: {0:?}")]
    InvalidExperienceLevel(String),

    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
}

const MAX_GENRE_POINTS: u8 = 30;
const POINTS_PER_SHARED_GENRE: u8 = 10;
const SAME_LOCATION_POINTS: u8 = 50;
const DIFFERENT_LOCATION_POINTS: u8 = 10;

/// Calculate a deterministic compatibility score (0-100) for two profiles
///
/// Scoring formula:
/// - genre overlap: 10 points per shared genre, capped at 30
/// - experience distance: same level 20, adjacent 10, further apart 5
/// - location: case-insensitive match 50, otherwise (or missing) 10
pub fn score_compatibility(a: &Profile, b: &Profile) -> Result<ScoreResult, ScoringError> {
    let shared_genres = shared_genres(a, b);
    let genre_points = (shared_genres.len() as u8)
        .saturating_mul(POINTS_PER_SHARED_GENRE)
        .min(MAX_GENRE_POINTS);

    let experience_points = experience_points(a, b)?;

    let same_location = same_location(a, b);
    let location_points = if same_location {
        SAME_LOCATION_POINTS
    } else {
        DIFFERENT_LOCATION_POINTS
    };

    // Component caps keep the sum at 100 or below; the clamp is defensive
    let score = (genre_points + experience_points + location_points).min(100);

    let reasoning = build_reasoning(a, b, &shared_genres, same_location, score);

    Ok(ScoreResult {
        score,
        reasoning,
        source: ScoreSource::Algorithmic,
        used_fallback: false,
    })
}

/// Distinct genres present in both profiles, in the first profile's order
fn shared_genres(a: &Profile, b: &Profile) -> Vec<String> {
    let mut shared: Vec<String> = Vec::new();
    for genre in &a.genres {
        if b.genres.contains(genre) && !shared.contains(genre) {
            shared.push(genre.clone());
        }
    }
    shared
}

fn experience_points(a: &Profile, b: &Profile) -> Result<u8, ScoringError> {
    let rank_a = experience_rank(&a.experience)?;
    let rank_b = experience_rank(&b.experience)?;

    Ok(match rank_a.abs_diff(rank_b) {
        0 => 20,
        1 => 10,
        _ => 5,
    })
}

fn experience_rank(experience: &str) -> Result<u8, ScoringError> {
    ExperienceLevel::parse(experience)
        .map(ExperienceLevel::rank)
        .ok_or_else(|| ScoringError::InvalidExperienceLevel(experience.to_string()))
}

fn same_location(a: &Profile, b: &Profile) -> bool {
    match (&a.location, &b.location) {
        (Some(loc_a), Some(loc_b)) => loc_a.eq_ignore_ascii_case(loc_b),
        _ => false,
    }
}

fn build_reasoning(
    a: &Profile,
    b: &Profile,
    shared_genres: &[String],
    same_location: bool,
    score: u8,
) -> String {
    let genres = if shared_genres.is_empty() {
        "None".to_string()
    } else {
        shared_genres.join(", ")
    };
    let location = if same_location {
        "Same city"
    } else {
        "Different locations"
    };

    format!(
        "Compatibility analysis for {} and {}:\n\
         - Shared musical genres: {}\n\
         - Experience levels: {} and {}\n\
         - Location compatibility: {}\n\
         - Overall compatibility score: {}/100",
        a.name, b.name, genres, a.experience, b.experience, location, score
    )
}
