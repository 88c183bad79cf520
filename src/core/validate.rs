use crate::models::{Profile, ProfileInput};
use thiserror::Error;

/// Errors produced by profile validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing user profile data")]
    MissingProfile,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Validate presence of the required profile fields
///
/// Fields are checked in the fixed order name, genres, instruments,
/// experience, location; the first absent one is reported. `location` is
/// only required when `require_location` is set: the algorithmic scorer
/// wants it, the AI prompt can render "Not specified" instead.
pub fn validate_profile(
    input: &ProfileInput,
    require_location: bool,
) -> Result<Profile, ValidationError> {
    let name = input
        .name
        .clone()
        .ok_or(ValidationError::MissingField("name"))?;
    let genres = input
        .genres
        .clone()
        .ok_or(ValidationError::MissingField("genres"))?;
    let instruments = input
        .instruments
        .clone()
        .ok_or(ValidationError::MissingField("instruments"))?;
    let experience = input
        .experience
        .clone()
        .ok_or(ValidationError::MissingField("experience"))?;

    if require_location && input.location.is_none() {
        return Err(ValidationError::MissingField("location"));
    }

    Ok(Profile {
        name,
        genres,
        instruments,
        experience,
        location: input.location.clone(),
        bio: input.bio.clone(),
    })
}
