use crate::models::Profile;

/// Render the compatibility prompt for two profiles
///
/// The trailing SCORE/REASONING instruction is an interface contract with
/// the model: `parse_ai_response` relies on exactly these two labeled lines,
/// so the template must stay stable.
pub fn build_prompt(a: &Profile, b: &Profile) -> String {
    format!(
        "Analyze the musical compatibility of these two musicians and rate it from 1 to 100.\n\
         \n\
         Musician 1:\n\
         {}\n\
         \n\
         Musician 2:\n\
         {}\n\
         \n\
         Respond in exactly this format:\n\
         SCORE: <integer 1-100>\n\
         REASONING: <one or two sentences explaining the rating>",
        render_profile(a),
        render_profile(b)
    )
}

fn render_profile(profile: &Profile) -> String {
    format!(
        "- Name: {}\n\
         - Genres: {}\n\
         - Instruments: {}\n\
         - Experience: {}\n\
         - Location: {}\n\
         - Bio: {}",
        profile.name,
        profile.genres.join(", "),
        profile.instruments.join(", "),
        profile.experience,
        profile.location_or_unspecified(),
        profile.bio_or_unspecified()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            genres: vec!["Rock".to_string(), "Pop".to_string()],
            instruments: vec!["Guitar".to_string(), "Vocals".to_string()],
            experience: "intermediate".to_string(),
            location: Some("New York".to_string()),
            bio: Some("Love playing rock music".to_string()),
        }
    }

    #[test]
    fn test_prompt_embeds_both_profiles() {
        let prompt = build_prompt(&profile("Alice"), &profile("Bob"));

        assert!(prompt.contains("Name: Alice"));
        assert!(prompt.contains("Name: Bob"));
        assert!(prompt.contains("Genres: Rock, Pop"));
        assert!(prompt.contains("Instruments: Guitar, Vocals"));
        assert!(prompt.contains("Experience: intermediate"));
        assert!(prompt.contains("Location: New York"));
        assert!(prompt.contains("Bio: Love playing rock music"));
    }

    #[test]
    fn test_prompt_ends_with_output_contract() {
        let prompt = build_prompt(&profile("Alice"), &profile("Bob"));

        assert!(prompt.contains("SCORE: <integer 1-100>"));
        assert!(prompt.ends_with("REASONING: <one or two sentences explaining the rating>"));
    }

    #[test]
    fn test_missing_optional_fields_render_placeholders() {
        let mut a = profile("Alice");
        a.location = None;
        a.bio = None;

        let prompt = build_prompt(&a, &profile("Bob"));
        assert!(prompt.contains("Location: Not specified"));
        assert!(prompt.contains("Bio: Not provided"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = profile("Alice");
        let b = profile("Bob");
        assert_eq!(build_prompt(&a, &b), build_prompt(&a, &b));
    }
}
