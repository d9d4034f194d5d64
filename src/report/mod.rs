//! Text report renderer for personas.
//!
//! Serializes a [`Persona`] into a fixed, deterministic sectioned layout and
//! writes it to a UTF-8 file. No re-sorting happens here: every list renders
//! in the order stored on the persona.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::types::Persona;
use crate::utilities::errors::PersonaError;
use crate::utilities::string_utils::humanize_key;

/// Width of the `=` rule under the report header.
const HEADER_RULE: usize = 50;

/// Width of the `-` rule under each section title.
const SECTION_RULE: usize = 20;

/// Demographic fields in render order.
const DEMOGRAPHIC_FIELDS: &[&str] = &["age_range", "location", "occupation"];

/// Render a persona to the sectioned text layout.
///
/// Section order is fixed: header, Demographics, Interests, Personality
/// Traits, Behavior Patterns, Goals & Motivations, Frustrations, Online
/// Habits, then Citations only when the citation map is non-empty.
pub fn render(persona: &Persona) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "USER PERSONA: {}", persona.username.to_uppercase());
    out.push_str(&"=".repeat(HEADER_RULE));
    out.push_str("\n\n");

    push_section_header(&mut out, "DEMOGRAPHICS");
    for field in DEMOGRAPHIC_FIELDS {
        let value = match *field {
            "age_range" => &persona.demographics.age_range,
            "location" => &persona.demographics.location,
            _ => &persona.demographics.occupation,
        };
        let _ = writeln!(out, "{}: {}", humanize_key(field), value);
    }
    out.push('\n');

    push_list_section(&mut out, "INTERESTS", &persona.interests);
    push_list_section(&mut out, "PERSONALITY TRAITS", &persona.personality_traits);
    push_list_section(&mut out, "BEHAVIOR PATTERNS", &persona.behavior_patterns);
    push_list_section(&mut out, "GOALS & MOTIVATIONS", &persona.goals_motivations);
    push_list_section(&mut out, "FRUSTRATIONS", &persona.frustrations);
    push_list_section(&mut out, "ONLINE HABITS", &persona.online_habits);

    if !persona.citations.is_empty() {
        push_section_header(&mut out, "CITATIONS");
        for (category, urls) in &persona.citations {
            if urls.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}:", humanize_key(category));
            for url in urls {
                let _ = writeln!(out, "  - {}", url);
            }
            out.push('\n');
        }
    }

    out
}

/// Render and write the persona report as UTF-8. IO failures propagate.
pub fn save_to_file(persona: &Persona, path: impl AsRef<Path>) -> Result<(), PersonaError> {
    fs::write(path, render(persona))?;
    Ok(())
}

fn push_section_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}:", title);
    out.push_str(&"-".repeat(SECTION_RULE));
    out.push('\n');
}

fn push_list_section(out: &mut String, title: &str, entries: &[String]) {
    push_section_header(out, title);
    for entry in entries {
        let _ = writeln!(out, "\u{2022} {}", entry);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Demographics, Persona};
    use std::collections::BTreeMap;

    fn sample_persona() -> Persona {
        let mut citations = BTreeMap::new();
        citations.insert(
            "top_content".to_string(),
            vec!["https://reddit.com/r/rust/comments/abc/".to_string()],
        );
        Persona {
            username: "alice".to_string(),
            demographics: Demographics {
                age_range: "Unknown".to_string(),
                location: "Canada".to_string(),
                occupation: "Developer".to_string(),
            },
            interests: vec!["r/rust community".to_string(), "Programming".to_string()],
            personality_traits: vec!["Generally positive attitude".to_string()],
            behavior_patterns: vec!["Active in 2 different subreddits".to_string()],
            goals_motivations: vec!["Learn new skills".to_string()],
            frustrations: vec!["Technical issues".to_string()],
            online_habits: vec![
                "Most active in r/rust".to_string(),
                "Has made 10 posts/comments".to_string(),
            ],
            citations,
        }
    }

    #[test]
    fn test_render_header_and_section_order() {
        let text = render(&sample_persona());
        assert!(text.starts_with("USER PERSONA: ALICE\n"));
        assert!(text.contains(&"=".repeat(50)));

        let sections = [
            "DEMOGRAPHICS:",
            "INTERESTS:",
            "PERSONALITY TRAITS:",
            "BEHAVIOR PATTERNS:",
            "GOALS & MOTIVATIONS:",
            "FRUSTRATIONS:",
            "ONLINE HABITS:",
            "CITATIONS:",
        ];
        let mut last = 0;
        for section in sections {
            let pos = text.find(section).unwrap_or_else(|| {
                panic!("section {} missing", section);
            });
            assert!(pos > last, "section {} out of order", section);
            last = pos;
        }
    }

    #[test]
    fn test_render_humanizes_keys() {
        let text = render(&sample_persona());
        assert!(text.contains("Age Range: Unknown\n"));
        assert!(text.contains("Location: Canada\n"));
        assert!(text.contains("Occupation: Developer\n"));
        assert!(text.contains("Top Content:\n"));
    }

    #[test]
    fn test_render_bullets_in_stored_order() {
        let text = render(&sample_persona());
        assert!(text.contains("\u{2022} r/rust community\n\u{2022} Programming\n"));
        assert!(text.contains("  - https://reddit.com/r/rust/comments/abc/\n"));
    }

    #[test]
    fn test_render_omits_citations_when_empty() {
        let mut persona = sample_persona();
        persona.citations.clear();
        let text = render(&persona);
        assert!(!text.contains("CITATIONS:"));
    }

    #[test]
    fn test_render_skips_empty_citation_category() {
        let mut persona = sample_persona();
        persona
            .citations
            .insert("top_content".to_string(), Vec::new());
        let text = render(&persona);
        assert!(text.contains("CITATIONS:"));
        assert!(!text.contains("Top Content:"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let persona = sample_persona();
        assert_eq!(render(&persona), render(&persona));
    }

    #[test]
    fn test_save_to_file_writes_rendered_text() {
        let persona = sample_persona();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice_persona.txt");
        save_to_file(&persona, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render(&persona));
    }
}
