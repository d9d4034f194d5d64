//! Fixed keyword tables driving the extraction routines.
//!
//! Tables are ordered `(label, keywords)` slices rather than maps: first
//! match wins for occupation and location, and append order is part of the
//! contract for interests, goals, and frustrations. All matching is
//! case-insensitive substring containment against pre-lowercased text — no
//! tokenization or word boundaries (an accepted heuristic limitation).

/// Interest categories; labels are title-cased before display.
pub const INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "programming",
        &["code", "python", "javascript", "programming", "developer", "software"],
    ),
    ("gaming", &["game", "gaming", "play", "steam", "xbox", "playstation"]),
    ("technology", &["tech", "technology", "computer", "laptop", "phone"]),
    ("music", &["music", "song", "album", "artist", "band"]),
    ("sports", &["football", "basketball", "soccer", "baseball", "sport"]),
    ("movies", &["movie", "film", "cinema", "watch", "series"]),
    ("cooking", &["cook", "recipe", "food", "kitchen", "meal"]),
    ("travel", &["travel", "trip", "vacation", "country", "visit"]),
];

/// Occupation categories, scanned in order; first match wins.
pub const OCCUPATION_KEYWORDS: &[(&str, &[&str])] = &[
    ("student", &["student", "college", "university", "school"]),
    ("developer", &["developer", "programmer", "coding", "software"]),
    ("teacher", &["teacher", "teaching", "education"]),
    ("healthcare", &["doctor", "nurse", "medical", "healthcare"]),
];

/// Location keywords, scanned in order; first match wins.
pub const LOCATION_KEYWORDS: &[&str] =
    &["usa", "america", "canada", "uk", "britain", "australia", "europe"];

/// Goal labels with their trigger keywords; all matches are included.
pub const GOAL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Learn new skills", &["learn", "learning", "study", "education"]),
    ("Career advancement", &["job", "career", "work", "promotion"]),
    ("Help others", &["help", "helping", "advice", "support"]),
    ("Entertainment", &["fun", "entertainment", "hobby", "enjoy"]),
];

/// Frustration labels with their trigger keywords; all matches are included.
pub const FRUSTRATION_KEYWORDS: &[(&str, &[&str])] = &[
    ("Technical issues", &["bug", "error", "problem", "issue", "broken"]),
    ("Time management", &["time", "busy", "schedule", "deadline"]),
    ("Learning curve", &["difficult", "hard", "struggle", "confusing"]),
];

/// Words counted (by presence, not frequency) for the positive sentiment side.
pub const POSITIVE_WORDS: &[&str] =
    &["good", "great", "awesome", "love", "like", "amazing", "excellent"];

/// Words counted (by presence, not frequency) for the negative sentiment side.
pub const NEGATIVE_WORDS: &[&str] =
    &["bad", "terrible", "hate", "dislike", "awful", "horrible"];
