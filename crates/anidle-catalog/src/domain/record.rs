//! Anime records and their attribute types.

use std::fmt;

/// Airing season of an anime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// January to March.
    Winter,
    /// April to June.
    Spring,
    /// July to September.
    Summer,
    /// October to December.
    Fall,
}

impl Season {
    /// Parses a season name, case-insensitively.
    ///
    /// Returns `None` for anything that is not a known season, including the
    /// `UNDEFINED` placeholder used by upstream data sets.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" | "autumn" => Some(Self::Fall),
            _ => None,
        }
    }

    /// Returns the lowercase season name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry.
///
/// Every attribute other than `title` may be missing in source data. Set
/// valued attributes use an empty list for "absent".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimeRecord {
    /// Title; unique within a catalog.
    pub title: String,
    /// Media type, e.g. "TV" or "MOVIE".
    pub kind: Option<String>,
    /// Number of episodes.
    pub episodes: Option<u32>,
    /// Release status, e.g. "FINISHED". Carried for display only.
    pub status: Option<String>,
    /// Airing season.
    pub season: Option<Season>,
    /// Airing year.
    pub year: Option<i32>,
    /// Aggregate user score.
    pub score: Option<f64>,
    /// Adaptation source, e.g. "manga".
    pub source: Option<String>,
    /// Animation studios.
    pub studios: Vec<String>,
    /// Producers.
    pub producers: Vec<String>,
    /// Genres and tags.
    pub tags: Vec<String>,
    /// Themes.
    pub themes: Vec<String>,
}

impl AnimeRecord {
    /// Creates a record with only a title set.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Trims every set member and drops blanks and repeats, keeping
    /// first-seen order.
    pub fn normalize_members(&mut self) {
        for members in [
            &mut self.studios,
            &mut self.producers,
            &mut self.tags,
            &mut self.themes,
        ] {
            *members = dedup_members(std::mem::take(members));
        }
    }
}

fn dedup_members(members: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(members.len());
    for member in members {
        let member = member.trim();
        if !member.is_empty() && !out.iter().any(|m| m == member) {
            out.push(member.to_owned());
        }
    }
    out
}
