//! Catalog fixtures.

use anidle_catalog::domain::catalog::Catalog;
use anidle_catalog::domain::record::{AnimeRecord, Season};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn build(records: Vec<AnimeRecord>) -> Catalog {
    Catalog::new(records).expect("fixture catalog is valid")
}

/// Two records: `A` (2010, 12 episodes) and `B` (2015, 24 episodes).
///
/// # Panics
///
/// Never; the fixture is non-empty with unique titles.
#[must_use]
pub fn two_title_catalog() -> Catalog {
    build(vec![
        AnimeRecord {
            year: Some(2010),
            episodes: Some(12),
            ..AnimeRecord::titled("A")
        },
        AnimeRecord {
            year: Some(2015),
            episodes: Some(24),
            ..AnimeRecord::titled("B")
        },
    ])
}

/// `count` records titled `Title 00`, `Title 01`, … with a year and episode
/// count derived from the index.
///
/// # Panics
///
/// Panics if `count` is zero.
#[must_use]
pub fn numbered_catalog(count: usize) -> Catalog {
    build(
        (0..count)
            .map(|i| AnimeRecord {
                year: Some(2000 + i32::try_from(i).unwrap_or(0)),
                episodes: Some(u32::try_from(i + 1).unwrap_or(1)),
                tags: vec![format!("tag{}", i % 3)],
                ..AnimeRecord::titled(format!("Title {i:02}"))
            })
            .collect(),
    )
}

/// A small catalog of fully populated records.
///
/// # Panics
///
/// Never; the fixture is non-empty with unique titles.
#[must_use]
pub fn sample_catalog() -> Catalog {
    build(vec![
        AnimeRecord {
            kind: Some("TV".to_owned()),
            episodes: Some(26),
            status: Some("FINISHED".to_owned()),
            season: Some(Season::Spring),
            year: Some(1998),
            score: Some(8.75),
            source: Some("original".to_owned()),
            studios: strings(&["Sunrise"]),
            producers: strings(&["Bandai Visual", "Sunrise"]),
            tags: strings(&["action", "space", "drama"]),
            themes: strings(&["adult cast", "space"]),
            ..AnimeRecord::titled("Cowboy Bebop")
        },
        AnimeRecord {
            kind: Some("TV".to_owned()),
            episodes: Some(26),
            status: Some("FINISHED".to_owned()),
            season: Some(Season::Fall),
            year: Some(2003),
            score: Some(8.31),
            source: Some("manga".to_owned()),
            studios: strings(&["Sunrise"]),
            producers: strings(&["Bandai Visual", "NHK"]),
            tags: strings(&["drama", "sci-fi", "space"]),
            themes: strings(&["space", "workplace"]),
            ..AnimeRecord::titled("Planetes")
        },
        AnimeRecord {
            kind: Some("TV".to_owned()),
            episodes: Some(13),
            status: Some("FINISHED".to_owned()),
            season: Some(Season::Fall),
            year: Some(2002),
            score: Some(7.96),
            source: Some("original".to_owned()),
            studios: strings(&["Radix"]),
            producers: strings(&["Pioneer LDC"]),
            tags: strings(&["drama", "mystery", "slice of life"]),
            themes: strings(&["psychological"]),
            ..AnimeRecord::titled("Haibane Renmei")
        },
        AnimeRecord {
            kind: Some("MOVIE".to_owned()),
            episodes: Some(1),
            status: Some("FINISHED".to_owned()),
            season: Some(Season::Summer),
            year: Some(2001),
            score: None,
            source: Some("original".to_owned()),
            studios: strings(&["Studio Ghibli"]),
            producers: Vec::new(),
            tags: strings(&["adventure", "fantasy"]),
            themes: Vec::new(),
            ..AnimeRecord::titled("Spirited Away")
        },
    ])
}
