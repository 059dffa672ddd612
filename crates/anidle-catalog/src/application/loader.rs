//! Catalog file loading.
//!
//! Accepts the anime-offline-database layout: either a bare array of
//! records or an object with a `data` array. Unknown fields are ignored.

use std::path::Path;

use anidle_core::error::DomainError;
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::catalog::Catalog;
use crate::domain::record::{AnimeRecord, Season};

#[derive(Debug, Deserialize)]
struct WrappedDocument {
    data: Vec<RecordDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RecordDto {
    title: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    episodes: Option<u32>,
    status: Option<String>,
    anime_season: Option<AnimeSeasonDto>,
    score: Option<ScoreDto>,
    source: Option<String>,
    studios: Option<Vec<String>>,
    producers: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    genres: Option<Vec<String>>,
    themes: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnimeSeasonDto {
    season: Option<String>,
    year: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ScoreDto {
    median: Option<f64>,
    arithmetic_mean: Option<f64>,
    arithmetic_geometric_mean: Option<f64>,
}

impl ScoreDto {
    fn preferred(&self) -> Option<f64> {
        self.median
            .or(self.arithmetic_mean)
            .or(self.arithmetic_geometric_mean)
    }
}

impl RecordDto {
    fn into_record(self) -> Option<AnimeRecord> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let (season, year) = match self.anime_season {
            Some(s) => (s.season.as_deref().and_then(Season::parse), s.year),
            None => (None, None),
        };
        let mut tags = self.tags.unwrap_or_default();
        tags.extend(self.genres.unwrap_or_default());

        Some(AnimeRecord {
            title,
            kind: self.kind,
            episodes: self.episodes,
            status: self.status,
            season,
            year,
            score: self.score.as_ref().and_then(ScoreDto::preferred),
            source: self.source,
            studios: self.studios.unwrap_or_default(),
            producers: self.producers.unwrap_or_default(),
            tags,
            themes: self.themes.unwrap_or_default(),
        })
    }
}

fn build_catalog(entries: Vec<RecordDto>) -> Result<Catalog, DomainError> {
    let mut records = Vec::new();
    for (position, dto) in entries.into_iter().enumerate() {
        match dto.into_record() {
            Some(record) => records.push(record),
            None => warn!(position, "skipping catalog entry without a title"),
        }
    }
    Catalog::new(records)
}

/// Parses a JSON catalog document.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the text is not a valid catalog
/// document, or the errors of [`Catalog::new`].
pub fn parse_catalog_json(text: &str) -> Result<Catalog, DomainError> {
    let entries = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<RecordDto>>(text)
    } else {
        serde_json::from_str::<WrappedDocument>(text).map(|doc| doc.data)
    }
    .map_err(|e| DomainError::Infrastructure(format!("catalog JSON is invalid: {e}")))?;
    build_catalog(entries)
}

/// Parses a YAML catalog document.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the text is not a valid catalog
/// document, or the errors of [`Catalog::new`].
pub fn parse_catalog_yaml(text: &str) -> Result<Catalog, DomainError> {
    let invalid = |e: serde_yaml::Error| {
        DomainError::Infrastructure(format!("catalog YAML is invalid: {e}"))
    };
    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(invalid)?;
    let entries = if value.is_sequence() {
        serde_yaml::from_value::<Vec<RecordDto>>(value)
    } else {
        serde_yaml::from_value::<WrappedDocument>(value).map(|doc| doc.data)
    }
    .map_err(invalid)?;
    build_catalog(entries)
}

/// Reads a catalog file, choosing YAML for `.yaml`/`.yml` and JSON otherwise.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the file cannot be read or
/// decoded, or the errors of [`Catalog::new`].
pub fn load_catalog(path: &Path) -> Result<Catalog, DomainError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Infrastructure(format!("cannot read catalog {}: {e}", path.display()))
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let catalog = if is_yaml {
        parse_catalog_yaml(&text)?
    } else {
        parse_catalog_json(&text)?
    };

    info!(path = %path.display(), records = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFLINE_DB_SAMPLE: &str = r#"{
        "license": { "name": "ODbL" },
        "data": [
            {
                "title": "Cowboy Bebop",
                "type": "TV",
                "episodes": 26,
                "status": "FINISHED",
                "animeSeason": { "season": "SPRING", "year": 1998 },
                "score": { "arithmeticGeometricMean": 8.6, "arithmeticMean": 8.62, "median": 8.65 },
                "studios": ["sunrise"],
                "producers": ["bandai visual", "sunrise"],
                "tags": ["action", "space", "action"],
                "sources": ["https://example.invalid/1"]
            },
            {
                "title": "Some Short",
                "animeSeason": { "season": "UNDEFINED" },
                "studios": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_json_wrapped_document() {
        let catalog = parse_catalog_json(OFFLINE_DB_SAMPLE).unwrap();

        assert_eq!(catalog.len(), 2);
        let bebop = catalog.find_by_title("Cowboy Bebop").unwrap();
        assert_eq!(bebop.kind.as_deref(), Some("TV"));
        assert_eq!(bebop.episodes, Some(26));
        assert_eq!(bebop.season, Some(Season::Spring));
        assert_eq!(bebop.year, Some(1998));
        assert_eq!(bebop.score, Some(8.65));
        assert_eq!(bebop.studios, vec!["sunrise"]);
        assert_eq!(bebop.tags, vec!["action", "space"]);
    }

    #[test]
    fn test_parse_json_missing_fields_are_absent() {
        let catalog = parse_catalog_json(OFFLINE_DB_SAMPLE).unwrap();
        let short = catalog.find_by_title("Some Short").unwrap();

        assert!(short.season.is_none());
        assert!(short.year.is_none());
        assert!(short.score.is_none());
        assert!(short.episodes.is_none());
        assert!(short.studios.is_empty());
    }

    #[test]
    fn test_parse_json_bare_array() {
        let catalog = parse_catalog_json(r#"[{"title": "A"}, {"title": "B"}]"#).unwrap();
        let titles: Vec<&str> = catalog.titles().collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_json_score_falls_back_to_mean() {
        let catalog =
            parse_catalog_json(r#"[{"title": "A", "score": {"arithmeticMean": 7.1}}]"#).unwrap();
        assert_eq!(catalog.find_by_title("A").unwrap().score, Some(7.1));
    }

    #[test]
    fn test_parse_json_genres_merge_into_tags() {
        let catalog = parse_catalog_json(
            r#"[{"title": "A", "tags": ["drama"], "genres": ["drama", "romance"], "themes": ["school"]}]"#,
        )
        .unwrap();
        let record = catalog.find_by_title("A").unwrap();

        assert_eq!(record.tags, vec!["drama", "romance"]);
        assert_eq!(record.themes, vec!["school"]);
    }

    #[test]
    fn test_parse_json_skips_untitled_entries() {
        let catalog = parse_catalog_json(r#"[{"title": "A"}, {"episodes": 3}, {"title": ""}]"#)
            .unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_parse_json_only_untitled_entries_is_empty_catalog() {
        let result = parse_catalog_json(r#"[{"episodes": 3}]"#);
        assert_eq!(result.unwrap_err(), DomainError::EmptyCatalog);
    }

    #[test]
    fn test_parse_json_duplicate_titles_rejected() {
        let result = parse_catalog_json(r#"[{"title": "A"}, {"title": "A"}]"#);
        assert_eq!(result.unwrap_err(), DomainError::DuplicateTitle("A".to_owned()));
    }

    #[test]
    fn test_parse_json_invalid_returns_infrastructure_error() {
        match parse_catalog_json("not json").unwrap_err() {
            DomainError::Infrastructure(msg) => assert!(msg.starts_with("catalog JSON is invalid")),
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_bad_entry_reports_field_error_and_position() {
        let text = r#"{"data":[{"title":"A"},{"title":"B","episodes":"12"}]}"#;

        match parse_catalog_json(text).unwrap_err() {
            DomainError::Infrastructure(msg) => {
                assert!(msg.contains("invalid type"), "{msg}");
                assert!(msg.contains("line 1 column"), "{msg}");
            }
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_json_bad_entry_in_bare_array_reports_field_error() {
        let text = r#"[{"title":"A","studios":"sunrise"}]"#;

        match parse_catalog_json(text).unwrap_err() {
            DomainError::Infrastructure(msg) => assert!(msg.contains("invalid type"), "{msg}"),
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_yaml_bad_entry_reports_field_error() {
        let yaml = "data:\n  - title: A\n    episodes: twelve\n";

        match parse_catalog_yaml(yaml).unwrap_err() {
            DomainError::Infrastructure(msg) => assert!(msg.contains("invalid type"), "{msg}"),
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_yaml_document() {
        let yaml = "\
data:
  - title: Mushishi
    type: TV
    episodes: 26
    animeSeason:
      season: FALL
      year: 2005
    source: manga
    studios: [Artland]
";
        let catalog = parse_catalog_yaml(yaml).unwrap();
        let record = catalog.find_by_title("Mushishi").unwrap();

        assert_eq!(record.season, Some(Season::Fall));
        assert_eq!(record.source.as_deref(), Some("manga"));
        assert_eq!(record.studios, vec!["Artland"]);
    }

    #[test]
    fn test_load_catalog_missing_file_returns_infrastructure_error() {
        let result = load_catalog(Path::new("/definitely/not/here/catalog.json"));
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[test]
    fn test_load_catalog_reads_yaml_by_extension() {
        let path = std::env::temp_dir().join(format!("anidle-loader-{}.yml", std::process::id()));
        std::fs::write(&path, "- title: Planetes\n  episodes: 26\n").unwrap();

        let catalog = load_catalog(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog.find_by_title("Planetes").unwrap().episodes, Some(26));
    }
}
