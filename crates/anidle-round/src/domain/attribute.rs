//! Comparable record attributes.

use anidle_catalog::domain::record::{AnimeRecord, Season};
use serde::Serialize;

/// How an attribute is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Categorical scalar; equal or no claim.
    Equality,
    /// Numeric scalar; ordered after rounding to two decimals.
    Numeric,
    /// Set of strings; members are matched against the answer's set.
    Set,
}

/// A named record attribute subject to comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Airing year.
    Year,
    /// Airing season.
    Season,
    /// Episode count.
    Episodes,
    /// Aggregate score.
    Score,
    /// Media type.
    Kind,
    /// Adaptation source.
    Source,
    /// Animation studios.
    Studios,
    /// Producers.
    Producers,
    /// Genres and tags.
    Tags,
    /// Themes.
    Themes,
}

impl Attribute {
    /// Every comparable attribute, in display order.
    pub const ALL: [Self; 10] = [
        Self::Year,
        Self::Season,
        Self::Episodes,
        Self::Tags,
        Self::Themes,
        Self::Studios,
        Self::Producers,
        Self::Kind,
        Self::Source,
        Self::Score,
    ];

    /// Returns how this attribute is compared.
    #[must_use]
    pub fn kind(self) -> AttributeKind {
        match self {
            Self::Season | Self::Kind | Self::Source => AttributeKind::Equality,
            Self::Year | Self::Episodes | Self::Score => AttributeKind::Numeric,
            Self::Studios | Self::Producers | Self::Tags | Self::Themes => AttributeKind::Set,
        }
    }

    /// The categorical value of this attribute in `record`.
    ///
    /// `None` when the value is absent or the attribute is not
    /// [`AttributeKind::Equality`].
    #[must_use]
    pub fn text_of(self, record: &AnimeRecord) -> Option<&str> {
        match self {
            Self::Season => record.season.map(Season::as_str),
            Self::Kind => record.kind.as_deref(),
            Self::Source => record.source.as_deref(),
            _ => None,
        }
    }

    /// The numeric value of this attribute in `record`.
    ///
    /// `None` when the value is absent or the attribute is not
    /// [`AttributeKind::Numeric`].
    #[must_use]
    pub fn number_of(self, record: &AnimeRecord) -> Option<f64> {
        match self {
            Self::Year => record.year.map(f64::from),
            Self::Episodes => record.episodes.map(f64::from),
            Self::Score => record.score,
            _ => None,
        }
    }

    /// The members of this attribute in `record`.
    ///
    /// Empty when the attribute is not [`AttributeKind::Set`].
    #[must_use]
    pub fn members_of(self, record: &AnimeRecord) -> &[String] {
        match self {
            Self::Studios => &record.studios,
            Self::Producers => &record.producers,
            Self::Tags => &record.tags,
            Self::Themes => &record.themes,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_each_attribute_once() {
        let mut all = Attribute::ALL.to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), Attribute::ALL.len());
    }

    #[test]
    fn test_kind_groups() {
        assert_eq!(Attribute::Season.kind(), AttributeKind::Equality);
        assert_eq!(Attribute::Score.kind(), AttributeKind::Numeric);
        assert_eq!(Attribute::Themes.kind(), AttributeKind::Set);
    }

    #[test]
    fn test_value_accessors_follow_kind() {
        let record = AnimeRecord {
            kind: Some("TV".into()),
            season: Some(Season::Fall),
            episodes: Some(26),
            studios: vec!["Artland".into()],
            ..AnimeRecord::titled("Mushishi")
        };

        assert_eq!(Attribute::Season.text_of(&record), Some("fall"));
        assert_eq!(Attribute::Kind.text_of(&record), Some("TV"));
        assert_eq!(Attribute::Source.text_of(&record), None);
        assert_eq!(Attribute::Episodes.number_of(&record), Some(26.0));
        assert_eq!(Attribute::Year.number_of(&record), None);
        assert_eq!(Attribute::Studios.members_of(&record), ["Artland"]);
        assert!(Attribute::Tags.members_of(&record).is_empty());
    }

    #[test]
    fn test_value_accessors_ignore_other_kinds() {
        let record = AnimeRecord {
            kind: Some("TV".into()),
            episodes: Some(26),
            studios: vec!["Artland".into()],
            ..AnimeRecord::titled("Mushishi")
        };

        for attribute in Attribute::ALL {
            match attribute.kind() {
                AttributeKind::Equality => {
                    assert!(attribute.number_of(&record).is_none());
                    assert!(attribute.members_of(&record).is_empty());
                }
                AttributeKind::Numeric => {
                    assert!(attribute.text_of(&record).is_none());
                    assert!(attribute.members_of(&record).is_empty());
                }
                AttributeKind::Set => {
                    assert!(attribute.text_of(&record).is_none());
                    assert!(attribute.number_of(&record).is_none());
                }
            }
        }
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_value(Attribute::Producers).unwrap();
        assert_eq!(json, "producers");
    }
}
