//! Attribute comparators.
//!
//! Three families, all pure functions of (answer value, guessed value):
//! equality for categorical scalars, ordering for numbers, and matching for
//! sets. Only the set family touches the RNG, to shuffle display order.

use std::collections::{BTreeMap, HashSet};

use anidle_catalog::domain::record::AnimeRecord;
use anidle_core::rng::{DeterministicRng, shuffle};
use serde::Serialize;

use super::attribute::{Attribute, AttributeKind};

/// How a guessed value relates to the answer's value.
///
/// `Higher` means the guess is above the answer; pointing the player back
/// toward the answer is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Same value.
    Equal,
    /// Guess is below the answer.
    Lower,
    /// Guess is above the answer.
    Higher,
    /// No claim is made, either because a side was absent or because the
    /// attribute is categorical and the values differ.
    #[serde(rename = "none")]
    NoClaim,
}

/// Guessed value as shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    /// Whole number.
    Integer(i64),
    /// Number with a fractional part, rounded to two decimals.
    Decimal(f64),
    /// Categorical value.
    Text(String),
}

/// Comparison of one scalar attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarComparison {
    /// The guessed value; `None` renders blank.
    pub value: Option<DisplayValue>,
    /// Relation of the guessed value to the answer's.
    pub relation: Relation,
}

/// One member of a guessed set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SetItem {
    /// The member.
    pub item: String,
    /// Whether the answer's set also holds this member.
    pub matched: bool,
}

/// Comparison result for one attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeComparison {
    /// Scalar attribute result.
    Scalar(ScalarComparison),
    /// Set attribute result, matched members first.
    Set(Vec<SetItem>),
}

impl AttributeComparison {
    /// Returns the scalar result, if this is one.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarComparison> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            Self::Set(_) => None,
        }
    }

    /// Returns the set result, if this is one.
    #[must_use]
    pub fn as_set(&self) -> Option<&[SetItem]> {
        match self {
            Self::Scalar(_) => None,
            Self::Set(items) => Some(items),
        }
    }
}

/// Per-attribute comparison of one guess against the answer.
pub type Comparison = BTreeMap<Attribute, AttributeComparison>;

/// Rounds half away from zero to two decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[allow(clippy::cast_possible_truncation)]
fn display_number(value: f64) -> DisplayValue {
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        DisplayValue::Integer(value as i64)
    } else {
        DisplayValue::Decimal(value)
    }
}

/// Compares two categorical values.
///
/// Absent values normalize to the empty string before comparing, so two
/// absent values are `Equal`. Differing values are `NoClaim`; categorical
/// attributes never claim an ordering.
#[must_use]
pub fn compare_equal(answer: Option<&str>, guess: Option<&str>) -> ScalarComparison {
    let relation = if answer.unwrap_or_default() == guess.unwrap_or_default() {
        Relation::Equal
    } else {
        Relation::NoClaim
    };
    ScalarComparison {
        value: guess.map(|g| DisplayValue::Text(g.to_owned())),
        relation,
    }
}

/// Compares two numbers after rounding both to two decimals.
///
/// If either side is absent (or not finite) the result is `NoClaim` with a
/// blank value.
#[must_use]
pub fn compare_numbers(answer: Option<f64>, guess: Option<f64>) -> ScalarComparison {
    let (Some(answer), Some(guess)) = (
        answer.filter(|v| v.is_finite()),
        guess.filter(|v| v.is_finite()),
    ) else {
        return ScalarComparison {
            value: None,
            relation: Relation::NoClaim,
        };
    };

    let answer = round2(answer);
    let guess = round2(guess);
    let relation = if guess > answer {
        Relation::Higher
    } else if guess < answer {
        Relation::Lower
    } else {
        Relation::Equal
    };

    ScalarComparison {
        value: Some(display_number(guess)),
        relation,
    }
}

/// Compares a guessed set against the answer's set.
///
/// The guessed members are shuffled with a fresh permutation, split into
/// members the answer also has and members it lacks (keeping shuffled
/// order inside each part), joined matched-first and cut to `cap` entries.
pub fn compare_sets(
    answer: &[String],
    guessed: &[String],
    cap: usize,
    rng: &mut dyn DeterministicRng,
) -> Vec<SetItem> {
    let answer: HashSet<&str> = answer.iter().map(String::as_str).collect();

    let mut shuffled: Vec<&str> = guessed.iter().map(String::as_str).collect();
    shuffle(&mut shuffled, rng);

    let (matched, unmatched): (Vec<&str>, Vec<&str>) =
        shuffled.into_iter().partition(|m| answer.contains(m));

    matched
        .into_iter()
        .map(|item| (item, true))
        .chain(unmatched.into_iter().map(|item| (item, false)))
        .take(cap)
        .map(|(item, matched)| SetItem {
            item: item.to_owned(),
            matched,
        })
        .collect()
}

/// Compares one attribute of `guess` against `answer`, using the comparator
/// for the attribute's kind.
pub fn compare_attribute(
    attribute: Attribute,
    answer: &AnimeRecord,
    guess: &AnimeRecord,
    set_cap: usize,
    rng: &mut dyn DeterministicRng,
) -> AttributeComparison {
    match attribute.kind() {
        AttributeKind::Equality => AttributeComparison::Scalar(compare_equal(
            attribute.text_of(answer),
            attribute.text_of(guess),
        )),
        AttributeKind::Numeric => AttributeComparison::Scalar(compare_numbers(
            attribute.number_of(answer),
            attribute.number_of(guess),
        )),
        AttributeKind::Set => AttributeComparison::Set(compare_sets(
            attribute.members_of(answer),
            attribute.members_of(guess),
            set_cap,
            rng,
        )),
    }
}

/// Compares every listed attribute of `guess` against `answer`.
pub fn compare_records(
    answer: &AnimeRecord,
    guess: &AnimeRecord,
    attributes: &[Attribute],
    set_cap: usize,
    rng: &mut dyn DeterministicRng,
) -> Comparison {
    attributes
        .iter()
        .map(|&attribute| {
            (
                attribute,
                compare_attribute(attribute, answer, guess, set_cap, rng),
            )
        })
        .collect()
}
