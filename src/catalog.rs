use std::{collections::HashSet, error::Error, fmt, sync::LazyLock};

use crate::{
    pattern::{detect_scale, Match, ScalePattern},
    selection::Selection,
};

/// An ordered, validated list of scale patterns. Earlier entries are preferred when several
/// patterns match the same selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    patterns: Vec<ScalePattern>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogErr {
    Empty,
    DuplicateId(String),
    NoIntervals(String),
    DuplicateInterval { id: String, pitch_class: u8 },
}

impl fmt::Display for CatalogErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogErr::Empty => write!(f, "the scale catalog is empty"),
            CatalogErr::DuplicateId(id) => write!(f, "more than one pattern with id \"{id}\""),
            CatalogErr::NoIntervals(id) => write!(f, "pattern \"{id}\" has no intervals"),
            CatalogErr::DuplicateInterval { id, pitch_class } => write!(
                f,
                "pattern \"{id}\" contains pitch class {pitch_class} more than once"
            ),
        }
    }
}

impl Error for CatalogErr {}

impl Catalog {
    /// Checks that ids are unique and that every pattern has at least one interval, with no two
    /// intervals equal modulo 12.
    pub fn new(patterns: Vec<ScalePattern>) -> Result<Self, CatalogErr> {
        if patterns.is_empty() {
            return Err(CatalogErr::Empty);
        }
        let mut ids = HashSet::new();
        for pattern in &patterns {
            if !ids.insert(pattern.id.as_str()) {
                return Err(CatalogErr::DuplicateId(pattern.id.clone()));
            }
            if pattern.intervals.is_empty() {
                return Err(CatalogErr::NoIntervals(pattern.id.clone()));
            }
            let mut seen = [false; 12];
            for &i in &pattern.intervals {
                let pc = i % 12;
                if seen[pc as usize] {
                    return Err(CatalogErr::DuplicateInterval {
                        id: pattern.id.clone(),
                        pitch_class: pc,
                    });
                }
                seen[pc as usize] = true;
            }
        }
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[ScalePattern] {
        &self.patterns
    }

    pub fn get(&self, id: &str) -> Option<&ScalePattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// All patterns matching the selection, in catalog order. An empty selection matches
    /// nothing.
    pub fn detect(&self, selection: &Selection) -> Vec<Match<'_>> {
        if selection.is_empty() {
            return vec![];
        }
        detect_scale(selection, &self.patterns)
    }

    /// The distinct non-empty family labels, in order of first appearance.
    pub fn families(&self) -> Vec<&str> {
        let mut res: Vec<&str> = vec![];
        for pattern in &self.patterns {
            let family = pattern.family.as_str();
            if !family.is_empty() && !res.contains(&family) {
                res.push(family);
            }
        }
        res
    }
}

impl Default for Catalog {
    /// The four diatonic modes the matcher was first written against.
    fn default() -> Self {
        Self {
            patterns: vec![
                ScalePattern::new(
                    "major",
                    "Major (Ionian)",
                    vec![0, 2, 4, 5, 7, 9, 11],
                    "Diatonic",
                ),
                ScalePattern::new(
                    "natural_minor",
                    "Natural Minor (Aeolian)",
                    vec![0, 2, 3, 5, 7, 8, 10],
                    "Diatonic",
                ),
                ScalePattern::new("dorian", "Dorian", vec![0, 2, 3, 5, 7, 9, 10], "Diatonic"),
                ScalePattern::new(
                    "mixolydian",
                    "Mixolydian",
                    vec![0, 2, 4, 5, 7, 9, 10],
                    "Diatonic",
                ),
            ],
        }
    }
}

pub static DEFAULT_CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::default);
