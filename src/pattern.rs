use serde_derive::{Deserialize, Serialize};

use crate::{
    notename::{pitch_class_name, NoteNameStyle},
    selection::Selection,
    util::mod12::add_mod12,
};

/// One entry of the scale catalog. The intervals are semitones above an implicit root at 0,
/// in the order they should be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalePattern {
    pub id: String,
    pub name: String,
    pub intervals: Vec<u8>,
    #[serde(default)]
    pub family: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ScalePattern {
    pub fn new(id: &str, name: &str, intervals: Vec<u8>, family: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            intervals,
            family: family.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn size(&self) -> usize {
        self.intervals.len()
    }
}

/// A catalog pattern together with the root at which it reproduces a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub pattern: &'a ScalePattern,
    pub root: u8,
}

impl<'a> Match<'a> {
    /// The pitch classes of the transposed pattern, in the pattern's interval order.
    pub fn notes(&self) -> Vec<u8> {
        self.pattern
            .intervals
            .iter()
            .map(|&i| add_mod12(self.root, i))
            .collect()
    }

    pub fn note_names(&self, style: NoteNameStyle) -> Vec<&'static str> {
        self.notes()
            .into_iter()
            .map(|pc| pitch_class_name(pc, style))
            .collect()
    }

    /// e.g. "D Major (Ionian)"
    pub fn display_name(&self, style: NoteNameStyle) -> String {
        format!(
            "{} {}",
            pitch_class_name(self.root, style),
            self.pattern.name
        )
    }

    /// e.g. "Family: Diatonic • Size: 7 notes"
    pub fn summary(&self) -> String {
        let mut parts = vec![];
        if !self.pattern.family.is_empty() {
            parts.push(format!("Family: {}", self.pattern.family));
        }
        if !self.pattern.intervals.is_empty() {
            parts.push(format!("Size: {} notes", self.pattern.size()));
        }
        parts.join(" • ")
    }
}

/// The smallest root in `0..12` such that transposing `intervals` by it gives exactly the
/// `selection`, or `None`.
///
/// Sets of different sizes are rejected before any transposition is tried. For patterns that
/// are symmetric under some transposition (whole tone, diminished seventh, ...), the lowest of
/// the possible roots is returned.
pub fn match_pattern(selection: &Selection, intervals: &[u8]) -> Option<u8> {
    if selection.len() != intervals.len() {
        return None;
    }

    // `Selection::iter` is ascending
    let selected: Vec<u8> = selection.iter().collect();
    let mut transposed = Vec::with_capacity(intervals.len());
    for root in 0..12 {
        transposed.clear();
        transposed.extend(intervals.iter().map(|&i| add_mod12(i, root)));
        transposed.sort_unstable();
        if transposed == selected {
            return Some(root);
        }
    }
    None
}

/// Every pattern that matches `selection`, in the order of `patterns`.
///
/// The first element is the preferred reading of the selection.
pub fn detect_scale<'a>(selection: &Selection, patterns: &'a [ScalePattern]) -> Vec<Match<'a>> {
    patterns
        .iter()
        .filter_map(|pattern| {
            match_pattern(selection, &pattern.intervals).map(|root| Match { pattern, root })
        })
        .collect()
}
