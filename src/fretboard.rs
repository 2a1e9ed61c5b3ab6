use crate::{selection::Selection, util::mod12::add_mod12};

/// Open-string pitch classes of a six-string guitar in standard tuning, lowest string first:
/// E A D G B E.
pub const STANDARD_TUNING: [u8; 6] = [4, 9, 2, 7, 11, 4];

pub const DEFAULT_FRETS: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FretPosition {
    /// index into the tuning, 0 is the lowest string
    pub string: usize,
    /// 0 is the open string
    pub fret: u8,
    pub pitch_class: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    tuning: Vec<u8>,
    frets: u8,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::new(STANDARD_TUNING.to_vec(), DEFAULT_FRETS)
    }
}

impl Fretboard {
    /// Open-string pitch classes are reduced modulo 12.
    pub fn new(tuning: Vec<u8>, frets: u8) -> Self {
        Self {
            tuning: tuning.into_iter().map(|pc| pc % 12).collect(),
            frets,
        }
    }

    pub fn tuning(&self) -> &[u8] {
        &self.tuning
    }

    pub fn strings(&self) -> usize {
        self.tuning.len()
    }

    pub fn frets(&self) -> u8 {
        self.frets
    }

    pub fn pitch_class_at(&self, string: usize, fret: u8) -> Option<u8> {
        self.tuning
            .get(string)
            .map(|&open| add_mod12(open, fret))
    }

    /// Every position from the open string up to the last fret that sounds a selected pitch
    /// class, string by string from the lowest, frets ascending.
    pub fn positions(&self, selection: &Selection) -> Vec<FretPosition> {
        let mut res = vec![];
        for (string, &open) in self.tuning.iter().enumerate() {
            for fret in 0..=self.frets {
                let pitch_class = add_mod12(open, fret);
                if selection.contains(pitch_class) {
                    res.push(FretPosition {
                        string,
                        fret,
                        pitch_class,
                    });
                }
            }
        }
        res
    }
}
