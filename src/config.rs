use std::{error::Error, fmt, fs::File, io::Read, path::Path};

use serde_derive::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{
    catalog::{Catalog, CatalogErr},
    fretboard::{Fretboard, DEFAULT_FRETS, STANDARD_TUNING},
    notename::{NoteName, NoteNameStyle},
    pattern::ScalePattern,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub catalog: Vec<ScalePattern>,
    #[serde(default)]
    pub note_names: NoteNameStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fretboard: Option<FretboardConfig>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FretboardConfig {
    /// open strings, lowest first, written as note names
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub tuning: Vec<NoteName>,
    #[serde(default = "default_frets")]
    pub frets: u8,
}

fn default_frets() -> u8 {
    DEFAULT_FRETS
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            tuning: STANDARD_TUNING.iter().map(|&pc| NoteName(pc)).collect(),
            frets: DEFAULT_FRETS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: Catalog::default().patterns().to_vec(),
            note_names: NoteNameStyle::default(),
            fretboard: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigErr {
    Io(std::io::Error),
    Parse(serde_yml::Error),
    Catalog(CatalogErr),
    NoStrings,
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::Io(e) => write!(f, "could not read configuration: {e}"),
            ConfigErr::Parse(e) => write!(f, "could not parse configuration: {e}"),
            ConfigErr::Catalog(e) => write!(f, "invalid scale catalog: {e}"),
            ConfigErr::NoStrings => write!(f, "the fretboard tuning lists no strings"),
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::Io(e) => Some(e),
            ConfigErr::Parse(e) => Some(e),
            ConfigErr::Catalog(e) => Some(e),
            ConfigErr::NoStrings => None,
        }
    }
}

impl From<std::io::Error> for ConfigErr {
    fn from(e: std::io::Error) -> Self {
        ConfigErr::Io(e)
    }
}

impl From<serde_yml::Error> for ConfigErr {
    fn from(e: serde_yml::Error) -> Self {
        ConfigErr::Parse(e)
    }
}

impl From<CatalogErr> for ConfigErr {
    fn from(e: CatalogErr) -> Self {
        ConfigErr::Catalog(e)
    }
}

impl Config {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigErr> {
        Ok(serde_yml::from_reader(reader)?)
    }

    pub fn from_yaml(str: &str) -> Result<Self, ConfigErr> {
        Ok(serde_yml::from_str(str)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigErr> {
        Self::from_reader(File::open(path)?)
    }

    /// Validates the catalog and builds the pieces the application works with.
    pub fn realize(self) -> Result<(Catalog, NoteNameStyle, Fretboard), ConfigErr> {
        let catalog = Catalog::new(self.catalog)?;
        let fretboard = match self.fretboard {
            None => Fretboard::default(),
            Some(FretboardConfig { tuning, frets }) => {
                if tuning.is_empty() {
                    return Err(ConfigErr::NoStrings);
                }
                Fretboard::new(tuning.into_iter().map(|NoteName(pc)| pc).collect(), frets)
            }
        };
        Ok((catalog, self.note_names, fretboard))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{catalog::DEFAULT_CATALOG, selection::Selection};
    use pretty_assertions::assert_eq;

    const SHIPPED: &str = include_str!("../conf.yaml");

    #[test]
    fn minimal_config() {
        let config = Config::from_yaml(
            r#"
catalog:
  - id: major_triad
    name: Major triad
    intervals: [0, 4, 7]
"#,
        )
        .unwrap();
        assert_eq!(config.note_names, NoteNameStyle::Both);
        assert_eq!(config.fretboard, None);
        assert_eq!(
            config.catalog,
            vec![ScalePattern::new("major_triad", "Major triad", vec![0, 4, 7], "")]
        );

        let (catalog, style, fretboard) = config.realize().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(style, NoteNameStyle::Both);
        assert_eq!(fretboard, Fretboard::default());
    }

    #[test]
    fn full_config() {
        let config = Config::from_yaml(
            r#"
note-names: flat
fretboard:
  tuning: [D, A, D, G, A, D]
  frets: 15
catalog:
  - id: blues
    name: Blues
    intervals: [0, 3, 5, 6, 7, 10]
    family: Pentatonic
    description: Minor pentatonic with an added flat fifth.
"#,
        )
        .unwrap();
        assert_eq!(
            config.catalog[0].description.as_deref(),
            Some("Minor pentatonic with an added flat fifth.")
        );

        let (catalog, style, fretboard) = config.realize().unwrap();
        assert_eq!(catalog.families(), vec!["Pentatonic"]);
        assert_eq!(style, NoteNameStyle::Flat);
        assert_eq!(fretboard.tuning(), &[2, 9, 2, 7, 9, 2]);
        assert_eq!(fretboard.frets(), 15);
    }

    #[test]
    fn fretboard_frets_default() {
        let config = Config::from_yaml(
            r#"
catalog:
  - { id: fifth, name: Fifth, intervals: [0, 7] }
fretboard:
  tuning: [E, A, D, G]
"#,
        )
        .unwrap();
        let (_, _, fretboard) = config.realize().unwrap();
        assert_eq!(fretboard.frets(), DEFAULT_FRETS);
        assert_eq!(fretboard.strings(), 4);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = Config::from_yaml(
            r#"
catalog:
  - id: major
    name: Major
    intervals: [0, 2, 4, 5, 7, 9, 11]
    mood: happy
"#,
        );
        assert!(matches!(res, Err(ConfigErr::Parse(_))));
    }

    #[test]
    fn bad_note_names_are_rejected() {
        let res = Config::from_yaml(
            r#"
catalog:
  - { id: fifth, name: Fifth, intervals: [0, 7] }
fretboard:
  tuning: [E, H]
"#,
        );
        assert!(matches!(res, Err(ConfigErr::Parse(_))));
    }

    #[test]
    fn invalid_catalog_is_reported_on_realize() {
        let config = Config::from_yaml(
            r#"
catalog:
  - { id: fifth, name: Fifth, intervals: [0, 7] }
  - { id: fifth, name: Fifth again, intervals: [0, 7] }
"#,
        )
        .unwrap();
        assert!(matches!(
            config.realize(),
            Err(ConfigErr::Catalog(CatalogErr::DuplicateId(_)))
        ));

        let config = Config::from_yaml(
            r#"
catalog:
  - { id: fifth, name: Fifth, intervals: [0, 7] }
fretboard:
  tuning: []
"#,
        )
        .unwrap();
        assert!(matches!(config.realize(), Err(ConfigErr::NoStrings)));
    }

    #[test]
    fn default_config_is_the_default_catalog() {
        let (catalog, style, fretboard) = Config::default().realize().unwrap();
        assert_eq!(&catalog, &*DEFAULT_CATALOG);
        assert_eq!(style, NoteNameStyle::Both);
        assert_eq!(fretboard.tuning(), &STANDARD_TUNING);
    }

    #[test]
    fn serialized_config_reads_back() {
        let config = Config {
            fretboard: Some(FretboardConfig::default()),
            ..Config::default()
        };
        let yaml = serde_yml::to_string(&config).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn shipped_config() {
        let (catalog, style, fretboard) = Config::from_yaml(SHIPPED).unwrap().realize().unwrap();
        assert_eq!(style, NoteNameStyle::Both);
        assert_eq!(fretboard, Fretboard::default());
        assert_eq!(
            catalog.families(),
            vec![
                "Diatonic",
                "Minor",
                "Pentatonic",
                "Symmetric",
                "Interval",
                "Triad",
                "Seventh chord"
            ]
        );

        let first = |pcs: &[u8]| {
            let selection: Selection = pcs.iter().copied().collect();
            let matches = catalog.detect(&selection);
            let res = matches.first().map(|m| (m.pattern.id.clone(), m.root));
            res
        };
        assert_eq!(first(&[0, 2, 4, 5, 7, 9, 11]), Some(("major".to_string(), 0)));
        assert_eq!(first(&[0, 2, 4, 6, 7, 9, 11]), Some(("major".to_string(), 7)));
        assert_eq!(first(&[0, 2, 3, 5, 7, 8, 11]), Some(("harmonic_minor".to_string(), 0)));
        assert_eq!(first(&[1, 3, 5, 7, 9, 11]), Some(("whole_tone".to_string(), 1)));
        assert_eq!(first(&[9, 0, 2, 4, 7]), Some(("major_pentatonic".to_string(), 0)));
        assert_eq!(first(&[0, 4, 7]), Some(("major_triad".to_string(), 0)));
        assert_eq!(first(&[0, 3, 7]), Some(("minor_triad".to_string(), 0)));
        assert_eq!(first(&[7, 11, 2, 5]), Some(("dominant_seventh".to_string(), 7)));
        assert_eq!(first(&[0, 1]), Some(("minor_second".to_string(), 0)));
        assert_eq!(first(&[0, 1, 2]), None);
    }
}
