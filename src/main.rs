use std::{error::Error, path::Path};

use scalefinder::{
    catalog::Catalog,
    config::Config,
    fretboard::Fretboard,
    notename::{parse_pitch_class, pitch_class_name, NoteNameStyle},
    selection::Selection,
};

const DEFAULT_CONFIG_PATH: &str = "conf.yaml";

const USAGE: &str = "usage: scalefinder [--config FILE] [--fretboard] NOTE...

NOTE is a pitch class number (0 to 11) or a note name like C, F#, Bb.";

struct Args {
    config_path: Option<String>,
    show_fretboard: bool,
    notes: Vec<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Args>, Box<dyn Error>> {
    let mut res = Args {
        config_path: None,
        show_fretboard: false,
        notes: vec![],
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--fretboard" => res.show_fretboard = true,
            "--config" => match args.next() {
                Some(path) => res.config_path = Some(path),
                None => return Err("--config needs a file name".into()),
            },
            _ => res.notes.push(arg),
        }
    }
    Ok(Some(res))
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn Error>> {
    match path {
        Some(path) => {
            eprintln!("reading scale catalog from {path}");
            Ok(Config::load(path)?)
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            eprintln!("reading scale catalog from {DEFAULT_CONFIG_PATH}");
            Ok(Config::load(DEFAULT_CONFIG_PATH)?)
        }
        None => {
            eprintln!("no {DEFAULT_CONFIG_PATH} found, using the built-in scale catalog");
            Ok(Config::default())
        }
    }
}

fn report(catalog: &Catalog, style: NoteNameStyle, selection: &Selection) {
    if selection.is_empty() {
        println!("Tap notes to discover a scale or mode.");
        return;
    }

    let matches = catalog.detect(selection);
    let Some((first, others)) = matches.split_first() else {
        println!("This note set is not a standard scale/mode in this app.");
        if let Some(lowest) = selection.iter().next() {
            let intervals: Vec<String> = selection
                .relative_to(lowest)
                .iter()
                .map(|i| i.to_string())
                .collect();
            println!(
                "Intervals above {}: {}",
                pitch_class_name(lowest, style),
                intervals.join(" ")
            );
        }
        return;
    };

    println!("Recognized scale/mode.");
    println!("{}", first.display_name(style));
    println!("{}", first.summary());
    println!("Notes: {}", first.note_names(style).join(" – "));
    if let Some(description) = &first.pattern.description {
        println!("{description}");
    }
    if !others.is_empty() {
        println!();
        println!("Also matches:");
        for m in others {
            println!("  {} ({})", m.display_name(style), m.pattern.family);
        }
    }
}

fn report_fretboard(fretboard: &Fretboard, selection: &Selection) {
    let positions = fretboard.positions(selection);
    println!();
    // highest string on top, as on a tab
    for string in (0..fretboard.strings()).rev() {
        let frets: Vec<String> = positions
            .iter()
            .filter(|p| p.string == string)
            .map(|p| p.fret.to_string())
            .collect();
        let open = fretboard.pitch_class_at(string, 0).unwrap_or_default();
        println!(
            "{:<2}| {}",
            pitch_class_name(open, NoteNameStyle::Sharp),
            frets.join(" ")
        );
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Some(args) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let (catalog, style, fretboard) = load_config(args.config_path.as_deref())?.realize()?;

    let mut selection = Selection::new();
    for note in &args.notes {
        selection.insert(parse_pitch_class(note)?);
    }

    report(&catalog, style, &selection);
    if args.show_fretboard {
        report_fretboard(&fretboard, &selection);
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
