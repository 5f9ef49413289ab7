use crate::deck::SAMPLE_DECK;
use crate::error::{DeckError, Result};
use crate::tcg::limitless::ExceptionMapping;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Default file name for the generated gallery
pub const DEFAULT_OUTPUT: &str = "card_collection.html";

fn strip_bom(mut raw: String) -> String {
    if raw.starts_with('\u{feff}') {
        raw.drain(..'\u{feff}'.len_utf8());
    }
    raw
}

/// Read the deck list from a file, from stdin for `-`, or fall back to the sample deck
pub fn read_deck_input(input: Option<&Path>) -> Result<String> {
    match input {
        None => {
            info!("No input given, using the built-in sample deck");
            Ok(SAMPLE_DECK.to_string())
        }
        Some(path) if path.as_os_str() == "-" => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            debug!(bytes = raw.len(), "Read deck list from stdin");
            Ok(strip_bom(raw))
        }
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            debug!(bytes = raw.len(), path = %path.display(), "Read deck list");
            Ok(strip_bom(raw))
        }
    }
}

/// Load extra exception entries from a JSON file and merge them over the defaults
pub fn load_exception_mapping(path: Option<&Path>) -> Result<ExceptionMapping> {
    let defaults = ExceptionMapping::default();
    let Some(path) = path else {
        return Ok(defaults);
    };

    let text = fs::read_to_string(path)?;
    let extra: ExceptionMapping = serde_json::from_str(&text).map_err(|e| {
        DeckError::ExceptionConfig(format!("{}: {}", path.display(), e))
    })?;
    info!(
        entries = extra.len(),
        path = %path.display(),
        "Loaded exception mapping"
    );
    Ok(defaults.merged(extra))
}

/// Write the rendered page, replacing any existing file
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    debug!(bytes = contents.len(), path = %path.display(), "Wrote output file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_input_uses_sample() {
        assert_eq!(read_deck_input(None).unwrap(), SAMPLE_DECK);
    }

    #[test]
    fn reads_input_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "Pokémon: 1\n1 Pidgey OBF 207\n").unwrap();
        assert_eq!(
            read_deck_input(Some(&path)).unwrap(),
            "Pokémon: 1\n1 Pidgey OBF 207\n"
        );
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("deck.txt");
        fs::write(&path, "\u{feff}Pokémon: 1\n1 Pidgey OBF 207\n").unwrap();

        let raw = read_deck_input(Some(&path)).unwrap();
        assert_eq!(raw, "Pokémon: 1\n1 Pidgey OBF 207\n");
        let record =
            crate::deck::parse_deck_list(&raw, &ExceptionMapping::default()).unwrap();
        assert_eq!(record.total_cards(), 1);
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_deck_input(Some(&dir.path().join("nope.txt"))).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn write_output_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        write_output(&path, "first, longer contents").unwrap();
        write_output(&path, "ポケモン").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "ポケモン");
    }

    #[test]
    fn exception_file_is_merged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exceptions.json");
        fs::write(
            &path,
            r#"{"SIT-TG": {"path_pack": "SIT", "filename_prefix": "SIT_TG"}}"#,
        )
        .unwrap();
        let mapping = load_exception_mapping(Some(&path)).unwrap();
        assert_eq!(mapping.len(), 2);
        assert!(mapping.get("CRZ-GG").is_some());
        assert_eq!(mapping.get("SIT-TG").unwrap().path_pack, "SIT");
    }

    #[test]
    fn bad_exception_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exceptions.json");
        fs::write(&path, r#"{"SIT-TG": "SIT"}"#).unwrap();
        let err = load_exception_mapping(Some(&path)).unwrap_err();
        assert!(matches!(err, DeckError::ExceptionConfig(_)));
    }
}
