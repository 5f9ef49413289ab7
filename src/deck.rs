//! Deck list parsing and total validation
//!
//! A deck list is a block of lines grouped under `Pokémon:`, `Trainer:` and
//! `Energy:` headers, closed by a `Total Cards:` line. Every other non-blank
//! line is a card: `<quantity> <name...> <type> <series> [annotation]`.

use crate::error::{DeckError, Result};
use crate::tcg::limitless::{build_card_urls, ExceptionMapping};
use crate::tcg::{CardEntry, DeckRecord, Section};
use tracing::{debug, info};

/// Prefix of the line that ends the card listing and states the deck size
pub const TOTAL_HEADER: &str = "Total Cards:";

/// Deck list used when no input is given
pub const SAMPLE_DECK: &str = "
Pokémon: 13
2 Pidgeot ex PAF 221
2 Pidgey OBF 207
1 Lumineon V CRZ-GG 39
1 Fezandipiti ex SFA 92
3 Drakloak TWM 129
1 Manaphy CRZ-GG 6
4 Dreepy TWM 128
1 Duskull SFA 68
1 Rotom V LOR 177
1 Dusclops SFA 69
1 Dusknoir SFA 70
1 Radiant Alakazam SIT 59
3 Dragapult ex TWM 200

Trainer: 20
4 Buddy-Buddy Poffin TWM 223
1 Crispin SCR 164
1 Iono PAL 254
1 Pokémon League Headquarters OBF 192
1 Super Rod PAL 276
1 Forest Seal Stone SIT 156
1 Rescue Board TEF 159
1 Nest Ball SVI 255
1 Earthen Vessel SFA 96
4 Arven PAF 235
1 Iono PAF 237
1 Switch MEW 206
2 Boss's Orders PAL 265
1 Technical Machine: Devolution PAR 177
1 Roxanne ASR 188
1 Counter Catcher PAR 264
1 Nest Ball PAF 84 PH
3 Ultra Ball SVI 196
1 Sparkling Crystal SCR 142
4 Rare Candy SVI 191

Energy: 2
3 Basic {R} Energy SVE 2
3 Basic {P} Energy SVE 5

Total Cards: 60
";

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn parse_card_line(
    line_no: usize,
    line: &str,
    tokens: &mut Vec<&str>,
    exceptions: &ExceptionMapping,
) -> Result<CardEntry> {
    // Trailing annotations such as "PH" are not part of the card identity
    if tokens.last().is_some_and(|last| !is_numeric(last)) {
        tokens.pop();
    }

    if tokens.len() < 3 {
        return Err(DeckError::TooFewTokens {
            line: line_no,
            text: line.to_string(),
        });
    }

    let quantity = match tokens[0].parse::<u32>() {
        Ok(q) if q > 0 => q,
        _ => {
            return Err(DeckError::InvalidQuantity {
                line: line_no,
                token: tokens[0].to_string(),
            })
        }
    };

    let n = tokens.len();
    let card_type = tokens[n - 2];
    let series_num = tokens[n - 1];
    let name = tokens[1..n - 2].join(" ");
    let urls = build_card_urls(exceptions, card_type, series_num);

    Ok(CardEntry {
        name,
        card_type: card_type.to_string(),
        series_num: series_num.to_string(),
        quantity,
        page_url: urls.page_url,
        card_img_url: urls.card_img_url,
    })
}

/// Parse a deck list into a [`DeckRecord`]
pub fn parse_deck_list(raw: &str, exceptions: &ExceptionMapping) -> Result<DeckRecord> {
    let mut record = DeckRecord::new();
    let mut section: Option<Section> = None;

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();

        if let Some(next) = Section::from_header(line) {
            debug!(line = line_no, section = %next, "entering section");
            section = Some(next);
            continue;
        }
        if line.starts_with(TOTAL_HEADER) {
            break;
        }

        let mut tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let current = section.ok_or(DeckError::CardOutsideSection { line: line_no })?;
        let entry = parse_card_line(line_no, line, &mut tokens, exceptions)?;
        debug!(
            line = line_no,
            section = %current,
            name = %entry.name,
            quantity = entry.quantity,
            "parsed card"
        );
        record.push(current, entry);
    }

    info!(
        pokemon = record.section(Section::Pokemon).len(),
        trainer = record.section(Section::Trainer).len(),
        energy = record.section(Section::Energy).len(),
        total_cards = record.total_cards(),
        "Parsed deck list"
    );
    Ok(record)
}

/// Deck size stated on the `Total Cards:` line, if there is one
pub fn stated_total(raw: &str) -> Result<Option<u64>> {
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(TOTAL_HEADER) {
            let value = rest.trim();
            return value
                .parse::<u64>()
                .map(Some)
                .map_err(|_| DeckError::InvalidStatedTotal {
                    line: idx + 1,
                    value: value.to_string(),
                });
        }
    }
    Ok(None)
}

/// Outcome of comparing the stated deck size with the parsed one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalCheck {
    Match(u64),
    Mismatch { stated: u64, computed: u64 },
    Missing { computed: u64 },
}

impl TotalCheck {
    /// Console warning for a total that could not be confirmed
    pub fn warning(&self) -> Option<String> {
        match self {
            TotalCheck::Match(_) => None,
            TotalCheck::Mismatch { stated, computed } => Some(format!(
                "Warning: computed card total ({}) does not match the stated total ({})",
                computed, stated
            )),
            TotalCheck::Missing { computed } => Some(format!(
                "Warning: no \"{}\" line; computed card total ({})",
                TOTAL_HEADER, computed
            )),
        }
    }
}

/// Compare the `Total Cards:` line of `raw` against the parsed record
pub fn check_total(raw: &str, record: &DeckRecord) -> Result<TotalCheck> {
    let computed = record.total_cards();
    let check = match stated_total(raw)? {
        Some(stated) if stated == computed => TotalCheck::Match(computed),
        Some(stated) => TotalCheck::Mismatch { stated, computed },
        None => TotalCheck::Missing { computed },
    };
    debug!(?check, "checked deck total");
    Ok(check)
}
