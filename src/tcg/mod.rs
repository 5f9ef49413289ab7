use serde::Serialize;
use std::fmt;

pub mod limitless;

/// Deck list section a card line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pokemon,
    Trainer,
    Energy,
}

impl Section {
    /// All sections in render order
    pub const ALL: [Section; 3] = [Section::Pokemon, Section::Trainer, Section::Energy];

    /// Header prefix that opens this section in a deck list
    pub fn header(self) -> &'static str {
        match self {
            Section::Pokemon => "Pokémon:",
            Section::Trainer => "Trainer:",
            Section::Energy => "Energy:",
        }
    }

    /// Match a line against the known section headers
    pub fn from_header(line: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| line.starts_with(section.header()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Pokemon => "pokemon",
            Section::Trainer => "trainer",
            Section::Energy => "energy",
        };
        f.write_str(name)
    }
}

// One parsed deck line with its derived Limitless URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub series_num: String,
    pub quantity: u32,
    pub page_url: String,
    pub card_img_url: String,
}

/// Parsed deck, grouped by section, with a running card count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckRecord {
    pokemon: Vec<CardEntry>,
    trainer: Vec<CardEntry>,
    energy: Vec<CardEntry>,
    total_cards: u64,
}

impl DeckRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a section and count its copies
    pub fn push(&mut self, section: Section, entry: CardEntry) {
        self.total_cards += u64::from(entry.quantity);
        match section {
            Section::Pokemon => self.pokemon.push(entry),
            Section::Trainer => self.trainer.push(entry),
            Section::Energy => self.energy.push(entry),
        }
    }

    pub fn section(&self, section: Section) -> &[CardEntry] {
        match section {
            Section::Pokemon => &self.pokemon,
            Section::Trainer => &self.trainer,
            Section::Energy => &self.energy,
        }
    }

    /// Every entry, pokemon first, then trainer, then energy
    pub fn cards(&self) -> impl Iterator<Item = &CardEntry> {
        Section::ALL
            .into_iter()
            .flat_map(move |section| self.section(section).iter())
    }

    pub fn total_cards(&self) -> u64 {
        self.total_cards
    }
}
