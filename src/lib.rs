// ptcg-gallery - turn a Pokémon TCG deck list into a card image gallery
//
// The library holds the parse -> validate -> render pipeline.
// The binary crate (main.rs) provides the CLI entry point.

pub mod deck;
pub mod error;
pub mod logging;
pub mod tcg;
pub mod utils;

pub use deck::{check_total, parse_deck_list, TotalCheck, SAMPLE_DECK};
pub use error::{DeckError, Result};
pub use tcg::limitless::{build_card_urls, CardUrls, ExceptionMapping, PackOverride};
pub use tcg::{CardEntry, DeckRecord, Section};
