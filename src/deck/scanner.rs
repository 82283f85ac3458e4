//! Decks built from a directory of card images.
//!
//! Only the directory itself is scanned. Cards are ordered by path so the
//! deck order is stable between runs.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

use super::CardDeck;
use crate::image_loader::{is_card_image, read_dimensions};
use crate::models::{CardItem, CardSize};

/// Builds a deck from the images in `dir`.
///
/// Images whose dimensions cannot be read are skipped with a warning.
pub fn scan_dir(dir: &Path) -> Result<CardDeck> {
    if !dir.is_dir() {
        bail!("Deck path is not a directory: {}", dir.display());
    }

    let mut cards = Vec::new();
    for path in discover_images(dir) {
        let (width, height) = match read_dimensions(&path) {
            Ok(dims) => dims,
            Err(e) => {
                warn!("Skipping card image {:?}: {:#}", path, e);
                continue;
            }
        };
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        cards.push(CardItem::new(
            cards.len(),
            name,
            CardSize::new(width as f64, height as f64),
        ));
    }

    let deck = CardDeck::new(cards)?;
    info!("Scanned {} card images in {:?}", deck.len(), dir);
    Ok(deck)
}

/// Image files directly inside `dir`, sorted by path.
fn discover_images(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .is_some_and(is_card_image)
        })
        .collect();

    paths.sort();
    paths
}
