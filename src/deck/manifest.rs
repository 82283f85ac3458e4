//! Decks described by a TOML manifest.
//!
//! ```toml
//! [[card]]
//! name = "ace"
//! width = 6.3
//! height = 8.8
//!
//! [[card]]
//! image = "faces/king.png"
//! ```
//!
//! A card gives either an explicit size or an image whose pixel dimensions
//! become its size. Image paths are relative to the manifest.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use super::CardDeck;
use crate::image_loader::read_dimensions;
use crate::models::{CardItem, CardSize};

#[derive(Debug, Deserialize, Default)]
struct ManifestFile {
    #[serde(default, rename = "card")]
    cards: Vec<CardEntry>,
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    name: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    image: Option<PathBuf>,
}

/// Loads a deck from the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<CardDeck> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck manifest: {:?}", path))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let deck = parse_manifest(&content, base_dir)
        .with_context(|| format!("Invalid deck manifest: {:?}", path))?;
    info!("Loaded {} cards from {:?}", deck.len(), path);
    Ok(deck)
}

/// Parses manifest text, resolving image paths against `base_dir`.
pub fn parse_manifest(content: &str, base_dir: &Path) -> Result<CardDeck> {
    let file: ManifestFile = toml::from_str(content).context("Failed to parse TOML")?;

    let mut cards = Vec::with_capacity(file.cards.len());
    for (index, entry) in file.cards.into_iter().enumerate() {
        let size = resolve_size(&entry, index, base_dir)?;
        let name = entry
            .name
            .or_else(|| {
                entry
                    .image
                    .as_ref()
                    .and_then(|p| p.file_stem())
                    .map(|s| s.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| format!("card-{}", index));
        debug!(index, %name, width = size.width, height = size.height, "Manifest card");
        cards.push(CardItem::new(index, name, size));
    }

    Ok(CardDeck::new(cards)?)
}

fn resolve_size(entry: &CardEntry, index: usize, base_dir: &Path) -> Result<CardSize> {
    match (entry.width, entry.height, &entry.image) {
        (Some(width), Some(height), _) => {
            if width <= 0.0 || height <= 0.0 {
                bail!("Card {} has a non-positive size {}x{}", index, width, height);
            }
            Ok(CardSize::new(width, height))
        }
        (None, None, Some(image)) => {
            let path = base_dir.join(image);
            let (width, height) = read_dimensions(&path)?;
            Ok(CardSize::new(width as f64, height as f64))
        }
        _ => bail!(
            "Card {} needs either both width and height or an image",
            index
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_sizes() {
        let deck = parse_manifest(
            r#"
            [[card]]
            name = "ace"
            width = 6.3
            height = 8.8

            [[card]]
            width = 8.8
            height = 6.3
            "#,
            Path::new("."),
        )
        .unwrap();

        assert_eq!(deck.len(), 2);
        assert_eq!(deck.cards()[0].name, "ace");
        assert_eq!(deck.cards()[1].name, "card-1");
        assert_eq!(deck.cell_size(), CardSize::new(8.8, 8.8));
    }

    #[test]
    fn test_image_sizes_relative_to_manifest() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("faces")).unwrap();
        image::RgbImage::new(40, 60)
            .save(dir.path().join("faces").join("king.png"))
            .unwrap();

        let manifest = dir.path().join("deck.toml");
        fs::write(
            &manifest,
            "[[card]]\nimage = \"faces/king.png\"\n\n[[card]]\nname = \"blank\"\nwidth = 10.0\nheight = 10.0\n",
        )
        .unwrap();

        let deck = load_manifest(&manifest).unwrap();
        assert_eq!(deck.cards()[0].name, "king");
        assert_eq!(deck.cards()[0].size, CardSize::new(40.0, 60.0));
        assert_eq!(deck.cell_size(), CardSize::new(40.0, 60.0));
    }

    #[test]
    fn test_empty_manifest_has_no_cards() {
        let err = parse_manifest("", Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("no cards"));
    }

    #[test]
    fn test_missing_size_rejected() {
        let err = parse_manifest("[[card]]\nwidth = 3.0\n", Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("Card 0"));
    }

    #[test]
    fn test_non_positive_size_rejected() {
        assert!(parse_manifest("[[card]]\nwidth = 0.0\nheight = 2.0\n", Path::new(".")).is_err());
    }

    #[test]
    fn test_missing_manifest() {
        let dir = tempdir().unwrap();
        assert!(load_manifest(&dir.path().join("missing.toml")).is_err());
    }
}
