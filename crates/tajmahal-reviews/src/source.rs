//! Seed data sources.
//!
//! A source hands out the restaurant record and the reviews present before
//! any user submission. Seed reviews are trusted and never validated.

use std::path::Path;

use crate::error::SourceError;
use crate::restaurant::Restaurant;
use crate::review::Review;
use serde::{Deserialize, Serialize};

/// Provider of seed data.
pub trait ReviewSource {
    /// Seed reviews, most recent first.
    fn reviews(&self) -> Vec<Review>;

    /// The restaurant the reviews belong to.
    fn restaurant(&self) -> Restaurant;
}

/// Built-in canned data for the Taj Mahal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeReviewSource;

impl ReviewSource for FakeReviewSource {
    fn reviews(&self) -> Vec<Review> {
        vec![
            Review::new(
                "Ranjit Singh",
                Some("https://xsgames.co/randomusers/assets/avatars/male/71.jpg".into()),
                Some("Service très rapide et nourriture délicieuse, nous mangeons ici chaque week-end, c'est très rapide et savoureux. Continuez ainsi!".into()),
                5,
            ),
            Review::new(
                "Martyna Siddeswara",
                Some("https://xsgames.co/randomusers/assets/avatars/female/31.jpg".into()),
                Some("Un endroit charmant avec un personnel amical et des plats savoureux.".into()),
                4,
            ),
            Review::new(
                "Emma Lyn",
                Some("https://xsgames.co/randomusers/assets/avatars/female/12.jpg".into()),
                Some("Très bonne cuisine, mais le service était un peu lent.".into()),
                3,
            ),
            Review::new(
                "Mohamed Malik",
                Some("https://xsgames.co/randomusers/assets/avatars/male/3.jpg".into()),
                Some("Le curry était trop épicé à mon goût, mais l'accueil était chaleureux.".into()),
                3,
            ),
            Review::new(
                "Sophie Morel",
                Some("https://xsgames.co/randomusers/assets/avatars/female/45.jpg".into()),
                Some("Meilleur naan au fromage du quartier, je recommande.".into()),
                5,
            ),
        ]
    }

    fn restaurant(&self) -> Restaurant {
        Restaurant {
            name: "Taj Mahal".into(),
            cuisine: "Indien".into(),
            hours: "11h30 - 14h30・18h30 - 22h00".into(),
            address: "12 Avenue de la Brique - 75010 Paris".into(),
            latitude: 48.8748,
            longitude: 2.3573,
            phone_number: "06 12 34 56 78".into(),
            website: "http://www.tajmahal.fr".into(),
            dine_in: true,
            take_away: false,
        }
    }
}

/// On-disk seed layout: a `restaurant` table and a `reviews` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    pub restaurant: Restaurant,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Seed data loaded from a JSON or TOML file.
#[derive(Debug, Clone)]
pub struct FileReviewSource {
    document: SeedDocument,
}

impl FileReviewSource {
    /// Load a seed file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: shown.clone(),
            source,
        })?;

        let document = if path.extension().map_or(false, |e| e == "json") {
            serde_json::from_str(&content).map_err(|source| SourceError::Json {
                path: shown.clone(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| SourceError::Toml {
                path: shown.clone(),
                source,
            })?
        };

        tracing::debug!(path = %shown, "loaded seed file");
        Ok(Self { document })
    }

    /// The parsed document.
    pub fn document(&self) -> &SeedDocument {
        &self.document
    }
}

impl ReviewSource for FileReviewSource {
    fn reviews(&self) -> Vec<Review> {
        self.document.reviews.clone()
    }

    fn restaurant(&self) -> Restaurant {
        self.document.restaurant.clone()
    }
}
