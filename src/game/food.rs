use serde::{Deserialize, Serialize};

use super::{error::GameError, vector::Vector2i};

/// One kind of food and what eating it is worth
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodKind {
    pub name: String,
    pub points: u32,
    /// Opaque handle the renderer resolves to an image or glyph
    pub asset: Option<String>,
}

impl FoodKind {
    pub fn new(name: impl Into<String>, points: u32, asset: Option<&str>) -> Self {
        Self {
            name: name.into(),
            points,
            asset: asset.map(str::to_owned),
        }
    }
}

/// The fixed set of food kinds a session can spawn.
///
/// Deserialized catalogs go through the same checks as [`FoodCatalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FoodKind>", into = "Vec<FoodKind>")]
pub struct FoodCatalog {
    kinds: Vec<FoodKind>,
}

impl FoodCatalog {
    pub fn new(kinds: Vec<FoodKind>) -> Result<Self, GameError> {
        if kinds.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        if let Some(kind) = kinds.iter().find(|kind| kind.points == 0) {
            return Err(GameError::WorthlessFood {
                name: kind.name.clone(),
            });
        }
        Ok(Self { kinds })
    }

    pub fn kinds(&self) -> &[FoodKind] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FoodKind> {
        self.kinds.get(index)
    }
}

impl TryFrom<Vec<FoodKind>> for FoodCatalog {
    type Error = GameError;

    fn try_from(kinds: Vec<FoodKind>) -> Result<Self, GameError> {
        Self::new(kinds)
    }
}

impl From<FoodCatalog> for Vec<FoodKind> {
    fn from(catalog: FoodCatalog) -> Self {
        catalog.kinds
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self {
            kinds: vec![
                FoodKind::new("apple", 1, Some("img/apple.png")),
                FoodKind::new("banana", 2, Some("img/banana.svg")),
                FoodKind::new("cherry", 3, Some("img/cherry.png")),
            ],
        }
    }
}

/// A piece of food lying on the board.
///
/// `kind` indexes into the session's [`FoodCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEntity {
    pub position: Vector2i,
    pub kind: usize,
}
