use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The closed set of board categories. Every thread belongs to exactly one,
/// fixed at creation. Services take this enum rather than a raw string, so an
/// out-of-set category cannot reach the store layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Games,
    Board,
    Card,
    Sports,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Games,
        Category::Board,
        Category::Card,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Games => "games",
            Category::Board => "board",
            Category::Card => "card",
            Category::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "games" => Ok(Category::Games),
            "board" => Ok(Category::Board),
            "card" => Ok(Category::Card),
            "sports" => Ok(Category::Sports),
            other => Err(AppError::NotFound(format!("Unknown category '{}'", other))),
        }
    }
}

/// Thread count per category, for the home summary.
#[derive(Debug, Default, Serialize)]
pub struct CategoryCounts {
    pub games: i64,
    pub board: i64,
    pub card: i64,
    pub sports: i64,
}

impl CategoryCounts {
    pub fn set(&mut self, category: Category, count: i64) {
        match category {
            Category::Games => self.games = count,
            Category::Board => self.board = count,
            Category::Card => self.card = count,
            Category::Sports => self.sports = count,
        }
    }
}
