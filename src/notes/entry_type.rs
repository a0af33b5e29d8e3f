use serde::{Deserialize, Serialize};

use super::board::BoardError;

/// An RGB display color with float channels in `[0.0, 1.0]`
///
/// Colors are display metadata only; they never influence filtering or
/// counting. Channels mirror the values the presentation layer needs to
/// paint entry backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Render as a `#RRGGBB` hex string for selector display
    pub fn to_hex(self) -> String {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

/// A named entry category with its display color pair
///
/// `ordinal` is the stable position in the registry, used only to map
/// selector indices back to categories. Entries reference a category by
/// `name`, never by ordinal, so reordering the registry cannot silently
/// recategorize existing entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryType {
    pub name: String,
    pub color: Rgb,
    pub finished_color: Rgb,
    pub ordinal: usize,
}

impl EntryType {
    fn new(name: &str, color: Rgb, finished_color: Rgb, ordinal: usize) -> Self {
        Self {
            name: name.to_string(),
            color,
            finished_color,
            ordinal,
        }
    }

    /// Text color that stays readable on this category's active background
    ///
    /// Only the TODO background is light enough to need dark text; every
    /// other category uses a dark background with white text.
    pub fn label_color(&self) -> Rgb {
        if self.color == TODO_COLOR {
            Rgb::new(0.0, 0.0, 0.0)
        } else {
            Rgb::new(1.0, 1.0, 1.0)
        }
    }
}

const TODO_COLOR: Rgb = Rgb::new(1.0, 1.0, 0.50);

/// The fixed, ordered catalog of built-in entry categories
///
/// The registry is constructed once (colors and all) and looked up by
/// reference thereafter. It is not serialized; persistence rebuilds it when
/// loading a board.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: Vec<EntryType>,
}

impl TypeRegistry {
    /// Build the nine built-in categories with their color pairs
    pub fn builtin() -> Self {
        let defs: [(&str, Rgb, Rgb); 9] = [
            ("TODO", TODO_COLOR, Rgb::new(1.0, 1.0, 0.80)),
            ("Note", Rgb::new(0.15, 0.15, 0.15), Rgb::new(0.35, 0.35, 0.35)),
            ("Bug", Rgb::new(0.498, 0.0, 0.0), Rgb::new(0.69, 0.20, 0.20)),
            ("Backlog", Rgb::new(0.8, 0.0, 0.0), Rgb::new(1.0, 0.2, 0.2)),
            (
                "Optimization",
                Rgb::new(0.1, 0.15, 0.4),
                Rgb::new(0.3, 0.35, 0.6),
            ),
            (
                "Observation",
                Rgb::new(0.25, 0.25, 0.35),
                Rgb::new(0.45, 0.45, 0.55),
            ),
            (
                "Request",
                Rgb::new(0.1, 0.25, 0.6),
                Rgb::new(0.3, 0.45, 0.8),
            ),
            (
                "Suggestion",
                Rgb::new(0.4, 0.05, 0.5),
                Rgb::new(0.6, 0.25, 0.7),
            ),
            // In Progress keeps its active color when finished
            (
                "In Progress",
                Rgb::new(0.1, 0.45, 0.1),
                Rgb::new(0.1, 0.45, 0.1),
            ),
        ];

        let types = defs
            .into_iter()
            .enumerate()
            .map(|(ordinal, (name, color, finished_color))| {
                EntryType::new(name, color, finished_color, ordinal)
            })
            .collect();

        Self { types }
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Look up a category by its ordinal
    pub fn lookup(&self, index: usize) -> Result<&EntryType, BoardError> {
        self.types.get(index).ok_or(BoardError::TypeIndexOutOfRange {
            index,
            len: self.types.len(),
        })
    }

    /// Find a category by name (exact match)
    pub fn find(&self, name: &str) -> Option<&EntryType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Ordered category names for selector controls
    pub fn names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Iterate categories in registry order
    pub fn iter(&self) -> impl Iterator<Item = &EntryType> {
        self.types.iter()
    }
}
