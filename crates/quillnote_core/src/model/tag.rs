//! Tag domain model.
//!
//! # Responsibility
//! - Define the `Tag` entity and the fixed `TagColor` palette.
//! - Enforce construction/mutation validation so invalid tags are
//!   unrepresentable, including on deserialization.
//!
//! # Invariants
//! - `id` is stable, non-nil, and never reused for another tag.
//! - `name` is stored trimmed and is non-empty.
//! - `created_at` is fixed at construction (Unix epoch milliseconds).
//! - Note associations live in the registry indices, not on the entity.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a tag.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TagId = Uuid;

/// Validation error for tag construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Name is empty after trimming whitespace.
    EmptyName,
    /// Identifier is the nil uuid.
    NilId,
    /// Color name is not part of the fixed palette.
    UnknownColor(String),
}

impl Display for TagValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "tag name cannot be empty"),
            Self::NilId => write!(f, "tag id cannot be the nil uuid"),
            Self::UnknownColor(name) => write!(f, "unknown tag color `{name}`"),
        }
    }
}

impl Error for TagValidationError {}

/// Fixed tag color palette.
///
/// The palette is closed: presentation pickers enumerate
/// [`TagColor::PALETTE`] and parse free-form input through
/// [`TagColor::from_name`], so a color outside the palette never reaches
/// the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Mint,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Pink,
    Brown,
    #[default]
    Gray,
}

impl TagColor {
    /// Every permitted color, in picker display order.
    pub const PALETTE: [TagColor; 13] = [
        TagColor::Red,
        TagColor::Orange,
        TagColor::Yellow,
        TagColor::Green,
        TagColor::Mint,
        TagColor::Teal,
        TagColor::Cyan,
        TagColor::Blue,
        TagColor::Indigo,
        TagColor::Purple,
        TagColor::Pink,
        TagColor::Brown,
        TagColor::Gray,
    ];

    /// Canonical lowercase name, matching the serialized form.
    pub fn as_name(self) -> &'static str {
        match self {
            TagColor::Red => "red",
            TagColor::Orange => "orange",
            TagColor::Yellow => "yellow",
            TagColor::Green => "green",
            TagColor::Mint => "mint",
            TagColor::Teal => "teal",
            TagColor::Cyan => "cyan",
            TagColor::Blue => "blue",
            TagColor::Indigo => "indigo",
            TagColor::Purple => "purple",
            TagColor::Pink => "pink",
            TagColor::Brown => "brown",
            TagColor::Gray => "gray",
        }
    }

    /// Parses a palette color from presentation-layer input.
    ///
    /// Input is trimmed and matched ASCII case-insensitively.
    ///
    /// # Errors
    /// - `UnknownColor` when the name is not in the palette.
    pub fn from_name(name: &str) -> Result<TagColor, TagValidationError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(TagColor::Red),
            "orange" => Ok(TagColor::Orange),
            "yellow" => Ok(TagColor::Yellow),
            "green" => Ok(TagColor::Green),
            "mint" => Ok(TagColor::Mint),
            "teal" => Ok(TagColor::Teal),
            "cyan" => Ok(TagColor::Cyan),
            "blue" => Ok(TagColor::Blue),
            "indigo" => Ok(TagColor::Indigo),
            "purple" => Ok(TagColor::Purple),
            "pink" => Ok(TagColor::Pink),
            "brown" => Ok(TagColor::Brown),
            "gray" => Ok(TagColor::Gray),
            other => Err(TagValidationError::UnknownColor(other.to_string())),
        }
    }
}

impl Display for TagColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}

/// Named, colored label attachable to multiple notes.
///
/// The tag holds no note references itself; the registry keeps the
/// tag/note association as two independent indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedTag")]
pub struct Tag {
    /// Stable identifier, fixed at construction.
    pub id: TagId,
    /// Display label. Stored trimmed, non-empty.
    pub name: String,
    /// Palette color. Defaults to `gray`.
    pub color: TagColor,
    /// Creation timestamp in Unix epoch milliseconds, fixed at construction.
    pub created_at: i64,
}

/// Wire shape accepted before validation.
#[derive(Deserialize)]
struct UncheckedTag {
    id: TagId,
    name: String,
    #[serde(default)]
    color: TagColor,
    created_at: i64,
}

impl TryFrom<UncheckedTag> for Tag {
    type Error = TagValidationError;

    fn try_from(raw: UncheckedTag) -> Result<Self, Self::Error> {
        Tag::with_parts(raw.id, raw.name, raw.color, raw.created_at)
    }
}

impl Tag {
    /// Creates a tag with a generated id and a current timestamp.
    ///
    /// # Errors
    /// - `EmptyName` when `name` trims to the empty string.
    pub fn new(
        name: impl Into<String>,
        color: TagColor,
    ) -> Result<Self, TagValidationError> {
        Self::with_parts(Uuid::new_v4(), name, color, now_epoch_ms())
    }

    /// Creates a tag from caller-provided identity and timestamp.
    ///
    /// Used by import/snapshot paths where identity already exists
    /// externally.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil uuid.
    /// - `EmptyName` when `name` trims to the empty string.
    pub fn with_parts(
        id: TagId,
        name: impl Into<String>,
        color: TagColor,
        created_at: i64,
    ) -> Result<Self, TagValidationError> {
        if id.is_nil() {
            return Err(TagValidationError::NilId);
        }
        let name = normalized_name(&name.into())?;
        Ok(Self {
            id,
            name,
            color,
            created_at,
        })
    }

    /// Replaces the display name.
    ///
    /// # Errors
    /// - `EmptyName` when `name` trims to the empty string; the stored
    ///   name is left unchanged.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), TagValidationError> {
        self.name = normalized_name(&name.into())?;
        Ok(())
    }

    /// Replaces the palette color.
    pub fn set_color(&mut self, color: TagColor) {
        self.color = color;
    }
}

fn normalized_name(name: &str) -> Result<String, TagValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(TagValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// A clock before the epoch degrades to 0 instead of panicking.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
