//! Puzzle collections: loading, validation, and saving.
//!
//! Collections are stored either as JSON (the hand-edited format) or as
//! `MessagePack` (a compact pack for distribution). The format is picked
//! from the file extension.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use categuess_foundation::{Error, ErrorContext, ErrorKind, Puzzle, PuzzleId, Result};

/// The collection shipped with the game.
const BUILTIN_PUZZLES: &str = include_str!("../data/puzzles.json");

// =============================================================================
// Puzzle Format
// =============================================================================

/// On-disk format of a puzzle collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleFormat {
    /// JSON array of puzzles.
    Json,
    /// `MessagePack` array of puzzles (named fields).
    MessagePack,
}

impl PuzzleFormat {
    /// Picks a format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or unknown.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "mpk" | "msgpack" => Ok(Self::MessagePack),
            _ => Err(Error::new(ErrorKind::UnsupportedFormat(
                path.display().to_string(),
            ))),
        }
    }
}

// =============================================================================
// Load Options
// =============================================================================

/// Options for loading a collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadOptions {
    /// Accept puzzles that break the five-word / non-blank-name rules.
    pub skip_validation: bool,
}

impl LoadOptions {
    /// Builder method to skip validation.
    #[must_use]
    pub const fn skip_validation(mut self) -> Self {
        self.skip_validation = true;
        self
    }
}

// =============================================================================
// Puzzle Collection
// =============================================================================

/// An ordered set of puzzles with unique ids.
#[derive(Clone, Debug, Default)]
pub struct PuzzleCollection {
    puzzles: Vec<Puzzle>,
    by_id: HashMap<PuzzleId, usize>,
}

impl PuzzleCollection {
    /// Builds a collection, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns an error if two puzzles share an id, or if validation is on
    /// and a puzzle is invalid.
    pub fn new(puzzles: Vec<Puzzle>, options: LoadOptions) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(puzzles.len());
        for (index, puzzle) in puzzles.iter().enumerate() {
            if !options.skip_validation {
                puzzle.validate()?;
            }
            if by_id.insert(puzzle.id.clone(), index).is_some() {
                return Err(Error::new(ErrorKind::DuplicatePuzzleId(
                    puzzle.id.to_string(),
                )));
            }
        }
        Ok(Self { puzzles, by_id })
    }

    /// Returns the built-in collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails to parse.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PUZZLES, LoadOptions::default())
            .map_err(|e| e.with_context(ErrorContext::new().with_source("built-in puzzles")))
    }

    /// Parses a JSON collection.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_json_str(json: &str, options: LoadOptions) -> Result<Self> {
        let puzzles: Vec<Puzzle> =
            serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))?;
        Self::new(puzzles, options)
    }

    /// Parses a JSON collection from a reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading, parsing, or validation fails.
    pub fn from_json_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Self> {
        let puzzles: Vec<Puzzle> =
            serde_json::from_reader(reader).map_err(|e| Error::serialization(e.to_string()))?;
        Self::new(puzzles, options)
    }

    /// Decodes a `MessagePack` collection.
    ///
    /// # Errors
    ///
    /// Returns an error if decoding or validation fails.
    pub fn from_msgpack_bytes(bytes: &[u8], options: LoadOptions) -> Result<Self> {
        let puzzles: Vec<Puzzle> =
            rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))?;
        Self::new(puzzles, options)
    }

    /// Encodes the collection as `MessagePack`.
    ///
    /// Uses named serialization to preserve struct field names.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_msgpack_bytes(&self) -> Result<Vec<u8>> {
        rmp_serde::to_vec_named(&self.puzzles).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Encodes the collection as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.puzzles).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Loads a collection from a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown, the file cannot be read,
    /// or its contents fail to parse or validate.
    pub fn load_from_file<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new().with_source(path.display().to_string());

        let format = PuzzleFormat::from_path(path)?;
        let loaded = match format {
            PuzzleFormat::Json => {
                let file = File::open(path).map_err(|e| {
                    Error::io(format!("failed to open file '{}': {e}", path.display()))
                })?;
                Self::from_json_reader(BufReader::new(file), options)
            }
            PuzzleFormat::MessagePack => {
                let bytes = fs::read(path).map_err(|e| {
                    Error::io(format!("failed to read file '{}': {e}", path.display()))
                })?;
                Self::from_msgpack_bytes(&bytes, options)
            }
        };
        loaded.map_err(|e| e.with_context(context()))
    }

    /// Saves the collection to a file, choosing the format by extension.
    ///
    /// Creates the file if it doesn't exist, or overwrites it if it does.
    ///
    /// # Errors
    ///
    /// Returns an error if the format is unknown, or the file cannot be
    /// created or written to.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = match PuzzleFormat::from_path(path)? {
            PuzzleFormat::Json => self.to_json_string()?.into_bytes(),
            PuzzleFormat::MessagePack => self.to_msgpack_bytes()?,
        };

        let file = File::create(path).map_err(|e| {
            Error::io(format!("failed to create file '{}': {e}", path.display()))
        })?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))
    }

    /// Returns the number of puzzles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns true if the collection has no puzzles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Returns all puzzles in load order.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Looks up a puzzle by id.
    #[must_use]
    pub fn get(&self, id: &PuzzleId) -> Option<&Puzzle> {
        self.by_id.get(id).map(|&index| &self.puzzles[index])
    }

    /// Looks up a puzzle by id, failing if it is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle has this id.
    pub fn require(&self, id: &PuzzleId) -> Result<&Puzzle> {
        self.get(id).ok_or_else(|| Error::unknown_puzzle(id))
    }

    /// Validates every puzzle, collecting all failures.
    #[must_use]
    pub fn validate(&self) -> Vec<Error> {
        self.puzzles
            .iter()
            .filter_map(|puzzle| puzzle.validate().err())
            .collect()
    }
}
