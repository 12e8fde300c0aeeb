//! # Program Image for VM16
//!
//! An ordered, immutable sequence of words and its headerless binary form.

use crate::encoding::{check_word, decode, encode_words, encoded_len};
use crate::error::CodecResult;
use crate::Word;
use std::fmt;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Complete program: words in load order
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Create a program from typed words
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Create an empty program
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a program from raw integers, range-checking each one
    pub fn from_values(values: &[i64]) -> CodecResult<Self> {
        let words = values
            .iter()
            .enumerate()
            .map(|(position, &value)| check_word(value, position))
            .collect::<CodecResult<Vec<_>>>()?;
        Ok(Self { words })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<Word> {
        self.words.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the encoded image in bytes
    pub fn byte_len(&self) -> usize {
        encoded_len(self.words.len())
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_words(&self.words)
    }

    /// Deserialize from bytes
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        Ok(Self { words: decode(bytes)? })
    }

    /// Read and decode a program image file
    pub fn read_from(path: impl AsRef<Path>) -> CodecResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        debug!(path = %path.as_ref().display(), bytes = bytes.len(), "read program image");
        Self::from_bytes(&bytes)
    }

    /// Encode and write the program image to `path`.
    ///
    /// If the file cannot be opened it is left untouched. Once opened, a
    /// failed write removes the partially written file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> CodecResult<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes();

        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        let result = writer.write_all(&bytes).and_then(|()| writer.flush());
        if let Err(err) = result {
            drop(writer);
            let _ = fs::remove_file(path);
            return Err(err.into());
        }

        debug!(path = %path.display(), bytes = bytes.len(), "wrote program image");
        Ok(())
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}

impl AsRef<[Word]> for Program {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Canonical listing form: `9,32768,32769`
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
