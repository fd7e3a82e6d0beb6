// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::ast::{Document, Value};
use crate::parser::Parser;
use crate::serializer::{Serializer, Style};
use crate::syntax::Syntax;
use crate::HfcError;

mod access;
mod conversion;
mod edit;
mod helpers;

/// A parsed HFC document together with the grammar and text it came from.
pub struct HfcConfig {
    document: Document,
    syntax: Syntax,
    raw_content: String, // Text as loaded, for error lines; cleared on edit
}

impl HfcConfig {
    /// An empty configuration with no sections.
    pub fn new() -> Self {
        Self::from_document(Document::new())
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            syntax: Syntax::default(),
            raw_content: String::new(),
        }
    }

    /// Parse an HFC config from a string.
    pub fn from_str(content: &str) -> Result<Self, HfcError> {
        Self::from_str_with_syntax(content, Syntax::default())
    }

    pub fn from_str_with_syntax(content: &str, syntax: Syntax) -> Result<Self, HfcError> {
        let document = Parser::new(content, &syntax).parse_document()?;

        Ok(Self {
            document,
            syntax,
            raw_content: content.to_string(),
        })
    }

    /// Load an HFC file. A leading `~/` is expanded to the home directory.
    ///
    /// # Example
    /// ```ignore
    /// let config = HfcConfig::from_file("~/.config/app/settings.hfc")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HfcError> {
        let path = expand_home(path.as_ref())?;
        debug!("loading {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| {
            HfcError::file_error(
                format!("Failed to read file: {}", e),
                path.to_string_lossy().to_string(),
            )
        })?;

        Self::from_str(&content)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access to the document. Type errors raised afterwards no longer
    /// carry source line numbers.
    pub fn document_mut(&mut self) -> &mut Document {
        self.raw_content.clear();
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Render the current document as HFC text.
    pub fn to_hfc_string(&self, style: &Style) -> Result<String, HfcError> {
        Serializer::new(&self.syntax, style).serialize_document(&self.document)
    }

    /// Write the current document to `path` as HFC text.
    pub fn save<P: AsRef<Path>>(&self, path: P, style: &Style) -> Result<(), HfcError> {
        let path = expand_home(path.as_ref())?;
        let text = self.to_hfc_string(style)?;

        fs::write(&path, text).map_err(|e| HfcError::FileError {
            message: format!("Failed to write file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the directory exists and is writable".into()),
            code: Some(302),
        })?;
        debug!("saved {}", path.display());
        Ok(())
    }
}

impl Default for HfcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand "~/" to the user's home directory.
fn expand_home(path: &Path) -> Result<PathBuf, HfcError> {
    let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| HfcError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}
