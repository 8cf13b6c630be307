//! XML configuration loading

use crate::{Error, Result, io};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Structured-document reader for XML configuration files.
///
/// Element names map to field names. The document must consist of a
/// single root element with the expected name; anything else is a
/// parse error rather than a partially-filled value.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from an `.xml` file whose root element is `root`.
    pub fn load<T: DeserializeOwned>(&self, path: &Path, root: &str) -> Result<T> {
        let content = io::read_text(path)?;
        self.parse(path, &content, root)
    }

    /// Parse already-read content as if it came from `path`.
    pub fn parse<T: DeserializeOwned>(
        &self,
        path: &Path,
        content: &str,
        root: &str,
    ) -> Result<T> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !extension.eq_ignore_ascii_case("xml") {
            return Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            });
        }

        check_document_shape(content, root).map_err(|message| parse_error(path, message))?;
        quick_xml::de::from_str(content).map_err(|e| parse_error(path, e.to_string()))
    }
}

fn parse_error(path: &Path, message: String) -> Error {
    Error::ConfigParse {
        path: path.to_path_buf(),
        format: "XML".into(),
        message,
    }
}

/// Exactly one top-level element named `root`; only whitespace,
/// comments, processing instructions and the declaration around it.
fn check_document_shape(content: &str, root: &str) -> std::result::Result<(), String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at byte {}: {}", reader.buffer_position(), e))?;

        match event {
            Event::Start(ref e) | Event::Empty(ref e) if depth == 0 => {
                if seen_root {
                    return Err(format!(
                        "unexpected element <{}> after root element",
                        String::from_utf8_lossy(e.name().as_ref())
                    ));
                }
                if e.name().as_ref() != root.as_bytes() {
                    return Err(format!(
                        "expected root element <{}>, found <{}>",
                        root,
                        String::from_utf8_lossy(e.name().as_ref())
                    ));
                }
                seen_root = true;
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(ref t) if depth == 0 => {
                if t.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err("text outside the root element".to_string());
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err("CDATA outside the root element".to_string());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(format!("missing root element <{}>", root));
    }
    if depth != 0 {
        return Err(format!("root element <{}> is not closed", root));
    }

    Ok(())
}
