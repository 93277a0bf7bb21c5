//! Typed data entries and note entries
//!
//! A data entry is one answer to one form field, tagged with an input kind
//! and validated against that kind before acceptance. Notes are free-text
//! annotations with no kind validation and no effect on progress.

use crate::error::TravelerError;
use crate::types::{TravelerId, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input kind for a typed data entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Uploaded file; carries file metadata
    File,
    /// Single-line text
    Text,
    /// Multi-line text
    MultilineText,
    /// Numeric value; validated before acceptance
    Number,
}

impl EntryKind {
    /// Wire string for this kind
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Text => "text",
            EntryKind::MultilineText => "multiline-text",
            EntryKind::Number => "number",
        }
    }

    /// Parse wire string; unknown kinds fail fast
    pub fn parse(value: &str) -> Result<Self, TravelerError> {
        match value {
            "file" => Ok(EntryKind::File),
            "text" => Ok(EntryKind::Text),
            "multiline-text" => Ok(EntryKind::MultilineText),
            "number" => Ok(EntryKind::Number),
            other => Err(TravelerError::UnknownEntryKind(other.to_string())),
        }
    }
}

/// File descriptor for file-kind entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// Storage path
    pub path: String,
    /// Content encoding
    pub encoding: String,
    /// MIME type
    pub mime: String,
}

/// A single validated answer to one form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    /// Traveler this entry belongs to
    pub owner_traveler_id: TravelerId,
    /// Internal field name the entry answers
    pub field_name: String,
    /// Kind-dependent value
    pub value: serde_json::Value,
    /// Input kind
    pub kind: EntryKind,
    /// Present iff `kind` is `File`
    pub file_metadata: Option<FileMetadata>,
    /// Who recorded the entry
    pub entered_by: UserRef,
    /// When the entry was recorded
    pub entered_on: DateTime<Utc>,
}

impl DataEntry {
    /// Build a validated entry.
    ///
    /// # Errors
    /// - `Validation` if `kind` is `Number` and `value` is not a JSON number
    /// - `Validation` if file metadata presence does not match the kind
    pub fn new(
        owner_traveler_id: TravelerId,
        field_name: impl Into<String>,
        value: serde_json::Value,
        kind: EntryKind,
        file_metadata: Option<FileMetadata>,
        entered_by: UserRef,
        entered_on: DateTime<Utc>,
    ) -> Result<Self, TravelerError> {
        let field_name = field_name.into();

        if kind == EntryKind::Number && !value.is_number() {
            return Err(TravelerError::Validation {
                field: field_name,
                reason: format!("kind 'number' requires a numeric value, got {value}"),
            });
        }
        match (kind, &file_metadata) {
            (EntryKind::File, None) => {
                return Err(TravelerError::Validation {
                    field: field_name,
                    reason: "kind 'file' requires file metadata".to_string(),
                });
            }
            (kind, Some(_)) if kind != EntryKind::File => {
                return Err(TravelerError::Validation {
                    field: field_name,
                    reason: format!("kind '{}' must not carry file metadata", kind.as_str()),
                });
            }
            _ => {}
        }

        Ok(Self {
            owner_traveler_id,
            field_name,
            value,
            kind,
            file_metadata,
            entered_by,
            entered_on,
        })
    }
}

/// Free-text annotation, independent of the form-progress machinery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    /// Traveler this note belongs to
    pub owner_traveler_id: TravelerId,
    /// Field the note is attached to
    pub field_name: String,
    /// Note text; never validated
    pub value: String,
    /// Who recorded the note
    pub entered_by: UserRef,
    /// When the note was recorded
    pub entered_on: DateTime<Utc>,
}

impl NoteEntry {
    /// Create a note; no kind validation applies
    #[must_use]
    pub fn new(
        owner_traveler_id: TravelerId,
        field_name: impl Into<String>,
        value: impl Into<String>,
        entered_by: UserRef,
        entered_on: DateTime<Utc>,
    ) -> Self {
        Self {
            owner_traveler_id,
            field_name: field_name.into(),
            value: value.into(),
            entered_by,
            entered_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn worker() -> UserRef {
        UserRef::new("u-1", "Worker One")
    }

    fn file_meta() -> FileMetadata {
        FileMetadata {
            path: "/uploads/report.pdf".to_string(),
            encoding: "binary".to_string(),
            mime: "application/pdf".to_string(),
        }
    }

    #[test]
    fn entry_kind_wire_strings() {
        for kind in [
            EntryKind::File,
            EntryKind::Text,
            EntryKind::MultilineText,
            EntryKind::Number,
        ] {
            assert_eq!(EntryKind::parse(kind.as_str()).unwrap(), kind);
        }
        assert!(matches!(
            EntryKind::parse("checkbox"),
            Err(TravelerError::UnknownEntryKind(_))
        ));
    }

    #[test]
    fn number_kind_requires_numeric_value() {
        let err = DataEntry::new(
            TravelerId::new(),
            "weight",
            json!("twelve"),
            EntryKind::Number,
            None,
            worker(),
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.is_validation());

        let ok = DataEntry::new(
            TravelerId::new(),
            "weight",
            json!(12.5),
            EntryKind::Number,
            None,
            worker(),
            Utc::now(),
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn file_metadata_present_iff_file_kind() {
        let missing = DataEntry::new(
            TravelerId::new(),
            "report",
            json!("report.pdf"),
            EntryKind::File,
            None,
            worker(),
            Utc::now(),
        );
        assert!(missing.is_err());

        let spurious = DataEntry::new(
            TravelerId::new(),
            "comment",
            json!("looks good"),
            EntryKind::Text,
            Some(file_meta()),
            worker(),
            Utc::now(),
        );
        assert!(spurious.is_err());

        let file = DataEntry::new(
            TravelerId::new(),
            "report",
            json!("report.pdf"),
            EntryKind::File,
            Some(file_meta()),
            worker(),
            Utc::now(),
        );
        assert!(file.is_ok());
    }

    #[test]
    fn note_accepts_anything() {
        let note = NoteEntry::new(
            TravelerId::new(),
            "weight",
            "scale was recalibrated",
            worker(),
            Utc::now(),
        );
        assert_eq!(note.value, "scale was recalibrated");
    }

    #[test]
    fn entry_kind_serde_uses_kebab_case() {
        let json = serde_json::to_string(&EntryKind::MultilineText).unwrap();
        assert_eq!(json, "\"multiline-text\"");
    }
}
