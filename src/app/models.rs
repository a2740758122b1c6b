//! Data models for the enrollment import pipeline
//!
//! This module contains the core data structures: raw spreadsheet cells and
//! rows, the closed set of canonical fields, the externally supplied
//! reference catalog, and the accepted/rejected output partition.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Raw Input
// =============================================================================

/// A single raw spreadsheet cell
///
/// Source files carry strings, numbers (including long identifiers that
/// spreadsheet software re-encoded as floating point), and blanks. The
/// untagged serde representation accepts all three shapes from JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Textual cell content
    Text(String),
    /// Numeric cell content, as stored by the spreadsheet
    Number(f64),
    /// Blank cell
    Empty,
}

impl CellValue {
    /// Whether the cell carries no usable content
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }

    /// Cell content as display text; numbers are rendered without an
    /// exponent so large identifiers stay intact
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{:.0}", n)
                } else {
                    n.to_string()
                }
            }
            CellValue::Empty => String::new(),
        }
    }

    /// Whether the cell is textual and does not parse as a number
    pub fn is_non_numeric_text(&self) -> bool {
        match self {
            CellValue::Text(s) => {
                let trimmed = s.trim();
                !trimmed.is_empty() && trimmed.parse::<f64>().is_err()
            }
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        if s.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// A keyed input row: caller-supplied header strings mapped to raw cells
///
/// Column order is preserved exactly as it appeared in the source file so
/// that duplicate-alias resolution and diagnostics are deterministic. Keys
/// are unpredictable free text; only the header mapper may interpret them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    columns: Vec<(String, CellValue)>,
}

impl RawRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from (header, cell) pairs in source column order
    pub fn from_pairs(pairs: Vec<(String, CellValue)>) -> Self {
        Self { columns: pairs }
    }

    /// Append a column, keeping source order
    pub fn push(&mut self, header: impl Into<String>, value: CellValue) {
        self.columns.push((header.into(), value));
    }

    /// Look up a cell by exact header text
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.columns
            .iter()
            .find(|(h, _)| h == header)
            .map(|(_, v)| v)
    }

    /// Iterate columns in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.columns.iter().map(|(h, v)| (h.as_str(), v))
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns at all
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of cells carrying non-blank content
    pub fn populated_count(&self) -> usize {
        self.columns.iter().filter(|(_, v)| !v.is_blank()).count()
    }
}

impl Serialize for RawRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (header, value) in &self.columns {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RawRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RawRowVisitor;

        impl<'de> Visitor<'de> for RawRowVisitor {
            type Value = RawRow;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of header strings to cell values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut row = RawRow::new();
                while let Some((header, value)) = access.next_entry::<String, CellValue>()? {
                    row.push(header, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RawRowVisitor)
    }
}

// =============================================================================
// Canonical Fields
// =============================================================================

/// The closed set of target attributes the pipeline knows how to populate
///
/// Every recognized source column maps onto exactly one of these; columns
/// that map to none are silently discarded. Arbitrary header strings must
/// never propagate past the header mapper into the rest of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    FullName,
    NationalId,
    Gender,
    Religion,
    Nationality,
    StageName,
    ClassName,
    AcademicYear,
    GuardianName,
    GuardianPhone,
    GuardianWhatsapp,
    GuardianNationalId,
    GuardianJob,
    MotherName,
    MotherPhone,
}

impl CanonicalField {
    /// Fields holding phone numbers, normalized through the phone formatter
    pub fn is_phone(&self) -> bool {
        matches!(
            self,
            CanonicalField::GuardianPhone
                | CanonicalField::GuardianWhatsapp
                | CanonicalField::MotherPhone
        )
    }

    /// Fields holding long digit-string identifiers, repaired through the
    /// numeric normalizer
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            CanonicalField::NationalId | CanonicalField::GuardianNationalId
        )
    }

    /// Stable snake_case name used in diagnostics and JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::FullName => "full_name",
            CanonicalField::NationalId => "national_id",
            CanonicalField::Gender => "gender",
            CanonicalField::Religion => "religion",
            CanonicalField::Nationality => "nationality",
            CanonicalField::StageName => "stage_name",
            CanonicalField::ClassName => "class_name",
            CanonicalField::AcademicYear => "academic_year",
            CanonicalField::GuardianName => "guardian_name",
            CanonicalField::GuardianPhone => "guardian_phone",
            CanonicalField::GuardianWhatsapp => "guardian_whatsapp",
            CanonicalField::GuardianNationalId => "guardian_national_id",
            CanonicalField::GuardianJob => "guardian_job",
            CanonicalField::MotherName => "mother_name",
            CanonicalField::MotherPhone => "mother_phone",
        }
    }
}

// =============================================================================
// Reference Catalog
// =============================================================================

/// An organizational stage (grade level) from the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// Backing-store identifier
    pub id: String,

    /// Official stage name (e.g. "الصف الأول الابتدائي")
    pub name: String,
}

/// A class section belonging to exactly one stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    /// Backing-store identifier
    pub id: String,

    /// Class section name (e.g. "1/A", "أ")
    pub name: String,

    /// Identifier of the owning stage
    #[serde(rename = "stageId")]
    pub stage_id: String,
}

/// Externally supplied catalog of valid stages and classes
///
/// The catalog is fetched wholesale by the caller before the import run and
/// is read-only and authoritative for its duration. Its own spellings may be
/// inconsistent; the reference resolver compares under canonicalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub stages: Vec<Stage>,
    pub classes: Vec<Class>,
}

impl ReferenceCatalog {
    /// Look up a stage by identifier
    pub fn stage_by_id(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// Classes belonging to the given stage, in catalog order
    ///
    /// The returned references borrow the catalog only, not the lookup key,
    /// so a caller may keep a resolved class after the key is gone.
    pub fn classes_for_stage<'a>(
        &'a self,
        stage_id: &str,
    ) -> impl Iterator<Item = &'a Class> + use<'a> {
        let stage_id = stage_id.to_owned();
        self.classes.iter().filter(move |c| c.stage_id == stage_id)
    }

    /// Whether the catalog carries no stages
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

// =============================================================================
// Import Context
// =============================================================================

/// Caller-supplied batch override: a pre-selected destination for every row
///
/// When present, stage/class/academic-year are taken directly from the
/// context and free-text reference resolution is bypassed for the whole
/// batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportContext {
    pub academic_year: String,
    pub stage_id: String,
    pub stage_name: String,
    pub class_id: String,
    pub class_name: String,
}

// =============================================================================
// Output Records
// =============================================================================

/// The canonical output record for one accepted row
///
/// Created per accepted row and never mutated afterwards; ownership passes
/// to the caller for persistence. Original spellings are preserved; script
/// canonicalization is applied during comparison only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedStudent {
    /// Supplied national id, or a generated identifier when none was present
    pub student_id: String,

    /// Cleaned full name
    pub full_name: String,

    /// National identifier as repaired digits, when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    /// Canonical gender spelling
    pub gender: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub religion: Option<String>,

    /// Defaulted when absent
    pub nationality: String,

    /// Official stage name from the catalog or context
    pub stage_name: String,

    /// Class section name from the catalog or context
    pub class_name: String,

    /// Backing-store class identifier
    pub class_id: String,

    /// Academic year (e.g. "2026/2027")
    pub academic_year: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_whatsapp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_national_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_job: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_phone: Option<String>,
}

/// A rejected row with the diagnostics an operator needs to fix it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedRow {
    /// 1-based position in the original file, adjusted for the header
    /// offset, so the message points at the exact spreadsheet line
    pub row: usize,

    /// The untouched raw row for operator review
    pub data: RawRow,

    /// Human-readable rejection reasons
    pub errors: Vec<String>,
}

/// The two-bucket outcome of an import run
///
/// Every row with at least one non-trivial cell lands in exactly one bucket;
/// structurally empty rows land in neither.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportResult {
    /// Accepted records ready for persistence
    pub success: Vec<ProcessedStudent>,

    /// Rejected rows with line numbers and reasons
    pub failed: Vec<FailedRow>,

    /// Processing counters for reporting
    pub stats: ImportStats,
}

impl ImportResult {
    /// Whether every processed row was accepted
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Counters collected while classifying a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Rows seen after the header row
    pub total_rows: usize,

    /// Structurally empty rows skipped silently
    pub empty_skipped: usize,

    /// Rows accepted into the success bucket
    pub accepted: usize,

    /// Rows rejected with diagnostics
    pub rejected: usize,

    /// Index of the detected header row in the original matrix, when the
    /// input arrived as an unkeyed matrix
    pub header_row_index: Option<usize>,
}

impl ImportStats {
    /// Acceptance rate over non-empty rows, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        let considered = self.accepted + self.rejected;
        if considered == 0 {
            100.0
        } else {
            (self.accepted as f64 / considered as f64) * 100.0
        }
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} rows: {} accepted, {} rejected, {} empty ({:.1}% acceptance)",
            self.total_rows,
            self.accepted,
            self.rejected,
            self.empty_skipped,
            self.acceptance_rate()
        )
    }
}

// =============================================================================
// Row-Scoped Issues
// =============================================================================

/// Row-scoped rejection reasons
///
/// These are diagnostics, not batch errors: one row's failure never affects
/// any other row. Rendered via `Display` into [`FailedRow::errors`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RowIssue {
    /// Mandatory field absent or below the minimum length on an otherwise
    /// populated row
    #[error("Missing mandatory field: {field} is absent or too short")]
    MissingMandatoryField { field: String },

    /// No stage value present and no batch context supplied
    #[error("No stage value present; select a stage or add a stage column")]
    MissingStage,

    /// Free-text stage could not be matched against the catalog
    #[error("Stage '{value}' could not be matched against the reference catalog")]
    UnresolvableStage { value: String },

    /// Stage resolved but no class value was present
    #[error("No class value present for stage '{stage}'")]
    MissingClass { stage: String },

    /// Free-text class could not be matched within the resolved stage
    #[error("Class '{value}' could not be matched within stage '{stage}'")]
    UnresolvableClass { value: String, stage: String },
}
