//! Per-row classification and batch orchestration
//!
//! `StudentImporter` drives the whole pipeline: header location (for matrix
//! input), header-to-field mapping, per-field value normalization,
//! stage/class resolution (or the batch context override), mandatory-field
//! checks, defaulting, and the final accepted/rejected partition.
//!
//! Each row is classified independently; one row's failure never aborts or
//! affects any other row, and the transform is a pure function of its
//! inputs.

use crate::app::models::{
    CanonicalField, CellValue, FailedRow, ImportContext, ImportResult, ProcessedStudent, RawRow,
    ReferenceCatalog, RowIssue,
};
use crate::app::services::header_locator::{key_rows, locate_header};
use crate::app::services::header_mapper::AliasDictionary;
use crate::app::services::reference_resolver::ReferenceResolver;
use crate::app::services::value_normalizer::{clean_text, format_phone, repair_numeric};
use crate::config::ImportConfig;
use crate::constants::MIN_POPULATED_CELLS;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use tracing::{debug, info};

use super::defaults;

/// Outcome of classifying a single row
enum RowOutcome {
    /// Structurally empty; absent from both output buckets
    Empty,
    Accepted(Box<ProcessedStudent>),
    Rejected(Vec<RowIssue>),
}

/// Import pipeline orchestrator
///
/// Holds the alias dictionary, the reference resolver built over the
/// caller-fetched catalog, the run configuration, and the optional batch
/// context. Stateless across rows; the same importer can classify any
/// number of batches deterministically.
#[derive(Debug)]
pub struct StudentImporter {
    dictionary: AliasDictionary,
    resolver: ReferenceResolver,
    config: ImportConfig,
    context: Option<ImportContext>,
}

impl StudentImporter {
    /// Create an importer over a reference catalog with default settings
    pub fn new(catalog: ReferenceCatalog, config: ImportConfig) -> Self {
        Self {
            dictionary: AliasDictionary::new(),
            resolver: ReferenceResolver::new(catalog),
            config,
            context: None,
        }
    }

    /// Replace the alias dictionary (e.g. after merging an overlay)
    pub fn with_dictionary(mut self, dictionary: AliasDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Supply a batch context override
    ///
    /// With a context, stage/class/academic-year are taken directly from it
    /// for every row and the reference resolver is never invoked.
    pub fn with_context(mut self, context: ImportContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Import from a raw cell matrix
    ///
    /// Locates the header row exactly once, keys the rows below it, and
    /// classifies them. An unprocessable matrix (no detectable header)
    /// yields an empty result.
    pub fn import_matrix(&self, matrix: &[Vec<CellValue>]) -> ImportResult {
        let Some(location) = locate_header(matrix, &self.dictionary) else {
            return ImportResult::default();
        };

        let rows = key_rows(matrix, &location);
        let mut result = self.import_rows(&rows, location.row_index + 1);
        result.stats.header_row_index = Some(location.row_index);
        result
    }

    /// Import pre-keyed rows
    ///
    /// `header_offset` is the number of original-file lines preceding the
    /// first data row (title rows plus the header row itself); rejected rows
    /// report `header_offset + position + 1` as their 1-based file line.
    pub fn import_rows(&self, rows: &[RawRow], header_offset: usize) -> ImportResult {
        let mut result = ImportResult::default();
        result.stats.total_rows = rows.len();

        info!(
            "classifying {} rows (header offset {})",
            rows.len(),
            header_offset
        );

        let progress = self.config.show_progress.then(|| {
            let pb = ProgressBar::new(rows.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            pb.set_message("Classifying rows");
            pb
        });

        for (position, row) in rows.iter().enumerate() {
            match self.classify_row(row) {
                RowOutcome::Empty => result.stats.empty_skipped += 1,
                RowOutcome::Accepted(student) => {
                    result.stats.accepted += 1;
                    result.success.push(*student);
                }
                RowOutcome::Rejected(issues) => {
                    result.stats.rejected += 1;
                    result.failed.push(FailedRow {
                        row: header_offset + position + 1,
                        data: row.clone(),
                        errors: issues.iter().map(ToString::to_string).collect(),
                    });
                }
            }
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message(result.stats.summary());
        }

        info!("{}", result.stats.summary());
        result
    }

    /// Classify one keyed row
    fn classify_row(&self, row: &RawRow) -> RowOutcome {
        if row.populated_count() < MIN_POPULATED_CELLS {
            return RowOutcome::Empty;
        }

        // Map headers to canonical fields; unknown columns are discarded and
        // the first non-blank value wins when two columns alias one field
        let mut fields: HashMap<CanonicalField, &CellValue> = HashMap::new();
        for (header, cell) in row.iter() {
            if cell.is_blank() {
                continue;
            }
            if let Some(field) = self.dictionary.resolve(header) {
                fields.entry(field).or_insert(cell);
            }
        }

        let text_of = |field: CanonicalField| -> String {
            fields
                .get(&field)
                .map(|cell| clean_text(&cell.display_text()))
                .unwrap_or_default()
        };
        let phone_of = |field: CanonicalField| -> Option<String> {
            fields
                .get(&field)
                .map(|cell| format_phone(cell, &self.config.phone))
                .filter(|p| !p.is_empty())
        };
        let identifier_of = |field: CanonicalField| -> Option<String> {
            fields
                .get(&field)
                .map(|cell| repair_numeric(cell))
                .filter(|d| !d.is_empty())
        };

        let full_name = text_of(CanonicalField::FullName);
        let name_ok = full_name.chars().count() >= self.config.min_name_chars;

        if !name_ok {
            // A stray formatting artifact row: nothing mapped besides a
            // missing/garbled name is the empty-row case, not an error
            let meaningful = fields
                .keys()
                .any(|field| *field != CanonicalField::FullName);
            if !meaningful {
                debug!("row has no meaningful mapped data; skipping");
                return RowOutcome::Empty;
            }
        }

        let mut issues = Vec::new();
        if !name_ok {
            issues.push(RowIssue::MissingMandatoryField {
                field: "student name".to_string(),
            });
        }

        let (stage_name, class_name, class_id, academic_year) = match &self.context {
            Some(context) => (
                context.stage_name.clone(),
                context.class_name.clone(),
                context.class_id.clone(),
                context.academic_year.clone(),
            ),
            None => {
                // The year keeps its raw "2025/2026" shape; cleaning would
                // strip the slash
                let year_text = fields
                    .get(&CanonicalField::AcademicYear)
                    .map(|cell| cell.display_text())
                    .unwrap_or_default();
                self.resolve_references(&mut issues, &text_of, year_text)
            }
        };

        if !issues.is_empty() {
            return RowOutcome::Rejected(issues);
        }

        let national_id = identifier_of(CanonicalField::NationalId);
        let student_id = national_id
            .clone()
            .unwrap_or_else(defaults::generate_student_id);

        let optional_text = |field: CanonicalField| -> Option<String> {
            Some(text_of(field)).filter(|t| !t.is_empty())
        };

        let student = ProcessedStudent {
            student_id,
            full_name,
            national_id,
            gender: defaults::unify_gender(
                &text_of(CanonicalField::Gender),
                &self.config.defaults,
            ),
            religion: optional_text(CanonicalField::Religion),
            nationality: defaults::default_nationality(
                &text_of(CanonicalField::Nationality),
                &self.config.defaults,
            ),
            stage_name,
            class_name,
            class_id,
            academic_year,
            guardian_name: optional_text(CanonicalField::GuardianName),
            guardian_phone: phone_of(CanonicalField::GuardianPhone),
            guardian_whatsapp: phone_of(CanonicalField::GuardianWhatsapp),
            guardian_national_id: identifier_of(CanonicalField::GuardianNationalId),
            guardian_job: optional_text(CanonicalField::GuardianJob),
            mother_name: optional_text(CanonicalField::MotherName),
            mother_phone: phone_of(CanonicalField::MotherPhone),
        };

        RowOutcome::Accepted(Box::new(student))
    }

    /// Resolve stage/class/year from the row's own free text
    fn resolve_references(
        &self,
        issues: &mut Vec<RowIssue>,
        text_of: &dyn Fn(CanonicalField) -> String,
        year_text: String,
    ) -> (String, String, String, String) {
        let stage_text = text_of(CanonicalField::StageName);
        let class_text = text_of(CanonicalField::ClassName);

        let academic_year = if year_text.is_empty() {
            defaults::derive_academic_year(Utc::now())
        } else {
            year_text
        };

        if stage_text.is_empty() {
            issues.push(RowIssue::MissingStage);
            return (String::new(), String::new(), String::new(), academic_year);
        }

        let Some(stage) = self.resolver.resolve_stage(&stage_text) else {
            issues.push(RowIssue::UnresolvableStage { value: stage_text });
            return (String::new(), String::new(), String::new(), academic_year);
        };

        // The resolved stage name is reported even when the class fails, for
        // diagnostic value
        let stage_name = stage.name.clone();

        if class_text.is_empty() {
            issues.push(RowIssue::MissingClass {
                stage: stage_name.clone(),
            });
            return (stage_name, String::new(), String::new(), academic_year);
        }

        match self.resolver.resolve_class(stage, &class_text) {
            Some(class) => (
                stage_name,
                class.name.clone(),
                class.id.clone(),
                academic_year,
            ),
            None => {
                issues.push(RowIssue::UnresolvableClass {
                    value: class_text,
                    stage: stage_name.clone(),
                });
                (stage_name, String::new(), String::new(), academic_year)
            }
        }
    }
}
