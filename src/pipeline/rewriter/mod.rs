//! Field rewriter: records the normalized name of every eligible field.
use tracing::debug;

use super::descriptor::{DescriptorSet, FieldDescriptor, FileDescriptor, MessageDescriptor};
use crate::naming::snake::{convert, CamelStyle};
use crate::naming::Normalizer;

//==================================================================================OUTCOME
#[derive(Debug, Clone, PartialEq, Eq)]
/// What happened to one field.
pub enum FieldOutcome {
    /// The field already carried an override.
    Skipped,
    /// A new override was recorded.
    Renamed { from: String, to: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Counters for one pass over a descriptor set.
pub struct RewriteReport {
    pub renamed: usize,
    pub skipped: usize,
}

impl RewriteReport {
    fn record(&mut self, outcome: &FieldOutcome) {
        match outcome {
            FieldOutcome::Skipped => self.skipped += 1,
            FieldOutcome::Renamed { .. } => self.renamed += 1,
        }
    }

    /// Fields visited (extensions excluded).
    pub fn total(&self) -> usize {
        self.renamed + self.skipped
    }
}

//==================================================================================FIELD_REWRITER
#[derive(Debug, Clone, Default)]
/// Applies `snake → camel` then normalization to declared field names.
pub struct FieldRewriter {
    normalizer: Normalizer,
    style: CamelStyle,
}

impl FieldRewriter {
    pub fn new(normalizer: Normalizer, style: CamelStyle) -> Self {
        Self { normalizer, style }
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Exported name for a raw declared name.
    pub fn exported_name(&self, raw: &str) -> String {
        let camel = convert(raw, self.normalizer.table(), self.style);
        self.normalizer.normalize(&camel)
    }

    /// Record the exported name as `custom_name` unless an override exists.
    pub fn rewrite_field(&self, field: &mut FieldDescriptor) -> FieldOutcome {
        if field.has_custom_name() {
            debug!(field = %field.name, "custom name present, skipped");
            return FieldOutcome::Skipped;
        }

        let to = self.exported_name(&field.name);
        debug!(field = %field.name, custom_name = %to, "renamed");
        field.custom_name = Some(to.clone());
        FieldOutcome::Renamed {
            from: field.name.clone(),
            to,
        }
    }

    /// Rewrite every message field of every file, nested messages included.
    /// Extensions are never touched.
    pub fn rewrite_set(&self, set: &mut DescriptorSet) -> RewriteReport {
        let mut report = RewriteReport::default();
        for file in &mut set.files {
            self.rewrite_file(file, &mut report);
        }
        report
    }

    fn rewrite_file(&self, file: &mut FileDescriptor, report: &mut RewriteReport) {
        for message in &mut file.messages {
            self.rewrite_message(message, report);
        }
    }

    fn rewrite_message(&self, message: &mut MessageDescriptor, report: &mut RewriteReport) {
        for field in &mut message.fields {
            let outcome = self.rewrite_field(field);
            report.record(&outcome);
        }
        for nested in &mut message.nested {
            self.rewrite_message(nested, report);
        }
    }
}
