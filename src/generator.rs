//! Generation of documentation files for one directory.
//!
//! Files are processed one after another: scan for annotations, skip the
//! file if nothing matched, build and write its entry, and remember it for
//! the index. The index is written once every file has been handled.

use crate::annotation::scan_annotations;
use crate::cli::{IndexOrder, ListSections};
use crate::entry::DocumentationEntry;
use crate::index::{IndexAggregator, IndexEntry};
use crate::report::{GeneratedFile, RunReport, SkipReason};
use crate::scanner::SourceFile;
use crate::sink::OutputSink;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::Path;

/// Base name of the aggregated index file.
pub const INDEX_FILE_STEM: &str = "index";

/// Settings controlling the shape of the generated files.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Extension of generated files, without the leading dot
    pub extension: String,
    /// Whether empty `params`/`queries` lists are written
    pub list_sections: ListSections,
    /// Order of entries in the index
    pub index_order: IndexOrder,
    /// Whether the index file is written at all
    pub write_index: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extension: "ts".to_string(),
            list_sections: ListSections::OmitEmpty,
            index_order: IndexOrder::Prepend,
            write_index: true,
        }
    }
}

pub struct DocumentationGenerator {
    config: GeneratorConfig,
}

impl DocumentationGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates one documentation file per annotated source file plus the
    /// index, writing them to `sink` under `directory_name/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to persist a file.
    pub fn generate(
        &self,
        directory_name: &str,
        files: &[SourceFile],
        sink: &mut dyn OutputSink,
    ) -> Result<RunReport> {
        let mut report = RunReport::new(directory_name);
        let mut index = IndexAggregator::new(self.config.index_order);

        for file in files {
            let scanned = scan_annotations(&file.content);
            if scanned.is_empty() {
                info!("No decorators found in {}.", file.file_name);
                report.skip(file.file_name.as_str(), SkipReason::NoAnnotations);
                continue;
            }

            if self.config.write_index && file.base_name == INDEX_FILE_STEM {
                warn!(
                    "Skipping {}: its documentation would be overwritten by the index",
                    file.file_name
                );
                report.skip(file.file_name.as_str(), SkipReason::IndexNameCollision);
                continue;
            }

            debug!(
                "{}: {} response, {} param, {} query decorators, auth: {}",
                file.file_name,
                scanned.responses.len(),
                scanned.params.len(),
                scanned.queries.len(),
                scanned.cookie_auth
            );

            let entry = DocumentationEntry::build(directory_name, &file.base_name, &scanned);
            let output = self.output_path(directory_name, &file.base_name);
            sink.write(Path::new(&output), &entry.render(self.config.list_sections))
                .with_context(|| format!("Failed to write documentation for {}", file.file_name))?;

            let index_entry = IndexEntry::new(&file.base_name, &entry.constant_name);
            report.generated.push(GeneratedFile {
                source: file.file_name.clone(),
                output,
                constant_name: entry.constant_name.clone(),
                key: index_entry.key.clone(),
                responses: entry.responses.iter().map(|r| r.field_name()).collect(),
                params: entry.params.len(),
                queries: entry.queries.len(),
                auth: entry.is_auth,
            });
            index.push(index_entry);
        }

        if !self.config.write_index {
            debug!("Index generation disabled");
        } else if index.is_empty() {
            warn!("No documentation generated for {}, skipping index", directory_name);
        } else {
            let output = self.output_path(directory_name, INDEX_FILE_STEM);
            sink.write(Path::new(&output), &index.render(directory_name))
                .context("Failed to write documentation index")?;
            info!("Wrote index with {} entries", index.len());
            report.index = Some(output);
        }

        Ok(report)
    }

    /// Output paths always use `/` so reports read the same on every platform.
    fn output_path(&self, directory_name: &str, stem: &str) -> String {
        format!("{}/{}.{}", directory_name, stem, self.config.extension)
    }
}
