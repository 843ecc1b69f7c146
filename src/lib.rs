//! API documentation generator driven by decorator annotations.
//!
//! This library scans controller source files for decorator-style
//! annotations and turns them into declarative documentation objects. It
//! works on plain text with regular expressions; the sources are never
//! parsed into a syntax tree.
//!
//! # Recognized annotations
//!
//! - `@Api<Kind>Response({ ... })` becomes a `<kind>` field holding the body
//! - `@ApiParam({ ... })` is collected into a `params` list
//! - `@ApiQuery({ ... })` is collected into a `queries` list
//! - `@ApiCookieAuth()` sets `isAuth: true`
//!
//! # Architecture
//!
//! 1. [`scanner`] - Lists and reads the files of one directory
//! 2. [`annotation`] - Finds annotation occurrences in file text
//! 3. [`extractor`] - Pulls names and bodies out of each occurrence
//! 4. [`entry`] - Builds and renders one documentation entry per file
//! 5. [`index`] - Aggregates every entry into the directory index
//! 6. [`generator`] - Drives the per-file pipeline into an output [`sink`]
//! 7. [`report`] / [`serializer`] - Summarize a run as YAML or JSON
//!
//! # Example Usage
//!
//! ```no_run
//! use apidoc_from_decorators::{
//!     generator::{DocumentationGenerator, GeneratorConfig},
//!     scanner::FileScanner,
//!     sink::FileSystemSink,
//! };
//! use std::path::PathBuf;
//!
//! let scan_result = FileScanner::new(PathBuf::from("./src/users")).scan().unwrap();
//!
//! let generator = DocumentationGenerator::new(GeneratorConfig::default());
//! let mut sink = FileSystemSink::new(PathBuf::from("./documentation"));
//! let report = generator.generate("users", &scan_result.files, &mut sink).unwrap();
//!
//! println!("Generated {} entries", report.generated.len());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod scanner;
pub mod annotation;
pub mod extractor;
pub mod entry;
pub mod index;
pub mod generator;
pub mod sink;
pub mod report;
pub mod serializer;
pub mod error;
