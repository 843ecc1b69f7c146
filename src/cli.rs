use crate::error::Error;
use crate::generator::{DocumentationGenerator, GeneratorConfig};
use crate::report::SkipReason;
use crate::scanner::FileScanner;
use crate::serializer::{serialize_json, serialize_yaml, write_to_file};
use crate::sink::FileSystemSink;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::{Component, Path, PathBuf};

/// Generate API documentation descriptions from the decorators of a source folder
#[derive(Parser, Debug)]
#[command(name = "apidoc-from-decorators")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Folder inside the source root to document (prompted for when omitted)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<String>,

    /// Root directory containing the source folders
    #[arg(long = "src-root", value_name = "DIR", default_value = "src")]
    pub src_root: PathBuf,

    /// Root directory receiving the generated documentation
    #[arg(long = "out-root", value_name = "DIR", default_value = "documentation")]
    pub out_root: PathBuf,

    /// Extension of the generated files
    #[arg(short = 'e', long = "extension", default_value = "ts")]
    pub extension: String,

    /// Order of the entries in the index file
    #[arg(long = "index-order", value_enum, default_value = "prepend")]
    pub index_order: IndexOrder,

    /// Whether empty params/queries lists are written
    #[arg(long = "lists", value_enum, default_value = "omit-empty")]
    pub list_sections: ListSections,

    /// Do not write the index file
    #[arg(long = "no-index")]
    pub no_index: bool,

    /// Write a summary of the run to this file
    #[arg(short = 'r', long = "report", value_name = "FILE")]
    pub report_path: Option<PathBuf>,

    /// Format of the run summary (yaml or json)
    #[arg(long = "report-format", value_enum, default_value = "yaml")]
    pub report_format: ReportFormat,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Order in which entries appear in the index file
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum IndexOrder {
    /// Each entry goes before the ones processed earlier
    Prepend,
    /// Entries follow processing order
    Insertion,
}

/// Handling of `params` and `queries` lists with nothing in them
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ListSections {
    /// Leave empty lists out of the entry
    OmitEmpty,
    /// Always write both lists
    #[value(name = "always")]
    AlwaysEmit,
}

/// Run summary format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if args.extension.trim_start_matches('.').is_empty() {
        anyhow::bail!("Extension must not be empty");
    }

    info!("Source root: {}", args.src_root.display());
    info!("Output root: {}", args.out_root.display());
    info!("Index order: {:?}", args.index_order);
    if let Some(ref report) = args.report_path {
        info!("Report file: {} ({:?})", report.display(), args.report_format);
    }

    Ok(args)
}

/// Asks for the folder name on the terminal.
fn prompt_directory_name() -> std::result::Result<String, Error> {
    use dialoguer::Input;

    let input: String = Input::new()
        .with_prompt("Enter folder name in src directory")
        .interact_text()?;
    Ok(input)
}

/// Checks that `name` is a single, plain path component.
pub fn validate_directory_name(name: &str) -> std::result::Result<String, Error> {
    let name = name.trim();
    let mut components = Path::new(name).components();

    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(name.to_string()),
        _ => Err(Error::InvalidDirectoryName(name.to_string())),
    }
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    let directory_name = match args.directory {
        Some(ref name) => validate_directory_name(name)?,
        None => validate_directory_name(&prompt_directory_name()?)?,
    };

    let directory_path = args.src_root.join(&directory_name);
    info!("Scanning {}...", directory_path.display());

    let scan_result = FileScanner::new(directory_path).scan()?;
    info!("Found {} files", scan_result.files.len());

    let generator = DocumentationGenerator::new(GeneratorConfig {
        extension: args.extension.trim_start_matches('.').to_string(),
        list_sections: args.list_sections,
        index_order: args.index_order,
        write_index: !args.no_index,
    });

    let mut sink = FileSystemSink::new(args.out_root.clone());
    let mut report = generator.generate(&directory_name, &scan_result.files, &mut sink)?;

    for file_name in &scan_result.unreadable {
        report.skip(file_name.as_str(), SkipReason::Unreadable);
    }

    if let Some(ref report_path) = args.report_path {
        let content = match args.report_format {
            ReportFormat::Yaml => serialize_yaml(&report)?,
            ReportFormat::Json => serialize_json(&report)?,
        };
        write_to_file(&content, report_path)?;
        info!("Wrote run report to {}", report_path.display());
    }

    info!("Generation complete!");
    info!("Summary:");
    info!("  - Files scanned: {}", scan_result.files.len() + scan_result.unreadable.len());
    info!("  - Entries generated: {}", report.generated.len());
    info!("  - Files skipped: {}", report.skipped.len());
    info!("  - Output: {}", sink.root().join(&directory_name).display());

    Ok(())
}
