//! Command-line surface for the spraylist binary.
//!
//! Parsing, option validation, and file handling live here so they can be
//! exercised in tests without spawning a process. The binary only wires these
//! helpers to stdout, stderr, and the exit code.

mod error;

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::{Dir, File};
use clap::Parser;
use tracing::{debug, info, warn};

use crate::atomic_io::write_atomic;
use crate::pipeline::{Generation, PipelineOptions, RankingMode, process};
use crate::settings::SprayListSettings;

pub use error::CliError;

/// Printed on stderr when generation runs without an email domain.
pub const MISSING_DOMAIN_NOTE: &str =
    "Note: --generate was given without a domain; only bare usernames will be produced. \
     Supply one with --domain.";

/// Help footer for the single-dash spellings clap cannot parse.
const LEGACY_SPELLINGS_HELP: &str =
    "The single-dash forms -sds, -sdi, and -de are not accepted; use --sds, --sdi, and --de.";

/// `spraylist` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spraylist",
    about = "Prepare name lists for user spraying: generate usernames and rank them by complexity",
    after_help = LEGACY_SPELLINGS_HELP,
    version
)]
pub struct Cli {
    /// Generate usernames from input names.
    #[arg(short = 'g', long = "generate")]
    generate: bool,
    /// Domain appended to generated usernames (only used with --generate).
    #[arg(short = 'd', long = "domain", value_name = "domain")]
    domain: Option<String>,
    /// Sort by complexity.
    #[arg(short = 's', long = "sort")]
    sort: bool,
    /// Sort by complexity and remove duplicates case sensitively ('This' != 'this').
    #[arg(long = "sort-dup-sen", visible_alias = "sds", alias = "sort_dup_sen")]
    sort_dup_sensitive: bool,
    /// Sort by complexity and remove duplicates case insensitively ('This' == 'this').
    #[arg(long = "sort-dup-ins", visible_alias = "sdi", alias = "sort_dup_ins")]
    sort_dup_insensitive: bool,
    /// Reverse the final order (decreasing complexity when sorting).
    #[arg(long = "decreased", visible_alias = "de")]
    decreased: bool,
    /// Write the result to this file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "path")]
    output: Option<Utf8PathBuf>,
    /// File with the list to process, one entry per line.
    #[arg(value_name = "file")]
    file: Utf8PathBuf,
}

impl Cli {
    /// Returns the input file path.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// Returns the output file path, when one was given.
    #[must_use]
    pub fn output(&self) -> Option<&Utf8Path> {
        self.output.as_deref()
    }

    /// Validates the flags and builds pipeline options.
    ///
    /// The `--domain` flag wins over the configured default domain, and a
    /// blank flag value disables the domain. A domain without `--generate` is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when more than one sort flag is set or
    /// when neither generation nor sorting was requested.
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use spraylist::SprayListSettings;
    /// use spraylist::cli::Cli;
    ///
    /// let cli = Cli::try_parse_from(["spraylist", "-g", "--sds", "names.txt"]).expect("parse");
    /// let settings = SprayListSettings {
    ///     domain: Some("corp.example".to_owned()),
    ///     json_logs: false,
    /// };
    ///
    /// let options = cli.pipeline_options(&settings).expect("valid options");
    /// let domain = options.generation().and_then(|generation| generation.domain());
    ///
    /// assert_eq!(domain, Some("corp.example"));
    /// ```
    pub fn pipeline_options(
        &self,
        settings: &SprayListSettings,
    ) -> Result<PipelineOptions, CliError> {
        let ranking = RankingMode::from_flags(
            self.sort,
            self.sort_dup_sensitive,
            self.sort_dup_insensitive,
        )?;

        let generation = if self.generate {
            let domain = match self.domain.as_deref() {
                Some(flag) => Some(flag.to_owned()),
                None => settings.domain().map(str::to_owned),
            };
            Some(Generation::new(domain))
        } else {
            if let Some(ignored) = self.domain.as_deref() {
                warn!(domain = ignored, "domain ignored without --generate");
            }
            None
        };

        PipelineOptions::new(generation, ranking, self.decreased).map_err(CliError::from)
    }
}

/// Returns the note to show when generation runs without a domain.
#[must_use]
pub fn domain_note(options: &PipelineOptions) -> Option<&'static str> {
    options
        .generation()
        .filter(|generation| generation.domain().is_none())
        .map(|_| MISSING_DOMAIN_NOTE)
}

/// Splits text into lines, stripping only trailing whitespace.
///
/// # Example
///
/// ```
/// use spraylist::cli::parse_lines;
///
/// assert_eq!(parse_lines("Ada Lovelace  \r\n  Grace\n"), ["Ada Lovelace", "  Grace"]);
/// ```
#[must_use]
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}

/// Reads the input file as UTF-8 lines.
///
/// The path is opened with ambient authority, so symlinks resolve wherever
/// they point.
///
/// # Errors
///
/// Returns [`CliError::Input`] when the file is missing, unreadable, or not
/// valid UTF-8.
pub fn read_lines(path: &Utf8Path) -> Result<Vec<String>, CliError> {
    let input_error = |err: io::Error| CliError::Input {
        path: path.to_path_buf(),
        message: err.to_string(),
    };
    let mut file = File::open_ambient(path, ambient_authority()).map_err(input_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(input_error)?;

    let lines = parse_lines(&contents);
    debug!(path = %path, lines = lines.len(), "read input lines");
    Ok(lines)
}

/// Reads the input named on the command line and runs the pipeline.
///
/// # Errors
///
/// Returns [`CliError::Input`] when the input file cannot be read.
pub fn execute(cli: &Cli, options: &PipelineOptions) -> Result<Vec<String>, CliError> {
    let lines = read_lines(cli.file())?;
    let wordlist = process(lines, options);
    info!(
        input = %cli.file(),
        entries = wordlist.len(),
        "wordlist prepared"
    );
    Ok(wordlist)
}

/// Renders one entry per line, each terminated by a newline.
///
/// # Example
///
/// ```
/// use spraylist::cli::render;
///
/// assert_eq!(render(&["jdoe".to_owned(), "john.doe".to_owned()]), "jdoe\njohn.doe\n");
/// assert_eq!(render(&[]), "");
/// ```
#[must_use]
pub fn render(lines: &[String]) -> String {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    let mut rendered = String::with_capacity(capacity);
    for line in lines {
        rendered.push_str(line);
        rendered.push('\n');
    }
    rendered
}

/// Atomically replaces the file at `path` with `contents`.
///
/// # Errors
///
/// Returns [`CliError::Output`] when the parent directory cannot be opened or
/// the file cannot be written.
pub fn write_output(path: &Utf8Path, contents: &str) -> Result<(), CliError> {
    let output_error = |message: String| CliError::Output {
        path: path.to_path_buf(),
        message,
    };
    let (parent, file_name) =
        split_path(path).ok_or_else(|| output_error("output path must be a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| output_error(err.to_string()))?;

    write_atomic(&dir, file_name, path, contents)?;
    debug!(path = %path, bytes = contents.len(), "wrote output file");
    Ok(())
}

fn split_path(path: &Utf8Path) -> Option<(&Utf8Path, &str)> {
    let file_name = path.file_name()?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Some((parent, file_name))
}
