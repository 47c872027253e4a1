use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqlrun::parser::GraphQLParser;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

const DEFAULT_GRAPHQL_FILE_EXTS: [&str; 2] = ["graphql", "gql"];

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=DEFAULT_GRAPHQL_FILE_EXTS.map(String::from),
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL request documents or directories \
             containing them which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

/// What a successfully parsed document contains.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct DocumentSummary {
    pub(crate) fragments: usize,
    pub(crate) operations: usize,
}

impl CheckCmd {
    /// Checks every GraphQL file under the working directory using the
    /// default extensions.
    pub(crate) fn for_working_directory() -> Self {
        Self {
            graphql_file_exts: DEFAULT_GRAPHQL_FILE_EXTS.map(String::from).to_vec(),
            file_or_dir_paths: vec![PathBuf::from(".")],
        }
    }

    /// Finds every file at or under the input paths whose extension is one of
    /// `graphql_file_exts`. Returns the files, the number of skipped
    /// filesystem entries, and any errors hit while walking.
    fn collect_file_paths(&self) -> (Vec<PathBuf>, usize, Vec<String>) {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors = vec![];
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let has_graphql_ext = path
                            .extension()
                            .and_then(|ext| ext.to_str())
                            .is_some_and(|ext| graphql_file_exts.contains(ext));
                        if has_graphql_ext {
                            log::trace!("Found GraphQL file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-graphql file: {path:#?}.");
                            num_skipped += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file named explicitly is checked whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped = num_skipped.saturating_sub(1);
            file_paths.push(first_arg_path.clone());
        }

        (file_paths, num_skipped, errors)
    }
}

/// Parses one file. A parse error is rendered with a source snippet, so the
/// error's `{:#}` form is ready to print.
pub(crate) fn check_file(path: &Path) -> anyhow::Result<DocumentSummary> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("error: could not read {path:#?}"))?;
    let document = GraphQLParser::with_file_path(&source, path)
        .parse_executable_document()
        .map_err(|e| anyhow::anyhow!(e.format_detailed(Some(&source))))?;
    Ok(DocumentSummary {
        fragments: document.fragments().count(),
        operations: document.operations().count(),
    })
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let (file_paths, num_skipped, mut errors) = self.collect_file_paths();
        log::debug!("Found {} GraphQL files to be checked.", file_paths.len());

        let mut totals = DocumentSummary::default();
        for path in &file_paths {
            match check_file(path) {
                Ok(summary) => {
                    log::debug!(
                        "{path:#?}: {} operations, {} fragments.",
                        summary.operations,
                        summary.fragments,
                    );
                    totals.operations += summary.operations;
                    totals.fragments += summary.fragments;
                },
                Err(err) => errors.push(format!("{err:#}")),
            }
        }

        if !errors.is_empty() {
            return CommandResult::problems(format_args!(
                "{} Found {} problems in {} files:\n\n{}",
                output_utils::RED_X,
                errors.len(),
                file_paths.len(),
                errors.join("\n"),
            ));
        }

        if cli.quiet {
            return CommandResult::silent_success();
        }
        CommandResult::summary(format_args!(
            concat!(
                "{} All GraphQL documents parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Parsed {} operations.\n",
                "  * Parsed {} fragments.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped,
            totals.operations,
            totals.fragments,
        ))
    }
}
