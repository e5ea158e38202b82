//! Drives a substitution run.
//! Every entry goes through resolve, read, render and write in turn; the first
//! failure stops the run and files already written are left in place.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{Config, Entry},
    error::{Error, Result},
    paths::{project_output_dir, resolve},
    renderer::TemplateRenderer,
    writer::write_output,
};

/// Result of processing a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Template the output was rendered from
    pub source: PathBuf,
    /// File that was written
    pub target: PathBuf,
}

/// Renders configured entries from a template tree into an output tree.
pub struct Processor<'a> {
    /// Engine applying substitutions to template content
    renderer: &'a dyn TemplateRenderer,
    /// Root directory holding the templates
    template_root: &'a Path,
    /// Root directory receiving one subdirectory per project
    output_root: &'a Path,
    /// Suffix stripped from template names
    suffix: &'a str,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        suffix: &'a str,
    ) -> Self {
        Self { renderer, template_root, output_root, suffix }
    }

    /// Processes one entry of `project`.
    ///
    /// # Errors
    /// * `Error::TemplateReadError` if the template cannot be read
    /// * `Error::DirectoryCreateError` / `Error::OutputWriteError` from writing
    pub fn process_entry(&self, project: &str, entry: &Entry) -> Result<ProcessResult> {
        let paths = resolve(
            self.template_root,
            self.output_root,
            project,
            &entry.dir,
            &entry.template,
            self.suffix,
        );
        debug!("Processing template: {}", paths.source.display());

        let content = fs::read(&paths.source).map_err(|source| Error::TemplateReadError {
            path: paths.source.clone(),
            source,
        })?;
        let rendered = self.renderer.render(&content, &entry.substitution);
        write_output(&paths.target, &rendered)?;

        debug!("Rendered '{}' into '{}'", paths.source.display(), paths.target.display());
        Ok(ProcessResult { source: paths.source, target: paths.target })
    }

    /// Processes every project in declaration order, and every entry of a
    /// project in declared order.
    ///
    /// Announces each project's output directory on stdout.
    ///
    /// # Returns
    /// * `Result<Vec<ProcessResult>>` - Every file written, in processing order
    pub fn process(&self, config: &Config) -> Result<Vec<ProcessResult>> {
        let mut results = Vec::with_capacity(config.entry_count());

        for (project, entries) in &config.projects {
            println!("outputdir: {}", project_output_dir(self.output_root, project).display());

            for entry in entries {
                results.push(self.process_entry(project, entry)?);
            }
        }

        Ok(results)
    }
}
