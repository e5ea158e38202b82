//! Maps configuration entries to template source and output paths.

use log::debug;
use std::path::{Component, Path, PathBuf};

/// Source and target locations for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Template file read for this entry
    pub source: PathBuf,
    /// Output file written for this entry
    pub target: PathBuf,
}

/// Removes one trailing occurrence of `suffix` from a template file name.
///
/// Names that do not end with the suffix are returned unchanged.
pub fn strip_template_suffix<'a>(template_name: &'a str, suffix: &str) -> &'a str {
    match template_name.strip_suffix(suffix) {
        Some(stripped) if !suffix.is_empty() => stripped,
        _ => {
            debug!("Template '{}' has no '{}' suffix, keeping its name", template_name, suffix);
            template_name
        }
    }
}

/// Joins `relative` beneath `base`.
///
/// Root, prefix and `..` components of `relative` are dropped, so the result
/// never escapes `base`. Empty segments add nothing.
pub fn join_relative<P: AsRef<Path>>(base: &Path, relative: P) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in relative.as_ref().components() {
        match component {
            Component::Prefix(_)
            | Component::RootDir
            | Component::CurDir
            | Component::ParentDir => {}
            other => joined.push(other),
        }
    }
    joined
}

/// Output directory for every entry of `project`.
pub fn project_output_dir(output_root: &Path, project: &str) -> PathBuf {
    join_relative(output_root, project)
}

/// Computes where an entry's template lives and where its output goes.
///
/// * source: `template_root/dir/template`
/// * target: `output_root/project/dir/template` with `suffix` stripped
pub fn resolve(
    template_root: &Path,
    output_root: &Path,
    project: &str,
    dir: &str,
    template: &str,
    suffix: &str,
) -> ResolvedPaths {
    let source = join_relative(&join_relative(template_root, dir), template);
    let target_dir = join_relative(&project_output_dir(output_root, project), dir);
    let target = join_relative(&target_dir, strip_template_suffix(template, suffix));

    ResolvedPaths { source, target }
}
