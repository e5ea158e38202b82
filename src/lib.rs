//! substitute fills `{{ key }}` placeholders in template files.
//! A YAML substitution file lists, per project, which templates to render and
//! the values to insert; results land in an output tree mirroring the templates.

/// Command-line interface module
pub mod cli;

/// Substitution file loading and decoding
pub mod config;

pub mod constants;

/// Error types and handling
pub mod error;

pub mod logger;

/// Template source and output path resolution
pub mod paths;

/// Run orchestration over all projects and entries
pub mod processor;

/// Placeholder substitution engine
pub mod renderer;

/// Output file materialization
pub mod writer;
