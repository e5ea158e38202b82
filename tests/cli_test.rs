use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use substitute::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("substitute")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-t", "./from", "-o", "./to", "-s", "substitution.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template_dir, PathBuf::from("./from"));
    assert_eq!(parsed.output_dir, PathBuf::from("./to"));
    assert_eq!(parsed.substitution_file, PathBuf::from("substitution.yaml"));
    assert_eq!(parsed.suffix, ".tmpl");
    assert!(!parsed.verbose);
}

#[test]
fn test_long_flags() {
    let args = make_args(&[
        "--template-dir",
        "./from",
        "--output-dir",
        "./to",
        "--substitution-file",
        "values.yml",
        "--suffix",
        ".tpl",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.substitution_file, PathBuf::from("values.yml"));
    assert_eq!(parsed.suffix, ".tpl");
    assert!(parsed.verbose);
}

#[test]
fn test_missing_args() {
    let args = make_args(&["-t", "./from", "-o", "./to"]);
    let err = Args::try_parse_from(args).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_positional_args_rejected() {
    let args = make_args(&["-t", "./from", "-o", "./to", "-s", "s.yaml", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
