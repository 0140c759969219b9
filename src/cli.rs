//! Minimal CLI: astgen <OUT_DIR>
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::codegen::Options;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate the `Expr` and `Stmt` AST enums (expr.rs, stmt.rs) into OUT_DIR
#[derive(Parser, Debug)]
#[command(name = "astgen", version)]
pub struct CommandLineInterface {
    /// output directory; must already exist
    out_dir: PathBuf,

    /// also emit `new_<variant>` constructor functions
    #[arg(long, default_value_t = false)]
    constructors: bool,

    /// more logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> anyhow::Result<Vec<PathBuf>> {
        let opts = Options { constructors: self.constructors };
        generate_all(&self.out_dir, opts)
    }
}

/// Compile every built-in category into `out_dir`, one file each.
///
/// Categories are written in order; a failure stops the run but leaves files
/// already written for earlier categories in place.
pub fn generate_all(out_dir: &Path, opts: Options) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(crate::schemas::CATEGORIES.len());
    for &(name, specs) in crate::schemas::CATEGORIES {
        let _span = tracing::debug_span!("category", name).entered();
        let path = crate::compile::compile(name, specs, out_dir, opts)
            .with_context(|| format!("failed to generate `{name}`"))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_positional_is_required() {
        assert!(CommandLineInterface::try_parse_from(["astgen"]).is_err());
        assert!(CommandLineInterface::try_parse_from(["astgen", "a", "b"]).is_err());
        let cli = CommandLineInterface::try_parse_from(["astgen", "out", "--constructors", "-vv"]).unwrap();
        assert_eq!(cli.out_dir, PathBuf::from("out"));
        assert!(cli.constructors);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn generates_both_units() {
        let dir = tempfile::tempdir().unwrap();
        let written = generate_all(dir.path(), Options::default()).unwrap();
        assert_eq!(written, [dir.path().join("expr.rs"), dir.path().join("stmt.rs")]);

        let stmt = std::fs::read_to_string(dir.path().join("stmt.rs")).unwrap();
        assert!(stmt.starts_with("use super::expr::Expr;\nuse super::token::Token;\n"));
        assert!(stmt.contains("    IfThen(Expr, Box<Stmt>, Option<Box<Stmt>>),\n"));
        assert!(stmt.contains("    Procedure(Token, Vec<(Token, Expr, bool)>, Box<Stmt>),\n"));
    }

    #[test]
    fn io_failure_keeps_error_chain() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_all(&dir.path().join("missing"), Options::default()).unwrap_err();
        assert!(err.to_string().contains("`Expr`"));
        assert!(matches!(err.downcast_ref::<crate::Error>(), Some(crate::Error::Io { .. })));
    }

    #[test]
    fn later_io_failure_keeps_earlier_units() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where stmt.rs should go makes only the second write fail
        std::fs::create_dir(dir.path().join("stmt.rs")).unwrap();

        let err = generate_all(dir.path(), Options::default()).unwrap_err();
        assert!(err.to_string().contains("`Stmt`"), "{err:#}");
        assert!(matches!(err.downcast_ref::<crate::Error>(), Some(crate::Error::Io { .. })));

        let expr = dir.path().join("expr.rs");
        assert!(expr.is_file());
        assert!(std::fs::read_to_string(expr).unwrap().contains("pub enum Expr {"));
    }
}
