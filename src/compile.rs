//! The schema compiler: spec strings → lowered IR → `<out_dir>/<category>.rs`.
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::codegen::{constructor_name, Codegen, Options};
use crate::error::{Error, Result, SchemaReason};
use crate::ir::Category;
use crate::lower::lower_category;
use crate::parse::{is_ident, parse_variant};

/// Parse every spec of a category up front. Nothing is written on failure.
pub fn build_category(name: &str, specs: &[&str]) -> Result<Category> {
    let schema_err = |spec: &str, reason| Error::Schema {
        category: name.to_string(),
        spec: spec.to_string(),
        reason,
    };
    if !is_ident(name) {
        return Err(schema_err(name, SchemaReason::InvalidIdent(name.to_string())));
    }

    // variant name -> position of its first definition
    let mut seen = IndexMap::<String, usize>::with_capacity(specs.len());
    let mut variants = Vec::with_capacity(specs.len());
    for (i, &spec) in specs.iter().enumerate() {
        let variant = parse_variant(spec).map_err(|reason| schema_err(spec, reason))?;
        if let Some(&first) = seen.get(&variant.name) {
            return Err(schema_err(spec, SchemaReason::DuplicateVariant { name: variant.name, first }));
        }
        seen.insert(variant.name.clone(), i);
        tracing::trace!(category = name, variant = %variant.name, arity = variant.arity(), "parsed");
        variants.push(variant);
    }

    let mut category = Category { name: name.to_string(), variants };
    lower_category(&mut category);
    Ok(category)
}

/// Reject variants whose `new_*` constructors would collide (`Foo` vs `FOO`).
pub fn check_constructors(category: &Category, specs: &[&str]) -> Result<()> {
    let mut seen = IndexMap::<String, usize>::with_capacity(category.variants.len());
    for (i, variant) in category.variants.iter().enumerate() {
        let ctor = constructor_name(&variant.name);
        if let Some(&first) = seen.get(&ctor) {
            return Err(Error::Schema {
                category: category.name.clone(),
                spec: specs[i].to_string(),
                reason: SchemaReason::ConstructorClash { name: ctor, first },
            });
        }
        seen.insert(ctor, i);
    }
    Ok(())
}

/// Render a category's unit without touching the filesystem.
pub fn render(name: &str, specs: &[&str], opts: Options) -> Result<String> {
    let category = build_category(name, specs)?;
    if opts.constructors {
        check_constructors(&category, specs)?;
    }
    let mut cg = Codegen::with_options(opts);
    cg.emit(&category);
    Ok(cg.into_string())
}

/// `<out_dir>/<lowercased category>.rs`
pub fn output_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(format!("{}.rs", name.to_lowercase()))
}

/// Compile one category and write its unit, overwriting any previous file.
/// Returns the path written.
pub fn compile(name: &str, specs: &[&str], out_dir: &Path, opts: Options) -> Result<PathBuf> {
    let src = render(name, specs, opts)?;
    let path = output_path(out_dir, name);
    std::fs::write(&path, &src).map_err(|source| Error::Io { path: path.clone(), source })?;
    tracing::info!(category = name, variants = specs.len(), path = %path.display(), "wrote");
    Ok(path)
}
