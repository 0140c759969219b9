//! Rust source emission for a lowered `ir::Category`.
use crate::ir::{Category, Variant};

/// `use` lines a category needs, keyed only by the category name.
pub fn header_for(category: &str) -> &'static [&'static str] {
    match category {
        "Stmt" => &["use super::expr::Expr;", "use super::token::Token;"],
        "Expr" => &["use super::token::{Token, Literal};"],
        _ => &[],
    }
}

/// `new_<lowercased variant>`; distinct variants can share one.
pub fn constructor_name(variant: &str) -> String {
    format!("new_{}", variant.to_lowercase())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// also emit `impl <Category> { pub fn new_<variant>(..) }`
    pub constructors: bool,
}

#[derive(Debug)]
pub struct Codegen {
    out: String,
    opts: Options,
}

impl Codegen {
    pub fn with_options(opts: Options) -> Self {
        Self { out: String::new(), opts }
    }

    /// Emit the whole unit for one category. Fields must already be lowered.
    pub fn emit(&mut self, category: &Category) {
        for line in header_for(&category.name) {
            self.line(line);
        }
        self.line("use std::fmt::Debug;");
        self.line("");
        self.line("#[derive(Clone, Debug)]");
        self.line(&format!("pub enum {} {{", category.name));
        for variant in &category.variants {
            self.variant(variant);
        }
        self.line("}");

        if self.opts.constructors {
            self.line("");
            self.constructors(category);
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, s: &str) {
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn variant(&mut self, v: &Variant) {
        let fields = v.fields.iter().map(|f| f.emitted()).collect::<Vec<_>>();
        self.line(&format!("    {}({}),", v.name, fields.join(", ")));
    }

    // Parameters take the unboxed type; boxing happens in the body.
    fn constructors(&mut self, category: &Category) {
        self.line(&format!("impl {} {{", category.name));
        for v in &category.variants {
            let params = v.fields.iter().enumerate()
                .map(|(i, f)| format!("_{i}: {}", f.text))
                .collect::<Vec<_>>();
            let args = v.fields.iter().enumerate()
                .map(|(i, f)| if f.boxed { format!("Box::new(_{i})") } else { format!("_{i}") })
                .collect::<Vec<_>>();
            self.line(&format!(
                "    pub fn {}({}) -> {} {{",
                constructor_name(&v.name),
                params.join(", "),
                category.name,
            ));
            self.line(&format!("        {}::{}({})", category.name, v.name, args.join(", ")));
            self.line("    }");
        }
        self.line("}");
    }
}
