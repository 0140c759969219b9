use crate::ir::{Category, Field, Variant};

/// Recursion-breaking rewrite.
///
/// A field whose whole descriptor is the category's own name would make the
/// enum infinitely sized, so it gets an owned indirection (`Box<_>`). Only
/// that exact shape is rewritten: `Vec<Expr>`, `Option<Expr>`,
/// `(Expr, Expr)` and friends are left as written.
pub fn break_recursion(category: &str, field: &mut Field) {
    field.boxed = field.ty.is_name(category);
    if !field.boxed && field.ty.mentions(category) {
        // nested self-reference; emitted as written
        tracing::debug!(category, field = %field.ty, "nested self-reference left unboxed");
    }
}

pub fn lower_variant(category: &str, variant: &mut Variant) {
    for field in &mut variant.fields {
        break_recursion(category, field);
    }
}

pub fn lower_category(category: &mut Category) {
    let Category { name, variants } = category;
    for variant in variants.iter_mut() {
        lower_variant(name, variant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_variant;

    fn lowered(category: &str, spec: &str) -> Vec<String> {
        let mut v = parse_variant(spec).unwrap();
        lower_variant(category, &mut v);
        v.fields.iter().map(Field::emitted).collect()
    }

    #[test]
    fn bare_self_reference_is_boxed() {
        assert_eq!(lowered("Expr", "Grouping | Expr"), ["Box<Expr>"]);
        assert_eq!(lowered("Expr", "Binary | Expr, Token, Expr"), ["Box<Expr>", "Token", "Box<Expr>"]);
    }

    #[test]
    fn other_names_are_untouched() {
        assert_eq!(lowered("Expr", "Literal | Literal"), ["Literal"]);
        // `Expr` inside a statement is a different category
        assert_eq!(lowered("Stmt", "ExprStmt | Expr"), ["Expr"]);
    }

    #[test]
    fn compound_descriptors_are_untouched() {
        assert_eq!(lowered("Expr", "FnCall | Token, Vec<Expr>"), ["Token", "Vec<Expr>"]);
        assert_eq!(
            lowered("Stmt", "ForTo | Token, Expr, Expr, Option<Expr>, Stmt"),
            ["Token", "Expr", "Expr", "Option<Expr>", "Box<Stmt>"]
        );
        assert_eq!(
            lowered("Expr", "ArrType | (Box<Expr>, Box<Expr>), Option<(Box<Expr>, Box<Expr>)>, Expr"),
            ["(Box<Expr>, Box<Expr>)", "Option<(Box<Expr>, Box<Expr>)>", "Box<Expr>"]
        );
    }

    #[test]
    fn lowering_is_idempotent() {
        let mut v = parse_variant("Unary | Token, Expr").unwrap();
        lower_variant("Expr", &mut v);
        lower_variant("Expr", &mut v);
        assert_eq!(v.fields[1].emitted(), "Box<Expr>");
    }
}
