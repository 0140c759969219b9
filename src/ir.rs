// Strongly-typed IR for codegen. No raw spec strings past this point,
// except the verbatim field text we re-emit unchanged.

use std::fmt;

/// Structured form of one field descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Name(String),                                  // `Token`, `Expr`, `bool`
    Generic { head: String, args: Vec<Ty> },       // `Vec<Expr>`, `Box<Stmt>`
    Tuple(Vec<Ty>),                                // `(Token, Expr, bool)`
    Optional(Box<Ty>),                             // `Option<...>`
}

/// One field of a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub text: String,    // trimmed source text, re-emitted byte-for-byte
    pub ty: Ty,
    pub boxed: bool,     // set by `lower::break_recursion`
}

/// One named variant of a category (`Binary | Expr, Token, Expr`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub fields: Vec<Field>, // never empty
}

/// An AST node family: one `pub enum` per category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub variants: Vec<Variant>, // input order == declaration order
}

impl Ty {
    /// True when this descriptor is exactly the bare name `name`.
    pub fn is_name(&self, name: &str) -> bool {
        matches!(self, Ty::Name(n) if n == name)
    }

    /// True when `name` occurs anywhere in the descriptor, at any depth.
    pub fn mentions(&self, name: &str) -> bool {
        match self {
            Ty::Name(n) => n == name,
            Ty::Generic { head, args } => head == name || args.iter().any(|a| a.mentions(name)),
            Ty::Tuple(elems) => elems.iter().any(|e| e.mentions(name)),
            Ty::Optional(inner) => inner.mentions(name),
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list(f: &mut fmt::Formatter<'_>, xs: &[Ty]) -> fmt::Result {
            for (i, x) in xs.iter().enumerate() {
                if i > 0 { f.write_str(", ")?; }
                write!(f, "{x}")?;
            }
            Ok(())
        }
        match self {
            Ty::Name(n) => f.write_str(n),
            Ty::Generic { head, args } => {
                write!(f, "{head}<")?;
                list(f, args)?;
                f.write_str(">")
            }
            Ty::Tuple(elems) => {
                f.write_str("(")?;
                list(f, elems)?;
                f.write_str(")")
            }
            Ty::Optional(inner) => write!(f, "Option<{inner}>"),
        }
    }
}

impl Field {
    /// The field as it appears inside the enum variant.
    pub fn emitted(&self) -> String {
        if self.boxed {
            format!("Box<{}>", self.text)
        } else {
            self.text.clone()
        }
    }
}

impl Variant {
    pub fn arity(&self) -> usize { self.fields.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Ty { Ty::Name(s.to_string()) }

    #[test]
    fn mentions_sees_through_every_wrapper() {
        let ty = Ty::Optional(Box::new(Ty::Tuple(vec![
            Ty::Generic { head: "Box".into(), args: vec![name("Expr")] },
            name("Token"),
        ])));
        assert!(ty.mentions("Expr"));
        assert!(!ty.mentions("Stmt"));
        assert!(!ty.is_name("Expr"));
    }

    #[test]
    fn display_is_canonical() {
        let ty = Ty::Generic {
            head: "Vec".into(),
            args: vec![Ty::Tuple(vec![name("Token"), name("Expr"), name("bool")])],
        };
        assert_eq!(ty.to_string(), "Vec<(Token, Expr, bool)>");
        assert_eq!(Ty::Optional(Box::new(name("Expr"))).to_string(), "Option<Expr>");
    }

    #[test]
    fn boxed_field_wraps_once() {
        let f = Field { text: "Expr".into(), ty: name("Expr"), boxed: true };
        assert_eq!(f.emitted(), "Box<Expr>");
        let ty = Ty::Generic { head: "Vec".into(), args: vec![name("Expr")] };
        let f = Field { text: "Vec<Expr>".into(), ty, boxed: false };
        assert_eq!(f.emitted(), "Vec<Expr>");
    }
}
