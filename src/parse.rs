//! Spec-string parsing: `"<Variant> | <Field>, <Field>, ..."` → `ir::Variant`.
//!
//! Field lists are split on top-level commas only, so a descriptor such as
//! `(Box<Expr>, Box<Expr>)` or `Vec<(Token, Expr, bool)>` stays one field.
//! Each piece is then parsed into `ir::Ty` with a tiny recursive-descent
//! grammar:
//!
//! ```text
//! ty    := tuple | path ( '<' list '>' )?
//! tuple := '(' list? ')'
//! list  := ty ( ',' ty )*
//! ```
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SchemaReason;
use crate::ir::{Field, Ty, Variant};

static IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

pub fn is_ident(s: &str) -> bool {
    IDENT.is_match(s)
}

/// Parse one spec string. Fields come back un-rewritten (`boxed == false`).
pub fn parse_variant(spec: &str) -> Result<Variant, SchemaReason> {
    let (name, field_list) = spec.split_once('|').ok_or(SchemaReason::MissingSeparator)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(SchemaReason::EmptyName);
    }
    if !is_ident(name) {
        return Err(SchemaReason::InvalidIdent(name.to_string()));
    }

    let field_list = field_list.trim();
    if field_list.is_empty() {
        return Err(SchemaReason::NoFields);
    }

    let pieces = split_top_level(field_list).map_err(|detail| SchemaReason::BadDescriptor {
        text: field_list.to_string(),
        detail,
    })?;

    let mut fields = Vec::with_capacity(pieces.len());
    for (i, piece) in pieces.into_iter().enumerate() {
        let text = piece.trim();
        if text.is_empty() {
            return Err(SchemaReason::EmptyField(i));
        }
        let ty = parse_ty(text).map_err(|detail| SchemaReason::BadDescriptor {
            text: text.to_string(),
            detail,
        })?;
        fields.push(Field { text: text.to_string(), ty, boxed: false });
    }

    Ok(Variant { name: name.to_string(), fields })
}

/// Split on commas at bracket depth zero. Pieces are not trimmed.
pub fn split_top_level(s: &str) -> Result<Vec<&str>, String> {
    let mut out = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(format!("unexpected `{c}` at byte {i}"));
                }
            }
            ',' if depth == 0 => {
                out.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced brackets".to_string());
    }
    out.push(&s[start..]);
    Ok(out)
}

/// Parse a single descriptor; the whole input must be consumed.
pub fn parse_ty(text: &str) -> Result<Ty, String> {
    let mut p = TyParser { src: text, pos: 0 };
    let ty = p.ty()?;
    p.skip_ws();
    if p.pos != p.src.len() {
        return Err(format!("trailing input `{}`", &p.src[p.pos..]));
    }
    Ok(ty)
}

struct TyParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> TyParser<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() { break }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, want: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, want: char) -> Result<(), String> {
        if self.eat(want) {
            Ok(())
        } else {
            match self.peek() {
                Some(c) => Err(format!("expected `{want}`, found `{c}`")),
                None => Err(format!("expected `{want}`, found end of input")),
            }
        }
    }

    fn ty(&mut self) -> Result<Ty, String> {
        self.skip_ws();
        if self.eat('(') {
            if self.eat(')') {
                return Ok(Ty::Tuple(Vec::new()));
            }
            let elems = self.list()?;
            self.expect(')')?;
            return Ok(Ty::Tuple(elems));
        }

        let head = self.path()?;
        if !self.eat('<') {
            return Ok(Ty::Name(head));
        }
        let mut args = self.list()?;
        self.expect('>')?;

        if head == "Option" {
            if args.len() != 1 {
                return Err(format!("`Option` takes one argument, found {}", args.len()));
            }
            return Ok(Ty::Optional(Box::new(args.remove(0))));
        }
        Ok(Ty::Generic { head, args })
    }

    fn list(&mut self) -> Result<Vec<Ty>, String> {
        let mut xs = vec![self.ty()?];
        while self.eat(',') {
            xs.push(self.ty()?);
        }
        Ok(xs)
    }

    /// `Token`, `std::rc::Rc`, `bool`, ...
    fn path(&mut self) -> Result<String, String> {
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == ':' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let seg = &self.src[start..self.pos];
        if seg.is_empty() {
            return match self.peek() {
                Some(c) => Err(format!("expected a type name, found `{c}`")),
                None => Err("expected a type name, found end of input".to_string()),
            };
        }
        if seg.split("::").any(|part| !is_ident(part)) {
            return Err(format!("`{seg}` is not a type path"));
        }
        Ok(seg.to_string())
    }
}
