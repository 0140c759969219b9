//! Node shapes for the pseudocode front end.
//!
//! `"<Variant> | <Field>, <Field>, ..."`. A field spelled exactly as the
//! category name is boxed on emission; anything else is copied as written.

pub const EXPR: &[&str] = &[
    "Unary | Token, Expr",
    "Binary | Expr, Token, Expr",
    "Grouping | Expr",
    "IdentExpr | Token",
    "FnCall | Token, Vec<Expr>",
    "ArrIdx | Token, Expr, Option<Box<Expr>>",
    "ArrType | (Box<Expr>, Box<Expr>), Option<(Box<Expr>, Box<Expr>)>, Expr",
    "Literal | Literal",
];

pub const STMT: &[&str] = &[
    "Block | Vec<Stmt>",
    "ExprStmt | Expr",
    "Declare | Token, Expr",
    "Constant | Token, Expr",
    "Assign | Expr, Expr",
    "ProcCall | Token, Vec<Expr>",
    "Input | Expr",
    "Output | Vec<Expr>",
    "Ret | Expr",
    "Procedure | Token, Vec<(Token, Expr, bool)>, Stmt",
    "Function | Token, Vec<(Token, Expr, bool)>, Expr, Stmt",
    "ForTo | Token, Expr, Expr, Option<Expr>, Stmt",
    "IfThen | Expr, Stmt, Option<Box<Stmt>>",
    "Case | Expr, Vec<(Expr, Stmt)>, Option<Box<Stmt>>",
    "Repeat | Expr, Stmt",
    "WhileDo | Expr, Stmt",
];

/// Every category this tool generates, in generation order.
pub const CATEGORIES: &[(&str, &[&str])] = &[("Expr", EXPR), ("Stmt", STMT)];
