use super::{Column, Ident, LineNumber};
use std::sync::Arc;

/// One parsed program line. Every statement keeps the column of
/// its keyword so runtime errors can point at it.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Dim(Column, Vec<Dimension>),
    End(Column),
    For(Column, Ident, Expression, Expression, Option<Expression>),
    Goto(Column, LineNumber),
    /// `None` when `THEN` is missing; such an `IF` only evaluates its condition.
    If(Column, Condition, Option<LineNumber>),
    Let(Column, Variable, Expression),
    Next(Column, Option<Ident>),
    Print(Column, Printable),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Dimension {
    pub col: Column,
    pub ident: Ident,
    pub bound: Expression,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Printable {
    Text(Column, Arc<str>),
    Value(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Variable {
    Unary(Column, Ident),
    Array(Column, Ident, Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Number(Column, f64),
    Var(Column, Ident),
    Index(Column, Ident, Box<Expression>),
    Negation(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Relation {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Condition {
    Compare(Column, Relation, Expression, Expression),
    /// A bare expression is true when it is not zero.
    Truth(Expression),
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            Dim(col, ..)
            | End(col)
            | For(col, ..)
            | Goto(col, ..)
            | If(col, ..)
            | Let(col, ..)
            | Next(col, ..)
            | Print(col, ..) => col.clone(),
        }
    }
}
