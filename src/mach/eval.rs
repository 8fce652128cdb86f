use super::Var;
use crate::lang::ast::*;
use crate::lang::Error;

/// Evaluates expressions against variable memory.
///
/// Array reads that fail are reported to `diagnostics` and read as zero.
pub struct Eval<'a> {
    var: &'a Var,
    diagnostics: &'a mut Vec<Error>,
}

impl<'a> Eval<'a> {
    pub fn new(var: &'a Var, diagnostics: &'a mut Vec<Error>) -> Eval<'a> {
        Eval { var, diagnostics }
    }

    pub fn expression(&mut self, expr: &Expression) -> f64 {
        match expr {
            Expression::Number(_, n) => *n,
            Expression::Var(_, ident) => self.var.fetch(ident.slot()),
            Expression::Index(col, ident, index) => {
                let index = self.expression(index);
                match self.var.fetch_array(ident.letter(), index) {
                    Ok(value) => value,
                    Err(error) => {
                        tracing::debug!(%error, "array read");
                        self.diagnostics.push(error.in_column(col));
                        0.0
                    }
                }
            }
            Expression::Negation(_, expr) => -self.expression(expr),
            Expression::Multiply(_, lhs, rhs) => self.expression(lhs) * self.expression(rhs),
            Expression::Divide(_, lhs, rhs) => {
                let dividend = self.expression(lhs);
                let divisor = self.expression(rhs);
                if divisor == 0.0 {
                    dividend
                } else {
                    dividend / divisor
                }
            }
            Expression::Add(_, lhs, rhs) => self.expression(lhs) + self.expression(rhs),
            Expression::Subtract(_, lhs, rhs) => self.expression(lhs) - self.expression(rhs),
        }
    }

    pub fn condition(&mut self, cond: &Condition) -> bool {
        match cond {
            Condition::Truth(expr) => self.expression(expr) != 0.0,
            Condition::Compare(_, relation, lhs, rhs) => {
                let lhs = self.expression(lhs);
                let rhs = self.expression(rhs);
                match relation {
                    Relation::Equal => lhs == rhs,
                    Relation::NotEqual => lhs != rhs,
                    Relation::Less => lhs < rhs,
                    Relation::LessEqual => lhs <= rhs,
                    Relation::Greater => lhs > rhs,
                    Relation::GreaterEqual => lhs >= rhs,
                }
            }
        }
    }
}
