//! Arithmetic operators shared by the calculator lessons

use std::fmt;
use thiserror::Error;

/// One of the four arithmetic operators a calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Parse an operator from its symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator with plain floating point semantics
    ///
    /// Division by zero is not checked and yields an infinity or NaN.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Why an accumulator update was refused
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    #[error("unknown operator '{0}'.")]
    UnknownOperator(char),
}

/// Running value updated one operator/operand pair at a time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    value: f64,
}

impl Accumulator {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Apply `op` with `operand` to the running value
    ///
    /// On error the running value is left untouched.
    pub fn apply(&mut self, op: char, operand: f64) -> Result<f64, CalcError> {
        let operator = Operator::from_char(op).ok_or(CalcError::UnknownOperator(op))?;
        if operator == Operator::Divide && operand == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        self.value = operator.apply(self.value, operand);
        Ok(self.value)
    }
}
