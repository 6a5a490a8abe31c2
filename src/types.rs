//! Shared types used across modules
//!
//! Results produced by the examples, independent of how they are printed.

use serde::Serialize;
use std::fmt;

use crate::matrix::Matrix;

/// A single printed value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    Numbers(Vec<i64>),
    Names(Vec<String>),
    Matrix(Matrix),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Numbers(v) => write!(f, "{:?}", v),
            Value::Names(v) => write!(f, "{:?}", v),
            Value::Matrix(m) => write!(f, "{}", m),
        }
    }
}

/// One labelled line of an example's output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub label: String,
    #[serde(flatten)]
    pub value: Value,
}

impl Step {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self { label: label.into(), value }
    }
}

/// Everything one example printed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub id: u8,
    pub title: &'static str,
    pub steps: Vec<Step>,
}
