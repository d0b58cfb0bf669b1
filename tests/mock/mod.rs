#![allow(dead_code)]

use ormy::{Error, Executor, Result, Row, RowNames, RowsCursor, Value};
use std::sync::{Mutex, PoisonError};

/// Records every statement and answers with the same canned rows.
#[derive(Debug, Default)]
pub struct MockExecutor {
    labels: Vec<String>,
    rows: Vec<Vec<Value>>,
    failure: Option<String>,
    statements: Mutex<Vec<String>>,
}

impl MockExecutor {
    pub fn new(labels: &[&str], rows: Vec<Vec<Value>>) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            rows,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn executions(&self) -> usize {
        self.statements().len()
    }
}

impl Executor for MockExecutor {
    type Cursor = RowsCursor;

    async fn execute(&self, statement: String) -> Result<RowsCursor> {
        self.statements
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(statement);
        if let Some(message) = &self.failure {
            return Err(Error::msg(message.clone()));
        }
        let labels = self.labels.iter().cloned().collect::<RowNames>();
        let rows = self
            .rows
            .iter()
            .map(|r| r.clone().into_boxed_slice())
            .collect::<Vec<Row>>();
        Ok(RowsCursor::new(labels, rows))
    }
}

/// Answers every statement with a single row holding the statement itself.
#[derive(Debug, Default)]
pub struct EchoExecutor;

impl Executor for EchoExecutor {
    type Cursor = RowsCursor;

    async fn execute(&self, statement: String) -> Result<RowsCursor> {
        tokio::task::yield_now().await;
        Ok(RowsCursor::new(
            ["statement".to_string()].into_iter().collect(),
            [vec![Value::Varchar(Some(statement))].into_boxed_slice()],
        ))
    }
}
