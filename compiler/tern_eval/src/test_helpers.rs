//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tern_diagnostic::DiagnosticConfig;
use tern_ir::{ChangeMode, TypeSpec, Value, ValueType};

use crate::{
    BoxExpr, Effect, Expression, Frame, Literal, Logger, ParseContext, Registry,
    ScriptLoadContext, Values, Variable, VariableStore,
};

/// Registry, logger, globals and a context: everything needed to build
/// elements and run them.
pub(crate) struct TestEnv {
    pub registry: Registry,
    pub logger: Logger,
    pub globals: VariableStore,
    pub ctx: ScriptLoadContext,
}

impl TestEnv {
    pub fn new() -> Self {
        TestEnv {
            registry: Registry::with_builtins(),
            logger: Logger::new(DiagnosticConfig::unlimited()),
            globals: VariableStore::new(),
            ctx: ScriptLoadContext::default(),
        }
    }

    pub fn parse(&self) -> ParseContext<'_> {
        ParseContext::new(&self.registry, &self.logger)
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.ctx, &self.globals)
    }

    /// Messages of every reported diagnostic, draining the logger.
    pub fn messages(&self) -> Vec<String> {
        self.logger.flush().into_iter().map(|d| d.message).collect()
    }
}

pub(crate) fn lit(value: impl Into<Value>) -> BoxExpr {
    Box::new(Literal::of(value))
}

pub(crate) fn lits(values: impl IntoIterator<Item = Value>) -> BoxExpr {
    Box::new(Literal::new(values.into_iter().collect()))
}

pub(crate) fn var(source: &str) -> BoxExpr {
    match Variable::parse(source) {
        Some(variable) => Box::new(variable),
        None => panic!("not a variable: {source}"),
    }
}

pub(crate) type ChangeLog = Arc<Mutex<Vec<(ChangeMode, Vec<Value>)>>>;

/// A change target that records every change it receives.
#[derive(Debug)]
pub(crate) struct RecordingTarget {
    pub name: &'static str,
    pub accepts: fn(ChangeMode) -> Option<&'static [TypeSpec]>,
    pub log: ChangeLog,
}

impl RecordingTarget {
    pub fn new(
        name: &'static str,
        accepts: fn(ChangeMode) -> Option<&'static [TypeSpec]>,
    ) -> (Self, ChangeLog) {
        let log = ChangeLog::default();
        let target = RecordingTarget {
            name,
            accepts,
            log: Arc::clone(&log),
        };
        (target, log)
    }
}

impl Expression for RecordingTarget {
    fn values(&self, _frame: &Frame<'_>) -> Values {
        Values::new()
    }

    fn return_type(&self) -> ValueType {
        ValueType::Object
    }

    fn accepts_change(&self, mode: ChangeMode) -> Option<&'static [TypeSpec]> {
        (self.accepts)(mode)
    }

    fn change(&self, _frame: &mut Frame<'_>, values: &[Value], mode: ChangeMode) {
        self.log.lock().push((mode, values.to_vec()));
    }

    fn render(&self, _frame: Option<&Frame<'_>>, _debug: bool) -> String {
        self.name.to_string()
    }
}

/// Yields fixed values and counts how often it was evaluated.
#[derive(Debug)]
pub(crate) struct Probe {
    pub values: Vec<Value>,
    pub ty: ValueType,
    pub evaluations: Arc<AtomicUsize>,
}

impl Probe {
    pub fn new(values: Vec<Value>, ty: ValueType) -> (Self, Arc<AtomicUsize>) {
        let evaluations = Arc::new(AtomicUsize::new(0));
        let probe = Probe {
            values,
            ty,
            evaluations: Arc::clone(&evaluations),
        };
        (probe, evaluations)
    }

    pub fn count(evaluations: &AtomicUsize) -> usize {
        evaluations.load(Ordering::SeqCst)
    }
}

impl Expression for Probe {
    fn values(&self, _frame: &Frame<'_>) -> Values {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        self.values.iter().cloned().collect()
    }

    fn return_type(&self) -> ValueType {
        self.ty
    }

    fn is_single(&self) -> bool {
        self.values.len() == 1
    }

    fn render(&self, _frame: Option<&Frame<'_>>, _debug: bool) -> String {
        "probe".to_string()
    }
}

pub(crate) type MarkLog = Arc<Mutex<Vec<String>>>;

/// Effect that appends its label (and the current value of an optional
/// expression) to a shared log.
#[derive(Debug)]
pub(crate) struct Mark {
    label: &'static str,
    value: Option<BoxExpr>,
    log: MarkLog,
}

impl Mark {
    pub fn new(label: &'static str, log: &MarkLog) -> Box<dyn Effect> {
        Box::new(Mark {
            label,
            value: None,
            log: Arc::clone(log),
        })
    }

    pub fn with(label: &'static str, value: BoxExpr, log: &MarkLog) -> Box<dyn Effect> {
        Box::new(Mark {
            label,
            value: Some(value),
            log: Arc::clone(log),
        })
    }
}

impl Effect for Mark {
    fn execute(&self, frame: &mut Frame<'_>) {
        let entry = match &self.value {
            Some(expr) => {
                let values: Vec<String> = expr.values(frame).iter().map(ToString::to_string).collect();
                format!("{}:{}", self.label, values.join(","))
            }
            None => self.label.to_string(),
        };
        self.log.lock().push(entry);
    }

    fn render(&self, _frame: Option<&Frame<'_>>, _debug: bool) -> String {
        format!("mark {}", self.label)
    }
}

/// Unwrap a construction result, failing the test with the reported
/// diagnostics if construction failed.
pub(crate) fn built<T>(env: &TestEnv, result: crate::InitResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => panic!("construction failed: {:?}", env.messages()),
    }
}
