//! The flattened statement graph of one trigger.

use tern_diagnostic::{Diagnostic, ErrorCode, ErrorGuaranteed};
use tern_ir::{Span, StmtId};

use super::conditional::{Branch, Conditional, ConditionalMode};
use super::execution::{Execution, RunOutcome};
use super::loops::Loop;
use crate::{
    ensure_sufficient_stack, Effect, Event, Frame, InitResult, Logger, RunError, Runtime,
    TriggerContext,
};

/// A statement as produced by the loader, before flattening.
#[derive(Debug)]
pub enum Item {
    Effect(Box<dyn Effect>),
    /// A plain block of statements.
    Section(Vec<Item>),
    Conditional {
        conditional: Conditional,
        body: Vec<Item>,
    },
    Loop {
        looped: Loop,
        body: Vec<Item>,
    },
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    Effect(Box<dyn Effect>),
    Section,
    Conditional(Conditional),
    Loop(Loop),
}

#[derive(Debug)]
pub(crate) struct Node {
    kind: NodeKind,
    /// Successor once this node (and its body) is done.
    next: Option<StmtId>,
    /// Enclosing section.
    parent: Option<StmtId>,
    /// First body statement, for sections.
    first: Option<StmtId>,
}

/// An event plus the statements it runs.
///
/// Immutable once built, so one trigger can run for many contexts at once.
#[derive(Debug)]
pub struct Trigger {
    event: Box<dyn Event>,
    nodes: Vec<Node>,
    entry: Option<StmtId>,
}

impl Trigger {
    pub fn event(&self) -> &dyn Event {
        &*self.event
    }

    /// First statement to run, `None` for an empty trigger.
    pub fn entry(&self) -> Option<StmtId> {
        self.entry
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: StmtId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn next(&self, id: StmtId) -> Option<StmtId> {
        self.node(id).next
    }

    pub fn parent(&self, id: StmtId) -> Option<StmtId> {
        self.node(id).parent
    }

    pub fn first(&self, id: StmtId) -> Option<StmtId> {
        self.node(id).first
    }

    /// The fallback of a conditional node.
    pub fn fallback(&self, id: StmtId) -> Option<StmtId> {
        match &self.node(id).kind {
            NodeKind::Conditional(conditional) => conditional.fallback(),
            _ => None,
        }
    }

    /// Where to go once `id` is finished.
    ///
    /// A node without a `next` continues after its parent's body: at the
    /// parent itself when the parent is a loop (starting its next
    /// iteration), otherwise wherever the parent continues.
    pub(crate) fn after(&self, id: StmtId) -> Option<StmtId> {
        let mut current = id;
        loop {
            let node = self.node(current);
            if node.next.is_some() {
                return node.next;
            }
            let parent = node.parent?;
            if matches!(self.node(parent).kind, NodeKind::Loop(_)) {
                return Some(parent);
            }
            current = parent;
        }
    }

    /// Run one node and return its successor.
    pub(crate) fn walk(&self, id: StmtId, frame: &mut Frame<'_>) -> Option<StmtId> {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Effect(effect) => {
                effect.execute(frame);
                self.after(id)
            }
            NodeKind::Section => node.first.or_else(|| self.after(id)),
            NodeKind::Conditional(conditional) => match conditional.branch(frame) {
                Branch::Body => node.first.or_else(|| self.after(id)),
                Branch::Fallback(fallback) => Some(fallback),
                Branch::Skip => self.after(id),
            },
            NodeKind::Loop(looped) => {
                if looped.advance(frame) {
                    // An empty body re-enters the loop right away.
                    node.first.or(Some(id))
                } else {
                    self.after(id)
                }
            }
        }
    }

    pub fn render(&self, id: StmtId, frame: Option<&Frame<'_>>, debug: bool) -> String {
        match &self.node(id).kind {
            NodeKind::Effect(effect) => effect.render(frame, debug),
            NodeKind::Section => "section".to_string(),
            NodeKind::Conditional(conditional) => conditional.render(frame, debug),
            NodeKind::Loop(looped) => looped.render(frame, debug),
        }
    }

    /// Run this trigger for `ctx` with a fresh frame.
    ///
    /// Returns [`RunOutcome::Skipped`] when the event does not handle `ctx`.
    pub fn execute(
        &self,
        runtime: &Runtime,
        ctx: &dyn TriggerContext,
    ) -> Result<RunOutcome, RunError> {
        if !self.event.check(ctx) {
            return Ok(RunOutcome::Skipped);
        }
        let config = runtime.config();
        let frame = Frame::new(ctx, runtime.variables());
        let mut execution = Execution::new(self, frame).with_debug_render(config.debug_render);
        let steps = execution.run(config.step_limit)?;
        Ok(RunOutcome::Completed { steps })
    }
}

/// Flattens loader [`Item`]s into a [`Trigger`].
pub struct TriggerBuilder<'a> {
    logger: &'a Logger,
    nodes: Vec<Node>,
    node_limit: u32,
    failed: Option<ErrorGuaranteed>,
    overflowed: bool,
}

impl<'a> TriggerBuilder<'a> {
    pub fn new(logger: &'a Logger) -> Self {
        TriggerBuilder {
            logger,
            nodes: Vec::new(),
            node_limit: u32::MAX,
            failed: None,
            overflowed: false,
        }
    }

    /// Cap the number of statements a trigger may hold. Every statement
    /// needs its own [`StmtId`], so the cap never exceeds `u32::MAX`.
    #[must_use]
    pub fn with_node_limit(mut self, limit: u32) -> Self {
        self.node_limit = limit;
        self
    }

    /// Link `items` into a graph.
    ///
    /// `else if` / `else` items join the chain of the `if` right before
    /// them. One without such an `if` is reported (E3005) and the whole
    /// trigger fails after the remaining items have been checked.
    pub fn build(mut self, event: Box<dyn Event>, items: Vec<Item>) -> InitResult<Trigger> {
        let entry = self.lower(items, None);
        if let Some(failed) = self.failed {
            return Err(failed);
        }
        tracing::debug!(nodes = self.nodes.len(), event = %event.render(false), "built trigger");
        Ok(Trigger {
            event,
            nodes: self.nodes,
            entry,
        })
    }

    /// Add a node, or report E9001 once the trigger is out of ids.
    fn push(&mut self, kind: NodeKind, parent: Option<StmtId>) -> Option<StmtId> {
        let index = u32::try_from(self.nodes.len())
            .ok()
            .filter(|&index| index < self.node_limit);
        let Some(index) = index else {
            self.report_overflow();
            return None;
        };
        self.nodes.push(Node {
            kind,
            next: None,
            parent,
            first: None,
        });
        Some(StmtId::new(index))
    }

    fn node_mut(&mut self, id: StmtId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Lower one statement list; returns its first node.
    fn lower(&mut self, items: Vec<Item>, parent: Option<StmtId>) -> Option<StmtId> {
        let mut first = None;
        let mut prev: Option<StmtId> = None;
        // Head of the chain an `else if` / `else` would join.
        let mut open_chain: Option<StmtId> = None;
        let mut heads = Vec::new();

        for item in items {
            let (kind, body) = match item {
                Item::Conditional { conditional, body }
                    if conditional.mode() != ConditionalMode::If =>
                {
                    let Some(head) = open_chain else {
                        self.report_dangling(&conditional);
                        continue;
                    };
                    if conditional.mode() == ConditionalMode::Else {
                        open_chain = None;
                    }
                    let Some(id) = self.push(NodeKind::Conditional(conditional), parent) else {
                        continue;
                    };
                    self.attach_fallback(head, id);
                    self.lower_body(id, body);
                    continue;
                }
                Item::Conditional { conditional, body } => (NodeKind::Conditional(conditional), body),
                Item::Effect(effect) => (NodeKind::Effect(effect), Vec::new()),
                Item::Section(body) => (NodeKind::Section, body),
                Item::Loop { looped, body } => (NodeKind::Loop(looped), body),
            };

            let opens_chain = matches!(kind, NodeKind::Conditional(_));
            let Some(id) = self.push(kind, parent) else {
                continue;
            };
            match prev {
                Some(prev) => self.node_mut(prev).next = Some(id),
                None => first = Some(id),
            }
            prev = Some(id);
            open_chain = opens_chain.then_some(id);
            if opens_chain {
                heads.push(id);
            }
            self.lower_body(id, body);
        }

        for head in heads {
            self.share_successor(head);
        }
        first
    }

    fn lower_body(&mut self, id: StmtId, body: Vec<Item>) {
        let first = ensure_sufficient_stack(|| self.lower(body, Some(id)));
        self.node_mut(id).first = first;
    }

    fn fallback_of(&self, id: StmtId) -> Option<StmtId> {
        match &self.nodes[id.index()].kind {
            NodeKind::Conditional(conditional) => conditional.fallback(),
            _ => None,
        }
    }

    /// Append `fallback` to the end of the chain starting at `head`.
    fn attach_fallback(&mut self, head: StmtId, fallback: StmtId) {
        let mut last = head;
        while let Some(next) = self.fallback_of(last) {
            last = next;
        }
        if let NodeKind::Conditional(conditional) = &mut self.node_mut(last).kind {
            conditional.set_fallback(fallback);
        }
    }

    /// Give every link of a chain the head's successor.
    fn share_successor(&mut self, head: StmtId) {
        let next = self.nodes[head.index()].next;
        let mut link = self.fallback_of(head);
        while let Some(id) = link {
            self.node_mut(id).next = next;
            link = self.fallback_of(id);
        }
    }

    #[cold]
    fn report_overflow(&mut self) {
        if self.overflowed {
            return;
        }
        self.overflowed = true;
        let message = format!("a trigger cannot hold more than {} statements", self.node_limit);
        let diag = Diagnostic::error(ErrorCode::E9001)
            .with_message(message.clone())
            .with_label(Span::DUMMY, message);
        self.failed = Some(self.logger.error(diag));
    }

    fn report_dangling(&mut self, conditional: &Conditional) {
        let message = format!(
            "'{}' has to be placed just after another 'if' or 'else if' section",
            conditional.mode()
        );
        let diag = Diagnostic::error(ErrorCode::E3005)
            .with_message(message.clone())
            .with_label(conditional.span(), message);
        self.failed = Some(self.logger.error(diag));
    }
}
