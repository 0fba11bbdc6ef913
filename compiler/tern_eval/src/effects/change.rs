//! The general purpose change effect.
//!
//! One effect covers every mutation: `set`, `add`, `remove`, `remove all`,
//! `delete`/`clear` and `reset`. Whether a target supports a mode, and with
//! which operand types, is decided by the target itself through
//! [`Expression::accepts_change`]; this effect only validates and dispatches.

use tern_diagnostic::ErrorCode;
use tern_ir::{ChangeMode, TypeSpec};

use crate::{
    expect_operands, BoxExpr, Effect, Frame, InitResult, ParseContext, Values,
};

#[derive(Debug)]
pub struct EffChange {
    changed: BoxExpr,
    change_with: Option<BoxExpr>,
    mode: ChangeMode,
    /// Written with `=`, `+=` or `-=`.
    symbolic: bool,
}

impl EffChange {
    pub const PATTERNS: &'static [&'static str] = &[
        "set %~objects% to %objects%",
        "%~objects% = %objects%",
        "add %objects% to %~objects%",
        "%~objects% += %objects%",
        "remove %objects% from %~objects%",
        "%~objects% -= %objects%",
        "remove (all|every) %objects% from %~objects%",
        "(delete|clear) %~objects%",
        "reset %~objects%",
    ];

    /// Mode of each entry of [`EffChange::PATTERNS`].
    const MODES: [ChangeMode; 9] = [
        ChangeMode::Set,
        ChangeMode::Set,
        ChangeMode::Add,
        ChangeMode::Add,
        ChangeMode::Remove,
        ChangeMode::Remove,
        ChangeMode::RemoveAll,
        ChangeMode::Delete,
        ChangeMode::Reset,
    ];

    pub fn init(
        operands: Vec<BoxExpr>,
        matched_pattern: usize,
        parse: &ParseContext<'_>,
    ) -> InitResult<Self> {
        let Some(&mode) = Self::MODES.get(matched_pattern) else {
            return Err(parse.error(
                ErrorCode::E3007,
                format!("change has no pattern alternative {matched_pattern}"),
            ));
        };

        let symbolic = mode.takes_operand() && matched_pattern % 2 == 1;
        let (changed, change_with) = if mode.takes_operand() {
            let [first, second] = expect_operands::<2>(operands, parse, "change")?;
            if symbolic || mode == ChangeMode::Set {
                (first, Some(second))
            } else {
                (second, Some(first))
            }
        } else {
            let [target] = expect_operands::<1>(operands, parse, "change")?;
            (target, None)
        };

        let target = changed.render(None, parse.is_debug());
        let Some(accepted) = changed.accepts_change(mode) else {
            let message = match mode {
                ChangeMode::Set => format!("{target} cannot be set to anything"),
                ChangeMode::Add => format!("Nothing can be added to {target}"),
                ChangeMode::Remove | ChangeMode::RemoveAll => {
                    format!("Nothing can be removed from {target}")
                }
                ChangeMode::Delete => format!("{target} cannot be deleted"),
                ChangeMode::Reset => format!("{target} cannot be reset"),
            };
            return Err(parse.error(ErrorCode::E3001, message));
        };

        if let Some(operand) = &change_with {
            let (ty, plural) = (operand.return_type(), !operand.is_single());
            if !TypeSpec::any_accepts(accepted, ty, plural) {
                let operand_type = ty.with_indefinite_article(plural);
                let message = match mode {
                    ChangeMode::Set => format!("{target} cannot be set to {operand_type}"),
                    ChangeMode::Add => format!("{operand_type} cannot be added to {target}"),
                    _ => format!("{operand_type} cannot be removed from {target}"),
                };
                return Err(parse.error(ErrorCode::E3002, message));
            }
        }

        Ok(EffChange {
            changed,
            change_with,
            mode,
            symbolic,
        })
    }

    pub fn mode(&self) -> ChangeMode {
        self.mode
    }
}

impl Effect for EffChange {
    fn execute(&self, frame: &mut Frame<'_>) {
        let values = match &self.change_with {
            Some(operand) => operand.values(frame),
            None => Values::new(),
        };
        tracing::debug!(mode = %self.mode, operands = values.len(), "dispatch change");
        self.changed.change(frame, &values, self.mode);
    }

    fn render(&self, frame: Option<&Frame<'_>>, debug: bool) -> String {
        let changed = self.changed.render(frame, debug);
        let with = self
            .change_with
            .as_ref()
            .map(|operand| operand.render(frame, debug))
            .unwrap_or_default();
        match (self.mode, self.symbolic) {
            (ChangeMode::Set, true) => format!("{changed} = {with}"),
            (ChangeMode::Set, false) => format!("set {changed} to {with}"),
            (ChangeMode::Add, true) => format!("{changed} += {with}"),
            (ChangeMode::Add, false) => format!("add {with} to {changed}"),
            (ChangeMode::Remove, true) => format!("{changed} -= {with}"),
            (ChangeMode::Remove, false) => format!("remove {with} from {changed}"),
            (ChangeMode::RemoveAll, _) => format!("remove all {with} from {changed}"),
            (ChangeMode::Delete | ChangeMode::Reset, _) => format!("{} {changed}", self.mode),
        }
    }
}

#[cfg(test)]
mod tests;
