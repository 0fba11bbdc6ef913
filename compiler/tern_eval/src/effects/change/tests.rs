use super::*;
use crate::test_helpers::{built, lit, lits, var, Probe, RecordingTarget, TestEnv};
use crate::ElementInit;
use pretty_assertions::assert_eq;
use tern_diagnostic::Diagnostic;
use tern_ir::{Value, ValueType};

const ANY: &[TypeSpec] = &[TypeSpec::plural(ValueType::Object)];
const ONE_INTEGER: &[TypeSpec] = &[TypeSpec::single(ValueType::Integer)];
const ONE_NUMBER: &[TypeSpec] = &[TypeSpec::single(ValueType::Number)];

fn accepts_everything(_mode: ChangeMode) -> Option<&'static [TypeSpec]> {
    Some(ANY)
}

fn accepts_nothing(_mode: ChangeMode) -> Option<&'static [TypeSpec]> {
    None
}

fn accepts_single_numbers(mode: ChangeMode) -> Option<&'static [TypeSpec]> {
    match mode {
        ChangeMode::Set => Some(ONE_INTEGER),
        _ => Some(ONE_NUMBER),
    }
}

/// Operands in the order the matcher hands them over for `pattern`.
fn operands(pattern: usize, target: BoxExpr, operand: BoxExpr) -> Vec<BoxExpr> {
    match pattern {
        7 | 8 => vec![target],
        2 | 4 | 6 => vec![operand, target],
        _ => vec![target, operand],
    }
}

#[test]
fn every_pattern_dispatches_and_round_trips() {
    let expected = [
        (ChangeMode::Set, "set T to 5"),
        (ChangeMode::Set, "T = 5"),
        (ChangeMode::Add, "add 5 to T"),
        (ChangeMode::Add, "T += 5"),
        (ChangeMode::Remove, "remove 5 from T"),
        (ChangeMode::Remove, "T -= 5"),
        (ChangeMode::RemoveAll, "remove all 5 from T"),
        (ChangeMode::Delete, "delete T"),
        (ChangeMode::Reset, "reset T"),
    ];
    for (pattern, (mode, rendered)) in expected.into_iter().enumerate() {
        let env = TestEnv::new();
        let (target, log) = RecordingTarget::new("T", accepts_everything);
        let parse = env.parse();
        let effect = built(
            &env,
            EffChange::init(operands(pattern, Box::new(target), lit(5_i64)), pattern, &parse),
        );
        assert_eq!(effect.mode(), mode);
        assert_eq!(effect.render(None, false), rendered);

        let mut frame = env.frame();
        effect.execute(&mut frame);
        let operand = if mode.takes_operand() {
            vec![Value::Int(5)]
        } else {
            Vec::new()
        };
        assert_eq!(*log.lock(), vec![(mode, operand)]);
    }
}

#[test]
fn unsupported_modes_are_reported() {
    let expected = [
        (0, "T cannot be set to anything"),
        (2, "Nothing can be added to T"),
        (4, "Nothing can be removed from T"),
        (6, "Nothing can be removed from T"),
        (7, "T cannot be deleted"),
        (8, "T cannot be reset"),
    ];
    for (pattern, message) in expected {
        let env = TestEnv::new();
        let (target, _log) = RecordingTarget::new("T", accepts_nothing);
        let parse = env.parse();
        let result = EffChange::init(operands(pattern, Box::new(target), lit(1_i64)), pattern, &parse);
        assert!(result.is_err());

        let diags: Vec<Diagnostic> = env.logger.flush();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, ErrorCode::E3001);
        assert_eq!(diags[0].message, message);
    }
}

#[test]
fn operand_type_mismatches_are_reported() {
    let cases: [(usize, BoxExpr, &str); 5] = [
        (0, lit("x"), "T cannot be set to a text"),
        (1, lits([Value::Int(1), Value::Int(2)]), "T cannot be set to integers"),
        (2, lit(true), "a boolean cannot be added to T"),
        (5, lits([Value::Float(1.5), Value::Int(2)]), "numbers cannot be removed from T"),
        (6, lit("x"), "a text cannot be removed from T"),
    ];
    for (pattern, operand, message) in cases {
        let env = TestEnv::new();
        let (target, _log) = RecordingTarget::new("T", accepts_single_numbers);
        let parse = env.parse();
        let result = EffChange::init(operands(pattern, Box::new(target), operand), pattern, &parse);
        assert!(result.is_err());

        let diags = env.logger.flush();
        assert_eq!(diags[0].code, ErrorCode::E3002);
        assert_eq!(diags[0].message, message);
    }
}

#[test]
fn subtype_operands_are_accepted() {
    let env = TestEnv::new();
    let (target, _log) = RecordingTarget::new("T", accepts_single_numbers);
    let parse = env.parse();
    let result = EffChange::init(vec![lit(3_i64), Box::new(target)], 2, &parse);
    assert!(result.is_ok());
    assert_eq!(env.logger.error_count(), 0);
}

#[test]
fn operand_is_evaluated_once_per_execution() {
    let env = TestEnv::new();
    let (target, log) = RecordingTarget::new("T", accepts_everything);
    let (probe, evaluations) = Probe::new(vec![Value::Int(1), Value::Int(2)], ValueType::Integer);
    let parse = env.parse();
    let effect = built(
        &env,
        EffChange::init(vec![Box::new(target), Box::new(probe)], 0, &parse),
    );

    let mut frame = env.frame();
    effect.execute(&mut frame);
    assert_eq!(Probe::count(&evaluations), 1);
    assert_eq!(*log.lock(), vec![(ChangeMode::Set, vec![Value::Int(1), Value::Int(2)])]);
}

#[test]
fn bad_pattern_index_and_arity_are_reported() {
    let env = TestEnv::new();
    let parse = env.parse();
    assert!(EffChange::init(vec![var("{x}")], 9, &parse).is_err());
    assert!(EffChange::init(vec![var("{x}")], 0, &parse).is_err());
    assert!(EffChange::init(vec![var("{x}"), lit(1_i64)], 7, &parse).is_err());

    let codes: Vec<_> = env.logger.flush().into_iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E3007; 3]);
}

#[test]
fn changes_variables_end_to_end() {
    let env = TestEnv::new();
    let parse = env.parse();
    let set = built(&env, EffChange::init(vec![var("{x}"), lit(5_i64)], 0, &parse));
    let add = built(&env, EffChange::init(vec![lit(2_i64), var("{x}")], 2, &parse));
    let sub = built(&env, EffChange::init(vec![var("{x}"), lit(0.5)], 5, &parse));
    let clear = built(&env, EffChange::init(vec![var("{x}")], 7, &parse));

    let mut frame = env.frame();
    let x = var("{x}");
    set.execute(&mut frame);
    assert_eq!(x.single(&frame), Some(Value::Int(5)));
    add.execute(&mut frame);
    assert_eq!(x.single(&frame), Some(Value::Int(7)));
    sub.execute(&mut frame);
    assert_eq!(x.single(&frame), Some(Value::Float(6.5)));
    clear.execute(&mut frame);
    assert_eq!(x.single(&frame), None);
}

#[test]
fn variable_rejections_name_the_variable() {
    let env = TestEnv::new();
    let parse = env.parse();
    assert!(EffChange::init(vec![lit("a"), var("{x}")], 2, &parse).is_err());
    assert!(EffChange::init(vec![lit(1_i64), var("{x}")], 6, &parse).is_err());
    assert!(EffChange::init(vec![var("{x}"), lits([Value::Int(1), Value::Int(2)])], 1, &parse).is_err());
    assert_eq!(
        env.messages(),
        vec![
            "a text cannot be added to {x}",
            "Nothing can be removed from {x}",
            "{x} cannot be set to integers",
        ]
    );
}

#[test]
fn list_variable_remove_all() {
    let env = TestEnv::new();
    let parse = env.parse();
    let fill = built(
        &env,
        EffChange::init(vec![var("{xs::*}"), lits([1, 2, 1, 3].map(Value::Int))], 0, &parse),
    );
    let purge = built(&env, EffChange::init(vec![lit(1_i64), var("{xs::*}")], 6, &parse));
    assert_eq!(purge.render(None, false), "remove all 1 from {xs::*}");

    let mut frame = env.frame();
    fill.execute(&mut frame);
    purge.execute(&mut frame);
    assert_eq!(
        var("{xs::*}").values(&frame).to_vec(),
        vec![Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn constructible_through_the_registry() {
    let env = TestEnv::new();
    let parse = env.parse();
    let Some(ElementInit::Effect(init)) = env.registry.syntax("change").map(|info| info.init) else {
        panic!("change is not registered as an effect");
    };
    let effect = built(&env, init(vec![var("{y}"), lit(1_i64)], 1, &parse));
    assert_eq!(effect.render(None, false), "{y} = 1");
}
