use crate::compiler::Compiler;
use crate::virtual_machine::{InterpretResult, RuntimeResult, VirtualMachine};

/// Compiles and runs a program, returning the value it yields.
fn run_program(src: &str) -> f64 {
    let chunk = match Compiler::compile(src) {
        Ok(chunk) => chunk,
        Err(_) => panic!("Compiler Had Errors."),
    };

    let mut vm = VirtualMachine::new();

    match vm.execute(chunk) {
        RuntimeResult::Ok(value) => value.as_float(),
        RuntimeResult::Error { .. } => panic!("Program Had Runtime Errors."),
    }
}

#[test]
fn yields_a_single_literal() {
    assert_eq!(run_program("1"), 1.0);
    assert_eq!(run_program("3.14"), 3.14);
}

#[test]
fn evaluates_with_host_float_arithmetic() {
    assert_eq!(run_program("1 + 2 * 3"), 7.0);
    assert_eq!(run_program("(1 + 2) * 3"), 9.0);
    assert_eq!(run_program("-2 * 3"), -6.0);
    assert_eq!(run_program("8 / 2 / 2"), 2.0);
    assert_eq!(run_program("3.5 + 1.25"), 4.75);
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(run_program("5 - 3 - 1"), 1.0);
}

#[test]
fn negation_nests() {
    assert_eq!(run_program("--2"), 2.0);
    assert_eq!(run_program("-(1 + 2)"), -3.0);
}

#[test]
fn grouping_nests_arbitrarily_deep() {
    assert_eq!(run_program("(((((1)))))"), 1.0);
}

#[test]
fn division_by_zero_does_not_trap() {
    // IEEE-754: infinities and NaN propagate instead of trapping.
    let inf = run_program("1 / 0");
    assert!(inf.is_infinite() && inf.is_sign_positive());

    let neg_inf = run_program("-1 / 0");
    assert!(neg_inf.is_infinite() && neg_inf.is_sign_negative());

    assert!(run_program("0 / 0").is_nan());
}

#[test]
fn the_stack_is_empty_after_a_full_run() {
    let chunk = match Compiler::compile("(1 + 2) * -3") {
        Ok(chunk) => chunk,
        Err(_) => panic!("Compiler Had Errors."),
    };

    let mut vm = VirtualMachine::new();

    match vm.execute(chunk) {
        RuntimeResult::Ok(value) => assert_eq!(value.as_float(), -9.0),
        RuntimeResult::Error { .. } => panic!("Program Had Runtime Errors."),
    }

    // `Return` popped the one value the expression left behind.
    assert_eq!(vm.stack_size(), 0);
}

#[test]
fn interpret_reports_success() {
    let mut vm = VirtualMachine::new();
    assert_eq!(vm.interpret("1 + 1"), InterpretResult::Ok);
}

#[test]
fn compile_errors_skip_execution() {
    let mut vm = VirtualMachine::new();

    assert_eq!(vm.interpret("1 -"), InterpretResult::CompileError);

    // Nothing ran, so nothing was left on the stack.
    assert_eq!(vm.stack_size(), 0);
}

#[test]
fn one_machine_can_interpret_many_programs() {
    // The REPL feeds every line to the same machine.
    let mut vm = VirtualMachine::new();

    assert_eq!(vm.interpret("1 + 1"), InterpretResult::Ok);
    assert_eq!(vm.interpret("2 *"), InterpretResult::CompileError);
    assert_eq!(vm.interpret("6 / 3"), InterpretResult::Ok);
    assert_eq!(vm.stack_size(), 0);
}
