#![allow(dead_code)]

#[cfg(feature = "bench_time")]
use std::time::Instant;

use std::io::{ErrorKind, Write};
use std::time::Duration;
use std::{env, fs, io, process};

// Declaring crate-level modules
mod bytecode;
mod compiler;
mod lexer;
mod values;
mod virtual_machine;

#[cfg(test)]
mod tests;

use virtual_machine::{InterpretResult, VirtualMachine};

/// The main function
fn main() {
    let args = env::args().collect::<Vec<String>>();

    match args.as_slice() {
        [_] => repl(),
        [_, file] => run_file(file),
        _ => {
            eprintln!("Usage: clox [path]");
            process::exit(64);
        }
    }
}

/// Runs the interactive prompt. Every line is interpreted by the same
/// virtual machine instance; end-of-file exits.
fn repl() {
    let mut vm = VirtualMachine::new();
    let stdin = io::stdin();

    loop {
        print!("clox > ");
        io::stdout().flush().expect("Could not flush stdout.");

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => {
                println!();
                break;
            }
            Ok(_) => {
                vm.interpret(&line);
            }
        }
    }
}

/// Reads and interprets a source file, then exits the process with
/// the appropriate code.
fn run_file(filename: &str) {
    let source = read_file(filename);

    // Creates a virtual machine and interprets the file's contents
    let mut vm = VirtualMachine::new();
    let result = vm.interpret(&source);

    // Exit the interpreter with the appropriate code
    match result {
        InterpretResult::CompileError => process::exit(65),
        InterpretResult::RuntimeError => process::exit(70),
        InterpretResult::Ok => process::exit(0),
    }
}

/// Reads a source file fully into a string, exiting the process when
/// the file cannot be read.
fn read_file(filename: &str) -> String {
    match fs::read_to_string(filename) {
        Ok(contents) => contents,
        Err(error) => {
            match error.kind() {
                ErrorKind::NotFound => eprintln!("File '{}' not found.", filename),
                ErrorKind::PermissionDenied => eprintln!("Need permission to open '{}'.", filename),
                _ => eprintln!("Could not read file '{}'.", filename),
            };

            process::exit(74)
        }
    }
}

/// Executes the provided function while also calculating its execution time.
///
/// ## Arguments
/// `executor` – The function (with no parameters) to be executed.
///
/// ## Returns
/// `(T, Duration)` – A tuple with the result of the executed function as its
/// first parameter, and the execution time of the function as its second parameter.
pub fn exec_time<T, F: FnOnce() -> T>(executor: F) -> (T, Duration) {
    #[cfg(feature = "bench_time")]
    {
        let start = Instant::now();
        let exec = executor();
        let time = start.elapsed();

        return (exec, time);
    }

    #[cfg(not(feature = "bench_time"))]
    (executor(), Duration::new(0, 0))
}
