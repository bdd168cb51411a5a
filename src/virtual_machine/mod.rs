use crate::bytecode::{Chunk, OpCode};
use crate::compiler::Compiler;
use crate::exec_time;
use crate::values::Value;

// Submodules
mod run;

/// The number of slots the operand stack is created with. Expression
/// programs only ever need as many slots as their deepest operand
/// nesting, so reserving this up front avoids reallocation in the
/// common case.
pub const STACK_MAX: usize = 256;

/// The types of results the interpreter can return.
#[derive(Debug, PartialEq)]
pub enum InterpretResult {
    CompileError,
    Ok,
    RuntimeError,
}

/// The result of executing a chunk to completion.
pub(crate) enum RuntimeResult {
    /// The program ran to its final `Return`, which pops and yields
    /// the value on top of the stack.
    Ok(Value),
    /// Reserved. None of the current opcodes can fail at runtime, but
    /// future ones will.
    Error { message: String },
}

/// Represents the virtual machine and its internal state.
pub struct VirtualMachine {
    chunk: Chunk,
    ip: usize,
    stack: Vec<Value>,
}

impl VirtualMachine {
    /// Creates a virtual machine with an empty chunk and a reset
    /// operand stack.
    pub fn new() -> Self {
        Self {
            chunk: Chunk::new(),
            ip: 0,
            stack: Vec::with_capacity(STACK_MAX),
        }
    }

    /// Interprets a source string.
    ///
    /// Compiles the source into a fresh chunk and, only if compilation
    /// succeeded, executes it. The value yielded by the program is
    /// printed to stdout.
    ///
    /// ## Arguments
    /// * `source` – The source text to interpret.
    ///
    /// ## Returns
    /// * `InterpretResult` – The result of the source interpretation.
    pub fn interpret(&mut self, source: &str) -> InterpretResult {
        // Compiles the program and calculates the compiler's execution time
        let compiling = exec_time(|| Compiler::compile(source));

        let chunk = match compiling.0 {
            Ok(chunk) => chunk,
            Err(result) => return result,
        };

        // Executes the program and calculates the run time
        let running = exec_time(|| self.execute(chunk));

        let result = match running.0 {
            RuntimeResult::Ok(value) => {
                println!("{}", value);
                InterpretResult::Ok
            }
            RuntimeResult::Error { message } => {
                eprintln!("Runtime error: {}", message);
                InterpretResult::RuntimeError
            }
        };

        #[cfg(feature = "bench_time")]
        {
            println!("\n======= Execution Times =======");
            println!("Compile Time:\t{:?}", compiling.1);
            println!("Run Time:\t{:?}", running.1);
            println!("===============================");
        }

        return result;
    }

    /// Binds a compiled chunk to the machine, resets the instruction
    /// pointer, and runs the chunk to completion.
    pub(crate) fn execute(&mut self, chunk: Chunk) -> RuntimeResult {
        self.chunk = chunk;
        self.ip = 0;
        self.run()
    }

    /// Reads the next instruction byte and decodes it as an OpCode.
    fn get_next_op_code(&mut self) -> OpCode {
        let code = self.chunk.get_op_code(self.ip);
        self.ip += 1;

        match code {
            Some(instr) => instr,
            // The compiler only ever emits well-formed chunks, so a
            // byte that is not an opcode is a compiler bug.
            None => unreachable!("Invalid instruction byte."),
        }
    }

    /// Reads the next byte from the chunk as an instruction operand.
    fn get_next_byte(&mut self) -> u8 {
        let byte = self.chunk.get_byte(self.ip);
        self.ip += 1;

        match byte {
            Some(x) => x,
            None => unreachable!("Could not get operand byte."),
        }
    }

    /// Pushes a value onto the top of the operand stack.
    fn push_stack(&mut self, new_val: Value) {
        self.stack.push(new_val)
    }

    /// Pops a value from the top of the operand stack.
    fn pop_stack(&mut self) -> Value {
        match self.stack.pop() {
            Some(val) => val,
            None => panic!("Stack is empty!"),
        }
    }

    #[cfg(test)]
    pub fn stack_size(&self) -> usize {
        return self.stack.len();
    }

    /// Prints the execution trace for the program. Useful for
    /// debugging the VM.
    #[cfg(feature = "trace_execution")]
    fn print_execution(&self) {
        // Prints the current state of the values stack
        print!("          ");
        for val in self.stack.iter() {
            print!("[ {} ]", val);
        }
        println!();

        // Prints the instruction about to be executed
        self.chunk.disassemble_instruction(self.ip);
    }
}
