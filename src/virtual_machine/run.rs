use crate::bytecode::OpCode;
use crate::values::Value;
use crate::virtual_machine::{RuntimeResult, VirtualMachine};

impl VirtualMachine {
    /// Executes the instructions in the bound chunk.
    ///
    /// ## Returns
    /// `RuntimeResult` – The value yielded by the program's final
    /// `Return` instruction.
    pub(crate) fn run(&mut self) -> RuntimeResult {
        loop {
            #[cfg(feature = "trace_execution")]
            self.print_execution();

            let instruction = self.get_next_op_code();

            match instruction {
                // Value loaders
                OpCode::LoadConstant => self.op_load_constant(),

                // Operators
                OpCode::Add => self.binary_operation(|a, b| a + b),
                OpCode::Subtract => self.binary_operation(|a, b| a - b),
                OpCode::Multiply => self.binary_operation(|a, b| a * b),
                OpCode::Divide => self.binary_operation(|a, b| a / b),

                OpCode::Negate => {
                    let value = self.pop_stack().as_float();
                    self.push_stack(Value::Float(-value));
                }

                OpCode::Return => {
                    // The program's result is the one value left on
                    // the stack.
                    return RuntimeResult::Ok(self.pop_stack());
                }
            }
        }
    }

    /// Executes the instruction to load a constant from the pool onto
    /// the stack. The operand is the next byte in the chunk.
    fn op_load_constant(&mut self) {
        let idx = self.get_next_byte() as usize;

        let value = match self.chunk.get_constant(idx) {
            Some(val) => *val,
            None => unreachable!("Could not get constant."),
        };

        self.push_stack(value);
    }

    /// Pops the two operands of an arithmetic instruction and pushes
    /// the result of applying the operator to them. The right operand
    /// is popped first because it was pushed last.
    ///
    /// All four arithmetic opcodes funnel through here. The math is
    /// plain IEEE-754: division by zero and overflow produce
    /// infinities or NaN instead of trapping.
    fn binary_operation(&mut self, opr: fn(f64, f64) -> f64) {
        let right = self.pop_stack().as_float();
        let left = self.pop_stack().as_float();

        self.push_stack(Value::Float(opr(left, right)));
    }
}
