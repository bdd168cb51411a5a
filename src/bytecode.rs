use crate::values::Value;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;

/// The set of instructions supported by the virtual machine.
///
/// **NOTE:** Changing the order in which members are declared creates
/// incompatibilities between different versions of the interpreter.
#[derive(Debug, PartialEq)]
#[repr(u8)]
#[derive(FromPrimitive)]
pub enum OpCode {
    // Instructions with zero chunk operands.
    // While these instructions do not have any bytecode operands,
    // they do have value operands from the stack.
    Add,
    Divide,
    Multiply,
    Negate,
    Return,
    Subtract,

    // Instructions with one chunk operand.
    // These instructions use the next byte
    // from the chunk as their operand.
    LoadConstant,
}

/// Contains all the necessary information about
/// the instructions to be executed.
pub struct Chunk {
    instructions: Vec<u8>,
    lines: Vec<usize>,
    constants: Vec<Value>,
}

impl Chunk {
    /// Creates a new chunk.
    ///
    /// ## Returns
    /// `Chunk` – a new chunk.
    pub fn new() -> Self {
        Self {
            instructions: vec![],
            lines: Vec::new(),
            constants: Vec::new(),
        }
    }

    /// Appends a raw byte and its source line to the chunk.
    /// The instructions list and the lines list stay parallel: the
    /// byte at index `i` was produced by source line `lines[i]`.
    ///
    /// ## Arguments
    /// * `byte` – The byte to add to the instructions list.
    /// * `line` – The source line that produced the byte.
    pub fn write(&mut self, byte: u8, line: usize) {
        self.instructions.push(byte);
        self.lines.push(line);
    }

    /// Appends a ByteCode instruction from a given OpCode into the
    /// instructions list.
    ///
    /// ## Arguments
    /// * `instr` – The OpCode instruction to add to the list.
    /// * `line` – The source line that produced the instruction.
    pub fn push_op_code(&mut self, instr: OpCode, line: usize) {
        self.write(instr as u8, line);
    }

    /// Returns the OpCode associated with a byte instruction in the
    /// instructions list.
    ///
    /// ## Arguments
    /// * `idx` – The index of the instruction in the instructions list.
    ///
    /// ## Returns
    /// `Option<OpCode>` – The OpCode instruction at the given index.
    pub fn get_op_code(&self, idx: usize) -> Option<OpCode> {
        match self.instructions.get(idx) {
            Some(x) => OpCode::from_u8(*x),
            None => None,
        }
    }

    /// Retrieves a raw byte from the instructions list.
    ///
    /// ## Arguments
    /// * `idx` – The index of the byte in the instructions list.
    ///
    /// ## Returns
    /// `Option<u8>` – The byte instruction at the given index.
    pub fn get_byte(&self, idx: usize) -> Option<u8> {
        self.instructions.get(idx).copied()
    }

    /// Retrieves the source line that produced the byte at the
    /// given index.
    pub fn get_line(&self, idx: usize) -> Option<usize> {
        self.lines.get(idx).copied()
    }

    /// Adds a constant to this chunk's constants pool.
    ///
    /// ## Arguments
    /// * `value` – The value to be added to the pool.
    ///
    /// ## Returns
    /// * `Result<u8, ()>` – If the value was successfully added to the
    /// pool, returns its position. Constant indices are emitted as a
    /// single operand byte, so the pool holds at most 256 entries; if
    /// the pool is full, returns error.
    pub fn add_constant(&mut self, value: Value) -> Result<u8, ()> {
        return if self.constants.len() < 256 {
            self.constants.push(value);
            Ok((self.constants.len() - 1) as u8)
        } else {
            Err(())
        };
    }

    /// Retrieves a constant from this chunk's constants pool.
    ///
    /// ## Arguments
    /// * `idx` – The index of the constant.
    ///
    /// ## Returns
    /// `Option<&Value>` – The value at the given index in the constant pool.
    pub fn get_constant(&self, idx: usize) -> Option<&Value> {
        self.constants.get(idx)
    }

    /// Gets the length of the instructions list.
    pub fn len(&self) -> usize {
        return self.instructions.len();
    }

    #[cfg(test)]
    pub fn get_pool_size(&self) -> usize {
        return self.constants.len();
    }

    #[cfg(test)]
    pub fn lines_len(&self) -> usize {
        return self.lines.len();
    }

    /// Disassembles the chunk, printing each instruction and
    /// its related information.
    ///
    /// ## Arguments
    /// * `name` – the name to print for the current chunk
    pub fn disassemble(&self, name: &str) {
        println!("== {} ==", name);

        // Incrementing the offset is handled by `disassemble_instruction`,
        // which returns the offset of the next instruction, because
        // instructions can have different sizes.
        let mut offset = 0;
        while offset < self.len() {
            offset = self.disassemble_instruction(offset);
        }
    }

    /// Disassembles a single instruction at the given offset.
    ///
    /// Prints the byte offset of the instruction, its source line (or
    /// a vertical bar when the instruction is on the same line as the
    /// previous one), and the instruction mnemonic with its operand.
    ///
    /// ## Arguments
    /// * `offset` – The byte offset of the instruction in the chunk.
    ///
    /// ## Returns
    /// `usize` – The offset of the next instruction.
    pub fn disassemble_instruction(&self, offset: usize) -> usize {
        print!("{:>04} ", offset);

        if offset > 0 && self.lines[offset] == self.lines[offset - 1] {
            print!("   | ");
        } else {
            print!("{:>4} ", self.lines[offset]);
        }

        let instruction = match self.get_op_code(offset) {
            Some(instr) => instr,
            None => {
                // A byte that does not map back to an OpCode means the
                // compiler emitted a malformed chunk.
                println!("Unknown opcode {}", self.instructions[offset]);
                return offset + 1;
            }
        };

        return match instruction {
            OpCode::Add => self.simple_instruction("ADD", offset),
            OpCode::Divide => self.simple_instruction("DIVIDE", offset),
            OpCode::Multiply => self.simple_instruction("MULTIPLY", offset),
            OpCode::Negate => self.simple_instruction("NEGATE", offset),
            OpCode::Return => self.simple_instruction("RETURN", offset),
            OpCode::Subtract => self.simple_instruction("SUBTRACT", offset),
            OpCode::LoadConstant => self.constant_instruction("LOAD_CONSTANT", offset),
        };
    }

    /// Prints an instruction that has no chunk operands.
    fn simple_instruction(&self, name: &str, offset: usize) -> usize {
        println!("{}", name);
        return offset + 1;
    }

    /// Prints an instruction whose single operand byte indexes the
    /// constant pool, together with the resolved constant.
    fn constant_instruction(&self, name: &str, offset: usize) -> usize {
        let idx = match self.get_byte(offset + 1) {
            Some(byte) => byte as usize,
            None => unreachable!("Could not get constant index byte."),
        };

        let constant = match self.get_constant(idx) {
            Some(val) => val,
            None => unreachable!("Could not get constant."),
        };

        println!("{:<16} {:>4} '{}'", name, idx, constant);
        return offset + 2;
    }
}
