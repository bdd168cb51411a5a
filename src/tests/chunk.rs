use crate::bytecode::{Chunk, OpCode};
use crate::values::Value;

#[test]
fn instructions_and_lines_stay_parallel() {
    let mut chunk = Chunk::new();

    chunk.push_op_code(OpCode::LoadConstant, 1);
    chunk.write(0, 1);
    chunk.push_op_code(OpCode::Return, 2);

    assert_eq!(chunk.len(), 3);
    assert_eq!(chunk.len(), chunk.lines_len());

    assert_eq!(chunk.get_line(0), Some(1));
    assert_eq!(chunk.get_line(1), Some(1));
    assert_eq!(chunk.get_line(2), Some(2));
}

#[test]
fn op_codes_round_trip_through_bytes() {
    let mut chunk = Chunk::new();

    chunk.push_op_code(OpCode::Add, 1);
    chunk.push_op_code(OpCode::Negate, 1);
    chunk.push_op_code(OpCode::Return, 1);

    assert_eq!(chunk.get_op_code(0), Some(OpCode::Add));
    assert_eq!(chunk.get_op_code(1), Some(OpCode::Negate));
    assert_eq!(chunk.get_op_code(2), Some(OpCode::Return));
}

#[test]
fn bytes_outside_the_op_code_range_do_not_decode() {
    let mut chunk = Chunk::new();
    chunk.write(0xFF, 1);

    assert_eq!(chunk.get_op_code(0), None);

    // Reading past the end of the chunk does not decode either.
    assert_eq!(chunk.get_op_code(1), None);
    assert_eq!(chunk.get_byte(1), None);
}

#[test]
fn constants_get_sequential_indices() {
    let mut chunk = Chunk::new();

    for i in 0..10 {
        match chunk.add_constant(Value::Float(i as f64)) {
            Ok(idx) => assert_eq!(idx as usize, i),
            Err(()) => panic!("The pool should not be full yet."),
        }
    }

    assert_eq!(chunk.get_pool_size(), 10);
    assert_eq!(chunk.get_constant(3), Some(&Value::Float(3.0)));
    assert_eq!(chunk.get_constant(10), None);
}

#[test]
fn constant_pool_is_capped_at_one_operand_byte() {
    let mut chunk = Chunk::new();

    // Indices 0 through 255 are addressable with one byte.
    for i in 0..256 {
        if chunk.add_constant(Value::Float(i as f64)).is_err() {
            panic!("The pool should hold 256 constants.");
        }
    }

    // The 257th constant would need a second operand byte.
    match chunk.add_constant(Value::Float(256.0)) {
        Ok(_) => panic!("The pool should be full."),
        Err(()) => {}
    }

    assert_eq!(chunk.get_pool_size(), 256);
}
