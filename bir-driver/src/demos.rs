//! Built-in programs for exercising the backend without a frontend

use bir_common::CompilerError;
use bir_llir::{Block, Constant, Function, Terminator, Type, Value};
use bir_wat::{Func, ValueType, Var};
use crate::Program;

pub const DEMO_NAMES: [&str; 2] = ["aggregate", "vector"];

/// Build a demo program by name
pub fn demo(name: &str) -> Result<Program, CompilerError> {
    match name {
        "aggregate" => aggregate_program(),
        "vector" => vector_program(),
        _ => Err(format!("Unknown demo: {name}").into()),
    }
}

/// Reads and rewrites fields of `{[4 x i32], double*}`
pub fn aggregate_program() -> Result<Program, CompilerError> {
    let record = Type::struct_of(vec![Type::array(4, Type::I32), Type::pointer(Type::DOUBLE)]);

    let mut func = Function::new("bump_third", record.clone());
    let agg = func.new_param("agg", record);
    let mut entry = Block::named("entry");
    let third = entry.new_extract_value(&agg, &[0, 2])?;
    entry.new_extract_value(&agg, &[1, 0])?;
    let updated = entry.new_insert_value(&agg, &third, &[0, 3])?;
    entry.set_term(Terminator::Ret(Some(updated)));
    func.add_block(entry);

    let mut llir = bir_llir::Module::new("aggregate");
    llir.add_function(func);

    let mut wasm_func = Func::new("bump_third").exported_as("bump_third");
    wasm_func.add_param(Var::i32("agg"))?;
    wasm_func.add_result(ValueType::I32);
    wasm_func.add_local(Var::i32("third"))?;
    wasm_func.add_local(Var::f64("scale"))?;
    let mut wat = bir_wat::Module::new("aggregate");
    wat.add_func(wasm_func)?;

    Ok(Program { name: "aggregate".to_string(), llir, wat })
}

/// Swaps the two halves of a `<4 x float>`
pub fn vector_program() -> Result<Program, CompilerError> {
    let vec4 = Type::vector(4, Type::FLOAT);

    let mut func = Function::new("rotate", vec4.clone());
    let v = func.new_param("v", vec4.clone());
    let mut entry = Block::named("entry");
    let first = entry.new_extract_element(&v, &Constant::i32(0).into())?;
    let undef: Value = Constant::Undef(vec4).into();
    let rotated = entry.new_shuffle_vector(&v, &undef, &Constant::mask(&[2, 3, 0, 1]).into())?;
    let result = entry.new_insert_element(&rotated, &first, &Constant::i32(3).into())?;
    entry.set_term(Terminator::Ret(Some(result)));
    func.add_block(entry);

    let mut llir = bir_llir::Module::new("vector");
    llir.add_function(func);

    let mut wasm_func = Func::new("rotate");
    wasm_func.add_param(Var::u32("v_ptr"))?;
    wasm_func.add_local(Var::f32("lane"))?;
    wasm_func.add_local(Var::u64("mask"))?;
    let mut wat = bir_wat::Module::new("vector");
    wat.add_func(wasm_func)?;

    Ok(Program { name: "vector".to_string(), llir, wat })
}
