use crate::error::AsmError;
use crate::int_util::parse_immediate;
use crate::labels::{data_label_map, LabelResolver};
use crate::source::{Listing, Statement};
use regex::Regex;
use rvcpu::constants::DATA_BASE;
use rvcpu::{AluOp, BranchCond, Instruction, LoadKind, RegisterId, StoreKind, Word};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Decodes every statement of the listing into an executable instruction,
/// binding label references along the way, and returns the code vector
/// together with the global-symbol map used for entry-point lookup.
pub(crate) fn decode(
    listing: &Listing,
) -> Result<(Vec<Instruction>, HashMap<String, Word>), AsmError> {
    let resolver = LabelResolver::new(&listing.code_labels)?;
    let data_labels = data_label_map(&listing.data_labels)?;

    let mut code = Vec::with_capacity(listing.code.len());
    for (index, statement) in listing.code.iter().enumerate() {
        code.push(decode_statement(statement, index, &resolver, &data_labels)?);
    }

    let symbols = resolver
        .globals()
        .iter()
        .map(|(name, position)| (name.to_string(), *position))
        .collect();

    Ok((code, symbols))
}

fn decode_statement(
    statement: &Statement,
    index: usize,
    resolver: &LabelResolver,
    data_labels: &HashMap<&str, u32>,
) -> Result<Instruction, AsmError> {
    let line = statement.line;
    let args = &statement.args[..];

    let instruction = match statement.mnemonic.as_str() {
        "nop" => {
            expect_args(statement, 0)?;
            Instruction::Nop
        }

        "printc" => {
            expect_args(statement, 1)?;
            Instruction::PrintChar {
                rs: register(&args[0], line)?,
            }
        }

        "lw" => decode_load(statement, LoadKind::Word)?,
        "lh" => decode_load(statement, LoadKind::Half)?,
        "lhu" => decode_load(statement, LoadKind::HalfUnsigned)?,
        "lb" => decode_load(statement, LoadKind::Byte)?,
        "lbu" => decode_load(statement, LoadKind::ByteUnsigned)?,

        "sw" => decode_store(statement, StoreKind::Word)?,
        "sh" => decode_store(statement, StoreKind::Half)?,
        "sb" => decode_store(statement, StoreKind::Byte)?,

        "la" => {
            expect_args(statement, 2)?;
            let rd = register(&args[0], line)?;
            let offset = data_labels
                .get(args[1].as_str())
                .copied()
                .ok_or_else(|| AsmError::LabelNotFound {
                    line,
                    label: args[1].clone(),
                })?;
            Instruction::LoadAddress {
                rd,
                address: DATA_BASE + offset,
            }
        }

        "add" => decode_alu(statement, AluOp::ADD)?,
        "sub" => decode_alu(statement, AluOp::SUB)?,
        "and" => decode_alu(statement, AluOp::AND)?,
        "or" => decode_alu(statement, AluOp::OR)?,
        "sll" => decode_alu(statement, AluOp::SLL)?,
        "srl" => decode_alu(statement, AluOp::SRL)?,
        "sra" => decode_alu(statement, AluOp::SRA)?,
        "slt" => decode_alu(statement, AluOp::SLT)?,
        "sltu" => decode_alu(statement, AluOp::SLTU)?,
        "mul" => decode_alu(statement, AluOp::MUL)?,
        "mulh" => decode_alu(statement, AluOp::MULH)?,
        "mulhu" => decode_alu(statement, AluOp::MULHU)?,
        "div" => decode_alu(statement, AluOp::DIV)?,
        "divu" => decode_alu(statement, AluOp::DIVU)?,
        "rem" => decode_alu(statement, AluOp::REM)?,
        "remu" => decode_alu(statement, AluOp::REMU)?,

        // The all-zero operand triple is the in-band debugger tap; any
        // other xor is an ordinary ALU instruction.
        "xor" => match decode_alu(statement, AluOp::XOR)? {
            Instruction::Alu {
                rd: RegisterId::ZERO,
                rs1: RegisterId::ZERO,
                rs2: RegisterId::ZERO,
                ..
            } => Instruction::DebugDump,
            other => other,
        },

        "addi" => decode_alu_imm(statement, AluOp::ADD)?,
        "subi" => decode_alu_imm(statement, AluOp::SUB)?,
        "andi" => decode_alu_imm(statement, AluOp::AND)?,
        "ori" => decode_alu_imm(statement, AluOp::OR)?,
        "xori" => decode_alu_imm(statement, AluOp::XOR)?,
        "slli" => decode_alu_imm(statement, AluOp::SLL)?,
        "srli" => decode_alu_imm(statement, AluOp::SRL)?,
        "srai" => decode_alu_imm(statement, AluOp::SRA)?,
        "slti" => decode_alu_imm(statement, AluOp::SLT)?,
        "sltui" => decode_alu_imm(statement, AluOp::SLTU)?,

        "beq" => decode_branch(statement, index, resolver, BranchCond::EQ)?,
        "bne" => decode_branch(statement, index, resolver, BranchCond::NE)?,
        "blt" => decode_branch(statement, index, resolver, BranchCond::LT)?,
        "bge" => decode_branch(statement, index, resolver, BranchCond::GE)?,
        "bltu" => decode_branch(statement, index, resolver, BranchCond::LTU)?,
        "bgeu" => decode_branch(statement, index, resolver, BranchCond::GEU)?,

        "jal" => {
            expect_args(statement, 2)?;
            Instruction::Jal {
                rd: register(&args[0], line)?,
                target: resolver.resolve(&args[1], index, line)?,
            }
        }

        // The offset operand is optional and defaults to 0.
        "jalr" => {
            if args.len() < 2 || args.len() > 3 {
                return Err(AsmError::BadOperandCount {
                    line,
                    mnemonic: statement.mnemonic.clone(),
                    expected: "2 or 3".to_owned(),
                    found: args.len(),
                });
            }
            Instruction::Jalr {
                rd: register(&args[0], line)?,
                base: register(&args[1], line)?,
                offset: match args.get(2) {
                    Some(literal) => parse_immediate(literal, line)?,
                    None => 0,
                },
            }
        }

        _ => {
            return Err(AsmError::UnknownMnemonic {
                line,
                mnemonic: statement.mnemonic.clone(),
            })
        }
    };

    Ok(instruction)
}

fn expect_args(statement: &Statement, expected: usize) -> Result<(), AsmError> {
    if statement.args.len() == expected {
        Ok(())
    } else {
        Err(AsmError::BadOperandCount {
            line: statement.line,
            mnemonic: statement.mnemonic.clone(),
            expected: expected.to_string(),
            found: statement.args.len(),
        })
    }
}

fn register(name: &str, line: usize) -> Result<RegisterId, AsmError> {
    name.parse()
        .map_err(|source| AsmError::UnknownRegister { line, source })
}

/// Parses the `OFFSET(BASE_REG)` operand shape, e.g. `-4(sp)`.
fn memory_operand(operand: &str, line: usize) -> Result<(i32, RegisterId), AsmError> {
    static MEM_OPERAND: OnceLock<Regex> = OnceLock::new();
    let re = MEM_OPERAND.get_or_init(|| Regex::new(r"^(-?\d+)\((\w+)\)$").unwrap());

    let malformed = || AsmError::BadMemoryOperand {
        line,
        operand: operand.to_owned(),
    };

    let captures = re.captures(operand).ok_or_else(malformed)?;
    let offset = captures[1].parse::<i32>().map_err(|_| malformed())?;
    let base = register(&captures[2], line)?;
    Ok((offset, base))
}

fn decode_load(statement: &Statement, kind: LoadKind) -> Result<Instruction, AsmError> {
    expect_args(statement, 2)?;
    let line = statement.line;
    let rd = register(&statement.args[0], line)?;
    let (offset, base) = memory_operand(&statement.args[1], line)?;
    Ok(Instruction::Load {
        kind,
        rd,
        base,
        offset,
    })
}

fn decode_store(statement: &Statement, kind: StoreKind) -> Result<Instruction, AsmError> {
    expect_args(statement, 2)?;
    let line = statement.line;
    let (offset, base) = memory_operand(&statement.args[0], line)?;
    let src = register(&statement.args[1], line)?;
    Ok(Instruction::Store {
        kind,
        base,
        offset,
        src,
    })
}

fn decode_alu(statement: &Statement, op: AluOp) -> Result<Instruction, AsmError> {
    expect_args(statement, 3)?;
    let line = statement.line;
    Ok(Instruction::Alu {
        op,
        rd: register(&statement.args[0], line)?,
        rs1: register(&statement.args[1], line)?,
        rs2: register(&statement.args[2], line)?,
    })
}

fn decode_alu_imm(statement: &Statement, op: AluOp) -> Result<Instruction, AsmError> {
    expect_args(statement, 3)?;
    let line = statement.line;
    Ok(Instruction::AluImm {
        op,
        rd: register(&statement.args[0], line)?,
        rs1: register(&statement.args[1], line)?,
        imm: parse_immediate(&statement.args[2], line)?,
    })
}

fn decode_branch(
    statement: &Statement,
    index: usize,
    resolver: &LabelResolver,
    cond: BranchCond,
) -> Result<Instruction, AsmError> {
    expect_args(statement, 3)?;
    let line = statement.line;
    Ok(Instruction::Branch {
        cond,
        rs1: register(&statement.args[0], line)?,
        rs2: register(&statement.args[1], line)?,
        target: resolver.resolve(&statement.args[2], index, line)?,
    })
}
