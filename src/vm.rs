use crate::constants::{DATA_BASE, PC_HALTED, STACK_RESERVE};
use crate::{
    AluOp, BranchCond, Instruction, LoadKind, Memory, MemoryError, Program, RegisterFile,
    RegisterId, StoreKind, Word,
};
use std::collections::HashMap;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepResult {
    Running,
    Halted,
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Memory(#[from] MemoryError),
    #[error("program counter out of bounds: {0:#010x}")]
    PcOutOfBounds(Word),
    #[error("unknown function \"{0}\"")]
    UnknownFunction(String),
    #[error("function call while the machine is not halted")]
    NotHalted,
    #[error("writing to the output sink failed: {0}")]
    Output(#[from] io::Error),
}

/// The virtual machine: register bank, byte memory, decoded code, and a
/// program counter indexing into the code vector.
///
/// The machine starts halted (`pc == PC_HALTED`). After [`Vm::load`], each
/// [`Vm::call_function`] seeds `ra` with the halted sentinel and jumps to
/// the entry label; the callee's final `jalr zero, ra` halts the machine
/// again, so one `Vm` can serve any number of calls.
pub struct Vm {
    registers: RegisterFile,
    memory: Memory,
    code: Vec<Instruction>,
    symbols: HashMap<String, Word>,
    program_counter: Word,
    output: Box<dyn Write>,
}

impl Vm {
    /// Constructs a halted machine with `mem_size` bytes of zeroed memory,
    /// `sp` pointing `STACK_RESERVE` bytes below the end of memory, and
    /// `printc` output going to stdout.
    pub fn new(mem_size: u32) -> Vm {
        Vm::with_output(mem_size, Box::new(io::stdout()))
    }

    /// Like [`Vm::new`], but with `printc` output routed to `output`.
    pub fn with_output(mem_size: u32, output: Box<dyn Write>) -> Vm {
        let mut registers = RegisterFile::new();
        registers.write(RegisterId::SP, mem_size.saturating_sub(STACK_RESERVE));

        Vm {
            registers,
            memory: Memory::new(mem_size),
            code: Vec::new(),
            symbols: HashMap::new(),
            program_counter: PC_HALTED,
            output,
        }
    }

    /// Loads a program: materializes its data segment at [`DATA_BASE`] and
    /// takes over its code and symbol table.
    pub fn load(&mut self, program: Program) -> Result<(), ExecError> {
        let (code, data, symbols) = program.into_parts();

        if !data.is_empty() {
            self.memory
                .borrow_slice_mut(DATA_BASE, data.len() as u32)?
                .copy_from_slice(&data[..]);
        }

        self.code = code;
        self.symbols = symbols;
        Ok(())
    }

    pub fn register(&self, id: RegisterId) -> Word {
        self.registers.read(id)
    }

    /// Writes a register from the host, e.g. to pass `a0`..`a3` arguments
    /// before [`Vm::call_function`]. Writes to `zero` are discarded.
    pub fn set_register(&mut self, id: RegisterId, value: Word) {
        self.registers.write(id, value);
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn program_counter(&self) -> Word {
        self.program_counter
    }

    /// Prepares a call: requires a halted machine, stores the halted
    /// sentinel in `ra` and points the program counter at the entry label.
    pub fn call_function(&mut self, name: &str) -> Result<(), ExecError> {
        if self.program_counter != PC_HALTED {
            return Err(ExecError::NotHalted);
        }

        let target = *self
            .symbols
            .get(name)
            .ok_or_else(|| ExecError::UnknownFunction(name.to_owned()))?;

        self.registers.write(RegisterId::RA, self.program_counter);
        self.program_counter = target;
        Ok(())
    }

    /// Executes one instruction, or reports that the machine is halted.
    pub fn step(&mut self) -> Result<StepResult, ExecError> {
        if self.program_counter == PC_HALTED {
            return Ok(StepResult::Halted);
        }

        let instruction = *self
            .code
            .get(self.program_counter as usize)
            .ok_or(ExecError::PcOutOfBounds(self.program_counter))?;

        self.exec(instruction)?;
        Ok(StepResult::Running)
    }

    /// Steps until the machine halts, then flushes the output sink.
    pub fn run(&mut self) -> Result<(), ExecError> {
        while let StepResult::Running = self.step()? {}
        self.output.flush()?;
        Ok(())
    }

    fn exec(&mut self, instruction: Instruction) -> Result<(), ExecError> {
        let mut jumped = false;

        match instruction {
            Instruction::Nop => {}

            Instruction::PrintChar { rs } => {
                let byte = self.registers.read(rs) as u8;
                self.output.write_all(&[byte])?;
            }

            Instruction::DebugDump => {
                eprintln!("--- debug instruction hit ---");
                self.dump_state();
                eprintln!("-----------------------------");
            }

            Instruction::Load {
                kind,
                rd,
                base,
                offset,
            } => {
                let address = self.registers.read(base).wrapping_add(offset as u32);
                let value = match kind {
                    LoadKind::Word => self.memory.read_word(address)?,
                    LoadKind::Half => self.memory.read_half(address)? as i16 as u32,
                    LoadKind::HalfUnsigned => u32::from(self.memory.read_half(address)?),
                    LoadKind::Byte => self.memory.read_byte(address)? as i8 as u32,
                    LoadKind::ByteUnsigned => u32::from(self.memory.read_byte(address)?),
                };
                self.registers.write(rd, value);
            }

            Instruction::Store {
                kind,
                base,
                offset,
                src,
            } => {
                let address = self.registers.read(base).wrapping_add(offset as u32);
                let value = self.registers.read(src);
                match kind {
                    StoreKind::Word => self.memory.write_word(address, value)?,
                    StoreKind::Half => self.memory.write_half(address, value as u16)?,
                    StoreKind::Byte => self.memory.write_byte(address, value as u8)?,
                }
            }

            Instruction::LoadAddress { rd, address } => {
                self.registers.write(rd, address);
            }

            Instruction::Alu { op, rd, rs1, rs2 } => {
                let value = alu(op, self.registers.read(rs1), self.registers.read(rs2));
                self.registers.write(rd, value);
            }

            Instruction::AluImm { op, rd, rs1, imm } => {
                let value = alu(op, self.registers.read(rs1), imm);
                self.registers.write(rd, value);
            }

            Instruction::Branch {
                cond,
                rs1,
                rs2,
                target,
            } => {
                if branch_taken(cond, self.registers.read(rs1), self.registers.read(rs2)) {
                    self.program_counter = target;
                    jumped = true;
                }
            }

            Instruction::Jal { rd, target } => {
                self.link(rd);
                self.program_counter = target;
                jumped = true;
            }

            Instruction::Jalr { rd, base, offset } => {
                let target = self.registers.read(base).wrapping_add(offset);
                self.link(rd);
                self.program_counter = target;
                jumped = true;
            }
        }

        if !jumped {
            self.program_counter = self.program_counter.wrapping_add(1);
        }

        Ok(())
    }

    fn link(&mut self, rd: RegisterId) {
        self.registers
            .write(rd, self.program_counter.wrapping_add(1));
    }

    /// Dumps registers and the program counter to stderr.
    pub fn dump_state(&self) {
        eprintln!("Registers:");
        for id in RegisterId::ALL {
            let value = self.registers.read(id);
            eprintln!("  {:<4} {:#010x} ({})", id.name(), value, value as i32);
        }
        if self.program_counter == PC_HALTED {
            eprintln!("Program counter: halted");
        } else {
            eprintln!("Program counter: {}", self.program_counter);
        }
    }
}

fn alu(op: AluOp, a: Word, b: Word) -> Word {
    match op {
        AluOp::ADD => a.wrapping_add(b),
        AluOp::SUB => a.wrapping_sub(b),
        AluOp::AND => a & b,
        AluOp::OR => a | b,
        AluOp::XOR => a ^ b,
        AluOp::SLL => a.wrapping_shl(b),
        AluOp::SRL => a.wrapping_shr(b),
        AluOp::SRA => (a as i32).wrapping_shr(b) as u32,
        AluOp::SLT => (((a as i32) < (b as i32)) as Word),
        AluOp::SLTU => ((a < b) as Word),
        AluOp::MUL => (a as i32).wrapping_mul(b as i32) as u32,
        AluOp::MULH => ((i64::from(a as i32) * i64::from(b as i32)) >> 32) as u32,
        AluOp::MULHU => ((u64::from(a) * u64::from(b)) >> 32) as u32,
        AluOp::DIV => {
            if b == 0 {
                Word::MAX
            } else {
                (a as i32).wrapping_div(b as i32) as u32
            }
        }
        AluOp::DIVU => {
            if b == 0 {
                Word::MAX
            } else {
                a / b
            }
        }
        AluOp::REM => {
            if b == 0 {
                Word::MAX
            } else {
                (a as i32).wrapping_rem(b as i32) as u32
            }
        }
        AluOp::REMU => {
            if b == 0 {
                Word::MAX
            } else {
                a % b
            }
        }
    }
}

fn branch_taken(cond: BranchCond, a: Word, b: Word) -> bool {
    match cond {
        BranchCond::EQ => a == b,
        BranchCond::NE => a != b,
        BranchCond::LT => (a as i32) < (b as i32),
        BranchCond::GE => (a as i32) >= (b as i32),
        BranchCond::LTU => a < b,
        BranchCond::GEU => a >= b,
    }
}
