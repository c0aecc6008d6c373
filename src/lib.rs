//! Register-level virtual machine for a RISC-V-subset assembly language.
//!
//! The machine executes a [`Program`]: a vector of decoded [`Instruction`]s
//! indexed by the program counter, a data segment materialized in byte
//! memory at [`constants::DATA_BASE`], and a map of global code labels used
//! as entry points. Programs are produced by the `rvasm` crate.
//!
//! A [`Vm`] runs one function call at a time: [`Vm::call_function`] points
//! the program counter at a label and stashes the halted sentinel in `ra`,
//! so the callee's final `jalr zero, ra` halts the machine cleanly.

pub mod constants;

mod instruction;
mod memory;
mod program;
mod register;
mod vm;

pub use instruction::{AluOp, BranchCond, Instruction, LoadKind, StoreKind};
pub use memory::{Memory, MemoryError};
pub use program::Program;
pub use register::{ParseRegisterError, RegisterFile, RegisterId};
pub use vm::{ExecError, StepResult, Vm};

/// Machine word. All register contents and ALU results are 32-bit.
pub type Word = u32;

/// Byte order of the memory image.
pub type Endian = byteorder::LittleEndian;
