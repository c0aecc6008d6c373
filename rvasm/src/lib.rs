//! Assembler for the [rvcpu](../rvcpu/index.html) virtual machine.
//!
//! The main entry point is [`assemble`], which accepts a program written
//! in a RISC-V-subset assembly language and produces a loadable
//! [`Program`]: decoded instructions, the data-segment byte image, and a
//! map of global code labels for entry-point lookup. [`parse_listing`]
//! stops after the parse stage and returns the raw [`Listing`] for
//! inspection (the `rvasm` binary uses it to dump programs).
//!
//! # Assembly language
//!
//! One statement per line. Comments start with `//` and continue to the
//! end of the line; comment scanning is string-aware, so a `.string` body
//! may contain `//`. The two sections are introduced by the `.text` and
//! `.data` directives and may be re-entered at any point.
//!
//! ## Labels
//!
//! A label is declared alone on its line as `name:` and attaches to the
//! next position of the active section. Several labels may stack on one
//! position. There are two kinds:
//!
//! - **Global labels** are identifiers (`main`, `loop_end`). They must be
//!   unique across the code section and are referenced by name. Data
//!   labels live in their own namespace and are referenced by `la`.
//! - **Positional labels** are pure digits (`1:`, `42:`) and may repeat.
//!   They are referenced with a direction suffix: `1f` finds the nearest
//!   following position labeled `1`, `1b` the nearest at or before the
//!   referencing instruction.
//!
//! ## `.data` section
//!
//!  Directive  | Description                                   | Example
//! ------------|-----------------------------------------------|----------------------
//! `.word`     | 32-bit little-endian values                   | `.word 1, -2, 0xABCD`
//! `.half`     | 16-bit little-endian values                   | `.half 0x1234, 7`
//! `.byte`     | 8-bit values                                  | `.byte 1, -45, 0xFF`
//! `.zero`     | a run of zero bytes                           | `.zero 64`
//! `.string`   | NUL-terminated UTF-8, escapes `\n \t \" \\`   | `.string "hi\n"`
//! `.align`    | zero padding to a multiple of the operand     | `.align 4`
//!
//! Integer literals are decimal, hexadecimal (`0x`) or binary (`0b`),
//! optionally negative; values are masked to the element width.
//!
//! ## `.text` section
//!
//! Registers are `zero`, `sp`, `a0`-`a3` and `ra`. Memory operands are
//! written `offset(base)`, e.g. `12(sp)`, with a signed decimal offset.
//!
//!  Mnemonic                  | Effect
//! ---------------------------|--------------------------------------------------
//! `nop`                      | nothing
//! `printc rs`                | emit the low byte of `rs` to the output sink
//! `lw/lh/lhu/lb/lbu rd, m`   | load word/half/byte; `lh`/`lb` sign-extend
//! `sw/sh/sb m, rs`           | store word/half/byte
//! `la rd, label`             | load the absolute address of a data label
//! `add/sub/and/or/xor rd, rs1, rs2` | wrapping 32-bit arithmetic and bitwise ops
//! `addi/subi/andi/ori/xori rd, rs1, imm` | immediate forms
//! `sll/srl/sra rd, rs1, rs2` | shifts by the low 5 bits of `rs2`
//! `slli/srli/srai rd, rs1, imm` | shifts by immediate
//! `slt/slti rd, rs1, x`      | 1 if signed less-than, else 0
//! `sltu/sltui rd, rs1, x`    | unsigned variant
//! `mul/mulh/mulhu rd, rs1, rs2` | low/high product words
//! `div/divu/rem/remu rd, rs1, rs2` | truncating division; divisor 0 gives all-ones
//! `beq/bne/blt/bge/bltu/bgeu rs1, rs2, label` | conditional branches
//! `jal rd, label`            | `rd = pc + 1`, jump to label
//! `jalr rd, rs[, imm]`       | `rd = pc + 1`, jump to `rs + imm`
//!
//! The textual form `xor zero, zero, zero` is an in-band debugger tap: it
//! decodes to a state-dump instruction instead of an (unobservable) XOR.

mod data;
mod error;
mod instructions;
mod int_util;
mod labels;
mod source;


pub use error::AsmError;
pub use source::{Listing, Statement};

use rvcpu::Program;

pub type Result<T> = std::result::Result<T, AsmError>;

/// Assembles `input` into a loadable [`Program`].
///
/// Parsing and decoding are both load-time: every label reference is
/// bound and every operand validated before anything executes.
pub fn assemble(input: &str) -> Result<Program> {
    let listing = source::parse(input)?;
    let (code, symbols) = instructions::decode(&listing)?;
    Ok(Program::from(code, listing.data, symbols))
}

/// Parses `input` into its raw [`Listing`] without decoding operands.
pub fn parse_listing(input: &str) -> Result<Listing> {
    source::parse(input)
}
