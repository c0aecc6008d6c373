use rvcpu::ParseRegisterError;
use thiserror::Error;

/// Everything that can go wrong between source text and a loadable
/// program. All of these are load-time; the machine never starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AsmError {
    #[error("line {line}: unknown directive \"{directive}\"")]
    UnknownDirective { line: usize, directive: String },

    #[error("line {line}: data directive \"{directive}\" outside of a .data section")]
    DataOutsideSection { line: usize, directive: String },

    #[error("line {line}: instruction \"{mnemonic}\" outside of a .text section")]
    CodeOutsideSection { line: usize, mnemonic: String },

    #[error("line {line}: invalid label name \"{name}\"")]
    BadLabelName { line: usize, name: String },

    #[error("line {line}: {directive} expects at least one value")]
    EmptyDataList { line: usize, directive: String },

    #[error("line {line}: invalid integer literal \"{literal}\"")]
    BadIntLiteral { line: usize, literal: String },

    #[error("line {line}: immediate \"{literal}\" does not fit in 32 bits")]
    ImmediateOutOfRange { line: usize, literal: String },

    #[error("line {line}: malformed string literal")]
    BadStringLiteral { line: usize },

    #[error("line {line}: unknown escape sequence \\{escape}")]
    UnknownEscape { line: usize, escape: char },

    #[error("line {line}: .align expects a positive value")]
    BadAlignment { line: usize },

    #[error("line {line}: unknown mnemonic \"{mnemonic}\"")]
    UnknownMnemonic { line: usize, mnemonic: String },

    #[error("line {line}: {source}")]
    UnknownRegister {
        line: usize,
        #[source]
        source: ParseRegisterError,
    },

    #[error("line {line}: {mnemonic} expects {expected} operand(s), found {found}")]
    BadOperandCount {
        line: usize,
        mnemonic: String,
        expected: String,
        found: usize,
    },

    #[error("line {line}: malformed memory operand \"{operand}\"")]
    BadMemoryOperand { line: usize, operand: String },

    #[error("line {line}: numeric label reference \"{label}\" needs an 'f' or 'b' suffix")]
    MissingDirection { line: usize, label: String },

    #[error("line {line}: label \"{label}\" not found")]
    LabelNotFound { line: usize, label: String },

    #[error("duplicate global label \"{name}\"")]
    DuplicateLabel { name: String },
}
