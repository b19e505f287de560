//! Error types

use num_derive::FromPrimitive;
use solana_program::{decode_error::DecodeError, msg, program_error::{PrintProgramError, ProgramError}};
use thiserror::Error;

/// Errors raised while mapping between typed values and their fixed-width wire layout.
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum CodecError {
    /// 0 Buffer is smaller than the layout it should hold
    #[error("Buffer too short")]
    TooShort = 0,
}

/// Errors that may be returned by the Calculator program.
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum CalculatorError {
    /// 1 Instruction opcode is not recognized
    #[error("Unknown instruction")]
    UnknownInstruction = 1,
    /// 2 Arithmetic operation tag is not recognized
    #[error("Unknown operation")]
    UnknownOperation = 2,
    /// 3 Result does not fit into u32
    #[error("Overflow")]
    Overflow = 3,
    /// 4 Result would be negative
    #[error("Underflow")]
    Underflow = 4,
    /// 5 Divide operand is zero
    #[error("Divide by zero")]
    DivideByZero = 5,
    /// 6 Target account was not passed as writable
    #[error("Account not writable")]
    AccountNotWritable = 6,
}

impl From<CodecError> for ProgramError {
    fn from(e: CodecError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<CalculatorError> for ProgramError {
    fn from(e: CalculatorError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl PrintProgramError for CodecError {
    fn print<E>(&self) {
        msg!(&self.to_string());
    }
}

impl PrintProgramError for CalculatorError {
    fn print<E>(&self) {
        msg!(&self.to_string());
    }
}

impl<T> DecodeError<T> for CodecError {
    fn type_of() -> &'static str {
        "CodecError"
    }
}

impl<T> DecodeError<T> for CalculatorError {
    fn type_of() -> &'static str {
        "CalculatorError"
    }
}
