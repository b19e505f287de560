use arrayref::{array_ref, array_refs};
use borsh::{BorshDeserialize, BorshSerialize};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
};
use std::mem::size_of;
use crate::error::{CalculatorError, CodecError};

/// Opcode of the `CalcType` instruction family.
pub const CALC_OPCODE: u8 = 0;

pub const INSTRUCTION_SIZE: usize = size_of::<u8>() + size_of::<CalcOperation>() + size_of::<u32>();

/// Arithmetic applied to the stored value, tagged on the wire in declaration order.
#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, FromPrimitive, PartialEq, Eq, Debug, Clone, Copy)]
pub enum CalcOperation {
    /// 0 `value + operand`
    Increment,
    /// 1 `value - operand`
    Decrement,
    /// 2 `value * operand`
    Multiply,
    /// 3 `value / operand`, truncating
    Divide,
}

#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone)]
pub enum CalculatorInstruction {
    /// Apply an arithmetic operation to the stored value
    ///
    /// Accounts expected by this instruction:
    ///
    ///   0. `[writable,signer]` The calculator account, owned by this program
    Calc {
        operation: CalcOperation,
        operand: u32,
    },
}

impl CalculatorInstruction {
    /// Decodes an instruction from the head of `input`. Trailing bytes are ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if input.len() < INSTRUCTION_SIZE {
            return Err(CodecError::TooShort.into());
        }

        let input = array_ref![input, 0, INSTRUCTION_SIZE];
        let (&[opcode], &[tag], operand) = array_refs![input, 1, 1, 4];

        match opcode {
            CALC_OPCODE => {
                let operation = CalcOperation::from_u8(tag)
                    .ok_or(CalculatorError::UnknownOperation)?;
                Ok(CalculatorInstruction::Calc {
                    operation,
                    operand: u32::from_le_bytes(*operand),
                })
            }
            _ => Err(CalculatorError::UnknownInstruction.into()),
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(INSTRUCTION_SIZE);
        match self {
            CalculatorInstruction::Calc { operation, operand } => {
                buf.push(CALC_OPCODE);
                buf.push(*operation as u8);
                buf.extend_from_slice(&operand.to_le_bytes());
            }
        }
        buf
    }
}

/// Creates a `Calc` instruction against `account`.
pub fn calculate(
    program_id: &Pubkey,
    account: &Pubkey,
    operation: CalcOperation,
    operand: u32,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new(*account, true)],
        data: CalculatorInstruction::Calc { operation, operand }.pack(),
    }
}

pub fn increment(program_id: &Pubkey, account: &Pubkey, operand: u32) -> Instruction {
    calculate(program_id, account, CalcOperation::Increment, operand)
}

pub fn decrement(program_id: &Pubkey, account: &Pubkey, operand: u32) -> Instruction {
    calculate(program_id, account, CalcOperation::Decrement, operand)
}

pub fn multiply(program_id: &Pubkey, account: &Pubkey, operand: u32) -> Instruction {
    calculate(program_id, account, CalcOperation::Multiply, operand)
}

pub fn divide(program_id: &Pubkey, account: &Pubkey, operand: u32) -> Instruction {
    calculate(program_id, account, CalcOperation::Divide, operand)
}
