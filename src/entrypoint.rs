#![cfg(all(target_arch = "bpf", not(feature = "no-entrypoint")))]

use solana_program::{
    account_info::AccountInfo,
    entrypoint,
    entrypoint::ProgramResult,
    pubkey::Pubkey,
    program_error::{PrintProgramError, ProgramError},
};
use num_traits::FromPrimitive;
use crate::processor;
use crate::error::{CalculatorError, CodecError};

entrypoint!(process_instruction);

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    match processor::process_instruction(program_id, accounts, instruction_data) {
        Ok(()) => Ok(()),
        Err(e) => {
            // catch the error so we can print it
            match e {
                ProgramError::Custom(code) if CodecError::from_u32(code).is_some() => {
                    e.print::<CodecError>()
                }
                _ => e.print::<CalculatorError>(),
            }
            Err(e)
        }
    }
}
