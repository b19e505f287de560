use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::program_error::ProgramError;
use std::mem::size_of;
use crate::error::CodecError;

/// Bytes of account storage the program needs. Callers size the account with this
/// before handing it over to the program.
pub const ACCOUNT_STATE_SIZE: usize = size_of::<AccountState>();

#[repr(C)]
#[derive(BorshSerialize, BorshDeserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct AccountState {
    // calc_val
    pub value: u32,
}

impl AccountState {
    pub fn new(value: u32) -> Self {
        AccountState { value }
    }

    /// Reads the state from the head of `input`, anything past the layout is ignored.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        if input.len() < ACCOUNT_STATE_SIZE {
            return Err(CodecError::TooShort.into());
        }

        let state: AccountState = BorshDeserialize::deserialize(&mut &input[..ACCOUNT_STATE_SIZE])?;
        Ok(state)
    }

    /// Overwrites the head of `output` with the encoded state.
    pub fn pack_into(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        if output.len() < ACCOUNT_STATE_SIZE {
            return Err(CodecError::TooShort.into());
        }

        self.serialize(&mut &mut output[..ACCOUNT_STATE_SIZE])?;
        Ok(())
    }
}
