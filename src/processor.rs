use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult, msg,
    program_error::ProgramError,
    pubkey::Pubkey,
};
use crate::{
    instruction::{CalcOperation, CalculatorInstruction},
    state::AccountState,
    error::CalculatorError,
};

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    input: &[u8],
) -> ProgramResult {
    let instruction = CalculatorInstruction::unpack(input)?;
    match instruction {
        CalculatorInstruction::Calc { operation, operand } => {
            msg!("Instruction: Calc {:?} {}", operation, operand);
            process_calc(program_id, accounts, operation, operand)
        }
    }
}

pub fn process_calc(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    operation: CalcOperation,
    operand: u32,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();
    let calc_info = next_account_info(account_info_iter)?;

    if calc_info.owner != program_id {
        msg!("Account is not owned by this program");
        return Err(ProgramError::IncorrectProgramId);
    }

    if !calc_info.is_writable {
        return Err(CalculatorError::AccountNotWritable.into());
    }

    msg!("Called by: {:?}", calc_info.key);

    let state = AccountState::unpack(&calc_info.data.borrow())?;
    msg!("Account data before: {:?}", state);

    // Storage is only touched once the transition is known to succeed.
    let state = apply(&CalculatorInstruction::Calc { operation, operand }, state)?;
    msg!("Account data after: {:?}", state);

    state.pack_into(&mut calc_info.data.borrow_mut())?;
    Ok(())
}

/// Computes the state produced by `instruction`. Overflow and underflow are
/// errors, the value never wraps or saturates.
pub fn apply(
    instruction: &CalculatorInstruction,
    state: AccountState,
) -> Result<AccountState, CalculatorError> {
    match *instruction {
        CalculatorInstruction::Calc { operation, operand } => {
            let value = match operation {
                CalcOperation::Increment => state.value
                    .checked_add(operand)
                    .ok_or(CalculatorError::Overflow)?,
                CalcOperation::Decrement => state.value
                    .checked_sub(operand)
                    .ok_or(CalculatorError::Underflow)?,
                CalcOperation::Multiply => state.value
                    .checked_mul(operand)
                    .ok_or(CalculatorError::Overflow)?,
                CalcOperation::Divide => {
                    if operand == 0 {
                        msg!("Cannot divide by zero");
                        return Err(CalculatorError::DivideByZero);
                    }
                    state.value / operand
                }
            };
            Ok(AccountState::new(value))
        }
    }
}
