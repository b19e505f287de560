use calculator::{
    error::CalculatorError,
    instruction::{decrement, divide, increment, multiply},
    processor::process_instruction,
    state::{AccountState, ACCOUNT_STATE_SIZE},
};
use solana_program::{instruction::InstructionError, pubkey::Pubkey, system_instruction};
use solana_program_test::*;
use solana_sdk::{
    signature::{Keypair, Signer},
    transaction::{Transaction, TransactionError},
};

async fn read_value(banks_client: &mut BanksClient, account: &Pubkey) -> u32 {
    let account = banks_client
        .get_account(*account)
        .await
        .unwrap()
        .expect("calculator account not found");
    assert!(account.lamports > 0);
    assert_eq!(account.data.len(), ACCOUNT_STATE_SIZE);
    AccountState::unpack(&account.data).unwrap().value
}

async fn setup() -> (BanksClient, Keypair, Keypair, Pubkey) {
    let program_id = calculator::id();
    let program_test = ProgramTest::new("calculator", program_id, processor!(process_instruction));
    let (mut banks_client, payer, recent_blockhash) = program_test.start().await;

    let calc_account = Keypair::new();
    let rent = banks_client.get_rent().await.unwrap();
    let mut transaction = Transaction::new_with_payer(
        &[system_instruction::create_account(
            &payer.pubkey(),
            &calc_account.pubkey(),
            rent.minimum_balance(ACCOUNT_STATE_SIZE),
            ACCOUNT_STATE_SIZE as u64,
            &program_id,
        )],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[&payer, &calc_account], recent_blockhash);
    banks_client.process_transaction(transaction).await.unwrap();

    (banks_client, payer, calc_account, program_id)
}

#[tokio::test]
async fn test_calculator_sequence() {
    let (mut banks_client, payer, calc_account, program_id) = setup().await;
    let calc_key = calc_account.pubkey();

    assert_eq!(read_value(&mut banks_client, &calc_key).await, 0);

    let steps = [
        (increment(&program_id, &calc_key, 20), 20),
        (decrement(&program_id, &calc_key, 10), 20 - 10),
        (multiply(&program_id, &calc_key, 10), 10 * 10),
        (divide(&program_id, &calc_key, 10), 100 / 10),
    ];
    for (instruction, expected) in steps {
        let recent_blockhash = banks_client.get_latest_blockhash().await.unwrap();
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
        transaction.sign(&[&payer, &calc_account], recent_blockhash);
        banks_client.process_transaction(transaction).await.unwrap();

        assert_eq!(read_value(&mut banks_client, &calc_key).await, expected);
    }
}

#[tokio::test]
async fn test_failed_batch_has_no_effect() {
    let (mut banks_client, payer, calc_account, program_id) = setup().await;
    let calc_key = calc_account.pubkey();

    let recent_blockhash = banks_client.get_latest_blockhash().await.unwrap();
    let mut transaction = Transaction::new_with_payer(
        &[
            increment(&program_id, &calc_key, 5),
            divide(&program_id, &calc_key, 0),
        ],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[&payer, &calc_account], recent_blockhash);
    let err = banks_client
        .process_transaction(transaction)
        .await
        .unwrap_err()
        .unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(
            1,
            InstructionError::Custom(CalculatorError::DivideByZero as u32)
        )
    );

    assert_eq!(read_value(&mut banks_client, &calc_key).await, 0);
}

#[tokio::test]
async fn test_decrement_below_zero_fails() {
    let (mut banks_client, payer, calc_account, program_id) = setup().await;
    let calc_key = calc_account.pubkey();

    let recent_blockhash = banks_client.get_latest_blockhash().await.unwrap();
    let mut transaction = Transaction::new_with_payer(
        &[decrement(&program_id, &calc_key, 1)],
        Some(&payer.pubkey()),
    );
    transaction.sign(&[&payer, &calc_account], recent_blockhash);
    assert!(banks_client.process_transaction(transaction).await.is_err());

    assert_eq!(read_value(&mut banks_client, &calc_key).await, 0);
}
