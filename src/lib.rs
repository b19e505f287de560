pub mod state;
pub mod instruction;
pub mod entrypoint;
pub mod processor;
pub mod error;

solana_program::declare_id!("FR7EirJHK94Z38Xu87HPWTnD56jMLEwnu3YeNG7CpoDq");
