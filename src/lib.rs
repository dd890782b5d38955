pub use self::{
    account::{Account, AccountId, BankAccount, DEFAULT_CURRENCY},
    branch::{Branch, TellerError},
    instruction::{Instruction, InstructionType},
    notice::{Notice, Receipt},
    policy::{WithdrawalLimit, WithdrawalPolicy},
    tour::Scenario,
};

/// A signed monetary amount, with 13 fractional bits
pub type Amount = fixed::types::I51F13;

mod account;
mod branch;
mod instruction;
mod notice;
mod policy;
pub mod tour;
