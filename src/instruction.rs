use crate::{Amount, account::AccountId};

/// The different types of instructions a branch can carry out
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstructionType {
    /// Opens a plain account with an initial balance
    Open,
    /// Opens an account earning interest after each withdrawal
    Savings,
    /// Opens an account without withdrawal fees
    Checking,
    /// A credit to the account
    Deposit,
    /// A debit to the account, if the balance covers it
    Withdraw,
    /// A query for the current balance of an account
    Balance,
    /// A query for the number of accounts opened at the branch
    Count,
}

/// An instruction
///
/// Instructions are orders to a branch, to open accounts or to operate on
/// one of them. They are read from CSV rows with the columns
/// `type, account, amount, rate`.
#[derive(Clone, Debug, serde::Deserialize, PartialEq, Eq)]
pub struct Instruction {
    #[serde(rename = "type")]
    instruction_type: InstructionType,
    account: Option<AccountId>,
    amount: Option<Amount>,
    rate: Option<Amount>,
}

impl Instruction {
    pub fn new(instruction_type: InstructionType) -> Self {
        Self {
            instruction_type,
            account: None,
            amount: None,
            rate: None,
        }
    }

    pub fn with_account(mut self, account: impl Into<AccountId>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_rate(mut self, rate: Amount) -> Self {
        self.rate = Some(rate);
        self
    }

    /// The type of the instruction
    pub fn instruction_type(&self) -> InstructionType {
        self.instruction_type
    }

    /// The account this instruction is for
    /// Will be empty for [`InstructionType::Count`]
    pub fn account(&self) -> Option<AccountId> {
        self.account
    }

    /// The amount
    /// Initial balance when opening an account, otherwise the deposited or withdrawn amount
    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// The interest rate in percent
    /// Only used for [`InstructionType::Savings`]
    pub fn rate(&self) -> Option<Amount> {
        self.rate
    }
}
