use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::{
    Account, AccountId, Amount, DEFAULT_CURRENCY, Instruction, InstructionType, Notice,
    WithdrawalLimit, WithdrawalPolicy,
};

/// Possible errors to occur while carrying out an instruction
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TellerError {
    #[error("There's no account with id {0:?}")]
    UnknownAccount(AccountId),
    #[error("There's already an account with id {0:?}")]
    DuplicateAccount(AccountId),
    #[error("The instruction is missing an account")]
    AccountNotSpecified,
    #[error("The instruction is missing an amount")]
    AmountNotSpecified,
    #[error("The savings account is missing an interest rate")]
    RateNotSpecified,
}

/// The place accounts are opened at
///
/// A branch owns all accounts opened through it, and keeps count of them.
/// Accounts are never closed, so the count only ever grows. Every branch
/// starts counting at zero.
#[derive(Debug)]
pub struct Branch {
    /// A map of all accounts, ordered by id
    accounts: BTreeMap<AccountId, Account>,
    /// The number of accounts opened so far
    opened: usize,
    /// The limit new accounts are opened with
    limit: WithdrawalLimit,
    /// The currency new accounts are opened with
    currency: String,
}

impl Default for Branch {
    fn default() -> Self {
        Self::new()
    }
}

impl Branch {
    /// Creates a new branch without any accounts
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
            opened: 0,
            limit: WithdrawalLimit::default(),
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }

    /// Replaces the withdrawal limit new accounts are opened with
    pub fn with_limit(mut self, limit: WithdrawalLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Replaces the currency label new accounts are opened with
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// The map of all current accounts
    pub fn accounts(&self) -> &BTreeMap<AccountId, Account> {
        &self.accounts
    }

    /// The account with the specified id, if it was opened here
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// The account with the specified id, if it was opened here
    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// The total number of accounts ever opened at this branch
    pub fn total_accounts(&self) -> usize {
        self.opened
    }

    /// Opens a new account with the branch's limit and currency
    pub fn open(
        &mut self,
        id: AccountId,
        balance: Amount,
        policy: WithdrawalPolicy,
    ) -> Result<&mut Account, TellerError> {
        match self.accounts.entry(id) {
            Entry::Vacant(v) => {
                let account = Account::new(id, balance)
                    .with_policy(policy)
                    .with_limit(self.limit)
                    .with_currency(self.currency.as_str());
                self.opened += 1;
                tracing::debug!(account = ?id, %balance, policy = policy.name(), "opened account");

                Ok(v.insert(account))
            }
            Entry::Occupied(_) => Err(TellerError::DuplicateAccount(id)),
        }
    }

    /// Carries out one instruction and returns the notices it produced
    pub fn handle_instruction(&mut self, instruction: Instruction) -> Result<Vec<Notice>, TellerError> {
        tracing::debug!(?instruction, "handling instruction");
        let account = || instruction.account().ok_or(TellerError::AccountNotSpecified);
        let amount = || instruction.amount().ok_or(TellerError::AmountNotSpecified);

        let notices = match instruction.instruction_type() {
            InstructionType::Count => vec![Notice::TotalAccounts(self.total_accounts())],
            InstructionType::Open => {
                self.open(account()?, amount()?, WithdrawalPolicy::Plain)?;
                vec![]
            }
            InstructionType::Savings => {
                let rate = instruction.rate().ok_or(TellerError::RateNotSpecified)?;
                self.open(account()?, amount()?, WithdrawalPolicy::Interest { rate })?;
                vec![]
            }
            InstructionType::Checking => {
                self.open(account()?, amount()?, WithdrawalPolicy::FeeFree)?;
                vec![]
            }
            InstructionType::Deposit => {
                let amount = amount()?;
                self.existing(account()?)?.deposit(amount).into_iter().collect()
            }
            InstructionType::Withdraw => {
                let amount = amount()?;
                self.existing(account()?)?.withdraw(amount).into_iter().collect()
            }
            InstructionType::Balance => vec![self.existing(account()?)?.check_balance()],
        };

        Ok(notices)
    }

    /// Carries out every instruction of a CSV script
    ///
    /// Rows that cannot be read, and instructions that fail, are skipped and
    /// logged. Returns the notices of all other instructions in order.
    pub fn handle_csv<R: std::io::Read>(&mut self, reader: &mut csv::Reader<R>) -> Vec<Notice> {
        let mut notices = vec![];

        for instruction in reader.deserialize::<Instruction>() {
            let instruction = match instruction {
                Ok(instruction) => instruction,
                Err(err) => {
                    tracing::warn!(%err, "skipped unreadable instruction");
                    continue;
                }
            };

            match self.handle_instruction(instruction) {
                Ok(produced) => notices.extend(produced),
                Err(err) => tracing::warn!(%err, "skipped instruction"),
            }
        }

        notices
    }

    fn existing(&mut self, id: AccountId) -> Result<&mut Account, TellerError> {
        self.accounts
            .get_mut(&id)
            .ok_or(TellerError::UnknownAccount(id))
    }
}
