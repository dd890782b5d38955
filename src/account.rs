use crate::{Amount, Notice, Receipt, WithdrawalLimit, WithdrawalPolicy};

/// The currency label used when none is specified
pub const DEFAULT_CURRENCY: &str = "dollars";

/// The unique identifier of an account
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(u16);

impl From<u16> for AccountId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// The operations every bank account offers
///
/// Code written against this trait works with any account, regardless of
/// how the account settles withdrawals internally.
pub trait BankAccount {
    /// The current balance
    fn balance(&self) -> Amount;

    /// Adds the specified amount to the balance
    fn deposit(&mut self, amount: Amount) -> Receipt;

    /// Takes the specified amount from the balance, if the balance covers it
    fn withdraw(&mut self, amount: Amount) -> Receipt;

    /// Reports the current balance
    fn check_balance(&self) -> Notice;
}

/// A user account
///
/// The account holds a single balance, that only changes through
/// [`Account::deposit`] and [`Account::withdraw`]. Neither the initial balance
/// nor deposited amounts are validated, so both may be negative.
///
/// Withdrawals are guarded by a [`WithdrawalLimit`] and, once completed, passed
/// on to the account's [`WithdrawalPolicy`].
///
/// The balance never overflows: every change saturates at [`Amount::MAX`]
/// and [`Amount::MIN`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    balance: Amount,
    policy: WithdrawalPolicy,
    limit: WithdrawalLimit,
    currency: String,
}

impl Account {
    /// Creates a new plain account with the specified id and initial balance
    pub fn new(id: AccountId, balance: Amount) -> Self {
        Self {
            id,
            balance,
            policy: WithdrawalPolicy::default(),
            limit: WithdrawalLimit::default(),
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }

    /// Creates a savings account, that earns `rate` percent interest after each withdrawal
    pub fn savings(id: AccountId, balance: Amount, rate: Amount) -> Self {
        Self::new(id, balance).with_policy(WithdrawalPolicy::Interest { rate })
    }

    /// Creates a checking account, that does not charge fees for withdrawals
    pub fn checking(id: AccountId, balance: Amount) -> Self {
        Self::new(id, balance).with_policy(WithdrawalPolicy::FeeFree)
    }

    /// Replaces what happens after completed withdrawals
    pub fn with_policy(mut self, policy: WithdrawalPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the rule deciding which withdrawals are covered
    pub fn with_limit(mut self, limit: WithdrawalLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Replaces the currency label used in notices
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// The identifier of the account
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// The current balance
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// The rule deciding which withdrawals are covered
    pub fn limit(&self) -> WithdrawalLimit {
        self.limit
    }

    /// The currency label used in notices
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Deposits the specified amount on the account
    pub fn deposit(&mut self, amount: Amount) -> Receipt {
        self.balance = self.balance.saturating_add(amount);

        Receipt::from(Notice::Deposited { amount, currency: self.currency.clone() })
    }

    /// Withdraws the specified amount from the account
    ///
    /// A withdrawal the balance does not cover is declined with
    /// [`Notice::InsufficientFunds`], and leaves the account untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Receipt {
        if !self.limit.permits(self.balance, amount) {
            tracing::trace!(account = ?self.id, %amount, balance = %self.balance, "withdrawal declined");
            return Receipt::from(Notice::InsufficientFunds);
        }

        let mut receipt = Receipt::from(Notice::Withdrawn { amount, currency: self.currency.clone() });
        let (balance, notice) = self.policy.settle(self.balance.saturating_sub(amount), &self.currency);
        self.balance = balance;
        if let Some(notice) = notice {
            receipt.push(notice);
        }

        receipt
    }

    /// Reports the current balance
    pub fn check_balance(&self) -> Notice {
        Notice::Balance { amount: self.balance, currency: self.currency.clone() }
    }
}

impl BankAccount for Account {
    fn balance(&self) -> Amount {
        Account::balance(self)
    }

    fn deposit(&mut self, amount: Amount) -> Receipt {
        Account::deposit(self, amount)
    }

    fn withdraw(&mut self, amount: Amount) -> Receipt {
        Account::withdraw(self, amount)
    }

    fn check_balance(&self) -> Notice {
        Account::check_balance(self)
    }
}

impl serde::Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        use serde::ser::SerializeStruct;
        let mut map = serializer.serialize_struct("Account", 3)?;

        map.serialize_field("account", &self.id)?;
        map.serialize_field("policy", self.policy.name())?;
        map.serialize_field("balance", &self.balance)?;

        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(n: i32) -> Amount {
        Amount::from_num(n)
    }

    fn account(balance: i32) -> Account {
        Account::new(AccountId(1), amount(balance))
    }

    #[test]
    fn deposit() {
        let mut account = account(1000);
        let receipt = account.deposit(amount(500));

        assert_eq!(account.balance(), amount(1500));
        assert_eq!(receipt.notices()[0].to_string(), "Deposited 500 dollars.");
    }

    #[test]
    fn negative_values_are_accepted() {
        let mut account = account(-50);
        account.deposit(amount(-25));

        assert_eq!(account.balance(), amount(-75));
    }

    #[test]
    fn withdraw() {
        let mut account = account(1000);
        let receipt = account.withdraw(amount(200));

        assert!(!receipt.is_declined());
        assert_eq!(account.balance(), amount(800));
        assert_eq!(receipt.notices()[0].to_string(), "Withdrawn 200 dollars.");
    }

    #[test]
    fn withdraw_insufficient_funds() {
        let mut account = account(1000);
        let receipt = account.withdraw(amount(1001));

        assert!(receipt.is_declined());
        assert_eq!(receipt.notices(), &[Notice::InsufficientFunds]);
        assert_eq!(account.balance(), amount(1000));
    }

    #[test]
    fn withdraw_whole_balance() {
        let mut inclusive = account(300);
        assert!(!inclusive.withdraw(amount(300)).is_declined());
        assert_eq!(inclusive.balance(), amount(0));

        let mut exclusive = account(300).with_limit(WithdrawalLimit::Exclusive);
        assert!(exclusive.withdraw(amount(300)).is_declined());
        assert_eq!(exclusive.balance(), amount(300));
    }

    #[test]
    fn check_balance() {
        let account = account(1300).with_currency("Nrs");
        assert_eq!(account.check_balance().to_string(), "Current balance: 1300 Nrs.");
    }

    #[test]
    fn savings_earn_interest_on_remaining_balance() {
        let mut account = Account::savings(AccountId(1), amount(1000), amount(5));
        let receipt = account.withdraw(amount(200));

        assert_eq!(account.balance(), amount(840));
        assert_eq!(
            receipt.notices().iter().map(ToString::to_string).collect::<Vec<_>>(),
            ["Withdrawn 200 dollars.", "Added interest of 40.00 dollars."],
        );
    }

    #[test]
    fn savings_interest_formula() {
        // (b - a) * (1 + r / 100)
        for (b, a, r, expected) in [
            (1000, 200, 5.0, 840.0),
            (2000, 1000, 10.0, 1100.0),
            (1000, 200, 2.5, 820.0),
            (400, 100, 12.5, 337.5),
            (100, 100, 3.0, 0.0),
        ] {
            let mut account = Account::savings(AccountId(1), amount(b), Amount::from_num(r));
            account.withdraw(amount(a));

            assert_eq!(account.balance(), Amount::from_num(expected), "b = {}, a = {}, r = {}", b, a, r);
        }
    }

    #[test]
    fn savings_interest_near_the_limits() {
        let balance = Amount::from_num(100_000_000_000_000i64);
        let mut account = Account::savings(AccountId(1), balance, amount(50));
        account.withdraw(amount(1));

        assert_eq!(account.balance(), Amount::from_num(149_999_999_999_998.5f64));
    }

    #[test]
    fn balance_saturates() {
        let mut account = Account::new(AccountId(1), Amount::MAX);
        account.deposit(amount(1));
        assert_eq!(account.balance(), Amount::MAX);

        let mut account = Account::new(AccountId(1), Amount::MIN);
        account.deposit(amount(-1));
        assert_eq!(account.balance(), Amount::MIN);

        let mut account = Account::new(AccountId(1), amount(0));
        assert!(!account.withdraw(Amount::MIN).is_declined());
        assert_eq!(account.balance(), Amount::MAX);
    }

    #[test]
    fn declined_savings_withdrawal_earns_nothing() {
        let mut account = Account::savings(AccountId(1), amount(100), amount(5));
        let receipt = account.withdraw(amount(500));

        assert_eq!(receipt.notices(), &[Notice::InsufficientFunds]);
        assert_eq!(account.balance(), amount(100));
    }

    #[test]
    fn checking_has_no_fees() {
        let mut account = Account::checking(AccountId(1), amount(2000));
        let receipt = account.withdraw(amount(300));

        assert_eq!(account.balance(), amount(1700));
        assert_eq!(receipt.notices().last(), Some(&Notice::NoWithdrawalFee));
    }

    #[test]
    fn usable_through_capability() {
        fn drain<A: BankAccount>(account: &mut A) -> Amount {
            let balance = account.balance();
            account.withdraw(balance);
            account.balance()
        }

        assert_eq!(drain(&mut account(640)), amount(0));
    }

    #[test]
    fn example_session() {
        let mut account = account(1000);

        account.deposit(amount(500));
        assert_eq!(account.balance(), amount(1500));
        account.withdraw(amount(200));
        assert_eq!(account.balance(), amount(1300));
        assert!(account.withdraw(amount(1500)).is_declined());
        assert_eq!(account.balance(), amount(1300));
    }
}
