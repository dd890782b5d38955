//! Guided walkthroughs of the account types
//!
//! Each scenario runs a fixed sequence of operations and collects every
//! notice produced along the way.

use crate::{
    Account, AccountId, Amount, BankAccount, Branch, Notice, TellerError, WithdrawalLimit,
    WithdrawalPolicy,
};

/// The available walkthroughs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// A plain account, only reachable through its operations
    Encapsulation,
    /// A savings account, adding interest to every withdrawal
    Inheritance,
    /// A branch counting the accounts opened at it
    Static,
    /// A plain account, used only through [`BankAccount`], depositing silently
    Abstraction,
    /// Savings and checking accounts handling the same withdrawal differently
    Polymorphism,
}

impl Scenario {
    /// Every scenario, in walkthrough order
    pub const ALL: [Scenario; 5] = [
        Self::Encapsulation,
        Self::Inheritance,
        Self::Static,
        Self::Abstraction,
        Self::Polymorphism,
    ];

    /// The name the scenario is selected by
    pub fn name(self) -> &'static str {
        match self {
            Self::Encapsulation => "encapsulation",
            Self::Inheritance => "inheritance",
            Self::Static => "static",
            Self::Abstraction => "abstraction",
            Self::Polymorphism => "polymorphism",
        }
    }

    /// Runs the scenario and returns the produced notices in order
    pub fn run(self) -> Result<Vec<Notice>, TellerError> {
        let notices = match self {
            Self::Encapsulation => encapsulation(),
            Self::Inheritance => inheritance(),
            Self::Static => counted()?,
            Self::Abstraction => {
                let mut account = Account::new(AccountId::from(1), amount(1000));
                session(&mut account, 150)
            }
            Self::Polymorphism => polymorphism(),
        };

        Ok(notices)
    }
}

impl std::str::FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| format!("unknown scenario `{}`", s))
    }
}

fn amount(n: i32) -> Amount {
    Amount::from_num(n)
}

fn encapsulation() -> Vec<Notice> {
    let mut account = Account::new(AccountId::from(1), amount(1000));
    let mut notices = vec![];

    notices.extend(account.deposit(amount(500)));
    notices.push(account.check_balance());
    notices.extend(account.withdraw(amount(200)));
    notices.push(account.check_balance());
    notices.extend(account.withdraw(amount(1500)));

    notices
}

fn inheritance() -> Vec<Notice> {
    let mut account = Account::savings(AccountId::from(1), amount(1000), amount(5));
    let mut notices = vec![];

    notices.extend(account.deposit(amount(1000)));
    notices.push(account.check_balance());
    notices.extend(account.withdraw(amount(1000)));
    notices.push(account.check_balance());

    notices
}

fn counted() -> Result<Vec<Notice>, TellerError> {
    let mut branch = Branch::new()
        .with_limit(WithdrawalLimit::Exclusive)
        .with_currency("Nrs");
    let account = branch.open(AccountId::from(1), amount(1000), WithdrawalPolicy::Plain)?;
    let mut notices = vec![];

    notices.extend(account.deposit(amount(200)));
    notices.push(account.check_balance());
    notices.extend(account.withdraw(amount(100)));
    notices.push(account.check_balance());
    notices.push(Notice::TotalAccounts(branch.total_accounts()));

    Ok(notices)
}

/// Works with any account, knowing nothing but its operations
///
/// Deposits are made without reporting them.
fn session<A: BankAccount>(account: &mut A, last_withdrawal: i32) -> Vec<Notice> {
    let mut notices = vec![];

    account.deposit(amount(500));
    notices.push(account.check_balance());
    notices.extend(account.withdraw(amount(200)));
    notices.push(account.check_balance());
    notices.extend(account.withdraw(amount(last_withdrawal)));

    notices
}

fn polymorphism() -> Vec<Notice> {
    let mut savings = Account::savings(AccountId::from(1), amount(1000), amount(5));
    let mut checking = Account::checking(AccountId::from(2), amount(2000));

    savings
        .withdraw(amount(200))
        .into_iter()
        .chain(checking.withdraw(amount(300)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(scenario: Scenario) -> Vec<String> {
        scenario
            .run()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn encapsulation() {
        assert_eq!(
            messages(Scenario::Encapsulation),
            [
                "Deposited 500 dollars.",
                "Current balance: 1500 dollars.",
                "Withdrawn 200 dollars.",
                "Current balance: 1300 dollars.",
                "Insufficient funds.",
            ],
        );
    }

    #[test]
    fn inheritance() {
        assert_eq!(
            messages(Scenario::Inheritance),
            [
                "Deposited 1000 dollars.",
                "Current balance: 2000 dollars.",
                "Withdrawn 1000 dollars.",
                "Added interest of 50.00 dollars.",
                "Current balance: 1050 dollars.",
            ],
        );
    }

    #[test]
    fn counted() {
        assert_eq!(
            messages(Scenario::Static),
            [
                "Deposited 200 Nrs.",
                "Current balance: 1200 Nrs.",
                "Withdrawn 100 Nrs.",
                "Current balance: 1100 Nrs.",
                "Total number of accounts: 1",
            ],
        );
    }

    #[test]
    fn abstraction() {
        assert_eq!(
            messages(Scenario::Abstraction),
            [
                "Current balance: 1500 dollars.",
                "Withdrawn 200 dollars.",
                "Current balance: 1300 dollars.",
                "Withdrawn 150 dollars.",
            ],
        );
    }

    #[test]
    fn polymorphism() {
        assert_eq!(
            messages(Scenario::Polymorphism),
            [
                "Withdrawn 200 dollars.",
                "Added interest of 40.00 dollars.",
                "Withdrawn 300 dollars.",
                "No fees for withdrawing from a checking account.",
            ],
        );
    }

    #[test]
    fn parse_scenario() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.name().parse(), Ok(scenario));
        }
        assert!("recursion".parse::<Scenario>().is_err());
    }
}
