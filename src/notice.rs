use std::fmt;

use crate::Amount;

/// A human readable message emitted by an account operation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Deposited { amount: Amount, currency: String },
    Withdrawn { amount: Amount, currency: String },
    /// The withdrawal was declined, and the balance left untouched
    InsufficientFunds,
    InterestAdded { amount: Amount, currency: String },
    NoWithdrawalFee,
    Balance { amount: Amount, currency: String },
    TotalAccounts(usize),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposited { amount, currency } => write!(f, "Deposited {} {}.", amount, currency),
            Self::Withdrawn { amount, currency } => write!(f, "Withdrawn {} {}.", amount, currency),
            Self::InsufficientFunds => f.write_str("Insufficient funds."),
            Self::InterestAdded { amount, currency } => {
                write!(f, "Added interest of {:.2} {}.", amount.to_num::<f64>(), currency)
            }
            Self::NoWithdrawalFee => f.write_str("No fees for withdrawing from a checking account."),
            Self::Balance { amount, currency } => write!(f, "Current balance: {} {}.", amount, currency),
            Self::TotalAccounts(count) => write!(f, "Total number of accounts: {}", count),
        }
    }
}

/// The notices emitted by a single deposit or withdrawal
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Receipt {
    notices: Vec<Notice>,
}

impl Receipt {
    pub(crate) fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Whether the operation was turned down for lack of funds
    pub fn is_declined(&self) -> bool {
        self.notices.contains(&Notice::InsufficientFunds)
    }
}

impl From<Notice> for Receipt {
    fn from(notice: Notice) -> Self {
        Self { notices: vec![notice] }
    }
}

impl IntoIterator for Receipt {
    type Item = Notice;
    type IntoIter = std::vec::IntoIter<Notice>;

    fn into_iter(self) -> Self::IntoIter {
        self.notices.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(amount: i32) -> (Amount, String) {
        (Amount::from_num(amount), "dollars".to_owned())
    }

    #[test]
    fn messages() {
        let (amount, currency) = dollars(500);
        assert_eq!(
            Notice::Deposited { amount, currency: currency.clone() }.to_string(),
            "Deposited 500 dollars.",
        );
        assert_eq!(
            Notice::Balance { amount: Amount::from_num(1300), currency }.to_string(),
            "Current balance: 1300 dollars.",
        );
        assert_eq!(Notice::InsufficientFunds.to_string(), "Insufficient funds.");
        assert_eq!(Notice::TotalAccounts(3).to_string(), "Total number of accounts: 3");
    }

    #[test]
    fn interest_is_shown_with_two_decimals() {
        let (amount, currency) = dollars(40);
        assert_eq!(
            Notice::InterestAdded { amount, currency }.to_string(),
            "Added interest of 40.00 dollars.",
        );
    }

    #[test]
    fn declined_receipt() {
        assert!(Receipt::from(Notice::InsufficientFunds).is_declined());
        assert!(!Receipt::from(Notice::NoWithdrawalFee).is_declined());
    }
}
