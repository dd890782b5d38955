use fixed::types::I64F64;

use crate::{Amount, Notice};

/// The rule deciding whether the balance covers a withdrawal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WithdrawalLimit {
    /// The whole balance can be withdrawn (`amount <= balance`)
    #[default]
    Inclusive,
    /// Some funds always have to stay on the account (`amount < balance`)
    Exclusive,
}

impl WithdrawalLimit {
    /// Whether `balance` covers a withdrawal of `amount`
    pub fn permits(self, balance: Amount, amount: Amount) -> bool {
        match self {
            Self::Inclusive => amount <= balance,
            Self::Exclusive => amount < balance,
        }
    }
}

impl std::str::FromStr for WithdrawalLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inclusive" => Ok(Self::Inclusive),
            "exclusive" => Ok(Self::Exclusive),
            other => Err(format!("unknown withdrawal limit `{}`", other)),
        }
    }
}

/// What happens after funds were successfully withdrawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WithdrawalPolicy {
    #[default]
    Plain,
    /// Savings: the remaining balance earns `rate` percent interest
    Interest { rate: Amount },
    /// Checking: withdrawals are free of charge
    FeeFree,
}

impl WithdrawalPolicy {
    /// Settles a completed withdrawal
    ///
    /// `balance` is the balance *after* the withdrawn amount was deducted.
    /// Returns the new balance, and possibly a notice to pass on.
    ///
    /// Interest and the resulting balance saturate at [`Amount::MAX`] and
    /// [`Amount::MIN`].
    pub fn settle(self, balance: Amount, currency: &str) -> (Amount, Option<Notice>) {
        match self {
            Self::Plain => (balance, None),
            Self::Interest { rate } => {
                // the product is taken in 64 integer bits, so it can exceed the
                // range of an amount as long as the interest itself does not
                let interest = I64F64::from_num(balance)
                    .saturating_mul(I64F64::from_num(rate))
                    / I64F64::from_num(100);
                let interest = Amount::saturating_from_num(interest);
                let notice = Notice::InterestAdded { amount: interest, currency: currency.to_owned() };
                (balance.saturating_add(interest), Some(notice))
            }
            Self::FeeFree => (balance, Some(Notice::NoWithdrawalFee)),
        }
    }

    /// The kind of account this policy belongs to
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Interest { .. } => "savings",
            Self::FeeFree => "checking",
        }
    }
}
