//! Budget-constrained selection of opportunities.
//!
//! Opportunities are ranked by profit and accepted greedily while the
//! cumulative buy cost stays within budget. Selection stops at the first
//! candidate that does not fit; cheaper, lower-profit candidates after it are
//! never considered. This is greedy-by-profit, not an optimal subset-sum.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::{round_report, Budget, Price};
use super::opportunity::Opportunity;

/// Opportunities chosen under a budget, highest profit first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    budget: Budget,
    opportunities: Vec<Opportunity>,
    total_profit: Price,
}

impl Selection {
    /// The budget this selection was built for.
    #[must_use]
    pub const fn budget(&self) -> Budget {
        self.budget
    }

    /// Selected opportunities, descending by profit.
    #[must_use]
    pub fn opportunities(&self) -> &[Opportunity] {
        &self.opportunities
    }

    /// Sum of selected profits, rounded to the reported precision.
    #[must_use]
    pub const fn total_profit(&self) -> Price {
        self.total_profit
    }

    /// Sum of selected buy prices.
    #[must_use]
    pub fn spent(&self) -> Price {
        self.opportunities.iter().map(Opportunity::buy_price).sum()
    }

    /// Budget left after paying every selected buy price.
    #[must_use]
    pub fn remaining(&self) -> Price {
        self.budget.amount() - self.spent()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.opportunities.len()
    }
}

/// Pick opportunities by descending profit until the budget runs out.
///
/// Equal profits keep their input order. The first candidate whose buy price
/// exceeds the remaining budget ends the selection.
///
/// # Examples
///
/// ```
/// use hindsight::domain::selection::select;
/// use hindsight::domain::{Budget, Opportunity};
/// use rust_decimal_macros::dec;
///
/// let opportunities = vec![
///     Opportunity::new("B".into(), dec!(50), dec!(8)),
///     Opportunity::new("A".into(), dec!(100), dec!(10)),
/// ];
/// let selection = select(opportunities, Budget::try_new(dec!(120)).unwrap());
/// assert_eq!(selection.len(), 1);
/// assert_eq!(selection.opportunities()[0].instrument().as_str(), "A");
/// assert_eq!(selection.total_profit(), dec!(10.0));
/// ```
#[must_use]
pub fn select(mut opportunities: Vec<Opportunity>, budget: Budget) -> Selection {
    opportunities.sort_by(|a, b| b.profit().cmp(&a.profit()));

    let mut remaining = budget.amount();
    let mut accepted = Vec::new();
    for opportunity in opportunities {
        remaining -= opportunity.buy_price();
        if remaining < Decimal::ZERO {
            break;
        }
        accepted.push(opportunity);
    }

    let total: Price = accepted.iter().map(Opportunity::profit).sum();

    Selection {
        budget,
        opportunities: accepted,
        total_profit: round_report(total),
    }
}
