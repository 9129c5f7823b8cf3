//! Single-transaction maximum profit over a price series.
//!
//! One left-to-right pass tracks the cheapest price seen so far and the best
//! profit obtainable by selling at the current price. The buy price reported
//! is the one in effect when the best profit was first reached, or the series
//! minimum when no sale is profitable.

use rust_decimal::Decimal;

use super::id::InstrumentId;
use super::money::Price;
use super::opportunity::Opportunity;
use super::series::PriceSeries;

/// Compute the best buy-then-sell opportunity for one instrument.
///
/// Returns `None` for an empty series: there is nothing to buy.
/// Amounts are accumulated at full precision and rounded once when the
/// [`Opportunity`] is built.
///
/// # Examples
///
/// ```
/// use hindsight::domain::profit::best_opportunity;
/// use hindsight::domain::PriceSeries;
/// use rust_decimal_macros::dec;
///
/// let series = PriceSeries::try_new(vec![
///     dec!(10), dec!(7), dec!(5), dec!(8), dec!(11), dec!(9),
/// ]).unwrap();
/// let opp = best_opportunity("AAPL".into(), &series).unwrap();
/// assert_eq!(opp.buy_price(), dec!(5.0));
/// assert_eq!(opp.profit(), dec!(6.0));
/// ```
#[must_use]
pub fn best_opportunity(instrument: InstrumentId, series: &PriceSeries) -> Option<Opportunity> {
    let (&first, rest) = series.prices().split_first()?;

    let mut min_so_far: Price = first;
    let mut max_profit = Decimal::ZERO;
    let mut buy_at_max: Option<Price> = None;

    for &price in rest {
        min_so_far = min_so_far.min(price);
        let profit = price - min_so_far;
        if profit > max_profit {
            max_profit = profit;
            buy_at_max = Some(min_so_far);
        }
    }

    let buy_price = buy_at_max.unwrap_or(min_so_far);
    Some(Opportunity::new(instrument, buy_price, max_profit))
}
