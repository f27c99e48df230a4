//! Conversion: MarketQuote / CoinDetail → Quote (TryFrom + validation).

use super::wire::{self, CurrencyMap};
use super::{PeriodChanges, Quote, ValidationError};
use crate::shared::CoinId;
use std::collections::HashSet;

/// Collects presence/shape problems while a quote is assembled.
#[derive(Default)]
struct Checker {
    errors: Vec<ValidationError>,
}

impl Checker {
    fn id(&mut self, id: Option<CoinId>) -> CoinId {
        match id {
            Some(id) if !id.is_empty() => id,
            Some(_) => {
                self.errors.push(ValidationError::EmptyId);
                CoinId::default()
            }
            None => {
                self.errors.push(ValidationError::MissingField("id"));
                CoinId::default()
            }
        }
    }

    fn text(&mut self, field: &'static str, value: Option<String>) -> String {
        value.unwrap_or_else(|| {
            self.errors.push(ValidationError::MissingField(field));
            String::new()
        })
    }

    fn number(&mut self, field: &'static str, value: Option<f64>) -> f64 {
        match value {
            Some(v) if v.is_finite() => v,
            Some(_) => {
                self.errors.push(ValidationError::NonFiniteNumber(field));
                0.0
            }
            None => {
                self.errors.push(ValidationError::MissingField(field));
                0.0
            }
        }
    }

    fn optional(&mut self, field: &'static str, value: Option<f64>) -> Option<f64> {
        match value {
            Some(v) if !v.is_finite() => {
                self.errors.push(ValidationError::NonFiniteNumber(field));
                None
            }
            other => other,
        }
    }

    fn finish(self, id: &CoinId, quote: Quote) -> Result<Quote, ValidationError> {
        if self.errors.is_empty() {
            return Ok(quote);
        }
        let label = if id.is_empty() {
            "<unknown>".to_string()
        } else {
            id.to_string()
        };
        Err(ValidationError::Multiple(label, self.errors))
    }
}

fn pick<T: Clone>(map: &CurrencyMap<T>, vs_currency: &str) -> Option<T> {
    map.get(vs_currency).cloned().flatten()
}

impl TryFrom<wire::MarketQuote> for Quote {
    type Error = ValidationError;

    fn try_from(source: wire::MarketQuote) -> Result<Self, Self::Error> {
        let mut check = Checker::default();

        let id = check.id(source.id);
        let quote = Quote {
            symbol: check.text("symbol", source.symbol),
            name: check.text("name", source.name),
            image: check.text("image", source.image),
            current_price: check.number("current_price", source.current_price),
            market_cap: check.number("market_cap", source.market_cap),
            market_cap_rank: source.market_cap_rank,
            fully_diluted_valuation: check
                .optional("fully_diluted_valuation", source.fully_diluted_valuation),
            total_volume: check.number("total_volume", source.total_volume),
            high_24h: check.number("high_24h", source.high_24h),
            low_24h: check.number("low_24h", source.low_24h),
            price_change_24h: check.number("price_change_24h", source.price_change_24h),
            price_change_percentage_24h: check.number(
                "price_change_percentage_24h",
                source.price_change_percentage_24h,
            ),
            market_cap_change_24h: check
                .number("market_cap_change_24h", source.market_cap_change_24h),
            market_cap_change_percentage_24h: check.number(
                "market_cap_change_percentage_24h",
                source.market_cap_change_percentage_24h,
            ),
            circulating_supply: check.number("circulating_supply", source.circulating_supply),
            total_supply: check.optional("total_supply", source.total_supply),
            max_supply: check.optional("max_supply", source.max_supply),
            ath: check.number("ath", source.ath),
            ath_change_percentage: check
                .number("ath_change_percentage", source.ath_change_percentage),
            ath_date: check.text("ath_date", source.ath_date),
            atl: check.number("atl", source.atl),
            atl_change_percentage: check
                .number("atl_change_percentage", source.atl_change_percentage),
            atl_date: check.text("atl_date", source.atl_date),
            last_updated: check.text("last_updated", source.last_updated),
            sparkline_7d: source.sparkline_in_7d.map(|s| s.price),
            price_change_percentage: PeriodChanges {
                d7: check.optional("7d change", source.price_change_percentage_7d_in_currency),
                d14: check.optional("14d change", source.price_change_percentage_14d_in_currency),
                d30: check.optional("30d change", source.price_change_percentage_30d_in_currency),
                d200: check
                    .optional("200d change", source.price_change_percentage_200d_in_currency),
                y1: check.optional("1y change", source.price_change_percentage_1y_in_currency),
            },
            id: id.clone(),
        };

        check.finish(&id, quote)
    }
}

/// Detail responses carry per-currency maps; `vs_currency` selects the entry.
impl TryFrom<(wire::CoinDetail, &str)> for Quote {
    type Error = ValidationError;

    fn try_from((source, vs): (wire::CoinDetail, &str)) -> Result<Self, Self::Error> {
        let mut check = Checker::default();

        let id = check.id(source.id);
        let md = source.market_data.unwrap_or_else(|| {
            check.errors.push(ValidationError::MissingMarketData);
            wire::MarketDataBlock::default()
        });

        let quote = Quote {
            symbol: check.text("symbol", source.symbol),
            name: check.text("name", source.name),
            image: check.text("image", source.image.as_ref().and_then(|i| i.best()).cloned()),
            current_price: check.number("current_price", pick(&md.current_price, vs)),
            market_cap: check.number("market_cap", pick(&md.market_cap, vs)),
            market_cap_rank: source.market_cap_rank.or(md.market_cap_rank),
            fully_diluted_valuation: check.optional(
                "fully_diluted_valuation",
                pick(&md.fully_diluted_valuation, vs),
            ),
            total_volume: check.number("total_volume", pick(&md.total_volume, vs)),
            high_24h: check.number("high_24h", pick(&md.high_24h, vs)),
            low_24h: check.number("low_24h", pick(&md.low_24h, vs)),
            price_change_24h: check
                .number("price_change_24h", pick(&md.price_change_24h_in_currency, vs)),
            price_change_percentage_24h: check.number(
                "price_change_percentage_24h",
                pick(&md.price_change_percentage_24h_in_currency, vs),
            ),
            market_cap_change_24h: check.number(
                "market_cap_change_24h",
                pick(&md.market_cap_change_24h_in_currency, vs),
            ),
            market_cap_change_percentage_24h: check.number(
                "market_cap_change_percentage_24h",
                pick(&md.market_cap_change_percentage_24h_in_currency, vs),
            ),
            circulating_supply: check.number("circulating_supply", md.circulating_supply),
            total_supply: check.optional("total_supply", md.total_supply),
            max_supply: check.optional("max_supply", md.max_supply),
            ath: check.number("ath", pick(&md.ath, vs)),
            ath_change_percentage: check
                .number("ath_change_percentage", pick(&md.ath_change_percentage, vs)),
            ath_date: check.text("ath_date", pick(&md.ath_date, vs)),
            atl: check.number("atl", pick(&md.atl, vs)),
            atl_change_percentage: check
                .number("atl_change_percentage", pick(&md.atl_change_percentage, vs)),
            atl_date: check.text("atl_date", pick(&md.atl_date, vs)),
            last_updated: check.text("last_updated", md.last_updated.or(source.last_updated)),
            sparkline_7d: md.sparkline_7d.map(|s| s.price),
            price_change_percentage: PeriodChanges {
                d7: check.optional("7d change", pick(&md.price_change_percentage_7d_in_currency, vs)),
                d14: check
                    .optional("14d change", pick(&md.price_change_percentage_14d_in_currency, vs)),
                d30: check
                    .optional("30d change", pick(&md.price_change_percentage_30d_in_currency, vs)),
                d200: check.optional(
                    "200d change",
                    pick(&md.price_change_percentage_200d_in_currency, vs),
                ),
                y1: check.optional("1y change", pick(&md.price_change_percentage_1y_in_currency, vs)),
            },
            id: id.clone(),
        };

        check.finish(&id, quote)
    }
}

/// Convert a `/coins/markets` batch, keeping the API's order.
///
/// The first invalid record fails the whole batch, as does a repeated id.
pub fn quotes_from_markets(batch: Vec<wire::MarketQuote>) -> Result<Vec<Quote>, ValidationError> {
    let mut seen = HashSet::with_capacity(batch.len());
    let mut quotes = Vec::with_capacity(batch.len());

    for raw in batch {
        let quote = Quote::try_from(raw)?;
        if !seen.insert(quote.id.clone()) {
            return Err(ValidationError::DuplicateId(quote.id.to_string()));
        }
        quotes.push(quote);
    }

    Ok(quotes)
}
