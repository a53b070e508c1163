//! Report rendering for account summaries and quotes

use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::error::Result;
use crate::pricing::PriceCalculator;
use crate::types::{Provider, Tier};

/// Line printed between the summaries and the prices
pub const SEPARATOR: &str = "=============================================================";

/// `"{category} {follower_count} {provider} {full_name} {unique_id} {screen_name}"`
pub fn format_summary(account: &dyn Account) -> String {
    format!(
        "{} {} {} {} {} {}",
        account.category(),
        account.follower_count(),
        account.provider(),
        account.full_name(),
        account.unique_id(),
        account.screen_name()
    )
}

/// Priced snapshot of an account, used for JSON output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub category: Tier,
    pub follower_count: u64,
    pub provider: Provider,
    pub full_name: String,
    pub unique_id: String,
    pub screen_name: String,
    pub price: f64,
}

impl Quote {
    pub fn for_account(calculator: &PriceCalculator, account: &dyn Account) -> Result<Self> {
        Ok(Self {
            category: account.category(),
            follower_count: account.follower_count(),
            provider: account.provider(),
            full_name: account.full_name().to_string(),
            unique_id: account.unique_id().to_string(),
            screen_name: account.screen_name().to_string(),
            price: calculator.price_for(account)?,
        })
    }
}

/// Quote every account, stopping at the first pricing failure
pub fn quote_all(
    calculator: &PriceCalculator,
    accounts: &[Box<dyn Account>],
) -> Result<Vec<Quote>> {
    accounts
        .iter()
        .map(|account| Quote::for_account(calculator, account.as_ref()))
        .collect()
}

/// Text report: summaries, separator, then one price per line
///
/// Prices are computed before anything is rendered so a lookup failure
/// produces no partial output.
pub fn render_text(calculator: &PriceCalculator, accounts: &[Box<dyn Account>]) -> Result<Vec<String>> {
    let prices = accounts
        .iter()
        .map(|account| calculator.price_for(account.as_ref()))
        .collect::<Result<Vec<f64>>>()?;

    let mut lines: Vec<String> = accounts
        .iter()
        .map(|account| format_summary(account.as_ref()))
        .collect();
    lines.push(SEPARATOR.to_string());
    lines.extend(prices.iter().map(|price| price.to_string()));
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{demo_roster, FacebookAccount, TwitterAccount};
    use crate::error::{PlurpriceError, PricingError};
    use crate::pricing::LinearRate;

    #[test]
    fn test_format_summary() {
        let account = FacebookAccount::new("Midas", "531902", "el Rey Midas", 10);
        assert_eq!(
            format_summary(&account),
            "Citizen 10 facebook el Rey Midas 531902 Midas"
        );
    }

    #[test]
    fn test_format_summary_twitter() {
        let account = TwitterAccount::new("app_config", "15377024", "Jose Camargo", 300);
        assert_eq!(
            format_summary(&account),
            "Celebrity 300 twitter Jose Camargo 15377024 app_config"
        );
    }

    #[test]
    fn test_format_summary_default_account_keeps_separators() {
        let account = FacebookAccount::default();
        assert_eq!(format_summary(&account), "Citizen 0 facebook   ");
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 61);
        assert!(SEPARATOR.chars().all(|c| c == '='));
    }

    #[test]
    fn test_render_text_demo() {
        let calculator = PriceCalculator::with_default_rates().unwrap();
        let lines = render_text(&calculator, &demo_roster()).unwrap();

        assert_eq!(
            lines,
            vec![
                "Citizen 10 facebook el Rey Midas 531902 Midas",
                "Professional 50 fanpage Jose Alberto Camargo 910910 ElFanDelRey",
                "Celebrity 200 youtube Jose Camargo 15319024 ElCanalDelRey",
                "Celebrity 300 twitter Jose Camargo 15377024 app_config",
                "Celebrity 300 instagram Jose Camargo 15377024 app_config",
                SEPARATOR,
                "5",
                "5",
                "60",
                "270",
                "27",
            ]
        );
    }

    #[test]
    fn test_render_text_unknown_provider() {
        let mut calculator = PriceCalculator::new();
        calculator.register("facebook", LinearRate::new(0.5)).unwrap();

        let err = render_text(&calculator, &demo_roster()).unwrap_err();
        assert!(matches!(
            err,
            PlurpriceError::Pricing(PricingError::UnknownProvider(ref name)) if name == "fanpage"
        ));
    }

    #[test]
    fn test_quote_all() {
        let calculator = PriceCalculator::with_default_rates().unwrap();
        let quotes = quote_all(&calculator, &demo_roster()).unwrap();

        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[2].provider, Provider::Youtube);
        assert_eq!(quotes[2].category, Tier::Celebrity);
        assert!((quotes[2].price - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_quote_serializes_lowercase_provider() {
        let calculator = PriceCalculator::with_default_rates().unwrap();
        let account = FacebookAccount::new("Midas", "531902", "el Rey Midas", 10);
        let quote = Quote::for_account(&calculator, &account).unwrap();

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["provider"], "facebook");
        assert_eq!(json["category"], "Citizen");
        assert_eq!(json["follower_count"], 10);
        assert_eq!(json["price"], 5.0);
    }
}
