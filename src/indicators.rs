//! The fixed catalogue of indicators the dashboard offers.
//!
//! Each entry pairs a short display key (what users pick and what requests carry)
//! with the `Series Name` value used in the cleaned World Bank table.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum Indicator {
    ConsumerPricesInflation,
    InflationGdpDeflator,
    #[default]
    NetNationalIncomeUsd,
    NetNationalIncomeGrowth,
    NetNationalIncomeGrowthPerCapita,
    NetNationalIncomePerCapitaUsd,
    IncomeShareHighest10,
    IncomeShareHighest20,
    IncomeTaxesPerTotalTaxes,
    IncomeTaxesPerRevenue,
    CentralGovernmentDebt,
    Unemployment,
    UnemploymentMales,
    UnemploymentFemales,
    Poverty190,
    Poverty320,
    Poverty550,
}

impl Indicator {
    /// Every indicator, in the order the selector lists them.
    pub const ALL: [Indicator; 17] = [
        Indicator::ConsumerPricesInflation,
        Indicator::InflationGdpDeflator,
        Indicator::NetNationalIncomeUsd,
        Indicator::NetNationalIncomeGrowth,
        Indicator::NetNationalIncomeGrowthPerCapita,
        Indicator::NetNationalIncomePerCapitaUsd,
        Indicator::IncomeShareHighest10,
        Indicator::IncomeShareHighest20,
        Indicator::IncomeTaxesPerTotalTaxes,
        Indicator::IncomeTaxesPerRevenue,
        Indicator::CentralGovernmentDebt,
        Indicator::Unemployment,
        Indicator::UnemploymentMales,
        Indicator::UnemploymentFemales,
        Indicator::Poverty190,
        Indicator::Poverty320,
        Indicator::Poverty550,
    ];

    /// Short display key, e.g. `"Net National Income (USD)"`.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::ConsumerPricesInflation => "Consumer Prices Inflation",
            Indicator::InflationGdpDeflator => "Inflation GDP Deflator",
            Indicator::NetNationalIncomeUsd => "Net National Income (USD)",
            Indicator::NetNationalIncomeGrowth => "Net National Income Growth (%)",
            Indicator::NetNationalIncomeGrowthPerCapita => {
                "Net National Income Growth Per Capita (%)"
            }
            Indicator::NetNationalIncomePerCapitaUsd => {
                "Net National Income Growth Per Capita (USD)"
            }
            Indicator::IncomeShareHighest10 => "Income Share Held By Highest 10%",
            Indicator::IncomeShareHighest20 => "Income Share Held By Highest 20%",
            Indicator::IncomeTaxesPerTotalTaxes => "Income Taxes Per Total Taxes",
            Indicator::IncomeTaxesPerRevenue => "Income Taxes Per Revenue",
            Indicator::CentralGovernmentDebt => "Central Government Debt",
            Indicator::Unemployment => "Unemployment",
            Indicator::UnemploymentMales => "Unemployment, Males",
            Indicator::UnemploymentFemales => "Unemployment, Females",
            Indicator::Poverty190 => "Poverty (Less Than $1.90 a Day)",
            Indicator::Poverty320 => "Poverty (Less Than $3.20 a Day)",
            Indicator::Poverty550 => "Poverty (Less Than $5.50 a Day)",
        }
    }

    /// The `Series Name` this indicator has in the dataset.
    pub fn series_name(self) -> &'static str {
        match self {
            Indicator::ConsumerPricesInflation => "Inflation, consumer prices (annual %)",
            Indicator::InflationGdpDeflator => "Inflation, GDP deflator (annual %)",
            Indicator::NetNationalIncomeUsd => "Adjusted net national income (current US$)",
            Indicator::NetNationalIncomeGrowth => {
                "Adjusted net national income (annual % growth)"
            }
            Indicator::NetNationalIncomeGrowthPerCapita => {
                "Adjusted net national income per capita (annual % growth)"
            }
            Indicator::NetNationalIncomePerCapitaUsd => {
                "Adjusted net national income per capita (current US$)"
            }
            Indicator::IncomeShareHighest10 => "Income share held by highest 10%",
            Indicator::IncomeShareHighest20 => "Income share held by highest 20%",
            Indicator::IncomeTaxesPerTotalTaxes => {
                "Taxes on income, profits and capital gains (% of total taxes)"
            }
            Indicator::IncomeTaxesPerRevenue => {
                "Taxes on income, profits and capital gains (% of revenue)"
            }
            Indicator::CentralGovernmentDebt => "Central government debt, total (% of GDP)",
            Indicator::Unemployment => {
                "Unemployment, total (% of total labor force) (national estimate)"
            }
            Indicator::UnemploymentMales => {
                "Unemployment, male (% of male labor force) (national estimate)"
            }
            Indicator::UnemploymentFemales => {
                "Unemployment, female (% of female labor force) (national estimate)"
            }
            Indicator::Poverty190 => {
                "Poverty headcount ratio at $1.90 a day (2011 PPP) (% of population)"
            }
            Indicator::Poverty320 => {
                "Poverty headcount ratio at $3.20 a day (2011 PPP) (% of population)"
            }
            Indicator::Poverty550 => {
                "Poverty headcount ratio at $5.50 a day (2011 PPP) (% of population)"
            }
        }
    }

    /// Chart title: the series name up to its first parenthesis, title-cased.
    pub fn title(self) -> String {
        let name = self.series_name();
        let head = name.split('(').next().unwrap_or(name);
        title_case(head.trim())
    }

    /// Unit taken from the first parenthesized group of the series name, if any.
    ///
    /// "Income share held by highest 10%" has none.
    pub fn unit(self) -> Option<String> {
        let name = self.series_name();
        let open = name.find('(')?;
        let close = open + name[open..].find(')')?;
        let inner = name[open + 1..close].trim();
        if inner.is_empty() {
            None
        } else {
            Some(title_case(inner))
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Indicator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Indicator::ALL
            .into_iter()
            .find(|i| i.label() == s)
            .ok_or_else(|| Error::UnknownIndicator(s.to_string()))
    }
}

impl From<Indicator> for String {
    fn from(i: Indicator) -> Self {
        i.label().to_string()
    }
}

impl TryFrom<String> for Indicator {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Upper-case the first letter of every whitespace-separated word and keep the rest as is,
/// so acronyms like `US$` and `GDP` survive.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_keeps_acronyms() {
        assert_eq!(title_case("current US$"), "Current US$");
        assert_eq!(title_case("  annual %  growth "), "Annual % Growth");
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = Indicator::ALL.iter().map(|i| i.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Indicator::ALL.len());
    }
}
