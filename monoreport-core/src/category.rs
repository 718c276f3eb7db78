//! Spending categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of labels a transaction can be filed under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Fun")]
    Fun,
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Restaurants")]
    Restaurants,
    #[serde(rename = "Coffee")]
    Coffee,
    #[serde(rename = "Transport/Taxi")]
    TransportTaxi,
    #[serde(rename = "Car/Gas")]
    CarGas,
    #[serde(rename = "Car/Fixes")]
    CarFixes,
    #[serde(rename = "Clothes")]
    Clothes,
    #[serde(rename = "Utility bills/Mobile")]
    UtilityMobile,
    #[serde(rename = "Selfcare")]
    Selfcare,
    #[serde(rename = "Subscriptions")]
    Subscriptions,
    #[serde(rename = "Cat")]
    Cat,
    #[serde(rename = "OpenCars")]
    OpenCars,
    #[serde(rename = "Mom/Father")]
    MomFather,
    #[serde(rename = "Charity")]
    Charity,
    /// Incoming pay
    #[serde(rename = "Зарплата")]
    Salary,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Label written into reports
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fun => "Fun",
            Category::Food => "Food",
            Category::Restaurants => "Restaurants",
            Category::Coffee => "Coffee",
            Category::TransportTaxi => "Transport/Taxi",
            Category::CarGas => "Car/Gas",
            Category::CarFixes => "Car/Fixes",
            Category::Clothes => "Clothes",
            Category::UtilityMobile => "Utility bills/Mobile",
            Category::Selfcare => "Selfcare",
            Category::Subscriptions => "Subscriptions",
            Category::Cat => "Cat",
            Category::OpenCars => "OpenCars",
            Category::MomFather => "Mom/Father",
            Category::Charity => "Charity",
            Category::Salary => "Зарплата",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
