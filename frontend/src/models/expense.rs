use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Education,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Bills,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// The calendar day an expense happened on.
///
/// Accepts either `2024-01-01` or a full RFC 3339 timestamp such as
/// `2024-01-01T00:00:00.000Z`; always written back as `2024-01-01`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExpenseDate(pub NaiveDate);

impl ExpenseDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, Self::FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
            .map(ExpenseDate)
    }

    /// Value for an `<input type="date">`.
    pub fn to_input_value(&self) -> String {
        self.0.format(Self::FORMAT).to_string()
    }

    /// Short human-readable form used on expense cards, e.g. `1/31/2024`.
    pub fn to_display(&self) -> String {
        self.0.format("%-m/%-d/%Y").to_string()
    }
}

impl Serialize for ExpenseDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_input_value())
    }
}

impl<'de> Deserialize<'de> for ExpenseDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ExpenseDate::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid expense date {raw:?}")))
    }
}

/// An expense as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: ExpenseDate,
}

impl Expense {
    /// The description to show on a card. Blank descriptions count as none.
    pub fn shown_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
    }
}

/// The body of a create or update request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: ExpenseDate,
}
