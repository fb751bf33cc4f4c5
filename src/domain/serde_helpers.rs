// src/domain/serde_helpers.rs
//
// The backend serializes decimal columns as strings ("85000.00") on some
// routes and as numbers on others.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

pub fn opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<NumberOrString> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}

/// Laravel returns booleans from tinyint columns as 0/1 on older routes.
pub fn bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
    }

    let raw: Option<BoolOrInt> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(BoolOrInt::Bool(b)) => b,
        Some(BoolOrInt::Int(i)) => i != 0,
        None => false,
    })
}
