use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{EngineError, invalid_encoding},
    selection::types::{Selection, Token},
};

/// Transport shape exchanged with the bridge layer. Keyed, order-independent:
/// membership is a set on both sides of the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    pub applications: Vec<String>,
    pub categories: Vec<String>,
    pub web_domains: Vec<String>,
}

pub fn encode(selection: &Selection) -> SelectionRecord {
    SelectionRecord {
        applications: selection
            .applications
            .iter()
            .map(|token| token.data.clone())
            .collect(),
        categories: selection
            .categories
            .iter()
            .map(|token| token.data.clone())
            .collect(),
        web_domains: selection
            .web_domains
            .iter()
            .map(|token| token.data.clone())
            .collect(),
    }
}

/// Pure: a failed decode leaves every store untouched because nothing is
/// written until the caller commits the returned Selection.
pub fn decode(record: &Value) -> Result<Selection, EngineError> {
    if !record.is_object() {
        return Err(invalid_encoding("selection record must be an object"));
    }

    let parsed: SelectionRecord = serde_json::from_value(record.clone())
        .map_err(|err| invalid_encoding(format!("unable to parse selection: {err}")))?;

    Ok(Selection {
        applications: parsed
            .applications
            .into_iter()
            .map(Token::application)
            .collect(),
        categories: parsed.categories.into_iter().map(Token::category).collect(),
        web_domains: parsed
            .web_domains
            .into_iter()
            .map(Token::web_domain)
            .collect(),
    })
}
