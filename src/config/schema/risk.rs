use serde::{Deserialize, Serialize};

/// One entry of the risk keyword table. Matching is a case-insensitive
/// substring test; table order decides reason order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskKeyword {
    pub keyword: String,
    pub weight: f64,
}

impl RiskKeyword {
    pub fn new(keyword: &str, weight: f64) -> Self {
        Self {
            keyword: keyword.to_string(),
            weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<RiskKeyword>,
}

fn default_keywords() -> Vec<RiskKeyword> {
    vec![
        RiskKeyword::new("scam", 0.9),
        RiskKeyword::new("fraud", 0.9),
        RiskKeyword::new("ponzi", 0.95),
        RiskKeyword::new("free money", 0.7),
        RiskKeyword::new("guaranteed returns", 0.8),
        RiskKeyword::new("crypto gem", 0.6),
        RiskKeyword::new("hate", 0.9),
        RiskKeyword::new("gamble", 0.5),
    ]
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}
