/// Token info needed to convert and display amounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub symbol: String,
    pub decimals: u8,
    /// icon URL or data URI
    pub icon: Option<String>,
}

impl TokenMetadata {
    pub fn new(symbol: &str, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_string(),
            decimals,
            icon: None,
        }
    }
}
