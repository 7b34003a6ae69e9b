use serde::Deserialize;

/// `/scheme` response. Only the fields the palette needs are modelled.
#[derive(Debug, Deserialize, Clone)]
pub struct SchemeResponse {
    pub colors: Vec<SchemeColor>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchemeColor {
    pub hex: HexValue,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HexValue {
    pub value: String,
}

impl SchemeResponse {
    /// Hex values in the order the service returned them.
    pub fn hex_values(self) -> Vec<String> {
        self.colors.into_iter().map(|c| c.hex.value).collect()
    }
}
