use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Token,
    Nft,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Token => write!(f, "Token"),
            Self::Nft => write!(f, "NFT"),
        }
    }
}

/// A holding shown in the asset table. `value` is in whole display currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub balance: String,
    pub kind: AssetKind,
    pub value: u64,
}

impl Asset {
    fn new(name: &str, balance: &str, kind: AssetKind, value: u64) -> Self {
        Self {
            name: name.to_string(),
            balance: balance.to_string(),
            kind,
            value,
        }
    }
}

/// Hard-coded holdings, balances are not fetched from the wallet.
pub fn mock_assets() -> Vec<Asset> {
    vec![
        Asset::new("USDT", "1000", AssetKind::Token, 1000),
        Asset::new("USDC", "100", AssetKind::Token, 100),
        Asset::new("stETH", "2", AssetKind::Token, 5000),
        Asset::new("wETH", "1.5", AssetKind::Token, 4900),
        Asset::new("BAYC", "1", AssetKind::Nft, 0),
        Asset::new("MAYC", "1", AssetKind::Nft, 0),
    ]
}

/// Sum over every asset of the list, whatever is selected.
pub fn total_value(assets: &[Asset]) -> u64 {
    assets.iter().map(|a| a.value).sum()
}

/// `10000` -> `$10,000`
pub fn format_value(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_total() {
        let assets = mock_assets();
        assert_eq!(assets.len(), 6);
        // 1000 + 100 + 5000 + 4900 + 0 + 0
        assert_eq!(total_value(&assets), 11_000);
        assert_eq!(format_value(total_value(&assets)), "$11,000");
    }

    #[test]
    fn total_is_exact_sum() {
        let assets = vec![
            Asset::new("A", "0.1", AssetKind::Token, 7),
            Asset::new("B", "3", AssetKind::Nft, 0),
            Asset::new("C", "12", AssetKind::Token, 1_234_567),
        ];
        assert_eq!(total_value(&assets), 1_234_574);
        assert_eq!(total_value(&[]), 0);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0), "$0");
        assert_eq!(format_value(100), "$100");
        assert_eq!(format_value(1000), "$1,000");
        assert_eq!(format_value(4900), "$4,900");
        assert_eq!(format_value(123_456), "$123,456");
        assert_eq!(format_value(1_234_567), "$1,234,567");
    }

    #[test]
    fn kind_labels() {
        assert_eq!(AssetKind::Token.to_string(), "Token");
        assert_eq!(AssetKind::Nft.to_string(), "NFT");
    }
}
