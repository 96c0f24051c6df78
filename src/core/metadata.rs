//! Static display metadata for well-known currencies.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyMetadata {
    pub code: &'static str,
    pub symbol: &'static str,
    pub display_name: &'static str,
}

macro_rules! currencies {
    ($($code:literal => ($symbol:literal, $name:literal)),* $(,)?) => {
        &[$(CurrencyMetadata { code: $code, symbol: $symbol, display_name: $name }),*]
    };
}

static CURRENCIES: &[CurrencyMetadata] = currencies! {
    "AED" => ("د.إ", "UAE Dirham"),
    "ARS" => ("$", "Argentine Peso"),
    "AUD" => ("A$", "Australian Dollar"),
    "BRL" => ("R$", "Brazilian Real"),
    "CAD" => ("C$", "Canadian Dollar"),
    "CHF" => ("Fr", "Swiss Franc"),
    "CNY" => ("¥", "Chinese Yuan"),
    "CZK" => ("Kč", "Czech Koruna"),
    "DKK" => ("kr", "Danish Krone"),
    "EUR" => ("€", "Euro"),
    "GBP" => ("£", "British Pound"),
    "HKD" => ("HK$", "Hong Kong Dollar"),
    "HUF" => ("Ft", "Hungarian Forint"),
    "IDR" => ("Rp", "Indonesian Rupiah"),
    "ILS" => ("₪", "Israeli New Shekel"),
    "INR" => ("₹", "Indian Rupee"),
    "JPY" => ("¥", "Japanese Yen"),
    "KRW" => ("₩", "South Korean Won"),
    "MXN" => ("Mex$", "Mexican Peso"),
    "MYR" => ("RM", "Malaysian Ringgit"),
    "NOK" => ("kr", "Norwegian Krone"),
    "NZD" => ("NZ$", "New Zealand Dollar"),
    "PHP" => ("₱", "Philippine Peso"),
    "PLN" => ("zł", "Polish Zloty"),
    "RUB" => ("₽", "Russian Ruble"),
    "SAR" => ("﷼", "Saudi Riyal"),
    "SEK" => ("kr", "Swedish Krona"),
    "SGD" => ("S$", "Singapore Dollar"),
    "THB" => ("฿", "Thai Baht"),
    "TRY" => ("₺", "Turkish Lira"),
    "TWD" => ("NT$", "New Taiwan Dollar"),
    "USD" => ("$", "US Dollar"),
    "ZAR" => ("R", "South African Rand"),
};

/// Finds the metadata entry for `code`, ignoring ASCII case.
pub fn find(code: &str) -> Option<&'static CurrencyMetadata> {
    CURRENCIES
        .iter()
        .find(|meta| meta.code.eq_ignore_ascii_case(code))
}

/// Returns the display symbol for `code`, or the code itself when unknown.
pub fn lookup_symbol(code: &str) -> &str {
    find(code).map_or(code, |meta| meta.symbol)
}

/// Returns the human readable name for `code`, or the code itself when unknown.
pub fn lookup_display_name(code: &str) -> &str {
    find(code).map_or(code, |meta| meta.display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_currency() {
        assert_eq!(lookup_symbol("EUR"), "€");
        assert_eq!(lookup_display_name("EUR"), "Euro");
        assert_eq!(lookup_symbol("inr"), "₹");
    }

    #[test]
    fn test_lookup_falls_back_to_code() {
        assert_eq!(lookup_symbol("ZZZ"), "ZZZ");
        assert_eq!(lookup_display_name("ZZZ"), "ZZZ");
        assert_eq!(lookup_symbol(""), "");
    }

    #[test]
    fn test_table_codes_are_unique_and_uppercase() {
        let mut codes: Vec<_> = CURRENCIES.iter().map(|m| m.code).collect();
        assert!(codes.iter().all(|c| c.len() == 3 && c.to_uppercase() == *c));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), CURRENCIES.len());
    }
}
