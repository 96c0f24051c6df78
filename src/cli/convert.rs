use super::ui;
use crate::core::{ConversionResult, ConversionService};
use anyhow::Result;

/// Formats `amount` with the currency symbol, or with the code when the
/// currency has no known symbol.
pub fn format_money(amount: f64, code: &str) -> String {
    let symbol = ConversionService::lookup_symbol(code);
    if symbol == code {
        format!("{amount:.2} {code}")
    } else {
        format!("{symbol}{amount:.2}")
    }
}

impl ConversionResult {
    pub fn display_as_text(&self) -> String {
        let headline = format!(
            "{:.2} {} = {:.2} {}",
            self.amount, self.from, self.converted_amount, self.to
        );

        let mut output = format!(
            "{}\n",
            ui::style_text(&headline, ui::StyleType::Highlight)
        );
        output.push_str(&format!(
            "{} → {} ({} → {})\n",
            format_money(self.amount, &self.from),
            format_money(self.converted_amount, &self.to),
            ConversionService::lookup_display_name(&self.from),
            ConversionService::lookup_display_name(&self.to),
        ));
        output.push_str(&format!(
            "{} 1 {} = {:.4} {}\n",
            ui::style_text("Exchange Rate:", ui::StyleType::Label),
            self.from,
            self.rate,
            self.to
        ));
        output.push_str(&format!(
            "{} 1 {} = {:.4} {}\n",
            ui::style_text("Inverse Rate:", ui::StyleType::Label),
            self.to,
            self.inverse_rate(),
            self.from
        ));
        output.push_str(&ui::style_text(
            &format!("Last Updated: {}", self.as_of),
            ui::StyleType::Subtle,
        ));

        output
    }
}

pub async fn run(service: &ConversionService, amount: f64, from: &str, to: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let result = service.convert(amount, from, to).await;
    pb.finish_and_clear();

    println!("{}", result?.display_as_text());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(from: &str, to: &str, rate: f64) -> ConversionResult {
        ConversionResult {
            amount: 100.0,
            from: from.to_string(),
            to: to.to_string(),
            converted_amount: 100.0 * rate,
            rate,
            as_of: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(92.0, "EUR"), "€92.00");
        assert_eq!(format_money(1.5, "ZZZ"), "1.50 ZZZ");
    }

    #[test]
    fn test_display_as_text() {
        let text = result("USD", "EUR", 0.92).display_as_text();
        assert!(text.contains("100.00 USD = 92.00 EUR"));
        assert!(text.contains("$100.00 → €92.00"));
        assert!(text.contains("US Dollar → Euro"));
        assert!(text.contains("1 USD = 0.9200 EUR"));
        assert!(text.contains("1 EUR = 1.0870 USD"));
        assert!(text.contains("Last Updated: 2024-01-01"));
    }
}
