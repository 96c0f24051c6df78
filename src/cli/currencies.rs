use super::ui;
use crate::core::ConversionService;
use anyhow::Result;
use comfy_table::Cell;

const CODES_PER_ROW: usize = 6;

/// Lays out currency codes in rows of six.
pub fn display_codes(codes: &[String]) -> String {
    let mut table = ui::new_styled_table();
    for row in codes.chunks(CODES_PER_ROW) {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }

    format!(
        "{}\n{}",
        ui::style_text(
            &format!("Available currencies ({} total):", codes.len()),
            ui::StyleType::Title
        ),
        table
    )
}

pub async fn run(service: &ConversionService, base: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching available currencies...");
    let codes = service.list_all_currencies(base).await;
    pb.finish_and_clear();

    println!("{}", display_codes(&codes?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_codes() {
        let codes: Vec<String> = ["AUD", "CAD", "CHF", "EUR", "GBP", "INR", "JPY"]
            .into_iter()
            .map(String::from)
            .collect();

        let text = display_codes(&codes);
        assert!(text.contains("Available currencies (7 total):"));
        for code in &codes {
            assert!(text.contains(code.as_str()));
        }
    }
}
