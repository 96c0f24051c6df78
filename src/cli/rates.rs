use super::ui;
use crate::core::{ConversionService, PopularRates};
use anyhow::Result;
use comfy_table::Cell;

impl PopularRates {
    pub fn display_as_table(&self) -> String {
        let base = &self.base;

        let mut output = format!(
            "{}\n{}\n\n",
            ui::style_text(&format!("Exchange Rates for {base}"), ui::StyleType::Title),
            ui::style_text(
                &format!("Last Updated: {}", self.as_of),
                ui::StyleType::Subtle
            )
        );

        if self.quotes.is_empty() {
            output.push_str(&ui::style_text(
                "No rates available for the selected currencies",
                ui::StyleType::Error,
            ));
            return output;
        }

        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Name"),
            ui::header_cell(&format!("1 {base} =")),
            ui::header_cell("Inverse"),
        ]);

        for quote in &self.quotes {
            table.add_row(vec![
                Cell::new(&quote.currency),
                Cell::new(ConversionService::lookup_display_name(&quote.currency)),
                ui::rate_cell(quote.rate, &quote.currency),
                ui::rate_cell(1.0 / quote.rate, base),
            ]);
        }

        output.push_str(&table.to_string());
        output
    }
}

pub async fn run<S: AsRef<str>>(
    service: &ConversionService,
    base: &str,
    currencies: &[S],
) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let popular = service.list_popular_rates(base, currencies).await;
    pb.finish_and_clear();

    println!("{}", popular?.display_as_table());
    Ok(())
}
