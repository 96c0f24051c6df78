//! Menu driven terminal front end.
use super::{currencies, normalize_code, ui};
use crate::core::ConversionService;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const BANNER_WIDTH: usize = 60;

enum Flow {
    Continue,
    Exit,
}

/// Writes `message`, then reads one trimmed line. `None` means end of input.
async fn prompt<R: AsyncBufRead + Unpin, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\nOptions:")?;
    writeln!(output, "1. Convert Currency")?;
    writeln!(output, "2. View Popular Exchange Rates")?;
    writeln!(output, "3. List All Available Currencies")?;
    writeln!(output, "4. Refresh Rates")?;
    writeln!(output, "5. Exit")?;
    Ok(())
}

async fn convert<R: AsyncBufRead + Unpin, W: Write>(
    service: &ConversionService,
    input: &mut R,
    output: &mut W,
) -> Result<Flow> {
    writeln!(output, "\n--- Currency Conversion ---")?;

    let Some(amount) = prompt(input, output, "Enter amount: ").await? else {
        return Ok(Flow::Exit);
    };
    let Some(from) = prompt(input, output, "From currency (e.g., USD): ").await? else {
        return Ok(Flow::Exit);
    };
    let Some(to) = prompt(input, output, "To currency (e.g., EUR): ").await? else {
        return Ok(Flow::Exit);
    };

    let amount: f64 = match amount.parse() {
        Ok(amount) => amount,
        Err(_) => {
            writeln!(
                output,
                "\n{}",
                ui::style_text(&format!("Invalid amount: {amount}"), ui::StyleType::Error)
            )?;
            return Ok(Flow::Continue);
        }
    };

    match service.convert(amount, &from, &to).await {
        Ok(result) => writeln!(output, "\n{}", result.display_as_text())?,
        Err(e) => writeln!(
            output,
            "\n{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        )?,
    }
    Ok(Flow::Continue)
}

async fn popular_rates<R: AsyncBufRead + Unpin, W: Write>(
    service: &ConversionService,
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Flow> {
    let message = format!("\nEnter base currency (default {}): ", config.base_currency);
    let Some(base) = prompt(input, output, &message).await? else {
        return Ok(Flow::Exit);
    };
    let base = match normalize_code(&base) {
        code if code.is_empty() => config.base_currency.clone(),
        code => code,
    };

    match service
        .list_popular_rates(&base, config.popular_currencies.as_slice())
        .await
    {
        Ok(popular) => writeln!(output, "\n{}", popular.display_as_table())?,
        Err(e) => writeln!(
            output,
            "\n{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        )?,
    }
    Ok(Flow::Continue)
}

async fn all_currencies<W: Write>(
    service: &ConversionService,
    config: &AppConfig,
    output: &mut W,
) -> Result<Flow> {
    match service.list_all_currencies(&config.base_currency).await {
        Ok(codes) => writeln!(output, "\n{}", currencies::display_codes(&codes))?,
        Err(e) => writeln!(
            output,
            "\n{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        )?,
    }
    Ok(Flow::Continue)
}

/// Runs the menu loop until the user exits or `input` is exhausted.
pub async fn run<R: AsyncBufRead + Unpin, W: Write>(
    service: &ConversionService,
    config: &AppConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(output, "\n{rule}")?;
    writeln!(output, "{:^BANNER_WIDTH$}", "CURRENCY EXCHANGE RATE APP")?;
    writeln!(output, "{rule}")?;

    loop {
        print_menu(&mut output)?;

        let choice = prompt(&mut input, &mut output, "\nEnter your choice (1-5): ").await?;
        let Some(choice) = choice else {
            break;
        };

        let flow = match choice.as_str() {
            "1" => convert(service, &mut input, &mut output).await?,
            "2" => popular_rates(service, config, &mut input, &mut output).await?,
            "3" => all_currencies(service, config, &mut output).await?,
            "4" => {
                service.refresh().await;
                writeln!(output, "\nRates will be fetched fresh on the next lookup.")?;
                Flow::Continue
            }
            "5" => {
                writeln!(output, "\nThank you for using Currency Exchange Rate App!")?;
                Flow::Exit
            }
            _ => {
                writeln!(output, "\nInvalid choice. Please try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server() -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/USD"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"base": "USD", "date": "2024-01-01", "rates": {"USD": 1, "EUR": 0.92, "GBP": 0.79}}"#,
            ))
            .mount(&mock_server)
            .await;
        mock_server
    }

    async fn run_session(mock_server: &MockServer, script: &str, cache_enabled: bool) -> String {
        let mut config = AppConfig::default();
        config.provider.base_url = mock_server.uri();
        config.cache.enabled = cache_enabled;
        let service = ConversionService::new(providers::from_config(&config).unwrap());

        let mut output = Vec::new();
        run(&service, &config, script.as_bytes(), &mut output)
            .await
            .expect("Interactive session failed");
        String::from_utf8(output).unwrap()
    }

    #[tokio::test]
    async fn test_exit_option() {
        let mock_server = create_mock_server().await;
        let output = run_session(&mock_server, "5\n", false).await;
        assert!(output.contains("CURRENCY EXCHANGE RATE APP"));
        assert!(output.contains("Thank you for using Currency Exchange Rate App!"));
    }

    #[tokio::test]
    async fn test_convert_flow() {
        let mock_server = create_mock_server().await;
        let output = run_session(&mock_server, "1\n100\nusd\neur\n5\n", false).await;
        assert!(output.contains("100.00 USD = 92.00 EUR"));
        assert!(output.contains("1 USD = 0.9200 EUR"));
    }

    #[tokio::test]
    async fn test_convert_flow_reports_errors_and_continues() {
        let mock_server = create_mock_server().await;
        let script = "1\nabc\nUSD\nEUR\n1\n10\nUSD\nZZZ\n5\n";
        let output = run_session(&mock_server, script, false).await;
        assert!(output.contains("Invalid amount: abc"));
        assert!(output.contains("Error: Currency ZZZ not found"));
        assert!(output.contains("Thank you"));
    }

    #[tokio::test]
    async fn test_popular_rates_default_base() {
        let mock_server = create_mock_server().await;
        let output = run_session(&mock_server, "2\n\n5\n", false).await;
        assert!(output.contains("Exchange Rates for USD"));
        assert!(output.contains("0.9200 EUR"));
        assert!(output.contains("0.7900 GBP"));
    }

    #[tokio::test]
    async fn test_refresh_clears_cached_rates() {
        let mock_server = create_mock_server().await;
        let output = run_session(&mock_server, "3\n3\n4\n3\n5\n", true).await;
        assert!(output.contains("Available currencies (3 total):"));
        assert!(output.contains("Rates will be fetched fresh on the next lookup."));

        // The second listing is served from the cache, the third refetches
        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_without_cache() {
        let mock_server = create_mock_server().await;
        let output = run_session(&mock_server, "3\n4\n3\n5\n", false).await;
        assert!(output.contains("4. Refresh Rates"));
        assert!(output.contains("Rates will be fetched fresh on the next lookup."));
        assert!(!output.contains("Cached"));

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_choice_and_eof() {
        let mock_server = create_mock_server().await;
        let output = run_session(&mock_server, "9\n", false).await;
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(!output.contains("Thank you"));
    }
}
