use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

mod fx;

use fx::{Form, FormEvent, Menu, OpenExchangeRates};

/// The size of the channel carrying form events.
const CHANNEL_SIZE: usize = 100;

/// Environment variable holding the Open Exchange Rates application id.
const APP_ID_VAR: &str = "OXR_APP_ID";

#[tokio::main]
async fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() > 2 {
        eprintln!("Usage: {} [app_id]  (or set {APP_ID_VAR})", args[0]);
        std::process::exit(1);
    }
    let app_id = match args.get(1).cloned().or_else(|| std::env::var(APP_ID_VAR).ok()) {
        Some(app_id) => app_id,
        None => {
            eprintln!("Usage: {} [app_id]  (or set {APP_ID_VAR})", args[0]);
            std::process::exit(1);
        }
    };

    let provider = Arc::new(OpenExchangeRates::new(app_id));
    let catalog = match provider.currencies().await {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error loading currency catalog: {err}");
            std::process::exit(1);
        }
    };
    println!("Loaded {} currencies.", catalog.len());
    println!("Commands: from <CODE> | to <CODE> | amount <VALUE> | swap | convert | list | quit");

    let from_menu = Menu::from_catalog("from", &catalog);
    let to_menu = Menu::from_catalog("to", &catalog);

    let (sender, receiver) = mpsc::channel(CHANNEL_SIZE);
    let mut form = Form::new(catalog, from_menu, to_menu, provider, receiver, sender.clone());

    let handle = tokio::spawn(async move {
        form.run().await;
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        let Some(event) = parse_command(&line) else {
            eprintln!("Unrecognized command: {line}");
            continue;
        };
        let quit = matches!(event, FormEvent::Quit);
        if let Err(err) = sender.send(event).await {
            eprintln!("Error sending form event: {err}");
        }
        if quit {
            break;
        }
    }

    // End of input shuts the form down as well.
    let _ = sender.send(FormEvent::Quit).await;
    drop(sender);
    handle.await.expect("Failed to join the form task");
}

/// Parses one line of user input into a form event.
fn parse_command(line: &str) -> Option<FormEvent> {
    let mut parts = line.split_whitespace();
    let event = match parts.next()? {
        "from" => FormEvent::FromSelected(parts.next()?.to_uppercase()),
        "to" => FormEvent::ToSelected(parts.next()?.to_uppercase()),
        "amount" => FormEvent::AmountChanged(parts.next()?.to_string()),
        "swap" => FormEvent::Swap,
        "convert" => FormEvent::Submit,
        "list" => FormEvent::List,
        "quit" | "exit" => FormEvent::Quit,
        _ => return None,
    };
    // Trailing junk after a complete command is not accepted.
    if parts.next().is_some() {
        return None;
    }
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::parse_command;
    use crate::fx::FormEvent;

    #[test]
    fn test_parse_selection_commands() {
        assert!(matches!(
            parse_command("from usd"),
            Some(FormEvent::FromSelected(code)) if code == "USD"
        ));
        assert!(matches!(
            parse_command("to EUR"),
            Some(FormEvent::ToSelected(code)) if code == "EUR"
        ));
        assert!(matches!(
            parse_command("amount 4"),
            Some(FormEvent::AmountChanged(raw)) if raw == "4"
        ));
    }

    #[test]
    fn test_parse_plain_commands() {
        assert!(matches!(parse_command("swap"), Some(FormEvent::Swap)));
        assert!(matches!(parse_command("convert"), Some(FormEvent::Submit)));
        assert!(matches!(parse_command("list"), Some(FormEvent::List)));
        assert!(matches!(parse_command("quit"), Some(FormEvent::Quit)));
        assert!(matches!(parse_command("exit"), Some(FormEvent::Quit)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(parse_command("").is_none());
        assert!(parse_command("from").is_none());
        assert!(parse_command("frobnicate").is_none());
        assert!(parse_command("swap now").is_none());
    }
}
