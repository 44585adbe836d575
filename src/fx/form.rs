//! The conversion form: wires the menus, the amount field, and the result
//! panel to a source of exchange rates.
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

use crate::fx::{
    Catalog, ConvertError, Menu, MenuError, ProviderError, RateSource, RateTable, convert, menu,
    normalize_amount,
    types::{AMOUNT_DECIMALS, CurrencyCode, UNIT_DECIMALS},
};

/// Errors that can occur while handling a form event.
#[derive(Error, Debug)]
pub enum FormError {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Menu(#[from] MenuError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("Form has no currency selected")]
    NoSelection,
}

/// Events driving the conversion form.
#[derive(Debug)]
pub enum FormEvent {
    /// The amount field changed; carries the raw user input.
    AmountChanged(String),
    /// A currency was picked in the "from" menu.
    FromSelected(CurrencyCode),
    /// A currency was picked in the "to" menu.
    ToSelected(CurrencyCode),
    /// The swap control was pressed.
    Swap,
    /// The form was submitted.
    Submit,
    /// The currency menus should be listed.
    List,
    /// A rate fetch finished; `token` ties it to the submission that
    /// issued it.
    RatesReceived {
        token: u64,
        result: Result<RateTable, ProviderError>,
    },
    /// The form should shut down.
    Quit,
}

/// The four output regions the form renders into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultPanel {
    /// `"<amount> <from display name> ="`
    pub amount_from: String,
    /// `"<full result> <to display name>"`
    pub amount_to: String,
    /// `"1 <from code> = <unit rate> <to code>"`
    pub unit_from: String,
    /// `"1 <to code> = <unit rate> <from code>"`
    pub unit_to: String,
}

/// The conversion form controller.
///
/// Owns the catalog snapshot, the two currency menus, the normalized amount
/// field and the result panel. Each submission fetches a fresh rate table on
/// a spawned task; the result comes back through the event channel tagged
/// with a submission token, and only the most recent submission's result is
/// rendered.
pub struct Form {
    /// Immutable snapshot of the provider's currency catalog.
    catalog: Catalog,
    /// The source-currency menu.
    from_menu: Menu,
    /// The target-currency menu.
    to_menu: Menu,
    /// The amount field, always normalized to two decimal places.
    amount: String,
    /// The output regions of the last rendered conversion.
    panel: ResultPanel,
    /// Where fresh rate tables come from.
    rates: Arc<dyn RateSource>,
    /// Incoming form events.
    receiver: mpsc::Receiver<FormEvent>,
    /// Handed to fetch tasks so results flow back through the event loop.
    sender: mpsc::Sender<FormEvent>,
    /// Token of the most recent submission; older fetch results are dropped.
    latest_token: u64,
}

impl Form {
    /// Creates a form over the given catalog, menus and rate source.
    pub fn new(
        catalog: Catalog,
        from_menu: Menu,
        to_menu: Menu,
        rates: Arc<dyn RateSource>,
        receiver: mpsc::Receiver<FormEvent>,
        sender: mpsc::Sender<FormEvent>,
    ) -> Self {
        Form {
            catalog,
            from_menu,
            to_menu,
            amount: "1.00".to_string(),
            panel: ResultPanel::default(),
            rates,
            receiver,
            sender,
            latest_token: 0,
        }
    }

    /// Gets the result panel.
    pub fn get_panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// Gets the normalized amount field.
    pub fn get_amount(&self) -> &str {
        &self.amount
    }

    /// Handles one form event. Returns `true` when the panel was updated.
    fn handle_event(&mut self, event: FormEvent) -> Result<bool, FormError> {
        match event {
            FormEvent::AmountChanged(raw) => {
                self.amount = normalize_amount(&raw)?;
            }
            FormEvent::FromSelected(code) => self.from_menu.select_value(&code)?,
            FormEvent::ToSelected(code) => self.to_menu.select_value(&code)?,
            FormEvent::Swap => menu::swap(&mut self.from_menu, &mut self.to_menu)?,
            FormEvent::Submit => self.submit(),
            FormEvent::List => self.print_menus(),
            FormEvent::RatesReceived { token, result } => {
                // A newer submission supersedes this one; drop it unrendered.
                if token != self.latest_token {
                    return Ok(false);
                }
                let table = result?;
                self.render(&table)?;
                return Ok(true);
            }
            FormEvent::Quit => {}
        }
        Ok(false)
    }

    /// Issues a fresh rate fetch for the current form state.
    fn submit(&mut self) {
        self.latest_token += 1;
        let token = self.latest_token;
        let rates = Arc::clone(&self.rates);
        let sender = self.sender.clone();
        tokio::spawn(async move {
            let result = rates.latest().await;
            // A closed channel means the form is gone; nothing to render into.
            let _ = sender.send(FormEvent::RatesReceived { token, result }).await;
        });
    }

    /// Renders the current conversion request into the panel.
    fn render(&mut self, table: &RateTable) -> Result<(), FormError> {
        let from = self
            .from_menu
            .value()
            .ok_or(FormError::NoSelection)?
            .to_string();
        let to = self
            .to_menu
            .value()
            .ok_or(FormError::NoSelection)?
            .to_string();
        let amount: f64 = self
            .amount
            .parse()
            .map_err(|_| ConvertError::InvalidAmount(self.amount.clone()))?;

        let full = convert(amount, table, &from, &to, AMOUNT_DECIMALS)?;
        let unit_forward = convert(1.0, table, &from, &to, UNIT_DECIMALS)?;
        let unit_backward = convert(1.0, table, &to, &from, UNIT_DECIMALS)?;

        // Menu values come from the catalog, so the names are present; the
        // code itself is a serviceable fallback.
        let from_name = self.catalog.name(&from).unwrap_or(&from);
        let to_name = self.catalog.name(&to).unwrap_or(&to);

        self.panel.amount_from = format!("{} {} =", self.amount, from_name);
        self.panel.amount_to = format!("{full} {to_name}");
        self.panel.unit_from = format!("1 {from} = {unit_forward} {to}");
        self.panel.unit_to = format!("1 {to} = {unit_backward} {from}");
        Ok(())
    }

    /// Prints every menu option together with the current selections.
    fn print_menus(&self) {
        for option in self.from_menu.options() {
            println!("{}", option.get_label());
        }
        if let (Some(from), Some(to)) = (self.from_menu.value(), self.to_menu.value()) {
            println!("converting {} {from} -> {to}", self.amount);
        }
    }

    /// Prints the four panel lines.
    fn print_panel(&self) {
        println!("{}", self.panel.amount_from);
        println!("{}", self.panel.amount_to);
        println!("{}", self.panel.unit_from);
        println!("{}", self.panel.unit_to);
    }

    /// Runs the form loop, processing events until a quit event arrives or
    /// the channel closes.
    pub async fn run(&mut self) {
        while let Some(event) = self.receiver.recv().await {
            if matches!(event, FormEvent::Quit) {
                break;
            }
            match self.handle_event(event) {
                Ok(true) => self.print_panel(),
                Ok(false) => {}
                Err(e) => eprintln!("Error processing form event: {e}"),
            }
        }
    }
}
