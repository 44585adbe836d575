//! Currency selection menus built from the catalog.
use thiserror::Error;

use crate::fx::{Catalog, types::CurrencyCode};

/// Errors that can occur when selecting menu entries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MenuError {
    #[error("Menu {menu} has no option {option}")]
    UnknownOption { menu: String, option: String },
    #[error("Currency {0} is not in the menu")]
    UnknownCurrency(String),
    #[error("Menu has no selection")]
    NothingSelected,
}

/// A single selectable entry in a currency menu.
#[derive(Debug, Clone)]
pub struct MenuOption {
    /// Unique identifier, the owning menu's id followed by the currency code.
    /// Used for programmatic selection, see [`swap`].
    id: String,

    /// The machine value, the bare currency code.
    value: CurrencyCode,

    /// Human-readable label, formatted as `"<code> - <name>"`.
    label: String,
}

impl MenuOption {
    /// Gets the option's unique identifier.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Gets the currency code this option stands for.
    pub fn get_value(&self) -> &str {
        &self.value
    }

    /// Gets the human-readable label.
    pub fn get_label(&self) -> &str {
        &self.label
    }
}

/// A currency selection menu, one option per catalog entry in catalog order.
#[derive(Debug, Clone)]
pub struct Menu {
    id: String,
    options: Vec<MenuOption>,
    selected: usize,
}

impl Menu {
    /// Builds a menu from the catalog. The first entry starts selected;
    /// an empty catalog yields an empty menu with no selection.
    pub fn from_catalog(id: &str, catalog: &Catalog) -> Self {
        let options = catalog
            .entries()
            .iter()
            .map(|(code, name)| MenuOption {
                id: format!("{id}{code}"),
                value: code.clone(),
                label: format!("{code} - {name}"),
            })
            .collect();
        Menu {
            id: id.to_string(),
            options,
            selected: 0,
        }
    }

    /// Gets the menu's identifier.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Gets all options in the menu.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Gets the currently selected option, if any.
    pub fn selected(&self) -> Option<&MenuOption> {
        self.options.get(self.selected)
    }

    /// Gets the currency code of the current selection, if any.
    pub fn value(&self) -> Option<&str> {
        self.selected().map(MenuOption::get_value)
    }

    /// Selects the option whose value is the given currency code.
    pub fn select_value(&mut self, code: &str) -> Result<(), MenuError> {
        let index = self
            .options
            .iter()
            .position(|opt| opt.value == code)
            .ok_or_else(|| MenuError::UnknownCurrency(code.to_string()))?;
        self.selected = index;
        Ok(())
    }

    /// Selects the option with the given unique identifier.
    pub fn select_by_id(&mut self, option_id: &str) -> Result<(), MenuError> {
        let index = self
            .options
            .iter()
            .position(|opt| opt.id == option_id)
            .ok_or_else(|| MenuError::UnknownOption {
                menu: self.id.clone(),
                option: option_id.to_string(),
            })?;
        self.selected = index;
        Ok(())
    }
}

/// Swaps the selections of the two menus.
///
/// Each menu's new selection is addressed by its option identifier,
/// (menu id + the opposite menu's currently selected code). Pure state
/// mutation: no recomputation, no network request.
pub fn swap(from: &mut Menu, to: &mut Menu) -> Result<(), MenuError> {
    let from_code = from.value().ok_or(MenuError::NothingSelected)?.to_string();
    let to_code = to.value().ok_or(MenuError::NothingSelected)?.to_string();

    let from_target = format!("{}{}", from.get_id(), to_code);
    let to_target = format!("{}{}", to.get_id(), from_code);
    from.select_by_id(&from_target)?;
    to.select_by_id(&to_target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{Menu, MenuError, swap};
    use crate::fx::Catalog;

    fn catalog() -> Catalog {
        Catalog::from_pairs(&[
            ("USD", "United States Dollar"),
            ("EUR", "Euro"),
            ("JPY", "Japanese Yen"),
        ])
    }

    #[test]
    fn test_one_option_per_catalog_entry() {
        let catalog = catalog();
        let menu = Menu::from_catalog("from", &catalog);
        assert_eq!(menu.options().len(), catalog.len());
        let labels: Vec<&str> = menu.options().iter().map(|o| o.get_label()).collect();
        assert_eq!(
            labels,
            vec![
                "USD - United States Dollar",
                "EUR - Euro",
                "JPY - Japanese Yen"
            ]
        );
    }

    #[test]
    fn test_option_ids_derive_from_menu_and_code() {
        let menu = Menu::from_catalog("to", &catalog());
        let ids: Vec<&str> = menu.options().iter().map(|o| o.get_id()).collect();
        assert_eq!(ids, vec!["toUSD", "toEUR", "toJPY"]);
    }

    #[test]
    fn test_select_value() {
        let mut menu = Menu::from_catalog("from", &catalog());
        assert_eq!(menu.value(), Some("USD"));
        menu.select_value("JPY").unwrap();
        assert_eq!(menu.value(), Some("JPY"));
        assert_eq!(
            menu.select_value("XXX"),
            Err(MenuError::UnknownCurrency("XXX".to_string()))
        );
        // A failed selection leaves the previous one in place.
        assert_eq!(menu.value(), Some("JPY"));
    }

    #[test]
    fn test_swap_exchanges_selections() {
        let catalog = catalog();
        let mut from = Menu::from_catalog("from", &catalog);
        let mut to = Menu::from_catalog("to", &catalog);
        from.select_value("USD").unwrap();
        to.select_value("EUR").unwrap();

        swap(&mut from, &mut to).unwrap();
        assert_eq!(from.value(), Some("EUR"));
        assert_eq!(to.value(), Some("USD"));

        // Swapping back restores the original selections.
        swap(&mut from, &mut to).unwrap();
        assert_eq!(from.value(), Some("USD"));
        assert_eq!(to.value(), Some("EUR"));
    }

    #[test]
    fn test_swap_empty_menus() {
        let empty = Catalog::from_pairs(&[]);
        let mut from = Menu::from_catalog("from", &empty);
        let mut to = Menu::from_catalog("to", &empty);
        assert_eq!(swap(&mut from, &mut to), Err(MenuError::NothingSelected));
    }
}
