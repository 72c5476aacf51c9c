//! Dashboard screen state: the active tab plus the table view, and the
//! commands that drive them.

use orders_table::TableView;
use shared::{domain::OrdersState, protocol::Order};
use tracing::debug;

use crate::{commands::ViewCommand, render};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    All,
    Shipped,
}

impl Tab {
    pub const ALL: [Self; 2] = [Self::All, Self::Shipped];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Shipped => "Shipped",
        }
    }

    pub fn includes(self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Shipped => order.status.eq_ignore_ascii_case("shipped"),
        }
    }
}

/// What the caller should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    ShowHelp,
    Refresh,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    view: TableView,
    tab: Tab,
    logo: String,
}

impl Dashboard {
    pub fn new(view: TableView, logo: impl Into<String>) -> Self {
        Self {
            view,
            tab: Tab::All,
            logo: logo.into(),
        }
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    /// The store snapshot restricted to the active tab.
    pub fn tab_state(&self, state: &OrdersState) -> OrdersState {
        OrdersState {
            orders: state
                .orders
                .iter()
                .filter(|order| self.tab.includes(order))
                .cloned()
                .collect(),
            meta: state.meta,
        }
    }

    pub fn apply(&mut self, command: ViewCommand, state: &OrdersState) -> Outcome {
        debug!(?command, "applying dashboard command");
        let orders = self.tab_state(state).orders;
        match command {
            ViewCommand::Sort(field) => self.view.request_sort(field),
            ViewCommand::Page(page) => self.view.set_page(page),
            ViewCommand::NextPage => self.view.next_page(orders.len()),
            ViewCommand::PreviousPage => self.view.previous_page(),
            ViewCommand::PageSize(size) => self.view.set_page_size(size),
            ViewCommand::ToggleRow(key) => self.view.toggle_row(key),
            ViewCommand::SelectAll(checked) => self.view.toggle_select_all(checked, &orders),
            ViewCommand::Tab(tab) => {
                if tab != self.tab {
                    self.tab = tab;
                    self.view.set_page(0);
                }
            }
            ViewCommand::Refresh => return Outcome::Refresh,
            ViewCommand::Help => return Outcome::ShowHelp,
            ViewCommand::Quit => return Outcome::Quit,
        }
        Outcome::Redraw
    }

    pub fn render(&self, state: &OrdersState) -> String {
        render::screen(self, &self.tab_state(state))
    }
}

#[cfg(test)]
#[path = "tests/dashboard_tests.rs"]
mod tests;
