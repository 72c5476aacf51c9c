//! Plain-text rendering of the dashboard screen.

use orders_table::{
    columns::{HeadCell, HEAD_CELLS},
    format, Row, SelectAllState, SortDirection, TableRegion, TableView,
};
use shared::{domain::OrdersState, protocol::Order};

use crate::dashboard::{Dashboard, Tab};

pub const LOADING: &str = "Loading...";
pub const EMPTY: &str = "No orders";
pub const ERROR: &str = "Error happened while fetching orders";

const SCREEN_WIDTH: usize = 100;
const CHECK_WIDTH: usize = 4;
const COLUMN_WIDTHS: [usize; 4] = [24, 22, 36, 14];

/// Renders the whole screen for a snapshot already restricted to the active
/// tab.
pub fn screen(dashboard: &Dashboard, state: &OrdersState) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{:^width$}", dashboard.logo(), width = SCREEN_WIDTH));
    lines.push("=".repeat(SCREEN_WIDTH));
    lines.push("ORDERS".to_string());
    lines.push(String::new());
    lines.push(tabs_line(dashboard.tab(), state));
    lines.push("-".repeat(SCREEN_WIDTH));
    lines.extend(region_lines(dashboard.view(), state));
    lines.join("\n")
}

fn tabs_line(active: Tab, state: &OrdersState) -> String {
    let tabs: Vec<String> = Tab::ALL
        .into_iter()
        .map(|tab| {
            if tab == active {
                format!("[{}]", tab.label())
            } else {
                format!(" {} ", tab.label())
            }
        })
        .collect();
    let total: f64 = state
        .orders
        .iter()
        .map(|order| order.order_details.value)
        .sum();
    let summary = format!("Total orders: {}", format::total_label(total));
    let left = tabs.join(" ");
    let padding = SCREEN_WIDTH.saturating_sub(left.chars().count() + summary.chars().count());
    format!("{left}{}{summary}", " ".repeat(padding.max(1)))
}

pub fn region_lines(view: &TableView, state: &OrdersState) -> Vec<String> {
    match view.region(state) {
        TableRegion::Loading => vec![LOADING.to_string()],
        TableRegion::Error => vec![ERROR.to_string()],
        TableRegion::Empty => vec![EMPTY.to_string()],
        TableRegion::Populated(rows) => table_lines(view, &rows, &state.orders),
    }
}

fn table_lines(view: &TableView, rows: &[Row], orders: &[Order]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() * 2 + 3);

    let check = checkbox(view.select_all_state(orders));
    let headers: Vec<String> = HEAD_CELLS
        .iter()
        .map(|cell| header_label(view, cell))
        .collect();
    lines.push(cells(
        check,
        [
            headers[0].as_str(),
            headers[1].as_str(),
            headers[2].as_str(),
            headers[3].as_str(),
        ],
    ));

    for row in rows {
        let check = if view.is_selected(row.order_number) {
            "[x]"
        } else {
            "[ ]"
        };
        let number = format!("# {}", row.order_number);
        let status = format!("* {}", row.status);
        let value = format::value_label(row.ordered_value);
        lines.push(cells(
            check,
            [&number, &status, &row.customer_address, &value].map(String::as_str),
        ));

        let ordered = format::ordered_label(&row.ordered_date);
        let updated = format::updated_label(&row.shipped_date);
        lines.push(cells("", [ordered.as_str(), updated.as_str(), "", ""]));
    }

    lines.push("-".repeat(SCREEN_WIDTH));
    lines.push(format!(
        "Rows per page: {}   {}   sorted by {} ({})   selected: {}",
        view.page_size(),
        view.page_caption(orders.len()),
        view.sort_key(),
        view.sort_direction(),
        view.selected_among(orders)
    ));
    lines
}

fn header_label(view: &TableView, cell: &HeadCell) -> String {
    if view.sort_key() != cell.field {
        return cell.label.to_string();
    }
    let arrow = match view.sort_direction() {
        SortDirection::Ascending => "^",
        SortDirection::Descending => "v",
    };
    format!("{} {arrow}", cell.label)
}

fn checkbox(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Unchecked => "[ ]",
        SelectAllState::Indeterminate => "[-]",
        SelectAllState::Checked => "[x]",
    }
}

fn cells(check: &str, values: [&str; 4]) -> String {
    let mut line = format!("{check:<width$}", width = CHECK_WIDTH);
    for (index, (value, width)) in values.iter().zip(COLUMN_WIDTHS).enumerate() {
        let value = fit(value, width - 1);
        if HEAD_CELLS[index].numeric {
            line.push_str(&format!("{value:>width$}"));
        } else {
            line.push_str(&format!("{value:<width$}"));
        }
    }
    line.trim_end().to_string()
}

fn fit(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(width.saturating_sub(1)).collect();
    truncated.push('~');
    truncated
}
