use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Color};

use super::format::{format_currency, format_number};
use super::ui;
use crate::api::{FundSortKey, FundsApi};
use crate::config::AppConfig;
use crate::core::names::display_name;
use crate::core::sort::SortDirection;
use crate::store::FundsStore;

/// View options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct FundsViewOptions {
    pub sort: Option<FundSortKey>,
    pub descending: bool,
    pub page: usize,
    pub items_per_page: Option<usize>,
}

pub async fn run(
    api: &(dyn FundsApi + Send + Sync),
    options: &FundsViewOptions,
    config: &AppConfig,
) -> Result<()> {
    let pb = ui::new_spinner("Cargando fondos...");
    let funds = api.fetch_funds().await?;
    pb.finish_and_clear();

    let mut store = FundsStore::new(config.items_per_page);
    store.set_funds(funds);
    if let Some(items_per_page) = options.items_per_page {
        store.set_items_per_page(items_per_page);
    }
    if let Some(key) = options.sort {
        store.toggle_sort(key);
        if options.descending {
            store.toggle_sort(key);
        }
    }
    // Page selection last: changing the page size resets to page 1.
    store.set_page(options.page.max(1));

    print!("{}", render_funds_table(&store));
    Ok(())
}

const COLUMNS: &[(&str, Option<FundSortKey>)] = &[
    ("Nombre", Some(FundSortKey::Name)),
    ("ISIN", None),
    ("Divisa", Some(FundSortKey::Currency)),
    ("Categoría", Some(FundSortKey::Category)),
    ("Valor", Some(FundSortKey::Value)),
    ("YTD", Some(FundSortKey::Ytd)),
    ("1A", Some(FundSortKey::OneYear)),
    ("3A", Some(FundSortKey::ThreeYears)),
    ("5A", Some(FundSortKey::FiveYears)),
    ("TER", Some(FundSortKey::Ter)),
    ("Riesgo", Some(FundSortKey::RiskLevel)),
];

fn render_funds_table(store: &FundsStore) -> String {
    let view = store.current_view();

    let mut table = ui::new_styled_table();
    table.set_header(
        COLUMNS
            .iter()
            .map(|&(title, key)| ui::header_cell(&header_title(store, title, key)))
            .collect::<Vec<_>>(),
    );

    for fund in &view.funds {
        table.add_row(vec![
            Cell::new(display_name(&fund.id, fund.name.as_deref())),
            Cell::new(&fund.isin),
            Cell::new(&fund.currency),
            Cell::new(&fund.category),
            Cell::new(format_currency(fund.value, &fund.currency))
                .set_alignment(CellAlignment::Right),
            metric_cell(fund.profitability.as_ref().and_then(|p| p.ytd)),
            metric_cell(fund.profitability.as_ref().and_then(|p| p.one_year)),
            metric_cell(fund.profitability.as_ref().and_then(|p| p.three_years)),
            metric_cell(fund.profitability.as_ref().and_then(|p| p.five_years)),
            Cell::new(&fund.ter).set_alignment(CellAlignment::Right),
            Cell::new(&fund.risk_level).set_alignment(CellAlignment::Right),
        ]);
    }

    let footer = format!(
        "Página {} de {} · {} fondos",
        view.current_page,
        view.total_pages,
        format_number(view.total_funds as f64, 0)
    );

    format!(
        "{table}\n{}\n",
        ui::style_text(&footer, ui::StyleType::Subtle)
    )
}

/// Marks the active sort column with a direction arrow.
fn header_title(store: &FundsStore, title: &str, key: Option<FundSortKey>) -> String {
    let state = store.sort_state();
    match (key, state.column, state.direction) {
        (Some(key), Some(active), Some(direction)) if key == active => {
            let arrow = match direction {
                SortDirection::Ascending => "▲",
                SortDirection::Descending => "▼",
            };
            format!("{title} {arrow}")
        }
        _ => title.to_string(),
    }
}

fn metric_cell(value: Option<f64>) -> Cell {
    value.map_or(
        Cell::new("-")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Right),
        ui::change_cell,
    )
}
