use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use futures::try_join;

use super::format::{format_currency, format_number};
use super::ui;
use crate::api::{Fund, FundsApi, PortfolioItem};
use crate::config::AppConfig;
use crate::core::collation::compare_es;
use crate::core::group::{CategoryBucket, group_by_category};
use crate::core::names::{category_display_name, display_name, sort_by_name};

pub async fn run(api: &(dyn FundsApi + Send + Sync), config: &AppConfig) -> Result<()> {
    let pb = ui::new_spinner("Cargando cartera...");
    let (funds, portfolio) = try_join!(api.fetch_funds(), api.fetch_portfolio())?;
    pb.finish_and_clear();

    if portfolio.is_empty() {
        println!("No tienes posiciones en tu cartera.");
        return Ok(());
    }

    let buckets = categorize(&portfolio, &funds);
    let mut grand_total = 0.0;

    for bucket in &buckets {
        let items = sort_by_name(&bucket.items, |item| {
            display_name(&item.id, item.name.as_deref())
        });
        let category_total: f64 = items.iter().map(|item| item.total_value).sum();
        grand_total += category_total;

        println!(
            "\n{}",
            ui::style_text(category_display_name(&bucket.category), ui::StyleType::Title)
        );
        println!("{}", category_table(&items, &funds, config));
        println!(
            "{} {}",
            ui::style_text("Total categoría:", ui::StyleType::TotalLabel),
            format_currency(category_total, &config.currency)
        );
    }

    println!(
        "\n{} {}",
        ui::style_text("Valor total de la cartera:", ui::StyleType::TotalLabel),
        ui::style_text(
            &format_currency(grand_total, &config.currency),
            ui::StyleType::TotalValue
        )
    );
    Ok(())
}

/// Groups positions by fund category, ordering sections by their display
/// name under Spanish collation.
fn categorize(portfolio: &[PortfolioItem], funds: &[Fund]) -> Vec<CategoryBucket<PortfolioItem>> {
    let mut buckets = group_by_category(
        portfolio,
        |item| item.id.as_str(),
        |id| {
            funds
                .iter()
                .find(|fund| fund.id == id)
                .map(|fund| fund.category.clone())
        },
    );
    buckets.sort_by(|a, b| {
        compare_es(
            category_display_name(&a.category),
            category_display_name(&b.category),
        )
    });
    buckets
}

fn category_table(items: &[PortfolioItem], funds: &[Fund], config: &AppConfig) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Nombre"),
        ui::header_cell("Unidades"),
        ui::header_cell("Valor"),
    ]);

    for item in items {
        let currency = funds
            .iter()
            .find(|fund| fund.id == item.id)
            .map_or(config.currency.as_str(), |fund| fund.currency.as_str());

        table.add_row(vec![
            Cell::new(display_name(&item.id, item.name.as_deref())),
            Cell::new(format_number(item.quantity, 4)).set_alignment(CellAlignment::Right),
            Cell::new(format_currency(item.total_value, currency))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}
