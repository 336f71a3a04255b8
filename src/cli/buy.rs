use anyhow::{Result, bail};
use tracing::debug;

use super::format::{format_currency, format_number};
use super::ui;
use crate::api::{BuyOrder, FundsApi};
use crate::core::names::display_name;
use crate::core::quantity::calculate_quantity;
use crate::notify::{Severity, notify};

pub async fn run(api: &(dyn FundsApi + Send + Sync), fund_id: &str, amount: f64) -> Result<()> {
    let pb = ui::new_spinner("Cargando fondos...");
    let funds = api.fetch_funds().await?;
    pb.finish_and_clear();

    let Some(fund) = funds.iter().find(|fund| fund.id == fund_id) else {
        notify(Severity::Error, "No se pudo encontrar el fondo seleccionado");
        bail!("unknown fund id: {fund_id}");
    };

    // A zero unit price yields an infinite quantity here; the backend is
    // the one to refuse it.
    let quantity = calculate_quantity(amount, fund.value);
    debug!(fund_id, amount, quantity, "Submitting buy order");

    let order = BuyOrder {
        fund_id: fund.id.clone(),
        quantity,
    };

    match api.submit_buy(&order).await {
        Ok(()) => {
            notify(
                Severity::Success,
                &format!(
                    "Compra realizada con éxito: {} en {} ({} unidades)",
                    format_currency(amount, &fund.currency),
                    display_name(&fund.id, fund.name.as_deref()),
                    format_number(quantity, 4)
                ),
            );
            Ok(())
        }
        Err(err) => {
            // The provider surfaces the backend's own error message when
            // the response carries one.
            notify(Severity::Error, &err.to_string());
            Err(err)
        }
    }
}
