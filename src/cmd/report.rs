use crate::reader::read_dataset;
use crate::report::top_pairs;
use std::path::PathBuf;

pub fn run(dir: PathBuf, limit: usize, json: bool) -> anyhow::Result<()> {
    if !dir.exists() {
        anyhow::bail!("dataset directory does not exist: {}", dir.display());
    }

    let data = read_dataset(&dir)?;
    let rows = top_pairs(&data, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:>8} {:<22} {:>8} {:<32} {:>7} {:>9} {:>12} {:>10}",
        "cust_id", "customer", "prod_id", "product", "orders", "quantity", "revenue", "shipping"
    );
    for row in &rows {
        println!(
            "{:>8} {:<22} {:>8} {:<32} {:>7} {:>9} {:>12} {:>10}",
            row.customer_id,
            truncate(&row.customer_name, 22),
            row.product_id,
            truncate(&row.product_name, 32),
            row.number_of_orders,
            row.total_quantity,
            row.total_revenue.to_string(),
            row.total_shipment_cost.to_string(),
        );
    }
    eprintln!("{} pair(s)", rows.len());
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{head}…")
    }
}
