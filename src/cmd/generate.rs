use crate::config::GenerateConfig;
use crate::generator::Generator;
use crate::writer::write_dataset;
use std::path::PathBuf;
use std::time::Instant;

pub fn run(
    output: PathBuf,
    customers: usize,
    products: usize,
    orders: usize,
    seed: u64,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = GenerateConfig {
        customers,
        products,
        orders,
        seed,
        ..GenerateConfig::default()
    };
    config.validate()?;

    let start = Instant::now();
    let data = Generator::new(config).generate()?;
    write_dataset(&output, &data)?;

    if !quiet {
        eprintln!("Generated dataset in {}", output.display());
        eprintln!("  customers.csv    {:>7} rows", data.customers.len());
        eprintln!("  products.csv     {:>7} rows", data.products.len());
        eprintln!("  orders.csv       {:>7} rows", data.orders.len());
        eprintln!("  order_items.csv  {:>7} rows", data.order_items.len());
        eprintln!("  shipments.csv    {:>7} rows", data.shipments.len());
        eprintln!(
            "{} rows total (seed {}) in {:.2?}",
            data.total_rows(),
            seed,
            start.elapsed()
        );
    }

    Ok(())
}
