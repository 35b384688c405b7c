use bikefinder_catalog::catalog;

/// Strategy for listing the full bike catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogStrategy;

impl super::CommandStrategy for CatalogStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let bikes = catalog();

        println!("=== Bike Catalog ({} bikes) ===\n", bikes.len());
        for bike in &bikes {
            println!("- [{}] {}", bike.id, bike.summary());
            println!("    terrain: {} | weight: {} kg", bike.terrain.join(", "), bike.weight_kg);
        }

        Ok(())
    }
}
