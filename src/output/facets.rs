use crate::catalog::{Catalog, Facet};

pub fn render(catalog: &Catalog) {
    println!("Facet Values");
    println!("============");
    println!();

    for facet in Facet::ALL {
        let values = catalog.distinct_values(facet);
        println!("{} ({}):", facet.label(), values.len());
        for value in values {
            println!("  {}", value);
        }
        println!();
    }
}
