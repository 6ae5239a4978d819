use crate::summary::Summary;

use super::print_count_table;

pub fn render(summary: &Summary) {
    println!("Summary Statistics");
    println!("==================");
    println!();
    println!("Total slides: {}", summary.total);
    println!();

    print_count_table("Company Counts", "Company", &summary.company);
    print_count_table("Slide Type Counts", "Slide Type", &summary.slide_type);
    print_count_table("Industry Counts", "Industry", &summary.industry);
    print_count_table("Use Case Counts", "Use Case", &summary.use_case);
    print_count_table("Tag Counts", "Tag", &summary.tags);
}
