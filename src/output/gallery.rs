use crate::catalog::Slide;
use crate::gate::Verdict;

use super::truncate;

const SMALL_WIDTH: usize = 24;
const USE_CASE_WIDTH: usize = 18;
const MEDIUM_WIDTH: usize = 48;

const HEADERS: [&str; 8] = [
    "slide_id",
    "image",
    "company",
    "slide_type",
    "industry",
    "use_case",
    "details",
    "description",
];

pub fn render(view: &[&Slide], verdict: &Verdict) {
    println!("Slide Gallery");
    println!("=============");
    println!();

    match verdict {
        Verdict::NeedsConfirmation { rows } => {
            println!(
                "Warning: displaying {} slides may cause the viewer to lag.",
                rows
            );
            println!("Re-run with --confirm to display the gallery anyway.");
        }
        Verdict::Render => {
            if view.is_empty() {
                println!("No matching slides for the selected filters.");
            } else {
                render_table(view);
            }
        }
    }
}

fn render_table(view: &[&Slide]) {
    let rows: Vec<[String; 8]> = view
        .iter()
        .map(|slide| {
            [
                slide.slide_id.clone(),
                slide.image_url.clone(),
                truncate(&slide.company, SMALL_WIDTH),
                truncate(&slide.slide_type, SMALL_WIDTH),
                truncate(&slide.industry, SMALL_WIDTH),
                truncate(&slide.use_case, USE_CASE_WIDTH),
                truncate(&slide.details, MEDIUM_WIDTH),
                truncate(&slide.description, MEDIUM_WIDTH),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    print_row(&HEADERS.map(|h| h.to_string()), &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", separator.join("-+-"));
    for row in &rows {
        print_row(row, &widths);
    }
    println!();
    println!("{} slide(s)", view.len());
}

fn print_row(cells: &[String; 8], widths: &[usize; 8]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<w$}", cell, w = *width))
        .collect();
    println!("{}", padded.join(" | "));
}
