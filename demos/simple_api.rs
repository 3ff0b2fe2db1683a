//! Simple API usage with the pure parse functions
//!
//! Parses inline markup, no network involved.

use catalog_scrape::{parse_detail, parse_listing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let listing = r#"
        <div class="catalog-card" data-id="3021">
            <a class="card-title" href="/item/3021">Rover</a>
            <div class="card-author">by <a href="/user/grace">Grace</a></div>
            <ul class="tag-list"><li>Vehicle</li><li>Small Grid</li></ul>
        </div>"#;

    println!("=== Listing ===");
    for record in parse_listing(listing) {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }

    let detail = r#"
        <ul class="requirements">
            <li class="requirement" data-tooltip="Iron Ingot"><span class="quantity">Qty: 5</span></li>
        </ul>"#;

    println!("\n=== Detail ===");
    println!("{}", serde_json::to_string_pretty(&parse_detail(detail, false))?);

    Ok(())
}
