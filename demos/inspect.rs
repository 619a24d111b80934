//! Parses a FRED document and prints it in the JSON test encoding.
//!
//! Run with: cargo run --example inspect

use fred::parse;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let source = r#"
        ; a small inventory record
        item(sku="A-100" revision=2) {
            name: "Widget"
            price: 12.50
            tags: [$hardware $small]
            restocked: 2023-06-01T08:00:00Z
            photo: #"iVBORw0KGgo="
            discontinued: (flag reason="superseded")
        }
    "#;

    let doc = parse(source)?;
    println!("Minified:\n{doc}\n");
    println!("JSON encoding:\n{}", serde_json::to_string_pretty(&doc)?);

    // Every problem in a broken document is reported at once.
    let broken = "{name \"Widget\" price: [1 2 tags: $}";
    if let Err(err) = parse(broken) {
        println!("\n{err}");
        for problem in &err {
            println!("  at offset {}: line {}, column {}", problem.offset(), problem.line(), problem.column());
        }
    }

    Ok(())
}
