//! Parse a VDF document and walk the resulting tree.
//!
//! Run with: `cargo run --example inspect_schema`

use steam_vdf::{from_str, Value};

const SCHEMA: &str = r#"
"items_game"
{
    "rarities"
    {
        "common"    "1"
        "rare"      "2"
        "mythical"  "3"
    }

    "items"
    {
        "5021"
        {
            "name"      "Decoder Ring"
            "prefab"    "valve tool"
        }
        "5039"
        {
            "name"      "Ghastly Gibus"
            "prefab"    "hat"
        }
    }
}
"#;

fn describe(value: &Value, depth: usize) {
    let pad = "  ".repeat(depth);
    match value {
        Value::Scalar(s) => println!("{pad}= {s}"),
        Value::Node(map) => {
            for (key, child) in map.iter() {
                println!("{pad}{key}");
                describe(child, depth + 1);
            }
        }
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                println!("{pad}[{index}]");
                describe(item, depth + 1);
            }
        }
    }
}

fn main() {
    let tree = from_str(SCHEMA).expect("schema parses");

    println!("Full tree:");
    for (key, value) in tree.iter() {
        println!("{key}");
        describe(value, 1);
    }

    // Targeted lookups
    let game = tree.get("items_game").expect("root node");
    let rare = game
        .get("rarities")
        .and_then(|r| r.get("rare"))
        .and_then(Value::as_i64);
    println!("\nrarity of 'rare': {rare:?}");

    let name = game
        .get("items")
        .and_then(|i| i.get("5039"))
        .and_then(|i| i.get("name"))
        .and_then(Value::as_str);
    println!("item 5039: {name:?}");
}
