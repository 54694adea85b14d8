//! Build a tree with the vdf! macro and serialize it.
//!
//! Run with: `cargo run --example build_document`

use steam_vdf::{from_slice_detected, to_string, to_vec, vdf};

fn main() {
    let tree = vdf!({
        "localization": {
            "language": "english",
            "tokens": {
                "TF_Weapon_Bat": "Bat",
                "TF_Weapon_Medigun": "Medi Gun"
            }
        }
    });
    let map = tree.as_node().expect("tree is a node");

    // Document text, two spaces per level
    let text = to_string(map).expect("encodes");
    println!("--- document text ---\n{text}");

    // Default byte output: UTF-16 little-endian with a BOM
    let bytes = to_vec(map).expect("encodes");
    println!("--- bytes ---\n{} bytes, BOM {:02X} {:02X}", bytes.len(), bytes[0], bytes[1]);

    // And back again, reporting the detected charset
    let (back, encoding) = from_slice_detected(&bytes).expect("decodes");
    println!("--- round trip ---\ndetected {}, equal: {}", encoding.as_str(), &back == map);
}
