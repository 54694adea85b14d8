use steam_vdf::{from_slice, from_str, to_string, to_vec, vdf, Map, TextEncoding, Value};

// Documents exercising every syntax feature in combination, decoded against
// trees built with the vdf! macro.

const UNQUOTED_VDF: &str = "
node
{
    key value
}
";

const QUOTED_VDF: &str = "
\"node\"
{
    \"key\" \"value\"
}
";

const MACRO_UNQUOTED_VDF: &str = "
node
{
    key value [$MACRO]
}
";

const MACRO_QUOTED_VDF: &str = "
\"node\"
{
    \"key\" \"value\" [$MACRO]
}
";

const COMMENT_QUOTED_VDF: &str = "
\"node\"
{
    // Hi I'm a comment.
    \"key\" \"value\" [$MACRO]
}
";

const SUBNODE_QUOTED_VDF: &str = "
\"node\"
{
    \"subnode\"
    {
        \"key\" \"value\"
    }
}
";

const MIXED_VDF: &str = "
node
{
    \"key\" value
    key2 \"value\"
    \"key3\" \"value\" [$MACRO]

    // Comment
    \"subnode\" [$MACRO]
    {
        key value
    }

    \"key4\" \"value\"
}
";

fn expected_simple() -> Map {
    vdf!({ "node": { "key": "value" } }).as_node().unwrap().clone()
}

#[test]
fn test_unquoted() {
    assert_eq!(from_str(UNQUOTED_VDF).unwrap(), expected_simple());
}

#[test]
fn test_quoted() {
    assert_eq!(from_str(QUOTED_VDF).unwrap(), expected_simple());
}

#[test]
fn test_quoting_styles_equivalent() {
    assert_eq!(
        from_str(UNQUOTED_VDF).unwrap(),
        from_str(QUOTED_VDF).unwrap()
    );
}

#[test]
fn test_macro_unquoted() {
    assert_eq!(from_str(MACRO_UNQUOTED_VDF).unwrap(), expected_simple());
}

#[test]
fn test_macro_quoted() {
    assert_eq!(from_str(MACRO_QUOTED_VDF).unwrap(), expected_simple());
}

#[test]
fn test_comment_quoted() {
    assert_eq!(from_str(COMMENT_QUOTED_VDF).unwrap(), expected_simple());
}

#[test]
fn test_subnode_quoted() {
    let expected = vdf!({
        "node": {
            "subnode": {
                "key": "value"
            }
        }
    });
    assert_eq!(
        from_str(SUBNODE_QUOTED_VDF).unwrap(),
        *expected.as_node().unwrap()
    );
}

#[test]
fn test_mixed() {
    let expected = vdf!({
        "node": {
            "key": "value",
            "key2": "value",
            "key3": "value",
            "subnode": {
                "key": "value"
            },
            "key4": "value"
        }
    });
    assert_eq!(from_str(MIXED_VDF).unwrap(), *expected.as_node().unwrap());
}

#[test]
fn test_decode_preserves_declaration_order() {
    let map = from_str(MIXED_VDF).unwrap();
    let node = map.get("node").and_then(Value::as_node).unwrap();
    let keys: Vec<_> = node.keys().cloned().collect();
    assert_eq!(keys, vec!["key", "key2", "key3", "subnode", "key4"]);
}

// Serialization: decode(encode(t)) comparisons, mirroring the
// simple/subnode/array/numerical canonical shapes.

fn roundtrip(tree: &Value) -> Map {
    let text = to_string(tree.as_node().unwrap()).unwrap();
    from_str(&text).unwrap()
}

#[test]
fn test_simple_tree_roundtrip() {
    let tree = vdf!({ "node": { "key": "value" } });
    assert_eq!(roundtrip(&tree), *tree.as_node().unwrap());
}

#[test]
fn test_subnode_tree_roundtrip() {
    let tree = vdf!({ "node": { "subnode": { "key": "value" } } });
    assert_eq!(roundtrip(&tree), *tree.as_node().unwrap());
}

#[test]
fn test_array_flag_convention() {
    let tree = vdf!({ "array": ["a", "b", "c"] });
    let expected = vdf!({
        "array": {
            "a": "1",
            "b": "1",
            "c": "1"
        }
    });
    assert_eq!(roundtrip(&tree), *expected.as_node().unwrap());
}

#[test]
fn test_numerical_tree_roundtrip() {
    // Numeric literals are strings after a round trip.
    let tree = vdf!({ "number": 1, "number2": 2 });
    let expected = vdf!({ "number": "1", "number2": "2" });
    assert_eq!(roundtrip(&tree), *expected.as_node().unwrap());
}

#[test]
fn test_combination_roundtrip() {
    let tree = vdf!({
        "node": {
            "key": "value",
            "subnode": {
                "key": "value"
            },
            "array": ["a", "b", "c", 1, 2, 3],
            "number": 1024
        }
    });
    let expected = vdf!({
        "node": {
            "key": "value",
            "subnode": {
                "key": "value"
            },
            "array": {
                "a": "1",
                "b": "1",
                "c": "1",
                "1": "1",
                "2": "1",
                "3": "1"
            },
            "number": "1024"
        }
    });
    assert_eq!(roundtrip(&tree), *expected.as_node().unwrap());
}

#[test]
fn test_node_list_roundtrips_to_list() {
    let tree = vdf!({
        "node": [
            { "first": "1" },
            { "second": "2" }
        ]
    });
    assert_eq!(roundtrip(&tree), *tree.as_node().unwrap());
}

#[test]
fn test_default_output_decodes_as_utf16() {
    let tree = vdf!({ "node": { "key": "value" } });
    let bytes = to_vec(tree.as_node().unwrap()).unwrap();

    let (back, detected) =
        steam_vdf::from_slice_detected(&bytes).unwrap();
    assert_eq!(detected, TextEncoding::Utf16Le);
    assert_eq!(back, *tree.as_node().unwrap());
}

#[test]
fn test_from_slice_utf8_input() {
    let source = "\"key\" \"v\u{00e4}lue\"";
    let map = from_slice(source.as_bytes()).unwrap();
    assert_eq!(map.get("key").and_then(Value::as_str), Some("v\u{00e4}lue"));
}
