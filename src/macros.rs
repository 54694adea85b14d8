/// Builds a [`Value`](crate::Value) tree from a literal.
///
/// Braced literals become nodes, bracketed literals become lists, and
/// everything else becomes a scalar through `Value::from`, so numeric and
/// bool literals take their VDF string form (`1` becomes `"1"`).
///
/// ```rust
/// use steam_vdf::vdf;
///
/// let tree = vdf!({
///     "node": {
///         "key": "value",
///         "count": 3
///     },
///     "array": ["a", "b", "c"]
/// });
/// assert!(tree.is_node());
/// ```
#[macro_export]
macro_rules! vdf {
    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::vdf!($elem)),*])
    };

    // Handle empty node
    ({}) => {
        $crate::Value::Node($crate::Map::new())
    };

    // Handle non-empty node
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut node = $crate::Map::new();
        $(
            node.insert($key.to_string(), $crate::vdf!($value));
        )*
        $crate::Value::Node(node)
    }};

    // Scalars: anything with a From impl (strings, integers, floats, bools)
    ($scalar:expr) => {
        $crate::Value::from($scalar)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_vdf_macro_scalars() {
        assert_eq!(vdf!("hello"), Value::Scalar("hello".to_string()));
        assert_eq!(vdf!(42), Value::Scalar("42".to_string()));
        assert_eq!(vdf!(3.5), Value::Scalar("3.5".to_string()));
        assert_eq!(vdf!(true), Value::Scalar("1".to_string()));
    }

    #[test]
    fn test_vdf_macro_lists() {
        assert_eq!(vdf!([]), Value::List(vec![]));

        let list = vdf!(["a", "b", 3]);
        match list {
            Value::List(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], Value::from("a"));
                assert_eq!(items[1], Value::from("b"));
                assert_eq!(items[2], Value::from("3"));
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_vdf_macro_nodes() {
        assert_eq!(vdf!({}), Value::Node(Map::new()));

        let tree = vdf!({
            "key": "value",
            "count": 30
        });

        match tree {
            Value::Node(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("key"), Some(&Value::from("value")));
                assert_eq!(map.get("count"), Some(&Value::from("30")));
            }
            _ => panic!("expected node"),
        }
    }

    #[test]
    fn test_vdf_macro_nesting() {
        let tree = vdf!({
            "node": {
                "subnode": {
                    "key": "value"
                }
            }
        });

        assert_eq!(
            tree.get("node")
                .and_then(|n| n.get("subnode"))
                .and_then(|s| s.get("key")),
            Some(&Value::from("value"))
        );
    }
}
