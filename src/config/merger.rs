//! Deep merge of layered YAML configuration.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely, so a project `probes:` list replaces
//!   the user's list rather than extending it
//! - Null values in the overlay delete the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::Value;

/// Deep merge `overlay` onto `base`.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge configs in order; later ones take precedence.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn settings_merge_key_by_key() {
        let base = yaml("settings:\n  build_marker: \"-ci\"\n  column_order: union\n");
        let overlay = yaml("settings:\n  column_order: sorted\n");

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["settings"]["build_marker"], "-ci");
        assert_eq!(result["settings"]["column_order"], "sorted");
    }

    #[test]
    fn probe_lists_are_replaced() {
        let base = yaml("probes:\n  - name: Rust\n  - name: Go\n");
        let overlay = yaml("probes:\n  - name: Zig\n");

        let result = deep_merge(&base, &overlay);

        let probes = result["probes"].as_sequence().unwrap();
        assert_eq!(probes.len(), 1);
        assert_eq!(probes[0]["name"], "Zig");
    }

    #[test]
    fn null_deletes_key() {
        let base = yaml("settings:\n  build_output: out/build.xml\n  test_output: out/test.xml\n");
        let overlay = yaml("settings:\n  build_output: ~\n");

        let result = deep_merge(&base, &overlay);

        assert!(result["settings"].get("build_output").is_none());
        assert_eq!(result["settings"]["test_output"], "out/test.xml");
    }

    #[test]
    fn merge_configs_applies_in_order() {
        let configs = vec![
            yaml("settings:\n  missing_values: fail\n"),
            yaml("settings:\n  missing_values: sentinel\n"),
            yaml("settings:\n  report_suffix: .txt\n"),
        ];

        let result = merge_configs(&configs);

        assert_eq!(result["settings"]["missing_values"], "sentinel");
        assert_eq!(result["settings"]["report_suffix"], ".txt");
    }

    #[test]
    fn merge_of_nothing_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Default::default()));
    }
}
