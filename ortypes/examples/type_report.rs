//! Example printing the C++ type of every value in a registry.
//!
//! Run with: `RUST_LOG=debug cargo run --example type_report`

use ortypes::prelude::*;

const REGISTRY_JSON: &str = r#"{
    "input": {"tensor": "float"},
    "label": {"tensor": "int64"},
    "probabilities": {"sequence": {"map": {"key": "int64", "value": {"tensor": "float"}}}},
    "embedding": {"tensor": "bfloat16"},
    "spectrum": {"tensor": "complex64"}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry: ValueRegistry = serde_json::from_str(REGISTRY_JSON)?;

    let formatter = TypeFormatter::new();
    let qualified = TypeFormatter::with_config(
        FormatterConfig::new()
            .map_template("std::map")
            .sequence_template("std::vector"),
    );

    println!("{:<16} {:<36} {}", "value", "type", "qualified");
    for (name, _) in registry.iter() {
        let type_str = formatter.value_name_to_type_str(name, &registry)?;
        let qualified_str = qualified.value_name_to_type_str(name, &registry)?;
        let marker = if is_unsupported_type_str(&type_str) {
            " (unsupported)"
        } else {
            ""
        };
        println!("{name:<16} {type_str:<36} {qualified_str}{marker}");
    }

    let mut usage = OperatorTypeUsage::new();
    usage.record_input(&formatter, 0, "input", &registry)?;
    usage.record_output(&formatter, 0, "label", &registry)?;
    usage.record_output(&formatter, 1, "probabilities", &registry)?;
    if let Err(e) = usage.record_input(&formatter, 1, "spectrum", &registry) {
        eprintln!("Skipping 'spectrum': {e}");
    }

    println!();
    println!("type usage: {}", usage.to_config_string()?);

    Ok(())
}
