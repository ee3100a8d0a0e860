//! End-to-end tests for `tapiz designs`, `tapiz presets` and `tapiz quote`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Designs
// ============================================================================

#[test]
fn test_designs_json_lists_catalog_in_order() {
    let result = json_of(&run_isolated(&["designs", "--json"]));
    let designs = result.as_array().expect("Should be an array");

    let ids: Vec<&str> = designs.iter().map(|d| d["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["sunflowers", "roses", "abstract", "geometric"]);

    for design in designs {
        let expected = if design["premium"].as_bool().unwrap() { 200 } else { 170 };
        assert_eq!(design["total"], expected, "total for {}", design["id"]);
    }
}

#[test]
fn test_designs_human_output() {
    let output = run_isolated(&["designs"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Girasoles Clásicos"));
    assert!(stdout.contains("$200"));
}

// ============================================================================
// Presets
// ============================================================================

#[test]
fn test_presets_json_has_full_palettes() {
    let result = json_of(&run_isolated(&["presets", "--json"]));
    let presets = result.as_array().expect("Should be an array");
    assert_eq!(presets.len(), 4);

    let bosque = presets
        .iter()
        .find(|p| p["name"] == "Bosque Sereno")
        .expect("Bosque Sereno should be listed");
    let colors = bosque["colors"].as_object().expect("colors object");
    assert_eq!(colors.len(), 8);
    assert_eq!(colors["leaves"], "#2E7D32");
    assert!(colors.contains_key("sunflowerPetals"));
}

#[test]
fn test_presets_human_output_lists_names() {
    let output = run_isolated(&["presets"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    for name in ["Atardecer Cálido", "Bosque Sereno", "Océano Dorado", "Rosa Suave"] {
        assert!(stdout.contains(name), "missing preset {name}");
    }
}

// ============================================================================
// Quote
// ============================================================================

#[test]
fn test_quote_default_design() {
    let result = json_of(&run_isolated(&["quote", "--json"]));
    assert_eq!(result["id"], "sunflowers");
    assert_eq!(result["base"], 150);
    assert_eq!(result["customization"], 20);
    assert_eq!(result["design"], 0);
    assert_eq!(result["total"], 170);
}

#[test]
fn test_quote_premium_design() {
    let result = json_of(&run_isolated(&["quote", "--design", "geometric", "--json"]));
    assert_eq!(result["design"], 30);
    assert_eq!(result["total"], 200);
}

#[test]
fn test_quote_unknown_design_is_priced_as_regular() {
    let result = json_of(&run_isolated(&["quote", "--design", "tulips", "--json"]));
    assert_eq!(result["name"], "Diseño personalizado");
    assert_eq!(result["total"], 170);
}

#[test]
fn test_quote_human_output_hides_zero_surcharge() {
    let output = run_isolated(&["quote", "--design", "roses"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Total:"));
    assert!(stdout.contains("$170"));
    assert!(!stdout.contains("Diseño especial"));
}
