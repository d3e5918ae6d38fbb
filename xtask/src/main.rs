//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use spfsandbox_types::Outcome;
use std::fs;
use std::path::{Path, PathBuf};

/// Project root (parent of the xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask")
        && let Some(parent) = manifest_dir.parent()
    {
        return Ok(parent.to_path_buf());
    }
    Ok(manifest_dir)
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn fixtures_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("fixtures"))
}

struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_eval_report_schema() -> schemars::Schema {
    schema_for!(spfsandbox_types::EvalReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(spfsandbox_settings::SpfSandboxConfigV1)
}

const EVAL_REPORT_SCHEMA: &str = "spfsandbox.eval.v1.json";
const CONFIG_SCHEMA: &str = "spfsandbox.config.v1.json";

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: EVAL_REPORT_SCHEMA,
            generate: generate_eval_report_schema,
        },
        SchemaSpec {
            filename: CONFIG_SCHEMA,
            generate: generate_config_schema,
        },
    ]
}

/// Pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    let value = serde_json::to_value(schema).context("Failed to convert schema to JSON")?;
    jsonschema::validator_for(&value).map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn schema_errors(validator: &jsonschema::Validator, instance: &serde_json::Value) -> Vec<String> {
    validator
        .iter_errors(instance)
        .map(|e| format!("{} at {}", e, e.instance_path()))
        .collect()
}

/// Validate every fixture against the generated schemas:
/// `spfsandbox.toml` files against the config schema, `expected.*.json`
/// golden reports against the eval report schema.
fn conform() -> anyhow::Result<()> {
    let config_validator = compile(&generate_config_schema())?;
    let report_validator = compile(&generate_eval_report_schema())?;
    println!("✓ schemas compile");

    let root = fixtures_dir()?;
    let mut checked = 0usize;
    let mut errors = Vec::new();

    let mut dirs: Vec<PathBuf> = fs::read_dir(&root)
        .with_context(|| format!("Failed to read {}", root.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();

    for dir in dirs {
        let config_path = dir.join("spfsandbox.toml");
        if config_path.exists() {
            checked += 1;
            errors.extend(conform_config(&config_validator, &config_path)?);
        }

        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            let is_golden = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("expected.") && n.ends_with(".json"));
            if !is_golden {
                continue;
            }
            checked += 1;
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            for err in schema_errors(&report_validator, &value) {
                errors.push(format!("{}: {}", path.display(), err));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} fixture files conform", checked);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Configs only need to match the schema shape; semantic errors such as an
/// unknown outcome are covered by the CLI tests.
fn conform_config(
    validator: &jsonschema::Validator,
    path: &Path,
) -> anyhow::Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let cfg = match spfsandbox_settings::parse_config_toml(&text) {
        Ok(cfg) => cfg,
        Err(err) => return Ok(vec![format!("{}: {:#}", path.display(), err)]),
    };
    let value = serde_json::to_value(&cfg).context("Failed to convert config to JSON")?;
    Ok(schema_errors(validator, &value)
        .into_iter()
        .map(|err| format!("{}: {}", path.display(), err))
        .collect())
}

/// Every outcome must have a non-empty explanation, reachable both by value
/// and by its canonical name.
fn explain_coverage() -> anyhow::Result<()> {
    let names = spfsandbox_types::explain::all_outcomes();
    let mut errors = Vec::new();

    for outcome in Outcome::ALL {
        if !names.contains(&outcome.as_str()) {
            errors.push(format!("Outcome '{}' missing from all_outcomes()", outcome));
        }

        let exp = spfsandbox_types::explain::explain(outcome);
        if exp.title.is_empty() {
            errors.push(format!("Outcome '{}' has empty title", outcome));
        }
        if exp.delivery.is_empty() {
            errors.push(format!("Outcome '{}' has empty delivery note", outcome));
        }
        if exp.reason.is_empty() {
            errors.push(format!("Outcome '{}' has empty reason", outcome));
        }
    }

    for name in names {
        match spfsandbox_types::lookup_explanation(name) {
            Some(exp) if exp.outcome.as_str() == *name => {}
            Some(exp) => errors.push(format!(
                "Outcome name '{}' resolves to '{}'",
                name, exp.outcome
            )),
            None => errors.push(format!("Outcome name '{}' has no explanation", name)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} outcomes have explanations", Outcome::ALL.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Explain coverage failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate tests/fixtures against the generated schemas");
    eprintln!("  explain-coverage  Validate every outcome has an explanation");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", spfsandbox_types::SCHEMA_EVAL_REPORT_V1);
            println!("{}", spfsandbox_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
