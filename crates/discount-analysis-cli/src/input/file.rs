use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Read a config file, choosing YAML or JSON by extension (`.yaml`/`.yml` vs anything else).
pub fn read_config<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let is_yaml = canonical
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);
    if !is_yaml {
        return read_json(path);
    }

    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value: T = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok(value)
}

/// Resolve the path against the working directory and check it names a file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discount_analysis_core::scenarios::ScenarioSet;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_yaml_tier_config() {
        let f = write_temp(
            ".yaml",
            "tiers:\n  - name: Weekend\n    discount_rate: \"0.07\"\n    acquisition_cost_rate: \"0.01\"\n",
        );
        let set: ScenarioSet = read_config(f.path().to_str().unwrap()).unwrap();
        assert_eq!(set.tiers.len(), 1);
        assert_eq!(set.tiers[0].discount_rate, dec!(0.07));
    }

    #[test]
    fn test_json_tier_config() {
        let f = write_temp(
            ".json",
            r#"[{"name": "Flash", "discount_rate": "0.12", "acquisition_cost_rate": "0.02"}]"#,
        );
        let set: ScenarioSet = read_config(f.path().to_str().unwrap()).unwrap();
        assert_eq!(set.tiers[0].name, "Flash");
    }

    #[test]
    fn test_missing_file() {
        let err = read_config::<ScenarioSet>("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let f = write_temp(".json", "{ not json");
        let err = read_json::<ScenarioSet>(f.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
