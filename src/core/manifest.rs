use crate::utils::{ErrorContext, KataError, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Package manifest (`package.json`) wrapper.
///
/// Keeps the full document as an order-preserving JSON object; a rewrite
/// leaves every field the operator already had in place. Only the `scripts`
/// table is ever modified, and only additively.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    fields: Map<String, Value>,
}

impl PackageManifest {
    /// Parse manifest content. `path` is only used for error context.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| {
            let snippet: String = content.lines().take(5).collect::<Vec<_>>().join("\n");
            KataError::manifest_with_context(
                format!("failed to parse manifest: {}", e),
                ErrorContext::new()
                    .with_file(path.to_path_buf())
                    .with_snippet(snippet),
            )
        })?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(KataError::manifest_with_context(
                "manifest root must be a JSON object".to_string(),
                ErrorContext::new().with_file(path.to_path_buf()),
            )),
        }
    }

    /// Serialize back to the 2-space pretty format npm writes, with a
    /// trailing newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&Value::Object(self.fields.clone()))?;
        output.push('\n');
        Ok(output)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn scripts(&self) -> Option<&Map<String, Value>> {
        self.fields.get("scripts").and_then(Value::as_object)
    }

    /// Merge `additions` into the manifest's script table, creating the table
    /// if the manifest has none.
    pub fn merge_scripts(&mut self, additions: &[(&str, &str)]) {
        let existing = match self.fields.get("scripts").and_then(Value::as_object) {
            Some(scripts) => scripts.clone(),
            None => Map::new(),
        };

        let merged = merge_scripts(existing, additions);
        self.fields.insert("scripts".to_string(), Value::Object(merged));
    }
}

/// Merge a fixed set of named commands into an existing script table.
/// Pre-existing entries survive; on key collision the addition wins.
pub fn merge_scripts(existing: Map<String, Value>, additions: &[(&str, &str)]) -> Map<String, Value> {
    let mut merged = existing;
    for (name, command) in additions {
        merged.insert(name.to_string(), Value::String(command.to_string()));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn manifest_path() -> PathBuf {
        PathBuf::from("package.json")
    }

    #[test]
    fn test_merge_preserves_unrelated_scripts() {
        let mut existing = Map::new();
        existing.insert("lint".to_string(), Value::String("eslint .".to_string()));

        let merged = merge_scripts(
            existing,
            &[("build", "webpack --mode production"), ("dev", "webpack serve")],
        );

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["lint"], "eslint .");
        assert_eq!(merged["build"], "webpack --mode production");
        assert_eq!(merged["dev"], "webpack serve");
    }

    #[test]
    fn test_merge_addition_wins_on_collision() {
        let mut existing = Map::new();
        existing.insert("build".to_string(), Value::String("tsc".to_string()));

        let merged = merge_scripts(existing, &[("build", "webpack --mode production")]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged["build"], "webpack --mode production");
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let result = PackageManifest::parse("[1, 2, 3]", &manifest_path());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_error_carries_file_context() {
        let err = PackageManifest::parse("{ not json", &manifest_path()).unwrap_err();
        let detailed = err.format_detailed();
        assert!(detailed.contains("package.json"));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let content = r#"{
  "name": "demo",
  "version": "1.0.0",
  "author": "someone",
  "scripts": {
    "lint": "eslint ."
  }
}"#;
        let mut manifest = PackageManifest::parse(content, &manifest_path()).unwrap();
        manifest.merge_scripts(&[("build", "webpack --mode production")]);

        let output = manifest.to_pretty_string().unwrap();
        assert!(output.contains("\"author\": \"someone\""));
        assert!(output.contains("\"lint\": \"eslint .\""));
        assert!(output.contains("\"build\": \"webpack --mode production\""));
        assert!(output.ends_with('\n'));

        // Field order survives the rewrite
        let name_pos = output.find("\"name\"").unwrap();
        let version_pos = output.find("\"version\"").unwrap();
        let author_pos = output.find("\"author\"").unwrap();
        assert!(name_pos < version_pos && version_pos < author_pos);
    }

    #[test]
    fn test_merge_creates_missing_script_table() {
        let mut manifest =
            PackageManifest::parse(r#"{"name": "demo"}"#, &manifest_path()).unwrap();
        manifest.merge_scripts(&[("build", "webpack --mode production")]);

        let scripts = manifest.scripts().unwrap();
        assert_eq!(scripts["build"], "webpack --mode production");
    }
}
