//! Annotation sets read from files, stdin or the command line

use anyhow::{Context, Result};
use authreq::annotations::Annotated;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Metadata block of a resource manifest
#[derive(Debug, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// Resource manifest in JSON form, only its metadata is read
#[derive(Debug, Deserialize)]
pub struct ResourceManifest {
    pub metadata: ObjectMeta,
}

impl Annotated for ResourceManifest {
    fn annotations(&self) -> Option<&BTreeMap<String, String>> {
        self.metadata.annotations.as_ref()
    }
}

/// Either a full manifest or a bare annotation map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AnnotationInput {
    Resource(ResourceManifest),
    Annotations(BTreeMap<String, String>),
}

/// Annotation set along with where it came from
#[derive(Debug)]
pub struct AnnotationSource {
    pub source: String,
    pub input: AnnotationInput,
}

impl AnnotationSource {
    /// Parses a JSON document, either a manifest with `metadata` or a flat map
    pub fn from_json(source: &str, json: &str) -> Result<Self> {
        let input: AnnotationInput = serde_json::from_str(json).with_context(|| {
            format!("{source}: expected a resource manifest or an object of string annotations")
        })?;
        let source = match &input {
            AnnotationInput::Resource(manifest) => describe_resource(source, &manifest.metadata),
            AnnotationInput::Annotations(_) => source.to_string(),
        };
        Ok(Self { source, input })
    }

    /// Reads a JSON file, `-` reads stdin
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = path.display().to_string();
        let json = if source == "-" {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .with_context(|| "reading annotations from stdin")?;
            buffer
        } else {
            std::fs::read_to_string(path).with_context(|| format!("reading {source}"))?
        };
        Self::from_json(&source, &json)
    }

    /// Annotation set built from `KEY=VALUE` command line pairs
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            source: "command line".to_string(),
            input: AnnotationInput::Annotations(pairs.iter().cloned().collect()),
        }
    }
}

fn describe_resource(source: &str, metadata: &ObjectMeta) -> String {
    match (&metadata.namespace, &metadata.name) {
        (Some(namespace), Some(name)) => format!("{source} ({namespace}/{name})"),
        (None, Some(name)) => format!("{source} ({name})"),
        _ => source.to_string(),
    }
}

/// clap value parser for `--annotation KEY=VALUE`
pub fn parse_annotation_pair(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{arg}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty annotation key in '{arg}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_annotation_pair() {
        assert_eq!(
            parse_annotation_pair("ingress.kubernetes.io/auth-url=http://a.com/x?y=1"),
            Ok((
                "ingress.kubernetes.io/auth-url".to_string(),
                "http://a.com/x?y=1".to_string()
            ))
        );
        assert_eq!(
            parse_annotation_pair("k="),
            Ok(("k".to_string(), String::new()))
        );
        assert!(parse_annotation_pair("no-separator").is_err());
        assert!(parse_annotation_pair("=value").is_err());
    }

    #[test]
    fn test_flat_map_input() {
        let json = r#"{"ingress.kubernetes.io/auth-url": "http://a.com"}"#;
        let source = AnnotationSource::from_json("a.json", json).expect("flat map");
        assert_eq!(source.source, "a.json");
        match source.input {
            AnnotationInput::Annotations(map) => {
                assert_eq!(
                    map.get("ingress.kubernetes.io/auth-url").map(String::as_str),
                    Some("http://a.com")
                );
            }
            AnnotationInput::Resource(_) => panic!("expected a flat map"),
        }
    }

    #[test]
    fn test_manifest_input() {
        let json = r#"{
            "apiVersion": "extensions/v1beta1",
            "kind": "Ingress",
            "metadata": {
                "name": "foo",
                "namespace": "default",
                "annotations": {"ingress.kubernetes.io/auth-url": "http://a.com"}
            }
        }"#;
        let source = AnnotationSource::from_json("ing.json", json).expect("manifest");
        assert_eq!(source.source, "ing.json (default/foo)");
        match source.input {
            AnnotationInput::Resource(manifest) => assert!(manifest.annotations().is_some()),
            AnnotationInput::Annotations(_) => panic!("expected a manifest"),
        }

        let json = r#"{"metadata": {"name": "bare"}}"#;
        let source = AnnotationSource::from_json("bare.json", json).expect("manifest");
        match source.input {
            AnnotationInput::Resource(manifest) => assert!(manifest.annotations().is_none()),
            AnnotationInput::Annotations(_) => panic!("expected a manifest"),
        }
    }

    #[test]
    fn test_non_string_values_are_rejected() {
        let json = r#"{"ingress.kubernetes.io/auth-send-body": true}"#;
        let err = AnnotationSource::from_json("bad.json", json).unwrap_err();
        assert!(err.to_string().starts_with("bad.json:"));
    }
}
