//! # Document Validation — One Pass, Every Problem Reported
//!
//! `ConfigSchema::validate()` checks an operator-supplied
//! [`ConfigDocument`] against the compiled descriptor table and either
//! resolves it into a [`ResolvedConfig`] or fails as a whole. There is no
//! partial commit and no coercion: a failed validation means the operator
//! corrects the document and re-invokes.
//!
//! ## The aggregation contract
//!
//! Validation never stops at the first problem. Every violation found in
//! the single pass is collected into one [`ConfigValidationError`], each
//! tagged with the [`KeyPath`] of the offending location, so a report
//! like
//!
//! ```text
//! configuration failed validation with 2 violation(s):
//!   menu_favourites[0].app_instance: required item field is absent
//!   debg_logging: unknown configuration key
//! ```
//!
//! reaches the operator in one round trip.
//!
//! ## Resolution
//!
//! Supplied keys are carried into the resolved configuration as given;
//! absent keys take their declared default verbatim — the default is not
//! coerced and not re-validated. The absent-key path and the
//! explicit-value path are deliberately distinct: an empty list supplied
//! against `allows_empty: false` fails even when the declared default is
//! that same empty list.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use gpb_core::{ConfigValue, KeyPath, OptionKind};

use crate::descriptor::{ConfigSchema, ItemSpec, KindSpec};
use crate::document::ConfigDocument;

/// One problem found while validating a settings document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// The document supplies a key the schema does not declare.
    #[error("{path}: unknown configuration key")]
    UnknownKey {
        /// The undeclared key.
        path: KeyPath,
    },
    /// A supplied value's kind tag contradicts the declaration.
    #[error("{path}: expected {expected} value, found {found}")]
    TypeMismatch {
        path: KeyPath,
        expected: OptionKind,
        found: OptionKind,
    },
    /// An explicitly supplied empty collection where the declaration
    /// forbids one.
    #[error("{path}: empty {kind} is not allowed for this setting")]
    EmptyNotAllowed { path: KeyPath, kind: OptionKind },
    /// A required option (no declared default) is absent.
    #[error("{path}: setting is required but absent and declares no default")]
    MissingRequired { path: KeyPath },
    /// A nested item does not conform to the declared item schema.
    #[error("{path}: {detail}")]
    MalformedNestedItem { path: KeyPath, detail: String },
}

impl Violation {
    /// The dotted/indexed location of the problem.
    pub fn path(&self) -> &KeyPath {
        match self {
            Self::UnknownKey { path }
            | Self::TypeMismatch { path, .. }
            | Self::EmptyNotAllowed { path, .. }
            | Self::MissingRequired { path }
            | Self::MalformedNestedItem { path, .. } => path,
        }
    }

    fn item_kind_mismatch(path: KeyPath, expected: OptionKind, found: OptionKind) -> Self {
        Self::MalformedNestedItem {
            path,
            detail: format!("expected {expected} item, found {found}"),
        }
    }

    fn missing_item_field(path: KeyPath) -> Self {
        Self::MalformedNestedItem {
            path,
            detail: "required item field is absent".to_string(),
        }
    }

    fn item_field_kind_mismatch(path: KeyPath, expected: OptionKind, found: OptionKind) -> Self {
        Self::MalformedNestedItem {
            path,
            detail: format!("expected {expected} for this item field, found {found}"),
        }
    }
}

/// The full list of violations from one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations, in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the list.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "  {violation}")?;
        }
        Ok(())
    }
}

/// Aggregated failure of one validation pass.
///
/// Carries every violation found, so the caller reports all problems in
/// one pass rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("configuration failed validation with {count} violation(s):\n{list}",
    count = .violations.len(), list = .violations)]
pub struct ConfigValidationError {
    violations: Violations,
}

impl ConfigValidationError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self {
            violations: Violations { violations },
        }
    }

    /// The violations, in report order: declared options in sorted name
    /// order first, then unknown keys in sorted order.
    pub fn violations(&self) -> &[Violation] {
        self.violations.violations()
    }

    /// Consumes the error, yielding its violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations.into_inner()
    }
}

/// The validated, fully-defaulted settings for one engine instance.
///
/// Immutable: the only constructor is a successful validation pass, and
/// the mapping is total over the schema's option names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    settings: BTreeMap<String, ConfigValue>,
}

impl ResolvedConfig {
    pub(crate) fn new(settings: BTreeMap<String, ConfigValue>) -> Self {
        Self { settings }
    }

    /// Looks up one resolved setting.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.settings.get(name)
    }

    /// The setting as a bool, if present and bool-kinded.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ConfigValue::as_bool)
    }

    /// The setting as an integer, if present and int-kinded.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ConfigValue::as_int)
    }

    /// The setting as a string slice, if present and str-kinded.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ConfigValue::as_str)
    }

    /// The setting as a list slice, if present and list-kinded.
    pub fn get_list(&self, name: &str) -> Option<&[ConfigValue]> {
        self.get(name).and_then(ConfigValue::as_list)
    }

    /// The setting as a mapping, if present and dict-kinded.
    pub fn get_dict(&self, name: &str) -> Option<&BTreeMap<String, ConfigValue>> {
        self.get(name).and_then(ConfigValue::as_dict)
    }

    /// Number of resolved settings (equals the schema's option count).
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// True only for the empty schema.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Resolved names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }

    /// Resolved entries in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.settings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Re-expresses the resolved settings as a document, e.g. to
    /// re-validate or to hand to a host that expects raw settings.
    pub fn as_document(&self) -> ConfigDocument {
        ConfigDocument::from(self.settings.clone())
    }
}

impl ConfigSchema {
    /// Validate a settings document against this schema and resolve it.
    ///
    /// A pure function of its two inputs: no shared state, single pass,
    /// safe to call concurrently from independent callers. Either every
    /// declared option resolves (supplied value or verbatim default) and
    /// the document carries no undeclared keys, or the whole call fails
    /// with every violation found.
    ///
    /// # Errors
    ///
    /// [`ConfigValidationError`] aggregating each [`Violation`], tagged
    /// with its key path.
    pub fn validate(
        &self,
        document: &ConfigDocument,
    ) -> Result<ResolvedConfig, ConfigValidationError> {
        let mut violations = Vec::new();
        let mut settings = BTreeMap::new();

        for descriptor in self.options() {
            let path = KeyPath::option(descriptor.name());
            match document.get(descriptor.name()) {
                Some(value) => {
                    check_value(descriptor.spec(), value, &path, &mut violations);
                    settings.insert(descriptor.name().to_string(), value.clone());
                }
                None => match descriptor.default() {
                    // Verbatim substitution; defaults are not re-checked.
                    Some(default) => {
                        settings.insert(descriptor.name().to_string(), default.clone());
                    }
                    None => violations.push(Violation::MissingRequired { path }),
                },
            }
        }

        for key in document.keys() {
            if self.get_option(key).is_none() {
                violations.push(Violation::UnknownKey {
                    path: KeyPath::option(key),
                });
            }
        }

        if violations.is_empty() {
            Ok(ResolvedConfig::new(settings))
        } else {
            Err(ConfigValidationError::new(violations))
        }
    }
}

fn check_value(spec: &KindSpec, value: &ConfigValue, path: &KeyPath, out: &mut Vec<Violation>) {
    match spec {
        KindSpec::Bool | KindSpec::Int | KindSpec::Str => {
            let expected = spec.kind();
            if value.kind() != expected {
                out.push(Violation::TypeMismatch {
                    path: path.clone(),
                    expected,
                    found: value.kind(),
                });
            }
        }
        KindSpec::List { allows_empty, item } => match value {
            ConfigValue::List(elements) => {
                if elements.is_empty() && !allows_empty {
                    out.push(Violation::EmptyNotAllowed {
                        path: path.clone(),
                        kind: OptionKind::List,
                    });
                }
                if let Some(item) = item {
                    for (idx, element) in elements.iter().enumerate() {
                        check_item(item, element, path.index(idx), out);
                    }
                }
            }
            other => out.push(Violation::TypeMismatch {
                path: path.clone(),
                expected: OptionKind::List,
                found: other.kind(),
            }),
        },
        KindSpec::Dict {
            allows_empty,
            fields,
        } => match value {
            ConfigValue::Dict(entries) => {
                if entries.is_empty() && !allows_empty {
                    out.push(Violation::EmptyNotAllowed {
                        path: path.clone(),
                        kind: OptionKind::Dict,
                    });
                }
                if let Some(fields) = fields {
                    check_fields(fields, entries, path, out);
                }
            }
            other => out.push(Violation::TypeMismatch {
                path: path.clone(),
                expected: OptionKind::Dict,
                found: other.kind(),
            }),
        },
    }
}

fn check_item(spec: &ItemSpec, element: &ConfigValue, path: KeyPath, out: &mut Vec<Violation>) {
    if element.kind() != spec.kind {
        out.push(Violation::item_kind_mismatch(path, spec.kind, element.kind()));
        return;
    }
    if let (Some(fields), ConfigValue::Dict(entries)) = (&spec.fields, element) {
        check_fields(fields, entries, &path, out);
    }
}

fn check_fields(
    fields: &BTreeMap<String, OptionKind>,
    entries: &BTreeMap<String, ConfigValue>,
    base: &KeyPath,
    out: &mut Vec<Violation>,
) {
    // Undeclared fields inside an item pass through; the closed-schema
    // rule binds the top-level document only.
    for (field, kind) in fields {
        match entries.get(field) {
            None => out.push(Violation::missing_item_field(base.key(field))),
            Some(value) if value.kind() != *kind => out.push(Violation::item_field_kind_mismatch(
                base.key(field),
                *kind,
                value.kind(),
            )),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{ItemDecl, OptionDecl};

    fn favourites_decl() -> OptionDecl {
        OptionDecl::new(OptionKind::List)
            .with_allows_empty(true)
            .with_default(ConfigValue::List(Vec::new()))
            .with_values(ItemDecl::new(OptionKind::Dict).with_items([
                ("name", OptionKind::Str),
                ("app_instance", OptionKind::Str),
            ]))
    }

    fn engine_schema() -> ConfigSchema {
        ConfigSchema::from_decls([
            (
                "debug_logging",
                OptionDecl::new(OptionKind::Bool).with_default(false),
            ),
            ("project_template", OptionDecl::new(OptionKind::Str)),
            (
                "compatibility_dialog_min_version",
                OptionDecl::new(OptionKind::Int).with_default(2021i64),
            ),
            ("menu_favourites", favourites_decl()),
            (
                "apps",
                OptionDecl::new(OptionKind::Dict)
                    .with_allows_empty(true)
                    .with_default(ConfigValue::Dict(BTreeMap::new())),
            ),
        ])
        .unwrap()
    }

    // ---- successful resolution ----

    #[test]
    fn test_conforming_document_resolves_all_keys() {
        let schema = engine_schema();
        let doc = ConfigDocument::from_yaml_str(
            r#"
debug_logging: true
project_template: film_shot
menu_favourites:
  - name: File Open
    app_instance: paintbox-workfiles
"#,
        )
        .unwrap();

        let resolved = schema.validate(&doc).expect("document should validate");
        assert_eq!(resolved.len(), schema.option_count());
        assert_eq!(
            resolved.keys().collect::<Vec<_>>(),
            schema.option_names(),
            "resolved keys must be exactly the schema's options"
        );
        // Supplied values carried as given.
        assert_eq!(resolved.get_bool("debug_logging"), Some(true));
        assert_eq!(resolved.get_str("project_template"), Some("film_shot"));
        // Absent keys filled from defaults.
        assert_eq!(resolved.get_int("compatibility_dialog_min_version"), Some(2021));
        assert_eq!(resolved.get_dict("apps").map(BTreeMap::len), Some(0));
    }

    #[test]
    fn test_empty_document_resolves_when_fully_defaulted() {
        let schema = ConfigSchema::from_decls([
            (
                "debug_logging",
                OptionDecl::new(OptionKind::Bool).with_default(false),
            ),
            ("menu_favourites", favourites_decl()),
        ])
        .unwrap();

        let resolved = schema
            .validate(&ConfigDocument::new())
            .expect("defaults alone should resolve");
        assert_eq!(resolved.get_bool("debug_logging"), Some(false));
        assert_eq!(resolved.get_list("menu_favourites").map(<[ConfigValue]>::len), Some(0));
    }

    #[test]
    fn test_missing_required_reported_per_option() {
        let schema = ConfigSchema::from_decls([
            ("project_template", OptionDecl::new(OptionKind::Str)),
            ("startup_script", OptionDecl::new(OptionKind::Str)),
            (
                "debug_logging",
                OptionDecl::new(OptionKind::Bool).with_default(false),
            ),
        ])
        .unwrap();

        let err = schema.validate(&ConfigDocument::new()).unwrap_err();
        assert_eq!(err.violations().len(), 2);
        for violation in err.violations() {
            assert!(matches!(violation, Violation::MissingRequired { .. }));
        }
        let paths: Vec<String> = err.violations().iter().map(|v| v.path().to_string()).collect();
        assert_eq!(paths, vec!["project_template", "startup_script"]);
    }

    // ---- closed schema ----

    #[test]
    fn test_unknown_key_rejected() {
        let schema =
            ConfigSchema::from_decls([("a", OptionDecl::new(OptionKind::Bool))]).unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("b", true);

        let err = schema.validate(&doc).unwrap_err();
        let unknown: Vec<_> = err
            .violations()
            .iter()
            .filter(|v| matches!(v, Violation::UnknownKey { .. }))
            .collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].path().to_string(), "b");
    }

    #[test]
    fn test_misspelled_key_is_both_missing_and_unknown() {
        // The classic operator typo: the declared key goes unresolved and
        // the typo is undeclared. Both problems surface in one report.
        let schema =
            ConfigSchema::from_decls([("debug_logging", OptionDecl::new(OptionKind::Bool))])
                .unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("debg_logging", true);

        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert!(matches!(&err.violations()[0], Violation::MissingRequired { .. }));
        assert!(matches!(&err.violations()[1], Violation::UnknownKey { .. }));
    }

    // ---- kind checking ----

    #[test]
    fn test_scalar_kind_mismatches() {
        let schema = ConfigSchema::from_decls([
            ("debug_logging", OptionDecl::new(OptionKind::Bool)),
            ("retry_count", OptionDecl::new(OptionKind::Int)),
            ("project_template", OptionDecl::new(OptionKind::Str)),
        ])
        .unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("debug_logging", "yes");
        doc.insert("retry_count", true);
        doc.insert("project_template", 7i64);

        let err = schema.validate(&doc).unwrap_err();
        // Report order follows sorted option names, not insertion order.
        assert_eq!(err.violations().len(), 3);
        assert_eq!(
            err.violations()[0],
            Violation::TypeMismatch {
                path: KeyPath::option("debug_logging"),
                expected: OptionKind::Bool,
                found: OptionKind::Str,
            }
        );
        assert_eq!(
            err.violations()[1],
            Violation::TypeMismatch {
                path: KeyPath::option("project_template"),
                expected: OptionKind::Str,
                found: OptionKind::Int,
            }
        );
        assert_eq!(
            err.violations()[2],
            Violation::TypeMismatch {
                path: KeyPath::option("retry_count"),
                expected: OptionKind::Int,
                found: OptionKind::Bool,
            }
        );
    }

    #[test]
    fn test_collection_kind_mismatch() {
        let schema = ConfigSchema::from_decls([
            ("menu_favourites", favourites_decl()),
            (
                "apps",
                OptionDecl::new(OptionKind::Dict).with_allows_empty(true),
            ),
        ])
        .unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("menu_favourites", ConfigValue::Bool(true));
        doc.insert("apps", ConfigValue::from(vec![]));

        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert!(matches!(
            &err.violations()[0],
            Violation::TypeMismatch { expected: OptionKind::Dict, .. }
        ));
        assert!(matches!(
            &err.violations()[1],
            Violation::TypeMismatch { expected: OptionKind::List, .. }
        ));
    }

    // ---- allows-empty rule ----

    #[test]
    fn test_explicit_empty_fails_while_default_empty_succeeds() {
        let schema = ConfigSchema::from_decls([(
            "run_at_startup",
            OptionDecl::new(OptionKind::List)
                .with_allows_empty(false)
                .with_default(ConfigValue::List(Vec::new())),
        )])
        .unwrap();

        // Explicitly supplying [] trips the allows-empty rule.
        let mut doc = ConfigDocument::new();
        doc.insert("run_at_startup", ConfigValue::List(Vec::new()));
        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(
            err.violations()[0],
            Violation::EmptyNotAllowed {
                path: KeyPath::option("run_at_startup"),
                kind: OptionKind::List,
            }
        );

        // Omitting the key takes the declared default verbatim instead.
        let resolved = schema.validate(&ConfigDocument::new()).unwrap();
        assert_eq!(
            resolved.get("run_at_startup"),
            Some(&ConfigValue::List(Vec::new()))
        );
    }

    #[test]
    fn test_empty_dict_rule() {
        let schema = ConfigSchema::from_decls([(
            "apps",
            OptionDecl::new(OptionKind::Dict).with_allows_empty(false),
        )])
        .unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("apps", ConfigValue::Dict(BTreeMap::new()));

        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(
            err.violations()[0],
            Violation::EmptyNotAllowed {
                path: KeyPath::option("apps"),
                kind: OptionKind::Dict,
            }
        );
    }

    #[test]
    fn test_allows_empty_true_accepts_explicit_empty() {
        let schema = ConfigSchema::from_decls([("menu_favourites", favourites_decl())]).unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("menu_favourites", ConfigValue::List(Vec::new()));
        assert!(schema.validate(&doc).is_ok());
    }

    // ---- nested item validation ----

    #[test]
    fn test_missing_item_field_tagged_with_indexed_path() {
        let schema = ConfigSchema::from_decls([("menu_favourites", favourites_decl())]).unwrap();
        let doc = ConfigDocument::from_yaml_str("menu_favourites:\n  - name: x\n").unwrap();

        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        match &err.violations()[0] {
            Violation::MalformedNestedItem { path, .. } => {
                assert_eq!(path.to_string(), "menu_favourites[0].app_instance");
            }
            other => panic!("expected MalformedNestedItem, got {other:?}"),
        }
    }

    #[test]
    fn test_item_field_kind_mismatch_path_and_detail() {
        let schema = ConfigSchema::from_decls([("menu_favourites", favourites_decl())]).unwrap();
        let doc = ConfigDocument::from_yaml_str(
            "menu_favourites:\n  - name: ok\n    app_instance: fine\n  - name: 3\n    app_instance: fine\n",
        )
        .unwrap();

        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        match &err.violations()[0] {
            Violation::MalformedNestedItem { path, detail } => {
                assert_eq!(path.to_string(), "menu_favourites[1].name");
                assert!(detail.contains("str"), "got: {detail}");
                assert!(detail.contains("int"), "got: {detail}");
            }
            other => panic!("expected MalformedNestedItem, got {other:?}"),
        }
    }

    #[test]
    fn test_non_dict_element_reported_at_element_path() {
        let schema = ConfigSchema::from_decls([("menu_favourites", favourites_decl())]).unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert(
            "menu_favourites",
            ConfigValue::from(vec![ConfigValue::Str("not a dict".into())]),
        );

        let err = schema.validate(&doc).unwrap_err();
        match &err.violations()[0] {
            Violation::MalformedNestedItem { path, detail } => {
                assert_eq!(path.to_string(), "menu_favourites[0]");
                assert!(detail.contains("dict item"), "got: {detail}");
            }
            other => panic!("expected MalformedNestedItem, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_item_schema() {
        let schema = ConfigSchema::from_decls([(
            "tags",
            OptionDecl::new(OptionKind::List)
                .with_allows_empty(true)
                .with_values(ItemDecl::new(OptionKind::Str)),
        )])
        .unwrap();

        let ok = ConfigDocument::from_yaml_str("tags: [one, two]\n").unwrap();
        assert!(schema.validate(&ok).is_ok());

        let bad = ConfigDocument::from_yaml_str("tags: [one, 2]\n").unwrap();
        let err = schema.validate(&bad).unwrap_err();
        assert_eq!(err.violations()[0].path().to_string(), "tags[1]");
    }

    #[test]
    fn test_extra_item_fields_pass() {
        let schema = ConfigSchema::from_decls([("menu_favourites", favourites_decl())]).unwrap();
        let doc = ConfigDocument::from_yaml_str(
            "menu_favourites:\n  - name: x\n    app_instance: y\n    hotkey: F5\n",
        )
        .unwrap();
        assert!(schema.validate(&doc).is_ok());
    }

    #[test]
    fn test_dict_option_field_checks() {
        let schema = ConfigSchema::from_decls([(
            "panel",
            OptionDecl::new(OptionKind::Dict)
                .with_items([("enabled", OptionKind::Bool), ("weight", OptionKind::Int)]),
        )])
        .unwrap();

        let doc = ConfigDocument::from_yaml_str("panel:\n  enabled: true\n").unwrap();
        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].path().to_string(), "panel.weight");

        let doc =
            ConfigDocument::from_yaml_str("panel:\n  enabled: 1\n  weight: 2\n").unwrap();
        let err = schema.validate(&doc).unwrap_err();
        assert_eq!(err.violations()[0].path().to_string(), "panel.enabled");
    }

    // ---- aggregation and determinism ----

    #[test]
    fn test_all_violations_reported_in_one_error() {
        let schema = engine_schema();
        let doc = ConfigDocument::from_yaml_str(
            r#"
debug_logging: maybe
menu_favourites:
  - name: x
stray_section: true
"#,
        )
        .unwrap();

        let err = schema.validate(&doc).unwrap_err();
        // Kind mismatch on debug_logging, missing item field in
        // menu_favourites[0], missing required project_template, and the
        // stray key: four problems, one report.
        assert_eq!(err.violations().len(), 4);
        let paths: Vec<String> = err.violations().iter().map(|v| v.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "debug_logging",
                "menu_favourites[0].app_instance",
                "project_template",
                "stray_section",
            ]
        );
    }

    #[test]
    fn test_report_order_is_deterministic() {
        let schema = engine_schema();
        let doc = ConfigDocument::from_yaml_str("unknown_a: 1\nunknown_b: 2\n").unwrap();
        let first = schema.validate(&doc).unwrap_err().to_string();
        let second = schema.validate(&doc).unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_error_display_lists_each_violation() {
        let schema =
            ConfigSchema::from_decls([("debug_logging", OptionDecl::new(OptionKind::Bool))])
                .unwrap();
        let mut doc = ConfigDocument::new();
        doc.insert("debg_logging", true);

        let message = schema.validate(&doc).unwrap_err().to_string();
        assert!(message.contains("2 violation(s)"), "got: {message}");
        assert!(
            message.contains("debug_logging: setting is required"),
            "got: {message}"
        );
        assert!(
            message.contains("debg_logging: unknown configuration key"),
            "got: {message}"
        );
    }

    // ---- idempotence ----

    #[test]
    fn test_revalidating_resolved_config_is_identity() {
        let schema = engine_schema();
        let doc = ConfigDocument::from_yaml_str(
            "project_template: film_shot\nmenu_favourites:\n  - name: Open\n    app_instance: paintbox-workfiles\n",
        )
        .unwrap();

        let first = schema.validate(&doc).expect("document should validate");
        let second = schema
            .validate(&first.as_document())
            .expect("resolved settings should re-validate");
        assert_eq!(first, second);
    }

    // ---- resolved config surface ----

    #[test]
    fn test_typed_accessors_and_kind_misuse() {
        let schema = engine_schema();
        let doc = ConfigDocument::from_yaml_str("project_template: film_shot\n").unwrap();
        let resolved = schema.validate(&doc).unwrap();

        assert_eq!(resolved.get_str("project_template"), Some("film_shot"));
        // Wrong-kind accessor yields None rather than panicking.
        assert_eq!(resolved.get_int("project_template"), None);
        assert_eq!(resolved.get_bool("menu_favourites"), None);
        // Undeclared name yields None.
        assert!(resolved.get("no_such_option").is_none());
    }

    #[test]
    fn test_resolved_config_serializes_as_plain_mapping() {
        let schema = ConfigSchema::from_decls([(
            "debug_logging",
            OptionDecl::new(OptionKind::Bool).with_default(false),
        )])
        .unwrap();
        let resolved = schema.validate(&ConfigDocument::new()).unwrap();
        let json = serde_json::to_string(&resolved).unwrap();
        assert_eq!(json, r#"{"debug_logging":false}"#);
    }
}
