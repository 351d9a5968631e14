// envprinter: project environment reporter
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::engine::{
    EnvironmentSnapshot, FilterEngine, FilterSettings, FilteredResult, ReportedValue, UNSET_MARKER,
};
use super::engine_from_config;
use super::exclusion::{DEFAULT_CATALOG, ExclusionCatalog, ExclusionPolicy};
use crate::config::Config;
use crate::config::types::{ExclusionConfig, ExclusionStrategy};
use crate::error::EnvPrinterResult;
use crate::scan::UsageScanner;
use crate::scan::resource::{Lines, Resource, ResourceWalker};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A single in-memory resource returned for every glob.
struct StaticResource(Vec<String>);

impl Resource for StaticResource {
    fn id(&self) -> &str {
        "memory"
    }

    fn lines(&self) -> io::Result<Lines<'_>> {
        Ok(Box::new(self.0.iter().cloned().map(Ok)))
    }
}

/// Counts how often the engine triggers resolution.
struct CountingWalker {
    lines: Vec<String>,
    resolves: AtomicUsize,
    delay: Duration,
}

impl CountingWalker {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
            resolves: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn resolves(&self) -> usize {
        self.resolves.load(Ordering::SeqCst)
    }
}

impl ResourceWalker for CountingWalker {
    fn resolve(&self, _pattern: &str) -> EnvPrinterResult<Vec<Box<dyn Resource>>> {
        self.resolves.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(vec![Box::new(StaticResource(self.lines.clone()))])
    }
}

fn engine(
    settings: FilterSettings,
    exclusion: ExclusionPolicy,
    walker: &Arc<CountingWalker>,
) -> FilterEngine {
    let walker: Arc<dyn ResourceWalker> = walker.clone();
    let scanner = UsageScanner::new(walker, vec!["application*.properties".to_string()]);
    FilterEngine::new(settings, exclusion, scanner)
}

const fn settings(project_only: bool, show_values: bool) -> FilterSettings {
    FilterSettings {
        project_only,
        show_values,
    }
}

fn snapshot(vars: &[(&str, &str)]) -> EnvironmentSnapshot {
    vars.iter().copied().collect()
}

fn render(result: &FilteredResult) -> Vec<String> {
    result.iter().map(|(k, v)| format!("{k}={v}")).collect()
}

// =============================================================================
// ExclusionPolicy
// =============================================================================

#[test]
fn test_catalog_excludes_platform_noise() {
    let policy = ExclusionPolicy::default();
    for name in ["TEMP", "APPDATA", "PROCESSOR_ARCHITECTURE", "XDG_RUNTIME_DIR", "LC_ALL", "_"] {
        assert!(policy.is_excluded(name), "{name} should be excluded");
    }
    for name in ["JAVA_HOME", "DB_HOST", "_JAVA_OPTIONS", "PROCESSOR"] {
        assert!(!policy.is_excluded(name), "{name} should be kept");
    }
}

#[test]
fn test_catalog_is_case_sensitive() {
    let policy = ExclusionPolicy::default();
    assert!(policy.is_excluded("windir"));
    assert!(!policy.is_excluded("WINDIR"));
}

#[test]
fn test_default_catalog_size() {
    let catalog = ExclusionCatalog::default();
    assert_eq!(catalog.len(), DEFAULT_CATALOG.len());
    assert!(!catalog.is_empty());
}

#[test]
fn test_catalog_never_includes() {
    assert!(!ExclusionPolicy::default().is_included("APP_MODE"));
}

#[test]
fn test_custom_catalog_replaces_default() {
    let policy = ExclusionPolicy::from_config(&ExclusionConfig {
        catalog: vec!["SECRET".to_string(), "CI_".to_string()],
        ..Default::default()
    });

    assert!(policy.is_excluded("SECRET"));
    assert!(policy.is_excluded("CI_JOB_ID"));
    assert!(!policy.is_excluded("TEMP"), "built-in catalog is replaced");
    assert_eq!(policy.strategy(), ExclusionStrategy::Catalog);
}

#[test]
fn test_policy_list_from_config() {
    let policy = ExclusionPolicy::from_config(&ExclusionConfig {
        strategy: ExclusionStrategy::PolicyList,
        exclude_prefixes: vec!["JAVA_".to_string(), "MAVEN_".to_string()],
        include_patterns: vec!["APP_".to_string()],
        ..Default::default()
    });

    assert_eq!(policy.strategy(), ExclusionStrategy::PolicyList);
    assert!(policy.is_excluded("JAVA_HOME"));
    assert!(policy.is_excluded("MAVEN_OPTS"));
    assert!(!policy.is_excluded("TEMP"), "catalog does not apply");
    assert!(policy.is_included("APP_MODE"));
    assert!(!policy.is_included("DB_HOST"));
}

// =============================================================================
// FilterEngine: all variables
// =============================================================================

#[test]
fn test_all_variables_with_values() {
    let walker = Arc::new(CountingWalker::new(&[]));
    let engine = engine(settings(false, true), ExclusionPolicy::default(), &walker);
    let env = snapshot(&[
        ("TEMP", "/tmp"),
        ("JAVA_HOME", "/opt/jdk"),
        ("PATH", "/usr/bin"),
        ("APP_MODE", "prod"),
        ("Zeta", "z"),
    ]);

    insta::assert_debug_snapshot!(render(&engine.filter(&env)), @r#"
    [
        "APP_MODE=prod",
        "JAVA_HOME=/opt/jdk",
        "Zeta=z",
    ]
    "#);
    assert_eq!(walker.resolves(), 0, "no scan outside project-only mode");
}

#[test]
fn test_all_variables_policy_list() {
    let walker = Arc::new(CountingWalker::new(&[]));
    let policy = ExclusionPolicy::PolicyList {
        exclude_prefixes: vec!["JAVA_".to_string()],
        include_patterns: vec!["NOT_USED_".to_string()],
    };
    let engine = engine(settings(false, true), policy, &walker);
    let env = snapshot(&[("TEMP", "/tmp"), ("JAVA_HOME", "/opt/jdk")]);

    assert_eq!(render(&engine.filter(&env)), ["TEMP=/tmp"]);
}

// =============================================================================
// FilterEngine: project-only
// =============================================================================

#[test]
fn test_project_only_reports_unset() {
    let walker = Arc::new(CountingWalker::new(&[
        "db.host=${DB_HOST}",
        "db.port=${DB_PORT:5432}",
    ]));
    let engine = engine(settings(true, true), ExclusionPolicy::default(), &walker);
    let env = snapshot(&[("DB_HOST", "db.internal"), ("UNRELATED", "x")]);

    let result = engine.filter(&env);
    assert_eq!(
        result.get("DB_HOST"),
        Some(&ReportedValue::Value("db.internal".to_string()))
    );
    assert_eq!(result.get("DB_PORT"), Some(&ReportedValue::Unset));
    assert_eq!(result.len(), 2);
}

#[test]
fn test_project_only_drops_excluded_usage() {
    let walker = Arc::new(CountingWalker::new(&["home=${HOME}", "tmp=${TEMP}", "${APP_NAME}"]));
    let engine = engine(settings(true, true), ExclusionPolicy::default(), &walker);

    let result = engine.filter(&snapshot(&[("HOME", "/root"), ("TEMP", "/tmp")]));
    assert_eq!(render(&result), [format!("APP_NAME={UNSET_MARKER}")]);
}

#[test]
fn test_project_only_policy_list_includes_live_names() {
    let walker = Arc::new(CountingWalker::new(&["${DB_HOST}", "${JAVA_OPTS}"]));
    let policy = ExclusionPolicy::PolicyList {
        exclude_prefixes: vec!["JAVA_".to_string()],
        include_patterns: vec!["APP_".to_string()],
    };
    let engine = engine(settings(true, true), policy, &walker);
    let env = snapshot(&[
        ("APP_MODE", "prod"),
        ("APP_NAME", "orders"),
        ("DB_HOST", "db"),
        ("JAVA_OPTS", "-Xmx1g"),
        ("OTHER", "x"),
    ]);

    insta::assert_debug_snapshot!(render(&engine.filter(&env)), @r#"
    [
        "APP_MODE=prod",
        "APP_NAME=orders",
        "DB_HOST=db",
    ]
    "#);
}

#[test]
fn test_project_only_empty_usage() {
    let walker = Arc::new(CountingWalker::new(&["server.port=8080"]));
    let engine = engine(settings(true, true), ExclusionPolicy::default(), &walker);
    assert!(engine.filter(&snapshot(&[("DB_HOST", "db")])).is_empty());
}

// =============================================================================
// FilterEngine: values
// =============================================================================

#[test]
fn test_hidden_values_keep_names() {
    let lines = ["${DB_HOST}", "${DB_PORT}", r#"System.getenv("api-key")"#];
    let env = snapshot(&[("DB_HOST", "db"), ("api-key", "s3cr3t")]);

    let shown = engine(
        settings(true, true),
        ExclusionPolicy::default(),
        &Arc::new(CountingWalker::new(&lines)),
    )
    .filter(&env);
    let hidden = engine(
        settings(true, false),
        ExclusionPolicy::default(),
        &Arc::new(CountingWalker::new(&lines)),
    )
    .filter(&env);

    assert!(shown.keys().eq(hidden.keys()));
    assert!(hidden.values().all(|v| *v == ReportedValue::Hidden));
}

#[test]
fn test_hidden_values_keep_names_for_all_variables() {
    let env = snapshot(&[
        ("APP_MODE", "prod"),
        ("DB_PASSWORD", "s3cr3t"),
        ("JAVA_HOME", "/opt/jdk"),
        ("TEMP", "/tmp"),
    ]);
    let walker = Arc::new(CountingWalker::new(&[]));

    let shown = engine(settings(false, true), ExclusionPolicy::default(), &walker).filter(&env);
    let hidden = engine(settings(false, false), ExclusionPolicy::default(), &walker).filter(&env);

    assert!(shown.keys().eq(hidden.keys()));
    assert!(hidden.values().all(|v| *v == ReportedValue::Hidden));
    insta::assert_debug_snapshot!(render(&hidden), @r#"
    [
        "APP_MODE=",
        "DB_PASSWORD=",
        "JAVA_HOME=",
    ]
    "#);
    assert_eq!(walker.resolves(), 0);
}

#[test]
fn test_reported_value_serializes_as_string() {
    let walker = Arc::new(CountingWalker::new(&["${DB_HOST}", "${DB_PORT}"]));
    let engine = engine(settings(true, true), ExclusionPolicy::default(), &walker);
    let result = engine.filter(&snapshot(&[("DB_HOST", "db")]));

    insta::assert_snapshot!(
        serde_json::to_string(&result).unwrap(),
        @r#"{"DB_HOST":"db","DB_PORT":"<not set>"}"#
    );

    let hidden: FilteredResult = [("DB_HOST".to_string(), ReportedValue::Hidden)].into();
    assert_eq!(serde_json::to_string(&hidden).unwrap(), r#"{"DB_HOST":""}"#);
}

// =============================================================================
// FilterEngine: usage cache
// =============================================================================

#[test]
fn test_usage_scanned_once() {
    let walker = Arc::new(CountingWalker::new(&["${DB_HOST}"]));
    let engine = engine(settings(true, false), ExclusionPolicy::default(), &walker);

    let first = engine.filter(&snapshot(&[]));
    let second = engine.filter(&snapshot(&[("DB_HOST", "db")]));

    assert_eq!(walker.resolves(), 1);
    assert!(first.keys().eq(second.keys()));
}

#[test]
fn test_usage_scanned_once_concurrently() {
    let walker = Arc::new(CountingWalker::new(&["${DB_HOST}"]).slow(Duration::from_millis(50)));
    let engine = engine(settings(true, true), ExclusionPolicy::default(), &walker);
    let env = snapshot(&[("DB_HOST", "db")]);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| engine.filter(&env))).collect();
        for handle in handles {
            let result = handle.join().expect("filter thread panicked");
            assert_eq!(render(&result), ["DB_HOST=db"]);
        }
    });

    assert_eq!(walker.resolves(), 1);
}

#[test]
fn test_filtered_environment_uses_live_env() {
    // SAFETY: std serializes its own environment access, and no code in
    // this test binary reads the environment through libc `getenv`.
    unsafe {
        std::env::set_var("ENVPRINTER_FILTER_TEST_VAR", "live");
    }

    let walker = Arc::new(CountingWalker::new(&["${ENVPRINTER_FILTER_TEST_VAR}"]));
    let engine = engine(settings(true, true), ExclusionPolicy::default(), &walker);
    let result = engine.filtered_environment();

    // SAFETY: as above.
    unsafe {
        std::env::remove_var("ENVPRINTER_FILTER_TEST_VAR");
    }

    assert_eq!(render(&result), ["ENVPRINTER_FILTER_TEST_VAR=live"]);
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_engine_from_config() {
    let mut config = Config::default();
    config.printer.show_values = true;
    config.exclusion.strategy = ExclusionStrategy::PolicyList;

    let engine = engine_from_config(&config);
    assert_eq!(engine.settings(), settings(true, true));
    assert_eq!(engine.exclusion().strategy(), ExclusionStrategy::PolicyList);
}

#[test]
fn test_snapshot_lookup() {
    let env = snapshot(&[("B", "2"), ("A", "1")]);
    assert_eq!(env.get("A"), Some("1"));
    assert_eq!(env.get("C"), None);
    assert_eq!(env.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["A", "B"]);
    assert_eq!(env.len(), 2);
    assert!(EnvironmentSnapshot::default().is_empty());
}
