//! Tests for the `config` module.

use rand::Rng;
use serial_test::serial;

use crate::config::EvalConfig;
use crate::error::{Error, ErrorKind};
use crate::metrics::DiscountMethod;

#[test]
fn test_default_config() {
    let config = EvalConfig::default();
    assert_eq!(config.k, 10);
    assert_eq!(config.method, DiscountMethod::Standard);
    assert!((config.mask_fraction - 0.2).abs() < 1e-12);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_overrides() {
    let config = EvalConfig::from_toml_str(
        r"
        k = 5
        method = 1
        mask_fraction = 0.5
        seed = 42
        ",
    )
    .unwrap();

    assert_eq!(config.k, 5);
    assert_eq!(config.method, DiscountMethod::Uniform);
    assert!((config.mask_fraction - 0.5).abs() < 1e-12);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_from_toml_str_partial_keeps_defaults() {
    let config = EvalConfig::from_toml_str("k = 3").unwrap();
    assert_eq!(config.k, 3);
    assert_eq!(config.method, DiscountMethod::Standard);
    assert_eq!(config.seed, None);
}

#[test]
fn test_from_toml_str_invalid_method() {
    let err = EvalConfig::from_toml_str("method = 2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("method must be 0 or 1"));
}

#[test]
fn test_from_toml_str_zero_cutoff() {
    let err = EvalConfig::from_toml_str("k = 0").unwrap_err();
    assert_eq!(err, Error::InvalidCutoff);
}

#[test]
fn test_from_toml_str_fraction_out_of_range() {
    let err = EvalConfig::from_toml_str("mask_fraction = 1.5").unwrap_err();
    assert_eq!(err, Error::FractionOutOfRange(1.5));
}

#[test]
fn test_from_toml_str_malformed() {
    let err = EvalConfig::from_toml_str("k = ").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

/// Sets environment variables for the lifetime of the guard.
struct EnvGuard(Vec<&'static str>);

impl EnvGuard {
    fn set(vars: &[(&'static str, &str)]) -> Self {
        for (key, value) in vars {
            std::env::set_var(key, value);
        }
        Self(vars.iter().map(|(key, _)| *key).collect())
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.0 {
            std::env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankeval.toml");
    std::fs::write(&path, "k = 20\nmethod = 1\n").unwrap();

    let config = EvalConfig::load(&path).unwrap();
    assert_eq!(config.k, 20);
    assert_eq!(config.method, DiscountMethod::Uniform);
}

#[test]
#[serial]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EvalConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.method, DiscountMethod::Standard);
}

#[test]
#[serial]
fn test_load_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rankeval.toml");
    std::fs::write(&path, "k = 20\nmethod = 0\nmask_fraction = 0.1\n").unwrap();

    let _env = EnvGuard::set(&[
        ("RANKEVAL_K", "3"),
        ("RANKEVAL_METHOD", "1"),
        ("RANKEVAL_MASK_FRACTION", "0.5"),
    ]);
    let config = EvalConfig::load(&path).unwrap();

    assert_eq!(config.k, 3);
    assert_eq!(config.method, DiscountMethod::Uniform);
    assert!((config.mask_fraction - 0.5).abs() < 1e-12);
}

#[test]
#[serial]
fn test_load_env_applies_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let _env = EnvGuard::set(&[("RANKEVAL_K", "4"), ("RANKEVAL_METHOD", "1")]);

    let config = EvalConfig::load(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.k, 4);
    assert_eq!(config.method, DiscountMethod::Uniform);
    assert!((config.mask_fraction - 0.2).abs() < 1e-12);
}

#[test]
#[serial]
fn test_load_env_invalid_method() {
    let dir = tempfile::tempdir().unwrap();
    let _env = EnvGuard::set(&[("RANKEVAL_METHOD", "7")]);

    let err = EvalConfig::load(dir.path().join("absent.toml")).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(err.to_string().contains("method must be 0 or 1"));
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let config = EvalConfig {
        seed: Some(7),
        ..EvalConfig::default()
    };
    let a: u64 = config.rng().gen();
    let b: u64 = config.rng().gen();
    assert_eq!(a, b);
}
