//! # Configuration Tests

use ls8_core::config::{Config, GeneralConfig, UnknownOpcodePolicy};
use pretty_assertions::assert_eq;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.initial_sp, 0xF4);
    assert_eq!(config.general.unknown_opcode, UnknownOpcodePolicy::Spin);
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    assert_eq!(
        Config::from_json(r#"{"general": {}}"#).unwrap(),
        Config::default()
    );
}

#[test]
fn test_full_document() {
    let json = r#"{
        "general": {
            "trace_instructions": true,
            "initial_sp": 128,
            "unknown_opcode": "fault"
        }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(
        config.general,
        GeneralConfig {
            trace_instructions: true,
            initial_sp: 0x80,
            unknown_opcode: UnknownOpcodePolicy::Fault,
        }
    );
}

#[test]
fn test_policy_aliases() {
    let spin = Config::from_json(r#"{"general": {"unknown_opcode": "Spin"}}"#).unwrap();
    assert_eq!(spin.general.unknown_opcode, UnknownOpcodePolicy::Spin);
    let fault = Config::from_json(r#"{"general": {"unknown_opcode": "Fault"}}"#).unwrap();
    assert_eq!(fault.general.unknown_opcode, UnknownOpcodePolicy::Fault);
}

#[test]
fn test_rejects_bad_policy() {
    assert!(Config::from_json(r#"{"general": {"unknown_opcode": "explode"}}"#).is_err());
}

#[test]
fn test_rejects_out_of_range_sp() {
    assert!(Config::from_json(r#"{"general": {"initial_sp": 256}}"#).is_err());
}

#[test]
fn test_rejects_malformed_json() {
    assert!(Config::from_json("{ general: ").is_err());
}
