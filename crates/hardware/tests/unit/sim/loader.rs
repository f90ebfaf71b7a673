//! # Program Loading Tests
//!
//! Loading text sources, raw images and files into a CPU.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use vcpu8_core::common::LoadError;
use vcpu8_core::core::Cpu;
use vcpu8_core::sim::loader;
use vcpu8_core::soc::BufferSink;

/// Helper function to create a test CPU instance.
fn create_test_cpu() -> Cpu<BufferSink> {
    Cpu::with_sink(BufferSink::new())
}

/// Helper function to create a temporary program file for testing.
fn create_temp_program(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(source.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn bytes_placed_sequentially_from_zero() {
    let mut cpu = create_test_cpu();
    cpu.load("10000010\n00000000\n00001000\n").unwrap();
    assert_eq!(&cpu.ram[..4], &[0b1000_0010, 0, 8, 0]);
}

#[test]
fn trailing_comments_and_indentation() {
    let mut cpu = create_test_cpu();
    cpu.load("  # program\n\t01000111   # PRN R0\n\r\n   00000000\n").unwrap();
    assert_eq!(&cpu.ram[..2], &[0b0100_0111, 0]);
}

#[test]
fn short_literals_are_accepted() {
    assert_eq!(loader::parse_program("1\n101\n").unwrap(), vec![1, 5]);
}

#[test]
fn malformed_line_stops_loading_in_place() {
    let mut cpu = create_test_cpu();
    let err = cpu.load("00000001\n00000010\n# note\nxyz\n00000011\n").unwrap_err();
    match err {
        LoadError::Malformed { line, token } => {
            assert_eq!(line, 4);
            assert_eq!(token, "xyz");
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
    assert_eq!(&cpu.ram[..3], &[1, 2, 0], "bytes before the bad line stay loaded");
}

#[test]
fn program_larger_than_memory() {
    let source = "00000001\n".repeat(257);
    let mut cpu = create_test_cpu();
    assert!(matches!(
        cpu.load(&source),
        Err(LoadError::TooLarge { len: 257 })
    ));
    assert!(cpu.ram.iter().all(|&b| b == 1));

    let mut cpu = create_test_cpu();
    assert!(matches!(
        cpu.load_bytes(&[0; 300]),
        Err(LoadError::TooLarge { len: 300 })
    ));
}

#[test]
fn exactly_full_memory_loads() {
    let mut cpu = create_test_cpu();
    cpu.load(&"00000001\n".repeat(256)).unwrap();
    assert_eq!(cpu.ram[255], 1);
}

#[test]
fn load_file_success() {
    let file = create_temp_program("10000010 # LDI R2,7\n00000010\n00000111\n00000001\n");
    let mut cpu = create_test_cpu();
    cpu.load_file(file.path()).unwrap();
    cpu.run().unwrap();
    assert_eq!(cpu.regs.read(2), 7);
}

#[test]
fn load_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.ls8");
    let mut cpu = create_test_cpu();
    let err = cpu.load_file(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io { path: ref p, .. } if *p == path));
    assert!(err.to_string().contains("missing.ls8"));
}
