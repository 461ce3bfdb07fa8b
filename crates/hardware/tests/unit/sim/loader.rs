//! Program image loader tests.

use std::io::Write;

use mipsim_core::common::LoadError;
use mipsim_core::config::{Config, CoreConfig};
use mipsim_core::sim::Simulator;
use mipsim_core::sim::loader::{load_image_file, parse_image};

/// Hex words parse with optional `0x` prefixes, comments, and blanks.
#[test]
fn parses_text_image() {
    let text = "\
# scenario S1
0x20020005
20030003   # second word

00622020
";
    let words = parse_image(text).unwrap();
    assert_eq!(words, vec![0x20020005, 0x20030003, 0x00622020]);
}

#[test]
fn empty_image_is_valid() {
    assert!(parse_image("# nothing here\n\n").unwrap().is_empty());
}

/// A malformed token is reported with its line number.
#[test]
fn rejects_non_hex_token() {
    let err = parse_image("20020005\naddi $v0, $zero, 5\n").unwrap_err();
    match err {
        LoadError::NonHexToken { line, token } => {
            assert_eq!(line, 2);
            assert!(token.contains("addi"));
        }
        other => panic!("expected NonHexToken, got {other}"),
    }
}

#[test]
fn rejects_overlong_word() {
    assert!(parse_image("0x123456789\n").is_err());
}

/// Images load from disk through the same parser.
#[test]
fn loads_image_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# two words\n0x20020005\n0x0000000d").unwrap();

    let words = load_image_file(file.path()).unwrap();
    assert_eq!(words, vec![0x20020005, 0x0000000D]);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_image_file("/nonexistent/program.hex").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

/// An image larger than memory is rejected and the state stays reset.
#[test]
fn rejects_image_larger_than_memory() {
    let config = Config {
        core: CoreConfig {
            memory_bytes: 64,
            ..CoreConfig::default()
        },
        ..Config::default()
    };
    let mut sim = Simulator::new(config);

    let too_big = vec![0u32; 17];
    let err = sim.load_words(&too_big).unwrap_err();
    assert!(matches!(
        err,
        LoadError::ImageTooLarge {
            words: 17,
            capacity: 16
        }
    ));

    // Nothing installed: the machine halts immediately with no retires.
    let result = sim.run(10);
    assert_eq!(result.retired, 0);
    assert!(sim.halted());
}

/// Text images drive the simulator end to end.
#[test]
fn simulator_runs_text_image() {
    let mut sim = Simulator::new(Config::default());
    sim.load_image("# addi $v0, $zero, 5\n20020005\n0000000d\n")
        .unwrap();
    let result = sim.run(100);

    assert!(sim.halted());
    assert_eq!(sim.get_register(2), 5);
    assert_eq!(result.retired, 2, "addi and the break both retire");
}

/// Exactly-full images are accepted.
#[test]
fn accepts_exactly_full_image() {
    let config = Config {
        core: CoreConfig {
            memory_bytes: 64,
            ..CoreConfig::default()
        },
        ..Config::default()
    };
    let mut sim = Simulator::new(config);
    assert!(sim.load_words(&[0u32; 16]).is_ok());
}
