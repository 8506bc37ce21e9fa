//! Property-based tests for hierlog using proptest

use hierlog::{LogLevel, LogManager, LogRecord};
use proptest::prelude::*;

fn concrete_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Alert),
        Just(LogLevel::Fatal),
    ]
}

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![Just(LogLevel::Unset), concrete_level()]
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// LogLevel string conversions roundtrip
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        assert_eq!(level, parsed);
    }

    /// LogLevel ordering is consistent with the discriminant
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        assert_eq!(level1 <= level2, val1 <= val2);
        assert_eq!(level1 < level2, val1 < val2);
        assert_eq!(level1 >= level2, val1 >= val2);
        assert_eq!(level1 > level2, val1 > val2);
    }

    /// Unset never compares above a concrete level
    #[test]
    fn test_unset_is_bottom(level in concrete_level()) {
        assert!(LogLevel::Unset < level);
    }
}

// ============================================================================
// Effective-level resolution over arbitrary chains
// ============================================================================

proptest! {
    /// The effective level of every node equals the nearest non-Unset level
    /// walking towards the root.
    #[test]
    fn test_effective_level_matches_reference_walk(
        root_level in concrete_level(),
        chain in prop::collection::vec(any_level(), 1..8),
    ) {
        let manager = LogManager::new();
        manager.root().set_level(root_level).unwrap();

        // Build "seg0", "seg0.seg1", ... and assign the generated levels.
        let mut name = String::new();
        let mut loggers = Vec::new();
        for (i, level) in chain.iter().enumerate() {
            if i > 0 {
                name.push('.');
            }
            name.push_str(&format!("seg{}", i));
            let logger = manager.get(&name);
            logger.set_level(*level).unwrap();
            loggers.push(logger);
        }

        for (i, logger) in loggers.iter().enumerate() {
            // Reference walk over the generated levels.
            let expected = chain[..=i]
                .iter()
                .rev()
                .copied()
                .find(|l| l.is_concrete())
                .unwrap_or(root_level);
            assert_eq!(logger.effective_level(), expected);
        }
    }

    /// Enabling is monotonic in severity for any logger in any chain.
    #[test]
    fn test_gate_monotonic(
        root_level in concrete_level(),
        own_level in any_level(),
        probe1 in concrete_level(),
        probe2 in concrete_level(),
    ) {
        let manager = LogManager::new();
        manager.root().set_level(root_level).unwrap();
        let logger = manager.get("probe");
        logger.set_level(own_level).unwrap();

        if probe1 <= probe2 && logger.is_enabled(probe1) {
            assert!(logger.is_enabled(probe2));
        }
    }
}

// ============================================================================
// LogRecord sanitization (prevents log injection)
// ============================================================================

proptest! {
    /// Newlines are escaped in log messages
    #[test]
    fn test_message_sanitization_newlines(message in ".*") {
        let record = LogRecord::new("svc", LogLevel::Info, message.clone());

        assert!(!record.message.contains('\n'),
                "record contains unsanitized newline: {:?}", record.message);

        if message.contains('\n') {
            assert!(record.message.contains("\\n"),
                    "newlines not properly escaped: {:?}", record.message);
        }
    }

    /// Carriage returns are escaped in log messages
    #[test]
    fn test_message_sanitization_carriage_return(message in ".*") {
        let record = LogRecord::new("svc", LogLevel::Info, message.clone());

        assert!(!record.message.contains('\r'),
                "record contains unsanitized carriage return: {:?}", record.message);
    }

    /// The FATAL substitute preserves message and index for any input
    #[test]
    fn test_fatal_substitute_preserves_fields(
        message in ".*",
        index in prop::option::of(any::<u64>()),
    ) {
        let mut record = LogRecord::new("svc", LogLevel::Error, message);
        record.index = index;

        let substitute = record.fatal_substitute();
        assert_eq!(substitute.level, LogLevel::Fatal);
        assert_eq!(substitute.message, record.message);
        assert_eq!(substitute.index, index);
        assert_eq!(substitute.logger_name, record.logger_name);
    }
}
