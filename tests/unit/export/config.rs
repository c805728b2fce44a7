//! Tests for export settings validation and defaults

#[cfg(test)]
mod tests {
    use grhtile::TilerError;
    use grhtile::export::config::ExportConfig;
    use grhtile::io::configuration::{DEFAULT_ANIMATION_SPEED, DEFAULT_INITIAL_INDEX};

    #[test]
    fn test_default_is_valid() {
        let config = ExportConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.animation_speed, DEFAULT_ANIMATION_SPEED);
        assert_eq!(config.initial_index, DEFAULT_INITIAL_INDEX);
    }

    // Tests the speed bounds are inclusive on both ends
    // Verified by using an exclusive upper bound
    #[test]
    fn test_animation_speed_bounds() {
        for speed in 1..=4 {
            let config = ExportConfig {
                animation_speed: speed,
                ..ExportConfig::default()
            };
            assert!(config.validate().is_ok(), "speed {speed} should be valid");
        }

        for speed in [0, 5, u8::MAX] {
            let config = ExportConfig {
                animation_speed: speed,
                ..ExportConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(TilerError::InvalidParameter {
                    parameter: "animation_speed",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_initial_index_must_be_positive() {
        let config = ExportConfig {
            initial_index: 0,
            ..ExportConfig::default()
        };

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("initial_index"));
        assert!(message.contains("at least 1"));
    }

    // Tests partial control documents fill in defaults
    #[test]
    fn test_partial_document() {
        let config: ExportConfig = serde_json::from_str(r#"{"graphic_index": 12}"#).unwrap();

        assert_eq!(
            config,
            ExportConfig {
                graphic_index: 12,
                ..ExportConfig::default()
            }
        );
    }
}
