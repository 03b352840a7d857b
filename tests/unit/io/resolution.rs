//! Tests for output resolution parsing

#[cfg(test)]
mod tests {
    use fractalframes::FractalError;
    use fractalframes::frame::canvas::OutputBounds;
    use fractalframes::io::resolution::parse_resolution;

    // Tests well-formed resolutions
    // Verified by swapping width and height
    #[test]
    fn test_parse_valid_resolution() {
        assert_eq!(
            parse_resolution("1200x900").unwrap(),
            OutputBounds::new(1200, 900)
        );
        assert_eq!(parse_resolution("2x2").unwrap(), OutputBounds::new(2, 2));
        assert_eq!(parse_resolution("0x0").unwrap(), OutputBounds::new(0, 0));
    }

    // Tests non-integer components are configuration errors
    // Verified by defaulting unparsable components to zero
    #[test]
    fn test_parse_non_integer_component() {
        let err = parse_resolution("abcx900").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("abcx900"));

        assert!(parse_resolution("1200xabc").is_err());
        assert!(parse_resolution("12.5x900").is_err());
        assert!(parse_resolution("-5x900").is_err());
    }

    // Tests separator count must be exactly one
    // Verified by splitting only on the first separator
    #[test]
    fn test_parse_wrong_separator_count() {
        for value in ["1200", "1200x900x3", "1200*900", "", "1200X900"] {
            let result = parse_resolution(value);
            assert!(
                matches!(result, Err(FractalError::InvalidResolution { .. })),
                "{value:?} should be rejected"
            );
        }
    }

    // Tests empty components are rejected
    // Verified by treating empty strings as zero
    #[test]
    fn test_parse_empty_components() {
        assert!(parse_resolution("x").is_err());
        assert!(parse_resolution("1200x").is_err());
        assert!(parse_resolution("x900").is_err());
    }

    // Tests the FromStr implementation delegates to the parser
    // Verified by returning default bounds from from_str
    #[test]
    fn test_from_str() {
        let bounds: OutputBounds = "640x480".parse().unwrap();
        assert_eq!(bounds, OutputBounds::new(640, 480));
        assert!("640-480".parse::<OutputBounds>().is_err());
    }
}
