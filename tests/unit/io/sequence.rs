//! Tests for zero-padded frame file naming

#[cfg(test)]
mod tests {
    use fractalframes::io::sequence::{frame_file_name, frame_path};
    use std::path::{Path, PathBuf};

    // Tests four-digit zero padding
    // Verified by changing the padding width
    #[test]
    fn test_frame_file_name_padding() {
        assert_eq!(frame_file_name(1), "0001.png");
        assert_eq!(frame_file_name(42), "0042.png");
        assert_eq!(frame_file_name(6572), "6572.png");
    }

    // Tests indices wider than the padding are not truncated
    // Verified by truncating to four digits
    #[test]
    fn test_frame_file_name_wide_index() {
        assert_eq!(frame_file_name(12345), "12345.png");
    }

    // Tests paths are joined under the frame directory
    // Verified by ignoring the directory argument
    #[test]
    fn test_frame_path() {
        assert_eq!(
            frame_path(Path::new("smallframes"), 7),
            PathBuf::from("smallframes").join("0007.png")
        );
    }
}
