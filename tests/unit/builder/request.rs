//! Tests for build request defaults and validation

#[cfg(test)]
mod tests {
    use gridcollage::CollageError;
    use gridcollage::builder::request::CollageRequest;
    use std::path::PathBuf;

    fn request_with_one_path() -> CollageRequest {
        CollageRequest::new(vec![PathBuf::from("a.png")], PathBuf::from("out.png"))
    }

    // Tests the documented defaults are applied
    // Verified by changing the default constants
    #[test]
    fn test_new_applies_defaults() {
        let request = request_with_one_path();

        assert_eq!(request.margin, 10);
        assert_eq!(request.target_width, 800);
        assert!(!request.strict_width);
        assert_eq!(request.output_path, PathBuf::from("out.png"));
    }

    // Tests an empty image list is rejected before any file is touched
    // Verified by moving the check after loading
    #[test]
    fn test_validate_empty_paths() {
        let request = CollageRequest::new(Vec::new(), PathBuf::from("out.png"));

        match request.validate() {
            Err(CollageError::EmptyInput) => {}
            other => unreachable!("Expected EmptyInput, got {other:?}"),
        }
    }

    // Tests a zero tile width is rejected with the parameter named
    // Verified by validating against the CLI range instead
    #[test]
    fn test_validate_zero_width() {
        let mut request = request_with_one_path();
        request.target_width = 0;

        match request.validate() {
            Err(CollageError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "target_width");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests the builder accepts any positive width; range limits belong to
    // the caller
    // Verified by enforcing the CLI range here
    #[test]
    fn test_validate_accepts_any_positive_width() {
        let mut request = request_with_one_path();

        request.target_width = 1;
        assert!(request.validate().is_ok());

        request.target_width = 100_000;
        assert!(request.validate().is_ok());
    }

    // Tests a zero margin is valid
    // Verified by requiring a positive margin
    #[test]
    fn test_validate_accepts_zero_margin() {
        let mut request = request_with_one_path();
        request.margin = 0;

        assert!(request.validate().is_ok());
    }
}
