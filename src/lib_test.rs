use super::*;

#[test]
fn missing_root_error_names_the_element() {
    let err = MountError::MissingRoot(ROOT_ELEMENT_ID);
    assert_eq!(err.to_string(), "mount point #root not found in document");
}
