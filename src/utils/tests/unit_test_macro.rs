use crate::errors::SpaceError;
use crate::{assert_err, assert_panic};

#[test]
fn test_assert_panic_macro() {
    assert_panic!(panic!("test panic"));
    assert_panic!(panic!("custom test panic msg"), "custom test panic msg");
}

#[test]
fn test_assert_err_macro() {
    let result: Result<(), SpaceError> = Err(SpaceError::UnknownVariable("z".to_string()));
    assert_err!(result);
    assert_err!(result, SpaceError::UnknownVariable(_));
    assert_err!(result, SpaceError::UnknownVariable(name) if name == "z");
}
