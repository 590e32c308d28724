use crate::domains::{DomainKind, Interval};
use crate::spaces::{FunctionSpace, Space};

#[test]
fn test_create_function_space() {
    let domain = Interval::new(Space::r1("t"), 0., 1.).unwrap();
    let fn_space = FunctionSpace::new(domain.clone(), Space::r1("e"));
    assert_eq!(*fn_space.input_space(), Space::r1("t"));
    assert_eq!(*fn_space.output_space(), Space::r1("e"));
    assert_eq!(*fn_space.input_domain(), DomainKind::from(domain));
}
