use crate::assert_err;
use crate::errors::{ModelError, TensorError};
use crate::nn::model_io::{load_from_file, load_parameters, save_parameters, save_to_file};
use crate::nn::{FCN, FCTrunkNet, FcConfig, Module};
use crate::spaces::Space;
use std::io::Cursor;

#[test]
fn test_save_and_load_parameters() {
    let saved = FCTrunkNet::new(Space::r1("t"), Space::r1("u"), 10, &FcConfig::default()).unwrap();
    let mut buffer = Vec::new();
    save_parameters(&saved, &mut buffer).unwrap();

    let mut loaded =
        FCTrunkNet::new(Space::r1("t"), Space::r1("u"), 10, &FcConfig::default()).unwrap();
    assert_ne!(loaded, saved);
    load_parameters(&mut loaded, &mut Cursor::new(&buffer)).unwrap();
    assert_eq!(loaded, saved);
}

#[test]
fn test_load_parameters_with_wrong_structure() {
    let saved = FCN::new(Space::r1("t"), Space::r1("u"), &FcConfig::default()).unwrap();
    let mut buffer = Vec::new();
    save_parameters(&saved, &mut buffer).unwrap();

    // 层数不同
    let config = FcConfig::default().with_hidden(&[20]);
    let mut other = FCN::new(Space::r1("t"), Space::r1("u"), &config).unwrap();
    assert_err!(
        load_parameters(&mut other, &mut Cursor::new(&buffer)),
        ModelError::InvalidConfig(_)
    );

    // 层数相同但形状不同
    let mut other = FCN::new(Space::r2("x"), Space::r1("u"), &FcConfig::default()).unwrap();
    let before = other.clone();
    assert_err!(
        load_parameters(&mut other, &mut Cursor::new(&buffer)),
        ModelError::Tensor(TensorError::InconsitentShape)
    );
    assert_eq!(other, before);

    assert_err!(
        load_parameters(&mut other, &mut Cursor::new(vec![1u8, 2, 3])),
        ModelError::Tensor(TensorError::Serialization(_))
    );
}

#[test]
fn test_save_and_load_file() {
    let path = std::env::temp_dir().join("only_physics_model_io_test.bin");
    let saved = FCN::new(Space::r1("t"), Space::r1("u"), &FcConfig::default()).unwrap();
    save_to_file(&saved, &path).unwrap();

    let mut loaded = FCN::new(Space::r1("t"), Space::r1("u"), &FcConfig::default()).unwrap();
    load_from_file(&mut loaded, &path).unwrap();
    assert_eq!(loaded.parameters(), saved.parameters());
    std::fs::remove_file(&path).unwrap();
}
