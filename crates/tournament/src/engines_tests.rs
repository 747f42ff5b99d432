use super::*;

#[test]
fn test_known_specs() {
    assert_eq!(create_engine("minimax").unwrap().name(), "Minimax v1.0");
    assert_eq!(
        create_engine("minimax:parallel").unwrap().name(),
        "Minimax v1.0 (parallel)"
    );
    assert_eq!(create_engine("random").unwrap().name(), "Random v1.0");
    assert_eq!(create_engine("Random:42").unwrap().name(), "Random v1.0");
}

#[test]
fn test_bad_specs() {
    assert_eq!(
        create_engine("stockfish").err(),
        Some(EngineSpecError::Unknown("stockfish".into()))
    );
    assert_eq!(
        create_engine("random:abc").err(),
        Some(EngineSpecError::Seed("abc".into()))
    );
    assert!(create_engine("minimax:fast").is_err());
}
