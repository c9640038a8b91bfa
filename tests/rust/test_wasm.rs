use super::*;

#[test]
fn test_render_default() {
    assert_eq!(render().lines().count(), 23);
}

#[test]
fn test_build_keeps_defaults_for_empty_glyphs() {
    let m = build("", 5, 3, 4, false, false, "", "").unwrap();
    assert_eq!(m, Millipede::new().with_size(5));
}

#[test]
fn test_build_applies_options() {
    let m = build("hi", 2, 9, 0, true, true, "o", "#").unwrap();
    assert_eq!(m.comment(), "hi");
    assert_eq!(m.width(), 9);
    assert_eq!(m.curve(), 0);
    assert!(m.is_reverse() && m.is_opposite());
    assert_eq!((m.head(), m.skin()), ('o', '#'));
}

#[test]
fn test_build_rejects_bad_skin() {
    assert!(build("", 5, 3, 4, false, false, "", "ab").is_err());
}
