use super::*;

#[test]
fn test_orientation_from_reverse() {
    assert_eq!(Orientation::from_reverse(false), Orientation::Down);
    assert_eq!(Orientation::from_reverse(true), Orientation::Up);
}

#[test]
fn test_templates_for_orientation() {
    assert_eq!(Templates::for_orientation(Orientation::Down), Templates::down());
    assert_eq!(Templates::for_orientation(Orientation::Up), Templates::up());
}

#[test]
fn test_head_line_default_width() {
    assert_eq!(Templates::down().head_line(' ', 3), "╚⊙ ⊙╝");
    assert_eq!(Templates::up().head_line(' ', 3), "╔⊙ ⊙╗");
}

#[test]
fn test_head_line_wide() {
    assert_eq!(Templates::up().head_line(' ', 7), "╔⊙     ⊙╗");
    assert_eq!(Templates::down().head_line('o', 5), "╚⊙ooo⊙╝");
}

#[test]
fn test_body_line_default_width() {
    assert_eq!(Templates::down().body_line('█', 3), "╚═(███)═╝");
}

#[test]
fn test_body_line_custom_skin() {
    assert_eq!(Templates::up().body_line('#', 5), "╔═(#####)═╗");
    assert_eq!(Templates::down().body_line('🐟', 3), "╚═(🐟🐟🐟)═╝");
}
