use tinge::color::{is_valid_hex, Rgb};
use tinge::errors::ColorError;
use tinge::palette;

#[test]
fn test_hex_to_rgb_full_range() {
    assert_eq!("#FFFFFF".parse::<Rgb>().unwrap(), Rgb::new(255, 255, 255));
    assert_eq!("#000000".parse::<Rgb>().unwrap(), Rgb::new(0, 0, 0));
}

#[test]
fn test_hex_to_rgb_mixed_case_and_bare() {
    assert_eq!("#8ecae6".parse::<Rgb>().unwrap(), Rgb::new(142, 202, 230));
    assert_eq!("8ECAE6".parse::<Rgb>().unwrap(), Rgb::new(142, 202, 230));
    assert_eq!("#8EcAe6".parse::<Rgb>().unwrap(), Rgb::new(142, 202, 230));
}

#[test]
fn test_hex_to_rgb_shorthand() {
    // Each shorthand digit doubles into a full byte.
    assert_eq!("#abc".parse::<Rgb>().unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
    assert_eq!("#F00".parse::<Rgb>().unwrap(), Rgb::new(255, 0, 0));
    assert_eq!("0F0".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 0));
}

#[test]
fn test_invalid_hex_inputs() {
    let invalid = [
        "#ZZZZZZ",
        "#AB",
        "",
        "#",
        "#ABCD",
        "#ABC1234",
        "q",
        "# ABC12",
        "##ABC123",
    ];
    for input in invalid {
        assert!(
            matches!(input.parse::<Rgb>(), Err(ColorError::InvalidFormat(_))),
            "Expected {:?} to be rejected",
            input
        );
    }
}

#[test]
fn test_is_valid_hex_truth_table() {
    let cases = [
        ("#ABC123", true),
        ("ABC123", true),
        ("#abc", true),
        ("abc", true),
        ("#ZZZZZZ", false),
        ("#AB", false),
        ("q", false),
        ("", false),
    ];
    for (input, expected) in cases {
        assert_eq!(is_valid_hex(input), expected, "Failed for {:?}", input);
    }
}

#[test]
fn test_distance_endpoints() {
    let black = Rgb::new(0, 0, 0);
    let white = Rgb::new(255, 255, 255);
    let expected = (3.0_f64 * 255.0 * 255.0).sqrt();
    assert!((black.distance(white) - expected).abs() < 1e-9);
    assert_eq!(black.distance(black), 0.0);
}

#[test]
fn test_distance_known_triangle() {
    // 3-4-0 right triangle: the distance is exactly 5.
    assert_eq!(Rgb::new(0, 0, 0).distance(Rgb::new(3, 4, 0)), 5.0);
}

#[test]
fn test_distance_symmetry_over_palette() {
    let colors: Vec<Rgb> = palette::hexes()
        .map(|hex| hex.parse().expect("palette entries always parse"))
        .collect();
    for a in &colors {
        for b in &colors {
            assert_eq!(a.distance(*b), b.distance(*a));
        }
    }
}

#[test]
fn test_display_is_canonical_uppercase() {
    assert_eq!(Rgb::new(142, 202, 230).to_string(), "#8ECAE6");
    assert_eq!("#abc".parse::<Rgb>().unwrap().to_string(), "#AABBCC");
    assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
}
