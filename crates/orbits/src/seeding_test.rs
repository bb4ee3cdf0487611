use crate::error::SimulationError;
use crate::seeding::RandomField;

#[test]
fn test_default_field_matches_random_button() {
    let field = RandomField::default();

    assert_eq!(field.count, 999);
    assert_eq!((field.min_mass, field.max_mass), (1.0, 21.0));
    assert_eq!(field.max_speed, 10.0);
}

#[test]
fn test_generated_bodies_respect_bounds() {
    let field = RandomField {
        count: 500,
        width: 320.0,
        height: 240.0,
        seed: 3,
        ..RandomField::default()
    };

    for body in field.generate().unwrap() {
        let p = body.position();
        let v = body.velocity();
        assert!((0.0..320.0).contains(&p.x));
        assert!((0.0..240.0).contains(&p.y));
        assert!((1.0..21.0).contains(&body.mass()));
        assert!(v.x.abs() <= 10.0 && v.y.abs() <= 10.0);
        assert!(body.is_movable());
    }
}

#[test]
fn test_seed_changes_field() {
    let a = RandomField { count: 5, seed: 1, ..RandomField::default() };
    let b = RandomField { count: 5, seed: 2, ..RandomField::default() };

    assert_ne!(a.generate().unwrap(), b.generate().unwrap());
}

#[test]
fn test_zero_speed_field_is_at_rest() {
    let field = RandomField { count: 20, max_speed: 0.0, ..RandomField::default() };

    assert!(field.generate().unwrap().iter().all(|b| b.velocity().magnitude() == 0.0));
}

#[test]
fn test_invalid_fields_are_rejected() {
    let empty_area = RandomField { width: 0.0, ..RandomField::default() };
    let inverted = RandomField { min_mass: 5.0, max_mass: 2.0, ..RandomField::default() };
    let massless = RandomField { min_mass: 0.0, ..RandomField::default() };
    let nan = RandomField { height: f64::NAN, ..RandomField::default() };

    for field in [empty_area, inverted, massless, nan] {
        assert!(matches!(field.generate(), Err(SimulationError::InvalidConfig(_))));
    }
}
