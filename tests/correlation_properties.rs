use circstat::{circular_correlation, convert, AngleRange, CircStatError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_series(rng: &mut StdRng, range: AngleRange, len: usize) -> Vec<f64> {
    let (lower, upper) = range.bounds();
    (0..len).map(|_| rng.random_range(lower..upper)).collect()
}

/// Heading-like series: `base` plus noise, expressed in `range`.
fn noisy_copy(rng: &mut StdRng, base_deg: &[f64], noise_deg: f64, range: AngleRange) -> Vec<f64> {
    base_deg
        .iter()
        .map(|&a| {
            let noisy = (a + rng.random_range(-noise_deg..noise_deg)).rem_euclid(360.0);
            convert(noisy, AngleRange::Deg0To360, range)
        })
        .collect()
}

#[test]
fn coefficient_is_bounded() {
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..100 {
        let range_x = AngleRange::ALL[rng.random_range(0..4usize)];
        let range_y = AngleRange::ALL[rng.random_range(0..4usize)];
        let x = random_series(&mut rng, range_x, 30);
        let y = random_series(&mut rng, range_y, 30);
        let r = circular_correlation(&x, range_x, &y, range_y).unwrap();
        assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&r), "r = {r}");
    }
}

#[test]
fn coefficient_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(22);
    for _ in 0..50 {
        let x = random_series(&mut rng, AngleRange::DegNeg180To180, 25);
        let y = random_series(&mut rng, AngleRange::Rad0To2Pi, 25);
        let xy = circular_correlation(&x, AngleRange::DegNeg180To180, &y, AngleRange::Rad0To2Pi)
            .unwrap();
        let yx = circular_correlation(&y, AngleRange::Rad0To2Pi, &x, AngleRange::DegNeg180To180)
            .unwrap();
        assert_eq!(xy, yx);
    }
}

#[test]
fn series_correlates_with_itself() {
    let mut rng = StdRng::seed_from_u64(23);
    for range in AngleRange::ALL {
        let x = random_series(&mut rng, range, 40);
        let r = circular_correlation(&x, range, &x, range).unwrap();
        assert!((r - 1.0).abs() < 1e-12, "{range}: r = {r}");
    }
}

#[test]
fn noise_weakens_the_coefficient() {
    let mut rng = StdRng::seed_from_u64(24);
    let base: Vec<f64> = (0..200).map(|_| rng.random_range(-60.0..80.0)).collect();
    let base_360: Vec<f64> = base.iter().map(|a: &f64| a.rem_euclid(360.0)).collect();

    let tight = noisy_copy(&mut rng, &base, 5.0, AngleRange::RadNegPiToPi);
    let loose = noisy_copy(&mut rng, &base, 60.0, AngleRange::RadNegPiToPi);
    let r_tight =
        circular_correlation(&base_360, AngleRange::Deg0To360, &tight, AngleRange::RadNegPiToPi)
            .unwrap();
    let r_loose =
        circular_correlation(&base_360, AngleRange::Deg0To360, &loose, AngleRange::RadNegPiToPi)
            .unwrap();
    assert!(r_tight > 0.95, "r_tight = {r_tight}");
    assert!(r_loose < r_tight, "r_loose = {r_loose}, r_tight = {r_tight}");
}

#[test]
fn mismatched_lengths_are_rejected_before_computing() {
    let x = [10.0, 20.0, 30.0, 40.0];
    let y = [10.0, 20.0];
    let err = circular_correlation(&x, AngleRange::Deg0To360, &y, AngleRange::Deg0To360)
        .unwrap_err();
    assert_eq!(err, CircStatError::LengthMismatch { x_len: 4, y_len: 2 });

    let empty: [f64; 0] = [];
    let err = circular_correlation(&empty, AngleRange::Deg0To360, &y, AngleRange::Deg0To360)
        .unwrap_err();
    assert_eq!(err, CircStatError::LengthMismatch { x_len: 0, y_len: 2 });
}

#[test]
fn zero_variance_is_nan_not_an_error() {
    let x = [0.0; 5];
    let y = [10.0, 80.0, 130.0, 200.0, 310.0];
    let r = circular_correlation(&x, AngleRange::Deg0To360, &y, AngleRange::Deg0To360).unwrap();
    assert!(r.is_nan());
}
