use ecc32::conversions;
use ecc32::curve::params::WEI25519;

#[test]
fn test_wei_to_montgomery_round_trips() {
    let p = WEI25519.g;
    let m = conversions::short_weierstrass_to_montgomery(p);
    assert_eq!(conversions::montgomery_to_short_weierstrass(m), p);
}

#[test]
fn test_ed_to_wei_and_back_round_trips_away_from_special_cases() {
    // An arbitrary non-special-case twisted Edwards point: run it forward
    // and back through the short Weierstrass form.
    let ed_point = ([5u32, 0, 0, 0, 0, 0, 0, 0], [7u32, 0, 0, 0, 0, 0, 0, 0]);
    let wei_point = conversions::twisted_edwards_to_short_weierstrass(ed_point);
    let back = conversions::short_weierstrass_to_twisted_edwards(wei_point);
    assert_eq!(back, ed_point);
}

#[test]
fn test_ed_to_wei_identity_maps_to_the_zero_sentinel() {
    let (rx, ry) = conversions::twisted_edwards_to_short_weierstrass(([0u32; 8], [0u32; 8]));
    assert_eq!(rx, [0u32; 8]);
    assert_eq!(ry, [0u32; 8]);
}
