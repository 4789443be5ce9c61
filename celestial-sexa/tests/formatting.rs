use celestial_sexa::format::{dec_sym_strip, Flags};
use celestial_sexa::{
    Angle, FormatSpec, HourAngle, OverflowCause, Precision, RightAscension, SexaError,
    SexaFormatter, Sexagesimal, SymbolSet, Time, UnitKind, Verb,
};

fn spec(s: &str) -> FormatSpec {
    s.parse().unwrap()
}

fn small_angle() -> Angle {
    Angle::from_dms(false, 0.0, 0.0, 1.23).unwrap()
}

// --- Verbs on 1.23 arcseconds ---

#[test]
fn standard_verb_puts_symbol_after_fraction() {
    assert_eq!(small_angle().render(&spec("%.2s")).unwrap(), "1.23″");
}

#[test]
fn symbol_before_point_verb() {
    assert_eq!(small_angle().render(&spec("%.2d")).unwrap(), "1″.23");
}

#[test]
fn combining_verb_replaces_point() {
    assert_eq!(small_angle().render(&spec("%.2c")).unwrap(), "1″\u{0323}23");
}

#[test]
fn digits_only_verb() {
    assert_eq!(small_angle().render(&spec("%.2x")).unwrap(), "123");
}

#[test]
fn alternate_flag_prints_all_segments() {
    assert_eq!(small_angle().render(&spec("%#.2d")).unwrap(), "0°0′1″.23");
}

// --- Published examples ---

#[test]
fn venus_apparent_position() {
    let ra = RightAscension::from_hms(21.0, 4.0, 41.454).unwrap();
    let dec = Angle::from_dms(true, 18.0, 53.0, 16.84).unwrap();
    assert_eq!(ra.render(&spec("%.3d")).unwrap(), "21ʰ4ᵐ41ˢ.454");
    assert_eq!(dec.render(&spec("%.2d")).unwrap(), "-18°53′16″.84");
}

#[test]
fn comet_position() {
    let ra = RightAscension::from_hms(10.0, 34.0, 14.2).unwrap();
    let dec = Angle::from_dms(false, 19.0, 9.0, 31.0).unwrap();
    assert_eq!(format!("{:.1}", ra.with_verb(Verb::SymbolBeforePoint)), "10ʰ34ᵐ14ˢ.2");
    assert_eq!(format!("{:.0}", dec.with_verb(Verb::SymbolBeforePoint)), "19°9′31″");
}

// --- Carry ---

#[test]
fn carry_wraps_at_full_circle() {
    let a = Angle::from_degrees(359.999999);
    assert_eq!(a.render(&spec("%#.2d")).unwrap(), "0°0′0″.00");
}

#[test]
fn carry_through_every_minute_boundary() {
    for d in [0.0, 1.0, 89.0, 358.0] {
        for m in [0.0, 17.0, 59.0] {
            let a = Angle::from_dms(false, d, m, 59.999).unwrap();
            let text = a.render(&spec("%#.2s")).unwrap();
            let (next_d, next_m) = if m == 59.0 { (d + 1.0, 0.0) } else { (d, m + 1.0) };
            assert_eq!(text, format!("{next_d}°{next_m}′0.00″"), "{d} {m}");
        }
    }
}

#[test]
fn time_carry_keeps_counting_hours() {
    let t = Time::from_hms(false, 99.0, 59.0, 59.9999).unwrap();
    assert_eq!(t.render(&spec("%.2s")).unwrap(), "100ʰ0ᵐ0.00ˢ");
}

#[test]
fn hour_angle_carry_wraps_at_24h() {
    let h = HourAngle::from_hms(false, 23.0, 59.0, 59.9999).unwrap();
    assert_eq!(h.render(&spec("%#.2s")).unwrap(), "0ʰ0ᵐ0.00ˢ");
}

// --- Sign handling ---

#[test]
fn right_ascension_never_signed() {
    let ra = RightAscension::from_hours(-2.0);
    for s in ["%+.0s", "% .0s", "%+ .0s"] {
        assert_eq!(ra.render(&spec(s)).unwrap(), "22ʰ0ᵐ0ˢ", "{s}");
    }
}

#[test]
fn plus_wins_over_space() {
    let a = Angle::from_degrees(12.0);
    let flags = Flags {
        plus: true,
        space: true,
        ..Flags::default()
    };
    let s = FormatSpec::new(Verb::Standard).with_flags(flags);
    assert_eq!(a.render(&s).unwrap(), "+12°0′0″");
}

#[test]
fn hour_angle_and_time_honor_sign_flags() {
    let h = HourAngle::from_hours(1.5);
    assert_eq!(h.render(&spec("%+s")).unwrap(), "+1ʰ30ᵐ0ˢ");
    assert_eq!(h.render(&spec("% s")).unwrap(), " 1ʰ30ᵐ0ˢ");
    assert_eq!(h.render(&spec("%+ s")).unwrap(), "+1ʰ30ᵐ0ˢ");
    assert_eq!(HourAngle::from_hours(-1.5).render(&spec("% s")).unwrap(), "-1ʰ30ᵐ0ˢ");

    let t = Time::from_seconds(3723.0);
    assert_eq!(t.render(&spec("%+s")).unwrap(), "+1ʰ2ᵐ3ˢ");
    assert_eq!(t.render(&spec("% s")).unwrap(), " 1ʰ2ᵐ3ˢ");
    assert_eq!(t.render(&spec("%+ s")).unwrap(), "+1ʰ2ᵐ3ˢ");
    assert_eq!(Time::from_seconds(-3723.0).render(&spec("%+s")).unwrap(), "-1ʰ2ᵐ3ˢ");
}

#[test]
fn space_flag_reserves_sign_column() {
    let s = spec("% 03.0s");
    let pos = Angle::from_degrees(12.0).render(&s).unwrap();
    let neg = Angle::from_degrees(-12.0).render(&s).unwrap();
    assert_eq!(pos, " 012°00′00″");
    assert_eq!(neg, "-012°00′00″");
}

// --- Overflow ---

#[test]
fn non_finite_always_overflows() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for s in ["%s", "%+#010.15c", "%.62x", "%.64d"] {
            let err = Angle::from_radians(v).render(&spec(s)).unwrap_err();
            assert_eq!(err.error, SexaError::Overflow(OverflowCause::NonFinite));
            assert!(!err.placeholder.is_empty());
            assert!(err.placeholder.chars().all(|c| c == '*'));
        }
    }
}

#[test]
fn placeholder_matches_fixed_width_layout() {
    let s = spec("%+03.2s");
    let fmt = SexaFormatter::default();
    let ok = fmt.render(Angle::from_degrees(-7.5).raw(), UnitKind::Angle, &s).unwrap();
    let bad = fmt.render(f64::NAN, UnitKind::Angle, &s).unwrap_err();
    assert_eq!(ok, "-007°30′00.00″");
    assert_eq!(bad.placeholder.chars().count(), ok.chars().count());
}

#[test]
fn first_segment_wider_than_width() {
    let t = Time::from_hms(false, 1234.0, 0.0, 0.0).unwrap();
    let err = t.render(&spec("%3.0s")).unwrap_err();
    assert_eq!(
        err.error.overflow_cause(),
        Some(OverflowCause::FirstSegmentExceedsWidth)
    );
    assert_eq!(err.placeholder, "*".repeat(3 + 2 + 2 + 3));
    assert_eq!(t.render(&spec("%.0s")).unwrap(), "1234ʰ0ᵐ0ˢ");
}

#[test]
fn precision_budget_shrinks_with_magnitude() {
    let tiny = Angle::from_dms(false, 0.0, 0.0, 1.5).unwrap();
    assert!(tiny.render(&spec("%.15s")).is_ok());

    let one_degree = Angle::from_degrees(1.0);
    assert!(one_degree.render(&spec("%.12s")).is_ok());
    assert!(one_degree.render(&spec("%.13s")).is_err());

    let big = Angle::from_degrees(350.0);
    assert!(big.render(&spec("%.9s")).is_ok());
    let err = big.render(&spec("%.10s")).unwrap_err();
    assert_eq!(
        err.error.overflow_cause(),
        Some(OverflowCause::PrecisionExceedsCapacity)
    );
}

#[test]
fn oversized_width_never_panics() {
    let fmt = SexaFormatter::default();
    for s in ["%70000s", "%18446744073709551615.2s"] {
        for v in [1.0, f64::NAN] {
            let err = fmt.render_str(v, UnitKind::Angle, s).unwrap_err();
            assert!(err.error.is_configuration(), "{s}: {}", err.error);
            assert_eq!(err.placeholder, "*".repeat(10));
        }
    }
}

#[test]
fn invalid_precision_is_configuration_error() {
    let fmt = SexaFormatter::default();
    let err = fmt.render_str(1.0, UnitKind::Angle, "%.63s").unwrap_err();
    assert!(err.error.is_configuration());
    assert_eq!(Precision::from_raw(63), Err(SexaError::InvalidPrecision(63)));
}

// --- Sentinels ---

#[test]
fn minute_and_degree_rounding() {
    let a = Angle::from_dms(false, 1.0, 30.0, 45.0).unwrap();
    assert_eq!(format!("{a:.62}"), "1°31′");
    assert_eq!(format!("{a:.64}"), "2°");
    assert_eq!(a.render(&spec("%.62d")).unwrap(), "1°31′");
}

// --- Symbol sets and strip round trip ---

#[test]
fn ascii_symbols() {
    let fmt = SexaFormatter::new(SymbolSet::ASCII);
    let ra = RightAscension::from_hms(5.0, 14.0, 32.27).unwrap();
    assert_eq!(ra.render_with(&fmt, &spec("%02.2s")).unwrap(), "05h14m32.27s");
}

#[test]
fn strip_round_trip_for_all_point_verbs() {
    let values = [
        Angle::from_dms(false, 12.0, 34.0, 56.789).unwrap(),
        Angle::from_dms(true, 0.0, 1.0, 2.5).unwrap(),
        Angle::from_degrees(359.999999),
    ];
    for a in values {
        for p in [0, 1, 3, 6] {
            let standard = a.render(&spec(&format!("%#.{p}s"))).unwrap();
            let added = a.render(&spec(&format!("%#.{p}d"))).unwrap();
            let combined = a.render(&spec(&format!("%#.{p}c"))).unwrap();
            let plain = dec_sym_strip(&standard, '″');
            assert_eq!(dec_sym_strip(&added, '″'), plain);
            assert_eq!(dec_sym_strip(&combined, '″'), plain);
        }
    }
}

#[test]
fn formatter_is_shareable_across_threads() {
    let fmt = SexaFormatter::default();
    let s = spec("%#.1s");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let fmt = &fmt;
                let s = &s;
                scope.spawn(move || fmt.render(f64::from(i) * 3600.0, UnitKind::Time, s))
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap().unwrap(), format!("{i}ʰ0ᵐ0.0ˢ"));
        }
    });
}
