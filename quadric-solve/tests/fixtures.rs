use quadric_solve::{
    Code, Outcome, SENTINEL,
    fixture::{self, FIXTURES},
    solve, solve_into,
    verify::{self, Config},
};

#[test]
fn all_fixtures_pass() {
    for fixture in FIXTURES {
        if let Err(mismatch) = fixture.run() {
            panic!("{} ({}): {mismatch}", fixture.id, fixture.name);
        }
    }
}

#[test]
fn fixtures_cover_every_solved_code() {
    for code in Code::ALL
        .into_iter()
        .filter(|code| *code != Code::InvalidArguments)
    {
        assert!(
            FIXTURES.iter().any(|fixture| fixture.expected.code() == code),
            "no fixture expects {code:?}"
        );
    }
}

#[test]
fn rootless_fixtures_report_sentinel() {
    for fixture in FIXTURES {
        let outcome = solve(fixture.a, fixture.b, fixture.c);
        if matches!(
            outcome,
            Outcome::InfiniteRoots | Outcome::NoRoots | Outcome::Overflow
        ) {
            assert_eq!(outcome.roots(), (SENTINEL, SENTINEL), "{}", fixture.id);
        }
    }
}

#[test]
fn reported_fixture_roots_satisfy_equation() {
    let config = Config::default();
    for fixture in FIXTURES {
        let outcome = solve(fixture.a, fixture.b, fixture.c);
        if outcome == Outcome::Overflow {
            continue;
        }
        verify::check(fixture.a, fixture.b, fixture.c, &outcome, &config)
            .unwrap_or_else(|err| panic!("{}: {err}", fixture.id));
    }
}

#[test]
fn output_slots_agree_with_outcome() {
    for fixture in FIXTURES {
        let (mut x1, mut x2) = (f64::NAN, f64::NAN);
        let code = solve_into(fixture.a, fixture.b, fixture.c, Some(&mut x1), Some(&mut x2));
        let outcome = solve(fixture.a, fixture.b, fixture.c);
        assert_eq!(code, outcome.code(), "{}", fixture.id);
        assert_eq!((x1, x2), outcome.roots(), "{}", fixture.id);
    }
}

#[test]
fn overflow_fixture_by_id() {
    let fixture = fixture::find("test15").expect("fixture exists");
    assert_eq!(fixture.run(), Ok(Outcome::Overflow));
}
