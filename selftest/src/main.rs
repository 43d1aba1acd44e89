//! Diagnostic self-test binary for [`bigint`].
//!
//! Not part of the crate's public surface: this exists so that a developer
//! (or CI) can eyeball the concrete arithmetic/bitwise/division scenarios the
//! crate is expected to satisfy, each logged as an `a OP b == c` equation at
//! `debug` level. Every equation is also asserted, so a regression fails the
//! process instead of just scrolling past in the log.

use bigint::BigInt;
use clap::Parser;

/// Runs the bigint crate's diagnostic self-test suite.
#[derive(Parser, Debug)]
#[command(name = "bigint-selftest", about = "Exercise BigInt against known-good equations")]
struct Args {
    /// Radix used when logging operands and results (2, 8, 10, or 16).
    #[arg(long, default_value_t = 10)]
    radix: u32,

    /// Increase log verbosity (-v for debug, -vv for trace). Overridden by
    /// `RUST_LOG` if set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn render(n: &BigInt, radix: u32) -> String {
    n.to_string_radix(radix, true).unwrap_or_else(|_| n.to_string())
}

fn main() {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::info!("running bigint self-test at radix {}", args.radix);

    let mut failures = 0u32;
    failures += run_add(args.radix);
    failures += run_div_rem(args.radix);
    failures += run_bitwise(args.radix);
    failures += run_string_round_trip(args.radix);
    failures += run_shift(args.radix);

    if failures == 0 {
        log::info!("all equations held");
    } else {
        log::error!("{failures} equation(s) failed");
        std::process::exit(1);
    }
}

fn check_eq(radix: u32, op: &str, a: &BigInt, b: &BigInt, expected: &BigInt, actual: &BigInt) -> u32 {
    log::debug!("{} {op} {} == {}", render(a, radix), render(b, radix), render(actual, radix));
    if actual == expected {
        0
    } else {
        log::error!(
            "mismatch: {} {op} {} expected {} but got {}",
            render(a, radix),
            render(b, radix),
            render(expected, radix),
            render(actual, radix)
        );
        1
    }
}

fn run_add(radix: u32) -> u32 {
    // 0x7FFFeeee + 0x7EEEffff = 0xFEEEEEED
    let a: BigInt = "0x7FFFeeee".parse().unwrap();
    let b: BigInt = "0x7EEEffff".parse().unwrap();
    let expected: BigInt = "0xFEEEEEED".parse().unwrap();
    check_eq(radix, "+", &a, &b, &expected, &(&a + &b))
}

fn run_div_rem(radix: u32) -> u32 {
    let mut failures = 0;
    let cases: &[(i64, i64, i64, i64)] = &[
        (2325, -2, -1163, -1),
        (5, 7, 0, 5),
        (-5, 7, -1, 2),
        (5, -7, -1, -2),
        (-5, -7, 0, -5),
    ];
    for &(a, b, expected_q, expected_r) in cases {
        let a = BigInt::from_i64(a);
        let b = BigInt::from_i64(b);
        let (q, r) = a.div_rem(&b).expect("nonzero divisor in self-test table");
        failures += check_eq(radix, "//", &a, &b, &BigInt::from_i64(expected_q), &q);
        failures += check_eq(radix, "mod", &a, &b, &BigInt::from_i64(expected_r), &r);
    }
    failures
}

fn run_bitwise(radix: u32) -> u32 {
    let mut failures = 0;
    let a = BigInt::from_i64(-632632);
    let b = BigInt::from_i64(-25832);
    failures += check_eq(radix, "XOR", &a, &b, &BigInt::from_i64(657054), &a.bitxor(&b));
    failures += check_eq(radix, "AND", &a, &b, &BigInt::from_i64(-657056), &a.bitand(&b));
    failures += check_eq(radix, "OR", &a, &b, &BigInt::from_i64(-2), &a.bitor(&b));
    failures
}

fn run_string_round_trip(radix: u32) -> u32 {
    let hex_literal = "0x123456789abcdef0123456789abcdef";
    let parsed: BigInt = hex_literal.parse().unwrap();
    let hex_back = parsed.to_string_radix(16, true).unwrap();
    let decimal = parsed.to_string();

    let mut failures = 0;
    if hex_back != hex_literal {
        log::error!("hex round-trip mismatch: {hex_back} != {hex_literal}");
        failures += 1;
    }
    if decimal != "1512366075204170929049582354406559215" {
        log::error!("decimal round-trip mismatch: {decimal}");
        failures += 1;
    }
    log::debug!("parse({hex_literal}) == {}", render(&parsed, radix));
    failures
}

fn run_shift(radix: u32) -> u32 {
    let a = BigInt::from_i64(0x7eeeFFFFi64);
    let b = BigInt::from_i64(0x7fffeeeei64);
    let expected: BigInt = "0x3F76FE8340E40112".parse().unwrap();
    check_eq(radix, "*", &a, &b, &expected, &(&a * &b))
}
