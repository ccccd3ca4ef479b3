use chrono::{NaiveDate, TimeDelta};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sunriseset::{SolarEvent, Zenith};

fn benchmark_single_calculation(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
    let lat = 37.7749;
    let lon = -122.4194;

    c.bench_function("sunrise_instant_single", |b| {
        b.iter(|| {
            sunriseset::sunrise_instant(
                black_box(date),
                black_box(Zenith::Official),
                black_box(lat),
                black_box(lon),
            )
        })
    });

    c.bench_function("sunrise_utc_single", |b| {
        b.iter(|| {
            sunriseset::sunrise_utc(
                black_box(2023),
                black_box(6),
                black_box(21),
                black_box(Zenith::Official),
                black_box(lat),
                black_box(lon),
            )
            .unwrap()
        })
    });
}

fn benchmark_year_at_fixed_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_at_fixed_location");

    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let dates: Vec<NaiveDate> = (0..365).map(|d| start + TimeDelta::days(d)).collect();
    group.throughput(Throughput::Elements(dates.len() as u64 * 2));

    for zenith in Zenith::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(zenith), &zenith, |b, &zenith| {
            b.iter(|| {
                for &date in &dates {
                    for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
                        black_box(sunriseset::calculate(
                            event,
                            date,
                            zenith,
                            black_box(59.3293),
                            black_box(18.0686),
                            &sunriseset::NullLogger,
                        ));
                    }
                }
            })
        });
    }

    group.finish();
}

fn benchmark_latitude_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("latitude_sweep");

    let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();

    for &count in &[100_u32, 1000] {
        let latitudes: Vec<f64> = (0..count)
            .map(|i| -89.0 + 178.0 * f64::from(i) / f64::from(count))
            .collect();
        group.throughput(Throughput::Elements(u64::from(count)));

        group.bench_with_input(BenchmarkId::new("sunset", count), &latitudes, |b, lats| {
            b.iter(|| {
                for &lat in lats {
                    black_box(sunriseset::sunset_instant(
                        date,
                        Zenith::Official,
                        black_box(lat),
                        0.0,
                    ));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_year_at_fixed_location,
    benchmark_latitude_sweep
);

criterion_main!(benches);
