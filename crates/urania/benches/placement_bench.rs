use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectEdge;
use urania::bodies::{CelestialBody, HouseCusp, PlanetId};
use urania::layout::{place_bodies, RingConfig};
use urania::rendering::{render_wheel, RenderOptions};

fn spread_bodies() -> Vec<CelestialBody> {
    PlanetId::ALL
        .iter()
        .enumerate()
        .map(|(i, &planet)| CelestialBody::at(planet, (i as f64) * 21.0))
        .collect()
}

fn stellium() -> Vec<CelestialBody> {
    PlanetId::ALL
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, &planet)| CelestialBody::at(planet, 120.0 + i as f64 * 0.5))
        .collect()
}

fn bench_place_spread(c: &mut Criterion) {
    let config = RingConfig::natal();
    let bodies = spread_bodies();

    c.bench_function("place_bodies_spread", |b| {
        b.iter(|| place_bodies(black_box(&bodies), black_box(&config), black_box(0.0)))
    });
}

fn bench_place_stellium(c: &mut Criterion) {
    let config = RingConfig::natal();
    let bodies = stellium();

    c.bench_function("place_bodies_stellium", |b| {
        b.iter(|| place_bodies(black_box(&bodies), black_box(&config), black_box(15.0)))
    });
}

fn bench_render_wheel(c: &mut Criterion) {
    let config = RingConfig::natal();
    let bodies = spread_bodies();
    let cusps: Vec<HouseCusp> = (1..=12)
        .map(|h| HouseCusp::new(h, ((h as f64 - 1.0) * 30.0 + 15.0) % 360.0))
        .collect();
    let aspects: Vec<AspectEdge> = Vec::new();

    c.bench_function("render_wheel", |b| {
        b.iter(|| {
            render_wheel(
                black_box(&bodies),
                black_box(&cusps),
                black_box(&aspects),
                black_box(&config),
                RenderOptions::default(),
            )
        })
    });
}

criterion_group!(benches, bench_place_spread, bench_place_stellium, bench_render_wheel);
criterion_main!(benches);
