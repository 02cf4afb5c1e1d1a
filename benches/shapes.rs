use criterion::{black_box, criterion_group, criterion_main, Criterion};

use drawing_shapes::basics::RectD;
use drawing_shapes::scene::Scene;
use drawing_shapes::shapes::{checkerboard_path, flower_path, ColorCyclingCircle};
use drawing_shapes::svg::{render_svg, svg_path_data};

fn bench_generators(c: &mut Criterion) {
    let rect = RectD::from_xywh(0.0, 0.0, 300.0, 300.0);

    c.bench_function("checkerboard_16x16", |b| {
        b.iter(|| checkerboard_path(black_box(&rect), 16, 16))
    });

    c.bench_function("flower_default", |b| {
        b.iter(|| flower_path(black_box(&rect), -20.0, 100.0))
    });

    let rings = ColorCyclingCircle::new(0.25, 100);
    c.bench_function("color_cycling_rings_100", |b| {
        b.iter(|| rings.rings(black_box(&rect)))
    });
}

fn bench_flattening(c: &mut Criterion) {
    let rect = RectD::from_xywh(0.0, 0.0, 300.0, 300.0);
    let flower = flower_path(&rect, -20.0, 100.0);

    c.bench_function("flatten_flower", |b| {
        b.iter(|| svg_path_data(black_box(&flower), 1.0))
    });

    let scene = Scene::from_json(
        r##"{ "width": 300, "height": 300, "items": [
            { "shape": "flower", "fill": "#ffc0cb" },
            { "shape": "color_cycling_circle", "line_width": 2 }
        ] }"##,
    )
    .unwrap();
    c.bench_function("render_svg_scene", |b| b.iter(|| render_svg(black_box(&scene))));
}

criterion_group!(benches, bench_generators, bench_flattening);
criterion_main!(benches);
