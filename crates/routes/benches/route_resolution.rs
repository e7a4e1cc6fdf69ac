use criterion::{Criterion, black_box, criterion_group, criterion_main};

use digitalproducts_routes::RouteTable;

fn bench_resolve(c: &mut Criterion) {
    let table = RouteTable::install("commerce-digitalproducts");
    let paths = [
        "commerce-digitalproducts/producttypes/new",
        "commerce-digitalproducts/products/shirts/1234/en_us",
        "commerce-digitalproducts/licenses/987654",
        "commerce-digitalproducts/products/unknown/shape/here/too",
    ];

    c.bench_function("resolve_mixed_paths", |b| {
        b.iter(|| {
            for path in paths {
                black_box(table.resolve(black_box(path)));
            }
        })
    });

    c.bench_function("resolve_last_route", |b| {
        b.iter(|| black_box(table.resolve(black_box("commerce-digitalproducts/licenses/42"))))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
