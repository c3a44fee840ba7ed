use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use galaxy_at::protocol::{AtResponse, ResponseStatus, classify_line, crsm};
use galaxy_at::sim::{self, EF_TABLE};

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for ef in EF_TABLE {
        let payload: String = (0..ef.max_offset())
            .map(|i| format!("{:02X}", (i * 37) & 0xff))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(ef.file), &payload, |b, p| {
            b.iter(|| {
                black_box(sim::decode(black_box(p), ef).ok());
            });
        });
    }
    group.finish();
}

fn bench_crsm_scan(c: &mut Criterion) {
    let mut lines: Vec<String> = (0..8).map(|i| format!("+CIEV: {},1", i)).collect();
    lines.push("+CRSM: 144,0,\"0829310641003412F5\"".to_string());
    lines.push("OK".to_string());
    let resp = AtResponse::new(lines, ResponseStatus::Ok);

    c.bench_function("crsm_find_and_parse", |b| {
        b.iter(|| {
            let line = crsm::find_crsm_line(black_box(&resp));
            black_box(line.map(crsm::parse_crsm_line));
        });
    });
}

fn bench_classify(c: &mut Criterion) {
    let lines = [
        "OK",
        "+CME ERROR: SIM busy",
        "+CPBR: 3,\"+33612345678\",145,\"Doe, John\"",
        "+DEVCONINFO: MN(SM-G950F);BASE(G950FXXU1AQL5);LOCK(NONE)#OK#",
    ];
    c.bench_function("classify_line", |b| {
        b.iter(|| {
            for l in &lines {
                black_box(classify_line(black_box(l)));
            }
        });
    });
}

criterion_group!(benches, bench_decode, bench_crsm_scan, bench_classify);
criterion_main!(benches);
