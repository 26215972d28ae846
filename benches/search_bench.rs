use criterion::{criterion_group, criterion_main, Criterion, black_box};
use reversi12::{Board, MemoKey, SearchParams, Searcher, Side};

fn bench_search(c: &mut Criterion) {
    let b = Board::opening();
    let mut group = c.benchmark_group("search");
    let cases = [
        ("board_memo_d3", true, MemoKey::BoardOnly),
        ("depth_aware_memo_d3", true, MemoKey::DepthAware),
        ("no_memo_d3", false, MemoKey::BoardOnly),
    ];
    for (name, use_memo, memo_key) in cases {
        group.bench_function(name, |ben| {
            ben.iter(|| {
                let p = SearchParams { depth: 3, use_memo, memo_key, ..SearchParams::default() };
                let mut s = Searcher::new(p);
                let r = s.search_with_params(black_box(&b), Side::X, p);
                black_box(r.nodes)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
