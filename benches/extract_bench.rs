use case_runner::core::extract::extract_cases;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_extract_cases(c: &mut Criterion) {
    let blocks: Vec<String> = (0..50)
        .map(|i| {
            format!(
                "Input:\u{00A0}nums = [2,7,11,15], target = {i}\n\
                 Output: [0,1]\n\
                 Explanation: Because nums[0] + nums[1] == {i}, we return [0, 1]."
            )
        })
        .collect();

    c.bench_function("extract_50_blocks", |b| {
        b.iter(|| extract_cases(&blocks));
    });
}

criterion_group!(benches, bench_extract_cases);
criterion_main!(benches);
