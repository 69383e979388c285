use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sport_corpus::core::{html, score::{score, KeywordSet}};

fn sample_page() -> String {
    let para = "كرة القدم رياضة جماعية يلعبها فريقان داخل الملعب، ويفوز الفريق الذي يسجل أكثر عدد من الأهداف في المباراة[3] ";
    let mut doc = String::from("<html><body>");
    for i in 0..200 {
        doc.push_str(&format!("<p>{}</p><div>nav {i}</div>", para.repeat(1 + i % 4)));
    }
    doc.push_str("</body></html>");
    doc
}

fn bench_pipeline(c: &mut Criterion) {
    let doc = sample_page();
    let kw = KeywordSet::default();
    let paras = html::extract(&doc);

    c.bench_function("extract_paragraphs", |b| {
        b.iter(|| black_box(html::extract(black_box(&doc))).len())
    });

    c.bench_function("score_paragraphs", |b| {
        b.iter(|| {
            paras.iter().map(|p| score(black_box(p), &kw)).sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
