use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn normalize_diacritics(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'ă' => 'a',
            'î' => 'i',
            'â' => 'a',
            'ș' => 's',
            'ț' => 't',
            'Ă' => 'A',
            'Î' => 'I',
            'Â' => 'A',
            'Ș' => 'S',
            'Ț' => 'T',
            other => other,
        })
        .collect()
}

fn escape_value(value: &str) -> String {
    value
        .replace(' ', "%20")
        .replace('&', "%26")
        .replace('$', "%24")
}

fn filter_clause(field: &str, values: &str) -> String {
    let clauses: Vec<String> = values
        .split(',')
        .map(|item| format!("{}%3A%22{}%22", field, escape_value(item)))
        .collect();

    format!("&fq={}", clauses.join("%20OR%20"))
}

fn build_search_query(q: &str, company: &str, city: &str, page: u32) -> String {
    let mut query = String::from("?indent=true&q.op=OR&");
    query.push_str(&format!("q={}", escape_value(q)));
    query.push_str(&filter_clause("company", company));
    query.push_str(&filter_clause("city", city));
    query.push_str("&fq=remote%3A%22remote%22");
    query.push_str(&format!(
        "&start={}&rows=12",
        u64::from(page.saturating_sub(1)) * 12
    ));
    query.push_str("&useParams=");
    query
}

fn bench_normalize(c: &mut Criterion) {
    let input = "Inginerie software în București, Iași și Târgu Mureș";

    c.bench_function("normalize_diacritics", |b| {
        b.iter(|| normalize_diacritics(black_box(input)))
    });
}

fn bench_build_query(c: &mut Criterion) {
    c.bench_function("build_search_query", |b| {
        b.iter(|| {
            build_search_query(
                black_box("data engineer"),
                black_box("Acme,Beta Corp,Gamma"),
                black_box("Cluj,Bucuresti,Iasi,Timisoara"),
                black_box(3),
            )
        })
    });
}

criterion_group!(benches, bench_normalize, bench_build_query);
criterion_main!(benches);
