use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use jsig_core::config::ScanConfig;
use jsig_core::preprocessor::{Preprocessor, TokenPreprocessor};
use jsig_core::{match_functions, scan, tokenize};

/// A synthetic module with `units` repetitions of mixed constructs.
fn generate_source(units: usize) -> String {
    let mut source = String::new();
    for i in 0..units {
        source.push_str(&format!(
            r#"/**
 * Block comment {i} with a fake function decoy() {{}}
 */
export async function load{i}(url, options = defaults({i})) {{
  const label = "function inString{i}() {{}}";
  return fetch(url, options).then((res) => res.json()); // trailing
}}

const handler{i} = async (event, context) => {{
  let total = {i}.5;
  return total;
}};

class Service{i} extends Base {{
  constructor(client) {{ this.client = client; }}
  async call(method, {{ retries }}) {{ return this.client[method](); }}
}}
"#
        ));
    }
    source
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for units in [10, 100, 1000] {
        let source = generate_source(units);
        group.bench_with_input(BenchmarkId::from_parameter(units), &source, |b, source| {
            b.iter(|| tokenize(black_box(source)))
        });
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_functions");
    for units in [10, 100, 1000] {
        let tokens = TokenPreprocessor::new().process(tokenize(&generate_source(units)));
        group.bench_with_input(BenchmarkId::from_parameter(units), &tokens, |b, tokens| {
            b.iter(|| match_functions(black_box(tokens)))
        });
    }
    group.finish();
}

fn bench_scan_structural(c: &mut Criterion) {
    let source = generate_source(100);
    let config = ScanConfig::structural();
    c.bench_function("scan structural 100", |b| {
        b.iter(|| scan(black_box(&source), &config))
    });
}

criterion_group!(benches, bench_tokenize, bench_match, bench_scan_structural);
criterion_main!(benches);
