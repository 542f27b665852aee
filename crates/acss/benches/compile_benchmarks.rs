//! Compilation benchmarks.
//!
//! Run with: `cargo bench -p acss --bench compile_benchmarks`

use acss::parser::{ParseContext, parse_line, parse_template};
use acss::types::{StyleDef, Theme};
use acss::{CompileOptions, Session};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const CARD: &str = r#"
@scope bench

@const surface {
  bg[white]
  br[8px]
  sh[0 1px 3px rgba(0, 0, 0, 0.2)]
}

.card {
  @use surface
  --&pad[16px]
  p[--&pad]
  d[flex]
  fx-dir[column]
  gap[8px]
  hover($sh[0 4px 12px black] tf[translateY(-1px)])
  before(ct[*] c[gray])
  screen(md, p[24px] gap[12px])
  container(min-w[400px], fx-dir[row])
  @query > h2 {
    fs[20px]
    fw[600]
  }
}
"#;

/// A template with `n` small classes.
fn template(n: usize) -> String {
    let mut source = String::from("@scope bench\n");
    for i in 0..n {
        source.push_str(&format!(
            ".item{i} {{\n  p[{i}px]\n  c[--fg]\n  hover(bg[gray] $c[red])\n  screen(md, p[{}px])\n}}\n",
            i * 2
        ));
    }
    source
}

// ============================================================================
// LINE PARSING
// ============================================================================

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");
    let theme = Theme::standard();

    let lines = [
        ("property", "bd[1px solid var(--line)]"),
        ("state", "hover(c[red] bg[blue] bd[1px solid red])"),
        ("screen", "screen(md, p[16px] gap[8px])"),
    ];
    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::new("line", name), &line, |b, line| {
            b.iter(|| {
                let mut def = StyleDef::new();
                parse_line(black_box(line), &mut def, ParseContext::empty(), &theme).unwrap();
                def
            })
        });
    }

    group.finish();
}

// ============================================================================
// TEMPLATES
// ============================================================================

fn bench_parse_template(c: &mut Criterion) {
    c.bench_function("parse_template_card", |b| {
        b.iter(|| parse_template(black_box(CARD)).unwrap())
    });
}

fn bench_compile_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_template");

    group.bench_function("card", |b| {
        b.iter(|| {
            let mut session = Session::new(Theme::standard(), CompileOptions::default());
            session.compile_template(black_box(CARD)).unwrap()
        })
    });

    for n in [10, 100, 500] {
        let source = template(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("classes", n), &source, |b, source| {
            b.iter(|| {
                let mut session = Session::default();
                session.compile_template(black_box(source)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_line,
    bench_parse_template,
    bench_compile_template
);
criterion_main!(benches);
