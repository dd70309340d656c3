//! Lexer throughput benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tuic_lex::{Lexer, TokenKind};
use tuic_util::Handler;

fn sample_source() -> String {
    let mut source = String::from("package bench\n\n");
    for i in 0..50 {
        source.push_str(&format!(
            "@component Card{i}(title string, count int) {{\n\
             \t<box#Root class=\"flex flex-col p-2 gap-1\">\n\
             \t\t<text class=\"font-bold text-cyan\">{{title}}</text>\n\
             \t\t@if count > 0 {{\n\
             \t\t\t<text>{{fmt.Sprintf(\"%d items\", count)}}</text>\n\
             \t\t}}\n\
             \t</box>\n\
             }}\n\n"
        ));
    }
    source
}

fn bench_lexer(c: &mut Criterion) {
    let source = sample_source();
    c.bench_function("lex_components", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let mut lexer = Lexer::new(black_box(&source), &handler);
            let mut count = 0usize;
            loop {
                let token = lexer.next_token();
                if token.kind == TokenKind::Eof {
                    break;
                }
                count += 1;
            }
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_lexer);
criterion_main!(benches);
