use criterion::{Criterion, criterion_group, criterion_main};

/// Generate a library-inventory document with the given number of books
#[cfg(feature = "libxml2")]
fn generate_document(books: usize, scenario: &str) -> String {
    let mut content = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<library>\n");

    for i in 0..books {
        match scenario {
            "all_valid" => {
                content.push_str(&format!(
                    "  <book id=\"b-{i:05}\">\n    <title>Book {i}</title>\n    <author>Author {i}</author>\n    <year>1999</year>\n  </book>\n"
                ));
            }
            "violations" => {
                // every third book misses its id attribute and carries a bad year
                if i % 3 == 0 {
                    content.push_str(&format!(
                        "  <book>\n    <title>Book {i}</title>\n    <author>Author {i}</author>\n    <year>unknown</year>\n  </book>\n"
                    ));
                } else {
                    content.push_str(&format!(
                        "  <book id=\"b-{i:05}\">\n    <title>Book {i}</title>\n    <author>Author {i}</author>\n    <year>1999</year>\n  </book>\n"
                    ));
                }
            }
            _ => unreachable!("unknown scenario"),
        }
    }

    content.push_str("</library>\n");
    content
}

#[cfg(feature = "libxml2")]
fn bench_validation(c: &mut Criterion) {
    use std::fs;
    use std::path::Path;

    use criterion::BenchmarkId;
    use xsd_check::backend::SchemaBackend;
    use xsd_check::backend::libxml2::LibXml2Backend;

    let xsd = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("thuvien.xsd");
    let dir = tempfile::tempdir().expect("tempdir");

    let mut group = c.benchmark_group("libxml2_validation");
    for books in [10, 100, 1000] {
        for scenario in ["all_valid", "violations"] {
            let xml = dir.path().join(format!("{scenario}_{books}.xml"));
            fs::write(&xml, generate_document(books, scenario)).expect("write document");

            group.bench_with_input(BenchmarkId::new(scenario, books), &books, |b, _| {
                b.iter(|| {
                    LibXml2Backend
                        .validate(&xml, &xsd)
                        .expect("backend completes")
                })
            });
        }
    }
    group.finish();
}

#[cfg(not(feature = "libxml2"))]
fn bench_validation(_: &mut Criterion) {}

criterion_group!(benches, bench_validation);
criterion_main!(benches);
