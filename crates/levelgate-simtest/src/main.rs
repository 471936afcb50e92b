//! LevelGate Headless Harness
//!
//! Loads a level schema, builds a `LevelGraph`, and sweeps consistency
//! checks over it. Runs entirely in-process — no server, no store.
//!
//! Usage:
//!   cargo run -p levelgate-simtest
//!   cargo run -p levelgate-simtest -- --verbose --structural
//!   cargo run -p levelgate-simtest -- --schema path/to/levels.json --json

mod config;

use config::HarnessConfig;
use levelgate_logic::{LevelGraph, LevelId, LevelSchema, Progression, ProgressReport};
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

// ── Bundled schema (same JSON the tests use) ────────────────────────────
const SCHEMA_JSON: &str = include_str!("../../../data/level_schema.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("levelgate_logic=info,levelgate_simtest=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = HarnessConfig::from_args(std::env::args().skip(1));
    println!("=== LevelGate Harness ===\n");

    let mut results = Vec::new();

    // 1. Schema load + construction
    let graph = match load_graph(&config, &mut results) {
        Some(g) => g,
        None => finish(&results, config.verbose),
    };

    // 2. Completion derivation
    results.extend(validate_completion(&graph, config.verbose));

    // 3. Accessibility in both progression modes
    results.extend(validate_accessibility(&graph, config.verbose));

    // 4. Lookup tolerance
    results.extend(validate_lookups(&graph, config.verbose));

    // 5. Construction rejects empty schemas
    results.extend(validate_rejection(config.verbose));

    // ── Report ──
    print_report(&graph.report(Progression::Actual), config.json);
    if config.structural {
        print_report(&graph.report(Progression::Structural), config.json);
    }

    finish(&results, config.verbose);
}

fn finish(results: &[TestResult], verbose: bool) -> ! {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    std::process::exit(if failed > 0 { 1 } else { 0 });
}

fn print_report(report: &ProgressReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{}", text),
            Err(e) => log::error!("Could not serialize report: {}", e),
        }
        return;
    }
    let names = |list: &[levelgate_logic::LevelSummary]| {
        list.iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\n--- Report ({:?}) ---", report.progression);
    println!("  completed:    {}", names(&report.completed));
    println!("  accessible:   {}", names(&report.accessible));
    println!("  inaccessible: {}", names(&report.inaccessible));
    println!(
        "  reach:        {:.0}%",
        report.accessible_fraction() * 100.0
    );
}

// ── 1. Schema ───────────────────────────────────────────────────────────

fn load_graph(config: &HarnessConfig, results: &mut Vec<TestResult>) -> Option<LevelGraph> {
    println!("--- Schema ---");

    let text = match &config.schema_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                results.push(TestResult {
                    name: "schema_read".into(),
                    passed: false,
                    detail: format!("{}: {}", path.display(), e),
                });
                return None;
            }
        },
        None => SCHEMA_JSON.to_string(),
    };

    let schema: LevelSchema = match serde_json::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "schema_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return None;
        }
    };
    results.push(TestResult {
        name: "schema_parse".into(),
        passed: true,
        detail: format!(
            "{} levels, {} completion records",
            schema.levels.len(),
            schema.completion_records.len()
        ),
    });

    match LevelGraph::new(schema) {
        Ok(graph) => {
            log::info!("Loaded {} levels", graph.valid_levels().len());
            results.push(TestResult {
                name: "graph_construct".into(),
                passed: true,
                detail: format!("{} distinct levels", graph.valid_levels().len()),
            });
            Some(graph)
        }
        Err(e) => {
            results.push(TestResult {
                name: "graph_construct".into(),
                passed: false,
                detail: e.to_string(),
            });
            None
        }
    }
}

// ── 2. Completion ───────────────────────────────────────────────────────

fn validate_completion(graph: &LevelGraph, verbose: bool) -> Vec<TestResult> {
    println!("--- Completion ---");
    let mut results = Vec::new();
    let completed = graph.completed();

    results.push(TestResult {
        name: "completed_known".into(),
        passed: completed.iter().all(|id| graph.valid_levels().contains(id)),
        detail: format!("{} completed levels all in catalog", completed.len()),
    });

    let unique: HashSet<&LevelId> = completed.iter().collect();
    results.push(TestResult {
        name: "completed_unique".into(),
        passed: unique.len() == completed.len(),
        detail: "no level listed twice".into(),
    });

    let catalog: Vec<LevelId> = graph.valid_levels().iter().cloned().collect();
    let filtered = graph.filter_completed_levels(&catalog);
    results.push(TestResult {
        name: "filter_completed".into(),
        passed: filtered.len() == completed.len(),
        detail: format!("{} of catalog completed", filtered.len()),
    });

    if verbose {
        println!("  completed: {:?}", graph.completed_names());
    }
    results
}

// ── 3. Accessibility ────────────────────────────────────────────────────

fn validate_accessibility(graph: &LevelGraph, verbose: bool) -> Vec<TestResult> {
    println!("--- Accessibility ---");
    let mut results = Vec::new();
    let total = graph.valid_levels().len();

    for progression in [Progression::Actual, Progression::Structural] {
        let tag = format!("{:?}", progression).to_lowercase();
        let accessible = graph.accessible_with(progression);
        let inaccessible = graph.inaccessible_with(progression);

        let unique: HashSet<&LevelId> = accessible.iter().collect();
        results.push(TestResult {
            name: format!("{}_no_duplicates", tag),
            passed: unique.len() == accessible.len(),
            detail: format!("{} accessible", accessible.len()),
        });

        let disjoint = inaccessible.iter().all(|id| !unique.contains(id));
        results.push(TestResult {
            name: format!("{}_partition", tag),
            passed: disjoint && accessible.len() + inaccessible.len() == total,
            detail: format!(
                "{} + {} = {} levels",
                accessible.len(),
                inaccessible.len(),
                total
            ),
        });

        results.push(TestResult {
            name: format!("{}_idempotent", tag),
            passed: graph.accessible_with(progression) == accessible,
            detail: "repeat query matches".into(),
        });

        if verbose {
            println!(
                "  {} accessible: {:?}",
                tag,
                graph.accessible_names_with(progression)
            );
        }
    }

    let structural: HashSet<LevelId> = graph
        .accessible_with(Progression::Structural)
        .into_iter()
        .collect();
    let gated = graph.accessible();
    results.push(TestResult {
        name: "structural_superset".into(),
        passed: gated.iter().all(|id| structural.contains(id)),
        detail: format!("{} gated ⊆ {} structural", gated.len(), structural.len()),
    });

    results
}

// ── 4. Lookups ──────────────────────────────────────────────────────────

fn validate_lookups(graph: &LevelGraph, _verbose: bool) -> Vec<TestResult> {
    println!("--- Lookups ---");
    let mut results = Vec::new();

    let foreign = LevelId::new("__not_a_level__");
    let mut probe: Vec<LevelId> = graph.levels().iter().map(|l| l.id.clone()).collect();
    probe.insert(0, foreign.clone());

    let filtered = graph.filter_valid_levels(&probe);
    results.push(TestResult {
        name: "filter_valid_drops_foreign".into(),
        passed: !filtered.contains(&foreign) && filtered.len() == probe.len() - 1,
        detail: format!("{} → {} ids", probe.len(), filtered.len()),
    });

    let names = graph.names(&probe);
    results.push(TestResult {
        name: "names_positional".into(),
        passed: names.len() == probe.len() && names[0].is_empty(),
        detail: "unknown id → empty name".into(),
    });

    results.push(TestResult {
        name: "level_index_miss".into(),
        passed: graph.level_index(&foreign).is_none(),
        detail: "unknown id → no position".into(),
    });

    results
}

// ── 5. Rejection ────────────────────────────────────────────────────────

fn validate_rejection(_verbose: bool) -> Vec<TestResult> {
    println!("--- Rejection ---");
    let mut results = Vec::new();

    let cases = [
        ("reject_empty_object", "{}"),
        ("reject_empty_levels", r#"{"levels":[]}"#),
    ];
    for (name, json) in cases {
        let rejected = match serde_json::from_str::<LevelSchema>(json) {
            Ok(schema) => LevelGraph::new(schema).is_err(),
            Err(_) => false,
        };
        results.push(TestResult {
            name: name.into(),
            passed: rejected,
            detail: format!("{} → construction error", json),
        });
    }

    results
}
