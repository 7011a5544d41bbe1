//! Word and self-loop queries over vertex graphs.

use std::io::Write;

use graphwalk_core::{
    longest_word, print_self_loopers, print_short_words, Dedup, LineSink, TraversalConfig,
    VertexGraph, VertexId, Walker,
};

use crate::helpers::{init_tracing, walkers, word_graph};

/// cat -> elephant -> cat, closing back on the first cat.
fn cat_cycle() -> anyhow::Result<(VertexGraph<String>, VertexId)> {
    let (graph, ids) = word_graph(&["cat", "elephant", "cat"], &[(0, 1), (1, 2), (2, 0)])?;
    Ok((graph, ids[0]))
}

#[test]
fn test_cat_cycle_longest_word() -> anyhow::Result<()> {
    init_tracing();
    let (graph, a) = cat_cycle()?;

    assert_eq!(longest_word(&graph, Some(a)), "elephant");
    for walker in walkers(Dedup::Label) {
        assert_eq!(walker.longest_word(&graph, Some(a)), "elephant");
    }
    Ok(())
}

#[test]
fn test_cat_cycle_identity_emits_each_vertex() -> anyhow::Result<()> {
    init_tracing();
    let (graph, a) = cat_cycle()?;

    for walker in walkers(Dedup::Identity) {
        let mut short: Vec<String> = Vec::new();
        walker.print_short_words(&graph, Some(a), 4, &mut short)?;
        assert_eq!(short, ["cat", "cat"]);
    }
    Ok(())
}

#[test]
fn test_cat_cycle_label_dedup_emits_once() -> anyhow::Result<()> {
    init_tracing();
    let (graph, a) = cat_cycle()?;

    for walker in walkers(Dedup::Label) {
        let mut short: Vec<String> = Vec::new();
        walker.print_short_words(&graph, Some(a), 4, &mut short)?;
        assert_eq!(short, ["cat"]);
    }
    Ok(())
}

#[test]
fn test_short_words_to_line_sink() -> anyhow::Result<()> {
    init_tracing();
    let (graph, ids) = word_graph(
        &["go", "rust", "c", "zig", "haskell"],
        &[(0, 1), (0, 2), (1, 3), (2, 4), (4, 0)],
    )?;

    let mut sink = LineSink::new(Vec::new());
    print_short_words(&graph, Some(ids[0]), 4, &mut sink)?;
    assert_eq!(sink.lines(), 3);

    let mut expected = Vec::new();
    writeln!(expected, "go")?;
    writeln!(expected, "zig")?;
    writeln!(expected, "c")?;
    assert_eq!(sink.into_inner(), expected);
    Ok(())
}

#[test]
fn test_self_loopers_only_reachable_ones() -> anyhow::Result<()> {
    init_tracing();
    // 0 -> 1 -> 1, 1 -> 2, 2 -> 0; 3 loops on itself but is unreachable.
    let (graph, ids) = word_graph(
        &["root", "spin", "tail", "island"],
        &[(0, 1), (1, 1), (1, 2), (2, 0), (3, 3)],
    )?;

    let mut loopers: Vec<String> = Vec::new();
    print_self_loopers(&graph, Some(ids[0]), &mut loopers)?;
    assert_eq!(loopers, ["spin"]);

    let mut from_island: Vec<String> = Vec::new();
    print_self_loopers(&graph, Some(ids[3]), &mut from_island)?;
    assert_eq!(from_island, ["island"]);
    Ok(())
}

#[test]
fn test_walker_from_config_file() -> anyhow::Result<()> {
    init_tracing();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("graphwalk.toml");
    std::fs::write(&path, "strategy = \"recursive\"\ndedup = \"label\"\n")?;

    let walker = Walker::new(TraversalConfig::load_from(&path)?);
    let (graph, a) = cat_cycle()?;

    let mut short: Vec<String> = Vec::new();
    walker.print_short_words(&graph, Some(a), 4, &mut short)?;
    assert_eq!(short, ["cat"]);
    Ok(())
}
