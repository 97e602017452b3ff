use capgraph::graph::{BoundedGraph, GraphBuilder, NaturalPolicy, NullDiagnostics};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use petgraph::graph::DiGraph;
use petgraph::visit::{Bfs, Dfs};

type Graph = BoundedGraph<usize, NaturalPolicy, NullDiagnostics>;

fn chain(size: usize) -> Graph {
    let mut graph = GraphBuilder::new("bench", size)
        .diagnostics(NullDiagnostics)
        .build()
        .unwrap();
    for i in 0..size - 1 {
        graph.add_edge(i, i + 1).unwrap();
    }
    graph
}

fn tree(size: usize) -> Graph {
    let mut graph = GraphBuilder::new("bench", size)
        .diagnostics(NullDiagnostics)
        .build()
        .unwrap();
    graph.add_vertex(0).unwrap();
    for i in 1..size {
        graph.add_edge((i - 1) / 2, i).unwrap();
    }
    graph
}

fn bench_graph_sparse_remove(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("bounded_graph_sparse_remove", |b| {
        b.iter(|| {
            let mut graph = chain(size);
            // Remove middle vertex; the tail moves into its slot.
            black_box(graph.delete_vertex(&(size / 2)).unwrap());
        });
    });

    c.bench_function("petgraph_sparse_remove", |b| {
        b.iter(|| {
            let mut graph = DiGraph::<usize, ()>::with_capacity(size, size);
            let nodes: Vec<_> = (0..size).map(|i| graph.add_node(i)).collect();
            for i in 0..size - 1 {
                graph.add_edge(nodes[i], nodes[i + 1], ());
            }
            black_box(graph.remove_node(nodes[size / 2]));
        });
    });
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 256;

    // Every insert scans the table, so construction is quadratic.
    c.bench_function("bounded_graph_build_sym", |b| {
        b.iter(|| {
            let mut graph: Graph = GraphBuilder::new("bench", size)
                .diagnostics(NullDiagnostics)
                .build()
                .unwrap();
            for i in 0..size - 1 {
                graph.add_edge_sym(i, i + 1).unwrap();
            }
            black_box(graph.edge_count())
        });
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let size = 1000;
    let graph = tree(size);

    c.bench_function("bounded_graph_bfs", |b| {
        b.iter(|| black_box(graph.bfs(&0).unwrap().reached()));
    });

    c.bench_function("bounded_graph_dfs", |b| {
        b.iter(|| black_box(graph.dfs(&0).unwrap().reached()));
    });

    let mut reference = DiGraph::<usize, ()>::with_capacity(size, size);
    let nodes: Vec<_> = (0..size).map(|i| reference.add_node(i)).collect();
    for i in 1..size {
        reference.add_edge(nodes[(i - 1) / 2], nodes[i], ());
    }

    c.bench_function("petgraph_bfs", |b| {
        b.iter(|| {
            let mut bfs = Bfs::new(&reference, nodes[0]);
            let mut reached = 0;
            while bfs.next(&reference).is_some() {
                reached += 1;
            }
            black_box(reached)
        });
    });

    c.bench_function("petgraph_dfs", |b| {
        b.iter(|| {
            let mut dfs = Dfs::new(&reference, nodes[0]);
            let mut reached = 0;
            while dfs.next(&reference).is_some() {
                reached += 1;
            }
            black_box(reached)
        });
    });
}

criterion_group!(
    benches,
    bench_graph_sparse_remove,
    bench_graph_build,
    bench_graph_traversal
);
criterion_main!(benches);
