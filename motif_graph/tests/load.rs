use std::io::Write;

use motif_graph::{GraphError, load_edge_list, load_query_graph};

#[test]
fn query_graph_is_labeled_with_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triangle.edges");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "a b\nb c\nc a").unwrap();

    let query = load_query_graph(&path).unwrap();
    assert_eq!(query.label(), "triangle");
    assert!(query.is_complete());
    assert_eq!(query.edge_count(), 3);
}

#[test]
fn load_reports_line_of_self_loop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.edges");
    std::fs::write(&path, "a b\n# comment\nc c\n").unwrap();

    let err = load_edge_list(&path).unwrap_err();
    assert!(matches!(err, GraphError::Line { line: 3, .. }));
    assert!(err.to_string().contains("self-loop"));
}
