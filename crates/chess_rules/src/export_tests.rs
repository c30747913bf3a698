use super::*;

#[test]
fn test_standard_export() {
    let cells = export_board(&Board::standard(), &ExportConfig::default());
    assert_eq!(cells.len(), 64);
    // a8 first, h1 last
    assert_eq!(cells[0], "black-r");
    assert_eq!(cells[4], "black-k");
    assert_eq!(cells[8], "black-p");
    assert_eq!(cells[16], "");
    assert_eq!(cells[48], "white-p");
    assert_eq!(cells[59], "white-q");
    assert_eq!(cells[63], "white-r");
    assert_eq!(cells.iter().filter(|c| c.is_empty()).count(), 32);
}

#[test]
fn test_export_follows_config() {
    let config = ExportConfig {
        empty_marker: "_".to_string(),
        separator: ":".to_string(),
    };
    let cells = export_board(&Board::standard(), &config);
    assert_eq!(cells[1], "black:n");
    assert_eq!(cells[30], "_");
}

#[test]
fn test_board_symbols() {
    let symbols: String = board_symbols(&Board::standard()).into_iter().collect();
    assert_eq!(&symbols[..8], "RNBQKBNR");
    assert_eq!(&symbols[8..16], "PPPPPPPP");
    assert_eq!(&symbols[16..48], ".".repeat(32));
    assert_eq!(&symbols[48..56], "pppppppp");
    assert_eq!(&symbols[56..], "rnbqkbnr");
}
