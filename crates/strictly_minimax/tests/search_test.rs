//! Search engine tests over concrete scenarios and every reachable board.

use std::collections::{HashMap, HashSet, VecDeque};
use std::io::Write as _;
use strictly_minimax::{
    Algorithm, NEG_INFINITY, POS_INFINITY, SearchConfig, Searcher, best_move, minimax_value, value,
};
use strictly_tictactoe::{Board, Outcome, Player, Position, Score};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_test_writer()
        .try_init();
}

fn board(text: &str) -> Board {
    text.parse().expect("valid board")
}

/// Every board reachable from the empty board by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([Board::new()]);

    while let Some(board) = queue.pop_front() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        if !board.is_terminal() {
            queue.extend(board.successors().map(|(_, child)| child));
        }
    }

    order
}

/// Unpruned minimax, memoized so the whole tree can be checked quickly.
fn reference_value(board: &Board, memo: &mut HashMap<Board, Score>) -> Score {
    if let Some(&known) = memo.get(board) {
        return known;
    }
    let result = match board.active_player() {
        Some(player) if !board.is_terminal() => {
            let scores = board
                .legal_moves()
                .into_iter()
                .map(|pos| reference_value(&board.apply(pos).expect("legal move"), memo));
            match player {
                Player::X => scores.max().expect("non-terminal board has moves"),
                Player::O => scores.min().expect("non-terminal board has moves"),
            }
        }
        _ => board.utility(),
    };
    memo.insert(*board, result);
    result
}

#[test]
fn test_pruned_value_matches_exhaustive_minimax() {
    init_tracing();
    let mut memo = HashMap::new();
    let mut searcher = Searcher::default();

    for board in reachable_boards() {
        let expected = reference_value(&board, &mut memo);
        assert_eq!(
            searcher.value(&board, NEG_INFINITY, POS_INFINITY),
            expected,
            "\n{board}"
        );
    }
}

#[test]
fn test_exhaustive_algorithm_matches_reference() {
    let mut memo = HashMap::new();
    for board in reachable_boards()
        .into_iter()
        .filter(|b| b.occupied_count() >= 3)
    {
        assert_eq!(minimax_value(&board), reference_value(&board, &mut memo), "\n{board}");
    }
}

#[test]
fn test_game_value_is_draw() {
    assert_eq!(value(&Board::new(), NEG_INFINITY, POS_INFINITY), 0);
    assert_eq!(minimax_value(&Board::new()), 0);
}

#[test]
fn test_best_move_preserves_value() {
    let mut searcher = Searcher::default();
    for board in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
        let chosen = searcher.best_move(&board).expect("non-terminal board has a move");
        assert!(board.is_empty(chosen));

        let before = searcher.value(&board, NEG_INFINITY, POS_INFINITY);
        let after = searcher.value(&board.apply(chosen).unwrap(), NEG_INFINITY, POS_INFINITY);
        assert_eq!(before, after, "best move {chosen} on\n{board}");
    }
}

#[test]
fn test_best_move_is_first_of_equal_scores() {
    let mut searcher = Searcher::default();
    for board in reachable_boards()
        .into_iter()
        .filter(|b| !b.is_terminal() && b.occupied_count() >= 2)
    {
        let scores = searcher.score_moves(&board);
        let target = match board.active_player() {
            Some(Player::X) => scores.iter().map(|m| m.score).max(),
            _ => scores.iter().map(|m| m.score).min(),
        };
        let first = scores.iter().find(|m| Some(m.score) == target).map(|m| m.position);
        assert_eq!(searcher.best_move(&board), first, "\n{board}");
    }
}

#[test]
fn test_self_play_from_empty_board_draws() -> anyhow::Result<()> {
    init_tracing();
    let played = Searcher::default().play_out(&Board::new())?;
    assert_eq!(played.outcome(), &Outcome::Draw);
    assert_eq!(played.moves().len(), 9);
    assert_eq!(played.board().utility(), 0);
    Ok(())
}

#[test]
fn test_self_play_realizes_value() -> anyhow::Result<()> {
    let mut searcher = Searcher::default();
    for board in reachable_boards().into_iter().filter(|b| b.occupied_count() >= 2) {
        let expected = searcher.value(&board, NEG_INFINITY, POS_INFINITY);
        let played = searcher.play_out(&board)?;
        assert_eq!(played.board().utility(), expected, "\n{board}");
    }
    Ok(())
}

#[test]
fn test_completes_top_row() {
    // X holds (0,0) and (0,1); O holds (1,1) and (2,2), so X is to move.
    let board = board("XX. .O. ..O");
    assert_eq!(board.active_player(), Some(Player::X));

    let chosen = best_move(&board);
    assert_eq!(chosen, Some(Position::TopRight));
    assert_eq!(chosen.map(Position::coords), Some((0, 2)));

    let after = board.apply(Position::TopRight).unwrap();
    assert_eq!(value(&after, NEG_INFINITY, POS_INFINITY), 1);
}

#[test]
fn test_blocks_top_row_with_o_to_move() {
    // Only three marks down, so O moves and must take (0,2).
    let board = board("XX. .O. ...");
    assert_eq!(board.active_player(), Some(Player::O));

    let scores = Searcher::default().score_moves(&board);
    for scored in &scores {
        let expected = if scored.position == Position::TopRight { 0 } else { 1 };
        assert_eq!(scored.score, expected, "{}", scored.position);
    }
    assert_eq!(best_move(&board), Some(Position::TopRight));
}

#[test]
fn test_blocks_middle_row() {
    // O threatens the middle row; X has no immediate win.
    let board = board("X.. OO. ..X");
    assert_eq!(board.active_player(), Some(Player::X));

    let scores = Searcher::default().score_moves(&board);
    for scored in scores.iter().filter(|m| m.position != Position::MiddleRight) {
        assert_eq!(scored.score, -1, "{}", scored.position);
    }
    assert_eq!(best_move(&board), Some(Position::MiddleRight));
}

#[test]
fn test_both_algorithms_agree_on_late_boards() {
    let searchers: Vec<Searcher> = Algorithm::iter()
        .map(|algorithm| Searcher::new(SearchConfig::new(algorithm)))
        .collect();

    for board in reachable_boards()
        .into_iter()
        .filter(|b| b.occupied_count() >= 4)
    {
        let choices: Vec<Option<Position>> = searchers
            .iter()
            .cloned()
            .map(|mut searcher| searcher.best_move(&board))
            .collect();
        assert!(choices.windows(2).all(|w| w[0] == w[1]), "\n{board}");
    }
}

#[test]
fn test_config_file_selects_algorithm() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"algorithm = "minimax""#)?;

    let config = SearchConfig::from_file(file.path())?;
    assert_eq!(config.algorithm(), &Algorithm::Minimax);

    let mut searcher = Searcher::new(config);
    assert_eq!(searcher.best_move(&board("XX. .O. ..O")), Some(Position::TopRight));
    assert_eq!(searcher.stats().cutoffs, 0);
    Ok(())
}

#[test]
fn test_missing_config_file_reports_location() {
    let err = SearchConfig::from_file("/nonexistent/strictly_minimax.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_play_out_serializes() -> anyhow::Result<()> {
    let played = Searcher::default().play_out(&board("XX. .O. ..O"))?;
    let json = serde_json::to_value(&played)?;
    assert_eq!(json["moves"], serde_json::json!(["TopRight"]));
    assert_eq!(json["outcome"], serde_json::json!({ "Winner": "X" }));
    Ok(())
}
