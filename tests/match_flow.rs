//! End-to-end match behavior through the public API

use gomoku::{
    console, record, BoardSize, Forbidden, Match, MatchStatus, MoveError, Pos, RecordError,
    ResumeError, Ruleset, Stone, Verdict,
};

fn play(game: &mut Match, moves: &[&str]) {
    for mv in moves {
        game.place_notation(mv).unwrap();
    }
}

/// Fill every cell without ever making five: runs of two alternate in
/// every row, shifted by one column per row.
fn draw_order(size: BoardSize) -> Vec<Pos> {
    let n = size.get() as u8;
    let color = |c: u8, r: u8| ((c as usize + 2 * r as usize) / 2) % 2 == 0;
    let black: Vec<Pos> = (0..n)
        .flat_map(|r| (0..n).map(move |c| Pos::new(c, r)))
        .filter(|p| color(p.col, p.row))
        .collect();
    let white: Vec<Pos> = (0..n)
        .flat_map(|r| (0..n).map(move |c| Pos::new(c, r)))
        .filter(|p| !color(p.col, p.row))
        .collect();

    let mut order = Vec::with_capacity(size.cells());
    let mut b = black.into_iter();
    let mut w = white.into_iter();
    loop {
        match (b.next(), w.next()) {
            (None, None) => break,
            (bp, wp) => order.extend(bp.into_iter().chain(wp)),
        }
    }
    order
}

#[test]
fn identical_moves_give_identical_results() {
    let moves = ["H8", "H9", "I8", "I9", "J8", "J9", "K8", "K9", "L8"];
    let mut first = Match::new(BoardSize::Seventeen, Ruleset::Renju);
    let mut second = Match::new(BoardSize::Seventeen, Ruleset::Renju);
    play(&mut first, &moves);
    play(&mut second, &moves);

    assert_eq!(first.status(), second.status());
    assert_eq!(first.winner(), second.winner());
    assert_eq!(first.board(), second.board());
    assert_eq!(first.winner(), Stone::Black);
}

#[test]
fn rejected_moves_leave_no_trace() {
    let mut game = Match::new(BoardSize::Fifteen, Ruleset::Freestyle);
    play(&mut game, &["H8"]);
    let before = game.board().clone();

    assert!(game.place_notation("H8").is_err());
    assert!(game.place_notation("P1").is_err());
    assert_eq!(
        game.place(Pos::new(17, 0)),
        Err(MoveError::OffBoard(Pos::new(17, 0)))
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.moves().len(), 1);
    assert_eq!(game.current_turn(), Stone::White);
}

#[test]
fn full_board_is_a_draw() {
    for ruleset in [Ruleset::Freestyle, Ruleset::Renju] {
        let mut game = Match::new(BoardSize::Fifteen, ruleset);
        let order = draw_order(BoardSize::Fifteen);
        let (last, rest) = order.split_last().unwrap();
        for &pos in rest {
            assert_eq!(game.place(pos).unwrap(), Verdict::Continue, "{ruleset} at {pos}");
        }
        assert_eq!(game.place(*last).unwrap(), Verdict::Draw);
        assert_eq!(game.status(), MatchStatus::Finished);
        assert_eq!(game.winner(), Stone::Empty);
        assert_eq!(console::outcome_message(&game), Some("Game concluded, the board is full, draw."));
    }
}

#[test]
fn renju_overline_hands_white_the_win() {
    let mut game = Match::new(BoardSize::Fifteen, Ruleset::Renju);
    // Black: A8 B8 C8 E8 F8, White far away, then Black fills D8
    play(&mut game, &["A8", "O1", "B8", "O3", "C8", "O5", "E8", "M1", "F8", "M3"]);
    let verdict = game.place_notation("D8").unwrap();

    assert_eq!(verdict, Verdict::Forbidden(Forbidden::Overline));
    assert_eq!(game.status(), MatchStatus::Forbidden);
    assert_eq!(game.winner(), Stone::White);
    assert!(game.winning_line().is_none());
}

#[test]
fn freestyle_overline_wins() {
    let mut game = Match::new(BoardSize::Fifteen, Ruleset::Freestyle);
    play(&mut game, &["A8", "O1", "B8", "O3", "C8", "O5", "E8", "M1", "F8", "M3"]);
    game.place_notation("D8").unwrap();

    assert_eq!(game.status(), MatchStatus::Finished);
    assert_eq!(game.winner(), Stone::Black);
    assert_eq!(game.winning_line().map(<[Pos]>::len), Some(6));
}

#[test]
fn replay_matches_original() {
    let mut game = Match::new(BoardSize::Nineteen, Ruleset::Renju);
    play(&mut game, &["K10", "K11", "L10", "L11", "M10", "M11", "N10", "N11", "O10"]);

    let mut replay = game.replay();
    let mut last = None;
    while let Some(step) = replay.step() {
        last = Some(step.unwrap());
    }
    assert!(matches!(last, Some(Verdict::Win { winner: Stone::Black, .. })));
    assert_eq!(replay.game().status(), game.status());
    assert_eq!(replay.game().winner(), game.winner());
    assert_eq!(replay.game().moves(), game.moves());
}

#[test]
fn save_resume_and_finish() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stopped.gmk");

    let mut game = Match::new(BoardSize::Fifteen, Ruleset::Freestyle);
    let mut out = Vec::new();
    console::run(&mut game, "A1 A2 B1 B2 C1\n".as_bytes(), &mut out).unwrap();
    assert_eq!(game.status(), MatchStatus::Stopped);
    record::save(&path, &game.to_record()).unwrap();

    let mut resumed = Match::from_record(&record::load(&path).unwrap()).unwrap();
    resumed.resume().unwrap();
    assert_eq!(resumed.current_turn(), Stone::White);

    let mut out = Vec::new();
    console::run(&mut resumed, "C2 D1 D2 E1\n".as_bytes(), &mut out).unwrap();
    assert_eq!(resumed.status(), MatchStatus::Finished);
    assert_eq!(resumed.winner(), Stone::Black);
    assert!(String::from_utf8(out).unwrap().ends_with("Game concluded, black won.\n"));
}

#[test]
fn finished_record_cannot_resume() {
    let mut game = Match::new(BoardSize::Fifteen, Ruleset::Freestyle);
    play(&mut game, &["A1", "A2", "B1", "B2", "C1", "C2", "D1", "D2", "E1"]);
    let text = record::encode(&game.to_record());

    let mut restored = Match::from_record(&record::decode(&text).unwrap()).unwrap();
    assert_eq!(restored.status(), MatchStatus::Finished);
    assert!(restored.resume().is_err());
}

#[test]
fn forbidden_record_cannot_resume() {
    let mut game = Match::new(BoardSize::Fifteen, Ruleset::Renju);
    play(
        &mut game,
        &["E8", "A1", "F8", "A3", "G8", "A5", "H11", "O1", "H10", "O3", "H9", "O5", "H8"],
    );
    assert_eq!(game.status(), MatchStatus::Forbidden);

    let text = record::encode(&game.to_record());
    assert!(text.starts_with("GA\n15\n1\n1\n2\n"));

    let mut restored = Match::from_record(&record::decode(&text).unwrap()).unwrap();
    assert_eq!(restored.status(), MatchStatus::Forbidden);
    assert_eq!(restored.winner(), Stone::White);
    assert_eq!(restored.forbidden(), Some(Forbidden::DoubleFour));
    assert_eq!(
        restored.resume(),
        Err(ResumeError::NotStopped(MatchStatus::Forbidden))
    );
    assert_eq!(restored.status(), MatchStatus::Forbidden);
}

#[test]
fn tampered_record_is_rejected() {
    // Stored as stopped, but the moves already contain a black five
    let text = "GA\n15\n0\n2\n0\nA1 A2 B1 B2 C1 C2 D1 D2 E1\n";
    let saved = record::decode(text).unwrap();
    assert!(matches!(
        Match::from_record(&saved),
        Err(RecordError::Mismatch {
            stored: MatchStatus::Stopped,
            replayed: MatchStatus::Finished
        })
    ));
}
