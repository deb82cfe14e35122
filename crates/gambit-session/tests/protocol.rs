use gambit_session::{GameServer, SessionConfig};

fn run(server: &mut GameServer, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    server.run(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn fools_mate_over_the_wire() {
    let mut server = GameServer::new();
    let lines = run(
        &mut server,
        "move g f2 f3\n\
         move g e7 e5\n\
         move g g2 g4\n\
         move g d8 h4\n\
         move g a2 a3\n\
         board g\n",
    );
    assert_eq!(lines[0], "ok normal black");
    assert_eq!(lines[1], "ok normal white");
    assert_eq!(lines[2], "ok normal black");
    assert_eq!(lines[3], "ok checkmate white");
    assert_eq!(lines[4], "error game-over: the game is already over");
    assert_eq!(lines[5], "turn white");
    assert_eq!(lines[6], "status checkmate black");
    assert_eq!(lines[7], "rnb.kbnr");
    assert_eq!(lines[11], "......Pq");
}

#[test]
fn games_do_not_share_state() {
    let mut server = GameServer::new();
    let lines = run(&mut server, "move a e2 e4\nmove b e7 e5\nmove b 6,3 4,3\n");
    assert_eq!(lines[0], "ok normal black");
    assert_eq!(lines[1], "error wrong-turn: it is not black's turn");
    assert_eq!(lines[2], "ok normal black");
    assert_eq!(server.store().len(), 2);
}

#[test]
fn check_then_block() {
    let mut server = GameServer::new();
    let lines = run(
        &mut server,
        "move g e2 e4\n\
         move g f7 f6\n\
         move g d1 h5\n\
         steps g e8\n\
         move g e8 f7\n\
         move g g7 g6\n",
    );
    assert_eq!(lines[2], "ok check black");
    // The king has no legal step; only the g-pawn block answers the check.
    assert_eq!(lines[3], "steps");
    assert_eq!(lines[4], "error illegal-move: illegal move e8f7");
    assert_eq!(lines[5], "ok normal white");
}

#[test]
fn configured_limit_applies_from_start() {
    let mut server = GameServer::with_config(SessionConfig {
        default_session: "main".to_string(),
        max_sessions: 1,
    });
    let lines = run(&mut server, "board\nnew spare\n");
    assert_eq!(lines[0], "turn white");
    assert_eq!(lines[10], "error too-many-sessions: session limit of 1 reached");
    assert!(server.store().contains("main"));
}
