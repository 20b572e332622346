use engine::{GameSession, GameState, Piece, PieceColor, PieceType, Position, SilentListener};

#[test]
fn render_snapshot_serializes() {
    let mut session = GameSession::new(SilentListener);
    session.on_square_tapped(6, 4).unwrap();

    let json = serde_json::json!({
        "grid": session.grid(),
        "selected": session.selected(),
        "destinations": session.legal_destinations(),
        "state": session.state(),
        "status": session.status(),
    });

    assert_eq!(json["grid"][7][4], serde_json::json!({ "kind": "King", "color": "White" }));
    assert!(json["grid"][4][4].is_null());
    assert_eq!(json["selected"], serde_json::json!({ "row": 6, "col": 4 }));
    assert_eq!(json["destinations"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["state"], "Ongoing");
    assert_eq!(json["status"], "White to move");
}

#[test]
fn pieces_round_trip_through_json() {
    let piece = Piece::new(PieceType::Knight, PieceColor::Black);
    let text = serde_json::to_string(&piece).unwrap();
    assert_eq!(serde_json::from_str::<Piece>(&text).unwrap(), piece);

    let pos: Position = serde_json::from_str(r#"{"row":3,"col":5}"#).unwrap();
    assert_eq!(pos.to_algebraic().as_deref(), Some("f5"));

    assert!(serde_json::from_str::<Position>(r#"{"row":-1,"col":0}"#).is_err());
    assert!(serde_json::from_str::<Position>(r#"{"row":2,"col":8}"#).is_err());

    let state: GameState = serde_json::from_str(r#""Checkmate""#).unwrap();
    assert!(state.is_over());
}
