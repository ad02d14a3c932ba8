use rand::prelude::*;
use serde_json::json;

use mahjong_table::model::*;
use mahjong_table::util::sample;

#[test]
fn piece_json_shape() {
    let piece: Piece = "5m".parse().unwrap();
    assert_eq!(
        serde_json::to_value(&piece).unwrap(),
        json!({"suit": "Man", "rank": 5})
    );

    let red = Piece {
        is_red: true,
        ..("5p".parse().unwrap())
    };
    assert_eq!(
        serde_json::to_value(&red).unwrap(),
        json!({"suit": "Pin", "rank": 5, "isRed": true})
    );

    assert_eq!(
        serde_json::to_value(&BACK).unwrap(),
        json!({"suit": "Honor", "rank": 0, "faceDown": true})
    );
}

#[test]
fn piece_json_round_trip() {
    for piece in Piece::all() {
        let text = serde_json::to_string(&piece).unwrap();
        let back: Piece = serde_json::from_str(&text).unwrap();
        assert_eq!(back, piece);
    }

    let red: Piece = serde_json::from_value(json!({"suit": "Sou", "rank": 5, "isRed": true})).unwrap();
    assert!(red.is_red);
    assert!(!red.face_down);
}

#[test]
fn seat_serializes_as_name() {
    assert_eq!(serde_json::to_value(Seat::East).unwrap(), json!("East"));
    let seat: Seat = serde_json::from_value(json!("North")).unwrap();
    assert_eq!(seat, Seat::North);
}

#[test]
fn deserialized_stage_is_checkable() {
    // デシリアライズ自体は数字部分を検査しないので validate で弾く
    let player = json!({
        "username": "", "points": 0, "hand": [], "discards": [], "isShown": false
    });
    let value = json!({
        "round": "East",
        "dealer": "East",
        "honbaSticks": 0,
        "riichiSticks": 0,
        "wallCount": 70,
        "doras": [{"suit": "Honor", "rank": 9}],
        "players": [player.clone(), player.clone(), player.clone(), player],
    });
    let stage: Stage = serde_json::from_value(value).unwrap();
    assert!(stage.validate().is_err());
}

#[test]
fn stage_json_round_trip() {
    let mut rng: StdRng = SeedableRng::seed_from_u64(3);
    let stage = sample::random_stage(&mut rng);

    let value = serde_json::to_value(&stage).unwrap();
    assert!(value.get("wallCount").is_some());
    assert!(value.get("honbaSticks").is_some());

    let back: Stage = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(serde_json::to_value(&back).unwrap(), value);
}
