use rand::Rng;

use crate::model::*;

// 表示確認・プレースホルダ用のランダムデータ生成

// 一様ランダムな牌 (字牌は0~6, 数牌は1~9)
pub fn random_piece(rng: &mut impl Rng) -> Piece {
    let suit = [Suit::Man, Suit::Pin, Suit::Sou, Suit::Honor][rng.gen_range(0..4)];
    match suit {
        Suit::Honor => Piece::new(suit, rng.gen_range(0..HONORS as Rank)),
        _ => Piece::new(suit, rng.gen_range(1..=RANKS as Rank)),
    }
}

pub fn random_pieces(rng: &mut impl Rng, n: usize) -> Vec<Piece> {
    (0..n).map(|_| random_piece(rng)).collect()
}

// ランダムな局面 手牌13枚は整列, 捨て牌は0~18枚
pub fn random_stage(rng: &mut impl Rng) -> Stage {
    let n_doras = rng.gen_range(1..=2);
    let mut stage = Stage {
        round: Seat::East,
        dealer: SEATS[rng.gen_range(0..SEAT)],
        honba_sticks: rng.gen_range(0..3),
        riichi_sticks: rng.gen_range(0..2),
        wall_count: rng.gen_range(14..70),
        doras: random_pieces(rng, n_doras),
        ..Stage::default()
    };
    for (i, &s) in SEATS.iter().enumerate() {
        let n_discards = rng.gen_range(0..19);
        let p = stage.player_mut(s);
        p.username = format!("Player{}", i + 1);
        p.points = 25000;
        p.hand = random_pieces(rng, 13);
        p.hand.sort();
        p.discards = random_pieces(rng, n_discards);
    }
    stage
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    #[test]
    fn random_pieces_are_valid() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(1);
        for piece in random_pieces(&mut rng, 1000) {
            assert!(piece.is_valid(), "invalid piece: {}", piece);
            assert!(!piece.is_red);
            assert!(!piece.face_down);
        }
    }

    #[test]
    fn random_stage_is_populated() {
        let mut rng: StdRng = SeedableRng::seed_from_u64(2);
        let stage = random_stage(&mut rng);
        for &s in &SEATS {
            let p = stage.player(s);
            assert_eq!(p.hand.len(), 13);
            assert!(p.discards.len() < 19);
            assert!(!p.username.is_empty());
        }
        assert!(matches!(stage.doras.len(), 1..=2));
    }
}
