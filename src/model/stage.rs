use super::*;
use crate::util::misc::vec_to_string;

// 卓全体の表示モデル
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub round: Seat,             // 場風
    pub dealer: Seat,            // 親の座席
    pub honba_sticks: usize,     // 本場
    pub riichi_sticks: usize,    // リーチ棒の供託
    pub wall_count: usize,       // 牌山の残り枚数
    pub doras: Vec<Piece>,       // ドラ表示牌
    pub players: [Player; SEAT], // 各プレイヤー情報
}

impl Stage {
    #[inline]
    pub fn is_dealer(&self, seat: Seat) -> bool {
        seat == self.dealer
    }

    // 場風牌
    #[inline]
    pub fn prevalent_wind(&self) -> Piece {
        self.round.tile()
    }

    // 座席の自風 親が東, 以降は手番順
    pub fn seat_wind(&self, seat: Seat) -> Seat {
        let mut wind = Seat::East;
        let mut s = self.dealer;
        while s != seat {
            s = s.next();
            wind = wind.next();
        }
        wind
    }

    #[inline]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    // ドラ表示枠 未公開の枠は裏向きで埋める
    pub fn dora_indicators(&self, max: usize) -> Vec<Piece> {
        let mut v = self.doras.clone();
        while v.len() < max {
            v.push(BACK);
        }
        v
    }

    #[inline]
    pub fn layout(&self, perspective: Seat) -> SeatLayout {
        SeatLayout::of(perspective)
    }

    // 卓上の全ての牌が有効な34種に入っているか検査
    // デシリアライズは数字部分の範囲を確認しないため, 外部入力はここを通すこと
    pub fn validate(&self) -> Result<(), InvalidTileCode> {
        let players = self
            .players
            .iter()
            .flat_map(|p| p.hand.iter().chain(p.discards.iter()));
        for &piece in self.doras.iter().chain(players) {
            if !piece.is_valid() {
                return Err(InvalidTileCode(format!("{:?}{}", piece.suit, piece.rank)));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "round: {}, dealer: {}, honba_sticks: {}, riichi_sticks: {}",
            self.round, self.dealer, self.honba_sticks, self.riichi_sticks,
        )?;
        writeln!(
            f,
            "wall_count: {}, doras: {}",
            self.wall_count,
            vec_to_string(&self.dora_indicators(MAX_DORA_INDICATORS)),
        )?;

        let border = "-".repeat(80);
        write!(f, "{}", border)?;
        for &s in &SEATS {
            writeln!(f)?;
            writeln!(f, "[{} / {}] {}", s, self.seat_wind(s).tile(), self.player(s))?;
            write!(f, "{}", border)?;
        }
        Ok(())
    }
}
