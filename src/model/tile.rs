use super::*;

// 牌の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Man,   // 萬子
    Pin,   // 筒子
    Sou,   // 索子
    Honor, // 字牌
}

// 字牌のコード表 indexがRankに対応 (牌画像の表示順)
pub const HONOR_CODES: [&str; HONORS] = ["red", "white", "green", "north", "south", "east", "west"];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_red: bool, // 赤ドラ
    #[serde(default, skip_serializing_if = "is_false")]
    pub face_down: bool, // 裏向き表示
}

// 裏向きの牌 (伏せ牌・未公開ドラ枠のプレースホルダ)
pub const BACK: Piece = Piece {
    suit: Suit::Honor,
    rank: DR,
    is_red: false,
    face_down: true,
};

impl Piece {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_red: false,
            face_down: false,
        }
    }

    // 字牌
    #[inline]
    pub fn is_honor(&self) -> bool {
        self.suit == Suit::Honor
    }

    // 数牌
    #[inline]
    pub fn is_numbered(&self) -> bool {
        self.suit != Suit::Honor
    }

    // 有効な34種に入っているか
    pub fn is_valid(&self) -> bool {
        match self.suit {
            Suit::Honor => (self.rank as usize) < HONORS,
            _ => 1 <= self.rank && self.rank as usize <= RANKS,
        }
    }

    // 34種の牌を表示順 (萬子, 筒子, 索子, 字牌) に列挙
    pub fn all() -> Vec<Piece> {
        let mut v = Vec::with_capacity(3 * RANKS + HONORS);
        for &suit in &[Suit::Man, Suit::Pin, Suit::Sou] {
            for rank in 1..=RANKS as Rank {
                v.push(Piece::new(suit, rank));
            }
        }
        for rank in 0..HONORS as Rank {
            v.push(Piece::new(Suit::Honor, rank));
        }
        v
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Suit::Man => write!(f, "{}m", self.rank),
            Suit::Pin => write!(f, "{}p", self.rank),
            Suit::Sou => write!(f, "{}s", self.rank),
            Suit::Honor => write!(f, "{}", HONOR_CODES[self.rank as usize]),
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::str::FromStr for Piece {
    type Err = InvalidTileCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rank) = HONOR_CODES.iter().position(|&c| c == s) {
            return Ok(Piece::new(Suit::Honor, rank as Rank));
        }

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(InvalidTileCode(s.to_string()));
        }
        let rank = match chars[0].to_digit(10) {
            Some(n) if n >= 1 => n as Rank,
            _ => return Err(InvalidTileCode(s.to_string())),
        };
        let suit = match chars[1] {
            'm' => Suit::Man,
            'p' => Suit::Pin,
            's' => Suit::Sou,
            _ => return Err(InvalidTileCode(s.to_string())),
        };
        Ok(Piece::new(suit, rank))
    }
}

// 無効な牌コード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTileCode(pub String);

impl fmt::Display for InvalidTileCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tile code: '{}'", self.0)
    }
}

impl std::error::Error for InvalidTileCode {}

fn is_false(b: &bool) -> bool {
    !*b
}
