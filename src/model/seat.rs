use super::*;

// 座席(風) 手番順は 東 → 南 → 西 → 北 の循環
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    East,
    South,
    West,
    North,
}

pub const SEATS: [Seat; SEAT] = [Seat::East, Seat::South, Seat::West, Seat::North];

impl Default for Seat {
    fn default() -> Self {
        Self::East
    }
}

impl Seat {
    // 次の座席 (手番順)
    pub fn next(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
            Self::North => Self::East,
        }
    }

    // 下家
    #[inline]
    pub fn right(self) -> Self {
        self.next()
    }

    // 対面
    #[inline]
    pub fn opposite(self) -> Self {
        self.next().next()
    }

    // 上家
    #[inline]
    pub fn left(self) -> Self {
        self.next().next().next()
    }

    // 風牌
    pub fn tile(self) -> Piece {
        let rank = match self {
            Self::East => WE,
            Self::South => WS,
            Self::West => WW,
            Self::North => WN,
        };
        Piece::new(Suit::Honor, rank)
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
            Self::North => "North",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Seat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "east" => Ok(Self::East),
            "south" => Ok(Self::South),
            "west" => Ok(Self::West),
            "north" => Ok(Self::North),
            _ => Err(format!("unknown seat: '{}'", s)),
        }
    }
}

// 視点座席から見た卓の4区画
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatLayout {
    pub perspective: Seat, // 手前
    pub right: Seat,       // 下家
    pub opposite: Seat,    // 対面
    pub left: Seat,        // 上家
}

impl SeatLayout {
    pub fn of(perspective: Seat) -> Self {
        Self {
            perspective,
            right: perspective.right(),
            opposite: perspective.opposite(),
            left: perspective.left(),
        }
    }

    pub fn seats(&self) -> [Seat; SEAT] {
        [self.perspective, self.right, self.opposite, self.left]
    }
}
