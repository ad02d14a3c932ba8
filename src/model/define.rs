// 型エイリアス
pub type Rank = u8; // 牌の数字部分 (数牌:1~9, 字牌:0~6)
pub type Score = i32; // 得点

// Number
pub const SEAT: usize = 4; // 座席の数
pub const RANKS: usize = 9; // 数牌の数字の数 (1~9)
pub const HONORS: usize = 7; // 字牌の種類数
pub const MAX_DORA_INDICATORS: usize = 5; // ドラ表示牌の枠数

// 字牌のRank Index (表示順: 三元牌, 風牌)
pub const DR: Rank = 0; // Doragon: Red   (中)
pub const DW: Rank = 1; // Doragon: White (白)
pub const DG: Rank = 2; // Doragon: Green (發)
pub const WN: Rank = 3; // Wind:    North (北)
pub const WS: Rank = 4; // Wind:    South (南)
pub const WE: Rank = 5; // Wind:    East  (東)
pub const WW: Rank = 6; // Wind:    West  (西)
