// 卓表示用のデータモデル
mod define;
mod player;
mod seat;
mod stage;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use player::*;
pub use seat::*;
pub use stage::*;
pub use tile::*;
