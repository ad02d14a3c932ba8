use super::*;
use crate::util::misc::vec_to_string;

// プレイヤー情報
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub username: String,     // 表示名
    pub points: Score,        // 持ち点
    pub hand: Vec<Piece>,     // 手牌
    pub discards: Vec<Piece>, // 捨て牌一覧
    pub is_shown: bool,       // 手牌が見えるかどうか
}

impl Player {
    pub fn new(username: &str, points: Score) -> Self {
        Self {
            username: username.to_string(),
            points,
            ..Self::default()
        }
    }

    // 表示用の手牌 伏せている場合はすべて裏向き
    pub fn visible_hand(&self) -> Vec<Piece> {
        if self.is_shown {
            self.hand.clone()
        } else {
            vec![BACK; self.hand.len()]
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.username, self.points)?;
        writeln!(f, "hand: {}", vec_to_string(&self.visible_hand()))?;
        write!(f, "discards: {}", vec_to_string(&self.discards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concealed_hand_leaks_nothing() {
        let mut player = Player::new("test", 25000);
        player.hand = vec!["1m".parse().unwrap(), "east".parse().unwrap()];
        assert_eq!(player.visible_hand(), vec![BACK, BACK]);

        player.is_shown = true;
        assert_eq!(player.visible_hand(), player.hand);
    }
}
